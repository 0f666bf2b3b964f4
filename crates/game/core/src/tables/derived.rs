//! Kroppsbyggnad-derived values: Grundrustning (base armor) and Grundskada
//! (base damage).

/// First Kroppsbyggnad value covered by [`KROPPSBYGGNAD_TABLE`].
pub const KROPPSBYGGNAD_MIN: i32 = 4;
/// Last Kroppsbyggnad value covered by [`KROPPSBYGGNAD_TABLE`].
pub const KROPPSBYGGNAD_MAX: i32 = 24;

/// `(Grundrustning, Grundskada)` indexed from [`KROPPSBYGGNAD_MIN`].
pub const KROPPSBYGGNAD_TABLE: [(i32, &str); 21] = [
    (0, "1T6+2"), // 4
    (0, "1T6+2"),
    (0, "1T6+3"),
    (0, "1T6+3"),
    (0, "2T6"), // 8
    (1, "2T6"),
    (1, "2T6+1"),
    (2, "2T6+1"),
    (2, "2T6+2"), // 12
    (3, "2T6+2"),
    (3, "2T6+3"),
    (4, "2T6+3"),
    (4, "3T6"), // 16
    (5, "3T6"),
    (5, "3T6+1"),
    (6, "3T6+1"),
    (6, "3T6+2"), // 20
    (7, "3T6+2"),
    (7, "3T6+3"),
    (8, "3T6+3"),
    (8, "4T6"), // 24
];

/// Grundskada bonus by `(kb - 4) % 4` for values past the table.
pub const GRUNDSKADA_BONUS_PATTERN: [i32; 4] = [2, 2, 3, 3];

/// Table row for `kb`, if covered.
pub fn kroppsbyggnad_row(kb: i32) -> Option<(i32, &'static str)> {
    if !(KROPPSBYGGNAD_MIN..=KROPPSBYGGNAD_MAX).contains(&kb) {
        return None;
    }
    KROPPSBYGGNAD_TABLE
        .get((kb - KROPPSBYGGNAD_MIN) as usize)
        .copied()
}
