//! Error infrastructure for eon-core.
//!
//! Rule problems never surface as errors: edits are clamped and rule
//! violations are reported by [`crate::validation`]. Errors are reserved for
//! input that cannot be turned into a [`crate::CharacterState`] at all.

/// How a caller is expected to handle an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Stored data went bad; discard it and continue from a fresh state.
    Recoverable,

    /// The caller handed over something that is not a snapshot at all.
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for eon-core errors.
pub trait ChargenError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier of the variant, for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Failure to read or write a JSON snapshot.
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot is not valid JSON or does not match the character shape: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot root must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

#[cfg(feature = "serde")]
impl ChargenError for SnapshotError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Json(_) => ErrorSeverity::Recoverable,
            Self::NotAnObject { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Json(_) => "SNAPSHOT_JSON",
            Self::NotAnObject { .. } => "SNAPSHOT_NOT_AN_OBJECT",
        }
    }
}
