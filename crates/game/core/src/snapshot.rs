//! JSON snapshot codec for [`CharacterState`].
//!
//! The snapshot shape is the saved-data format: Swedish attribute and
//! desensitization keys, camelCase fields. Missing fields take their fresh
//! values, so partial snapshots from older saves still load.

use serde::Deserialize;
use serde_json::Value;

use crate::error::SnapshotError;
use crate::state::{CharacterState, create_initial_state};

/// Strict decode. Chunk ownership is reconciled for snapshots that predate
/// the `chunkAssignments` map.
pub fn parse_state(snapshot: &Value) -> Result<CharacterState, SnapshotError> {
    if !snapshot.is_object() {
        return Err(SnapshotError::NotAnObject {
            found: json_kind(snapshot),
        });
    }
    let mut state = CharacterState::deserialize(snapshot)?;
    state.reconcile_chunk_assignments();
    Ok(state)
}

pub fn parse_state_str(snapshot: &str) -> Result<CharacterState, SnapshotError> {
    let value: Value = serde_json::from_str(snapshot)?;
    parse_state(&value)
}

/// Lenient decode: anything that does not parse yields a fresh state.
pub fn load_state(snapshot: &Value) -> CharacterState {
    parse_state(snapshot).unwrap_or_else(|_| create_initial_state())
}

pub fn load_state_str(snapshot: &str) -> CharacterState {
    parse_state_str(snapshot).unwrap_or_else(|_| create_initial_state())
}

pub fn serialize(state: &CharacterState) -> Result<Value, SnapshotError> {
    Ok(serde_json::to_value(state)?)
}

pub fn to_json_string(state: &CharacterState) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(state)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
