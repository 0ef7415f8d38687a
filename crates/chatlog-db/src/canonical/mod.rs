//! Canonical message envelope
//!
//! The legacy export promises a fixed shape regardless of what the archive
//! table actually looks like. Each alias field is resolved through an
//! explicit candidate list, most preferred first, and then the raw row is
//! merged in on top. The merge order matters and is kept from the previous
//! incarnation of this service: a raw column that shares a name with an
//! alias field overwrites the alias, so consumers keyed to the original
//! behavior see identical output.

use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::rows::format_timestamp;

/// Candidates for the envelope timestamp, most preferred first.
const TIMESTAMP_VALUES: &[&str] = &[
    "created_at",
    "timestamp",
    "created",
    "inserted_at",
    "time",
    "date",
];

/// Candidates for the message kind.
const TYPE: &[&str] = &["type"];

/// Candidates for the author display name.
const AUTHOR: &[&str] = &["author", "user_id", "username"];

/// Candidates for the message body.
const MESSAGE: &[&str] = &["message", "content", "text"];

/// Candidates for the in-world player name.
const PLAYER_NAME: &[&str] = &["player_name", "author", "username"];

/// Candidates for the room the message was sent in.
const ROOM_ID: &[&str] = &["room_id"];

/// Candidates for the author's stable id.
const AUTHOR_ID: &[&str] = &["author_id", "user_id"];

/// The fixed envelope of the legacy export.
#[derive(Debug, Clone, Serialize)]
pub struct CanonicalMessage {
    pub timestamp: Value,
    #[serde(rename = "rawData")]
    pub raw_data: Map<String, Value>,
}

/// Normalizes one decoded row into the canonical envelope.
pub fn canonicalize(row: Map<String, Value>) -> CanonicalMessage {
    let timestamp = first_present(&row, TIMESTAMP_VALUES)
        .cloned()
        .unwrap_or_else(|| Value::String(format_timestamp(Utc::now())));

    let mut raw_data = Map::new();
    raw_data.insert(
        "type".to_string(),
        alias(&row, TYPE, Value::String("chat".to_string())),
    );
    raw_data.insert(
        "author".to_string(),
        alias(&row, AUTHOR, Value::String("Unknown".to_string())),
    );
    raw_data.insert(
        "message".to_string(),
        alias(&row, MESSAGE, Value::String(String::new())),
    );
    raw_data.insert(
        "playerName".to_string(),
        alias(&row, PLAYER_NAME, Value::Null),
    );
    raw_data.insert("roomId".to_string(), alias(&row, ROOM_ID, Value::Null));
    raw_data.insert("authorId".to_string(), alias(&row, AUTHOR_ID, Value::Null));

    // Raw columns merge last and win name collisions.
    for (column, value) in row {
        raw_data.insert(column, value);
    }

    CanonicalMessage { timestamp, raw_data }
}

fn alias(row: &Map<String, Value>, candidates: &[&str], fallback: Value) -> Value {
    first_present(row, candidates).cloned().unwrap_or(fallback)
}

/// A column contributes a value when it exists, is non-null, and, for
/// strings, is non-empty. Numeric zero and `false` count as present.
fn present<'a>(row: &'a Map<String, Value>, column: &str) -> Option<&'a Value> {
    match row.get(column) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(value) => Some(value),
    }
}

fn first_present<'a>(row: &'a Map<String, Value>, candidates: &[&str]) -> Option<&'a Value> {
    candidates
        .iter()
        .find_map(|candidate| present(row, candidate))
}
