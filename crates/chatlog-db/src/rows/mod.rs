//! Dynamic row decoding
//!
//! The archive table's shape is unknown at compile time, so rows are
//! decoded column by column from the driver's type information into plain
//! JSON. Timestamps are rendered in the millisecond RFC 3339 form the
//! previous incarnation of this service emitted, which the bundled front
//! end and downstream consumers already parse.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde_json::{Map, Value};
use sqlx::postgres::PgRow;
use sqlx::{Column, Row, TypeInfo};
use tracing::debug;
use uuid::Uuid;

/// Converts one row into a JSON object keyed by column name.
pub fn row_to_json(row: &PgRow) -> Map<String, Value> {
    let mut object = Map::new();
    for column in row.columns() {
        let value = decode_column(row, column.ordinal(), column.type_info().name());
        object.insert(column.name().to_string(), value);
    }
    object
}

/// `2024-01-01T00:00:00.000Z`, matching JavaScript's `toISOString`.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Decodes a single column, falling back to JSON null for SQL NULL, for
/// types with no JSON mapping, and for decode failures.
fn decode_column(row: &PgRow, index: usize, type_name: &str) -> Value {
    let decoded = match type_name {
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" | "CITEXT" => row
            .try_get::<Option<String>, _>(index)
            .map(|v| v.map_or(Value::Null, Value::String)),
        "INT2" => row
            .try_get::<Option<i16>, _>(index)
            .map(|v| v.map_or(Value::Null, Value::from)),
        "INT4" => row
            .try_get::<Option<i32>, _>(index)
            .map(|v| v.map_or(Value::Null, Value::from)),
        "INT8" => row
            .try_get::<Option<i64>, _>(index)
            .map(|v| v.map_or(Value::Null, Value::from)),
        "FLOAT4" => row
            .try_get::<Option<f32>, _>(index)
            .map(|v| v.map_or(Value::Null, |n| Value::from(f64::from(n)))),
        "FLOAT8" => row
            .try_get::<Option<f64>, _>(index)
            .map(|v| v.map_or(Value::Null, Value::from)),
        "BOOL" => row
            .try_get::<Option<bool>, _>(index)
            .map(|v| v.map_or(Value::Null, Value::Bool)),
        "TIMESTAMPTZ" => row
            .try_get::<Option<DateTime<Utc>>, _>(index)
            .map(|v| v.map_or(Value::Null, |ts| Value::String(format_timestamp(ts)))),
        "TIMESTAMP" => row
            .try_get::<Option<NaiveDateTime>, _>(index)
            .map(|v| {
                v.map_or(Value::Null, |ts| {
                    Value::String(ts.format("%Y-%m-%dT%H:%M:%S%.3f").to_string())
                })
            }),
        "DATE" => row
            .try_get::<Option<NaiveDate>, _>(index)
            .map(|v| v.map_or(Value::Null, |d| Value::String(d.to_string()))),
        "TIME" => row
            .try_get::<Option<NaiveTime>, _>(index)
            .map(|v| v.map_or(Value::Null, |t| Value::String(t.to_string()))),
        "UUID" => row
            .try_get::<Option<Uuid>, _>(index)
            .map(|v| v.map_or(Value::Null, |u| Value::String(u.to_string()))),
        "JSON" | "JSONB" => row
            .try_get::<Option<Value>, _>(index)
            .map(|v| v.unwrap_or(Value::Null)),
        other => {
            debug!(column_type = other, "no JSON mapping for column type, emitting null");
            return Value::Null;
        }
    };

    decoded.unwrap_or_else(|error| {
        debug!(%error, index, "failed to decode column, emitting null");
        Value::Null
    })
}
