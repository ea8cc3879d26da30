//! Pluggable JSON encoding of attribute values.
//!
//! An encoder renders JSON-native values (null, bool, numbers, strings, lists,
//! maps) itself and hands every other value to [`JsonEncoder::fallback`]. The
//! base behaviour of `fallback` is to refuse, so an encoder that knows nothing
//! about temporal or enumerated values fails on them instead of guessing.

use std::io;

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::{DataObjectError, DataObjectResult};
use crate::value::Value;

pub trait JsonEncoder: Send + Sync {
    /// Render a value that has no native JSON form.
    fn fallback(&self, value: &Value) -> DataObjectResult<JsonValue> {
        Err(reject(value))
    }

    fn encode(&self, value: &Value) -> DataObjectResult<JsonValue> {
        encode_native(self, value)
    }
}

/// Default encoder: temporal values as ISO-8601 strings, choices as their
/// scalar value.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataObjectJsonEncoder;

impl JsonEncoder for DataObjectJsonEncoder {
    fn fallback(&self, value: &Value) -> DataObjectResult<JsonValue> {
        match value {
            Value::DateTime(dt) => Ok(JsonValue::String(
                dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
            )),
            Value::Date(d) => Ok(JsonValue::String(d.format("%Y-%m-%d").to_string())),
            Value::Timestamp(ts) => Ok(JsonValue::String(ts.to_rfc3339())),
            Value::Choice(choice) => self.encode(&choice.value),
            other => Err(reject(other)),
        }
    }
}

/// Encoder that only knows JSON-native values.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainJsonEncoder;

impl JsonEncoder for PlainJsonEncoder {}

fn reject(value: &Value) -> DataObjectError {
    DataObjectError::not_serializable(format!("{} `{}`", value.kind(), value))
}

fn encode_native<E: JsonEncoder + ?Sized>(encoder: &E, value: &Value) -> DataObjectResult<JsonValue> {
    match value {
        Value::Null => Ok(JsonValue::Null),
        Value::Bool(b) => Ok(JsonValue::Bool(*b)),
        Value::Int(i) => Ok(JsonValue::from(*i)),
        Value::Float(x) => serde_json::Number::from_f64(*x)
            .map(JsonValue::Number)
            .ok_or_else(|| reject(value)),
        Value::Str(s) => Ok(JsonValue::String(s.clone())),
        Value::List(items) => items
            .iter()
            .map(|item| encoder.encode(item))
            .collect::<DataObjectResult<Vec<_>>>()
            .map(JsonValue::Array),
        Value::Map(entries) => {
            let mut object = serde_json::Map::new();
            for (key, item) in entries {
                object.insert(key.clone(), encoder.encode(item)?);
            }
            Ok(JsonValue::Object(object))
        }
        Value::DateTime(_) | Value::Date(_) | Value::Timestamp(_) | Value::Choice(_) => {
            encoder.fallback(value)
        }
    }
}

/// `", "` between items and `": "` between key and value.
struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serialize with [`SpacedFormatter`].
pub fn to_spaced_string(json: &JsonValue) -> DataObjectResult<String> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    json.serialize(&mut serializer)
        .map_err(|e| DataObjectError::not_serializable(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| DataObjectError::not_serializable(e.to_string()))
}
