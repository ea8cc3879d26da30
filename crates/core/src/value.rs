//! Loosely-typed attribute values.
//!
//! Attribute mappings and constructor arguments carry `Value`s so that a single
//! binder and a single equality/hash/display layer can serve every data object
//! type. Typed struct fields move in and out of this model through `From<T>` and
//! [`FromValue`].

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// A single attribute value.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Naive (zone-less) date and time.
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    /// Zone-aware instant, normalized to UTC.
    Timestamp(DateTime<Utc>),
    /// A member of an enumerated type.
    Choice(Choice),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

/// An enumerated value: which enum, which member, and the member's scalar.
///
/// Renders as `TypeName.MEMBER` in natural string form and as its scalar when
/// encoded to JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub type_name: String,
    pub variant: String,
    pub value: Box<Value>,
}

impl Choice {
    pub fn new(
        type_name: impl Into<String>,
        variant: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            variant: variant.into(),
            value: Box::new(value.into()),
        }
    }
}

impl Value {
    /// Short name of the value's kind, used in conversion errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::DateTime(_) => "datetime",
            Value::Date(_) => "date",
            Value::Timestamp(_) => "timestamp",
            Value::Choice(_) => "choice",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<&Choice> {
        match self {
            Value::Choice(c) => Some(c),
            _ => None,
        }
    }
}

// Floats compare by total order so that `Value` is a lawful `Eq`: NaN equals
// itself and equality stays reflexive.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b).is_eq(),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Timestamp(a), Value::Timestamp(b)) => a == b,
            (Value::Choice(a), Value::Choice(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

/// Natural string form. A top-level string is written bare; strings inside
/// lists and maps are quoted (`['a, b']`, `{'k': 'v'}`) so that distinct
/// containers never render alike.
impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            other => write_nested(f, other),
        }
    }
}

fn write_nested(f: &mut core::fmt::Formatter<'_>, value: &Value) -> core::fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Int(i) => write!(f, "{i}"),
        // Debug keeps the fractional part: `1.0`, not `1`.
        Value::Float(x) => write!(f, "{x:?}"),
        Value::Str(s) => write_quoted(f, s),
        Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S%.f")),
        Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        Value::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S%.f%:z")),
        Value::Choice(c) => write!(f, "{}.{}", c.type_name, c.variant),
        Value::List(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_nested(f, item)?;
            }
            f.write_str("]")
        }
        Value::Map(entries) => {
            f.write_str("{")?;
            for (i, (k, v)) in entries.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_quoted(f, k)?;
                f.write_str(": ")?;
                write_nested(f, v)?;
            }
            f.write_str("}")
        }
    }
}

/// Single quotes unless the text contains one and no double quote.
fn write_quoted(f: &mut core::fmt::Formatter<'_>, s: &str) -> core::fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    write!(f, "{quote}")?;
    for ch in s.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            c if c == quote => write!(f, "\\{c}")?,
            c => write!(f, "{c}")?,
        }
    }
    write!(f, "{quote}")
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::DateTime(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(value)
    }
}

impl From<Choice> for Value {
    fn from(value: Choice) -> Self {
        Value::Choice(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(value: BTreeMap<String, T>) -> Self {
        Value::Map(value.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Conversion from a bound [`Value`] back into a typed field.
///
/// On mismatch the original value is handed back so the caller can report its
/// kind next to the attribute name.
pub trait FromValue: Sized {
    /// Human-readable name of the accepted kind.
    fn expected() -> &'static str;

    fn from_value(value: Value) -> Result<Self, Value>;
}

impl FromValue for Value {
    fn expected() -> &'static str {
        "any value"
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        Ok(value)
    }
}

impl FromValue for bool {
    fn expected() -> &'static str {
        "bool"
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(other),
        }
    }
}

impl FromValue for i64 {
    fn expected() -> &'static str {
        "integer"
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Int(i) => Ok(i),
            other => Err(other),
        }
    }
}

macro_rules! impl_from_value_narrow_integer {
    ($($t:ty),*) => {
        $(
            impl FromValue for $t {
                fn expected() -> &'static str {
                    concat!("integer in range of ", stringify!($t))
                }

                fn from_value(value: Value) -> Result<Self, Value> {
                    match value {
                        Value::Int(i) => <$t>::try_from(i).map_err(|_| Value::Int(i)),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

impl_from_value_narrow_integer!(i8, i16, i32, u8, u16, u32);

impl FromValue for f64 {
    fn expected() -> &'static str {
        "float"
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Float(x) => Ok(x),
            Value::Int(i) => Ok(i as f64),
            other => Err(other),
        }
    }
}

impl FromValue for f32 {
    fn expected() -> &'static str {
        "float representable as f32"
    }

    // Only values that survive the narrowing unchanged are accepted.
    fn from_value(value: Value) -> Result<Self, Value> {
        let wide = match value {
            Value::Float(x) => x,
            Value::Int(i) => i as f64,
            other => return Err(other),
        };
        let narrow = wide as f32;
        if f64::from(narrow).total_cmp(&wide).is_eq() {
            Ok(narrow)
        } else {
            Err(value)
        }
    }
}

impl FromValue for String {
    fn expected() -> &'static str {
        "string"
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl FromValue for NaiveDateTime {
    fn expected() -> &'static str {
        "datetime"
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::DateTime(dt) => Ok(dt),
            other => Err(other),
        }
    }
}

impl FromValue for NaiveDate {
    fn expected() -> &'static str {
        "date"
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Date(d) => Ok(d),
            other => Err(other),
        }
    }
}

impl FromValue for DateTime<Utc> {
    fn expected() -> &'static str {
        "timestamp"
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Timestamp(ts) => Ok(ts),
            other => Err(other),
        }
    }
}

impl FromValue for Choice {
    fn expected() -> &'static str {
        "choice"
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Choice(c) => Ok(c),
            other => Err(other),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn expected() -> &'static str {
        T::expected()
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn expected() -> &'static str {
        "list"
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(other),
        }
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn expected() -> &'static str {
        "map"
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Map(entries) => entries
                .into_iter()
                .map(|(k, v)| T::from_value(v).map(|v| (k, v)))
                .collect(),
            other => Err(other),
        }
    }
}
