//! Attribute introspection: the single source of truth for identity and display.

use std::collections::BTreeMap;

use crate::encoder::{self, DataObjectJsonEncoder, JsonEncoder};
use crate::error::DataObjectResult;
use crate::identity;
use crate::value::Value;

/// Name → value view of an object's public state.
///
/// Keys iterate in ascending lexicographic order, which is the order every
/// rendering of the mapping uses.
pub type AttributeMap = BTreeMap<String, Value>;

/// The introspection capability every conforming object exposes.
///
/// `as_json` must list exactly the attributes that make up the object's
/// identity. Internal state (caches, derived values) is left out of the mapping,
/// and so is per-type configuration such as [`AsJson::json_encoder`].
///
/// All the provided methods are derived from `as_json`, so equality, hashing,
/// display and JSON output can never disagree with each other.
pub trait AsJson {
    /// Concrete runtime type name, used as the display prefix.
    fn type_name(&self) -> &str;

    /// Snapshot of the public attributes.
    fn as_json(&self) -> AttributeMap;

    /// Encoder used by [`AsJson::to_json`]. Override per type to change how
    /// non-native values are rendered.
    fn json_encoder(&self) -> &dyn JsonEncoder {
        &DataObjectJsonEncoder
    }

    /// `TypeName: {"k1": v1, "k2": v2}`
    fn to_display_string(&self) -> String {
        identity::display(self.type_name(), &self.as_json())
    }

    /// `TypeName(k1=v1, k2=v2)`
    fn to_debug_string(&self) -> String {
        identity::debug_display(self.type_name(), &self.as_json())
    }

    /// Order-independent hash of the attribute mapping.
    fn hash_code(&self) -> u64 {
        identity::hash_attributes(&self.as_json())
    }

    /// Attribute mapping rendered through the type's encoder.
    fn to_json(&self) -> DataObjectResult<serde_json::Value> {
        self.json_encoder().encode(&Value::Map(self.as_json()))
    }

    /// JSON text with sorted keys, e.g. `{"bar": "y", "foo": "x"}`.
    fn to_json_string(&self) -> DataObjectResult<String> {
        encoder::to_spaced_string(&self.to_json()?)
    }
}

impl PartialEq for dyn AsJson + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.as_json() == other.as_json()
    }
}

impl Eq for dyn AsJson + '_ {}

impl core::hash::Hash for dyn AsJson + '_ {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl core::fmt::Display for dyn AsJson + '_ {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl core::fmt::Debug for dyn AsJson + '_ {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_debug_string())
    }
}

/// Anything a data object can be compared against.
///
/// Conforming objects answer with their attribute view; everything else answers
/// `None`, and the comparing type's [`crate::EqualityStrategy`] decides what
/// that means.
pub trait Comparand {
    fn attribute_view(&self) -> Option<AttributeMap>;

    /// Description used in error messages.
    fn describe(&self) -> String;
}

impl<T: AsJson + ?Sized> Comparand for T {
    fn attribute_view(&self) -> Option<AttributeMap> {
        Some(self.as_json())
    }

    fn describe(&self) -> String {
        self.to_debug_string()
    }
}

/// A loose value has no attribute view of its own.
impl Comparand for Value {
    fn attribute_view(&self) -> Option<AttributeMap> {
        None
    }

    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

/// Wraps an arbitrary value that does not expose an attribute view.
#[derive(Debug, Clone, PartialEq)]
pub struct Opaque<T>(pub T);

impl<T: core::fmt::Debug> Comparand for Opaque<T> {
    fn attribute_view(&self) -> Option<AttributeMap> {
        None
    }

    fn describe(&self) -> String {
        format!("{:?}", self.0)
    }
}
