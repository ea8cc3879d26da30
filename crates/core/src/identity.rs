//! Hashing and string forms derived from an attribute mapping.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::introspect::AttributeMap;

/// XOR fold (from zero) of the hash of every `"name:value"` pair.
///
/// XOR is commutative and associative, so the result does not depend on the
/// order attributes were assigned or declared in.
pub fn hash_attributes(attributes: &AttributeMap) -> u64 {
    attributes
        .iter()
        .map(|(name, value)| {
            let mut hasher = DefaultHasher::new();
            format!("{name}:{value}").hash(&mut hasher);
            hasher.finish()
        })
        .fold(0, |acc, h| acc ^ h)
}

/// `TypeName: {"k1": v1, "k2": v2}` with keys in ascending order.
pub fn display(type_name: &str, attributes: &AttributeMap) -> String {
    let pairs: Vec<String> = attributes
        .iter()
        .map(|(name, value)| format!("\"{name}\": {value}"))
        .collect();
    format!("{type_name}: {{{}}}", pairs.join(", "))
}

/// `TypeName(k1=v1, k2=v2)` with keys in ascending order.
pub fn debug_display(type_name: &str, attributes: &AttributeMap) -> String {
    let pairs: Vec<String> = attributes
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    format!("{type_name}({})", pairs.join(", "))
}
