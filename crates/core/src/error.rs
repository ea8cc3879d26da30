//! Data object error model.

use thiserror::Error;

/// Result type used across the data object layer.
pub type DataObjectResult<T> = Result<T, DataObjectError>;

/// Data object error.
///
/// Every variant is fatal to the call that produced it. Nothing here is retried
/// or recovered internally; the error goes straight back to the host code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataObjectError {
    /// A required constructor parameter had no value, no default, and null
    /// binding was not requested.
    #[error("constructor argument '{0}' not found")]
    ConstructorArgumentNotFound(String),

    /// A write-once attribute was written a second time.
    #[error("changing attribute '{0}' not permitted for immutable object")]
    ImmutableObjectViolation(String),

    /// Strict equality was asked to compare against something without an
    /// attribute view.
    #[error("object {0} has no as_json view")]
    NoValidDataObject(String),

    /// A bound value could not be converted into the field's Rust type.
    #[error("attribute '{attribute}' expected {expected}, found {found}")]
    AttributeTypeMismatch {
        attribute: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A by-name write targeted an attribute the type does not declare.
    #[error("unknown attribute '{0}'")]
    UnknownAttribute(String),

    /// The configured encoder cannot render a value as JSON.
    #[error("{0} is not JSON serializable")]
    NotSerializable(String),
}

impl DataObjectError {
    pub fn argument_not_found(name: impl Into<String>) -> Self {
        Self::ConstructorArgumentNotFound(name.into())
    }

    pub fn immutable(name: impl Into<String>) -> Self {
        Self::ImmutableObjectViolation(name.into())
    }

    pub fn no_valid_data_object(description: impl Into<String>) -> Self {
        Self::NoValidDataObject(description.into())
    }

    pub fn type_mismatch(
        attribute: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::AttributeTypeMismatch {
            attribute: attribute.into(),
            expected,
            found,
        }
    }

    pub fn unknown_attribute(name: impl Into<String>) -> Self {
        Self::UnknownAttribute(name.into())
    }

    pub fn not_serializable(value: impl Into<String>) -> Self {
        Self::NotSerializable(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_attribute() {
        assert_eq!(
            DataObjectError::argument_not_found("foo").to_string(),
            "constructor argument 'foo' not found"
        );
        assert_eq!(
            DataObjectError::immutable("bar").to_string(),
            "changing attribute 'bar' not permitted for immutable object"
        );
        assert_eq!(
            DataObjectError::type_mismatch("count", "integer", "string").to_string(),
            "attribute 'count' expected integer, found string"
        );
    }
}
