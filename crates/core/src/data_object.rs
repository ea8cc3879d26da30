//! The data object trait: construction from a mapping, copy, and equality.

use serde::{Deserialize, Serialize};

use crate::binder::{self, BoundArguments, MissingArguments};
use crate::error::{DataObjectError, DataObjectResult};
use crate::introspect::{AsJson, AttributeMap, Comparand};
use crate::signature::Signature;

/// How [`DataObject::equals`] treats a comparand without an attribute view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EqualityStrategy {
    /// Not equal.
    #[default]
    Lenient,
    /// Fail with [`DataObjectError::NoValidDataObject`].
    Strict,
}

/// A value-style object whose public attributes are its identity.
///
/// Implementors declare their constructor [`Signature`] and how to build
/// themselves from [`BoundArguments`]; everything else is provided. The
/// [`crate::data_object!`] macro writes both for plain structs.
///
/// A specialized type that reuses a base type's constructor simply returns the
/// base's signature (or extends it) from [`DataObject::signature`].
pub trait DataObject: AsJson + Sized {
    const EQUALITY: EqualityStrategy = EqualityStrategy::Lenient;

    /// Formal constructor parameters, in declaration order.
    fn signature() -> Signature;

    /// Invoke the constructor with arguments bound by name.
    fn construct(args: BoundArguments) -> DataObjectResult<Self>;

    fn from_dict(params: &AttributeMap, missing: MissingArguments) -> DataObjectResult<Self> {
        let args = binder::bind(&Self::signature(), params, missing)?;
        Self::construct(args)
    }

    /// Rebuild `self` through [`DataObject::from_dict`] with `overrides`
    /// layered over the current attributes. Overrides that match no
    /// constructor parameter are dropped.
    fn copy(&self, overrides: AttributeMap) -> DataObjectResult<Self> {
        let mut attributes = self.as_json();
        attributes.extend(overrides);
        Self::from_dict(&attributes, MissingArguments::Reject)
    }

    /// Structural equality against any comparand.
    ///
    /// Two objects of different concrete types are equal when their attribute
    /// mappings are. `other` may be unsized, so a `&dyn AsJson` taken out of a
    /// heterogeneous collection compares directly.
    fn equals<C: Comparand + ?Sized>(&self, other: &C) -> DataObjectResult<bool> {
        match other.attribute_view() {
            Some(attributes) => Ok(self.as_json() == attributes),
            None => match Self::EQUALITY {
                EqualityStrategy::Lenient => Ok(false),
                EqualityStrategy::Strict => {
                    let description = other.describe();
                    tracing::debug!(
                        type_name = self.type_name(),
                        other = %description,
                        "strict equality against object without attribute view"
                    );
                    Err(DataObjectError::no_valid_data_object(description))
                }
            },
        }
    }

    fn not_equals<C: Comparand + ?Sized>(&self, other: &C) -> DataObjectResult<bool> {
        self.equals(other).map(|equal| !equal)
    }
}
