//! `data-object-core` — value-style data objects.
//!
//! A data object is identified by its public attributes: equality, hashing,
//! display and JSON output are all derived from one attribute mapping
//! ([`AsJson::as_json`]), and instances can be rebuilt from a loose mapping by
//! matching keys against a declared constructor [`Signature`]
//! ([`DataObject::from_dict`]). [`ImmutableDataObject`] adds write-once
//! attributes on top.

pub mod binder;
pub mod data_object;
pub mod encoder;
pub mod error;
pub mod identity;
pub mod immutable;
pub mod introspect;
mod macros;
pub mod signature;
pub mod value;

pub use binder::{BoundArguments, MissingArguments};
pub use data_object::{DataObject, EqualityStrategy};
pub use encoder::{DataObjectJsonEncoder, JsonEncoder, PlainJsonEncoder};
pub use error::{DataObjectError, DataObjectResult};
pub use immutable::{ImmutableDataObject, WriteOnce};
pub use introspect::{AsJson, AttributeMap, Comparand, Opaque};
pub use signature::{Parameter, Signature};
pub use value::{Choice, FromValue, Value};
