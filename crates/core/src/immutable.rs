//! Write-once attributes for immutable data objects.

use std::sync::OnceLock;

use crate::data_object::DataObject;
use crate::error::{DataObjectError, DataObjectResult};
use crate::value::{FromValue, Value};

/// A field that can be assigned exactly once.
///
/// The check and the assignment are a single atomic step, so two racing
/// writers cannot both succeed. This holds for writes made by constructor code
/// as well: a constructor that assigns the same field twice fails.
pub struct WriteOnce<T> {
    cell: OnceLock<T>,
}

impl<T> WriteOnce<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// First write succeeds; every later write fails with
    /// [`DataObjectError::ImmutableObjectViolation`] naming `name`.
    pub fn set(&self, name: &str, value: T) -> DataObjectResult<()> {
        self.cell.set(value).map_err(|_| {
            tracing::debug!(attribute = name, "rejected write to immutable attribute");
            DataObjectError::immutable(name)
        })
    }

    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_set(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T: FromValue> WriteOnce<T> {
    /// Assign from a loose value.
    ///
    /// An already-set field reports the violation even when `value` would not
    /// convert.
    pub fn assign(&self, name: &str, value: Value) -> DataObjectResult<()> {
        if self.is_set() {
            tracing::debug!(attribute = name, "rejected write to immutable attribute");
            return Err(DataObjectError::immutable(name));
        }
        let value = T::from_value(value)
            .map_err(|found| DataObjectError::type_mismatch(name, T::expected(), found.kind()))?;
        self.set(name, value)
    }
}

impl<T> Default for WriteOnce<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for WriteOnce<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for WriteOnce<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.cell.get() {
            Some(value) => f.debug_tuple("WriteOnce").field(value).finish(),
            None => f.write_str("WriteOnce(<unset>)"),
        }
    }
}

/// A data object whose attributes can each be written once.
///
/// `assign` is the by-name write path. It fails with
/// [`DataObjectError::ImmutableObjectViolation`] for any attribute that already
/// holds a value and with [`DataObjectError::UnknownAttribute`] for names the
/// type does not declare.
pub trait ImmutableDataObject: DataObject {
    fn assign(&self, name: &str, value: Value) -> DataObjectResult<()>;
}
