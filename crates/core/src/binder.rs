//! Constructor binder: matches a loose mapping against a [`Signature`].

use serde::{Deserialize, Serialize};

use crate::error::{DataObjectError, DataObjectResult};
use crate::introspect::AttributeMap;
use crate::signature::Signature;
use crate::value::{FromValue, Value};

/// What to do with a required parameter the mapping does not supply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingArguments {
    /// Fail with [`DataObjectError::ConstructorArgumentNotFound`].
    #[default]
    Reject,
    /// Bind [`Value::Null`] instead.
    BindNull,
}

impl MissingArguments {
    pub fn from_flag(none_if_not_found: bool) -> Self {
        if none_if_not_found {
            Self::BindNull
        } else {
            Self::Reject
        }
    }
}

/// Resolved constructor arguments, keyed by parameter name.
///
/// Arguments keep the signature's declaration order. Each one can be taken
/// exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundArguments {
    arguments: Vec<(&'static str, Option<Value>)>,
}

impl BoundArguments {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.arguments
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Move the argument out, converted into the field's type.
    pub fn take<T: FromValue>(&mut self, name: &str) -> DataObjectResult<T> {
        let value = self
            .arguments
            .iter_mut()
            .find(|(n, _)| *n == name)
            .and_then(|(_, v)| v.take())
            .ok_or_else(|| DataObjectError::argument_not_found(name))?;

        T::from_value(value)
            .map_err(|found| DataObjectError::type_mismatch(name, T::expected(), found.kind()))
    }

    /// Arguments not yet taken, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> + '_ {
        self.arguments
            .iter()
            .filter_map(|(n, v)| v.as_ref().map(|v| (*n, v)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolve every formal parameter of `signature` from `params`.
///
/// Per parameter, in order: the supplied value, else the declared default, else
/// null when `missing` is [`MissingArguments::BindNull`], else an error naming
/// the parameter. Keys that match no parameter are ignored.
pub fn bind(
    signature: &Signature,
    params: &AttributeMap,
    missing: MissingArguments,
) -> DataObjectResult<BoundArguments> {
    let mut arguments = Vec::with_capacity(signature.len());

    for parameter in signature.parameters() {
        let name = parameter.name();
        let value = if let Some(value) = params.get(name) {
            value.clone()
        } else if let Some(default) = parameter.default() {
            tracing::trace!(parameter = name, "binding declared default");
            default.clone()
        } else if missing == MissingArguments::BindNull {
            tracing::trace!(parameter = name, "binding null for missing argument");
            Value::Null
        } else {
            tracing::debug!(parameter = name, "required constructor argument missing");
            return Err(DataObjectError::argument_not_found(name));
        };
        arguments.push((name, Some(value)));
    }

    for key in params.keys().filter(|k| !signature.contains(k)) {
        tracing::trace!(key = %key, "ignoring key with no matching parameter");
    }

    Ok(BoundArguments { arguments })
}
