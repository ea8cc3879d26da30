//! Constructor signature descriptors.
//!
//! Rust cannot enumerate a constructor's parameters at runtime, so every data
//! object type declares them up front: parameter names in declaration order,
//! each with an optional default. The receiver never appears in the table.

use crate::value::Value;

/// One formal constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: &'static str,
    default: Option<Value>,
}

impl Parameter {
    pub fn required(name: &'static str) -> Self {
        Self { name, default: None }
    }

    pub fn with_default(name: &'static str, default: impl Into<Value>) -> Self {
        Self {
            name,
            default: Some(default.into()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

/// Ordered formal parameter list of a data object constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    parameters: Vec<Parameter>,
}

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    ///
    /// Redeclaring an existing name replaces that parameter in place, which is
    /// how a specialized type changes a default it inherited from its base.
    pub fn param(mut self, name: &'static str, default: Option<Value>) -> Self {
        let parameter = Parameter { name, default };
        match self.parameters.iter_mut().find(|p| p.name == name) {
            Some(existing) => *existing = parameter,
            None => self.parameters.push(parameter),
        }
        self
    }

    pub fn required(self, name: &'static str) -> Self {
        self.param(name, None)
    }

    pub fn optional(self, name: &'static str, default: impl Into<Value>) -> Self {
        self.param(name, Some(default.into()))
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.parameters.iter().map(|p| p.name)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}
