//! This module defines [Primitive] terms and [Variable]s.

use std::fmt::Display;

use remora_physical::datavalues::{AnyDataValue, DataValue};

/// Variable
///
/// A placeholder that can be bound to any value.
/// Variables are scoped to a single rule;
/// distinct rules do not share bindings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(String);

impl Variable {
    /// Create a new [Variable] with the given name.
    pub fn new(name: &str) -> Self {
        Self(name.to_owned())
    }

    /// Return the name of the variable.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "?{}", self.0)
    }
}

/// Primitive term
///
/// Either a ground value or a [Variable].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primitive {
    /// A concrete data value
    Ground(AnyDataValue),
    /// A variable
    Variable(Variable),
}

impl Primitive {
    /// Return whether this term is ground.
    pub fn is_ground(&self) -> bool {
        matches!(self, Primitive::Ground(_))
    }

    /// Return the contained value, if this term is ground.
    pub fn value(&self) -> Option<&AnyDataValue> {
        match self {
            Primitive::Ground(value) => Some(value),
            Primitive::Variable(_) => None,
        }
    }

    /// Return the contained variable, if this term is a variable.
    pub fn variable(&self) -> Option<&Variable> {
        match self {
            Primitive::Ground(_) => None,
            Primitive::Variable(variable) => Some(variable),
        }
    }
}

impl Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Primitive::Ground(value) => f.write_str(&value.canonical_string()),
            Primitive::Variable(variable) => variable.fmt(f),
        }
    }
}

impl From<AnyDataValue> for Primitive {
    fn from(value: AnyDataValue) -> Self {
        Self::Ground(value)
    }
}

impl From<Variable> for Primitive {
    fn from(value: Variable) -> Self {
        Self::Variable(value)
    }
}

impl From<i64> for Primitive {
    fn from(value: i64) -> Self {
        Self::Ground(AnyDataValue::new_integer_from_i64(value))
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Self::Ground(AnyDataValue::new_string(value.to_owned()))
    }
}
