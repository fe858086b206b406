//! This module defines [Substitution].

use std::collections::HashMap;

use remora_physical::datavalues::AnyDataValue;

use super::components::term::{Primitive, Variable};

/// Map from [Variable]s to [AnyDataValue]s
/// that assigns concrete values to the variables of a single rule
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Substitution {
    map: HashMap<Variable, AnyDataValue>,
}

impl Substitution {
    /// Create a new [Substitution].
    pub fn new<From, To, Iterator>(iter: Iterator) -> Self
    where
        From: Into<Variable>,
        To: Into<AnyDataValue>,
        Iterator: IntoIterator<Item = (From, To)>,
    {
        Self {
            map: iter
                .into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
        }
    }

    /// Add a new mapping.
    pub fn insert(&mut self, variable: Variable, value: AnyDataValue) {
        self.map.insert(variable, value);
    }

    /// Return the value bound to the given variable, if any.
    pub fn get(&self, variable: &Variable) -> Option<&AnyDataValue> {
        self.map.get(variable)
    }

    /// Resolve a term under this substitution.
    ///
    /// A ground term resolves to its value;
    /// a variable resolves to its bound value,
    /// or to `None` if it is unbound.
    pub fn apply(&self, term: &Primitive) -> Option<AnyDataValue> {
        match term {
            Primitive::Ground(value) => Some(value.clone()),
            Primitive::Variable(variable) => self.map.get(variable).cloned(),
        }
    }
}
