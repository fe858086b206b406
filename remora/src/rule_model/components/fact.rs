//! This module defines [Fact].

use std::fmt::Display;

use remora_physical::datavalues::AnyDataValue;

use super::atom::Atom;
use super::tag::Tag;
use super::term::Primitive;

/// A (ground) fact
///
/// Facts are supplied as input to the engine and are immutable afterwards.
/// Groundness is enforced during program validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact(Atom);

impl Fact {
    /// Create a new [Fact].
    pub fn new<Terms>(predicate: &str, terms: Terms) -> Self
    where
        Terms: IntoIterator,
        Terms::Item: Into<Primitive>,
    {
        Self(Atom::new(predicate, terms))
    }

    /// Return the predicate of this fact.
    pub fn predicate(&self) -> &Tag {
        self.0.predicate()
    }

    /// Return the arity of this fact.
    pub fn arity(&self) -> usize {
        self.0.arity()
    }

    /// Return whether all terms of this fact are ground.
    pub fn is_ground(&self) -> bool {
        self.0.is_ground()
    }

    /// Return the row of datavalues of this fact,
    /// or `None` if the fact contains a variable.
    pub fn datavalues(&self) -> Option<Vec<AnyDataValue>> {
        self.0
            .terms()
            .map(|term| term.value().cloned())
            .collect()
    }
}

impl Display for Fact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Atom> for Fact {
    fn from(value: Atom) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod test {
    use super::Fact;
    use crate::rule_model::components::term::{Primitive, Variable};

    #[test]
    fn test_fact_values() {
        let fact = Fact::new("p", vec![1, 2]);

        assert!(fact.is_ground());
        assert_eq!(fact.arity(), 2);
        assert_eq!(fact.datavalues().unwrap().len(), 2);
        assert_eq!(format!("{fact}"), "p(1, 2)".to_string());
    }

    #[test]
    fn test_non_ground_fact_has_no_values() {
        let fact = Fact::new("p", vec![Primitive::from(Variable::new("x"))]);

        assert!(!fact.is_ground());
        assert_eq!(fact.datavalues(), None);
    }
}
