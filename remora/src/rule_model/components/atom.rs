//! This module defines [Atom].

use std::fmt::Display;

use super::tag::Tag;
use super::term::{Primitive, Variable};
use super::IterableVariables;

/// Atom
///
/// A predicate name applied to an ordered sequence of [Primitive] terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    /// Predicate of the atom
    predicate: Tag,
    /// List of terms
    terms: Vec<Primitive>,
}

impl Atom {
    /// Create a new [Atom].
    pub fn new<Terms>(predicate: &str, terms: Terms) -> Self
    where
        Terms: IntoIterator,
        Terms::Item: Into<Primitive>,
    {
        Self {
            predicate: Tag::from(predicate),
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    /// Return the predicate of this atom.
    pub fn predicate(&self) -> &Tag {
        &self.predicate
    }

    /// Return the arity of this atom.
    pub fn arity(&self) -> usize {
        self.terms.len()
    }

    /// Return an iterator over the terms of this atom.
    pub fn terms(&self) -> impl Iterator<Item = &Primitive> {
        self.terms.iter()
    }

    /// Return whether all terms of this atom are ground.
    pub fn is_ground(&self) -> bool {
        self.terms.iter().all(Primitive::is_ground)
    }
}

impl IterableVariables for Atom {
    fn variables(&self) -> Box<dyn Iterator<Item = &Variable> + '_> {
        Box::new(self.terms.iter().filter_map(Primitive::variable))
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.predicate)?;

        for (term_index, term) in self.terms.iter().enumerate() {
            term.fmt(f)?;

            if term_index < self.terms.len() - 1 {
                f.write_str(", ")?;
            }
        }

        f.write_str(")")
    }
}

#[cfg(test)]
mod test {
    use super::Atom;
    use crate::rule_model::components::term::{Primitive, Variable};
    use crate::rule_model::components::IterableVariables;

    #[test]
    fn test_atom_display() {
        let atom = Atom::new(
            "edge",
            vec![Primitive::from(Variable::new("x")), Primitive::from(2)],
        );

        assert_eq!(format!("{atom}"), "edge(?x, 2)".to_string());
        assert_eq!(atom.arity(), 2);
        assert!(!atom.is_ground());
        assert_eq!(atom.variables().count(), 1);
    }
}
