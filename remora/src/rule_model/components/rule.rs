//! This module defines [Rule].

use std::collections::HashSet;
use std::fmt::Display;

use super::atom::Atom;
use super::term::Variable;
use super::IterableVariables;

/// Rule
///
/// A logical statement that defines a relationship between a head [Atom]
/// and a body (conjunction of [Atom]s).
/// It specifies how new facts can be inferred from existing ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Head of the rule
    head: Atom,
    /// Body of the rule
    body: Vec<Atom>,
}

impl Rule {
    /// Create a new [Rule].
    pub fn new(head: Atom, body: Vec<Atom>) -> Self {
        Self { head, body }
    }

    /// Return a reference to the head of the rule.
    pub fn head(&self) -> &Atom {
        &self.head
    }

    /// Return a reference to the body of the rule.
    pub fn body(&self) -> &Vec<Atom> {
        &self.body
    }

    /// Return the set of "safe" variables.
    ///
    /// A variable is considered safe if it occurs in a body atom.
    pub fn safe_variables(&self) -> HashSet<&Variable> {
        self.body
            .iter()
            .flat_map(|atom| atom.variables())
            .collect()
    }
}

impl IterableVariables for Rule {
    fn variables(&self) -> Box<dyn Iterator<Item = &Variable> + '_> {
        Box::new(
            self.head
                .variables()
                .chain(self.body.iter().flat_map(|atom| atom.variables())),
        )
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.head)?;
        f.write_str(" :- ")?;

        for (body_index, body_atom) in self.body.iter().enumerate() {
            write!(f, "{}", body_atom)?;

            if body_index < self.body.len() - 1 {
                f.write_str(", ")?;
            }
        }

        f.write_str(" .")
    }
}

#[cfg(test)]
mod test {
    use super::Rule;
    use crate::rule_model::components::atom::Atom;
    use crate::rule_model::components::term::Variable;

    fn variable(name: &str) -> Variable {
        Variable::new(name)
    }

    #[test]
    fn test_rule_display() {
        let rule = Rule::new(
            Atom::new("path", vec![variable("x"), variable("y")]),
            vec![
                Atom::new("edge", vec![variable("x"), variable("z")]),
                Atom::new("path", vec![variable("z"), variable("y")]),
            ],
        );

        assert_eq!(
            format!("{rule}"),
            "path(?x, ?y) :- edge(?x, ?z), path(?z, ?y) .".to_string()
        );
    }

    #[test]
    fn test_safe_variables() {
        let rule = Rule::new(
            Atom::new("p", vec![variable("x"), variable("w")]),
            vec![Atom::new("q", vec![variable("x"), variable("z")])],
        );

        let safe = rule.safe_variables();
        assert!(safe.contains(&variable("x")));
        assert!(safe.contains(&variable("z")));
        assert!(!safe.contains(&variable("w")));
    }
}
