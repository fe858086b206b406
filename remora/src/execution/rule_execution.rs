//! This module contains functionality for applying a rule.

use remora_physical::datavalues::AnyDataValue;

use crate::error::Error;
use crate::rule_model::components::atom::Atom;
use crate::rule_model::components::rule::Rule;
use crate::rule_model::components::tag::Tag;
use crate::rule_model::substitution::Substitution;
use crate::table_manager::{RowView, TableManager};

use super::execution_engine::RuleInfo;

/// Object responsible for executing a single rule.
///
/// One application computes all bindings that satisfy the body conjunction
/// and inserts the instantiated head atoms into the head's relation.
/// Applications after the first are semi-naive: only bindings in which at
/// least one body atom matches a row derived since the rule was last applied
/// (the delta) are recomputed.
#[derive(Debug)]
pub(crate) struct RuleExecution {
    /// Head of the rule
    head: Atom,
    /// Body of the rule
    body: Vec<Atom>,
}

impl RuleExecution {
    /// Create new [RuleExecution].
    pub(crate) fn initialize(rule: &Rule) -> Self {
        Self {
            head: rule.head().clone(),
            body: rule.body().clone(),
        }
    }

    /// Check that an atom agrees with the shape its relation was registered with.
    ///
    /// Program validation ordinarily guarantees this;
    /// it is checked again here since evaluation must not rely on the caller
    /// having validated the program.
    fn check_atom_shape(atom: &Atom, table_manager: &TableManager) -> Result<(), Error> {
        let registered =
            table_manager
                .predicate_arity(atom.predicate())
                .ok_or_else(|| Error::UnknownRelation {
                    predicate: atom.predicate().clone(),
                })?;

        if registered != atom.arity() {
            return Err(Error::RelationArity {
                predicate: atom.predicate().clone(),
                arity: atom.arity(),
                registered,
            });
        }

        Ok(())
    }

    /// Try to extend a binding by matching an atom against a stored row.
    ///
    /// Constant terms must agree with the row,
    /// variables that are already bound must agree with their value,
    /// and free variables become bound.
    /// Returns `None` if the row does not match.
    fn match_atom(
        atom: &Atom,
        row: &[AnyDataValue],
        binding: &Substitution,
    ) -> Option<Substitution> {
        let mut extended = binding.clone();

        for (term, value) in atom.terms().zip(row.iter()) {
            match extended.apply(term) {
                Some(existing) => {
                    if existing != *value {
                        return None;
                    }
                }
                None => {
                    let variable = term
                        .variable()
                        .expect("only variables can be unbound")
                        .clone();
                    extended.insert(variable, value.clone());
                }
            }
        }

        Some(extended)
    }

    /// Compute all satisfying bindings for the body
    /// in which the atom at the pivot position matches a delta row.
    ///
    /// Atoms before the pivot are restricted to rows older than the delta
    /// and atoms after it may match any row,
    /// so that distinct pivots never produce the same combination of rows.
    fn join_with_pivot(
        &self,
        table_manager: &TableManager,
        delta_step: usize,
        pivot: usize,
    ) -> Result<Vec<Substitution>, Error> {
        let mut bindings = vec![Substitution::default()];

        for (atom_index, atom) in self.body.iter().enumerate() {
            let view = if atom_index < pivot {
                RowView::Before(delta_step)
            } else if atom_index == pivot {
                RowView::Since(delta_step)
            } else {
                RowView::All
            };

            let mut extended = Vec::new();
            for binding in &bindings {
                for row in table_manager.rows(atom.predicate(), view)? {
                    if let Some(next) = Self::match_atom(atom, row, binding) {
                        extended.push(next);
                    }
                }
            }

            bindings = extended;
            if bindings.is_empty() {
                break;
            }
        }

        Ok(bindings)
    }

    /// Execute the current rule.
    /// Returns the predicates which received new elements.
    pub(crate) fn execute(
        &self,
        table_manager: &mut TableManager,
        rule_info: &RuleInfo,
        step_number: usize,
    ) -> Result<Vec<Tag>, Error> {
        Self::check_atom_shape(&self.head, table_manager)?;
        for atom in &self.body {
            Self::check_atom_shape(atom, table_manager)?;
        }

        // everything is new for the first application of a rule
        let delta_step = rule_info.step_last_applied;

        let mut derived = Vec::<Vec<AnyDataValue>>::new();
        for pivot in 0..self.body.len() {
            let bindings = self.join_with_pivot(table_manager, delta_step, pivot)?;

            log::trace!(
                "pivot {pivot} of rule with head {} produced {} bindings",
                self.head,
                bindings.len()
            );

            for binding in bindings {
                let row: Vec<AnyDataValue> = self
                    .head
                    .terms()
                    .map(|term| {
                        binding
                            .apply(term)
                            .expect("rule safety guarantees that head variables are bound")
                    })
                    .collect();

                derived.push(row);
            }
        }

        let mut new_derivations = false;
        for row in derived {
            if table_manager.insert(self.head.predicate(), step_number, row)? {
                new_derivations = true;
            }
        }

        Ok(if new_derivations {
            vec![self.head.predicate().clone()]
        } else {
            vec![]
        })
    }
}

#[cfg(test)]
mod test {
    use remora_physical::datavalues::AnyDataValue;

    use super::RuleExecution;
    use crate::execution::execution_engine::RuleInfo;
    use crate::rule_model::components::atom::Atom;
    use crate::rule_model::components::rule::Rule;
    use crate::rule_model::components::tag::Tag;
    use crate::rule_model::substitution::Substitution;
    use crate::table_manager::TableManager;

    fn row(values: &[i64]) -> Vec<AnyDataValue> {
        values
            .iter()
            .map(|&value| AnyDataValue::new_integer_from_i64(value))
            .collect()
    }

    fn variable_atom(predicate: &str, variables: &[&str]) -> Atom {
        Atom::new(
            predicate,
            variables
                .iter()
                .map(|name| crate::rule_model::components::term::Variable::new(name)),
        )
    }

    #[test]
    fn test_match_atom_binds_and_filters() {
        let atom = variable_atom("q", &["x", "x"]);

        assert!(RuleExecution::match_atom(&atom, &row(&[1, 1]), &Substitution::default()).is_some());
        assert!(RuleExecution::match_atom(&atom, &row(&[1, 2]), &Substitution::default()).is_none());
    }

    #[test]
    fn test_join_collapses_duplicate_derivations() {
        // p(x, y) :- q(x, z), r(z, y) with q = {(1,2),(1,3)}, r = {(2,9),(3,9)}
        let rule = Rule::new(
            variable_atom("p", &["x", "y"]),
            vec![variable_atom("q", &["x", "z"]), variable_atom("r", &["z", "y"])],
        );

        let mut manager = TableManager::new();
        manager.register_predicate(Tag::from("p"), 2);
        manager.register_predicate(Tag::from("q"), 2);
        manager.register_predicate(Tag::from("r"), 2);

        manager.insert(&Tag::from("q"), 0, row(&[1, 2])).unwrap();
        manager.insert(&Tag::from("q"), 0, row(&[1, 3])).unwrap();
        manager.insert(&Tag::from("r"), 0, row(&[2, 9])).unwrap();
        manager.insert(&Tag::from("r"), 0, row(&[3, 9])).unwrap();

        let execution = RuleExecution::initialize(&rule);
        let updated = execution
            .execute(&mut manager, &RuleInfo::new(), 1)
            .unwrap();

        assert_eq!(updated, vec![Tag::from("p")]);
        assert_eq!(manager.count_rows(&Tag::from("p")), Some(1));
        assert!(manager.contains(&Tag::from("p"), &row(&[1, 9])));
    }

    #[test]
    fn test_unknown_relation_is_detected() {
        let rule = Rule::new(
            variable_atom("p", &["x"]),
            vec![variable_atom("ghost", &["x"])],
        );

        let mut manager = TableManager::new();
        manager.register_predicate(Tag::from("p"), 1);

        let execution = RuleExecution::initialize(&rule);
        let result = execution.execute(&mut manager, &RuleInfo::new(), 1);

        assert!(matches!(
            result,
            Err(crate::error::Error::UnknownRelation { .. })
        ));
    }

    #[test]
    fn test_arity_conflict_is_detected() {
        let rule = Rule::new(
            variable_atom("p", &["x"]),
            vec![variable_atom("q", &["x", "y"])],
        );

        let mut manager = TableManager::new();
        manager.register_predicate(Tag::from("p"), 1);
        manager.register_predicate(Tag::from("q"), 3);

        let execution = RuleExecution::initialize(&rule);
        let result = execution.execute(&mut manager, &RuleInfo::new(), 1);

        assert!(matches!(
            result,
            Err(crate::error::Error::RelationArity {
                arity: 2,
                registered: 3,
                ..
            })
        ));
    }
}
