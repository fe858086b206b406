//! This module defines [Program].

use std::collections::{HashMap, HashSet};
use std::fmt::Display;

use super::components::atom::Atom;
use super::components::fact::Fact;
use super::components::rule::Rule;
use super::components::tag::Tag;
use super::components::IterableVariables;
use super::error::{ValidationError, ValidationErrorKind};

/// Program
///
/// The top-level aggregate of all [Rule]s, all initial [Fact]s,
/// and the declared list of output predicates.
#[derive(Debug, Clone, Default)]
pub struct Program {
    /// Facts supplied as input
    facts: Vec<Fact>,
    /// Rules of the program
    rules: Vec<Rule>,
    /// Predicates whose contents are designated as externally inspectable results
    outputs: Vec<Tag>,
}

/// Result of analyzing a [Program]:
/// the shape of every predicate and which predicates are derived by rules.
#[derive(Debug, Clone)]
pub(crate) struct ProgramAnalysis {
    /// All predicates of the program together with their arity
    pub(crate) all_predicates: HashMap<Tag, usize>,
    /// Predicates that appear in a rule head
    pub(crate) derived_predicates: HashSet<Tag>,
}

impl Program {
    /// Return a [ProgramBuilder].
    pub fn builder() -> ProgramBuilder {
        ProgramBuilder::default()
    }

    /// Return a reference to the facts of the program.
    pub fn facts(&self) -> &Vec<Fact> {
        &self.facts
    }

    /// Return a reference to the rules of the program.
    pub fn rules(&self) -> &Vec<Rule> {
        &self.rules
    }

    /// Return an iterator over the declared output predicates.
    pub fn outputs(&self) -> impl Iterator<Item = &Tag> {
        self.outputs.iter()
    }

    /// Perform the static checks on this program.
    ///
    /// # Errors
    /// A rule has an empty body,
    /// a rule head uses a variable that is not bound by its body,
    /// a predicate is used with inconsistent arities,
    /// or a fact contains a non-ground term.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.analyze().map(|_| ())
    }

    /// Validate this program and collect its [ProgramAnalysis].
    pub(crate) fn analyze(&self) -> Result<ProgramAnalysis, ValidationError> {
        let mut all_predicates = HashMap::<Tag, usize>::new();
        let mut derived_predicates = HashSet::<Tag>::new();

        let mut check_arity = |predicate: &Tag, arity: usize| match all_predicates
            .get(predicate)
        {
            Some(&expected) if expected != arity => {
                Err(ValidationErrorKind::ArityMismatch {
                    predicate: predicate.clone(),
                    arity,
                    expected,
                })
            }
            Some(_) => Ok(()),
            None => {
                all_predicates.insert(predicate.clone(), arity);
                Ok(())
            }
        };

        for fact in &self.facts {
            if !fact.is_ground() {
                return Err(ValidationErrorKind::FactNonGround.into());
            }

            check_arity(fact.predicate(), fact.arity())?;
        }

        for rule in &self.rules {
            if rule.body().is_empty() {
                return Err(ValidationErrorKind::RuleBodyEmpty.into());
            }

            check_arity(rule.head().predicate(), rule.head().arity())?;
            for atom in rule.body() {
                check_arity(atom.predicate(), atom.arity())?;
            }

            let safe = rule.safe_variables();
            for variable in rule.head().variables() {
                if !safe.contains(variable) {
                    return Err(ValidationErrorKind::HeadUnsafe(variable.clone()).into());
                }
            }

            derived_predicates.insert(rule.head().predicate().clone());
        }

        Ok(ProgramAnalysis {
            all_predicates,
            derived_predicates,
        })
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for fact in &self.facts {
            writeln!(f, "{fact} .")?;
        }

        for rule in &self.rules {
            writeln!(f, "{rule}")?;
        }

        Ok(())
    }
}

/// Builder for [Program]
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    /// The program under construction
    program: Program,
}

impl ProgramBuilder {
    /// Add a [Fact].
    pub fn fact(mut self, fact: Fact) -> Self {
        self.program.facts.push(fact);
        self
    }

    /// Add a [Rule].
    pub fn rule(mut self, head: Atom, body: Vec<Atom>) -> Self {
        self.program.rules.push(Rule::new(head, body));
        self
    }

    /// Declare a predicate as an output of the program.
    pub fn output(mut self, predicate: Tag) -> Self {
        self.program.outputs.push(predicate);
        self
    }

    /// Finish building and return the [Program].
    ///
    /// The program is not validated here;
    /// validation happens when an engine is initialized with it,
    /// or explicitly through [Program::validate].
    pub fn finalize(self) -> Program {
        self.program
    }
}
