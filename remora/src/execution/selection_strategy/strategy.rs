//! Contains the trait that defines what constitutes a rule execution strategy.

use thiserror::Error;

use crate::rule_model::components::rule::Rule;

/// Errors that can occur while creating a strategy.
#[derive(Error, Debug, Copy, Clone)]
pub enum SelectionStrategyError {
    /// The strategy cannot be built for the given set of rules
    #[error("The rules of the program are not supported by the selection strategy.")]
    UnsupportedRules,
}

/// Trait that defines a strategy for rule execution,
/// namely the order in which the rules are applied in.
pub trait RuleSelectionStrategy: std::fmt::Debug + Sized {
    /// Create a new [RuleSelectionStrategy] object.
    fn new(rules: Vec<&Rule>) -> Result<Self, SelectionStrategyError>;

    /// Return the index of the next rule that should be executed.
    /// Returns `None` if there are no more rules to be applied
    /// and the execution should therefore stop.
    fn next_rule(&mut self, new_derivations: Option<bool>) -> Option<usize>;
}
