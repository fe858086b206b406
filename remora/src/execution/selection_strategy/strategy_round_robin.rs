//! Defines the execution strategy that selects rules in a round robin fashion.

use std::collections::HashSet;

use crate::rule_model::components::rule::Rule;

use super::strategy::{RuleSelectionStrategy, SelectionStrategyError};

/// Defines a strategy that selects rules in a round robin fashion.
///
/// The fixpoint is reached once every rule in turn
/// has been applied without deriving anything new.
#[derive(Debug)]
pub struct StrategyRoundRobin {
    rule_count: usize,
    no_derivations: HashSet<usize>,

    current_index: usize,
}

impl RuleSelectionStrategy for StrategyRoundRobin {
    /// Create new [StrategyRoundRobin].
    fn new(rules: Vec<&Rule>) -> Result<Self, SelectionStrategyError> {
        Ok(Self {
            rule_count: rules.len(),
            no_derivations: HashSet::new(),
            current_index: 0,
        })
    }

    fn next_rule(&mut self, new_derivations: Option<bool>) -> Option<usize> {
        if self.rule_count == 0 {
            return None;
        }

        match new_derivations {
            // a productive rule makes every rule a candidate again,
            // including itself (it may fire on its own delta)
            Some(true) => self.no_derivations.clear(),
            Some(false) => {
                self.no_derivations.insert(self.current_index);
            }
            // first call, no rule has been applied yet
            None => {}
        }

        if self.no_derivations.len() == self.rule_count {
            return None;
        }

        if new_derivations.is_some() {
            self.current_index = (self.current_index + 1) % self.rule_count;
        }

        while self.no_derivations.contains(&self.current_index) {
            self.current_index = (self.current_index + 1) % self.rule_count;
        }

        Some(self.current_index)
    }
}
