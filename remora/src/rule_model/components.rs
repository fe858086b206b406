//! This module defines the components of a logic program.

pub mod atom;
pub mod fact;
pub mod rule;
pub mod tag;
pub mod term;

/// Trait implemented by program components that contain variables
pub trait IterableVariables {
    /// Return an iterator over all [Variable][term::Variable]s contained in this component.
    fn variables(&self) -> Box<dyn Iterator<Item = &term::Variable> + '_>;
}
