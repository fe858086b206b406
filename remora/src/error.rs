//! Error-handling module for the crate

use thiserror::Error;

use crate::execution::selection_strategy::strategy::SelectionStrategyError;
use crate::rule_model::components::tag::Tag;
use crate::rule_model::error::ValidationError;

/// Error-Collection for all the possible Errors occurring in this crate
#[allow(variant_size_differences)]
#[derive(Error, Debug)]
pub enum Error {
    /// Program failed its static checks
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Build selection strategy error
    #[error(transparent)]
    SelectionStrategyError(#[from] SelectionStrategyError),
    /// Evaluation referenced a relation that is not registered.
    /// Program validation ordinarily rules this out;
    /// it can only be reached by dynamic program construction
    /// that bypasses the static checks.
    #[error("relation \"{predicate}\" is unknown to the engine")]
    UnknownRelation {
        /// The predicate in question
        predicate: Tag,
    },
    /// Evaluation referenced a relation with the wrong arity
    #[error("relation \"{predicate}\" used with arity {arity}, but registered with arity {registered}")]
    RelationArity {
        /// The predicate in question
        predicate: Tag,
        /// The arity of the offending use
        arity: usize,
        /// The registered arity
        registered: usize,
    },
    /// Results were requested before reasoning finished
    #[error("results are not available before reasoning has finished; call reason() first")]
    NotReady,
    /// The defensive step limit was exceeded
    #[error("reasoning was aborted after exceeding the limit of {limit} rule applications")]
    StepLimitExceeded {
        /// The configured limit
        limit: usize,
    },
    /// Error in the physical layer
    #[error(transparent)]
    PhysicalError(#[from] remora_physical::error::Error),
}
