//! Error-handling module for the crate

use thiserror::Error;

use crate::datavalues::NonFiniteFloatError;

/// Error-Collection for all the possible Errors occurring in this crate
#[derive(Error, Debug, Copy, Clone)]
pub enum Error {
    /// Float holds a NaN or infinite value
    #[error(transparent)]
    NonFiniteFloat(#[from] NonFiniteFloatError),
    /// A tuple of the wrong length was handed to a relation
    #[error("tuple of length {length} inserted into relation of arity {arity}")]
    TupleArityMismatch {
        /// Length of the offending tuple
        length: usize,
        /// Arity of the relation
        arity: usize,
    },
}
