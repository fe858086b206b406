//! This module defines [ValidationErrorKind].

use enum_assoc::Assoc;
use thiserror::Error;

use super::components::tag::Tag;
use super::components::term::Variable;

/// Types of errors that occur while validating a logic program
#[derive(Assoc, Error, Debug, Clone, PartialEq, Eq)]
#[func(pub fn note(&self) -> Option<&'static str>)]
#[func(pub fn code(&self) -> usize)]
pub enum ValidationErrorKind {
    /// Unsafe variable used in the head of the rule.
    #[error(r#"unsafe variable used in rule head: `{0}`"#)]
    #[assoc(note = "every variable in the head must occur in some body atom")]
    #[assoc(code = 202)]
    HeadUnsafe(Variable),
    /// Rule has no body atoms
    #[error(r#"rule body is empty"#)]
    #[assoc(note = "a rule needs at least one body atom; assert a ground atom as a fact instead")]
    #[assoc(code = 204)]
    RuleBodyEmpty,
    /// Fact contains non-ground term
    #[error(r#"non-ground term used in fact"#)]
    #[assoc(code = 208)]
    FactNonGround,
    /// Predicate used with inconsistent arities
    #[error(r#"predicate `{predicate}` used with arity {arity}, but previously with arity {expected}"#)]
    #[assoc(note = "the arity of a predicate must be the same at every occurrence")]
    #[assoc(code = 216)]
    ArityMismatch {
        /// The predicate in question
        predicate: Tag,
        /// The arity of the offending occurrence
        arity: usize,
        /// The arity every earlier occurrence had
        expected: usize,
    },
}

/// Error that occurs when a program fails its static checks.
/// Such an error is fatal to loading the program.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid program: {kind}")]
pub struct ValidationError {
    /// The kind of error that occurred
    kind: ValidationErrorKind,
}

impl ValidationError {
    /// Return the [ValidationErrorKind] of this error.
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }
}

impl From<ValidationErrorKind> for ValidationError {
    fn from(kind: ValidationErrorKind) -> Self {
        Self { kind }
    }
}
