//! A fast in-memory rule engine
//!
//! Remora loads a logic program consisting of facts and rules,
//! computes the least fixpoint of the rules over the facts with
//! semi-naive bottom-up evaluation,
//! and exposes the resulting derived relations for inspection.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences
)]

/// The crate for underlying physical operations.
pub extern crate remora_physical;

pub mod api;
pub mod error;
pub mod execution;
pub mod rule_model;
pub mod util;

pub(crate) mod table_manager;

// we use datavalues from remora_physical in our API, so re-export it here.
pub use remora_physical::datavalues;
