//! This crate defines the low-level data structures of the reasoning engine,
//! i.e., it corresponds to the physical layer of the system.
//! It provides canonical representations of data values and the tabular
//! storage that derived facts are materialized into,
//! without any knowledge of rules or programs.

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

pub mod datavalues;
pub mod error;
pub mod tabular;
