//! This module collects data structures and operations for tables of ground tuples.

pub mod relation;
pub use relation::Relation;
pub use relation::format_row;
