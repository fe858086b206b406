//! This module collects utility functionality.

pub mod multiset;
