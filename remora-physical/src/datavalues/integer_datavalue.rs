//! This module provides an implementation of [DataValue]s that represent integer numbers.

use super::{DataValue, ValueDomain};

/// Physical representation of an integer as an i64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LongDataValue(i64);

impl LongDataValue {
    /// Create a new [LongDataValue] for the given number.
    pub fn new(value: i64) -> Self {
        LongDataValue(value)
    }
}

impl DataValue for LongDataValue {
    fn lexical_value(&self) -> String {
        self.0.to_string()
    }

    fn value_domain(&self) -> ValueDomain {
        ValueDomain::Long
    }

    fn fits_into_i64(&self) -> bool {
        true
    }

    fn to_i64(&self) -> Option<i64> {
        Some(self.0)
    }

    fn to_i64_unchecked(&self) -> i64 {
        self.0
    }
}
