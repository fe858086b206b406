//! This module provides an implementation of [DataValue]s that represent Unicode strings.

use super::{DataValue, ValueDomain};

/// Physical representation of a Unicode string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StringDataValue(String);

impl StringDataValue {
    /// Create a new [StringDataValue] for the given string.
    pub fn new(value: String) -> Self {
        StringDataValue(value)
    }

    /// Return the wrapped string as a reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl DataValue for StringDataValue {
    fn lexical_value(&self) -> String {
        self.0.clone()
    }

    fn value_domain(&self) -> ValueDomain {
        ValueDomain::String
    }

    fn to_string_unchecked(&self) -> String {
        self.0.clone()
    }
}
