//! This module provides an implementation of [DataValue]s that can represent any
//! datavalue that we support.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use delegate::delegate;

use super::{
    DataValue, DoubleDataValue, LongDataValue, NonFiniteFloatError, StringDataValue, ValueDomain,
};

/// Enum that can represent arbitrary [DataValue]s.
#[derive(Debug, Clone)]
pub enum AnyDataValue {
    /// Variant for representing [DataValue]s in [ValueDomain::String].
    String(StringDataValue),
    /// Variant for representing [DataValue]s in [ValueDomain::Double].
    /// Note that this has some overlap with values of [AnyDataValue::Long]
    /// when the fractional part is zero, which is accounted for in the
    /// [Eq], [Ord], and [Hash] implementations.
    Double(DoubleDataValue),
    /// Variant for representing [DataValue]s in [ValueDomain::Long].
    Long(LongDataValue),
}

/// Key that identifies the semantic value of an [AnyDataValue] at the
/// comparison boundary: an integral double collapses onto its integer form,
/// everything else keeps its own domain.
#[derive(Debug, Clone, Copy, PartialEq)]
enum CanonicalKey<'a> {
    Integer(i64),
    Double(f64),
    String(&'a str),
}

impl CanonicalKey<'_> {
    fn rank(&self) -> u8 {
        match self {
            CanonicalKey::Integer(_) => 0,
            CanonicalKey::Double(_) => 1,
            CanonicalKey::String(_) => 2,
        }
    }
}

impl AnyDataValue {
    /// Construct a datavalue that represents the given number.
    pub fn new_integer_from_i64(value: i64) -> Self {
        AnyDataValue::Long(LongDataValue::new(value))
    }

    /// Construct a datavalue that represents the given number.
    ///
    /// # Errors
    /// The given `value` is NaN or an infinity.
    pub fn new_double_from_f64(value: f64) -> Result<AnyDataValue, NonFiniteFloatError> {
        DoubleDataValue::new(value).map(AnyDataValue::Double)
    }

    /// Construct a datavalue in [ValueDomain::String] that represents the given string.
    pub fn new_string(value: String) -> Self {
        AnyDataValue::String(StringDataValue::new(value))
    }

    /// Return the [CanonicalKey] of this value, which applies the
    /// integer/double interchangeability rule without changing the stored tag.
    fn canonical_key(&self) -> CanonicalKey<'_> {
        match self {
            AnyDataValue::String(dv) => CanonicalKey::String(dv.as_str()),
            AnyDataValue::Double(dv) => match dv.to_i64() {
                Some(integer) => CanonicalKey::Integer(integer),
                None => CanonicalKey::Double(dv.to_f64_unchecked()),
            },
            AnyDataValue::Long(dv) => CanonicalKey::Integer(dv.to_i64_unchecked()),
        }
    }
}

impl DataValue for AnyDataValue {
    delegate! {
        to match self {
            AnyDataValue::String(dv) => dv,
            AnyDataValue::Double(dv) => dv,
            AnyDataValue::Long(dv) => dv,
        } {
            fn lexical_value(&self) -> String;
            fn canonical_string(&self) -> String;
            fn value_domain(&self) -> ValueDomain;
            fn to_string(&self) -> Option<String>;
            fn to_string_unchecked(&self) -> String;
            fn to_f64(&self) -> Option<f64>;
            fn to_f64_unchecked(&self) -> f64;
            fn fits_into_i64(&self) -> bool;
            fn to_i64(&self) -> Option<i64>;
            fn to_i64_unchecked(&self) -> i64;
        }
    }
}

impl PartialEq for AnyDataValue {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_key() == other.canonical_key()
    }
}

impl Eq for AnyDataValue {}

impl Hash for AnyDataValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let key = self.canonical_key();
        state.write_u8(key.rank());

        match key {
            CanonicalKey::Integer(integer) => integer.hash(state),
            // doubles are guaranteed finite, so the bit pattern is canonical
            CanonicalKey::Double(double) => double.to_bits().hash(state),
            CanonicalKey::String(string) => string.hash(state),
        }
    }
}

impl PartialOrd for AnyDataValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AnyDataValue {
    fn cmp(&self, other: &Self) -> Ordering {
        let left = self.canonical_key();
        let right = other.canonical_key();

        match (left, right) {
            (CanonicalKey::Integer(a), CanonicalKey::Integer(b)) => a.cmp(&b),
            (CanonicalKey::Double(a), CanonicalKey::Double(b)) => a.total_cmp(&b),
            (CanonicalKey::String(a), CanonicalKey::String(b)) => a.cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

impl From<i64> for AnyDataValue {
    fn from(value: i64) -> Self {
        AnyDataValue::new_integer_from_i64(value)
    }
}

impl From<&str> for AnyDataValue {
    fn from(value: &str) -> Self {
        AnyDataValue::new_string(value.to_owned())
    }
}

impl From<String> for AnyDataValue {
    fn from(value: String) -> Self {
        AnyDataValue::new_string(value)
    }
}
