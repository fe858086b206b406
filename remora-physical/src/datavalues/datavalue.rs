//! This module defines the [DataValue] trait and the [ValueDomain]s that
//! values can belong to.

/// Enum of the value domains that are distinguished in this code.
///
/// Note that the domains of [ValueDomain::Long] and [ValueDomain::Double]
/// overlap at the comparison boundary: a double whose fractional part is zero
/// is considered interchangeable with the integer of the same magnitude.
/// This overlap is accounted for in the comparison and rendering functions of
/// [AnyDataValue][super::AnyDataValue], not in the stored representation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValueDomain {
    /// Domain of all strings of Unicode glyphs.
    String,
    /// Domain of all finite 64bit floating point numbers.
    Double,
    /// Domain of all signed 64bit integer numbers.
    Long,
}

/// Trait for a data value. Implementations of this trait define a single
/// semantic value. Values are immutable and carry no identity beyond their
/// domain and payload.
pub trait DataValue {
    /// Return the lexical representation of this value as it was stored,
    /// without any coercion applied.
    fn lexical_value(&self) -> String;

    /// Return the canonical textual rendering of this value.
    ///
    /// This is the form in which values appear in results: a double whose
    /// fractional part is zero is rendered in its integer form, all other
    /// values render as their lexical value.
    fn canonical_string(&self) -> String {
        self.lexical_value()
    }

    /// Return the most specific [ValueDomain] of this value.
    fn value_domain(&self) -> ValueDomain;

    /// Return the string that this value represents, if it is a value in
    /// the domain [ValueDomain::String].
    fn to_string(&self) -> Option<String> {
        match self.value_domain() {
            ValueDomain::String => Some(self.to_string_unchecked()),
            _ => None,
        }
    }

    /// Return the string that this value represents, if it is a value in
    /// the domain [ValueDomain::String]. Otherwise it panics.
    fn to_string_unchecked(&self) -> String {
        panic!("Value is not a string.");
    }

    /// Return the f64 that this value represents, if it is a value in
    /// the domain [ValueDomain::Double].
    fn to_f64(&self) -> Option<f64> {
        match self.value_domain() {
            ValueDomain::Double => Some(self.to_f64_unchecked()),
            _ => None,
        }
    }

    /// Return the f64 that this value represents, if it is a value in
    /// the domain [ValueDomain::Double]. Otherwise it panics.
    fn to_f64_unchecked(&self) -> f64 {
        panic!("Value is not a double (64bit floating point number).");
    }

    /// Return true if the value is an integer number that lies within the
    /// range of an i64 number. For doubles this is the case exactly when the
    /// value equals its own floor and is exactly representable as an i64.
    fn fits_into_i64(&self) -> bool {
        false
    }

    /// Return the i64 that this value corresponds to, if it is an integer
    /// number in the i64 range as defined by [DataValue::fits_into_i64].
    fn to_i64(&self) -> Option<i64> {
        None
    }

    /// Return the i64 that this value corresponds to,
    /// if [DataValue::fits_into_i64] holds. Otherwise it panics.
    fn to_i64_unchecked(&self) -> i64 {
        panic!("Value is not an integer number in the i64 range.");
    }
}
