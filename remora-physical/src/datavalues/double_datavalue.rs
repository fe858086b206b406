//! This module provides an implementation of [DataValue]s that represent finite-valued
//! 64bit floating point numbers. NaN and positive or negative infinity are not accepted,
//! which ensures that comparison operations are total.

use std::fmt::{Display, Formatter};

use super::{DataValue, ValueDomain};

/// Error that occurs when trying to use an infinity or NaN for creating a [DoubleDataValue].
#[derive(Clone, Copy, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub struct NonFiniteFloatError;

impl Display for NonFiniteFloatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "floating point number must represent a finite value (no infinity, no NaN)"
        )
    }
}

impl std::error::Error for NonFiniteFloatError {}

/// Physical representation of a finite 64bit floating point number as an f64.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleDataValue(f64);

impl DoubleDataValue {
    /// Wraps the given [f64]-`value` as a [DoubleDataValue].
    ///
    /// # Errors
    /// The given `value` is NaN or an infinity.
    pub fn new(value: f64) -> Result<DoubleDataValue, NonFiniteFloatError> {
        if !value.is_finite() {
            return Err(NonFiniteFloatError);
        }

        Ok(DoubleDataValue(value))
    }

    /// Wraps the given [f64]-`value` as a [DoubleDataValue].
    ///
    /// # Panics
    /// The given `value` is NaN or an infinity.
    pub fn from_number(value: f64) -> DoubleDataValue {
        if !value.is_finite() {
            panic!("floating point number must represent a finite value (neither infinity nor NaN are allowed)");
        }

        DoubleDataValue(value)
    }
}

impl DataValue for DoubleDataValue {
    fn lexical_value(&self) -> String {
        self.0.to_string()
    }

    fn canonical_string(&self) -> String {
        if self.fits_into_i64() {
            self.to_i64_unchecked().to_string()
        } else {
            self.lexical_value()
        }
    }

    fn value_domain(&self) -> ValueDomain {
        ValueDomain::Double
    }

    fn to_f64_unchecked(&self) -> f64 {
        self.0
    }

    fn fits_into_i64(&self) -> bool {
        // `i64::MAX as f64` rounds up to 2^63, which itself does not fit,
        // hence the strict comparison.
        self.0.floor() == self.0 && self.0 >= (i64::MIN as f64) && self.0 < (i64::MAX as f64)
    }

    fn to_i64(&self) -> Option<i64> {
        if self.fits_into_i64() {
            Some(self.to_i64_unchecked())
        } else {
            None
        }
    }

    fn to_i64_unchecked(&self) -> i64 {
        self.0 as i64
    }
}
