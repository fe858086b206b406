//! This module provides traits and implementations for structures that represent data values.
//! Data values are conceived on this level as canonical representations of unique (semantic)
//! values across a number of domains (integers, doubles, strings).

/// Module to define the general [DataValue] trait.
pub mod datavalue;
pub use datavalue::DataValue;
pub use datavalue::ValueDomain;
/// Module to define [DataValue] implementations for values that can be represented as integers.
pub mod integer_datavalue;
pub use integer_datavalue::LongDataValue;
/// Module to define [DataValue] implementations for values that can be represented as floating point numbers.
pub mod double_datavalue;
pub use double_datavalue::DoubleDataValue;
pub use double_datavalue::NonFiniteFloatError;
/// Module to define [DataValue] implementations for values that can be represented as Unicode strings.
pub mod string_datavalue;
pub use string_datavalue::StringDataValue;
/// Module to define [DataValue] implementations for arbitrary values.
pub mod any_datavalue;
pub use any_datavalue::AnyDataValue;
