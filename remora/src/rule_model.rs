//! This module defines the representation of remora programs

pub mod components;
pub mod error;
pub mod program;
pub mod substitution;
