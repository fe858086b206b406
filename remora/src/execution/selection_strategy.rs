//! This module defines the strategies that determine the order of rule applications.

pub mod strategy;
pub mod strategy_round_robin;
