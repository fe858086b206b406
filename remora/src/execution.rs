//! Functionality for evaluating a logic program.

pub mod execution_engine;
pub use execution_engine::ExecutionEngine;

pub mod execution_parameters;
pub use execution_parameters::ExecutionParameters;

pub mod selection_strategy;

pub(crate) mod rule_execution;

use self::selection_strategy::strategy_round_robin::StrategyRoundRobin;

/// The default strategy that will be used for reasoning
pub type DefaultExecutionStrategy = StrategyRoundRobin;

/// Shorthand for an execution engine using the default strategy
pub type DefaultExecutionEngine = ExecutionEngine<DefaultExecutionStrategy>;
