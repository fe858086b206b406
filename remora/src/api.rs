//! Remora API to call the reasoning engine and compute results
//!
//! # Examples
//! ```
//! use remora::api::{load, output_predicates, reason, result};
//! use remora::rule_model::components::atom::Atom;
//! use remora::rule_model::components::fact::Fact;
//! use remora::rule_model::components::term::Variable;
//! use remora::rule_model::components::tag::Tag;
//! use remora::rule_model::program::Program;
//!
//! let program = Program::builder()
//!     .fact(Fact::new("edge", vec![1, 2]))
//!     .rule(
//!         Atom::new("path", vec![Variable::new("x"), Variable::new("y")]),
//!         vec![Atom::new("edge", vec![Variable::new("x"), Variable::new("y")])],
//!     )
//!     .output(Tag::from("path"))
//!     .finalize();
//!
//! let mut engine = load(program).unwrap();
//! // reasoning on the loaded program
//! reason(&mut engine).unwrap();
//!
//! for predicate in output_predicates(&engine) {
//!     let rows = result(&engine, &predicate).unwrap();
//!     assert_eq!(rows.count(), 1);
//! }
//! ```

use remora_physical::datavalues::AnyDataValue;

use crate::error::Error;
use crate::execution::{DefaultExecutionEngine, ExecutionEngine, ExecutionParameters};
use crate::rule_model::components::tag::Tag;
use crate::rule_model::program::Program;

/// Reasoning Engine exposed by the API
pub type Engine = DefaultExecutionEngine;

/// Load the given [Program] and return an [Engine] for it.
///
/// The program is validated and its facts are loaded;
/// reasoning has not happened yet.
///
/// # Error
/// Returns an appropriate [Error] variant when the program fails its static checks.
pub fn load(program: Program) -> Result<Engine, Error> {
    ExecutionEngine::initialize(program)
}

/// Load the given [Program] with the given [ExecutionParameters].
///
/// For details see [load].
pub fn load_with(program: Program, parameters: ExecutionParameters) -> Result<Engine, Error> {
    ExecutionEngine::initialize_with(program, parameters)
}

/// Executes the reasoning process of the [Engine].
///
/// Running this a second time on the same engine is a no-op,
/// since the fixpoint has already been reached.
pub fn reason(engine: &mut Engine) -> Result<(), Error> {
    engine.execute()
}

/// Return the output predicates declared by the loaded program.
pub fn output_predicates(engine: &Engine) -> Vec<Tag> {
    engine.program().outputs().cloned().collect()
}

/// Return the rows materialized for the given predicate.
///
/// The engine answers for any known relation;
/// restricting inspection to the declared output predicates
/// is up to the caller.
/// An unknown predicate yields an empty sequence.
///
/// # Error
/// Returns [Error::NotReady] when called before [reason] has completed.
pub fn result<'a>(
    engine: &'a Engine,
    predicate: &Tag,
) -> Result<impl Iterator<Item = Vec<AnyDataValue>> + 'a, Error> {
    engine.predicate_rows(predicate)
}
