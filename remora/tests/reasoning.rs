//! End-to-end tests for the reasoning API.

use remora::api::{load, load_with, output_predicates, reason, result};
use remora::error::Error;
use remora::execution::ExecutionParameters;
use remora::rule_model::components::atom::Atom;
use remora::rule_model::components::fact::Fact;
use remora::rule_model::components::tag::Tag;
use remora::rule_model::components::term::{Primitive, Variable};
use remora::rule_model::program::Program;
use remora::util::multiset::compare_multisets;
use remora_physical::datavalues::AnyDataValue;

fn variable(name: &str) -> Variable {
    Variable::new(name)
}

fn integers(values: &[i64]) -> Vec<AnyDataValue> {
    values
        .iter()
        .map(|&value| AnyDataValue::new_integer_from_i64(value))
        .collect()
}

fn strings(values: &[&str]) -> Vec<AnyDataValue> {
    values
        .iter()
        .map(|&value| AnyDataValue::new_string(value.to_owned()))
        .collect()
}

#[test]
fn join_derives_each_tuple_once() {
    // p(x, y) :- q(x, z), r(z, y).
    let program = Program::builder()
        .fact(Fact::new("q", vec![1, 2]))
        .fact(Fact::new("q", vec![1, 3]))
        .fact(Fact::new("r", vec![2, 9]))
        .fact(Fact::new("r", vec![3, 9]))
        .rule(
            Atom::new("p", vec![variable("x"), variable("y")]),
            vec![
                Atom::new("q", vec![variable("x"), variable("z")]),
                Atom::new("r", vec![variable("z"), variable("y")]),
            ],
        )
        .output(Tag::from("p"))
        .finalize();

    let mut engine = load(program).unwrap();
    reason(&mut engine).unwrap();

    let produced = result(&engine, &Tag::from("p")).unwrap();
    let diff = compare_multisets(produced, vec![integers(&[1, 9])]);
    assert!(diff.is_match(), "{diff:?}");
}

#[test]
fn reasoning_terminates_on_cyclic_input() {
    let program = Program::builder()
        .fact(Fact::new("edge", vec![1, 2]))
        .fact(Fact::new("edge", vec![2, 1]))
        .rule(
            Atom::new("path", vec![variable("x"), variable("y")]),
            vec![Atom::new("edge", vec![variable("x"), variable("y")])],
        )
        .rule(
            Atom::new("path", vec![variable("x"), variable("y")]),
            vec![
                Atom::new("edge", vec![variable("x"), variable("z")]),
                Atom::new("path", vec![variable("z"), variable("y")]),
            ],
        )
        .output(Tag::from("path"))
        .finalize();

    let mut engine = load(program).unwrap();
    reason(&mut engine).unwrap();

    let expected = vec![
        integers(&[1, 2]),
        integers(&[2, 1]),
        integers(&[1, 1]),
        integers(&[2, 2]),
    ];

    let produced = result(&engine, &Tag::from("path")).unwrap();
    assert!(compare_multisets(produced, expected).is_match());
}

#[test]
fn facts_pass_through_and_growth_is_monotone() {
    let program = Program::builder()
        .fact(Fact::new("parent", strings(&["alice", "bob"])))
        .fact(Fact::new("parent", strings(&["bob", "carol"])))
        .rule(
            Atom::new("ancestor", vec![variable("x"), variable("y")]),
            vec![Atom::new("parent", vec![variable("x"), variable("y")])],
        )
        .rule(
            Atom::new("ancestor", vec![variable("x"), variable("y")]),
            vec![
                Atom::new("parent", vec![variable("x"), variable("z")]),
                Atom::new("ancestor", vec![variable("z"), variable("y")]),
            ],
        )
        .output(Tag::from("ancestor"))
        .finalize();

    let mut engine = load(program).unwrap();
    reason(&mut engine).unwrap();

    // a relation with no rules deriving into it retains exactly its facts
    let parents = result(&engine, &Tag::from("parent")).unwrap();
    assert!(compare_multisets(
        parents,
        vec![strings(&["alice", "bob"]), strings(&["bob", "carol"])],
    )
    .is_match());

    // every derived relation contains at least what a single rule application yields
    let ancestors: Vec<_> = result(&engine, &Tag::from("ancestor")).unwrap().collect();
    assert!(ancestors.contains(&strings(&["alice", "bob"])));
    assert!(ancestors.contains(&strings(&["alice", "carol"])));
    assert_eq!(ancestors.len(), 3);
}

#[test]
fn result_is_idempotent_after_reasoning() {
    let program = Program::builder()
        .fact(Fact::new("q", vec![1, 2]))
        .rule(
            Atom::new("p", vec![variable("x")]),
            vec![Atom::new("q", vec![variable("x"), variable("y")])],
        )
        .output(Tag::from("p"))
        .finalize();

    let mut engine = load(program).unwrap();
    reason(&mut engine).unwrap();

    let first: Vec<_> = result(&engine, &Tag::from("p")).unwrap().collect();
    let second: Vec<_> = result(&engine, &Tag::from("p")).unwrap().collect();
    assert_eq!(first, second);

    // re-solving changes nothing either
    reason(&mut engine).unwrap();
    let third: Vec<_> = result(&engine, &Tag::from("p")).unwrap().collect();
    assert_eq!(first, third);
}

#[test]
fn results_require_reasoning_first() {
    let program = Program::builder()
        .fact(Fact::new("q", vec![1]))
        .output(Tag::from("q"))
        .finalize();

    let engine = load(program).unwrap();

    assert!(matches!(
        result(&engine, &Tag::from("q")),
        Err(Error::NotReady)
    ));
}

#[test]
fn numeric_results_coerce_integral_doubles() {
    let program = Program::builder()
        .fact(Fact::new(
            "measurement",
            vec![Primitive::from(AnyDataValue::new_double_from_f64(3.0).unwrap())],
        ))
        .fact(Fact::new(
            "measurement",
            vec![Primitive::from(AnyDataValue::new_double_from_f64(3.5).unwrap())],
        ))
        .output(Tag::from("measurement"))
        .finalize();

    let mut engine = load(program).unwrap();
    reason(&mut engine).unwrap();

    let expected = vec![
        vec![AnyDataValue::new_integer_from_i64(3)],
        vec![AnyDataValue::new_double_from_f64(3.5).unwrap()],
    ];

    let produced = result(&engine, &Tag::from("measurement")).unwrap();
    assert!(compare_multisets(produced, expected).is_match());

    // the fractional value renders as-is, the integral one in integer form
    let rendered: Vec<String> = result(&engine, &Tag::from("measurement"))
        .unwrap()
        .map(|row| remora_physical::tabular::format_row(&row))
        .collect();
    assert!(rendered.contains(&"3".to_string()));
    assert!(rendered.contains(&"3.5".to_string()));
}

#[test]
fn arity_violations_fail_before_reasoning() {
    let program = Program::builder()
        .fact(Fact::new("p", vec![1, 2]))
        .fact(Fact::new("p", vec![1, 2, 3]))
        .finalize();

    assert!(matches!(load(program), Err(Error::ValidationError(_))));
}

#[test]
fn unsafe_rules_fail_before_reasoning() {
    let program = Program::builder()
        .rule(
            Atom::new("p", vec![variable("x"), variable("w")]),
            vec![Atom::new("q", vec![variable("x")])],
        )
        .finalize();

    assert!(matches!(load(program), Err(Error::ValidationError(_))));
}

#[test]
fn empty_body_rules_fail_before_reasoning() {
    // a ground head with no body is asserted as a fact, not as a rule
    let program = Program::builder()
        .rule(Atom::new("p", vec![Primitive::from(1)]), vec![])
        .output(Tag::from("p"))
        .finalize();

    assert!(matches!(load(program), Err(Error::ValidationError(_))));

    let program = Program::builder()
        .fact(Fact::new("p", vec![1]))
        .output(Tag::from("p"))
        .finalize();

    let mut engine = load(program).unwrap();
    reason(&mut engine).unwrap();
    assert_eq!(result(&engine, &Tag::from("p")).unwrap().count(), 1);
}

#[test]
fn declared_outputs_are_reported() {
    let program = Program::builder()
        .fact(Fact::new("q", vec![1]))
        .output(Tag::from("q"))
        .output(Tag::from("unused"))
        .finalize();

    let mut engine = load(program).unwrap();
    reason(&mut engine).unwrap();

    assert_eq!(
        output_predicates(&engine),
        vec![Tag::from("q"), Tag::from("unused")]
    );

    // an output predicate that never occurs in the program is simply empty
    assert_eq!(result(&engine, &Tag::from("unused")).unwrap().count(), 0);
}

#[test]
fn step_limits_abort_runaway_configurations() {
    let program = Program::builder()
        .fact(Fact::new("edge", vec![1, 2]))
        .fact(Fact::new("edge", vec![2, 3]))
        .rule(
            Atom::new("path", vec![variable("x"), variable("y")]),
            vec![Atom::new("edge", vec![variable("x"), variable("y")])],
        )
        .finalize();

    let mut parameters = ExecutionParameters::default();
    parameters.set_max_steps(0);

    let mut engine = load_with(program, parameters).unwrap();
    assert!(matches!(
        reason(&mut engine),
        Err(Error::StepLimitExceeded { limit: 0 })
    ));
}
