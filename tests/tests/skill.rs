// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use fxskill::{
    ConfigRoot,
    EvaluationError,
    FormulaFunction,
    RecordValue,
    SkillContext,
    SkillError,
    TableValue,
    Value,
    RESULT_VARIABLE,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::PreparedEvaluator;

#[rstest]
#[case(Value::number(3.0), "3")]
#[case(Value::text("done"), "\"done\"")]
#[case(Value::error("Invalid argument"), "<Error: Invalid argument>")]
#[case(Value::Blank, "Blank()")]
#[case(Value::Table(TableValue::single_column([Value::number(1.0), Value::number(2.0)])), "[1, 2]")]
#[case(Value::Record([("Sum", 3)].into_iter().collect::<RecordValue>()), "{Sum:3}")]
fn invoke_stores_full_rendering(#[case] result: Value, #[case] expected: &str) {
    let evaluator = PreparedEvaluator::new().answer("1 + 2", result);
    let function = FormulaFunction::new(&evaluator, "1 + 2", "Calculate", "Math");

    let output = function.invoke(&SkillContext::new()).unwrap();
    assert_eq!(output.context.get(RESULT_VARIABLE), Some(expected));
}

#[test]
fn invoke_sees_context_variables_as_text() {
    let evaluator = PreparedEvaluator::new();
    let function = FormulaFunction::new(&evaluator, "city", "Echo", "Text");

    let context: SkillContext = [("city", "Utrecht"), ("count", "4")].into_iter().collect();
    let output = function.invoke(&context).unwrap();

    assert_eq!(output.output(), Some("\"Utrecht\""));
    assert_eq!(output.context.get("count"), Some("4"));
    assert_eq!(evaluator.side_effects_seen(), Some(false));
}

#[test]
fn evaluator_failure_is_reported() {
    let evaluator = PreparedEvaluator::new();
    let function = FormulaFunction::new(&evaluator, "missing", "Echo", "Text");

    let error = function.invoke(&SkillContext::new()).unwrap_err();
    let SkillError::Evaluation { function, source } = &error else {
        panic!("unexpected error: {error}");
    };

    assert_eq!(function, "Echo");
    assert!(matches!(source, EvaluationError::Runtime { .. }));
    assert!(error.to_string().contains("'missing' isn't recognized"));
}

#[test]
fn function_from_configuration() {
    let config = ConfigRoot::parse(r#"
        [skill]
        name = "Greet"
        plugin = "Text"
        description = "Greets someone"
        expression = "greeting"
        side-effects = true
    "#).unwrap();

    let evaluator = PreparedEvaluator::new().answer("greeting", Value::text("Hello"));
    let function = FormulaFunction::from_config(&evaluator, config.skill.unwrap()).unwrap();

    let view = function.describe();
    assert_eq!(view.name, "Greet");
    assert_eq!(view.plugin_name, "Text");
    assert_eq!(view.description, "Greets someone");
    assert_eq!(view.parameters.len(), 1);
    assert_eq!(view.parameters[0].name, "input");

    let output = function.invoke(&SkillContext::new()).unwrap();
    assert_eq!(output.output(), Some("\"Hello\""));
    assert_eq!(evaluator.side_effects_seen(), Some(true));
}
