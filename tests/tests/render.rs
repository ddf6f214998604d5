// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use fxskill::{render, Color, ErrorValue, ExpressionError, NamedValue, RecordValue, RenderMode, Scalar, TableRow, TableValue, Value};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::render_json;

#[rstest]
#[case(r#"null"#, "Blank()")]
#[case(r#""hello""#, "\"hello\"")]
#[case(r#"{"Name": "Ann", "Age": 30}"#, "{Name:\"Ann\", Age:30}")]
#[case(r#"[1, 2, 3]"#, "[1, 2, 3]")]
#[case(r#"[{"X": 1, "Y": 2}, {"X": 3, "Y": 4}]"#, "[{X:1, Y:2}, {X:3, Y:4}]")]
#[case(r#"[]"#, "Table()")]
#[case(r#"[null, null]"#, "Table()")]
#[case(r#"{"Order": {"Lines": [{"Sku": "A-1", "Qty": 2}], "Paid": false}}"#, "{Order:{Lines:[{Sku:\"A-1\", Qty:2}], Paid:false}}")]
#[case(r#"[{"Value": "a \"quoted\" word"}]"#, "[\"a \"\"quoted\"\" word\"]")]
fn render_full(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(render_json(input, RenderMode::Full), expected);
}

#[rstest]
#[case(r#"null"#, "")]
#[case(r#""hello""#, "hello")]
#[case(r#"12.5"#, "12.5")]
#[case(r#"true"#, "true")]
#[case(r#"{"Name": "Ann"}"#, "<record>")]
#[case(r#"{}"#, "<record>")]
#[case(r#"[1, 2]"#, "<table>")]
#[case(r#"[]"#, "<table>")]
fn render_minimal_only_looks_at_the_top(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(render_json(input, RenderMode::Minimal), expected);
}

#[test]
fn render_all_kinds_of_rows() {
    let table = Value::Table(TableValue::from_rows([
        TableRow::Present(RecordValue::from_fields([
            NamedValue::new("Shade", Scalar::Color(Color::rgba(255, 255, 255, 255))),
            NamedValue::new("Note", Value::Untyped),
        ])),
        TableRow::Blank,
        TableRow::Error(ErrorValue::from_errors([
            ExpressionError::new("Invalid operation: division by zero."),
            ExpressionError::new("ignored"),
        ])),
    ]));

    assert_eq!(
        render(&table, RenderMode::Full),
        "[{Shade:RGBA(255,255,255,1), Note:<Untyped: Use Value, Text, Boolean, or other functions to establish the type>}, Blank(), <Error: Invalid operation: division by zero.>]"
    );
}

#[test]
fn rendering_does_not_change_the_value() {
    let value = Value::Record(RecordValue::from_fields([
        NamedValue::new("Items", TableValue::single_column([Value::number(1.0), Value::Blank])),
    ]));
    let copy = value.clone();

    let first = render(&value, RenderMode::Full);
    let second = render(&value, RenderMode::Full);

    assert_eq!(first, "{Items:[1, Blank()]}");
    assert_eq!(first, second);
    assert_eq!(value, copy);
}

#[test]
fn render_from_multiple_threads() {
    let value = Value::Table(TableValue::single_column((0..100).map(|i| Value::number(i as f64))));
    let expected = render(&value, RenderMode::Full);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| render(&value, RenderMode::Full)))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
