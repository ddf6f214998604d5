// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{cell::Cell, collections::HashMap};

use fxskill::{render, EvaluationError, Evaluator, ParserOptions, RecordValue, RenderMode, Value};

pub fn render_json(input: &str, mode: RenderMode) -> String {
    let value: Value = serde_json::from_str(input).unwrap();
    render(&value, mode)
}

/// Answers with prepared values, or with the variable of the same name.
#[derive(Default)]
pub struct PreparedEvaluator {
    answers: HashMap<String, Value>,
    side_effects_seen: Cell<Option<bool>>,
}

impl PreparedEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, expression: &str, value: Value) -> Self {
        self.answers.insert(expression.to_string(), value);
        self
    }

    pub fn side_effects_seen(&self) -> Option<bool> {
        self.side_effects_seen.get()
    }
}

impl Evaluator for PreparedEvaluator {
    fn evaluate(&self, expression: &str, variables: &RecordValue, options: ParserOptions) -> Result<Value, EvaluationError> {
        self.side_effects_seen.set(Some(options.allows_side_effects));

        if let Some(value) = self.answers.get(expression) {
            return Ok(value.clone());
        }

        variables.get(expression).cloned().ok_or_else(|| EvaluationError::Runtime {
            message: format!("Name isn't valid. '{expression}' isn't recognized."),
        })
    }
}
