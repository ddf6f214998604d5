// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{
    render,
    ConfigSectionSkill,
    EvaluationError,
    NamedValue,
    RecordValue,
    RenderMode,
    SkillError,
    Value,
};

/// The variable that receives the rendered result of an invocation.
pub const RESULT_VARIABLE: &str = "INPUT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserOptions {
    pub allows_side_effects: bool,
}

/// The formula engine, which this crate only consumes.
pub trait Evaluator {
    fn evaluate(&self, expression: &str, variables: &RecordValue, options: ParserOptions) -> Result<Value, EvaluationError>;
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn evaluate(&self, expression: &str, variables: &RecordValue, options: ParserOptions) -> Result<Value, EvaluationError> {
        (**self).evaluate(expression, variables, options)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterView {
    pub name: String,
    pub description: String,
    pub default_value: String,
}

impl ParameterView {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            default_value: default_value.into(),
        }
    }

    #[must_use]
    fn default_list() -> Vec<Self> {
        vec![Self::new("input", "Input string", "")]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionView {
    pub name: String,
    pub plugin_name: String,
    pub description: String,
    pub parameters: Vec<ParameterView>,
}

/// Variables shared between the functions of a host pipeline. Names are
/// compared case-insensitively (Unicode lowercase) and keep their insertion
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillContext {
    variables: Vec<(String, String)>,
}

impl SkillContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.iter()
            .find(|(key, _)| same_name(key, name))
            .map(|(_, value)| value.as_str())
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.variables.iter_mut().find(|(key, _)| same_name(key, &name)) {
            Some((_, existing)) => *existing = value,
            None => self.variables.push((name, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Every variable as a text field, in insertion order.
    #[must_use]
    pub fn to_record(&self) -> RecordValue {
        self.iter()
            .map(|(name, value)| NamedValue::new(name, Value::text(value)))
            .collect()
    }
}

fn same_name(lhs: &str, rhs: &str) -> bool {
    lhs.chars().flat_map(char::to_lowercase).eq(rhs.chars().flat_map(char::to_lowercase))
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SkillContext {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut context = Self::new();
        for (name, value) in iter {
            context.set(name, value);
        }
        context
    }
}

#[derive(Debug, Clone)]
pub struct FunctionResult {
    pub function_name: String,
    pub plugin_name: String,
    pub context: SkillContext,
}

impl FunctionResult {
    #[must_use]
    pub fn output(&self) -> Option<&str> {
        self.context.get(RESULT_VARIABLE)
    }
}

/// A host function backed by a single formula.
#[derive(Debug, Clone)]
pub struct FormulaFunction<E> {
    evaluator: E,
    expression: String,
    has_side_effects: bool,
    name: String,
    plugin_name: String,
    description: String,
    parameters: Vec<ParameterView>,
}

impl<E> FormulaFunction<E> {
    #[must_use]
    pub fn new(evaluator: E, expression: impl Into<String>, name: impl Into<String>, plugin_name: impl Into<String>) -> Self {
        Self {
            evaluator,
            expression: expression.into(),
            has_side_effects: false,
            name: name.into(),
            plugin_name: plugin_name.into(),
            description: String::new(),
            parameters: ParameterView::default_list(),
        }
    }

    pub fn from_config(evaluator: E, config: ConfigSectionSkill) -> Result<Self, SkillError> {
        if config.expression.trim().is_empty() {
            return Err(SkillError::MissingExpression { function: config.name });
        }

        Ok(Self::new(evaluator, config.expression, config.name, config.plugin)
            .description(config.description)
            .side_effects(config.side_effects)
            .parameters(config.parameters.into_iter().map(ParameterView::from)))
    }

    #[must_use]
    pub fn description(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self
        }
    }

    #[must_use]
    pub fn side_effects(self, has_side_effects: bool) -> Self {
        Self {
            has_side_effects,
            ..self
        }
    }

    /// An empty list keeps the default `input` parameter.
    #[must_use]
    pub fn parameters(self, parameters: impl IntoIterator<Item = ParameterView>) -> Self {
        let parameters: Vec<ParameterView> = parameters.into_iter().collect();
        if parameters.is_empty() {
            return Self {
                parameters: ParameterView::default_list(),
                ..self
            };
        }

        Self {
            parameters,
            ..self
        }
    }

    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    #[must_use]
    pub fn has_side_effects(&self) -> bool {
        self.has_side_effects
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    /// Older hosts call the plugin a skill.
    #[must_use]
    pub fn skill_name(&self) -> &str {
        &self.plugin_name
    }

    #[must_use]
    pub fn is_semantic(&self) -> bool {
        false
    }

    #[must_use]
    pub fn describe(&self) -> FunctionView {
        FunctionView {
            name: self.name.clone(),
            plugin_name: self.plugin_name.clone(),
            description: self.description.clone(),
            parameters: self.parameters.clone(),
        }
    }
}

impl<E: Evaluator> FormulaFunction<E> {
    /// Evaluates the expression against the variables of `context` and
    /// stores the rendered result in [`RESULT_VARIABLE`] of a copy of it.
    pub fn invoke(&self, context: &SkillContext) -> Result<FunctionResult, SkillError> {
        log::trace!("Invoking {}.{} with {} variables", self.plugin_name, self.name, context.len());

        let mut new_context = context.clone();
        let variables = context.to_record();
        let options = ParserOptions {
            allows_side_effects: self.has_side_effects,
        };

        let value = self.evaluator.evaluate(&self.expression, &variables, options)
            .map_err(|source| SkillError::Evaluation {
                function: self.name.clone(),
                source,
            })?;

        new_context.set(RESULT_VARIABLE, render(&value, RenderMode::Full));

        Ok(FunctionResult {
            function_name: self.name.clone(),
            plugin_name: self.plugin_name.clone(),
            context: new_context,
        })
    }
}
