// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod config;
mod error;
mod json;
mod literal;
mod render;
mod skill;
mod value;

pub use self::{
    config::{ConfigRoot, ConfigSectionLog, ConfigSectionParameter, ConfigSectionRender, ConfigSectionSkill},
    error::{ConfigError, EvaluationError, SkillError},
    literal::{LiteralSettings, ToLiteral},
    render::{render, RenderMode, RenderedValue},
    skill::{Evaluator, FormulaFunction, FunctionResult, FunctionView, ParameterView, ParserOptions, SkillContext, RESULT_VARIABLE},
    value::{
        Color,
        ErrorKind,
        ErrorValue,
        ExpressionError,
        NamedValue,
        RecordValue,
        Scalar,
        TableRow,
        TableValue,
        Value,
        ValueKind,
        SINGLE_COLUMN_NAME,
    },
};
