// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::PathBuf;

use strum::AsRefStr;

/// Failure of the evaluator itself, as opposed to an expression that
/// evaluated to an error value.
#[derive(Clone, Debug, thiserror::Error, AsRefStr)]
pub enum EvaluationError {
    #[error("Failed to parse `{expression}`: {message}")]
    Parse { expression: String, message: String },

    #[error("Evaluation failed: {message}")]
    Runtime { message: String },
}

#[derive(Debug, thiserror::Error, AsRefStr)]
pub enum SkillError {
    #[error("Function `{function}` could not be evaluated: {source}")]
    Evaluation {
        function: String,
        #[source]
        source: EvaluationError,
    },

    #[error("Function `{function}` has no expression")]
    MissingExpression { function: String },
}

#[derive(Debug, thiserror::Error, AsRefStr)]
pub enum ConfigError {
    #[error("Failed to read configuration file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("No [skill] section in the configuration")]
    MissingSkill,
}
