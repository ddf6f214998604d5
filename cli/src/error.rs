// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use colored::Colorize;

pub struct ErrorPrinter {
    message: String,
    causes: Vec<String>,
    hint: Option<String>,
}

impl ErrorPrinter {
    #[must_use = "Use the `print` method to actually print"]
    pub fn new(message: impl Display) -> Self {
        Self {
            message: message.to_string(),
            causes: Vec::new(),
            hint: None,
        }
    }

    #[must_use = "Use the `print` method to actually print"]
    pub fn from_anyhow(error: &anyhow::Error) -> Self {
        Self {
            causes: error.chain().skip(1).map(|cause| cause.to_string()).collect(),
            ..Self::new(error)
        }
    }

    #[must_use]
    pub fn hint(self, hint: impl Into<Option<String>>) -> Self {
        Self {
            hint: hint.into(),
            ..self
        }
    }

    pub fn print(self) {
        eprintln!("{}: {}", "error".red().bold(), self.message.bold());

        for cause in &self.causes {
            eprintln!("  {} {cause}", "caused by:".blue().bold());
        }

        if let Some(hint) = &self.hint {
            eprintln!("  {}", format!("hint: {hint}").red().bold());
        }
    }
}
