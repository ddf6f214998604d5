// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::Path;

use serde::Deserialize;

use crate::{ConfigError, ParameterView, RenderMode};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigRoot {
    pub log: ConfigSectionLog,
    pub render: ConfigSectionRender,
    pub skill: Option<ConfigSectionSkill>,
}

impl ConfigRoot {
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;

        log::trace!("Read configuration from {}", path.display());
        Self::parse(&source)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionLog {
    pub debug: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionRender {
    pub mode: RenderMode,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionSkill {
    pub name: String,
    pub plugin: String,
    pub description: String,
    pub expression: String,
    pub side_effects: bool,
    pub parameters: Vec<ConfigSectionParameter>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionParameter {
    pub name: String,
    pub description: String,
    pub default_value: String,
}

impl From<ConfigSectionParameter> for ParameterView {
    fn from(value: ConfigSectionParameter) -> Self {
        ParameterView::new(value.name, value.description, value.default_value)
    }
}
