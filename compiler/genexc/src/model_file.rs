//! TOML target model files.
//!
//! ```toml
//! configurations = ["Debug", "Release"]
//!
//! [targets.app]
//! COMPILE_DEFINITIONS = ["APP", "$<$<CONFIG:Debug>:APP_DEBUG>"]
//! LINK_LIBRARIES = "$<TARGET_NAME_IF_EXISTS:core>"
//!
//! [targets.app.configs.Release]
//! COMPILE_OPTIONS = "-O2"
//! ```
//!
//! Array values are joined into `;`-separated lists.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use genex_eval::InMemoryModel;
use genex_preprocess::is_valid_target_name;
use serde::Deserialize;

/// Failure to read or interpret a model file.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read model `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid model file: {0}")]
    Syntax(#[from] toml::de::Error),

    #[error("`{0}` is not a valid target name")]
    InvalidTargetName(String),
}

/// A property value: a string, or a list of strings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PropertyValue {
    One(String),
    List(Vec<String>),
}

impl PropertyValue {
    /// The value as stored on a target.
    pub fn into_value(self) -> String {
        match self {
            PropertyValue::One(value) => value,
            PropertyValue::List(items) => items.join(";"),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct TargetTable {
    /// Per-configuration overrides.
    #[serde(default)]
    pub configs: BTreeMap<String, BTreeMap<String, PropertyValue>>,
    #[serde(flatten)]
    pub properties: BTreeMap<String, PropertyValue>,
}

/// Parsed model file.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ModelFile {
    /// Configurations evaluated when none are requested explicitly.
    #[serde(default)]
    pub configurations: Vec<String>,
    #[serde(default)]
    pub targets: BTreeMap<String, TargetTable>,
}

impl ModelFile {
    pub fn parse(text: &str) -> Result<Self, ModelError> {
        let file: ModelFile = toml::from_str(text)?;
        if let Some(bad) = file.targets.keys().find(|name| !is_valid_target_name(name)) {
            return Err(ModelError::InvalidTargetName(bad.clone()));
        }
        Ok(file)
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let text = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Build the in-memory model the evaluator reads.
    pub fn into_model(self) -> InMemoryModel {
        let model = InMemoryModel::new();
        for (name, table) in self.targets {
            model.add_target(&name);
            for (property, value) in table.properties {
                model.set_property(&name, &property, value.into_value());
            }
            for (config, overrides) in table.configs {
                for (property, value) in overrides {
                    model.set_config_property(&name, &config, &property, value.into_value());
                }
            }
        }
        model
    }
}
