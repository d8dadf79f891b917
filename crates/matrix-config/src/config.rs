use std::path::Path;

use matrix_core::VersionCatalog;
use serde::de::DeserializeOwned;
use serde_yml::Value;
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::{CONFIG_PATH, DEFAULT_COVERAGE_THRESHOLD, DEFAULT_PLATFORM, Result};

/// Parsed `.github/repository-config.yml`.
///
/// Loaded once by the caller and passed by reference to whatever needs it.
#[derive(Debug, Clone)]
pub struct RepositoryConfig {
    root: Value,
}

impl RepositoryConfig {
    /// Reads the configuration below `repo_root`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file does not exist, and a parse
    /// error if it is not a YAML mapping.
    pub fn load(repo_root: &Path) -> Result<Self> {
        let path = repo_root.join(CONFIG_PATH);
        if !path.is_file() {
            return Err(ConfigError::NotFound { path });
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), "loaded repository config");
        Self::from_yaml_str(&content)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidYaml`] for malformed input and
    /// [`ConfigError::NotAMapping`] when the document is not a mapping.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let root: Value = serde_yml::from_str(content)?;
        if !root.is_mapping() {
            return Err(ConfigError::NotAMapping);
        }
        Ok(Self { root })
    }

    /// Walks the mapping along `path`, returning `None` as soon as a segment is
    /// missing or an intermediate value is not a mapping.
    #[must_use]
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        path.iter()
            .try_fold(&self.root, |current, key| current.get(*key))
    }

    /// Returns the value at `path` deserialized as `T`, or `default` when it is
    /// missing or has the wrong shape.
    #[must_use]
    pub fn value_or<T: DeserializeOwned>(&self, default: T, path: &[&str]) -> T {
        let Some(value) = self.lookup(path) else {
            return default;
        };

        match serde_yml::from_value(value.clone()) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!(path = %path.join("."), error = %err, "ignoring malformed config value");
                default
            }
        }
    }

    /// Version lists from `languages.versions`, in file order.
    ///
    /// Numeric YAML versions (`1.24` without quotes) are kept in their textual
    /// form; entries of any other type are dropped.
    #[must_use]
    pub fn version_catalog(&self) -> VersionCatalog {
        let Some(mapping) = self
            .lookup(&["languages", "versions"])
            .and_then(Value::as_mapping)
        else {
            return VersionCatalog::new();
        };

        mapping
            .iter()
            .filter_map(|(language, versions)| {
                let language = language.as_str()?;
                let versions = versions
                    .as_sequence()
                    .map(|items| {
                        items
                            .iter()
                            .filter_map(|item| version_text(language, item))
                            .collect()
                    })
                    .unwrap_or_default();
                Some((language.to_string(), versions))
            })
            .collect()
    }

    /// Platforms from `build.platforms`, defaulting to a single Ubuntu runner.
    #[must_use]
    pub fn platforms(&self) -> Vec<String> {
        self.value_or(vec![DEFAULT_PLATFORM.to_string()], &["build", "platforms"])
    }

    #[must_use]
    pub fn coverage_threshold(&self, language: &str) -> f64 {
        self.value_or(
            DEFAULT_COVERAGE_THRESHOLD,
            &["testing", "coverage", language, "threshold"],
        )
    }

    #[must_use]
    pub fn feature_flag(&self, flag: &str) -> bool {
        self.value_or(false, &["workflows", "experimental", flag])
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::FeatureDisabled`] if the flag is not enabled.
    pub fn require_feature_flag(&self, flag: &str) -> Result<()> {
        if self.feature_flag(flag) {
            Ok(())
        } else {
            Err(ConfigError::FeatureDisabled {
                flag: flag.to_string(),
            })
        }
    }
}

fn version_text(language: &str, value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        other => {
            warn!(language, value = ?other, "ignoring non-scalar version entry");
            None
        }
    }
}
