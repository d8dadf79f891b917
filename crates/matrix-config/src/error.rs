use std::path::PathBuf;

use thiserror::Error;

use crate::CONFIG_PATH;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("repository config not found at '{path}'")]
    NotFound { path: PathBuf },

    #[error("failed to read repository config at '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in repository config")]
    InvalidYaml(#[from] serde_yml::Error),

    #[error("repository config must contain a YAML mapping")]
    NotAMapping,

    #[error("feature '{flag}' not enabled")]
    FeatureDisabled { flag: String },
}

impl ConfigError {
    /// Remediation advice for the person reading the CI log.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::NotFound { .. } => Some(format!(
                "run: cp .github/repository-config.example.yml {CONFIG_PATH}"
            )),
            Self::InvalidYaml(_) => Some(format!("validate with: yamllint {CONFIG_PATH}")),
            Self::NotAMapping => Some("ensure the file starts with top-level keys".to_string()),
            Self::FeatureDisabled { flag } => Some(format!(
                "enable in {CONFIG_PATH}: workflows.experimental.{flag}: true"
            )),
            Self::Read { .. } => None,
        }
    }
}
