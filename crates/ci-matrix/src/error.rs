use std::path::PathBuf;

use thiserror::Error;

const ACTIONS_HINT: &str = "this command must run inside a GitHub Actions workflow";

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Operation(#[from] matrix_operations::OperationError),

    #[error(transparent)]
    Config(#[from] matrix_config::ConfigError),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("{name} is not set")]
    ActionsVariableMissing { name: &'static str },

    #[error("{name} points to '{path}', which does not exist")]
    ActionsFileMissing { name: &'static str, path: PathBuf },

    #[error("failed to write to '{path}'")]
    ActionsWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("value of output '{name}' contains the line '{delimiter}'")]
    OutputDelimiterCollision {
        name: String,
        delimiter: &'static str,
    },

    #[error("failed to serialize test matrix")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Operation(err) => err.hint(),
            Self::Config(err) => err.hint(),
            Self::ActionsVariableMissing { .. } | Self::ActionsFileMissing { .. } => {
                Some(ACTIONS_HINT.to_string())
            }
            Self::OutputDelimiterCollision { .. } => {
                Some("remove that line from the value before writing it".to_string())
            }
            Self::CurrentDir(_)
            | Self::ActionsWrite { .. }
            | Self::Serialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
