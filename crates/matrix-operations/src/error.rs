use std::path::PathBuf;

use matrix_git::GitError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Config(#[from] matrix_config::ConfigError),

    #[error("failed to detect changes between '{base}' and '{head}'")]
    ChangeDetection {
        base: String,
        head: String,
        #[source]
        source: GitError,
    },

    #[error("failed to determine the current branch")]
    BranchResolution(#[source] GitError),

    #[error("failed to read the head commit message")]
    CommitMessage(#[source] GitError),

    #[error("failed to read coverage report '{path}'")]
    CoverageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed coverage record on line {line_number}: '{line}'")]
    CoverageParse { line_number: usize, line: String },

    #[error("total coverage line not found in coverage output")]
    CoverageTotalMissing,

    #[error("coverage {percent:.2}% is below threshold {threshold}%")]
    CoverageBelowThreshold { percent: f64, threshold: f64 },

    #[error("CI pipeline failed: {}", jobs.join(", "))]
    PipelineFailed { jobs: Vec<&'static str> },
}

impl OperationError {
    /// Remediation advice for the person reading the CI log.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Config(err) => err.hint(),
            Self::ChangeDetection { .. } => Some(
                "ensure both references exist locally (check out with fetch-depth: 0 or fetch the base branch)"
                    .to_string(),
            ),
            Self::BranchResolution(_) => {
                Some("pass --branch explicitly when HEAD is detached".to_string())
            }
            Self::CoverageTotalMissing => {
                Some("pass the output of `go tool cover -func`".to_string())
            }
            Self::CoverageBelowThreshold { .. } => Some(
                "add tests or lower testing.coverage.<language>.threshold in the repository config"
                    .to_string(),
            ),
            Self::CommitMessage(_)
            | Self::CoverageRead { .. }
            | Self::CoverageParse { .. }
            | Self::PipelineFailed { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, OperationError>;
