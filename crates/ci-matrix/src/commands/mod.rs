mod coverage;
mod detect;
mod execution;
mod feature;
mod generate;
mod status;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Subcommand, ValueEnum};
use matrix_operations::operations::{CoverageFormat, DEFAULT_BASE_REF, DEFAULT_HEAD_REF};

use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Classify the files changed between two references
    DetectChanges(DetectChangesArgs),
    /// Build the test matrix for the languages affected by a change
    GenerateMatrix(GenerateMatrixArgs),
    /// Decide which jobs run: [skip ci] markers, linting and per-language tests
    DetermineExecution(DetermineExecutionArgs),
    /// Print the configured coverage threshold for a language
    CoverageThreshold(CoverageThresholdArgs),
    /// Fail when a coverage report falls below its threshold
    CheckCoverage(CheckCoverageArgs),
    /// Print whether an experimental workflow feature is enabled
    FeatureFlag(FeatureFlagArgs),
    /// Fail when any job reported through the JOB_* variables failed
    CheckCiStatus,
}

impl Commands {
    pub(crate) fn execute(self, repo_root: &Path) -> Result<()> {
        match self {
            Self::DetectChanges(args) => detect::run(args, repo_root),
            Self::GenerateMatrix(args) => generate::run(args, repo_root),
            Self::DetermineExecution(args) => execution::run(args, repo_root),
            Self::CoverageThreshold(args) => coverage::run_threshold(args, repo_root),
            Self::CheckCoverage(args) => coverage::run_check(args, repo_root),
            Self::FeatureFlag(args) => feature::run(args, repo_root),
            Self::CheckCiStatus => status::run(),
        }
    }
}

#[derive(Args)]
pub(crate) struct DetectChangesArgs {
    /// Base reference of the diff
    #[arg(long, default_value = DEFAULT_BASE_REF)]
    pub base: String,

    /// Head reference of the diff
    #[arg(long, default_value = DEFAULT_HEAD_REF)]
    pub head: String,

    /// Write `<category>_changed` and `changed_files` to GITHUB_OUTPUT
    #[arg(long)]
    pub output: bool,
}

#[derive(Args)]
pub(crate) struct GenerateMatrixArgs {
    /// Base reference of the diff
    #[arg(long, default_value = DEFAULT_BASE_REF)]
    pub base: String,

    /// Head reference of the diff
    #[arg(long, default_value = DEFAULT_HEAD_REF)]
    pub head: String,

    /// Run older versions on the first platform only
    #[arg(long, default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
    pub optimize: bool,

    /// Write `matrix` and `has_tests` to GITHUB_OUTPUT and the summary to GITHUB_STEP_SUMMARY
    #[arg(long)]
    pub output_matrix: bool,

    /// Branch to plan for (default: GITHUB_HEAD_REF, GITHUB_REF_NAME, then the checked-out branch)
    #[arg(long)]
    pub branch: Option<String>,

    /// Candidate language, repeatable (default: every language with configured versions)
    #[arg(long = "language", value_name = "LANGUAGE")]
    pub languages: Vec<String>,
}

#[derive(Args)]
pub(crate) struct DetermineExecutionArgs {
    /// Message to inspect (default: GITHUB_HEAD_COMMIT_MESSAGE, then the HEAD commit)
    #[arg(long)]
    pub commit_message: Option<String>,

    /// Base reference of the diff deciding the test jobs (default: no test job runs)
    #[arg(long)]
    pub base: Option<String>,

    /// Head reference of the diff deciding the test jobs
    #[arg(long, default_value = DEFAULT_HEAD_REF, requires = "base")]
    pub head: String,

    /// Write `skip_ci`, `should_lint` and `should_test_<language>` to GITHUB_OUTPUT
    #[arg(long)]
    pub output: bool,
}

#[derive(Args)]
pub(crate) struct CoverageThresholdArgs {
    #[arg(long)]
    pub language: String,

    /// Write `threshold` to GITHUB_OUTPUT
    #[arg(long)]
    pub output: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum ReportFormat {
    /// LCOV tracefile
    Lcov,
    /// Output of `go tool cover -func`
    Go,
}

impl From<ReportFormat> for CoverageFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Lcov => Self::Lcov,
            ReportFormat::Go => Self::GoFunc,
        }
    }
}

#[derive(Args)]
pub(crate) struct CheckCoverageArgs {
    /// Coverage report to read
    #[arg(long = "lcov", visible_alias = "report", value_name = "PATH")]
    pub report: PathBuf,

    #[arg(long, value_enum, default_value_t = ReportFormat::Lcov)]
    pub format: ReportFormat,

    /// Language whose configured threshold applies
    #[arg(long)]
    pub language: Option<String>,

    /// Threshold in percent, overriding the configured one
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Write `percent` and `passed` to GITHUB_OUTPUT and a line to GITHUB_STEP_SUMMARY
    #[arg(long)]
    pub output: bool,
}

#[derive(Args)]
pub(crate) struct FeatureFlagArgs {
    /// Flag name below `workflows.experimental`
    #[arg(long)]
    pub name: String,

    /// Fail unless the flag is enabled
    #[arg(long)]
    pub require: bool,

    /// Write `enabled` to GITHUB_OUTPUT
    #[arg(long)]
    pub output: bool,
}
