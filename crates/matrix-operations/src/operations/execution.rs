use std::path::Path;
use std::sync::LazyLock;

use matrix_core::ChangeSet;
use regex::Regex;
use tracing::{debug, info};

use super::detect::DetectChangesOperation;
use super::selection::should_run_tests;
use crate::traits::GitProvider;
use crate::{OperationError, Result};

static SKIP_CI_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[(skip ci|ci skip)\]").expect("skip ci pattern is valid"));

/// Languages that have a dedicated test job, in the order their
/// `should_test_<language>` outputs are written.
pub const TEST_JOB_LANGUAGES: [&str; 5] = ["go", "frontend", "python", "rust", "docker"];

/// Directives that steer which jobs of the workflow run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionDirectives {
    pub skip_ci: bool,
    /// Linting runs on every push.
    pub should_lint: bool,
    should_test: [bool; TEST_JOB_LANGUAGES.len()],
}

impl ExecutionDirectives {
    /// Whether the test job of `language` should run. Unknown names never run.
    #[must_use]
    pub fn should_test(&self, language: &str) -> bool {
        self.test_jobs().any(|(name, run)| name == language && run)
    }

    /// Every entry of [`TEST_JOB_LANGUAGES`] with its decision.
    pub fn test_jobs(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        TEST_JOB_LANGUAGES
            .iter()
            .copied()
            .zip(self.should_test.iter().copied())
    }
}

/// Reads `[skip ci]` / `[ci skip]` markers (case-insensitive) from a commit
/// message and decides the test jobs from `changes`.
#[must_use]
pub fn determine_execution(commit_message: &str, changes: &ChangeSet) -> ExecutionDirectives {
    ExecutionDirectives {
        skip_ci: SKIP_CI_PATTERN.is_match(commit_message),
        should_lint: true,
        should_test: TEST_JOB_LANGUAGES.map(|language| should_run_tests(language, changes)),
    }
}

/// References to diff when deciding the test jobs.
#[derive(Debug, Clone, Copy)]
pub struct ExecutionRange<'a> {
    pub base: &'a str,
    pub head: &'a str,
}

pub struct DetermineExecutionOperation<G> {
    git_provider: G,
}

impl<G: GitProvider> DetermineExecutionOperation<G> {
    pub fn new(git_provider: G) -> Self {
        Self { git_provider }
    }

    /// Uses `commit_message` when given, otherwise the message of the HEAD commit.
    ///
    /// Without a `range` no change is known and every test job is off.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::CommitMessage`] if no message was given and the
    /// HEAD commit cannot be read, or [`OperationError::ChangeDetection`] if the
    /// diff of `range` fails.
    pub fn execute(
        &self,
        repo_root: &Path,
        commit_message: Option<&str>,
        range: Option<ExecutionRange<'_>>,
    ) -> Result<ExecutionDirectives> {
        let message = match commit_message {
            Some(message) => message.to_string(),
            None => self
                .git_provider
                .head_commit_message(repo_root)
                .map_err(OperationError::CommitMessage)?,
        };

        let changes = match range {
            Some(range) => DetectChangesOperation::new(&self.git_provider).execute(
                repo_root,
                range.base,
                range.head,
            )?,
            None => ChangeSet::default(),
        };

        let directives = determine_execution(&message, &changes);
        if directives.skip_ci {
            info!("commit message requests skipping CI");
        }
        debug!(?directives, "determined execution");
        Ok(directives)
    }
}
