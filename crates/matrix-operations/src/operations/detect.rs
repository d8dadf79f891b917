use std::path::Path;

use matrix_core::ChangeSet;
use tracing::{debug, info};

use crate::traits::GitProvider;
use crate::{OperationError, Result};

pub const DEFAULT_BASE_REF: &str = "origin/main";
pub const DEFAULT_HEAD_REF: &str = "HEAD";

pub struct DetectChangesOperation<G> {
    git_provider: G,
}

impl<G: GitProvider> DetectChangesOperation<G> {
    pub fn new(git_provider: G) -> Self {
        Self { git_provider }
    }

    /// Diffs `base` against `head` once and classifies every changed path.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::ChangeDetection`] if the diff cannot be computed,
    /// for example because a reference is unknown. The failure is not retried.
    pub fn execute(&self, repo_root: &Path, base: &str, head: &str) -> Result<ChangeSet> {
        let paths = self
            .git_provider
            .changed_paths(repo_root, base, head)
            .map_err(|source| OperationError::ChangeDetection {
                base: base.to_string(),
                head: head.to_string(),
                source,
            })?;

        debug!(count = paths.len(), base, head, "classifying changed files");
        let changes = ChangeSet::from_paths(paths);

        for category in changes.changed_categories() {
            info!(%category, "files changed");
        }

        Ok(changes)
    }
}
