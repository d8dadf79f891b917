use std::path::Path;

use matrix_git::{GitError, Repository};

use crate::traits::GitProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for Git2Provider {
    fn changed_paths(
        &self,
        repo_root: &Path,
        base: &str,
        head: &str,
    ) -> Result<Vec<String>, GitError> {
        Repository::open(repo_root)?.changed_paths(base, head)
    }

    fn current_branch(&self, repo_root: &Path) -> Result<String, GitError> {
        Repository::open(repo_root)?.current_branch()
    }

    fn head_commit_message(&self, repo_root: &Path) -> Result<String, GitError> {
        Repository::open(repo_root)?.head_commit_message()
    }
}
