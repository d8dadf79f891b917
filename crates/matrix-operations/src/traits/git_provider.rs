use std::path::Path;

use matrix_git::GitError;

pub trait GitProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or either reference cannot be resolved.
    fn changed_paths(&self, repo_root: &Path, base: &str, head: &str)
    -> Result<Vec<String>, GitError>;

    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or HEAD is detached.
    fn current_branch(&self, repo_root: &Path) -> Result<String, GitError>;

    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or HEAD has no commit.
    fn head_commit_message(&self, repo_root: &Path) -> Result<String, GitError>;
}

impl<T: GitProvider + ?Sized> GitProvider for &T {
    fn changed_paths(
        &self,
        repo_root: &Path,
        base: &str,
        head: &str,
    ) -> Result<Vec<String>, GitError> {
        (**self).changed_paths(repo_root, base, head)
    }

    fn current_branch(&self, repo_root: &Path) -> Result<String, GitError> {
        (**self).current_branch(repo_root)
    }

    fn head_commit_message(&self, repo_root: &Path) -> Result<String, GitError> {
        (**self).head_commit_message(repo_root)
    }
}
