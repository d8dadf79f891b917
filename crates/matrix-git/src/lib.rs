mod error;
mod repository;

pub use error::GitError;
pub use repository::Repository;

use std::path::Path;

pub type Result<T> = std::result::Result<T, GitError>;

/// # Errors
///
/// Returns an error if the path is not a git repository or either reference cannot be resolved.
pub fn changed_paths(path: &Path, base: &str, head: &str) -> Result<Vec<String>> {
    Repository::open(path)?.changed_paths(base, head)
}

/// # Errors
///
/// Returns an error if the path is not a git repository or if HEAD is detached.
pub fn current_branch(path: &Path) -> Result<String> {
    Repository::open(path)?.current_branch()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::tests::{commit_file, setup_test_repo};

    #[test]
    fn changed_paths_via_public_fn() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        commit_file(&repo, dir.path(), "main.go", "package main\n")?;

        let paths = changed_paths(dir.path(), "HEAD~1", "HEAD")?;

        assert_eq!(paths, ["main.go"]);
        Ok(())
    }

    #[test]
    fn current_branch_via_public_fn() -> anyhow::Result<()> {
        let (dir, _repo) = setup_test_repo()?;
        let branch = current_branch(dir.path())?;
        assert!(branch == "main" || branch == "master");
        Ok(())
    }
}
