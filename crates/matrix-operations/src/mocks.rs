use std::path::Path;
use std::sync::Mutex;

use matrix_config::RepositoryConfig;
use matrix_git::GitError;

use crate::Result;
use crate::traits::{ConfigProvider, GitProvider};

pub struct MockGitProvider {
    changed_paths: Vec<String>,
    branch: Option<String>,
    commit_message: String,
    fail_diff: bool,
    diff_calls: Mutex<Vec<(String, String)>>,
}

impl MockGitProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            changed_paths: Vec::new(),
            branch: Some("main".to_string()),
            commit_message: "Initial commit".to_string(),
            fail_diff: false,
            diff_calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_changed_paths(mut self, paths: &[&str]) -> Self {
        self.changed_paths = paths.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub fn with_branch(mut self, branch: &str) -> Self {
        self.branch = Some(branch.to_string());
        self
    }

    #[must_use]
    pub fn with_detached_head(mut self) -> Self {
        self.branch = None;
        self
    }

    #[must_use]
    pub fn with_commit_message(mut self, message: &str) -> Self {
        self.commit_message = message.to_string();
        self
    }

    #[must_use]
    pub fn failing_diff(mut self) -> Self {
        self.fail_diff = true;
        self
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn diff_calls(&self) -> Vec<(String, String)> {
        self.diff_calls.lock().expect("mutex poisoned").clone()
    }
}

impl Default for MockGitProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for MockGitProvider {
    fn changed_paths(
        &self,
        _repo_root: &Path,
        base: &str,
        head: &str,
    ) -> std::result::Result<Vec<String>, GitError> {
        self.diff_calls
            .lock()
            .expect("mutex poisoned")
            .push((base.to_string(), head.to_string()));

        if self.fail_diff {
            return Err(GitError::RefNotFound {
                refspec: base.to_string(),
            });
        }
        Ok(self.changed_paths.clone())
    }

    fn current_branch(&self, _repo_root: &Path) -> std::result::Result<String, GitError> {
        self.branch.clone().ok_or(GitError::DetachedHead)
    }

    fn head_commit_message(&self, _repo_root: &Path) -> std::result::Result<String, GitError> {
        Ok(self.commit_message.clone())
    }
}

pub struct MockConfigProvider {
    yaml: String,
}

impl MockConfigProvider {
    #[must_use]
    pub fn new(yaml: &str) -> Self {
        Self {
            yaml: yaml.to_string(),
        }
    }
}

impl ConfigProvider for MockConfigProvider {
    fn load_config(&self, _repo_root: &Path) -> Result<RepositoryConfig> {
        Ok(RepositoryConfig::from_yaml_str(&self.yaml)?)
    }
}
