use std::path::Path;

use matrix_config::RepositoryConfig;

use crate::Result;
use crate::traits::ConfigProvider;

pub struct FileSystemConfigProvider;

impl FileSystemConfigProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigProvider for FileSystemConfigProvider {
    fn load_config(&self, repo_root: &Path) -> Result<RepositoryConfig> {
        Ok(RepositoryConfig::load(repo_root)?)
    }
}
