use std::path::Path;

use matrix_config::RepositoryConfig;

use crate::Result;

pub trait ConfigProvider {
    /// # Errors
    ///
    /// Returns an error if the configuration file is missing or malformed.
    fn load_config(&self, repo_root: &Path) -> Result<RepositoryConfig>;
}
