mod config;
mod error;

pub const CONFIG_PATH: &str = ".github/repository-config.yml";
pub const DEFAULT_PLATFORM: &str = "ubuntu-latest";
pub const DEFAULT_COVERAGE_THRESHOLD: f64 = 80.0;

pub use config::RepositoryConfig;
pub use error::ConfigError;

pub type Result<T> = std::result::Result<T, ConfigError>;
