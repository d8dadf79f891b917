mod config_provider;
mod git_provider;

pub use config_provider::ConfigProvider;
pub use git_provider::GitProvider;
