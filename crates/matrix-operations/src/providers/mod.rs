mod config;
mod git;

pub use config::FileSystemConfigProvider;
pub use git::Git2Provider;
