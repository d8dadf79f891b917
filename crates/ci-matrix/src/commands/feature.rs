use std::path::Path;

use matrix_config::RepositoryConfig;

use super::FeatureFlagArgs;
use crate::actions::GithubActions;
use crate::error::Result;

pub(crate) fn run(args: FeatureFlagArgs, repo_root: &Path) -> Result<()> {
    let config = RepositoryConfig::load(repo_root)?;

    if args.require {
        config.require_feature_flag(&args.name)?;
    }

    let enabled = config.feature_flag(&args.name);
    println!("enabled={enabled}");

    if args.output {
        GithubActions::from_env().set_output("enabled", &enabled.to_string())?;
    }

    Ok(())
}
