use std::path::Path;

use matrix_config::{DEFAULT_COVERAGE_THRESHOLD, RepositoryConfig};
use matrix_operations::operations::{CoverageCheck, read_coverage};
use tracing::info;

use super::{CheckCoverageArgs, CoverageThresholdArgs};
use crate::actions::GithubActions;
use crate::error::Result;

pub(crate) fn run_threshold(args: CoverageThresholdArgs, repo_root: &Path) -> Result<()> {
    let config = RepositoryConfig::load(repo_root)?;
    let threshold = config.coverage_threshold(&args.language);

    println!("{threshold}");

    if args.output {
        GithubActions::from_env().set_output("threshold", &threshold.to_string())?;
    }

    Ok(())
}

pub(crate) fn run_check(args: CheckCoverageArgs, repo_root: &Path) -> Result<()> {
    let threshold = match (args.threshold, args.language.as_deref()) {
        (Some(threshold), _) => threshold,
        (None, Some(language)) => RepositoryConfig::load(repo_root)?.coverage_threshold(language),
        (None, None) => DEFAULT_COVERAGE_THRESHOLD,
    };

    let check = CoverageCheck {
        percent: read_coverage(&args.report, args.format.into())?,
        threshold,
    };

    let line = summary_line(&check, args.language.as_deref());
    println!("{line}");
    info!(percent = check.percent, threshold, "coverage measured");

    if args.output {
        let actions = GithubActions::from_env();
        actions.set_outputs([
            ("percent", format!("{:.2}", check.percent)),
            ("passed", check.passed().to_string()),
        ])?;
        actions.append_summary(&line)?;
    }

    check.enforce()?;
    Ok(())
}

fn summary_line(check: &CoverageCheck, language: Option<&str>) -> String {
    let status = if check.passed() { "✅" } else { "❌" };
    let subject = language.map_or_else(|| "Coverage".to_string(), |l| format!("{l} coverage"));
    format!(
        "{status} {subject}: {:.2}% (threshold {}%)",
        check.percent, check.threshold
    )
}
