mod actions;
mod commands;
mod environment;
mod error;
mod logging;
mod sanitize;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use matrix_git::Repository;

use crate::commands::Commands;
use crate::error::CliError;
use crate::sanitize::sanitize;

#[derive(Parser)]
#[command(name = "ci-matrix")]
#[command(version = env!("CI_MATRIX_VERSION"))]
#[command(about = "Plan GitHub Actions test matrices from the files a change touches", long_about = None)]
struct Cli {
    /// Repository path (default: current directory)
    #[arg(long = "path", short = 'C', global = true)]
    path: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(logging::level_for(cli.verbose, cli.quiet));

    let repo_root = match resolve_repo_root(cli.path) {
        Ok(path) => path,
        Err(e) => {
            print_error(&e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = cli.command.execute(&repo_root) {
        print_error(&e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Uses the enclosing repository's work tree when there is one, so that the
/// config file is found from any subdirectory.
fn resolve_repo_root(path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    let start = match path {
        Some(p) => p,
        None => std::env::current_dir().map_err(CliError::CurrentDir)?,
    };

    Ok(Repository::open(&start).map_or(start, |repo| repo.root().to_path_buf()))
}

fn print_error(error: &CliError) {
    eprintln!("error: {}", sanitize(&error.to_string()));

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {}", sanitize(&cause.to_string()));
        source = std::error::Error::source(cause);
    }

    if let Some(hint) = error.hint() {
        eprintln!("hint: {}", sanitize(&hint));
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn optimize_defaults_to_true_and_accepts_false() {
        let cli = Cli::try_parse_from(["ci-matrix", "generate-matrix"]).expect("valid arguments");
        let Commands::GenerateMatrix(args) = cli.command else {
            panic!("expected generate-matrix");
        };
        assert!(args.optimize);
        assert_eq!(args.base, "origin/main");
        assert_eq!(args.head, "HEAD");

        let cli = Cli::try_parse_from(["ci-matrix", "generate-matrix", "--optimize", "false"])
            .expect("valid arguments");
        let Commands::GenerateMatrix(args) = cli.command else {
            panic!("expected generate-matrix");
        };
        assert!(!args.optimize);
    }

    #[test]
    fn language_is_repeatable() {
        let cli = Cli::try_parse_from([
            "ci-matrix",
            "generate-matrix",
            "--language",
            "go",
            "--language",
            "python",
        ])
        .expect("valid arguments");
        let Commands::GenerateMatrix(args) = cli.command else {
            panic!("expected generate-matrix");
        };
        assert_eq!(args.languages, ["go", "python"]);
    }

    #[test]
    fn determine_execution_head_requires_base() {
        let result =
            Cli::try_parse_from(["ci-matrix", "determine-execution", "--head", "feature"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["ci-matrix", "determine-execution", "--base", "main"])
            .expect("valid arguments");
        let Commands::DetermineExecution(args) = cli.command else {
            panic!("expected determine-execution");
        };
        assert_eq!(args.base.as_deref(), Some("main"));
        assert_eq!(args.head, "HEAD");
    }

    #[test]
    fn check_ci_status_takes_no_arguments() {
        let cli = Cli::try_parse_from(["ci-matrix", "check-ci-status"]).expect("valid arguments");

        assert!(matches!(cli.command, Commands::CheckCiStatus));
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["ci-matrix", "detect-changes", "-v", "-C", "/repo"])
            .expect("valid arguments");

        assert!(cli.verbose);
        assert_eq!(cli.path, Some(PathBuf::from("/repo")));
    }
}
