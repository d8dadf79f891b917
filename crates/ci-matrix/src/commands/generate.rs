use std::path::Path;

use matrix_operations::operations::{
    PlanInput, PlanMatrixOperation, format_change_summary, format_matrix_summary,
};
use matrix_operations::providers::{FileSystemConfigProvider, Git2Provider};

use super::GenerateMatrixArgs;
use crate::actions::GithubActions;
use crate::environment::branch_from_env;
use crate::error::Result;

pub(crate) fn run(args: GenerateMatrixArgs, repo_root: &Path) -> Result<()> {
    let input = PlanInput {
        base: args.base,
        head: args.head,
        optimize: args.optimize,
        branch: args.branch.or_else(branch_from_env),
        languages: (!args.languages.is_empty()).then_some(args.languages),
    };

    let operation = PlanMatrixOperation::new(Git2Provider::new(), FileSystemConfigProvider::new());
    let output = operation.execute(repo_root, &input)?;

    let matrix_json = serde_json::to_string(&output.plan.matrix)?;
    let summary = format_matrix_summary(&output.plan.matrix);

    println!("{matrix_json}");
    eprint!("{summary}");

    if args.output_matrix {
        let actions = GithubActions::from_env();
        actions.set_outputs([
            ("matrix", matrix_json),
            ("has_tests", output.plan.has_tests().to_string()),
        ])?;
        actions.append_summary(&format!(
            "{summary}\n{}",
            format_change_summary(&output.changes)
        ))?;
    }

    Ok(())
}
