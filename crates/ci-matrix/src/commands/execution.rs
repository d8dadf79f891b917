use std::path::Path;

use matrix_operations::operations::{
    DetermineExecutionOperation, ExecutionDirectives, ExecutionRange,
};
use matrix_operations::providers::Git2Provider;

use super::DetermineExecutionArgs;
use crate::actions::GithubActions;
use crate::environment::commit_message_from_env;
use crate::error::Result;

pub(crate) fn run(args: DetermineExecutionArgs, repo_root: &Path) -> Result<()> {
    let message = args.commit_message.or_else(commit_message_from_env);
    let range = args.base.as_deref().map(|base| ExecutionRange {
        base,
        head: &args.head,
    });

    let operation = DetermineExecutionOperation::new(Git2Provider::new());
    let directives = operation.execute(repo_root, message.as_deref(), range)?;

    let outputs = execution_outputs(&directives);
    for (name, value) in &outputs {
        println!("{name}={value}");
    }

    if args.output {
        GithubActions::from_env().set_outputs(
            outputs
                .iter()
                .map(|(name, value)| (name.as_str(), value.clone())),
        )?;
    }

    Ok(())
}

fn execution_outputs(directives: &ExecutionDirectives) -> Vec<(String, String)> {
    let mut outputs = vec![
        ("skip_ci".to_string(), directives.skip_ci.to_string()),
        ("should_lint".to_string(), directives.should_lint.to_string()),
    ];
    outputs.extend(
        directives
            .test_jobs()
            .map(|(language, run)| (format!("should_test_{language}"), run.to_string())),
    );
    outputs
}
