use std::path::Path;

use matrix_core::{Category, ChangeSet};
use matrix_operations::operations::DetectChangesOperation;
use matrix_operations::providers::Git2Provider;

use super::DetectChangesArgs;
use crate::actions::GithubActions;
use crate::error::Result;

pub(crate) fn run(args: DetectChangesArgs, repo_root: &Path) -> Result<()> {
    let operation = DetectChangesOperation::new(Git2Provider::new());
    let changes = operation.execute(repo_root, &args.base, &args.head)?;

    let outputs = change_outputs(&changes);
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

fn change_outputs(changes: &ChangeSet) -> Vec<(String, String)> {
    let mut outputs: Vec<(String, String)> = Category::ALL
        .into_iter()
        .map(|category| {
            (
                format!("{category}_changed"),
                changes.is_changed(category).to_string(),
            )
        })
        .collect();
    outputs.push(("changed_files".to_string(), changes.files().len().to_string()));
    outputs
}
