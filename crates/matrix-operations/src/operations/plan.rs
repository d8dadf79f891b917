use std::path::Path;

use matrix_core::{ChangeSet, MatrixPlan};
use tracing::{debug, info};

use super::detect::{DEFAULT_BASE_REF, DEFAULT_HEAD_REF, DetectChangesOperation};
use super::matrix::generate_test_matrix;
use super::selection::select_languages;
use crate::traits::{ConfigProvider, GitProvider};
use crate::{OperationError, Result};

pub struct PlanInput {
    pub base: String,
    pub head: String,
    pub optimize: bool,
    /// Branch the jobs are planned for. Falls back to the checked-out branch.
    pub branch: Option<String>,
    /// Candidate languages. Falls back to every language in the version catalog.
    pub languages: Option<Vec<String>>,
}

impl Default for PlanInput {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_REF.to_string(),
            head: DEFAULT_HEAD_REF.to_string(),
            optimize: true,
            branch: None,
            languages: None,
        }
    }
}

#[derive(Debug)]
pub struct PlanOutput {
    pub changes: ChangeSet,
    pub selected: Vec<String>,
    /// `None` when nothing was selected and no branch was given.
    pub branch: Option<String>,
    pub plan: MatrixPlan,
}

pub struct PlanMatrixOperation<G, C> {
    git_provider: G,
    config_provider: C,
}

impl<G, C> PlanMatrixOperation<G, C>
where
    G: GitProvider,
    C: ConfigProvider,
{
    pub fn new(git_provider: G, config_provider: C) -> Self {
        Self {
            git_provider,
            config_provider,
        }
    }

    /// Detects changes, selects the affected languages and expands them into jobs.
    ///
    /// The branch is only resolved when at least one language was selected.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded, the diff fails,
    /// or languages were selected while no branch was given and HEAD is detached.
    pub fn execute(&self, repo_root: &Path, input: &PlanInput) -> Result<PlanOutput> {
        let config = self.config_provider.load_config(repo_root)?;
        let catalog = config.version_catalog();
        let platforms = config.platforms();

        let changes = DetectChangesOperation::new(&self.git_provider).execute(
            repo_root,
            &input.base,
            &input.head,
        )?;

        let candidates: Vec<String> = match &input.languages {
            Some(languages) => languages.clone(),
            None => catalog.languages().map(String::from).collect(),
        };
        let selected = select_languages(&candidates, &changes);
        debug!(?candidates, ?selected, "selected languages");

        let branch = match &input.branch {
            Some(branch) => Some(branch.clone()),
            None if selected.is_empty() => None,
            None => Some(
                self.git_provider
                    .current_branch(repo_root)
                    .map_err(OperationError::BranchResolution)?,
            ),
        };

        let plan = match &branch {
            Some(branch) => {
                let plan =
                    generate_test_matrix(&selected, &catalog, &platforms, input.optimize, branch);
                info!(jobs = plan.matrix.len(), branch, "generated test matrix");
                plan
            }
            None => {
                info!("no languages selected, skipping matrix generation");
                MatrixPlan::default()
            }
        };

        Ok(PlanOutput {
            changes,
            selected,
            branch,
            plan,
        })
    }
}
