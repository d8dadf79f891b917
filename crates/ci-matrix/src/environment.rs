const HEAD_REF_VAR: &str = "GITHUB_HEAD_REF";
const REF_NAME_VAR: &str = "GITHUB_REF_NAME";
const COMMIT_MESSAGE_VAR: &str = "GITHUB_HEAD_COMMIT_MESSAGE";

/// Branch the workflow runs for. `GITHUB_HEAD_REF` is only populated on
/// pull request events and is empty otherwise, so it falls through to
/// `GITHUB_REF_NAME`.
pub(crate) fn branch_from_env() -> Option<String> {
    non_empty_var(HEAD_REF_VAR).or_else(|| non_empty_var(REF_NAME_VAR))
}

pub(crate) fn commit_message_from_env() -> Option<String> {
    non_empty_var(COMMIT_MESSAGE_VAR)
}

/// Result of a workflow job as passed in `JOB_*` variables, e.g. `failure`.
pub(crate) fn job_result_from_env(var: &str) -> Option<String> {
    non_empty_var(var)
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
