/// Jobs whose result decides the pipeline outcome, keyed by the variable the
/// workflow passes each job's `result` in.
pub const PIPELINE_JOBS: [(&str, &str); 7] = [
    ("JOB_LINT", "Lint"),
    ("JOB_TEST_GO", "Test Go"),
    ("JOB_TEST_FRONTEND", "Test Frontend"),
    ("JOB_TEST_PYTHON", "Test Python"),
    ("JOB_TEST_RUST", "Test Rust"),
    ("JOB_TEST_DOCKER", "Test Docker"),
    ("JOB_RELEASE_BUILD", "Release Build"),
];

const FAILURE: &str = "failure";

/// Names of the [`PIPELINE_JOBS`] whose result is `failure`.
///
/// `result_of` maps a job variable to its value. Skipped, cancelled and
/// unreported jobs do not fail the pipeline.
#[must_use]
pub fn failed_jobs<F>(result_of: F) -> Vec<&'static str>
where
    F: Fn(&str) -> Option<String>,
{
    PIPELINE_JOBS
        .iter()
        .filter(|&&(var, _)| result_of(var).is_some_and(|result| result == FAILURE))
        .map(|&(_, job)| job)
        .collect()
}
