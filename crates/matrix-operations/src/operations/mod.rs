mod coverage;
mod detect;
mod execution;
mod matrix;
mod plan;
mod selection;
mod status;
mod summary;

pub use coverage::{CoverageCheck, CoverageFormat, LcovTotals, parse_go_total, read_coverage};
pub use detect::{DEFAULT_BASE_REF, DEFAULT_HEAD_REF, DetectChangesOperation};
pub use execution::{
    DetermineExecutionOperation, ExecutionDirectives, ExecutionRange, TEST_JOB_LANGUAGES,
    determine_execution,
};
pub use matrix::{STABLE_BRANCH_PREFIX, branch_version_target, generate_test_matrix};
pub use plan::{PlanInput, PlanMatrixOperation, PlanOutput};
pub use selection::{select_languages, should_run_tests};
pub use status::{PIPELINE_JOBS, failed_jobs};
pub use summary::{format_change_summary, format_matrix_summary};
