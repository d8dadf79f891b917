use matrix_operations::OperationError;
use matrix_operations::operations::failed_jobs;
use tracing::debug;

use crate::environment::job_result_from_env;
use crate::error::Result;

pub(crate) fn run() -> Result<()> {
    let failed = failed_jobs(job_result_from_env);
    debug!(?failed, "collected job results");

    if !failed.is_empty() {
        return Err(OperationError::PipelineFailed { jobs: failed }.into());
    }

    println!("✅ CI pipeline succeeded");
    Ok(())
}
