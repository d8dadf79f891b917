use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CliError, Result};

const OUTPUT_VAR: &str = "GITHUB_OUTPUT";
const SUMMARY_VAR: &str = "GITHUB_STEP_SUMMARY";
const MULTILINE_DELIMITER: &str = "CI_MATRIX_EOF";

/// Step outputs and the job summary of the running GitHub Actions step.
///
/// Both channels are files that the runner creates before the step starts;
/// they are only ever appended to.
#[derive(Debug, Clone, Default)]
pub(crate) struct GithubActions {
    output: Option<PathBuf>,
    summary: Option<PathBuf>,
}

impl GithubActions {
    pub(crate) fn from_env() -> Self {
        Self {
            output: std::env::var_os(OUTPUT_VAR).map(PathBuf::from),
            summary: std::env::var_os(SUMMARY_VAR).map(PathBuf::from),
        }
    }

    #[cfg(test)]
    pub(crate) fn new(output: Option<PathBuf>, summary: Option<PathBuf>) -> Self {
        Self { output, summary }
    }

    /// Appends `name=value`, switching to the heredoc form for multi-line values.
    ///
    /// A multi-line value must not contain the heredoc delimiter as a line of its own.
    pub(crate) fn set_output(&self, name: &str, value: &str) -> Result<()> {
        let path = channel(self.output.as_deref(), OUTPUT_VAR)?;
        let record = if value.contains('\n') {
            if value
                .lines()
                .any(|line| line.trim_end_matches('\r') == MULTILINE_DELIMITER)
            {
                return Err(CliError::OutputDelimiterCollision {
                    name: name.to_string(),
                    delimiter: MULTILINE_DELIMITER,
                });
            }
            format!("{name}<<{MULTILINE_DELIMITER}\n{value}\n{MULTILINE_DELIMITER}\n")
        } else {
            format!("{name}={value}\n")
        };

        debug!(name, "writing step output");
        append(path, OUTPUT_VAR, &record)
    }

    pub(crate) fn set_outputs<'a, I>(&self, outputs: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        for (name, value) in outputs {
            self.set_output(name, &value)?;
        }
        Ok(())
    }

    pub(crate) fn append_summary(&self, markdown: &str) -> Result<()> {
        let path = channel(self.summary.as_deref(), SUMMARY_VAR)?;
        let mut record = markdown.to_string();
        if !record.ends_with('\n') {
            record.push('\n');
        }
        append(path, SUMMARY_VAR, &record)
    }
}

fn channel<'a>(path: Option<&'a Path>, name: &'static str) -> Result<&'a Path> {
    path.filter(|path| !path.as_os_str().is_empty())
        .ok_or(CliError::ActionsVariableMissing { name })
}

fn append(path: &Path, name: &'static str, content: &str) -> Result<()> {
    if !path.is_file() {
        return Err(CliError::ActionsFileMissing {
            name,
            path: path.to_path_buf(),
        });
    }

    OpenOptions::new()
        .append(true)
        .open(path)
        .and_then(|mut file| file.write_all(content.as_bytes()))
        .map_err(|source| CliError::ActionsWrite {
            path: path.to_path_buf(),
            source,
        })
}
