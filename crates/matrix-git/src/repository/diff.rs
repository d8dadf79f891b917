use std::path::Path;

use tracing::debug;

use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// Lists the paths that differ between two references, in diff order.
    ///
    /// Renamed files are reported once, under their new path. Deleted files are
    /// reported under their old path.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if either base or head cannot be resolved.
    pub fn changed_paths(&self, base: &str, head: &str) -> Result<Vec<String>> {
        let base_tree = self.resolve_tree(base)?;
        let head_tree = self.resolve_tree(head)?;

        let mut diff = self
            .inner
            .diff_tree_to_tree(Some(&base_tree), Some(&head_tree), None)?;

        let mut find_opts = git2::DiffFindOptions::new();
        find_opts.renames(true);
        diff.find_similar(Some(&mut find_opts))?;

        let mut paths = Vec::new();

        for delta in diff.deltas() {
            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .ok_or(GitError::MissingDeltaPath)?;

            paths.push(path_to_string(path)?);
        }

        debug!(base, head, count = paths.len(), "computed changed paths");

        Ok(paths)
    }

    fn resolve_tree(&self, refspec: &str) -> Result<git2::Tree<'_>> {
        let obj = self
            .inner
            .revparse_single(refspec)
            .map_err(|_| GitError::RefNotFound {
                refspec: refspec.to_string(),
            })?;

        obj.peel_to_tree().map_err(|_| GitError::RefNotFound {
            refspec: refspec.to_string(),
        })
    }
}

fn path_to_string(path: &Path) -> Result<String> {
    let text = path.to_str().ok_or_else(|| GitError::NonUtf8Path {
        path: path.to_path_buf(),
    })?;
    // git reports forward slashes on every platform
    Ok(text.replace('\\', "/"))
}
