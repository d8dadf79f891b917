use std::collections::BTreeSet;

use crate::Category;

/// Changed paths between two references together with the categories they touch.
///
/// A category flag is set if and only if at least one path matches one of the
/// category's patterns. A single path may set several flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    files: Vec<String>,
    flags: BTreeSet<Category>,
}

impl ChangeSet {
    #[must_use]
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let files: Vec<String> = paths.into_iter().map(Into::into).collect();

        let flags = Category::ALL
            .into_iter()
            .filter(|category| files.iter().any(|file| category.matches(file)))
            .collect();

        Self { files, flags }
    }

    /// Builds a change set with the given flags and no file list.
    #[must_use]
    pub fn with_flags<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = Category>,
    {
        Self {
            files: Vec::new(),
            flags: flags.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    #[must_use]
    pub fn is_changed(&self, category: Category) -> bool {
        self.flags.contains(&category)
    }

    pub fn changed_categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.flags.iter().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.flags.is_empty()
    }
}
