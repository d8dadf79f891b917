use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Supported versions per language, in configuration order.
///
/// The last version of each list is treated as the latest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionCatalog {
    languages: IndexMap<String, Vec<String>>,
}

impl VersionCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_language<I, S>(mut self, language: &str, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(language, versions);
        self
    }

    pub fn insert<I, S>(&mut self, language: &str, versions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages.insert(
            language.to_string(),
            versions.into_iter().map(Into::into).collect(),
        );
    }

    /// Returns the configured versions, or `None` when the language is absent
    /// or its list is empty.
    #[must_use]
    pub fn versions(&self, language: &str) -> Option<&[String]> {
        self.languages
            .get(language)
            .map(Vec::as_slice)
            .filter(|versions| !versions.is_empty())
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for VersionCatalog {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        Self {
            languages: iter.into_iter().collect(),
        }
    }
}

/// One concrete test job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatrixEntry {
    pub language: String,
    pub version: String,
    pub os: String,
    pub branch: String,
}

/// Ordered job list, serialized in the shape GitHub Actions expects for `strategy.matrix`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix {
    pub include: Vec<MatrixEntry>,
}

impl Matrix {
    #[must_use]
    pub fn len(&self) -> usize {
        self.include.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.include.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &MatrixEntry> {
        self.include.iter()
    }

    pub fn push(&mut self, entry: MatrixEntry) {
        self.include.push(entry);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NoVersionsConfigured,
    NoPlatformsConfigured,
    BranchVersionNotConfigured { target: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoVersionsConfigured => f.write_str("no versions configured"),
            Self::NoPlatformsConfigured => f.write_str("no platforms configured"),
            Self::BranchVersionNotConfigured { target } => {
                write!(f, "branch target {target} not in configured versions")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLanguage {
    pub language: String,
    pub reason: SkipReason,
}

/// Result of matrix generation: the jobs to run plus the languages that were
/// left out because of configuration gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixPlan {
    pub matrix: Matrix,
    pub skipped: Vec<SkippedLanguage>,
}

impl MatrixPlan {
    #[must_use]
    pub fn has_tests(&self) -> bool {
        !self.matrix.is_empty()
    }
}
