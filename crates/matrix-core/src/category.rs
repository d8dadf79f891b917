use std::fmt;

use serde::{Deserialize, Serialize};

/// A single path-matching rule of a [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPattern {
    /// The path ends with the given text (file extensions and well-known file names).
    Suffix(&'static str),
    /// The path contains the given text anywhere (directory-based categories).
    Contains(&'static str),
}

impl PathPattern {
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Suffix(suffix) => path.ends_with(suffix),
            Self::Contains(fragment) => path.contains(fragment),
        }
    }
}

const GO_PATTERNS: &[PathPattern] = &[
    PathPattern::Suffix(".go"),
    PathPattern::Suffix("go.mod"),
    PathPattern::Suffix("go.sum"),
];

const PYTHON_PATTERNS: &[PathPattern] = &[
    PathPattern::Suffix(".py"),
    PathPattern::Suffix("requirements.txt"),
    PathPattern::Suffix("pyproject.toml"),
    PathPattern::Suffix("setup.cfg"),
    PathPattern::Suffix("Pipfile"),
    PathPattern::Suffix("Pipfile.lock"),
];

const RUST_PATTERNS: &[PathPattern] = &[
    PathPattern::Suffix(".rs"),
    PathPattern::Suffix("Cargo.toml"),
    PathPattern::Suffix("Cargo.lock"),
];

const NODE_PATTERNS: &[PathPattern] = &[
    PathPattern::Suffix(".js"),
    PathPattern::Suffix(".jsx"),
    PathPattern::Suffix(".ts"),
    PathPattern::Suffix(".tsx"),
    PathPattern::Suffix(".vue"),
    PathPattern::Suffix(".css"),
    PathPattern::Suffix(".scss"),
    PathPattern::Suffix("package.json"),
    PathPattern::Suffix("package-lock.json"),
    PathPattern::Suffix("yarn.lock"),
    PathPattern::Suffix("pnpm-lock.yaml"),
];

const DOCKER_PATTERNS: &[PathPattern] = &[
    PathPattern::Suffix("Dockerfile"),
    PathPattern::Suffix(".dockerignore"),
    PathPattern::Contains("docker-compose"),
];

const DOCS_PATTERNS: &[PathPattern] = &[
    PathPattern::Suffix(".md"),
    PathPattern::Suffix(".rst"),
    PathPattern::Contains("docs/"),
];

const WORKFLOW_PATTERNS: &[PathPattern] = &[PathPattern::Contains(".github/workflows/")];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Go,
    Python,
    Rust,
    Node,
    Docker,
    Docs,
    Workflows,
}

impl Category {
    pub const ALL: [Self; 7] = [
        Self::Go,
        Self::Python,
        Self::Rust,
        Self::Node,
        Self::Docker,
        Self::Docs,
        Self::Workflows,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Python => "python",
            Self::Rust => "rust",
            Self::Node => "node",
            Self::Docker => "docker",
            Self::Docs => "docs",
            Self::Workflows => "workflows",
        }
    }

    #[must_use]
    pub fn patterns(self) -> &'static [PathPattern] {
        match self {
            Self::Go => GO_PATTERNS,
            Self::Python => PYTHON_PATTERNS,
            Self::Rust => RUST_PATTERNS,
            Self::Node => NODE_PATTERNS,
            Self::Docker => DOCKER_PATTERNS,
            Self::Docs => DOCS_PATTERNS,
            Self::Workflows => WORKFLOW_PATTERNS,
        }
    }

    #[must_use]
    pub fn matches(self, path: &str) -> bool {
        self.patterns().iter().any(|pattern| pattern.matches(path))
    }

    /// Maps a language name used in matrices to the category that gates its tests.
    ///
    /// Only languages with a test suite are registered; `docs`, `workflows` and
    /// unknown names return `None`.
    #[must_use]
    pub fn from_language(language: &str) -> Option<Self> {
        match language {
            "go" => Some(Self::Go),
            "python" => Some(Self::Python),
            "rust" => Some(Self::Rust),
            "node" | "frontend" => Some(Self::Node),
            "docker" => Some(Self::Docker),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
