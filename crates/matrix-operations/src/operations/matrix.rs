use matrix_core::{MatrixEntry, MatrixPlan, SkipReason, SkippedLanguage, VersionCatalog};
use tracing::{info, warn};

/// Branches named `stable-1-<language>-<version>` pin that language to one version.
pub const STABLE_BRANCH_PREFIX: &str = "stable-1-";

/// Extracts the pinned version for `language` from a stable-track branch name.
///
/// The version must start with a digit, so `stable-1-go-tools-1.0` pins
/// nothing for `go`.
#[must_use]
pub fn branch_version_target<'a>(branch: &'a str, language: &str) -> Option<&'a str> {
    branch
        .strip_prefix(STABLE_BRANCH_PREFIX)?
        .strip_prefix(language)?
        .strip_prefix('-')
        .filter(|version| version.starts_with(|c: char| c.is_ascii_digit()))
}

/// Expands `languages` into concrete jobs.
///
/// * On a stable-track branch the language runs only the pinned version, on
///   every platform. A pinned version missing from the catalog skips the language.
/// * With `optimize`, the latest version runs on every platform and each older
///   version runs on the first platform only.
/// * Otherwise every version runs on every platform.
///
/// Languages without versions or without platforms are skipped and reported in
/// [`MatrixPlan::skipped`]; they never abort generation for the others.
#[must_use]
pub fn generate_test_matrix<S: AsRef<str>>(
    languages: &[S],
    catalog: &VersionCatalog,
    platforms: &[String],
    optimize: bool,
    branch: &str,
) -> MatrixPlan {
    let mut plan = MatrixPlan::default();

    for language in languages.iter().map(AsRef::as_ref) {
        match expand_language(language, catalog, platforms, optimize, branch) {
            Ok(entries) => {
                for entry in entries {
                    if !plan.matrix.include.contains(&entry) {
                        plan.matrix.push(entry);
                    }
                }
            }
            Err(reason) => {
                warn!(language, %reason, "skipping language");
                plan.skipped.push(SkippedLanguage {
                    language: language.to_string(),
                    reason,
                });
            }
        }
    }

    plan
}

fn expand_language(
    language: &str,
    catalog: &VersionCatalog,
    platforms: &[String],
    optimize: bool,
    branch: &str,
) -> Result<Vec<MatrixEntry>, SkipReason> {
    let versions = catalog
        .versions(language)
        .ok_or(SkipReason::NoVersionsConfigured)?;
    let (primary, _) = platforms
        .split_first()
        .ok_or(SkipReason::NoPlatformsConfigured)?;

    let entry = |version: &str, os: &str| MatrixEntry {
        language: language.to_string(),
        version: version.to_string(),
        os: os.to_string(),
        branch: branch.to_string(),
    };

    if let Some(target) = branch_version_target(branch, language) {
        if !versions.iter().any(|version| version == target) {
            return Err(SkipReason::BranchVersionNotConfigured {
                target: target.to_string(),
            });
        }
        info!(language, version = target, branch, "stable branch pins version");
        return Ok(platforms.iter().map(|os| entry(target, os)).collect());
    }

    if optimize {
        let Some((latest, older)) = versions.split_last() else {
            return Err(SkipReason::NoVersionsConfigured);
        };

        let mut entries: Vec<MatrixEntry> = platforms.iter().map(|os| entry(latest, os)).collect();
        entries.extend(older.iter().map(|version| entry(version, primary)));
        return Ok(entries);
    }

    Ok(versions
        .iter()
        .flat_map(|version| platforms.iter().map(move |os| (version, os)))
        .map(|(version, os)| entry(version, os))
        .collect())
}
