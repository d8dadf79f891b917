use matrix_core::{Category, ChangeSet};

/// Decides whether the test suite of `language` has to run for `changes`.
///
/// Changes to workflow files force every registered language to run. Names
/// that [`Category::from_language`] does not know are never selected.
#[must_use]
pub fn should_run_tests(language: &str, changes: &ChangeSet) -> bool {
    let Some(category) = Category::from_language(language) else {
        return false;
    };

    changes.is_changed(category) || changes.is_changed(Category::Workflows)
}

/// Filters `candidates` down to the languages whose tests must run, keeping order.
#[must_use]
pub fn select_languages<S: AsRef<str>>(candidates: &[S], changes: &ChangeSet) -> Vec<String> {
    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|language| should_run_tests(language, changes))
        .map(String::from)
        .collect()
}
