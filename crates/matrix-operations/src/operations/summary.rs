use matrix_core::{Category, ChangeSet, Matrix};

const NO_TESTS_NOTICE: &str = "❌ No tests to run";

/// Renders the matrix as a markdown table in generation order.
#[must_use]
pub fn format_matrix_summary(matrix: &Matrix) -> String {
    let mut output = String::from("## Test Matrix\n\n");

    if matrix.is_empty() {
        output.push_str(NO_TESTS_NOTICE);
        output.push('\n');
        return output;
    }

    output.push_str(&format!("**Total Jobs**: {}\n\n", matrix.len()));
    output.push_str("| Language | Version | Platform |\n");
    output.push_str("|----------|---------|----------|\n");
    for entry in matrix.entries() {
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            entry.language, entry.version, entry.os
        ));
    }

    output
}

/// Renders one line per tracked category with its change flag.
#[must_use]
pub fn format_change_summary(changes: &ChangeSet) -> String {
    let mut output = String::from("## Changed Files\n\n");

    for category in Category::ALL {
        output.push_str(&format!("- {category}: {}\n", changes.is_changed(category)));
    }
    output.push_str(&format!("\n**Files changed**: {}\n", changes.files().len()));

    output
}
