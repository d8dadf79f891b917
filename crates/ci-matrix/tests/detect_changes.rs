mod common;

use std::fs;

use predicates::str::contains;
use tempfile::TempDir;

use common::{ci_matrix, create_channel_files, create_configured_repo, git_add_and_commit, write_file};

#[test]
fn prints_flags_for_changed_categories() {
    let repo = create_configured_repo();
    write_file(&repo, "app/server.py", "print('hi')\n");
    write_file(&repo, "requirements.txt", "requests\n");
    git_add_and_commit(&repo, "Add python service");

    ci_matrix(&repo)
        .args(["detect-changes", "--base", "main"])
        .assert()
        .success()
        .stdout(contains("python_changed=true"))
        .stdout(contains("go_changed=false"))
        .stdout(contains("workflows_changed=false"))
        .stdout(contains("changed_files=2"));
}

#[test]
fn markdown_in_workflows_sets_docs_and_workflows() {
    let repo = create_configured_repo();
    write_file(&repo, ".github/workflows/README.md", "# workflows\n");
    git_add_and_commit(&repo, "Document workflows");

    ci_matrix(&repo)
        .args(["detect-changes", "--base", "main"])
        .assert()
        .success()
        .stdout(contains("docs_changed=true"))
        .stdout(contains("workflows_changed=true"));
}

#[test]
fn identical_references_report_nothing() {
    let repo = create_configured_repo();

    ci_matrix(&repo)
        .args(["detect-changes", "--base", "main", "--head", "main"])
        .assert()
        .success()
        .stdout(contains("changed_files=0"));
}

#[test]
fn output_flag_writes_github_output() {
    let repo = create_configured_repo();
    write_file(&repo, "Dockerfile", "FROM scratch\n");
    git_add_and_commit(&repo, "Add container image");
    let runner = TempDir::new().expect("failed to create temp dir");
    let (output, _) = create_channel_files(&runner);

    ci_matrix(&repo)
        .args(["detect-changes", "--base", "main", "--output"])
        .env("GITHUB_OUTPUT", &output)
        .assert()
        .success();

    let outputs = fs::read_to_string(output).expect("failed to read outputs");
    assert!(outputs.contains("docker_changed=true\n"));
    assert!(outputs.contains("rust_changed=false\n"));
    assert!(outputs.ends_with("changed_files=1\n"));
}

#[test]
fn output_flag_with_missing_file_fails() {
    let repo = create_configured_repo();
    let runner = TempDir::new().expect("failed to create temp dir");

    ci_matrix(&repo)
        .args(["detect-changes", "--base", "main", "--output"])
        .env("GITHUB_OUTPUT", runner.path().join("absent"))
        .assert()
        .failure()
        .stderr(contains("does not exist"))
        .stderr(contains("GitHub Actions workflow"));
}

#[test]
fn runs_from_subdirectory() {
    let repo = create_configured_repo();
    write_file(&repo, "pkg/lib/util.go", "package lib\n");
    git_add_and_commit(&repo, "Add util");

    ci_matrix(&repo)
        .args(["-C", "pkg/lib", "detect-changes", "--base", "main"])
        .assert()
        .success()
        .stdout(contains("go_changed=true"));
}
