#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

pub const CONFIG: &str = r#"
languages:
  versions:
    go: ["1.23", "1.24"]
    python: ["3.12", "3.13"]
build:
  platforms: [ubuntu-latest, macos-latest]
testing:
  coverage:
    go:
      threshold: 75
workflows:
  experimental:
    matrix_optimization: true
"#;

/// Variables the runner may have set for the test process itself.
pub const RUNNER_VARS: &[&str] = &[
    "GITHUB_OUTPUT",
    "GITHUB_STEP_SUMMARY",
    "GITHUB_HEAD_REF",
    "GITHUB_REF_NAME",
    "GITHUB_HEAD_COMMIT_MESSAGE",
    "RUST_LOG",
    "JOB_LINT",
    "JOB_TEST_GO",
    "JOB_TEST_FRONTEND",
    "JOB_TEST_PYTHON",
    "JOB_TEST_RUST",
    "JOB_TEST_DOCKER",
    "JOB_RELEASE_BUILD",
];

fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

pub fn init_git_repo(dir: &TempDir) {
    git(dir.path(), &["init", "--initial-branch=main"]);
    git(dir.path(), &["config", "user.email", "test@example.com"]);
    git(dir.path(), &["config", "user.name", "Test"]);
    git(dir.path(), &["config", "commit.gpgsign", "false"]);
}

pub fn git_add_and_commit(dir: &TempDir, message: &str) {
    git(dir.path(), &["add", "-A"]);
    git(dir.path(), &["commit", "-m", message]);
}

pub fn create_branch(dir: &TempDir, name: &str) {
    git(dir.path(), &["checkout", "-b", name]);
}

pub fn write_file(dir: &TempDir, relative: &str, content: &str) {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create parent dir");
    }
    fs::write(path, content).expect("failed to write file");
}

/// Repository on `main` with the sample config and a README, checked out on `feature`.
pub fn create_configured_repo() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    init_git_repo(&dir);

    write_file(&dir, ".github/repository-config.yml", CONFIG);
    write_file(&dir, "README.md", "# demo\n");
    git_add_and_commit(&dir, "Initial commit");

    create_branch(&dir, "feature");
    dir
}

/// Creates empty GITHUB_OUTPUT and GITHUB_STEP_SUMMARY files.
pub fn create_channel_files(dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let output = dir.path().join("github_output");
    let summary = dir.path().join("github_step_summary");
    fs::write(&output, "").expect("failed to create output file");
    fs::write(&summary, "").expect("failed to create summary file");
    (output, summary)
}

pub fn ci_matrix(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ci-matrix");
    cmd.current_dir(dir.path());
    for var in RUNNER_VARS {
        cmd.env_remove(var);
    }
    cmd
}
