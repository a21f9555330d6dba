use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;
use common::repository::*;

#[cfg(test)]
mod dispatch_tests {
    use super::*;

    #[test]
    fn test_free_arguments_bypass_interaction() -> anyhow::Result<()> {
        // A named target means no menu: the invocation is forwarded verbatim,
        // without even a repository check.
        let temp = tempfile::TempDir::new()?;

        let mut cmd = Command::cargo_bin("git-selector")?;
        cmd.arg("--dry-run")
            .args(["add", "foo.txt"])
            .current_dir(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("git add foo.txt"));

        Ok(())
    }

    #[test]
    fn test_whitespace_arguments_are_quoted_in_rendering() -> anyhow::Result<()> {
        let temp = tempfile::TempDir::new()?;

        let mut cmd = Command::cargo_bin("git-selector")?;
        cmd.arg("--dry-run")
            .args(["add", "my file.txt"])
            .current_dir(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("git add \"my file.txt\""));

        Ok(())
    }

    #[test]
    fn test_unregistered_subcommand_passes_through() -> anyhow::Result<()> {
        let temp = tempfile::TempDir::new()?;

        let mut cmd = Command::cargo_bin("git-selector")?;
        cmd.arg("--dry-run")
            .arg("stash")
            .current_dir(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("git stash"));

        Ok(())
    }

    #[test]
    fn test_interactive_add_flag_passes_through() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        let mut cmd = Command::cargo_bin("git-selector")?;
        cmd.arg("--dry-run")
            .args(["add", "--interactive"])
            .current_dir(&repo.path)
            .assert()
            .success()
            .stdout(predicate::str::contains("git add --interactive"));

        Ok(())
    }

    #[test]
    fn test_reset_with_residual_arguments_passes_through() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        let mut cmd = Command::cargo_bin("git-selector")?;
        cmd.arg("--dry-run")
            .args(["reset", "--hard"])
            .current_dir(&repo.path)
            .assert()
            .success()
            .stdout(predicate::str::contains("git reset --hard"));

        Ok(())
    }

    #[test]
    fn test_branch_without_delete_flag_passes_through() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        let mut cmd = Command::cargo_bin("git-selector")?;
        cmd.arg("--dry-run")
            .args(["branch", "--all"])
            .current_dir(&repo.path)
            .assert()
            .success()
            .stdout(predicate::str::contains("git branch --all"));

        Ok(())
    }

    #[test]
    fn test_help_flag_prints_banner_and_forwards() -> anyhow::Result<()> {
        let temp = tempfile::TempDir::new()?;

        let mut cmd = Command::cargo_bin("git-selector")?;
        cmd.arg("--dry-run")
            .arg("--help")
            .current_dir(temp.path())
            .assert()
            .success()
            .stderr(predicate::str::contains("git-selector"))
            .stdout(predicate::str::contains("git --help"));

        Ok(())
    }

    #[test]
    fn test_bare_invocation_prints_banner() -> anyhow::Result<()> {
        let temp = tempfile::TempDir::new()?;

        // Bare git exits 1 after printing usage; the banner goes to stderr
        // and the invocation is still forwarded.
        let mut cmd = Command::cargo_bin("git-selector")?;
        cmd.current_dir(temp.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("git-selector"));

        Ok(())
    }

    #[test]
    fn test_registered_subcommand_outside_repository_is_fatal() -> anyhow::Result<()> {
        let temp = tempfile::TempDir::new()?;

        let mut cmd = Command::cargo_bin("git-selector")?;
        cmd.arg("clean")
            .current_dir(temp.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Not in a git repository"));

        Ok(())
    }

    #[test]
    fn test_inject_skips_the_repository_check() -> anyhow::Result<()> {
        let temp = tempfile::TempDir::new()?;

        // inject fails later, at the log query, not at the repository check
        let mut cmd = Command::cargo_bin("git-selector")?;
        cmd.arg("inject")
            .current_dir(temp.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("git command failed"));

        Ok(())
    }
}

#[cfg(test)]
mod no_op_tests {
    use super::*;

    const NO_COMMAND_RUN: i32 = 127;

    #[test]
    fn test_clean_with_no_untracked_files_is_a_no_op() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        // Empty candidate pool: no menu is ever shown (the test harness has
        // no terminal, so reaching one would fail instead of exiting 127).
        let mut cmd = Command::cargo_bin("git-selector")?;
        cmd.arg("clean")
            .current_dir(&repo.path)
            .assert()
            .code(NO_COMMAND_RUN);

        Ok(())
    }

    #[test]
    fn test_reset_with_nothing_staged_is_a_no_op() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        let mut cmd = Command::cargo_bin("git-selector")?;
        cmd.arg("reset")
            .current_dir(&repo.path)
            .assert()
            .code(NO_COMMAND_RUN);

        Ok(())
    }

    #[test]
    fn test_diff_with_no_changes_is_a_no_op() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        let mut cmd = Command::cargo_bin("git-selector")?;
        cmd.arg("diff")
            .current_dir(&repo.path)
            .assert()
            .code(NO_COMMAND_RUN);

        Ok(())
    }

    #[test]
    fn test_no_op_exit_code_distinguishes_from_success() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        // The same subcommand with a free argument runs git for real and
        // exits 0, so automation can tell the two paths apart.
        let mut cmd = Command::cargo_bin("git-selector")?;
        cmd.args(["diff", "initial.txt"])
            .current_dir(&repo.path)
            .assert()
            .success();

        Ok(())
    }
}
