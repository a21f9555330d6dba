//! The process boundary to the wrapped `git` binary.
//!
//! [`Git`] is the only place that spawns processes. It distinguishes two call
//! shapes: [`Git::query`] captures stdout for the candidate providers and
//! treats a non-zero exit as an error, while [`Git::run`] hands the terminal
//! to git (inherited stdio) and reports the exit code back unchanged. A
//! failing re-invocation is git's business, not ours.
//!
//! In dry-run mode `run` prints the rendered command line instead of
//! executing it; queries still execute, since candidate listings are needed
//! to get that far.

use crate::core::error::{GitSelectorError, Result};
use std::borrow::Cow;
use std::process::{Command, Stdio};

/// Exit code used when no git command was ultimately executed, so automation
/// can tell "nothing happened" from "success".
pub const NO_COMMAND_RUN: i32 = 127;

/// Terminal state of one dispatched invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// git ran; carries its exit code
    Ran(i32),
    /// No git command was executed (cancelled selection, empty pool, no-op)
    Skipped,
}

impl Outcome {
    /// The process exit code this outcome maps to
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Ran(code) => *code,
            Outcome::Skipped => NO_COMMAND_RUN,
        }
    }
}

pub struct Git {
    binary: String,
    dry_run: bool,
}

impl Git {
    pub fn new(dry_run: bool) -> Self {
        Self {
            binary: "git".to_string(),
            dry_run,
        }
    }

    /// Run git with inherited stdio and return its exit code.
    ///
    /// In dry-run mode the rendered command is printed instead and 0 is
    /// returned.
    pub fn run(&self, args: &[String]) -> Result<i32> {
        let rendered = self.render_command(args.iter().map(String::as_str));
        if self.dry_run {
            println!("{rendered}");
            return Ok(0);
        }

        log::debug!("running: {rendered}");
        let status = Command::new(&self.binary).args(args).status()?;
        Ok(status.code().unwrap_or(1))
    }

    /// Run git with captured output and return its stdout as text.
    ///
    /// A non-zero exit is an error here: every query feeds a candidate list,
    /// and a failed listing means there is nothing sensible to show.
    pub fn query(&self, args: &[&str]) -> Result<String> {
        let rendered = self.render_command(args.iter().copied());
        log::debug!("querying: {rendered}");

        let output = Command::new(&self.binary).args(args).output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitSelectorError::command_failed(
                rendered,
                stderr.trim().to_string(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Assert the current directory is inside a git repository.
    ///
    /// Runs the status query with both streams discarded; a non-zero exit
    /// means we are not in a repository and everything else must stop.
    pub fn ensure_repository(&self) -> Result<()> {
        let status = Command::new(&self.binary)
            .arg("status")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;

        if status.success() {
            Ok(())
        } else {
            Err(GitSelectorError::NotInGitRepo)
        }
    }

    /// Render a command line for display, quoting whitespace arguments
    pub fn render_command<'a>(&self, args: impl Iterator<Item = &'a str>) -> String {
        let mut rendered = self.binary.clone();
        for arg in args {
            rendered.push(' ');
            rendered.push_str(&quote(arg));
        }
        rendered
    }
}

/// Wrap an argument in double quotes when it contains whitespace and is not
/// already quoted
fn quote(arg: &str) -> Cow<'_, str> {
    let quoted = arg.starts_with('"') && arg.ends_with('"') && arg.len() >= 2;
    if arg.contains(char::is_whitespace) && !quoted {
        Cow::Owned(format!("\"{arg}\""))
    } else {
        Cow::Borrowed(arg)
    }
}
