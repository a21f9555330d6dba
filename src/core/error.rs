//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitSelectorError`] which covers the three failure
//! families of the tool: environment errors (not inside a repository),
//! usage/logic errors (invalid selections), and failures of the wrapped git
//! process itself. It uses `thiserror` for ergonomic error definitions.
//!
//! Note that a *non-zero exit* of a re-invoked git command is not an error at
//! all: it is propagated as this process's exit code. Only queries whose
//! output the tool needs (status, branch listings, log) surface as
//! [`GitSelectorError::CommandFailed`].

use thiserror::Error;

/// Domain-specific error types for git-selector
#[derive(Error, Debug)]
pub enum GitSelectorError {
    // Environment errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // External query failures
    #[error("git command failed: {command}: {stderr}")]
    CommandFailed { command: String, stderr: String },

    // Selection menu failures (a cancelled menu is not an error)
    #[error("Selection failed: {0}")]
    Menu(#[from] inquire::InquireError),

    // Usage errors
    #[error("Cannot mix staged and unstaged files in a single diff")]
    MixedDiffSelection,

    #[error("'{text}' is not a branch")]
    NotABranch { text: String },
}

/// Convenience type alias for Results using GitSelectorError
pub type Result<T> = std::result::Result<T, GitSelectorError>;

impl GitSelectorError {
    /// Create a command failed error from a rendered command line and stderr
    pub fn command_failed(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::CommandFailed {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Create a not-a-branch error for a selected candidate
    pub fn not_a_branch(text: impl Into<String>) -> Self {
        Self::NotABranch { text: text.into() }
    }
}
