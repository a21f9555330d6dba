//! Core functionality for the git-selector tool.
//!
//! This module provides the building blocks of the selection pipeline:
//! candidate classification, repository-state providers, the menu-backed
//! selection engine, the process boundary to git, and error handling.

pub mod candidate;
pub mod error;
pub mod git;
pub mod invocation;
pub mod output;
pub mod providers;
pub mod select;

// === Error handling ===
pub use error::{GitSelectorError, Result};

// === Process boundary ===
pub use git::{Git, Outcome, NO_COMMAND_RUN};

// === Candidate model and classifier ===
pub use candidate::{
    commit_hashes, short_hash, strip_ansi_codes, Candidate, CandidateGroup, CandidateKind,
    PathContext,
};

// === Invocation parsing ===
pub use invocation::Invocation;

// === Selection engine ===
pub use select::{choose, SelectMode};

// === Output formatting ===
pub use output::{print_error, print_info};
