//! Git Selector - an interactive front-end for git subcommands.
//!
//! Instead of typing branch names, file paths, or commit hashes, the user
//! picks them from a terminal menu: the tool intercepts a subset of git
//! subcommands, gathers candidate items (branches, files, commits) from git
//! itself, and re-invokes git with the selection substituted as arguments.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Candidate classification and the typed candidate model
//! - Candidate providers over live repository state
//! - The menu-backed selection engine
//! - The process boundary to the wrapped git binary
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    choose,
    commit_hashes,
    // Candidate model and classifier
    Candidate,
    CandidateGroup,
    CandidateKind,
    // Process boundary
    Git,
    // Error handling
    GitSelectorError,
    // Dispatch input
    Invocation,
    Outcome,
    PathContext,
    Result,
    // Selection engine
    SelectMode,
    NO_COMMAND_RUN,
};
