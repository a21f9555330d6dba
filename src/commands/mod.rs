//! Per-subcommand handlers and the dispatch table.
//!
//! Dispatch is a short state machine over one invocation: free arguments
//! force a verbatim pass-through, an unregistered subcommand is also a
//! pass-through (never an error), and otherwise the handler decides from the
//! flags whether to run a selection pass first.

pub mod add;
pub mod branch;
pub mod checkout;
pub mod cherry_pick;
pub mod clean;
pub mod diff;
pub mod inject;
pub mod merge;
pub mod rebase;
pub mod reset;
pub mod revert;
pub mod rm;
pub mod show;

use crate::core::{
    error::Result,
    git::{Git, Outcome},
    invocation::Invocation,
};

/// A per-subcommand handler: invocation in, terminal outcome out
pub type Handler = fn(&Git, &Invocation) -> Result<Outcome>;

/// Static subcommand-to-handler mapping; absence means pass-through
pub fn lookup(subcommand: &str) -> Option<Handler> {
    let handler: Handler = match subcommand {
        "checkout" => checkout::execute_checkout,
        "add" => add::execute_add,
        "rebase" => rebase::execute_rebase,
        "reset" => reset::execute_reset,
        "show" => show::execute_show,
        "branch" => branch::execute_branch,
        "merge" => merge::execute_merge,
        "rm" => rm::execute_rm,
        "clean" => clean::execute_clean,
        "cherry-pick" => cherry_pick::execute_cherry_pick,
        "revert" => revert::execute_revert,
        "inject" => inject::execute_inject,
        "diff" => diff::execute_diff,
        _ => return None,
    };
    Some(handler)
}

/// Dispatch one invocation: pass through or hand off to a handler
pub fn dispatch(git: &Git, args: &[String]) -> Result<Outcome> {
    let invocation = match Invocation::parse(args) {
        Some(invocation) => invocation,
        None => return git.run(args).map(Outcome::Ran),
    };

    // A free argument means the user already named their target
    if !invocation.free_args.is_empty() {
        return git.run(args).map(Outcome::Ran);
    }

    match lookup(&invocation.subcommand) {
        Some(handler) => handler(git, &invocation),
        None => git.run(args).map(Outcome::Ran),
    }
}

/// Forward the invocation to git unchanged
pub(crate) fn passthrough(git: &Git, invocation: &Invocation) -> Result<Outcome> {
    git.run(&invocation.forward_args()).map(Outcome::Ran)
}
