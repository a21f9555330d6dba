//! Interactive branch deletion.
//!
//! Only `-D`/`-d` trigger a selection pass; the picked local branches are
//! appended to the delete flag. Everything else (plain listings, creation,
//! renames) passes through.

use crate::commands::passthrough;
use crate::core::{
    error::Result,
    git::{Git, Outcome},
    invocation::Invocation,
    providers,
    select::{choose, SelectMode},
};

pub fn execute_branch(git: &Git, invocation: &Invocation) -> Result<Outcome> {
    git.ensure_repository()?;

    if !invocation.has_any_flag(&["-D", "-d"]) {
        return passthrough(git, invocation);
    }

    let groups = providers::local_branch_group(git)?;
    let selection = choose("Delete branches", groups, SelectMode::Multi, false)?;
    if selection.is_empty() {
        return Ok(Outcome::Skipped);
    }

    let branches = selection.into_iter().map(|candidate| candidate.text);
    git.run(&invocation.with_selection(branches))
        .map(Outcome::Ran)
}
