//! Interactive revert: pick one commit from the log.

use crate::commands::passthrough;
use crate::core::{
    candidate::commit_hashes,
    error::Result,
    git::{Git, Outcome},
    invocation::Invocation,
    providers,
    select::{choose, SelectMode},
};

pub fn execute_revert(git: &Git, invocation: &Invocation) -> Result<Outcome> {
    git.ensure_repository()?;

    if !invocation.flags.is_empty() {
        return passthrough(git, invocation);
    }

    let groups = providers::commit_log_group(git, None)?;
    let selection = choose("Revert", groups, SelectMode::Single, true)?;
    if selection.is_empty() {
        return Ok(Outcome::Skipped);
    }

    git.run(&invocation.with_selection(commit_hashes(&selection)))
        .map(Outcome::Ran)
}
