//! Interactive cherry-pick: pick a branch, then commits from its log.
//!
//! Two selection passes back to back: the chosen branch parametrizes the
//! commit-log provider, and the multi-selected hashes are appended
//! oldest-pick-first so git applies them in chronological order.

use crate::commands::passthrough;
use crate::core::{
    candidate::commit_hashes,
    error::{GitSelectorError, Result},
    git::{Git, Outcome},
    invocation::Invocation,
    providers,
    select::{choose, SelectMode},
};

pub fn execute_cherry_pick(git: &Git, invocation: &Invocation) -> Result<Outcome> {
    git.ensure_repository()?;

    if !invocation.flags.is_empty() {
        return passthrough(git, invocation);
    }

    let groups = providers::branch_groups(git)?;
    let selection = choose("Cherry-pick from", groups, SelectMode::Single, false)?;
    let branch = match selection.into_iter().next() {
        Some(picked) => picked,
        None => return Ok(Outcome::Skipped),
    };
    if !branch.kind.is_branch() {
        return Err(GitSelectorError::not_a_branch(branch.text));
    }

    let groups = providers::commit_log_group(git, Some(&branch.text))?;
    let selection = choose("Cherry-pick", groups, SelectMode::Multi, true)?;
    if selection.is_empty() {
        return Ok(Outcome::Skipped);
    }

    git.run(&invocation.with_selection(commit_hashes(&selection)))
        .map(Outcome::Ran)
}
