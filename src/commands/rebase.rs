//! Interactive rebase target selection.
//!
//! With `-i`/`--interactive` the user multi-selects commits from the log and
//! the extracted hashes are appended oldest-pick-first. With no arguments at
//! all the user picks a branch to rebase onto. Any other flag combination
//! passes through.

use crate::commands::passthrough;
use crate::core::{
    candidate::commit_hashes,
    error::{GitSelectorError, Result},
    git::{Git, Outcome},
    invocation::Invocation,
    providers,
    select::{choose, SelectMode},
};

pub fn execute_rebase(git: &Git, invocation: &Invocation) -> Result<Outcome> {
    git.ensure_repository()?;

    if invocation.has_any_flag(&["-i", "--interactive"]) {
        let groups = providers::commit_log_group(git, None)?;
        let selection = choose("Rebase", groups, SelectMode::Multi, true)?;
        if selection.is_empty() {
            return Ok(Outcome::Skipped);
        }
        return git
            .run(&invocation.with_selection(commit_hashes(&selection)))
            .map(Outcome::Ran);
    }

    if !invocation.args.is_empty() {
        return passthrough(git, invocation);
    }

    let groups = providers::branch_groups(git)?;
    let selection = choose("Rebase onto", groups, SelectMode::Single, false)?;
    let picked = match selection.into_iter().next() {
        Some(picked) => picked,
        None => return Ok(Outcome::Skipped),
    };
    if !picked.kind.is_branch() {
        return Err(GitSelectorError::not_a_branch(picked.text));
    }

    git.run(&invocation.with_selection([picked.text]))
        .map(Outcome::Ran)
}
