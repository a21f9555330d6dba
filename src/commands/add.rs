//! Interactive staging of modified, conflicted and untracked files.
//!
//! `-i`/`--interactive` passes through so git's own interactive add keeps
//! working.

use crate::commands::passthrough;
use crate::core::{
    candidate::{CandidateKind, PathContext},
    error::Result,
    git::{Git, Outcome},
    invocation::Invocation,
    providers,
    select::{choose, SelectMode},
};

pub fn execute_add(git: &Git, invocation: &Invocation) -> Result<Outcome> {
    git.ensure_repository()?;

    if invocation.has_any_flag(&["-i", "--interactive"]) {
        return passthrough(git, invocation);
    }

    let paths = PathContext::discover(git)?;
    let groups = providers::file_groups(
        git,
        &paths,
        &[
            CandidateKind::Modified,
            CandidateKind::Unmerged,
            CandidateKind::Untracked,
        ],
    )?;

    let selection = choose("Add", groups, SelectMode::Multi, false)?;
    if selection.is_empty() {
        return Ok(Outcome::Skipped);
    }

    let files = selection.into_iter().map(|candidate| candidate.text);
    git.run(&invocation.with_selection(files)).map(Outcome::Ran)
}
