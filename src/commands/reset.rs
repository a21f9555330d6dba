//! Interactive unstaging of staged changes and staged deletions.
//!
//! Any residual argument passes through, same as every other handler's
//! fallback.

use crate::commands::passthrough;
use crate::core::{
    candidate::{CandidateKind, PathContext},
    error::Result,
    git::{Git, Outcome},
    invocation::Invocation,
    providers,
    select::{choose, SelectMode},
};

pub fn execute_reset(git: &Git, invocation: &Invocation) -> Result<Outcome> {
    git.ensure_repository()?;

    if !invocation.args.is_empty() {
        return passthrough(git, invocation);
    }

    let paths = PathContext::discover(git)?;
    let groups = providers::file_groups(
        git,
        &paths,
        &[CandidateKind::Staged, CandidateKind::StagedDeleted],
    )?;

    let selection = choose("Reset", groups, SelectMode::Multi, false)?;
    if selection.is_empty() {
        return Ok(Outcome::Skipped);
    }

    let files = selection.into_iter().map(|candidate| candidate.text);
    git.run(&invocation.with_selection(files)).map(Outcome::Ran)
}
