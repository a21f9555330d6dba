//! Interactive clean: pick the untracked files to remove.

use crate::core::{
    candidate::{CandidateKind, PathContext},
    error::Result,
    git::{Git, Outcome},
    invocation::Invocation,
    providers,
    select::{choose, SelectMode},
};

pub fn execute_clean(git: &Git, invocation: &Invocation) -> Result<Outcome> {
    git.ensure_repository()?;

    let paths = PathContext::discover(git)?;
    let groups = providers::file_groups(git, &paths, &[CandidateKind::Untracked])?;

    let selection = choose("Clean", groups, SelectMode::Multi, false)?;
    if selection.is_empty() {
        return Ok(Outcome::Skipped);
    }

    let files = selection.into_iter().map(|candidate| candidate.text);
    git.run(&invocation.with_selection(files)).map(Outcome::Ran)
}
