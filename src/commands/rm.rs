//! Interactive removal: deleted files plus the full tracked-file pool.

use crate::core::{
    candidate::{CandidateKind, PathContext},
    error::Result,
    git::{Git, Outcome},
    invocation::Invocation,
    providers,
    select::{choose, SelectMode},
};

pub fn execute_rm(git: &Git, invocation: &Invocation) -> Result<Outcome> {
    git.ensure_repository()?;

    let paths = PathContext::discover(git)?;
    let mut groups = providers::file_groups(git, &paths, &[CandidateKind::Deleted])?;
    groups.extend(providers::tracked_file_group(git, &paths)?);

    let selection = choose("Remove", groups, SelectMode::Multi, false)?;
    if selection.is_empty() {
        return Ok(Outcome::Skipped);
    }

    let files = selection.into_iter().map(|candidate| candidate.text);
    git.run(&invocation.with_selection(files)).map(Outcome::Ran)
}
