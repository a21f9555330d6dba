//! Interactive `show`: pick one commit from the log.

use crate::core::{
    candidate::commit_hashes,
    error::Result,
    git::{Git, Outcome},
    invocation::Invocation,
    providers,
    select::{choose, SelectMode},
};

pub fn execute_show(git: &Git, invocation: &Invocation) -> Result<Outcome> {
    git.ensure_repository()?;

    let groups = providers::commit_log_group(git, None)?;
    let selection = choose("Show", groups, SelectMode::Single, true)?;
    if selection.is_empty() {
        return Ok(Outcome::Skipped);
    }

    git.run(&invocation.with_selection(commit_hashes(&selection)))
        .map(Outcome::Ran)
}
