//! Interactive merge: pick one local branch.

use crate::commands::passthrough;
use crate::core::{
    error::Result,
    git::{Git, Outcome},
    invocation::Invocation,
    providers,
    select::{choose, SelectMode},
};

pub fn execute_merge(git: &Git, invocation: &Invocation) -> Result<Outcome> {
    git.ensure_repository()?;

    if !invocation.flags.is_empty() {
        return passthrough(git, invocation);
    }

    let groups = providers::local_branch_group(git)?;
    let selection = choose("Merge", groups, SelectMode::Single, false)?;
    let picked = match selection.into_iter().next() {
        Some(picked) => picked,
        None => return Ok(Outcome::Skipped),
    };

    git.run(&invocation.with_selection([picked.text]))
        .map(Outcome::Ran)
}
