//! Interactive inject: pick one commit and hand its hash to `git inject`.
//!
//! The hash goes in front of the residual arguments instead of behind them,
//! since `inject` expects the target commit first. This handler also skips the
//! repository check: `inject` is an external git extension expected to run in
//! contexts where the check may not apply.

use crate::core::{
    candidate::commit_hashes,
    error::Result,
    git::{Git, Outcome},
    invocation::Invocation,
    providers,
    select::{choose, SelectMode},
};

pub fn execute_inject(git: &Git, invocation: &Invocation) -> Result<Outcome> {
    let groups = providers::commit_log_group(git, None)?;
    let selection = choose("Inject into", groups, SelectMode::Single, true)?;
    if selection.is_empty() {
        return Ok(Outcome::Skipped);
    }

    git.run(&invocation.with_leading_selection(commit_hashes(&selection)))
        .map(Outcome::Ran)
}
