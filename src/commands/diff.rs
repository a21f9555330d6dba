//! Interactive diff across staged, modified and conflicted files.
//!
//! One invocation of git diff can show either the index or the worktree, not
//! both, so a multi-selection spanning more than one kind is a usage error. A
//! purely staged selection gets `--cached` injected ahead of the file
//! arguments.

use crate::commands::passthrough;
use crate::core::{
    candidate::{Candidate, CandidateKind, PathContext},
    error::{GitSelectorError, Result},
    git::{Git, Outcome},
    invocation::Invocation,
    providers,
    select::{choose, SelectMode},
};

pub fn execute_diff(git: &Git, invocation: &Invocation) -> Result<Outcome> {
    git.ensure_repository()?;

    if !invocation.args.is_empty() {
        return passthrough(git, invocation);
    }

    let paths = PathContext::discover(git)?;
    let groups = providers::file_groups(
        git,
        &paths,
        &[
            CandidateKind::Staged,
            CandidateKind::Modified,
            CandidateKind::Unmerged,
        ],
    )?;

    let selection = choose("Diff", groups, SelectMode::Multi, false)?;
    if selection.is_empty() {
        return Ok(Outcome::Skipped);
    }

    git.run(&diff_arguments(invocation, &selection)?)
        .map(Outcome::Ran)
}

/// Build the final diff argument list, rejecting mixed-kind selections
pub(crate) fn diff_arguments(
    invocation: &Invocation,
    selection: &[Candidate],
) -> Result<Vec<String>> {
    let kind = selection[0].kind;
    if selection.iter().any(|candidate| candidate.kind != kind) {
        return Err(GitSelectorError::MixedDiffSelection);
    }

    let mut extra = Vec::with_capacity(selection.len() + 1);
    if kind == CandidateKind::Staged {
        extra.push("--cached".to_string());
    }
    extra.extend(selection.iter().map(|candidate| candidate.text.clone()));

    Ok(invocation.with_selection(extra))
}
