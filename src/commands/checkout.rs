//! Interactive checkout: changed files plus local and remote branches.
//!
//! The selected kind decides everything. Files and plain local branches pass
//! through as the sole extra argument; the current branch is a no-op; a
//! branch held by another worktree refuses the checkout and shows the
//! worktree listing instead; a remote branch becomes a new local tracking
//! branch named after its last path segment. A successful checkout is
//! followed by exactly one recursive submodule update.

use crate::core::{
    candidate::{Candidate, CandidateKind, PathContext},
    error::Result,
    git::{Git, Outcome},
    invocation::Invocation,
    output::print_info,
    providers,
    select::{choose, SelectMode},
};

pub fn execute_checkout(git: &Git, invocation: &Invocation) -> Result<Outcome> {
    git.ensure_repository()?;

    let paths = PathContext::discover(git)?;
    let mut groups = providers::file_groups(
        git,
        &paths,
        &[CandidateKind::Modified, CandidateKind::Deleted],
    )?;
    groups.extend(providers::branch_groups(git)?);

    let selection = choose("Checkout", groups, SelectMode::Single, false)?;
    let picked = match selection.first() {
        Some(picked) => picked,
        None => return Ok(Outcome::Skipped),
    };

    match checkout_action(picked) {
        CheckoutAction::AlreadyCurrent => {
            print_info(&format!("Already on '{}'", picked.text));
            Ok(Outcome::Skipped)
        }
        CheckoutAction::ShowWorktrees => {
            print_info(&format!(
                "'{}' is checked out in another worktree:",
                picked.text
            ));
            git.run(&worktree_list_args()).map(Outcome::Ran)
        }
        CheckoutAction::Run(extra) => {
            let code = git.run(&invocation.with_selection(extra))?;
            if code != 0 {
                return Ok(Outcome::Ran(code));
            }
            git.run(&submodule_update_args()).map(Outcome::Ran)
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum CheckoutAction {
    AlreadyCurrent,
    ShowWorktrees,
    Run(Vec<String>),
}

/// Map the selected candidate's kind to the checkout policy
pub(crate) fn checkout_action(picked: &Candidate) -> CheckoutAction {
    match picked.kind {
        CandidateKind::CurrentBranch => CheckoutAction::AlreadyCurrent,
        CandidateKind::WorktreeBranch => CheckoutAction::ShowWorktrees,
        CandidateKind::RemoteBranch => {
            let local = picked
                .text
                .rsplit('/')
                .next()
                .unwrap_or(picked.text.as_str());
            CheckoutAction::Run(vec![
                "-b".to_string(),
                local.to_string(),
                picked.text.clone(),
            ])
        }
        _ => CheckoutAction::Run(vec![picked.text.clone()]),
    }
}

fn worktree_list_args() -> Vec<String> {
    vec!["worktree".to_string(), "list".to_string()]
}

fn submodule_update_args() -> Vec<String> {
    vec![
        "submodule".to_string(),
        "update".to_string(),
        "--init".to_string(),
        "--recursive".to_string(),
    ]
}
