//! Candidate providers: named queries over live repository state.
//!
//! Each provider runs one or more git queries and returns zero or more
//! non-empty [`CandidateGroup`]s. Nothing is cached; every invocation reads
//! fresh process output.

use crate::core::{
    candidate::{
        classify_branch_line, classify_remote_branch_line, Candidate, CandidateGroup,
        CandidateKind, PathContext,
    },
    error::Result,
    git::Git,
};

/// Default number of commit-log entries offered for selection
const LOG_LIMIT: &str = "--max-count=100";

/// Partition one `status --porcelain` line into its single candidate kind.
///
/// Priority order keeps every changed path in exactly one bucket: untracked,
/// conflicted, staged deletion, staged, deleted, modified.
pub(crate) fn classify_status_line(line: &str) -> Option<(CandidateKind, &str)> {
    let bytes = line.as_bytes();
    if bytes.len() < 4 {
        return None;
    }
    let index = bytes[0] as char;
    let worktree = bytes[1] as char;
    let path = &line[3..];

    let kind = if index == '?' {
        CandidateKind::Untracked
    } else if index == 'U' {
        CandidateKind::Unmerged
    } else if index == 'D' {
        CandidateKind::StagedDeleted
    } else if matches!(index, 'M' | 'A' | 'R') {
        CandidateKind::Staged
    } else if worktree == 'D' {
        CandidateKind::Deleted
    } else if worktree == 'M' {
        CandidateKind::Modified
    } else {
        return None;
    };

    Some((kind, path))
}

fn status_candidates(git: &Git, paths: &PathContext) -> Result<Vec<Candidate>> {
    let listing = git.query(&["status", "--porcelain"])?;
    Ok(listing
        .lines()
        .filter_map(classify_status_line)
        .map(|(kind, path)| paths.classify_file(path, kind))
        .collect())
}

/// Group the changed files of one status pass by the requested kinds, in the
/// requested order. Empty groups are omitted.
pub fn file_groups(
    git: &Git,
    paths: &PathContext,
    kinds: &[CandidateKind],
) -> Result<Vec<CandidateGroup>> {
    let candidates = status_candidates(git, paths)?;
    let groups = kinds
        .iter()
        .filter_map(|kind| {
            let items: Vec<Candidate> = candidates
                .iter()
                .filter(|candidate| candidate.kind == *kind)
                .cloned()
                .collect();
            if items.is_empty() {
                None
            } else {
                Some(CandidateGroup::new(kind.group_label(), items))
            }
        })
        .collect();
    Ok(groups)
}

/// Local branches, newest first, classified by their marker character
pub fn local_branch_group(git: &Git) -> Result<Vec<CandidateGroup>> {
    let listing = git.query(&["branch", "--sort=-creatordate"])?;
    let items: Vec<Candidate> = listing
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(classify_branch_line)
        .collect();

    if items.is_empty() {
        return Ok(Vec::new());
    }
    Ok(vec![CandidateGroup::new(
        CandidateKind::LocalBranch.group_label(),
        items,
    )])
}

/// Remote-tracking branches, newest first, without the symbolic `HEAD ->`
/// alias line
pub fn remote_branch_group(git: &Git) -> Result<Vec<CandidateGroup>> {
    let listing = git.query(&["branch", "--remotes", "--sort=-creatordate"])?;
    let items: Vec<Candidate> = listing
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.contains("HEAD ->"))
        .map(classify_remote_branch_line)
        .collect();

    if items.is_empty() {
        return Ok(Vec::new());
    }
    Ok(vec![CandidateGroup::new(
        CandidateKind::RemoteBranch.group_label(),
        items,
    )])
}

/// Local plus remote branches, locals first
pub fn branch_groups(git: &Git) -> Result<Vec<CandidateGroup>> {
    let mut groups = local_branch_group(git)?;
    groups.extend(remote_branch_group(git)?);
    Ok(groups)
}

/// Every tracked file, the candidate pool for removal
pub fn tracked_file_group(git: &Git, paths: &PathContext) -> Result<Vec<CandidateGroup>> {
    let listing = git.query(&["ls-files", "--full-name"])?;
    let items: Vec<Candidate> = listing
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| paths.classify_file(line, CandidateKind::Tracked))
        .collect();

    if items.is_empty() {
        return Ok(Vec::new());
    }
    Ok(vec![CandidateGroup::new(
        CandidateKind::Tracked.group_label(),
        items,
    )])
}

/// The commit log of a ref (HEAD when absent), one pre-colored line per
/// commit, limited to the most recent entries
pub fn commit_log_group(git: &Git, reference: Option<&str>) -> Result<Vec<CandidateGroup>> {
    let mut args = vec!["log", "--oneline", "--color=always", LOG_LIMIT];
    if let Some(reference) = reference {
        args.push(reference);
    }

    let listing = git.query(&args)?;
    let items: Vec<Candidate> = listing
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| Candidate::new(line, CandidateKind::Commit))
        .collect();

    if items.is_empty() {
        return Ok(Vec::new());
    }
    Ok(vec![CandidateGroup::new(
        CandidateKind::Commit.group_label(),
        items,
    )])
}
