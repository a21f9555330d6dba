//! Typed candidate items and the raw-line classifier.
//!
//! Everything the user can pick from a menu is a [`Candidate`]: an immutable
//! text value carrying a [`CandidateKind`] tag. The tag survives the whole
//! selection pipeline and is the only thing downstream policy logic dispatches
//! on; it is what lets checkout treat `origin/feature` differently from a
//! plain local branch.
//!
//! The classifier half of this module turns raw listing lines from git into
//! candidates: branch marker characters (`*` current, `+` worktree), rename
//! arrows (`old -> new`), porcelain path quoting, and normalization of
//! repository-root-relative paths to the current working directory.

use crate::core::{
    error::Result,
    git::Git,
};
use colored::{ColoredString, Colorize};
use std::env;
use std::path::PathBuf;

/// Semantic kind of a selectable item.
///
/// File kinds partition one `status --porcelain` pass: a changed path lands in
/// exactly one of them. The three local-branch kinds are mutually exclusive
/// per branch line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateKind {
    /// Modified in the worktree (workspace `M`)
    Modified,
    /// Deleted from the worktree (workspace `D`)
    Deleted,
    /// Untracked file (`??`)
    Untracked,
    /// Staged change (index `M`, `A` or `R`)
    Staged,
    /// Staged deletion (index `D`)
    StagedDeleted,
    /// Unresolved merge conflict (index `U`)
    Unmerged,
    /// Any tracked file
    Tracked,
    /// Local branch, not checked out anywhere
    LocalBranch,
    /// The branch checked out in this worktree
    CurrentBranch,
    /// Local branch checked out in another worktree
    WorktreeBranch,
    /// Remote-tracking branch
    RemoteBranch,
    /// Opaque pre-colored commit-log line
    Commit,
}

impl CandidateKind {
    /// Group header shown above items of this kind
    pub fn group_label(&self) -> &'static str {
        match self {
            CandidateKind::Modified => "Modified files",
            CandidateKind::Deleted => "Deleted files",
            CandidateKind::Untracked => "Untracked files",
            CandidateKind::Staged => "Staged files",
            CandidateKind::StagedDeleted => "Staged deletions",
            CandidateKind::Unmerged => "Conflicted files",
            CandidateKind::Tracked => "Tracked files",
            CandidateKind::LocalBranch
            | CandidateKind::CurrentBranch
            | CandidateKind::WorktreeBranch => "Local branches",
            CandidateKind::RemoteBranch => "Remote branches",
            CandidateKind::Commit => "Commits",
        }
    }

    /// Short per-item annotation used when a menu mixes several groups
    pub fn description(&self) -> &'static str {
        match self {
            CandidateKind::Modified => "modified",
            CandidateKind::Deleted => "deleted",
            CandidateKind::Untracked => "untracked",
            CandidateKind::Staged => "staged",
            CandidateKind::StagedDeleted => "staged deletion",
            CandidateKind::Unmerged => "both modified",
            CandidateKind::Tracked => "tracked",
            CandidateKind::LocalBranch => "branch",
            CandidateKind::CurrentBranch => "current branch",
            CandidateKind::WorktreeBranch => "worktree",
            CandidateKind::RemoteBranch => "remote branch",
            CandidateKind::Commit => "commit",
        }
    }

    /// Apply the kind's color to a piece of text
    pub fn style(&self, text: &str) -> ColoredString {
        match self {
            CandidateKind::Modified => text.yellow(),
            CandidateKind::Deleted => text.red(),
            CandidateKind::Untracked => text.cyan(),
            CandidateKind::Staged => text.green(),
            CandidateKind::StagedDeleted => text.red().bold(),
            CandidateKind::Unmerged => text.red().bold(),
            CandidateKind::Tracked => text.white(),
            CandidateKind::LocalBranch => text.blue(),
            CandidateKind::CurrentBranch => text.blue().bold(),
            CandidateKind::WorktreeBranch => text.magenta(),
            CandidateKind::RemoteBranch => text.bright_blue(),
            CandidateKind::Commit => text.white(),
        }
    }

    /// Whether this kind belongs to the local/remote branch family
    pub fn is_branch(&self) -> bool {
        matches!(
            self,
            CandidateKind::LocalBranch
                | CandidateKind::CurrentBranch
                | CandidateKind::WorktreeBranch
                | CandidateKind::RemoteBranch
        )
    }
}

/// An immutable, display-ready selectable item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub kind: CandidateKind,
}

impl Candidate {
    pub fn new(text: impl Into<String>, kind: CandidateKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// A labeled, ordered collection of candidates of one kind
#[derive(Debug, Clone)]
pub struct CandidateGroup {
    pub label: &'static str,
    pub items: Vec<Candidate>,
}

impl CandidateGroup {
    pub fn new(label: &'static str, items: Vec<Candidate>) -> Self {
        Self { label, items }
    }
}

/// Classify one raw local-branch listing line by its leading marker character.
///
/// `*` marks the branch checked out here, `+` a branch checked out in another
/// worktree; anything else is a plain local branch. A line maps to exactly one
/// sub-kind.
pub fn classify_branch_line(line: &str) -> Candidate {
    if let Some(name) = line.strip_prefix('*') {
        Candidate::new(name.trim(), CandidateKind::CurrentBranch)
    } else if let Some(name) = line.strip_prefix('+') {
        Candidate::new(name.trim(), CandidateKind::WorktreeBranch)
    } else {
        Candidate::new(line.trim(), CandidateKind::LocalBranch)
    }
}

/// Classify one raw remote-branch listing line
pub fn classify_remote_branch_line(line: &str) -> Candidate {
    Candidate::new(line.trim(), CandidateKind::RemoteBranch)
}

/// Path normalization context for file candidates.
///
/// git reports porcelain paths relative to the repository root; menu entries
/// and re-invocation arguments must be relative to wherever the user actually
/// is.
#[derive(Debug, Clone)]
pub struct PathContext {
    repo_root: PathBuf,
    cwd: PathBuf,
}

impl PathContext {
    pub fn new(repo_root: PathBuf, cwd: PathBuf) -> Self {
        Self { repo_root, cwd }
    }

    /// Build a context from the live repository and process state
    pub fn discover(git: &Git) -> Result<Self> {
        let root = git.query(&["rev-parse", "--show-toplevel"])?;
        Ok(Self::new(PathBuf::from(root.trim()), env::current_dir()?))
    }

    /// Classify one raw file path from a status or file listing.
    ///
    /// Strips whitespace and porcelain quoting, resolves rename-arrow notation
    /// (`old -> new` keeps `new`), and rewrites the root-relative path to be
    /// relative to the current working directory.
    pub fn classify_file(&self, raw: &str, kind: CandidateKind) -> Candidate {
        let mut path = raw.trim();
        if let Some((_, renamed)) = path.split_once(" -> ") {
            path = renamed.trim();
        }
        path = path.trim_matches('"');
        Candidate::new(self.normalize(path), kind)
    }

    fn normalize(&self, path: &str) -> String {
        let absolute = self.repo_root.join(path);
        match pathdiff::diff_paths(&absolute, &self.cwd) {
            Some(relative) => relative.to_string_lossy().into_owned(),
            None => absolute.to_string_lossy().into_owned(),
        }
    }
}

/// Remove ANSI escape sequences from a string
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Recover the short hash from one displayed commit-log line.
///
/// The hash is always the first whitespace-delimited token once color markup
/// is stripped.
pub fn short_hash(line: &str) -> Option<String> {
    strip_ansi_codes(line)
        .split_whitespace()
        .next()
        .map(ToOwned::to_owned)
}

/// Reduce a commit-log selection to its short hashes, reversed so that a
/// multi-selection is applied oldest-pick-first by hash-list operations.
pub fn commit_hashes(selection: &[Candidate]) -> Vec<String> {
    let mut hashes: Vec<String> = selection
        .iter()
        .filter_map(|candidate| short_hash(&candidate.text))
        .collect();
    hashes.reverse();
    hashes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_current_branch_marker() {
        let candidate = classify_branch_line("* main");
        assert_eq!(candidate.kind, CandidateKind::CurrentBranch);
        assert_eq!(candidate.text, "main");
    }

    #[test]
    fn test_worktree_branch_marker() {
        let candidate = classify_branch_line("+ hotfix");
        assert_eq!(candidate.kind, CandidateKind::WorktreeBranch);
        assert_eq!(candidate.text, "hotfix");
    }

    #[test]
    fn test_plain_local_branch() {
        let candidate = classify_branch_line("  feature/login");
        assert_eq!(candidate.kind, CandidateKind::LocalBranch);
        assert_eq!(candidate.text, "feature/login");
    }

    #[test]
    fn test_remote_branch_line() {
        let candidate = classify_remote_branch_line("  origin/develop");
        assert_eq!(candidate.kind, CandidateKind::RemoteBranch);
        assert_eq!(candidate.text, "origin/develop");
    }

    fn context_at(root: &str, cwd: &str) -> PathContext {
        PathContext::new(PathBuf::from(root), PathBuf::from(cwd))
    }

    #[test]
    fn test_classify_file_at_repo_root() {
        let ctx = context_at("/repo", "/repo");
        let candidate = ctx.classify_file("src/main.rs", CandidateKind::Modified);
        assert_eq!(candidate.text, "src/main.rs");
        assert_eq!(candidate.kind, CandidateKind::Modified);
    }

    #[test]
    fn test_classify_file_from_subdirectory() {
        let ctx = context_at("/repo", "/repo/src");
        let inside = ctx.classify_file("src/main.rs", CandidateKind::Modified);
        assert_eq!(Path::new(&inside.text), Path::new("main.rs"));

        let outside = ctx.classify_file("README.md", CandidateKind::Modified);
        assert_eq!(Path::new(&outside.text), Path::new("../README.md"));
    }

    #[test]
    fn test_classify_file_resolves_rename_arrow() {
        let ctx = context_at("/repo", "/repo");
        let candidate = ctx.classify_file("old_name.rs -> new_name.rs", CandidateKind::Staged);
        assert_eq!(candidate.text, "new_name.rs");
    }

    #[test]
    fn test_classify_file_strips_porcelain_quotes() {
        let ctx = context_at("/repo", "/repo");
        let candidate = ctx.classify_file("\"with space.txt\"", CandidateKind::Untracked);
        assert_eq!(candidate.text, "with space.txt");
    }

    #[test]
    fn test_strip_ansi_codes() {
        let colored = "\x1b[33mabc1234\x1b[m fix parser";
        assert_eq!(strip_ansi_codes(colored), "abc1234 fix parser");
        assert_eq!(strip_ansi_codes("plain"), "plain");
    }

    #[test]
    fn test_short_hash_is_first_token() {
        assert_eq!(
            short_hash("\x1b[33mabc1234\x1b[m fix the parser"),
            Some("abc1234".to_string())
        );
        assert_eq!(short_hash(""), None);
    }

    #[test]
    fn test_commit_hashes_reverse_selection_order() {
        let selection = vec![
            Candidate::new("aaa1111 first pick", CandidateKind::Commit),
            Candidate::new("bbb2222 second pick", CandidateKind::Commit),
            Candidate::new("ccc3333 third pick", CandidateKind::Commit),
        ];
        assert_eq!(commit_hashes(&selection), vec!["ccc3333", "bbb2222", "aaa1111"]);
    }

    #[test]
    fn test_group_label_per_kind() {
        assert_eq!(CandidateKind::Modified.group_label(), "Modified files");
        assert_eq!(CandidateKind::LocalBranch.group_label(), "Local branches");
        assert_eq!(CandidateKind::CurrentBranch.group_label(), "Local branches");
        assert_eq!(CandidateKind::RemoteBranch.group_label(), "Remote branches");
    }

    #[test]
    fn test_branch_family() {
        assert!(CandidateKind::WorktreeBranch.is_branch());
        assert!(CandidateKind::RemoteBranch.is_branch());
        assert!(!CandidateKind::Modified.is_branch());
        assert!(!CandidateKind::Commit.is_branch());
    }
}
