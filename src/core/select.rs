//! The selection engine: grouped candidates in, chosen candidates out.
//!
//! Wraps `inquire` prompts behind one entry point, [`choose`]. The engine owns
//! two hard rules: an empty candidate set never opens a menu (no flashing of
//! an empty prompt), and cancellation is an empty result, not an error, which
//! handlers turn into a silent no-op.

use crate::core::{
    candidate::{Candidate, CandidateGroup},
    error::Result,
};
use colored::Colorize;
use inquire::{InquireError, MultiSelect, Select};
use std::fmt;

/// Fixed display height of every menu
const MENU_HEIGHT: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    Single,
    Multi,
}

/// One rendered menu row, carrying the candidate it stands for
struct MenuEntry {
    display: String,
    candidate: Candidate,
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

fn render_entries(groups: Vec<CandidateGroup>, precolored: bool) -> Vec<MenuEntry> {
    let annotate = groups.len() > 1;
    groups
        .into_iter()
        .flat_map(|group| group.items)
        .map(|candidate| {
            let display = if precolored {
                candidate.text.clone()
            } else {
                let styled = candidate.kind.style(&candidate.text);
                if annotate {
                    let note = format!("({})", candidate.kind.description());
                    format!("{} {}", styled, note.bright_black())
                } else {
                    styled.to_string()
                }
            };
            MenuEntry { display, candidate }
        })
        .collect()
}

/// Present grouped candidates and return the user's picks.
///
/// Returns empty without touching the widget when there is nothing to offer,
/// and empty when the user cancels. Single mode yields at most one candidate;
/// multi mode yields the widget's finalization order.
pub fn choose(
    prompt: &str,
    groups: Vec<CandidateGroup>,
    mode: SelectMode,
    precolored: bool,
) -> Result<Vec<Candidate>> {
    if groups.iter().all(|group| group.items.is_empty()) {
        return Ok(Vec::new());
    }

    let entries = render_entries(groups, precolored);
    let picks = match mode {
        SelectMode::Single => {
            let picked = Select::new(prompt, entries)
                .with_page_size(MENU_HEIGHT)
                .with_vim_mode(true)
                .prompt_skippable();
            match picked {
                Ok(Some(entry)) => vec![entry],
                Ok(None) => Vec::new(),
                Err(InquireError::OperationInterrupted) => Vec::new(),
                Err(e) => return Err(e.into()),
            }
        }
        SelectMode::Multi => {
            let picked = MultiSelect::new(prompt, entries)
                .with_page_size(MENU_HEIGHT)
                .with_vim_mode(true)
                .prompt_skippable();
            match picked {
                Ok(Some(entries)) => entries,
                Ok(None) => Vec::new(),
                Err(InquireError::OperationInterrupted) => Vec::new(),
                Err(e) => return Err(e.into()),
            }
        }
    };

    Ok(picks.into_iter().map(|entry| entry.candidate).collect())
}
