//! Detail panel contents for the current lookup

use super::matcher::MatchResult;
use crate::participant::Participant;

const CLUB_MAX_CHARS: usize = 30;
const CLUB_TRUNCATED_CHARS: usize = 27;

/// How firmly the panel presents its match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStyle {
    /// Normal text: a unique match, or the entry pause has elapsed
    Confirmed,
    /// Muted text: several candidates and the operator may still be typing
    Tentative,
}

/// Display lines for one participant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerDetail {
    pub bib_number: u32,
    pub headline: String,
    pub age_category: String,
    pub club: String,
}

impl RunnerDetail {
    pub fn from_participant(runner: &Participant) -> Self {
        Self {
            bib_number: runner.bib_number,
            headline: format!("#{} - {}", runner.bib_number, runner.full_name),
            age_category: format!(
                "{} \u{b7} {}",
                runner.age_display(),
                runner.category_display()
            ),
            club: shorten_club(runner.club_display()),
        }
    }
}

fn shorten_club(club: &str) -> String {
    if club.chars().count() > CLUB_MAX_CHARS {
        let head: String = club.chars().take(CLUB_TRUNCATED_CHARS).collect();
        format!("{}...", head)
    } else {
        club.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPanel {
    /// Participants are still being read
    Loading,
    /// Nothing typed: ask for a number or name
    Prompt,
    Match {
        runner: RunnerDetail,
        count: usize,
        style: MatchStyle,
    },
    NotFound {
        term: String,
    },
}

impl DetailPanel {
    /// Build the panel for `result`
    ///
    /// `ready_to_reset` turns an ambiguous match into a confirmed one: once the
    /// entry pause has elapsed the operator has accepted the top candidate.
    pub fn for_result(result: &MatchResult, ready_to_reset: bool) -> Self {
        match result {
            MatchResult::Empty => DetailPanel::Prompt,
            MatchResult::Matches { term, .. } => match result.top() {
                None => DetailPanel::NotFound { term: term.clone() },
                Some(top) => {
                    let count = result.count();
                    let style = if count == 1 || ready_to_reset {
                        MatchStyle::Confirmed
                    } else {
                        MatchStyle::Tentative
                    };
                    DetailPanel::Match {
                        runner: RunnerDetail::from_participant(top),
                        count,
                        style,
                    }
                }
            },
        }
    }

    pub fn is_multi_match(&self) -> bool {
        matches!(self, DetailPanel::Match { count, .. } if *count > 1)
    }

    /// Same panel with the given style; no-op for non-match panels
    pub fn restyled(&self, new_style: MatchStyle) -> Self {
        match self {
            DetailPanel::Match { runner, count, .. } => DetailPanel::Match {
                runner: runner.clone(),
                count: *count,
                style: new_style,
            },
            other => other.clone(),
        }
    }

    /// Plain text lines, used by the terminal panel and one-shot query output
    pub fn lines(&self) -> Vec<String> {
        match self {
            DetailPanel::Loading => vec!["Loading runners...".to_string()],
            DetailPanel::Prompt => vec![
                "Enter a number".to_string(),
                "or name to see runner details".to_string(),
            ],
            DetailPanel::Match { runner, count, .. } => {
                let mut lines = vec![
                    runner.headline.clone(),
                    runner.age_category.clone(),
                    runner.club.clone(),
                ];
                if *count > 1 {
                    lines.push(format!("+{} more", count - 1));
                }
                lines
            }
            DetailPanel::NotFound { term } => vec![
                "No Runner Found".to_string(),
                format!("No runner found with: {}", term),
            ],
        }
    }
}
