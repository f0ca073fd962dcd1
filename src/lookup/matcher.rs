use super::collate::{compare_names, is_numeric_term};
use crate::participant::Participant;

/// Outcome of looking up the current search term
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult<'a> {
    /// Nothing typed yet
    Empty,
    /// Ranked candidates for `term`; may be empty when nothing matched
    Matches {
        term: String,
        matches: Vec<&'a Participant>,
    },
}

impl<'a> MatchResult<'a> {
    /// Best match, if any
    pub fn top(&self) -> Option<&'a Participant> {
        match self {
            MatchResult::Empty => None,
            MatchResult::Matches { matches, .. } => matches.first().copied(),
        }
    }

    pub fn count(&self) -> usize {
        match self {
            MatchResult::Empty => 0,
            MatchResult::Matches { matches, .. } => matches.len(),
        }
    }

    pub fn is_multi_match(&self) -> bool {
        self.count() > 1
    }
}

/// Find and rank participants matching `term`
///
/// Bib numbers match by prefix. Names match by case-insensitive substring,
/// but only when the term is not a number. An exact bib match ranks first;
/// the rest are ordered by bib for numeric terms and by name otherwise.
pub fn lookup<'a>(participants: &'a [Participant], term: &str) -> MatchResult<'a> {
    let term = term.trim();
    if term.is_empty() {
        return MatchResult::Empty;
    }

    let numeric = is_numeric_term(term);
    let term_lower = term.to_lowercase();

    let mut matches: Vec<&Participant> = participants
        .iter()
        .filter(|p| {
            p.bib_text().starts_with(term)
                || (!numeric && p.full_name.to_lowercase().contains(&term_lower))
        })
        .collect();

    matches.sort_by(|a, b| {
        let a_exact = a.bib_text() == term;
        let b_exact = b.bib_text() == term;
        b_exact.cmp(&a_exact).then_with(|| {
            if numeric {
                a.bib_number.cmp(&b.bib_number)
            } else {
                compare_names(&a.full_name, &b.full_name)
            }
        })
    });

    #[cfg(debug_assertions)]
    log::debug!("lookup '{}': {} matches", term, matches.len());

    MatchResult::Matches {
        term: term.to_string(),
        matches,
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
