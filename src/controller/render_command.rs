//! Render commands emitted by the session
//!
//! The presentation adapter applies these in order. The core never draws.

use crate::lookup::{DetailPanel, SortState};
use crate::participant::Participant;

/// Rows for the participant table plus what produced them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub rows: Vec<Participant>,
    pub filter: String,
    pub sort: SortState,
}

impl TableView {
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            filter: String::new(),
            sort: SortState::default(),
        }
    }

    /// Message shown in place of rows when the filter matched nobody
    pub fn empty_message(&self) -> Option<String> {
        if self.rows.is_empty() && !self.filter.is_empty() {
            Some(format!("No runners found matching: {}", self.filter))
        } else {
            None
        }
    }

    pub fn position_of(&self, bib_number: u32) -> Option<usize> {
        self.rows.iter().position(|p| p.bib_number == bib_number)
    }
}

/// The "Input: ..." indicator; hidden while the buffer is empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputDisplay {
    pub text: Option<String>,
    pub ready_to_reset: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    ReplaceDetailPanel(DetailPanel),
    /// Highlight this bib's row and scroll it into view; None clears
    HighlightRow(Option<u32>),
    ReplaceTable(TableView),
    UpdateInputDisplay(InputDisplay),
    ShowLoadError(String),
    ClearLoadError,
}
