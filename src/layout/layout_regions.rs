//! Layout regions tracking for UI components
//!
//! Tracks where UI components are rendered for position-aware mouse interactions.

use ratatui::layout::Rect;

use crate::lookup::SortColumn;

/// Identifies a UI component region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    TitleBar,
    ErrorBanner,
    DetailPanel,
    /// Column header row of the participant table
    TableHeader,
    /// Data rows of the participant table
    TableBody,
    /// Table border and any space not covered by header or rows
    TablePane,
}

/// Tracks rendered areas of UI components
///
/// Updated during each render pass. Regions are `None` when the component is not visible.
/// Used by mouse event handlers to determine which component is under the cursor.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    pub title_bar: Option<Rect>,
    pub error_banner: Option<Rect>,
    pub detail_panel: Option<Rect>,
    pub table_pane: Option<Rect>,
    pub table_header: Option<Rect>,
    pub table_body: Option<Rect>,

    /// Header cell of each rendered column, left to right
    pub header_columns: Vec<(SortColumn, Rect)>,
}

impl LayoutRegions {
    /// Create a new empty LayoutRegions
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
