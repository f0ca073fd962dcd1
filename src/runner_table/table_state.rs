use crate::controller::TableView;
use crate::participant::Participant;
use crate::scroll::ScrollState;

/// What the table pane currently shows
///
/// The highlight is kept by bib across table replacements: a resort or
/// refilter keeps the same runner highlighted when it is still listed.
#[derive(Debug)]
pub struct TableState {
    view: TableView,
    highlighted: Option<u32>,
    loading: bool,
    pub scroll: ScrollState,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new()
    }
}

impl TableState {
    pub fn new() -> Self {
        Self {
            view: TableView::empty(),
            highlighted: None,
            loading: true,
            scroll: ScrollState::new(),
        }
    }

    pub fn view(&self) -> &TableView {
        &self.view
    }

    pub fn rows(&self) -> &[Participant] {
        &self.view.rows
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The load has reported; stop showing the loading indicator
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    pub fn replace(&mut self, view: TableView) {
        self.view = view;
        self.loading = false;
        self.scroll.reset();
        self.reveal_highlight();
    }

    pub fn highlight(&mut self, bib_number: Option<u32>) {
        self.highlighted = bib_number;
        self.reveal_highlight();
    }

    pub fn highlighted(&self) -> Option<u32> {
        self.highlighted
    }

    /// Row index of the highlighted runner, if it is listed
    pub fn highlighted_position(&self) -> Option<usize> {
        self.highlighted
            .and_then(|bib| self.view.position_of(bib))
    }

    /// Participant shown `line` rows below the top of the viewport
    pub fn row_at_line(&self, line: u16) -> Option<&Participant> {
        let index = self.scroll.offset as usize + line as usize;
        self.view.rows.get(index)
    }

    fn reveal_highlight(&mut self) {
        if let Some(position) = self.highlighted_position() {
            self.scroll.ensure_visible(position as u32);
        }
    }
}

#[cfg(test)]
#[path = "table_state_tests.rs"]
mod table_state_tests;
