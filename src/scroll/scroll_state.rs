/// Vertical scroll position over a list of rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_bounds(&mut self, content_lines: u32, viewport_height: u16) {
        self.viewport_height = viewport_height;

        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_lines
            .saturating_sub(viewport_height as u32)
            .min(u16::MAX as u32) as u16;

        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn page_down(&mut self) {
        let half_page = self.viewport_height / 2;
        self.scroll_down(half_page.max(1));
    }

    pub fn page_up(&mut self) {
        let half_page = self.viewport_height / 2;
        self.scroll_up(half_page.max(1));
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
    }

    /// Move the viewport the least amount needed to show `line`
    ///
    /// Before the first render the viewport height is unknown, so the line is
    /// placed at the top and clamped on the next `update_bounds`.
    pub fn ensure_visible(&mut self, line: u32) {
        let line = line.min(u16::MAX as u32) as u16;
        if self.viewport_height == 0 {
            self.offset = line;
            return;
        }

        if line < self.offset {
            self.offset = line;
        } else if line >= self.offset.saturating_add(self.viewport_height) {
            self.offset = line.saturating_sub(self.viewport_height - 1);
        }
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

#[cfg(test)]
#[path = "scroll_state_tests.rs"]
mod scroll_state_tests;
