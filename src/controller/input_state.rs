/// Keystrokes the lookup controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    /// An ASCII letter or digit; anything else is ignored
    Char(char),
    Backspace,
    Escape,
    Enter,
}

/// The entry buffer and whether the next keystroke starts a fresh entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    buffer: String,
    ready_to_reset: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_ready_to_reset(&self) -> bool {
        self.ready_to_reset
    }

    /// Append `c`, or start over with just `c` when a reset is pending
    pub fn push_char(&mut self, c: char) {
        if self.ready_to_reset {
            self.buffer.clear();
            self.ready_to_reset = false;
        }
        self.buffer.push(c);
    }

    /// Remove the last character; returns false when already empty
    pub fn pop_char(&mut self) -> bool {
        self.buffer.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.ready_to_reset = false;
    }

    /// Replace the whole buffer, e.g. from a table row click
    pub fn set_buffer(&mut self, text: &str) {
        self.buffer = text.to_string();
    }

    pub fn mark_ready_to_reset(&mut self) {
        self.ready_to_reset = true;
    }

    /// Lower-cased buffer used to filter the table
    pub fn filter_term(&self) -> String {
        self.buffer.to_lowercase()
    }
}
