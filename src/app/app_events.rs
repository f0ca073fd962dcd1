use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::{Duration, Instant};

use super::app_state::App;
use super::mouse_events;
use crate::controller::Keystroke;
use crate::lookup::SortColumn;

/// Upper bound on one poll so notifications expire on time
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

const TABLE_SCROLL_LINES: u16 = 1;

/// Map a terminal key to a lookup keystroke
///
/// Only plain or shifted ASCII letters and digits count as entry characters;
/// anything with Ctrl or Alt is left for other bindings.
pub fn keystroke_for(key: KeyEvent) -> Option<Keystroke> {
    match key.code {
        KeyCode::Char(c)
            if c.is_ascii_alphanumeric()
                && !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Keystroke::Char(c))
        }
        KeyCode::Backspace => Some(Keystroke::Backspace),
        KeyCode::Esc => Some(Keystroke::Escape),
        KeyCode::Enter => Some(Keystroke::Enter),
        _ => None,
    }
}

/// F2..F6 pick the five columns in display order
fn column_for_function_key(n: u8) -> Option<SortColumn> {
    let index = usize::from(n).checked_sub(2)?;
    SortColumn::ALL.get(index).copied()
}

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.tick(Instant::now());

        if event::poll(self.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    mouse_events::handle_mouse_event(self, mouse_event);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }

        self.tick(Instant::now());
        Ok(())
    }

    /// How long the loop may block before the next timer is due
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.session
            .scheduler()
            .time_until_next(now)
            .map_or(EVENT_POLL_TIMEOUT, |until| until.min(EVENT_POLL_TIMEOUT))
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.handle_key_event_at(key, Instant::now());
    }

    pub fn handle_key_event_at(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Some(keystroke) = keystroke_for(key) {
            let commands = self.session.on_keystroke(keystroke, now);
            self.apply(commands);
            return;
        }

        if let KeyCode::F(n) = key.code {
            if let Some(column) = column_for_function_key(n) {
                self.sort_by(column);
            }
            return;
        }

        match key.code {
            KeyCode::Down => self.table.scroll.scroll_down(TABLE_SCROLL_LINES),
            KeyCode::Up => self.table.scroll.scroll_up(TABLE_SCROLL_LINES),
            KeyCode::PageDown => self.table.scroll.page_down(),
            KeyCode::PageUp => self.table.scroll.page_up(),
            KeyCode::Home => self.table.scroll.jump_to_top(),
            KeyCode::End => self.table.scroll.jump_to_bottom(),
            _ => return,
        }
        self.mark_dirty();
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
