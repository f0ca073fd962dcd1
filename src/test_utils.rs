//! Shared test utilities for bibfinder
//!
//! Common participant fixtures and helpers used across test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::time::{Duration, Instant};

    use crate::app::App;
    use crate::config::Config;
    use crate::controller::Session;
    use crate::participant::Participant;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// The three runners used throughout the lookup scenarios
    pub fn scenario_runners() -> Vec<Participant> {
        vec![
            Participant::new(101, "Alice Smith"),
            Participant::new(102, "Bob Jones"),
            Participant::new(110, "Cara Lee"),
        ]
    }

    /// A richer field with every optional column populated somewhere
    pub fn field_runners() -> Vec<Participant> {
        vec![
            Participant::new(101, "Alice Smith")
                .with_age(34)
                .with_category("F30")
                .with_club("Riverside Harriers"),
            Participant::new(102, "bob jones")
                .with_age(41)
                .with_category("M40")
                .with_club("Hill Striders"),
            Participant::new(110, "Cara Lee").with_age(34).with_category("F30"),
            Participant::new(12, "Dan Black")
                .with_age(29)
                .with_club("riverside harriers"),
            Participant::new(205, "Émile Zola").with_age(52),
            Participant::new(1, "Zoe Adams").with_category("F20"),
        ]
    }

    pub fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Session loaded with `participants` and default timings
    pub fn test_session(participants: Vec<Participant>) -> Session {
        let mut session = Session::new(&Config::default().lookup);
        session.load_participants(participants);
        session
    }

    /// App loaded with `participants`, bypassing the loader thread
    pub fn test_app(participants: Vec<Participant>) -> App {
        let mut app = App::new(&Config::default());
        app.apply_loaded(Ok(participants));
        app
    }

    /// Type `text` one character at a time, all at `now`
    pub fn type_str(session: &mut Session, text: &str, now: Instant) {
        for c in text.chars() {
            session.on_keystroke(crate::controller::Keystroke::Char(c), now);
        }
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
