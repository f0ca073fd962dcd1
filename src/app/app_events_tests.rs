//! Tests for key handling

use super::*;
use crate::lookup::{DetailPanel, MatchStyle, SortDirection};
use crate::test_utils::test_helpers::{field_runners, key, key_with_mods, ms, scenario_runners, test_app};

fn press_all(app: &mut App, text: &str, now: Instant) {
    for c in text.chars() {
        app.handle_key_event_at(key(KeyCode::Char(c)), now);
    }
}

#[test]
fn test_keystroke_for_alphanumerics() {
    assert_eq!(keystroke_for(key(KeyCode::Char('7'))), Some(Keystroke::Char('7')));
    assert_eq!(keystroke_for(key(KeyCode::Char('a'))), Some(Keystroke::Char('a')));
    assert_eq!(
        keystroke_for(key_with_mods(KeyCode::Char('B'), KeyModifiers::SHIFT)),
        Some(Keystroke::Char('B'))
    );
}

#[test]
fn test_keystroke_for_ignores_punctuation_and_modifiers() {
    assert_eq!(keystroke_for(key(KeyCode::Char(' '))), None);
    assert_eq!(keystroke_for(key(KeyCode::Char('-'))), None);
    assert_eq!(
        keystroke_for(key_with_mods(KeyCode::Char('a'), KeyModifiers::CONTROL)),
        None
    );
    assert_eq!(
        keystroke_for(key_with_mods(KeyCode::Char('1'), KeyModifiers::ALT)),
        None
    );
}

#[test]
fn test_keystroke_for_control_keys() {
    assert_eq!(keystroke_for(key(KeyCode::Backspace)), Some(Keystroke::Backspace));
    assert_eq!(keystroke_for(key(KeyCode::Esc)), Some(Keystroke::Escape));
    assert_eq!(keystroke_for(key(KeyCode::Enter)), Some(Keystroke::Enter));
    assert_eq!(keystroke_for(key(KeyCode::Tab)), None);
}

#[test]
fn test_ctrl_c_quits() {
    let mut app = test_app(scenario_runners());

    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));

    assert!(app.should_quit());
}

#[test]
fn test_typing_waits_for_debounce() {
    let mut app = test_app(scenario_runners());
    let t0 = Instant::now();

    press_all(&mut app, "102", t0);
    assert_eq!(app.detail, DetailPanel::Prompt);

    app.tick(t0 + ms(50));
    assert!(matches!(
        app.detail,
        DetailPanel::Match { count: 1, style: MatchStyle::Confirmed, .. }
    ));
}

#[test]
fn test_enter_looks_up_immediately() {
    let mut app = test_app(scenario_runners());
    let t0 = Instant::now();

    press_all(&mut app, "110", t0);
    app.handle_key_event_at(key(KeyCode::Enter), t0);

    assert_eq!(app.table.highlighted(), Some(110));
}

#[test]
fn test_escape_clears_entry() {
    let mut app = test_app(scenario_runners());
    let t0 = Instant::now();

    press_all(&mut app, "10", t0);
    app.tick(t0 + ms(50));
    app.handle_key_event_at(key(KeyCode::Esc), t0 + ms(60));

    assert_eq!(app.detail, DetailPanel::Prompt);
    assert!(app.input_display.text.is_none());
    assert!(app.session.next_deadline().is_none());
}

#[test]
fn test_function_keys_sort_columns() {
    let mut app = test_app(field_runners());

    app.handle_key_event(key(KeyCode::F(3)));
    assert_eq!(app.session.sort().column, SortColumn::FullName);

    app.handle_key_event(key(KeyCode::F(6)));
    assert_eq!(app.session.sort().column, SortColumn::Club);

    app.handle_key_event(key(KeyCode::F(2)));
    app.handle_key_event(key(KeyCode::F(2)));
    assert_eq!(app.session.sort().column, SortColumn::BibNumber);
    assert_eq!(app.session.sort().direction, SortDirection::Descending);
}

#[test]
fn test_unbound_function_keys_do_nothing() {
    let mut app = test_app(field_runners());
    app.clear_dirty();

    app.handle_key_event(key(KeyCode::F(1)));
    app.handle_key_event(key(KeyCode::F(7)));

    assert_eq!(app.session.sort().column, SortColumn::BibNumber);
    assert!(!app.needs_render);
}

#[test]
fn test_arrow_and_page_keys_scroll_table() {
    let mut app = test_app(field_runners());
    app.table.scroll.update_bounds(6, 2);

    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.table.scroll.offset, 1);

    app.handle_key_event(key(KeyCode::End));
    assert_eq!(app.table.scroll.offset, 4);

    app.handle_key_event(key(KeyCode::PageUp));
    assert_eq!(app.table.scroll.offset, 3);

    app.handle_key_event(key(KeyCode::Home));
    assert_eq!(app.table.scroll.offset, 0);

    app.handle_key_event(key(KeyCode::Up));
    assert_eq!(app.table.scroll.offset, 0);
}

#[test]
fn test_poll_timeout_bounded_by_next_timer() {
    let mut app = test_app(scenario_runners());
    let t0 = Instant::now();

    assert_eq!(app.poll_timeout(t0), EVENT_POLL_TIMEOUT);

    app.handle_key_event_at(key(KeyCode::Char('1')), t0);
    assert_eq!(app.poll_timeout(t0), ms(50));
    assert_eq!(app.poll_timeout(t0 + ms(80)), Duration::ZERO);
}
