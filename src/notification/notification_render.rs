use ratatui::{
    Frame,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;

use super::notification_state::NotificationState;
use crate::widgets::popup;

const MARGIN: u16 = 2;

/// Draw the current notification in the top-right corner, dropping it first
/// if it has expired by `now`
///
/// Call after the main UI so the box sits on top.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState, now: Instant) {
    notification.clear_if_expired(now);

    let Some(current) = notification.current() else {
        return;
    };
    let colors = current.kind.colors();

    // One padded line inside a full border
    let width = current.message.chars().count() as u16 + 4;
    let area = popup::top_right(frame.area(), width, 3, MARGIN);
    if area.width < 5 || area.height < 3 {
        return;
    }

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border).bg(colors.bg))
        .style(Style::default().bg(colors.bg));
    let text = Line::from(Span::styled(
        format!(" {} ", current.message),
        Style::default().fg(colors.fg).bg(colors.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
