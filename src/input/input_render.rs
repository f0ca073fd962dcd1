use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::controller::InputDisplay;
use crate::theme;

pub const APP_TITLE: &str = "Bib Finder";

/// Marker shown while the next keystroke will start a fresh entry
pub const READY_MARKER: &str = "\u{2713}";

pub fn title_line(display: &InputDisplay) -> Line<'static> {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(APP_TITLE, theme::title::APP_NAME),
    ];

    if let Some(text) = &display.text {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            "Input: ",
            Style::default().fg(theme::title::INPUT_LABEL),
        ));
        spans.push(Span::styled(text.clone(), theme::title::INPUT_TEXT));
        if display.ready_to_reset {
            spans.push(Span::styled(
                format!(" {}", READY_MARKER),
                Style::default().fg(theme::title::READY_MARKER),
            ));
        }
    }

    Line::from(spans)
}

pub fn render_field(display: &InputDisplay, frame: &mut Frame, area: Rect) -> Rect {
    frame.render_widget(Paragraph::new(title_line(display)), area);
    area
}
