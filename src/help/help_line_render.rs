use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

/// Key hints for what the operator can do right now
///
/// Until runners are available only quitting makes sense, including after a
/// first load that failed.
fn get_context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.table.is_loading() || app.session.participants().is_empty() {
        hints!["Ctrl+C" => "Quit"]
    } else if app.input_display.text.is_some() {
        hints!["Esc" => "Clear", "Enter" => "Look Up", "Click" => "Select", "F2-F6" => "Sort", "\u{2191}\u{2193}" => "Scroll", "Ctrl+C" => "Quit"]
    } else {
        hints!["0-9/A-Z" => "Find Runner", "Click" => "Select", "F2-F6" => "Sort", "\u{2191}\u{2193}" => "Scroll", "Ctrl+C" => "Quit"]
    }
}

fn hint_line(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let separator = Span::styled(" \u{2022} ", Style::default().fg(theme::help_line::SEPARATOR));

    let spans = hints.iter().enumerate().flat_map(|(i, &(key, desc))| {
        let lead = if i == 0 { Span::raw(" ") } else { separator.clone() };
        [
            lead,
            Span::styled(key, key_style),
            Span::raw(" "),
            Span::styled(desc, desc_style),
        ]
    });
    Line::from(spans.collect::<Vec<_>>())
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let line = hint_line(&get_context_hints(app));
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
#[path = "help_line_render_tests.rs"]
mod help_line_render_tests;
