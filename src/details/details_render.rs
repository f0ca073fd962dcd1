use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::lookup::{DetailPanel, MatchStyle};
use crate::theme;

/// Top border plus up to four lines of text
pub const DETAIL_PANEL_HEIGHT: u16 = 5;

/// Styled lines for `panel`
///
/// Text comes from `DetailPanel::lines`; this only decides how it looks.
pub fn styled_lines(panel: &DetailPanel) -> Vec<Line<'static>> {
    let lines = panel.lines();
    match panel {
        DetailPanel::Loading => lines
            .into_iter()
            .map(|text| Line::from(Span::styled(text, theme::detail::LOADING)))
            .collect(),
        DetailPanel::Prompt => lines
            .into_iter()
            .map(|text| Line::from(Span::styled(text, Style::default().fg(theme::detail::PROMPT))))
            .collect(),
        DetailPanel::NotFound { .. } => lines
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let style = if i == 0 {
                    theme::detail::NOT_FOUND
                } else {
                    Style::default().fg(theme::detail::TEXT)
                };
                Line::from(Span::styled(text, style))
            })
            .collect(),
        DetailPanel::Match { style, .. } => lines
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let line_style = match (style, i) {
                    (MatchStyle::Tentative, _) => theme::detail::TENTATIVE,
                    (MatchStyle::Confirmed, 0) => theme::detail::HEADLINE,
                    (MatchStyle::Confirmed, 3) => Style::default().fg(theme::detail::MORE),
                    (MatchStyle::Confirmed, _) => Style::default().fg(theme::detail::TEXT),
                };
                Line::from(Span::styled(text, line_style))
            })
            .collect(),
    }
}

pub fn render_panel(panel: &DetailPanel, frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .borders(Borders::TOP)
        .title(" Runner ")
        .border_style(Style::default().fg(theme::detail::BORDER))
        .style(Style::default().bg(theme::detail::BACKGROUND));

    let paragraph = Paragraph::new(styled_lines(panel)).block(block);
    frame.render_widget(paragraph, area);
    area
}

#[cfg(test)]
#[path = "details_render_tests.rs"]
mod details_render_tests;
