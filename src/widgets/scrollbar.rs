//! Scrollbar for the participant table, drawn over the right border beside the rows

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::scroll::ScrollState;

/// Draw a scrollbar for `scroll` along the right edge of `pane`, limited to
/// the rows of `body`
///
/// Nothing is drawn while every row fits.
pub fn render_row_scrollbar(
    frame: &mut Frame,
    pane: Rect,
    body: Rect,
    scroll: &ScrollState,
    color: Color,
) {
    if scroll.max_offset == 0 || scroll.viewport_height == 0 {
        return;
    }

    let track = Rect {
        x: pane.x,
        y: body.y,
        width: pane.width,
        height: body.height,
    };
    let style = Style::default().fg(color);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(style)
        .track_style(style);

    // Positions run 0..=max_offset so the thumb touches the bottom at the last page
    let positions = usize::from(scroll.max_offset) + 1;
    let mut state = ScrollbarState::new(positions)
        .position(usize::from(scroll.offset.min(scroll.max_offset)))
        .viewport_content_length(usize::from(scroll.viewport_height));

    frame.render_stateful_widget(scrollbar, track, &mut state);
}

#[cfg(test)]
#[path = "scrollbar_tests.rs"]
mod scrollbar_tests;
