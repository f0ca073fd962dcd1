//! Mouse scroll handling
//!
//! Only the participant table scrolls. The wheel also scrolls it when the
//! cursor is outside all regions.

use super::app_state::App;
use crate::layout::Region;

/// Scroll direction for mouse wheel events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

const TABLE_SCROLL_LINES: u16 = 3;

/// Handle scroll event for the given region
pub fn handle_scroll(app: &mut App, region: Option<Region>, direction: ScrollDirection) {
    match region {
        Some(Region::TablePane) | Some(Region::TableHeader) | Some(Region::TableBody) | None => {
            scroll_table(app, direction)
        }
        Some(Region::TitleBar) | Some(Region::ErrorBanner) | Some(Region::DetailPanel) => {}
    }
}

fn scroll_table(app: &mut App, direction: ScrollDirection) {
    match direction {
        ScrollDirection::Up => app.table.scroll.scroll_up(TABLE_SCROLL_LINES),
        ScrollDirection::Down => app.table.scroll.scroll_down(TABLE_SCROLL_LINES),
    }
    app.mark_dirty();
}
