//! Mouse click handling
//!
//! Header cells re-sort the table; data rows select that runner.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::layout::{Region, column_at};

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::TableHeader) => click_table_header(app, mouse),
        Some(Region::TableBody) => click_table_body(app, mouse),
        _ => {}
    }
}

fn click_table_header(app: &mut App, mouse: MouseEvent) {
    // Gaps between header cells belong to no column
    if let Some(column) = column_at(&app.layout_regions, mouse.column, mouse.row) {
        app.sort_by(column);
    }
}

fn click_table_body(app: &mut App, mouse: MouseEvent) {
    let Some(body) = app.layout_regions.table_body else {
        return;
    };

    let line = mouse.row.saturating_sub(body.y);
    let Some(bib_number) = app.table.row_at_line(line).map(|runner| runner.bib_number) else {
        return;
    };
    app.select_runner(bib_number);
}
