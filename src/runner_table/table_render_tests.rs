//! Tests for table_render

use super::*;
use crate::config::Config;
use crate::controller::TableView;
use crate::test_utils::test_helpers::{field_runners, test_app};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render_to_terminal(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            render_pane(app, f, area);
        })
        .unwrap();
    terminal
}

fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    render_to_terminal(app, width, height).backend().to_string()
}

#[test]
fn test_header_label_marks_active_column() {
    let mut sort = SortState::default();
    assert_eq!(header_label(SortColumn::BibNumber, sort), "Bib \u{25b2}");
    assert_eq!(header_label(SortColumn::Club, sort), "Club");

    sort.click(SortColumn::BibNumber);
    assert_eq!(header_label(SortColumn::BibNumber, sort), "Bib \u{25bc}");
}

#[test]
fn test_loading_indicator_before_data() {
    let mut app = App::new(&Config::default());

    let output = render_to_string(&mut app, 80, 12);

    assert!(output.contains("Loading runners..."));
    assert!(app.layout_regions.table_body.is_none());
}

#[test]
fn test_rows_and_headers_rendered() {
    let mut app = test_app(field_runners());

    let output = render_to_string(&mut app, 80, 12);

    assert!(output.contains("Runners (6)"));
    assert!(output.contains("Bib \u{25b2}"));
    assert!(output.contains("Category"));
    assert!(output.contains("Alice Smith"));
    assert!(output.contains("Riverside Harriers"));
    assert!(output.contains("N/A"));
}

#[test]
fn test_default_order_is_ascending_bib() {
    let mut app = test_app(field_runners());

    let output = render_to_string(&mut app, 80, 12);
    let zoe = output.find("Zoe Adams").unwrap();
    let dan = output.find("Dan Black").unwrap();
    let emile = output.find("Émile Zola").unwrap();

    assert!(zoe < dan);
    assert!(dan < emile);
}

#[test]
fn test_empty_filter_message() {
    let mut app = test_app(field_runners());
    app.table.replace(TableView {
        rows: Vec::new(),
        filter: "zzz".to_string(),
        sort: SortState::default(),
    });

    let output = render_to_string(&mut app, 80, 12);

    assert!(output.contains("No runners found matching: zzz"));
    assert!(output.contains("Runners (0)"));
}

#[test]
fn test_header_cells_recorded_for_hit_testing() {
    let mut app = test_app(field_runners());

    render_to_string(&mut app, 80, 12);

    let columns = &app.layout_regions.header_columns;
    assert_eq!(columns.len(), 5);
    assert_eq!(columns[0].0, SortColumn::BibNumber);
    assert_eq!(columns[0].1, Rect::new(1, 1, 6, 1));
    assert!(columns.windows(2).all(|pair| pair[0].1.right() < pair[1].1.x + 1));
    assert_eq!(app.layout_regions.table_body, Some(Rect::new(1, 2, 78, 9)));
}

#[test]
fn test_highlighted_row_uses_highlight_style() {
    let mut app = test_app(field_runners());
    app.table.highlight(Some(101));

    let terminal = render_to_terminal(&mut app, 80, 12);
    let buffer = terminal.backend().buffer();

    // Border, header, then 1, 12, 101
    assert_eq!(buffer[(2, 4)].bg, theme::table::ROW_HIGHLIGHT.bg.unwrap());
    assert_ne!(buffer[(2, 3)].bg, theme::table::ROW_HIGHLIGHT.bg.unwrap());
}

#[test]
fn test_small_viewport_scrolls_to_highlight() {
    let mut app = test_app(field_runners());
    render_to_string(&mut app, 80, 5);
    app.table.highlight(Some(205));

    let output = render_to_string(&mut app, 80, 5);

    assert!(output.contains("Émile Zola"));
    assert!(!output.contains("Zoe Adams"));
}
