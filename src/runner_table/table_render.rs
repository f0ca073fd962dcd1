use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::app::App;
use crate::lookup::{SortColumn, SortDirection, SortState};
use crate::participant::Participant;
use crate::theme;
use crate::widgets::scrollbar;

const COLUMN_SPACING: u16 = 1;

const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Length(6),
    Constraint::Fill(3),
    Constraint::Length(5),
    Constraint::Length(10),
    Constraint::Fill(2),
];

/// Header label with the sort indicator on the active column
pub fn header_label(column: SortColumn, sort: SortState) -> String {
    if column != sort.column {
        return column.title().to_string();
    }
    let arrow = match sort.direction {
        SortDirection::Ascending => "\u{25b2}",
        SortDirection::Descending => "\u{25bc}",
    };
    format!("{} {}", column.title(), arrow)
}

fn cell_text(column: SortColumn, runner: &Participant) -> String {
    match column {
        SortColumn::BibNumber => runner.bib_text(),
        SortColumn::FullName => runner.full_name.clone(),
        SortColumn::Age => runner.age_display(),
        SortColumn::Category => runner.category_display().to_string(),
        SortColumn::Club => runner.club_display().to_string(),
    }
}

/// Render the participant table and record its header cells and body area
pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) {
    let row_count = app.table.rows().len();
    let title = Line::from(Span::styled(
        format!(" Runners ({}) ", row_count),
        Style::default().fg(theme::table::COUNT),
    ));
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(theme::table::BORDER))
        .style(Style::default().bg(theme::table::BACKGROUND));

    let inner = block.inner(area);
    app.layout_regions.table_pane = Some(area);

    if app.table.is_loading() {
        let text = Line::from(Span::styled("Loading runners...", theme::detail::LOADING));
        frame.render_widget(Paragraph::new(text).block(block), area);
        return;
    }

    let header_area = Rect { height: inner.height.min(1), ..inner };
    let body_area = Rect {
        y: inner.y.saturating_add(1),
        height: inner.height.saturating_sub(1),
        ..inner
    };

    let view = app.table.view();
    let sort = view.sort;

    let column_areas = Layout::horizontal(COLUMN_WIDTHS)
        .flex(Flex::Start)
        .spacing(COLUMN_SPACING)
        .split(header_area);
    app.layout_regions.header_columns = SortColumn::ALL
        .iter()
        .copied()
        .zip(column_areas.iter().copied())
        .collect();
    app.layout_regions.table_header = Some(header_area);
    app.layout_regions.table_body = Some(body_area);

    let header = Row::new(SortColumn::ALL.iter().map(|&column| {
        let style = if column == sort.column {
            theme::table::HEADER_ACTIVE
        } else {
            theme::table::HEADER
        };
        Cell::from(header_label(column, sort)).style(style)
    }));

    if let Some(message) = view.empty_message() {
        let table = Table::new(Vec::<Row>::new(), COLUMN_WIDTHS)
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .flex(Flex::Start);
        frame.render_widget(table.block(block), area);
        let text = Line::from(Span::styled(message, Style::default().fg(theme::table::EMPTY)));
        frame.render_widget(Paragraph::new(text), body_area);
        return;
    }

    let viewport_height = body_area.height;
    app.table
        .scroll
        .update_bounds(row_count as u32, viewport_height);

    let offset = app.table.scroll.offset as usize;
    let highlighted = app.table.highlighted();
    let rows: Vec<Row> = app
        .table
        .rows()
        .iter()
        .skip(offset)
        .take(viewport_height as usize)
        .map(|runner| {
            let style = if Some(runner.bib_number) == highlighted {
                theme::table::ROW_HIGHLIGHT
            } else {
                Style::default().fg(theme::table::ROW)
            };
            Row::new(SortColumn::ALL.iter().map(|&column| cell_text(column, runner)))
                .style(style)
        })
        .collect();

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .flex(Flex::Start)
        .block(block);
    frame.render_widget(table, area);

    scrollbar::render_row_scrollbar(
        frame,
        area,
        body_area,
        &app.table.scroll,
        theme::scrollbar::DEFAULT,
    );
}

#[cfg(test)]
#[path = "table_render_tests.rs"]
mod table_render_tests;
