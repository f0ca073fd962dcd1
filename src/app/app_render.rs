use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::time::Instant;

use super::app_state::App;
use crate::details::details_render::{self, DETAIL_PANEL_HEIGHT};
use crate::notification::render_notification;
use crate::theme;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let banner_height = u16::from(self.load_error.is_some());
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(banner_height),
            Constraint::Length(DETAIL_PANEL_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (title_area, banner_area, detail_area, table_area, help_area) =
            (layout[0], layout[1], layout[2], layout[3], layout[4]);

        let title_rect =
            crate::input::input_render::render_field(&self.input_display, frame, title_area);
        self.layout_regions.title_bar = Some(title_rect);

        if let Some(message) = &self.load_error {
            render_banner(message, frame, banner_area);
            self.layout_regions.error_banner = Some(banner_area);
        }

        let detail_rect = details_render::render_panel(&self.detail, frame, detail_area);
        self.layout_regions.detail_panel = Some(detail_rect);

        crate::runner_table::table_render::render_pane(self, frame, table_area);

        crate::help::help_line_render::render_line(self, frame, help_area);

        // Notification last so it floats above everything
        render_notification(frame, &mut self.notification, Instant::now());
    }
}

fn render_banner(message: &str, frame: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(format!(" {} ", message), theme::banner::ERROR));
    frame.render_widget(Paragraph::new(line).style(theme::banner::ERROR), area);
}
