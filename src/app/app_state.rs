use std::time::Instant;

use crate::config::Config;
use crate::controller::{InputDisplay, RenderCommand, Session};
use crate::error::BibError;
use crate::layout::LayoutRegions;
use crate::lookup::{DetailPanel, SortColumn};
use crate::notification::NotificationState;
use crate::participant::{Participant, ParticipantLoader};
use crate::runner_table::TableState;

/// Terminal adapter state
///
/// `session` owns the lookup logic; everything else here is what the screen
/// currently shows, updated only by applying the session's render commands.
pub struct App {
    pub session: Session,
    pub file_loader: Option<ParticipantLoader>,
    pub detail: DetailPanel,
    pub table: TableState,
    pub input_display: InputDisplay,
    pub load_error: Option<String>,
    pub notification: NotificationState,
    pub layout_regions: LayoutRegions,
    pub should_quit: bool,
    pub needs_render: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let session = Session::new(&config.lookup);
        Self {
            detail: session.detail().clone(),
            session,
            file_loader: None,
            table: TableState::new(),
            input_display: InputDisplay::default(),
            load_error: None,
            notification: NotificationState::new(),
            layout_regions: LayoutRegions::new(),
            should_quit: false,
            needs_render: true,
        }
    }

    pub fn new_with_loader(loader: ParticipantLoader, config: &Config) -> Self {
        let mut app = Self::new(config);
        app.file_loader = Some(loader);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    /// Redraw when state changed or a notification may need to expire
    pub fn should_render(&self) -> bool {
        self.needs_render || self.notification.is_visible()
    }

    /// Hand the loader result to the session once it arrives
    pub fn poll_file_loader(&mut self) {
        let Some(loader) = self.file_loader.as_mut() else {
            return;
        };
        if let Some(result) = loader.poll() {
            self.file_loader = None;
            self.apply_loaded(result);
        }
    }

    pub fn apply_loaded(&mut self, result: Result<Vec<Participant>, BibError>) {
        let commands = match result {
            Ok(participants) => {
                self.notification
                    .show(&format!("Loaded {} runners", participants.len()));
                self.session.load_participants(participants)
            }
            Err(e) => self.session.load_failed(&e.to_string()),
        };
        self.table.finish_loading();
        self.apply(commands);
    }

    /// Fire due timers
    pub fn tick(&mut self, now: Instant) {
        let commands = self.session.tick(now);
        self.apply(commands);
    }

    pub fn sort_by(&mut self, column: SortColumn) {
        let commands = self.session.click_header(column);
        self.apply(commands);

        let sort = self.session.sort();
        self.notification.show(&format!(
            "Sorted by {}",
            crate::runner_table::table_render::header_label(column, sort)
        ));
    }

    pub fn select_runner(&mut self, bib_number: u32) {
        let commands = self.session.click_row(bib_number);
        self.apply(commands);
    }

    /// Apply render commands in order
    pub fn apply(&mut self, commands: Vec<RenderCommand>) {
        if commands.is_empty() {
            return;
        }

        for command in commands {
            match command {
                RenderCommand::ReplaceDetailPanel(panel) => self.detail = panel,
                RenderCommand::HighlightRow(bib) => self.table.highlight(bib),
                RenderCommand::ReplaceTable(view) => self.table.replace(view),
                RenderCommand::UpdateInputDisplay(display) => self.input_display = display,
                RenderCommand::ShowLoadError(message) => self.load_error = Some(message),
                RenderCommand::ClearLoadError => self.load_error = None,
            }
        }
        self.mark_dirty();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
