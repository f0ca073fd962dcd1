use std::time::{Duration, Instant};

use super::input_state::{InputState, Keystroke};
use super::render_command::{InputDisplay, RenderCommand, TableView};
use crate::config::LookupConfig;
use crate::lookup::{self, DetailPanel, MatchStyle, SortColumn, SortState};
use crate::participant::Participant;
use crate::scheduler::{Scheduler, TimerKind};

#[cfg(debug_assertions)]
use log::debug;

/// All interaction state for one lookup station
///
/// Owns the participants, the entry buffer, the table sort and the two
/// timers. Every event goes in through a method here and comes back out as
/// render commands; nothing else mutates this state.
#[derive(Debug)]
pub struct Session {
    participants: Vec<Participant>,
    loaded: bool,
    input: InputState,
    sort: SortState,
    table_filter: String,
    detail: DetailPanel,
    scheduler: Scheduler,
    lookup_delay: Duration,
    reset_timeout: Duration,
}

impl Session {
    pub fn new(config: &LookupConfig) -> Self {
        Self {
            participants: Vec::new(),
            loaded: false,
            input: InputState::new(),
            sort: SortState::default(),
            table_filter: String::new(),
            detail: DetailPanel::Loading,
            scheduler: Scheduler::new(),
            lookup_delay: Duration::from_millis(config.lookup_debounce_ms),
            reset_timeout: Duration::from_millis(config.reset_timeout_ms),
        }
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn detail(&self) -> &DetailPanel {
        &self.detail
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Earliest timer deadline; the event loop must wake up by then
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Install freshly loaded participants and draw the table
    pub fn load_participants(&mut self, participants: Vec<Participant>) -> Vec<RenderCommand> {
        #[cfg(debug_assertions)]
        debug!("session: {} participants loaded", participants.len());

        self.participants = participants;
        self.loaded = true;
        self.table_filter = self.input.filter_term();

        let mut commands = vec![RenderCommand::ClearLoadError, self.table_command()];
        commands.extend(self.lookup_now());
        commands
    }

    /// Report a failed load; previously loaded participants stay in place
    pub fn load_failed(&mut self, message: &str) -> Vec<RenderCommand> {
        #[cfg(debug_assertions)]
        log::error!("session: participant load failed: {}", message);

        let mut commands = vec![RenderCommand::ShowLoadError(format!(
            "Error loading data: {}",
            message
        ))];
        if !self.loaded {
            self.detail = DetailPanel::Prompt;
            commands.push(RenderCommand::ReplaceDetailPanel(self.detail.clone()));
        }
        commands
    }

    pub fn on_keystroke(&mut self, key: Keystroke, now: Instant) -> Vec<RenderCommand> {
        match key {
            Keystroke::Escape => {
                self.input.clear();
                self.scheduler.cancel_all();
                self.recompute()
            }
            Keystroke::Backspace => {
                if self.input.pop_char() {
                    self.recompute()
                } else {
                    Vec::new()
                }
            }
            Keystroke::Enter => {
                let mut commands = self.lookup_now();
                commands.push(self.input_display_command());
                commands
            }
            Keystroke::Char(c) if c.is_ascii_alphanumeric() => {
                self.input.push_char(c);
                self.scheduler
                    .schedule(TimerKind::Reset, now, self.reset_timeout);
                self.scheduler
                    .schedule(TimerKind::Lookup, now, self.lookup_delay);
                Vec::new()
            }
            Keystroke::Char(_) => Vec::new(),
        }
    }

    /// Fire every timer that is due at `now`
    pub fn tick(&mut self, now: Instant) -> Vec<RenderCommand> {
        let mut commands = Vec::new();
        for kind in self.scheduler.pop_due(now) {
            #[cfg(debug_assertions)]
            debug!("session: {:?} timer fired, buffer='{}'", kind, self.input.buffer());

            match kind {
                TimerKind::Lookup => commands.extend(self.recompute()),
                TimerKind::Reset => commands.extend(self.on_reset_timeout()),
            }
        }
        commands
    }

    /// Table row click: look up that bib straight away
    pub fn click_row(&mut self, bib_number: u32) -> Vec<RenderCommand> {
        self.input.set_buffer(&bib_number.to_string());
        let mut commands = self.lookup_now();
        commands.push(self.input_display_command());
        commands
    }

    /// Column header click: toggle or switch the sort and redraw the table
    pub fn click_header(&mut self, column: SortColumn) -> Vec<RenderCommand> {
        self.sort.click(column);

        #[cfg(debug_assertions)]
        debug!("session: sort now {:?}", self.sort);

        vec![self.table_command()]
    }

    /// Look up the current buffer without waiting for the debounce
    pub fn lookup_now(&mut self) -> Vec<RenderCommand> {
        let result = lookup::lookup(&self.participants, self.input.buffer());

        // A unique match ends the entry; the next keystroke starts over
        if result.count() == 1 {
            self.input.mark_ready_to_reset();
            self.scheduler.cancel(TimerKind::Reset);
        }

        self.detail = DetailPanel::for_result(&result, self.input.is_ready_to_reset());
        let highlight = result.top().map(|p| p.bib_number);

        vec![
            RenderCommand::ReplaceDetailPanel(self.detail.clone()),
            RenderCommand::HighlightRow(highlight),
        ]
    }

    /// Lookup, table refilter and input display refresh
    fn recompute(&mut self) -> Vec<RenderCommand> {
        self.table_filter = self.input.filter_term();
        let mut commands = vec![self.table_command()];
        commands.extend(self.lookup_now());
        commands.push(self.input_display_command());
        commands
    }

    fn on_reset_timeout(&mut self) -> Vec<RenderCommand> {
        self.mark_ready_to_reset();

        let mut commands = Vec::new();
        if self.detail.is_multi_match() {
            self.detail = self.detail.restyled(MatchStyle::Confirmed);
            commands.push(RenderCommand::ReplaceDetailPanel(self.detail.clone()));
        }
        commands.push(self.input_display_command());
        commands
    }

    fn mark_ready_to_reset(&mut self) {
        self.input.mark_ready_to_reset();
        self.scheduler.cancel(TimerKind::Reset);
    }

    fn table_command(&self) -> RenderCommand {
        let rows = lookup::render_table(&self.participants, &self.table_filter, self.sort)
            .into_iter()
            .cloned()
            .collect();
        RenderCommand::ReplaceTable(TableView {
            rows,
            filter: self.table_filter.clone(),
            sort: self.sort,
        })
    }

    fn input_display_command(&self) -> RenderCommand {
        let buffer = self.input.buffer().trim();
        RenderCommand::UpdateInputDisplay(InputDisplay {
            text: (!buffer.is_empty()).then(|| buffer.to_string()),
            ready_to_reset: self.input.is_ready_to_reset(),
        })
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
