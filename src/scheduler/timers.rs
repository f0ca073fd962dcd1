use std::time::{Duration, Instant};

/// The two timers the lookup controller runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Short delay between a keystroke and the lookup it triggers
    Lookup,
    /// Pause after which the next keystroke starts a fresh entry
    Reset,
}

impl TimerKind {
    fn slot(self) -> usize {
        match self {
            TimerKind::Lookup => 0,
            TimerKind::Reset => 1,
        }
    }

    const ALL: [TimerKind; 2] = [TimerKind::Lookup, TimerKind::Reset];
}

/// Single-threaded timer queue with monotonic deadlines
///
/// Holds at most one pending deadline per [`TimerKind`]. Scheduling a kind
/// that is already pending replaces its deadline, so the last keystroke wins.
/// Callers pass `now` explicitly; nothing here reads the clock.
#[derive(Debug, Default)]
pub struct Scheduler {
    deadlines: [Option<Instant>; 2],
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `kind` to fire `delay` after `now`, replacing any pending deadline
    pub fn schedule(&mut self, kind: TimerKind, now: Instant, delay: Duration) {
        #[cfg(debug_assertions)]
        log::debug!("scheduler: arm {:?} in {}ms", kind, delay.as_millis());

        self.deadlines[kind.slot()] = Some(now + delay);
    }

    pub fn cancel(&mut self, kind: TimerKind) {
        self.deadlines[kind.slot()] = None;
    }

    pub fn cancel_all(&mut self) {
        self.deadlines = [None, None];
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.deadline(kind).is_some()
    }

    pub fn deadline(&self, kind: TimerKind) -> Option<Instant> {
        self.deadlines[kind.slot()]
    }

    /// Earliest pending deadline, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.iter().flatten().min().copied()
    }

    /// Remove and return every timer whose deadline is at or before `now`
    ///
    /// Ordered by deadline; a lookup due at the same instant as a reset
    /// comes first.
    pub fn pop_due(&mut self, now: Instant) -> Vec<TimerKind> {
        let mut due: Vec<(Instant, TimerKind)> = TimerKind::ALL
            .iter()
            .filter_map(|&kind| {
                self.deadlines[kind.slot()]
                    .filter(|deadline| *deadline <= now)
                    .map(|deadline| (deadline, kind))
            })
            .collect();
        due.sort_by_key(|(deadline, kind)| (*deadline, kind.slot()));

        for (_, kind) in &due {
            self.deadlines[kind.slot()] = None;
        }

        due.into_iter().map(|(_, kind)| kind).collect()
    }

    /// Time from `now` until the next deadline; zero when one is overdue
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
#[path = "timers_tests.rs"]
mod timers_tests;
