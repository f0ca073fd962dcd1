mod timers;

pub use timers::{Scheduler, TimerKind};
