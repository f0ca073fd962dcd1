//! Participant table: rows, highlight and scroll position, plus rendering

pub mod table_render;
mod table_state;

pub use table_state::TableState;
