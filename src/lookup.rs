//! Lookup engine
//!
//! Pure functions from participants and a search term to ranked matches,
//! detail panel contents and table rows. Nothing here holds state.

mod collate;
pub mod detail;
mod matcher;
pub mod table;

pub use collate::{compare_names, is_numeric_term};
pub use detail::{DetailPanel, MatchStyle, RunnerDetail};
pub use matcher::{MatchResult, lookup};
pub use table::{SortColumn, SortDirection, SortState, filter_participants, render_table};
