pub mod loader;
mod record;

pub use loader::{LoadingState, ParticipantLoader, load_participants};
pub use record::{PLACEHOLDER, Participant};
