//! Keystroke capture, debounce and reset control
//!
//! [`Session`] is the single owner of interaction state. Presentation code
//! feeds it keystrokes, clicks and clock ticks, then applies the
//! [`RenderCommand`]s it returns.

mod input_state;
mod render_command;
mod session;

pub use input_state::{InputState, Keystroke};
pub use render_command::{InputDisplay, RenderCommand, TableView};
pub use session::Session;
