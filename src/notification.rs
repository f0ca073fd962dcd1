//! Notification module for bibfinder
//!
//! Transient messages shown in the top-right corner: config warnings, load
//! confirmations and sort changes.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationState, NotificationType};
