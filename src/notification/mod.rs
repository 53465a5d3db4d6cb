//! Notification module for weathernow
//!
//! Transient messages shown in the top-right corner. Used for lookup failures
//! and startup warnings instead of anything that blocks input.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationKind, NotificationState};
