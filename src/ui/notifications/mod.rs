// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for non-blocking warnings.
//!
//! Used for problems that must not interrupt browsing: an unreadable
//! settings file, a corrupted state file, an image the system
//! opener refused.
//!
//! - [`notification`] - `Notification` with severity and i18n key
//! - [`manager`] - queueing and auto-dismiss
//! - [`toast`] - rendering

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
