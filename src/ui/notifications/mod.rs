// SPDX-License-Identifier: MPL-2.0
//! Alert notifications for user feedback.
//!
//! Player failures reach the user as an alert with a title and a single
//! acknowledgement button. Alerts never block the player; playback simply
//! stays unloaded until the user picks another source.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `NotificationCenter` presenting one alert at a time
//!
//! # Usage
//!
//! ```ignore
//! use onair::ui::notifications::{Notification, NotificationCenter};
//!
//! let mut center = NotificationCenter::new();
//! center.push(Notification::from_player_error(&err));
//!
//! // When the user presses "OK"
//! if let Some(id) = center.presented().map(Notification::id) {
//!     center.acknowledge(id);
//! }
//! ```

mod manager;
mod notification;

pub use manager::{Message as NotificationMessage, NotificationCenter};
pub use notification::{Notification, NotificationId, Severity, ACKNOWLEDGE_KEY};
