// SPDX-License-Identifier: MPL-2.0
//! Presentation helpers for the player screen.
//!
//! - [`labels`] - Localized strings derived from the session's UI state
//! - [`notifications`] - Error alerts and their acknowledgement queue

pub mod labels;
pub mod notifications;
