// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core player rules with no engine or UI dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//!
//! # Modules
//!
//! - [`ui`]: Layout value objects ([`LayoutMode`](ui::LayoutMode),
//!   [`LayoutSpec`](ui::LayoutSpec))
//! - [`video`]: Playback types ([`PlaybackStatus`](video::PlaybackStatus),
//!   [`TimeState`](video::TimeState), [`MediaItem`](video::MediaItem))

pub mod ui;
pub mod video;
