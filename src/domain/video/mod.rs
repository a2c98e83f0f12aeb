// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains playback-related value objects and enums that are
//! independent of any engine or presentation concerns.

pub mod asset;
pub mod catalog;
pub mod media_item;
pub mod newtypes;
pub mod playback;

// Re-export commonly used types
pub use asset::{AssetKey, AssetProperties, KeyStatus};
pub use media_item::MediaItem;
pub use newtypes::{HideDelay, SeekStep, TickInterval};
pub use playback::{IconMode, PlaybackStatus, TimeState, LIVE_EDGE_EPSILON_SECS};
