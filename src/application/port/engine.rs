// SPDX-License-Identifier: MPL-2.0
//! Media engine port definition.
//!
//! The [`MediaEngine`] trait is the contract the player core needs from a
//! platform media player: a handful of commands, polled properties, and
//! three kinds of notifications (rate, status, time).
//!
//! # Design Notes
//!
//! - Commands take `&self`; engines are shared behind an `Arc` and use
//!   interior mutability
//! - Rate and status changes are multicast through `broadcast` channels, so a
//!   late subscriber only sees future emissions
//! - Time observers push into an `mpsc` sender supplied by the caller and are
//!   identified by an [`ObserverToken`] that must be handed back on removal

use crate::domain::video::PlaybackStatus;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use url::Url;

/// Handle identifying a registered time observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverToken(u64);

impl ObserverToken {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Port for a platform media engine.
///
/// All times are in seconds. Implementations must tolerate duplicate
/// `play`/`pause` calls; they are only observable through the rate channel.
pub trait MediaEngine: Send + Sync {
    /// Replaces the current item with the stream at `url`.
    fn replace_current_item(&self, url: &Url);

    /// Starts or resumes playback.
    fn play(&self);

    /// Pauses playback.
    fn pause(&self);

    /// Seeks to `to_secs` with the given tolerances (zero means exact).
    fn seek(&self, to_secs: f64, tolerance_before: f64, tolerance_after: f64);

    /// Current playback rate; zero when paused or stalled.
    fn rate(&self) -> f32;

    /// Readiness of the current item.
    fn status(&self) -> PlaybackStatus;

    /// Current playback position.
    fn current_time(&self) -> f64;

    /// Duration of the current item, `None` while indefinite (live or not probed).
    fn duration(&self) -> Option<f64>;

    /// Subscribes to playback rate changes.
    fn subscribe_rate(&self) -> broadcast::Receiver<f32>;

    /// Subscribes to item status changes.
    fn subscribe_status(&self) -> broadcast::Receiver<PlaybackStatus>;

    /// Registers a periodic time observer firing every `interval` while playing.
    fn add_periodic_time_observer(
        &self,
        interval: Duration,
        sink: mpsc::UnboundedSender<f64>,
    ) -> ObserverToken;

    /// Registers an observer firing when playback crosses any of `times`.
    fn add_boundary_time_observer(
        &self,
        times: Vec<f64>,
        sink: mpsc::UnboundedSender<f64>,
    ) -> ObserverToken;

    /// Removes a time observer. Unknown tokens are ignored.
    fn remove_time_observer(&self, token: ObserverToken);
}
