// SPDX-License-Identifier: MPL-2.0
//! Playback status, transport icon and time state.
//!
//! These are the values the transport controller derives from engine events.
//! They carry no behavior beyond their own invariants.

/// Distance to the live edge under which playback counts as "on air".
///
/// Much smaller than any tick cadence, so a position half a tick behind
/// the edge is reported as off-air.
pub const LIVE_EDGE_EPSILON_SECS: f64 = 1e-3;

/// Readiness of the currently loaded media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// Nothing loaded yet, or the engine has not decided.
    #[default]
    Idle,
    /// The item can be played.
    ReadyToPlay,
    /// The item failed to load.
    Failed,
}

impl PlaybackStatus {
    /// Returns the status after observing `next` for the same item.
    ///
    /// Once an item has settled (`ReadyToPlay` or `Failed`) it never goes back
    /// to `Idle`; a late `Idle` report is ignored.
    #[must_use]
    pub fn advance(self, next: Self) -> Self {
        match (self, next) {
            (Self::ReadyToPlay | Self::Failed, Self::Idle) => self,
            _ => next,
        }
    }

    /// Returns true if the item can be played.
    #[must_use]
    pub fn is_ready(self) -> bool {
        matches!(self, Self::ReadyToPlay)
    }

    /// Returns true if the item failed to load.
    #[must_use]
    pub fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Icon shown on the play/pause button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Paused, buffering or unknown: offer "play".
    #[default]
    Play,
    /// Playing: offer "pause".
    Pause,
}

impl IconMode {
    /// Derives the icon from an engine playback rate.
    #[must_use]
    pub fn from_rate(rate: f32) -> Self {
        if rate > 0.0 {
            Self::Pause
        } else {
            Self::Play
        }
    }
}

/// Elapsed and total time of the current item, in seconds.
///
/// A total of zero means "not known yet" and is treated as a live,
/// unbounded stream. Once the total is known the current position never
/// exceeds it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeState {
    current_secs: f64,
    total_secs: f64,
}

impl TimeState {
    /// Creates a time state, clamping `current_secs` into range.
    #[must_use]
    pub fn new(current_secs: f64, total_secs: f64) -> Self {
        let mut state = Self {
            current_secs: 0.0,
            total_secs: total_secs.max(0.0),
        };
        state.set_current(current_secs);
        state
    }

    #[must_use]
    pub fn current_secs(&self) -> f64 {
        self.current_secs
    }

    #[must_use]
    pub fn total_secs(&self) -> f64 {
        self.total_secs
    }

    /// Returns true once a non-zero total is known.
    #[must_use]
    pub fn is_total_known(&self) -> bool {
        self.total_secs > 0.0
    }

    /// Time left until the live edge, never negative.
    #[must_use]
    pub fn remaining_secs(&self) -> f64 {
        (self.total_secs - self.current_secs).max(0.0)
    }

    /// Returns true if the position sits on the live edge.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.total_secs - self.current_secs <= LIVE_EDGE_EPSILON_SECS
    }

    /// Clamps a seek target into `[0, total]`.
    #[must_use]
    pub fn clamp_target(&self, target_secs: f64) -> f64 {
        target_secs.clamp(0.0, self.total_secs)
    }

    pub(crate) fn set_current(&mut self, secs: f64) {
        let secs = secs.max(0.0);
        self.current_secs = if self.is_total_known() {
            secs.min(self.total_secs)
        } else {
            secs
        };
    }

    pub(crate) fn set_total(&mut self, secs: f64) {
        self.total_secs = secs.max(0.0);
        if self.is_total_known() && self.current_secs > self.total_secs {
            self.current_secs = self.total_secs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_idle() {
        assert_eq!(PlaybackStatus::default(), PlaybackStatus::Idle);
    }

    #[test]
    fn settled_status_never_reverts_to_idle() {
        let ready = PlaybackStatus::Idle.advance(PlaybackStatus::ReadyToPlay);
        assert_eq!(ready.advance(PlaybackStatus::Idle), PlaybackStatus::ReadyToPlay);

        let failed = PlaybackStatus::Idle.advance(PlaybackStatus::Failed);
        assert_eq!(failed.advance(PlaybackStatus::Idle), PlaybackStatus::Failed);
    }

    #[test]
    fn ready_item_can_still_fail() {
        let status = PlaybackStatus::ReadyToPlay.advance(PlaybackStatus::Failed);
        assert!(status.is_failed());
    }

    #[test]
    fn icon_follows_rate() {
        assert_eq!(IconMode::from_rate(1.0), IconMode::Pause);
        assert_eq!(IconMode::from_rate(0.5), IconMode::Pause);
        assert_eq!(IconMode::from_rate(0.0), IconMode::Play);
    }

    #[test]
    fn unknown_total_counts_as_live() {
        let time = TimeState::default();
        assert!(!time.is_total_known());
        assert!(time.is_live());
    }

    #[test]
    fn live_edge_detection() {
        assert!(TimeState::new(120.0, 120.0).is_live());
        assert!(!TimeState::new(119.5, 120.0).is_live());
    }

    #[test]
    fn current_is_clamped_to_known_total() {
        let time = TimeState::new(150.0, 120.0);
        assert_eq!(time.current_secs(), 120.0);
        assert_eq!(TimeState::new(-3.0, 120.0).current_secs(), 0.0);
    }

    #[test]
    fn shrinking_total_pulls_current_back() {
        let mut time = TimeState::new(100.0, 120.0);
        time.set_total(90.0);
        assert_eq!(time.current_secs(), 90.0);
    }

    #[test]
    fn clamp_target_stays_in_range() {
        let time = TimeState::new(10.0, 60.0);
        assert_eq!(time.clamp_target(-5.0), 0.0);
        assert_eq!(time.clamp_target(75.0), 60.0);
        assert_eq!(time.clamp_target(30.0), 30.0);
    }

    #[test]
    fn remaining_is_never_negative() {
        assert_eq!(TimeState::new(120.0, 120.0).remaining_secs(), 0.0);
        assert_eq!(TimeState::new(100.0, 120.0).remaining_secs(), 20.0);
    }
}
