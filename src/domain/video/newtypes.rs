// SPDX-License-Identifier: MPL-2.0
//! Player control newtypes.
//!
//! This module provides type-safe wrappers for the tunable timing values of
//! the control core, ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// SeekStep
// =============================================================================

/// Skip button step bounds in seconds.
pub mod seek_step_bounds {
    /// Minimum skip step.
    pub const MIN: f64 = 1.0;
    /// Maximum skip step.
    pub const MAX: f64 = 120.0;
    /// Default skip step (rewind/forward 15 seconds).
    pub const DEFAULT: f64 = 15.0;
}

/// Distance jumped by the rewind and forward buttons, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekStep(f64);

impl SeekStep {
    /// Creates a new seek step, clamping to valid range.
    #[must_use]
    pub fn new(secs: f64) -> Self {
        Self(secs.clamp(seek_step_bounds::MIN, seek_step_bounds::MAX))
    }

    /// Returns the step in seconds.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for SeekStep {
    fn default() -> Self {
        Self(seek_step_bounds::DEFAULT)
    }
}

// =============================================================================
// TickInterval
// =============================================================================

/// Periodic time observer cadence bounds in milliseconds.
pub mod tick_interval_bounds {
    /// Fastest allowed cadence.
    pub const MIN_MS: u64 = 50;
    /// Slowest allowed cadence.
    pub const MAX_MS: u64 = 5_000;
    /// Default cadence (two ticks per second).
    pub const DEFAULT_MS: u64 = 500;
}

/// Cadence of the engine's periodic time notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval(u64);

impl TickInterval {
    /// Creates a new interval from milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(tick_interval_bounds::MIN_MS, tick_interval_bounds::MAX_MS))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(tick_interval_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// HideDelay
// =============================================================================

/// Control overlay auto-hide delay bounds in milliseconds.
pub mod hide_delay_bounds {
    /// Shortest delay.
    pub const MIN_MS: u64 = 500;
    /// Longest delay.
    pub const MAX_MS: u64 = 30_000;
    /// Default delay (2.5 seconds).
    pub const DEFAULT_MS: u64 = 2_500;
}

/// How long the control overlay stays up after being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideDelay(u64);

impl HideDelay {
    /// Creates a new delay from milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(hide_delay_bounds::MIN_MS, hide_delay_bounds::MAX_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for HideDelay {
    fn default() -> Self {
        Self(hide_delay_bounds::DEFAULT_MS)
    }
}
