// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the settings file.
//!
//! Range bounds live next to the newtypes that enforce them; this module
//! re-states the defaults the config layer writes out.
//!
//! # Categories
//!
//! - **Playback**: autoplay, time observer cadence and skip step
//! - **Controls**: overlay auto-hide delay

use crate::domain::video::newtypes::{hide_delay_bounds, seek_step_bounds, tick_interval_bounds};

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Start playing as soon as the asset is validated.
pub const DEFAULT_AUTOPLAY: bool = true;

/// Default periodic time observer cadence in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = tick_interval_bounds::DEFAULT_MS;

/// Default rewind/forward step in seconds.
pub const DEFAULT_SEEK_STEP_SECS: f64 = seek_step_bounds::DEFAULT;

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Default auto-hide delay of the control overlay in milliseconds.
pub const DEFAULT_HIDE_DELAY_MS: u64 = hide_delay_bounds::DEFAULT_MS;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TICK_INTERVAL_MS >= tick_interval_bounds::MIN_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= tick_interval_bounds::MAX_MS);

    assert!(DEFAULT_SEEK_STEP_SECS >= seek_step_bounds::MIN);
    assert!(DEFAULT_SEEK_STEP_SECS <= seek_step_bounds::MAX);

    assert!(DEFAULT_HIDE_DELAY_MS >= hide_delay_bounds::MIN_MS);
    assert!(DEFAULT_HIDE_DELAY_MS <= hide_delay_bounds::MAX_MS);

    // The hide delay must outlast at least one tick, or the controls would
    // vanish before the time label ever updates.
    assert!(DEFAULT_HIDE_DELAY_MS > DEFAULT_TICK_INTERVAL_MS);
};
