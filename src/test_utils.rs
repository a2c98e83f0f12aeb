// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Playback times and seek steps are `f64` seconds; compare them with the
//! `approx` macros rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;
