// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`simulated`]: Virtual-timeline engine, asset probe and recording layout
//!   (implement [`MediaEngine`], [`AssetProbe`] and [`LayoutEngine`])
//!
//! [`MediaEngine`]: crate::application::port::MediaEngine
//! [`AssetProbe`]: crate::application::port::AssetProbe
//! [`LayoutEngine`]: crate::application::port::LayoutEngine

pub mod simulated;

// Re-export main types for convenience
pub use simulated::{EngineCall, RecordingLayout, SimulatedEngine, SimulatedProbe};
