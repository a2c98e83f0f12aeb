// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the player core remains
//! independent of any platform media stack.
//!
//! # Available Ports
//!
//! - [`engine`]: Media engine control and event delivery
//! - [`layout`]: Screen layout application
//! - [`probe`]: Asset property probing before an item is loaded
//!
//! # Design Notes
//!
//! - Engine events are delivered through `tokio::sync` channels handed out by
//!   the port, never through callbacks into the core
//! - Traits are `Send + Sync` where the session task shares them
//! - No `async fn` in traits; the probe returns a boxed future instead

pub mod engine;
pub mod layout;
pub mod probe;

// Re-export main types for convenience
pub use engine::{MediaEngine, ObserverToken};
pub use layout::LayoutEngine;
pub use probe::AssetProbe;
