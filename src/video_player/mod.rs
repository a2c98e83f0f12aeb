// SPDX-License-Identifier: MPL-2.0
//! Player control core.
//!
//! Each controller is a small state machine with a `handle()` returning an
//! effect. The [`session`] module wires them to the engine, the clock, the
//! orientation feed and the layout engine inside one Tokio task.

pub mod clock;
pub mod facade;
pub mod layout;
pub mod orientation;
pub mod session;
pub mod time_format;
pub mod transport;
pub mod visibility;

pub use clock::{TickStream, TimeObservation};
pub use facade::PlaybackEngineFacade;
pub use layout::LayoutApplier;
pub use orientation::{DeviceOrientation, OrientationSource};
pub use session::{Command, PlayerSession, SessionConfig, SessionHandle, UiState};
pub use time_format::{format_remaining, format_time};
