// SPDX-License-Identifier: MPL-2.0
//! Layout mode controller.
//!
//! Device rotation drives the layout, except right after the user explicitly
//! asked for full screen or minimize: the next rotation reading is then
//! consumed to clear that override instead of flipping the layout back.

use crate::application::port::LayoutEngine;
use crate::domain::ui::{LayoutMode, LayoutSpec};

/// Layout controller state.
#[derive(Debug, Clone, Default)]
pub struct State {
    mode: LayoutMode,
    override_pending: bool,
}

/// Messages for the layout controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The device settled in a new orientation.
    OrientationChanged { is_landscape: bool },
    FullScreenTapped,
    MinimizeTapped,
    /// The screen is going away.
    Teardown,
}

/// Effects produced by the layout controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Apply the given mode.
    Apply(LayoutMode),
}

impl State {
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::OrientationChanged { is_landscape } => {
                if self.override_pending {
                    self.override_pending = false;
                    log::debug!("orientation reading consumed by layout override");
                    return Effect::None;
                }
                self.transition(LayoutMode::from_landscape(is_landscape))
            }
            Message::FullScreenTapped => {
                self.override_pending = true;
                self.transition(LayoutMode::Landscape)
            }
            Message::MinimizeTapped => {
                self.override_pending = true;
                self.transition(LayoutMode::Portrait)
            }
            Message::Teardown => {
                self.override_pending = false;
                self.transition(LayoutMode::Portrait)
            }
        }
    }

    fn transition(&mut self, mode: LayoutMode) -> Effect {
        if self.mode == mode {
            return Effect::None;
        }
        self.mode = mode;
        Effect::Apply(mode)
    }

    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    #[must_use]
    pub fn is_override_pending(&self) -> bool {
        self.override_pending
    }
}

/// Front of the external layout engine that never re-applies the current mode.
pub struct LayoutApplier {
    engine: Box<dyn LayoutEngine>,
    applied: Option<LayoutMode>,
}

impl LayoutApplier {
    #[must_use]
    pub fn new(engine: Box<dyn LayoutEngine>) -> Self {
        Self {
            engine,
            applied: None,
        }
    }

    /// Applies `mode` unless it is already in place. Returns true if applied.
    pub fn apply(&mut self, mode: LayoutMode) -> bool {
        if self.applied == Some(mode) {
            return false;
        }
        self.engine.apply_layout(&LayoutSpec::for_mode(mode));
        self.applied = Some(mode);
        true
    }
}
