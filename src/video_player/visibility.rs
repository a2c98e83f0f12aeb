// SPDX-License-Identifier: MPL-2.0
//! Control overlay visibility sub-component.
//!
//! Showing the controls (initially, on a tap, or on request) always starts a
//! fresh hide timer. When it expires the controls hide unconditionally;
//! pressing a control button does not extend it.

use crate::domain::video::HideDelay;
use std::time::Duration;
use tokio::time::Instant;

/// Restartable, cancellable one-shot deadline.
#[derive(Debug, Clone)]
pub struct InactivityTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl InactivityTimer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// (Re)arms the timer relative to `now`.
    pub fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// When the timer fires, if armed.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }
}

/// Overlay visibility state.
#[derive(Debug, Clone)]
pub struct State {
    visible: bool,
    timer: InactivityTimer,
    torn_down: bool,
}

/// Messages for the visibility sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The user tapped the video surface.
    UserTapped,
    /// The user pressed one of the overlay buttons.
    ControlButtonPressed,
    /// Something asked for the controls to be shown.
    Show,
    /// The hide timer's deadline passed.
    TimerFired,
    /// The screen is going away.
    Teardown,
}

/// Effects produced by visibility changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    VisibilityChanged(bool),
}

impl State {
    /// Starts shown, with the hide timer running from `now`.
    #[must_use]
    pub fn new(delay: HideDelay, now: Instant) -> Self {
        let mut timer = InactivityTimer::new(delay.as_duration());
        timer.start(now);
        Self {
            visible: true,
            timer,
            torn_down: false,
        }
    }

    /// Handles a visibility message observed at `now`.
    pub fn handle(&mut self, msg: Message, now: Instant) -> Effect {
        if self.torn_down {
            return Effect::None;
        }
        match msg {
            Message::UserTapped | Message::Show => {
                self.timer.start(now);
                self.set_visible(true)
            }
            Message::ControlButtonPressed => Effect::None,
            Message::TimerFired => {
                // A restart may have moved the deadline since the fire was scheduled.
                if !self.timer.is_expired(now) {
                    return Effect::None;
                }
                self.timer.cancel();
                self.set_visible(false)
            }
            Message::Teardown => {
                self.torn_down = true;
                self.timer.cancel();
                Effect::None
            }
        }
    }

    fn set_visible(&mut self, visible: bool) -> Effect {
        if self.visible == visible {
            return Effect::None;
        }
        self.visible = visible;
        log::debug!("controls {}", if visible { "shown" } else { "hidden" });
        Effect::VisibilityChanged(visible)
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Deadline of the pending hide, if any.
    #[must_use]
    pub fn hide_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }
}
