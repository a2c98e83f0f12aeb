// SPDX-License-Identifier: MPL-2.0
//! Localized text for the player screen.
//!
//! The session publishes i18n keys and raw values; this module turns a
//! [`UiState`] into the strings a view draws.

use crate::domain::ui::{LayoutSpec, ScreenToggle};
use crate::domain::video::{IconMode, SeekStep};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Notification, ACKNOWLEDGE_KEY};
use crate::video_player::{format_time, UiState};

/// Strings for one frame of the player screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerLabels {
    pub title: String,
    pub description: String,
    pub play_pause: String,
    pub rewind: String,
    pub forward: String,
    pub elapsed: String,
    /// `None` while at the live edge.
    pub remaining: Option<String>,
    pub live: String,
    pub screen_toggle: String,
    pub controls_visible: bool,
}

impl PlayerLabels {
    #[must_use]
    pub fn from_state(state: &UiState, seek_step: SeekStep, i18n: &I18n) -> Self {
        let play_pause = match state.icon_mode {
            IconMode::Play => i18n.tr("control-play"),
            IconMode::Pause => i18n.tr("control-pause"),
        };
        let seconds = [("seconds".to_string(), format!("{}", seek_step.value()))];
        let screen_toggle = match LayoutSpec::for_mode(state.layout_mode).screen_toggle {
            ScreenToggle::FullScreen => i18n.tr("control-full-screen"),
            ScreenToggle::Minimize => i18n.tr("control-minimize"),
        };

        Self {
            title: state.title.clone(),
            description: state.description.clone(),
            play_pause,
            rewind: i18n.tr_with_args("control-rewind", &seconds),
            forward: i18n.tr_with_args("control-forward", &seconds),
            elapsed: format_time(state.time.current_secs()),
            remaining: state.remaining_label.clone(),
            live: i18n.tr(state.live_label_key),
            screen_toggle,
            controls_visible: state.controls_visible,
        }
    }

    /// Single-line status for text front ends.
    #[must_use]
    pub fn status_line(&self) -> String {
        let mut line = format!("{} | {}", self.live, self.elapsed);
        if let Some(remaining) = &self.remaining {
            line.push(' ');
            line.push_str(remaining);
        }
        if self.controls_visible {
            line.push_str(&format!(
                " | [{}] [{}] [{}] [{}]",
                self.rewind, self.play_pause, self.forward, self.screen_toggle
            ));
        }
        line
    }
}

/// Localized title, message and button text of a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationText {
    pub title: String,
    pub message: String,
    pub button: String,
}

impl NotificationText {
    #[must_use]
    pub fn from_notification(notification: &Notification, i18n: &I18n) -> Self {
        Self {
            title: i18n.tr(notification.title_key()),
            message: i18n.tr_with_args(notification.message_key(), notification.message_args()),
            button: i18n.tr(ACKNOWLEDGE_KEY),
        }
    }
}
