// SPDX-License-Identifier: MPL-2.0
//! Playback transport controller.
//!
//! A reducer over engine events and user commands. It owns the time state and
//! derives everything the transport bar shows: the play/pause icon, the slider,
//! the remaining-time label and the live indicator. Engine side effects are
//! returned as [`EngineCommand`]s for the caller to execute.
//!
//! Seeks are applied optimistically: the slider jumps to the clamped target
//! right away and the next tick corrects it.

use crate::domain::video::{IconMode, PlaybackStatus, SeekStep, TimeState};
use crate::error::PlayerError;
use crate::video_player::time_format::format_remaining;
use tokio::time::Instant;

/// i18n key of the live indicator while on the live edge.
pub const LIVE_ON_AIR_KEY: &str = "live-on-air";

/// i18n key of the live indicator while behind the live edge.
pub const LIVE_OFF_AIR_KEY: &str = "live-off-air";

/// A command for the media engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineCommand {
    Play,
    Pause,
    /// Exact seek to the given position in seconds.
    Seek(f64),
}

/// Inputs of the transport controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The engine's playback rate changed.
    RateChanged(f32),
    /// The engine's item status changed.
    StatusChanged(PlaybackStatus),
    /// Periodic time notification with the engine duration at that moment.
    Tick {
        time_secs: f64,
        duration_secs: Option<f64>,
        /// When the tick was observed.
        at: Instant,
    },
    /// Playback reached the end-of-item boundary.
    BoundaryReached,
    /// Outcome of probing the asset before loading.
    AssetValidated(Result<(), PlayerError>),
    PlayPause,
    Rewind,
    Forward,
    /// Slider released at a position (no drag preview).
    SeekTo(f64),
    /// Slider is being dragged over a position.
    SeekPreview(f64),
    /// Slider drag finished.
    SeekCommit,
    JumpToLive,
}

/// Effects produced by the transport controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Commands to run on the engine, in order.
    Engine(Vec<EngineCommand>),
    /// The asset checked out; hand the item to the engine.
    LoadItem,
    /// Something went wrong; tell the user once.
    Failed(PlayerError),
}

/// Transport controller state.
#[derive(Debug, Clone)]
pub struct State {
    status: PlaybackStatus,
    rate: f32,
    time: TimeState,
    duration_known: bool,
    /// When the previous tick was observed; the live edge of an unbounded
    /// stream advances by the wall time since then.
    last_tick_at: Option<Instant>,
    validated: bool,
    /// Slider value while a drag is in progress.
    drag: Option<f64>,
    seek_step: SeekStep,
}

impl Default for State {
    fn default() -> Self {
        Self::new(SeekStep::default())
    }
}

impl State {
    #[must_use]
    pub fn new(seek_step: SeekStep) -> Self {
        Self {
            status: PlaybackStatus::Idle,
            rate: 0.0,
            time: TimeState::default(),
            duration_known: false,
            last_tick_at: None,
            validated: false,
            drag: None,
            seek_step,
        }
    }

    /// Handles a transport message.
    ///
    /// Note: Takes `Message` by value, mirroring the other sub-components.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::RateChanged(rate) => {
                self.rate = rate;
                Effect::None
            }
            Message::StatusChanged(status) => self.on_status(status),
            Message::Tick {
                time_secs,
                duration_secs,
                at,
            } => {
                self.on_tick(time_secs, duration_secs, at);
                Effect::None
            }
            Message::BoundaryReached => {
                if self.duration_known {
                    self.time.set_current(self.time.total_secs());
                }
                Effect::None
            }
            Message::AssetValidated(Ok(())) => {
                self.validated = true;
                Effect::LoadItem
            }
            Message::AssetValidated(Err(err)) => {
                log::warn!("asset rejected: {err}");
                Effect::Failed(err)
            }
            command => {
                if !self.is_playable() {
                    log::debug!("ignoring {command:?}: nothing playable");
                    return Effect::None;
                }
                self.on_command(command)
            }
        }
    }

    fn on_status(&mut self, status: PlaybackStatus) -> Effect {
        let was_failed = self.status.is_failed();
        self.status = self.status.advance(status);
        if self.status.is_failed() && !was_failed {
            log::warn!("engine reported a failed item");
            return Effect::Failed(PlayerError::EngineFault);
        }
        Effect::None
    }

    fn on_tick(&mut self, time_secs: f64, duration_secs: Option<f64>, at: Instant) {
        if !time_secs.is_finite() {
            return;
        }
        let previous_tick = self.last_tick_at.replace(at);
        match duration_secs.filter(|d| d.is_finite() && *d > 0.0) {
            Some(duration) => {
                self.duration_known = true;
                self.time.set_total(duration);
            }
            None if !self.duration_known => {
                // The live edge keeps moving at wall-clock pace, whatever the
                // playhead does.
                let elapsed = previous_tick
                    .map_or(0.0, |prev| at.saturating_duration_since(prev).as_secs_f64());
                let edge = self.time.total_secs() + elapsed;
                self.time.set_total(edge.max(time_secs));
            }
            None => {}
        }
        self.time.set_current(time_secs);
    }

    fn on_command(&mut self, command: Message) -> Effect {
        match command {
            Message::PlayPause => {
                if self.rate > 0.0 {
                    Effect::Engine(vec![EngineCommand::Pause])
                } else if self.is_at_end() {
                    self.time.set_current(0.0);
                    Effect::Engine(vec![EngineCommand::Seek(0.0), EngineCommand::Play])
                } else {
                    Effect::Engine(vec![EngineCommand::Play])
                }
            }
            Message::Rewind => self.seek(self.time.current_secs() - self.seek_step.value()),
            Message::Forward => self.seek(self.time.current_secs() + self.seek_step.value()),
            Message::SeekTo(value) => {
                self.drag = None;
                self.seek(value)
            }
            Message::SeekPreview(value) => {
                if value.is_finite() {
                    self.drag = Some(self.time.clamp_target(value));
                }
                Effect::None
            }
            Message::SeekCommit => match self.drag.take() {
                Some(value) => self.seek(value),
                None => Effect::None,
            },
            Message::JumpToLive => self.seek(self.time.total_secs()),
            _ => Effect::None,
        }
    }

    fn seek(&mut self, target_secs: f64) -> Effect {
        if !target_secs.is_finite() {
            return Effect::None;
        }
        let target = self.time.clamp_target(target_secs);
        self.time.set_current(target);
        Effect::Engine(vec![EngineCommand::Seek(target)])
    }

    fn is_at_end(&self) -> bool {
        self.duration_known && self.time.current_secs() >= self.time.total_secs()
    }

    /// Returns true once the item passed validation and the engine has not failed it.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.validated && !self.status.is_failed()
    }

    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        IconMode::from_rate(self.rate)
    }

    #[must_use]
    pub fn time(&self) -> TimeState {
        self.time
    }

    #[must_use]
    pub fn slider_value(&self) -> f64 {
        self.drag.unwrap_or(self.time.current_secs())
    }

    #[must_use]
    pub fn slider_max(&self) -> f64 {
        self.time.total_secs()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.time.is_live()
    }

    /// i18n key of the live indicator.
    #[must_use]
    pub fn live_label_key(&self) -> &'static str {
        if self.is_live() {
            LIVE_ON_AIR_KEY
        } else {
            LIVE_OFF_AIR_KEY
        }
    }

    /// `-MM:SS` behind the live edge, hidden while live.
    #[must_use]
    pub fn remaining_label(&self) -> Option<String> {
        if self.is_live() {
            None
        } else {
            Some(format_remaining(self.time.remaining_secs()))
        }
    }
}
