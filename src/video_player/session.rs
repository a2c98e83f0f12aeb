// SPDX-License-Identifier: MPL-2.0
//! Player session orchestration.
//!
//! One [`PlayerSession`] exists per player screen. It runs as a single Tokio
//! task that awaits every event source in one `select!` loop, so the
//! controllers are only ever touched from that task. The command channel is
//! polled first; a close request wins over events that arrived at the same
//! time.
//!
//! The task publishes a [`UiState`] snapshot after every event and sends
//! error notifications on a separate channel. Closing the session (or dropping
//! its [`SessionHandle`]) pauses the engine, cancels the hide timer, restores
//! the portrait layout and drops every engine subscription.

use crate::application::port::{AssetProbe, LayoutEngine, MediaEngine};
use crate::domain::ui::LayoutMode;
use crate::domain::video::{
    AssetKey, AssetProperties, HideDelay, IconMode, MediaItem, PlaybackStatus, SeekStep,
    TickInterval, TimeState,
};
use crate::error::PlayerError;
use crate::ui::notifications::Notification;
use crate::video_player::clock::TickStream;
use crate::video_player::facade::{self, PlaybackEngineFacade};
use crate::video_player::orientation::{DeviceOrientation, OrientationSource};
use crate::video_player::{layout, transport, visibility};
use futures_util::future::BoxFuture;
use futures_util::{Stream, StreamExt};
use std::future::{self as std_future, Future};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Tunables of a player session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub tick_interval: TickInterval,
    pub seek_step: SeekStep,
    pub hide_delay: HideDelay,
    /// Start playing as soon as the item is loaded.
    pub autoplay: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_interval: TickInterval::default(),
            seek_step: SeekStep::default(),
            hide_delay: HideDelay::default(),
            autoplay: true,
        }
    }
}

/// Everything the view needs to draw the player screen.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub title: String,
    pub description: String,
    pub status: PlaybackStatus,
    pub icon_mode: IconMode,
    pub time: TimeState,
    pub slider_value: f64,
    pub slider_max: f64,
    /// `-MM:SS` behind the live edge, `None` while live.
    pub remaining_label: Option<String>,
    pub is_live: bool,
    /// i18n key of the live indicator.
    pub live_label_key: &'static str,
    pub controls_visible: bool,
    pub layout_mode: LayoutMode,
    /// Set once the session has torn down.
    pub closed: bool,
}

/// User commands accepted by a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    PlayPause,
    Rewind,
    Forward,
    SeekTo(f64),
    SeekPreview(f64),
    SeekCommit,
    JumpToLive,
    /// Tap on the video surface.
    UserTapped,
    ControlButtonPressed,
    RequestFullScreen,
    RequestMinimize,
    Close,
}

/// Handle used by the view to drive a running session.
///
/// Dropping the handle closes the session.
#[derive(Debug)]
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<Command>,
    ui: watch::Receiver<UiState>,
    task: JoinHandle<()>,
}

impl SessionHandle {
    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            log::debug!("session already closed, dropping {command:?}");
        }
    }

    pub fn play_pause(&self) {
        self.send(Command::PlayPause);
    }

    pub fn rewind(&self) {
        self.send(Command::Rewind);
    }

    pub fn forward(&self) {
        self.send(Command::Forward);
    }

    pub fn seek_to(&self, secs: f64) {
        self.send(Command::SeekTo(secs));
    }

    pub fn seek_preview(&self, secs: f64) {
        self.send(Command::SeekPreview(secs));
    }

    pub fn seek_commit(&self) {
        self.send(Command::SeekCommit);
    }

    pub fn jump_to_live(&self) {
        self.send(Command::JumpToLive);
    }

    /// Tap on the video surface.
    pub fn user_tapped(&self) {
        self.send(Command::UserTapped);
    }

    pub fn control_button_pressed(&self) {
        self.send(Command::ControlButtonPressed);
    }

    pub fn request_full_screen(&self) {
        self.send(Command::RequestFullScreen);
    }

    pub fn request_minimize(&self) {
        self.send(Command::RequestMinimize);
    }

    pub fn close(&self) {
        self.send(Command::Close);
    }

    /// A receiver for UI state updates.
    #[must_use]
    pub fn ui_state(&self) -> watch::Receiver<UiState> {
        self.ui.clone()
    }

    /// The latest published UI state.
    #[must_use]
    pub fn snapshot(&self) -> UiState {
        self.ui.borrow().clone()
    }

    /// Waits for the session task to finish.
    pub async fn join(self) {
        let Self { commands, task, .. } = self;
        drop(commands);
        if let Err(err) = task.await {
            log::error!("player session task failed: {err}");
        }
    }
}

/// A player screen's worth of controllers, wired to its collaborators.
pub struct PlayerSession {
    item: MediaItem,
    config: SessionConfig,
    facade: PlaybackEngineFacade,
    probe: Arc<dyn AssetProbe>,
    applier: layout::LayoutApplier,
    orientation: Option<OrientationSource>,
    transport: transport::State,
    visibility: visibility::State,
    layout: layout::State,
    ui: watch::Sender<UiState>,
    notifications: mpsc::UnboundedSender<Notification>,
}

impl PlayerSession {
    /// Starts a session for `item` on the current Tokio runtime.
    ///
    /// Returns the handle and the stream of notifications for the user.
    pub fn spawn(
        item: MediaItem,
        config: SessionConfig,
        engine: Arc<dyn MediaEngine>,
        probe: Arc<dyn AssetProbe>,
        layout_engine: Box<dyn LayoutEngine>,
        orientation: Option<mpsc::UnboundedReceiver<DeviceOrientation>>,
    ) -> (SessionHandle, mpsc::UnboundedReceiver<Notification>) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (notification_tx, notification_rx) = mpsc::unbounded_channel();

        let transport = transport::State::new(config.seek_step);
        let visibility = visibility::State::new(config.hide_delay, Instant::now());
        let layout = layout::State::default();
        let initial = snapshot(&item, &transport, &visibility, &layout, false);
        let (ui_tx, ui_rx) = watch::channel(initial);

        let session = Self {
            facade: PlaybackEngineFacade::new(engine, config.tick_interval),
            item,
            config,
            probe,
            applier: layout::LayoutApplier::new(layout_engine),
            orientation: orientation.map(OrientationSource::new),
            transport,
            visibility,
            layout,
            ui: ui_tx,
            notifications: notification_tx,
        };
        let task = tokio::spawn(session.run(command_rx));

        (
            SessionHandle {
                commands: command_tx,
                ui: ui_rx,
                task,
            },
            notification_rx,
        )
    }

    async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>) {
        log::info!("player session started for {:?}", self.item.title());
        self.applier.apply(self.layout.mode());

        let mut probe = self.start_probe();
        let mut rates = self.facade.rate_changes();
        let mut statuses = self.facade.status_changes();
        let mut ticks: Option<TickStream> = None;
        let mut boundary: Option<TickStream> = None;
        let mut orientation = self.orientation.take();

        loop {
            let hide_at = self.visibility.hide_deadline();
            tokio::select! {
                biased;

                command = commands.recv() => match command {
                    Some(Command::Close) | None => break,
                    Some(command) => self.on_command(command),
                },
                properties = resolve_or_pending(&mut probe) => {
                    probe = None;
                    let result = properties.validate(&AssetKey::REQUIRED);
                    if self.on_transport(transport::Message::AssetValidated(result)) {
                        ticks = Some(self.facade.periodic_time());
                    }
                }
                Some(status) = statuses.next() => {
                    self.on_transport(transport::Message::StatusChanged(status));
                }
                Some(rate) = rates.next() => {
                    self.on_transport(transport::Message::RateChanged(rate));
                }
                Some(time_secs) = next_or_pending(&mut ticks) => {
                    let duration_secs = self.facade.duration();
                    self.on_transport(transport::Message::Tick {
                        time_secs,
                        duration_secs,
                        at: Instant::now(),
                    });
                    if boundary.is_none() {
                        boundary = duration_secs.map(|end| self.facade.boundary_time(vec![end]));
                    }
                }
                Some(_) = next_or_pending(&mut boundary) => {
                    self.on_transport(transport::Message::BoundaryReached);
                    self.on_visibility(visibility::Message::Show);
                }
                Some(is_landscape) = next_or_pending(&mut orientation) => {
                    self.on_layout(layout::Message::OrientationChanged { is_landscape });
                }
                () = sleep_until_or_pending(hide_at) => {
                    self.on_visibility(visibility::Message::TimerFired);
                }
            }
            self.publish(false);
        }

        drop(ticks);
        drop(boundary);
        self.teardown();
    }

    fn start_probe(&mut self) -> Option<BoxFuture<'static, AssetProperties>> {
        match facade::parse_source(&self.item) {
            Ok(url) => Some(self.probe.load_values(&url, &AssetKey::REQUIRED)),
            Err(err) => {
                self.notify(&err);
                None
            }
        }
    }

    fn on_command(&mut self, command: Command) {
        let message = match command {
            Command::PlayPause => transport::Message::PlayPause,
            Command::Rewind => transport::Message::Rewind,
            Command::Forward => transport::Message::Forward,
            Command::SeekTo(secs) => transport::Message::SeekTo(secs),
            Command::SeekPreview(secs) => transport::Message::SeekPreview(secs),
            Command::SeekCommit => transport::Message::SeekCommit,
            Command::JumpToLive => transport::Message::JumpToLive,
            Command::UserTapped => {
                self.on_visibility(visibility::Message::UserTapped);
                return;
            }
            Command::ControlButtonPressed => {
                self.on_visibility(visibility::Message::ControlButtonPressed);
                return;
            }
            Command::RequestFullScreen => {
                self.on_visibility(visibility::Message::ControlButtonPressed);
                self.on_layout(layout::Message::FullScreenTapped);
                return;
            }
            Command::RequestMinimize => {
                self.on_visibility(visibility::Message::ControlButtonPressed);
                self.on_layout(layout::Message::MinimizeTapped);
                return;
            }
            Command::Close => return,
        };
        self.on_visibility(visibility::Message::ControlButtonPressed);
        self.on_transport(message);
    }

    /// Runs a transport message. Returns true if it loaded the item.
    fn on_transport(&mut self, message: transport::Message) -> bool {
        match self.transport.handle(message) {
            transport::Effect::None => false,
            transport::Effect::Engine(commands) => {
                for command in commands {
                    match command {
                        transport::EngineCommand::Play => self.facade.play(),
                        transport::EngineCommand::Pause => self.facade.pause(),
                        transport::EngineCommand::Seek(secs) => self.facade.seek(secs),
                    }
                }
                false
            }
            transport::Effect::LoadItem => match self.facade.load(&self.item) {
                Ok(()) => {
                    if self.config.autoplay {
                        self.facade.play();
                    }
                    true
                }
                Err(err) => {
                    self.notify(&err);
                    false
                }
            },
            transport::Effect::Failed(err) => {
                self.notify(&err);
                false
            }
        }
    }

    fn on_visibility(&mut self, message: visibility::Message) {
        if let visibility::Effect::VisibilityChanged(visible) =
            self.visibility.handle(message, Instant::now())
        {
            log::debug!("controls visible: {visible}");
        }
    }

    fn on_layout(&mut self, message: layout::Message) {
        if let layout::Effect::Apply(mode) = self.layout.handle(message) {
            self.applier.apply(mode);
        }
    }

    fn notify(&self, err: &PlayerError) {
        if self
            .notifications
            .send(Notification::from_player_error(err))
            .is_err()
        {
            log::debug!("no one is listening for notifications: {err}");
        }
    }

    fn teardown(&mut self) {
        self.facade.pause();
        self.on_visibility(visibility::Message::Teardown);
        self.on_layout(layout::Message::Teardown);
        self.publish(true);
        log::info!("player session closed for {:?}", self.item.title());
    }

    fn publish(&self, closed: bool) {
        let next = snapshot(
            &self.item,
            &self.transport,
            &self.visibility,
            &self.layout,
            closed,
        );
        self.ui.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
    }
}

fn snapshot(
    item: &MediaItem,
    transport: &transport::State,
    visibility: &visibility::State,
    layout: &layout::State,
    closed: bool,
) -> UiState {
    UiState {
        title: item.title().to_string(),
        description: item.description().to_string(),
        status: transport.status(),
        icon_mode: transport.icon_mode(),
        time: transport.time(),
        slider_value: transport.slider_value(),
        slider_max: transport.slider_max(),
        remaining_label: transport.remaining_label(),
        is_live: transport.is_live(),
        live_label_key: transport.live_label_key(),
        controls_visible: visibility.is_visible(),
        layout_mode: layout.mode(),
        closed,
    }
}

async fn next_or_pending<S>(stream: &mut Option<S>) -> Option<S::Item>
where
    S: Stream + Unpin,
{
    match stream {
        Some(stream) => stream.next().await,
        None => std_future::pending().await,
    }
}

async fn resolve_or_pending<F>(future: &mut Option<F>) -> F::Output
where
    F: Future + Unpin,
{
    match future {
        Some(future) => future.await,
        None => std_future::pending().await,
    }
}

async fn sleep_until_or_pending(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std_future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{RecordingLayout, SimulatedEngine, SimulatedProbe};
    use std::time::Duration;

    fn start(item: MediaItem) -> (SessionHandle, mpsc::UnboundedReceiver<Notification>) {
        PlayerSession::spawn(
            item,
            SessionConfig::default(),
            Arc::new(SimulatedEngine::new(Some(120.0))),
            Arc::new(SimulatedProbe::playable()),
            Box::new(RecordingLayout::new()),
            None,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn initial_state_shows_controls_in_portrait() {
        let (handle, _notifications) =
            start(MediaItem::new("https://example.com/a.m3u8", "News", "Live"));
        let state = handle.snapshot();

        assert!(state.controls_visible);
        assert_eq!(state.layout_mode, LayoutMode::Portrait);
        assert_eq!(state.title, "News");
        assert!(!state.closed);
        handle.join().await;
    }

    #[tokio::test(start_paused = true)]
    async fn malformed_url_notifies_once() {
        let (handle, mut notifications) = start(MediaItem::new("::", "Broken", ""));

        let notification = notifications.recv().await.unwrap();
        assert_eq!(notification.message_key(), "error-invalid-source");

        handle.close();
        handle.join().await;
        assert!(notifications.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn close_publishes_closed_state() {
        let (handle, _notifications) =
            start(MediaItem::new("https://example.com/a.m3u8", "News", ""));
        let mut ui = handle.ui_state();

        tokio::time::sleep(Duration::from_millis(300)).await;
        handle.close();
        handle.join().await;

        assert!(ui.borrow_and_update().closed);
    }
}
