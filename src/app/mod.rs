// SPDX-License-Identifier: MPL-2.0
//! Application root: wires the catalog, localization and settings to one
//! player session at a time, driven from the console.
//!
//! Each line of stdin is parsed into a [`Message`] and handled by
//! `App::update`. Session UI updates and notifications are rendered as they
//! arrive.

pub mod config;
mod message;
pub mod paths;

pub use message::{Flags, Message};

use crate::domain::video::{catalog, MediaItem, SeekStep};
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{RecordingLayout, SimulatedEngine, SimulatedProbe};
use crate::ui::labels::{NotificationText, PlayerLabels};
use crate::ui::notifications::{Notification, NotificationCenter, NotificationMessage};
use crate::video_player::{
    Command, DeviceOrientation, PlayerSession, SessionConfig, SessionHandle, UiState,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, watch};

/// How often auto-dismissing notifications are checked.
const NOTIFICATION_TICK: Duration = Duration::from_secs(1);

/// A running session and the channels the application holds on to.
struct ActiveSession {
    handle: SessionHandle,
    ui: watch::Receiver<UiState>,
    notifications: mpsc::UnboundedReceiver<Notification>,
    orientation: mpsc::UnboundedSender<DeviceOrientation>,
}

/// Root application state.
pub struct App {
    i18n: I18n,
    session_config: SessionConfig,
    duration_secs: Option<f64>,
    notifications: NotificationCenter,
    session: Option<ActiveSession>,
}

impl App {
    fn new(flags: &Flags) -> Self {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut notifications = NotificationCenter::new();
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        Self {
            i18n,
            session_config: config.session_config(),
            duration_secs: flags.duration_secs,
            notifications,
            session: None,
        }
    }

    fn seek_step(&self) -> SeekStep {
        self.session_config.seek_step
    }

    /// Opens the catalog entry at `index`, replacing any running session.
    async fn open(&mut self, index: usize) {
        let Some(item) = catalog::select(index) else {
            log::warn!("no catalog entry at index {index}");
            return;
        };
        self.close_session().await;
        self.start(item);
    }

    fn print_catalog(&self) {
        for (index, item) in catalog::samples().iter().enumerate() {
            println!(
                "{}",
                self.i18n.tr_with_args(
                    "console-catalog-entry",
                    &[
                        ("index".to_string(), index.to_string()),
                        ("title".to_string(), item.title().to_string()),
                    ],
                )
            );
        }
    }

    fn start(&mut self, item: MediaItem) {
        let (orientation_tx, orientation_rx) = mpsc::unbounded_channel();
        let (handle, notifications) = PlayerSession::spawn(
            item,
            self.session_config,
            Arc::new(SimulatedEngine::new(self.duration_secs)),
            Arc::new(SimulatedProbe::playable()),
            Box::new(RecordingLayout::new()),
            Some(orientation_rx),
        );
        let ui = handle.ui_state();
        self.session = Some(ActiveSession {
            handle,
            ui,
            notifications,
            orientation: orientation_tx,
        });
    }

    async fn close_session(&mut self) {
        if let Some(session) = self.session.take() {
            session.handle.close();
            session.handle.join().await;
        }
    }

    /// Handles one message. Returns false once the application should exit.
    async fn update(&mut self, message: Message) -> bool {
        match message {
            Message::Player(Command::Close) => self.close_session().await,
            Message::Player(command) => match &self.session {
                Some(session) => forward(&session.handle, command),
                None => log::debug!("no session for {command:?}"),
            },
            Message::Rotate(orientation) => {
                if let Some(session) = &self.session {
                    if session.orientation.send(orientation).is_err() {
                        log::debug!("session no longer listens for rotation");
                    }
                }
            }
            Message::AcknowledgeNotification => {
                if let Some(id) = self.notifications.presented().map(Notification::id) {
                    self.notifications
                        .handle_message(&NotificationMessage::Acknowledge(id));
                    self.render_notification();
                }
            }
            Message::Open(index) => self.open(index).await,
            Message::Catalog => self.print_catalog(),
            Message::Help => println!("{}", self.i18n.tr("console-help")),
            Message::Quit => return false,
        }
        true
    }

    fn render_state(&self, state: &UiState) {
        let labels = PlayerLabels::from_state(state, self.seek_step(), &self.i18n);
        println!("{}", labels.status_line());
    }

    fn render_notification(&self) {
        if let Some(notification) = self.notifications.presented() {
            let text = NotificationText::from_notification(notification, &self.i18n);
            println!("[{}] {} ({})", text.title, text.message, text.button);
        }
    }

    fn push_notification(&mut self, notification: Notification) {
        let was_empty = self.notifications.presented().is_none();
        self.notifications.push(notification);
        if was_empty {
            self.render_notification();
        }
    }
}

fn forward(handle: &SessionHandle, command: Command) {
    match command {
        Command::PlayPause => handle.play_pause(),
        Command::Rewind => handle.rewind(),
        Command::Forward => handle.forward(),
        Command::SeekTo(secs) => handle.seek_to(secs),
        Command::SeekPreview(secs) => handle.seek_preview(secs),
        Command::SeekCommit => handle.seek_commit(),
        Command::JumpToLive => handle.jump_to_live(),
        Command::UserTapped => handle.user_tapped(),
        Command::ControlButtonPressed => handle.control_button_pressed(),
        Command::RequestFullScreen => handle.request_full_screen(),
        Command::RequestMinimize => handle.request_minimize(),
        Command::Close => handle.close(),
    }
}

/// Something a running session produced.
enum SessionEvent {
    Ui(UiState),
    Notification(Notification),
    /// The session task is gone.
    Ended,
}

async fn next_session_event(session: &mut Option<ActiveSession>) -> SessionEvent {
    let Some(session) = session else {
        return std::future::pending().await;
    };
    tokio::select! {
        changed = session.ui.changed() => match changed {
            Ok(()) => SessionEvent::Ui(session.ui.borrow_and_update().clone()),
            Err(_) => SessionEvent::Ended,
        },
        notification = session.notifications.recv() => match notification {
            Some(notification) => SessionEvent::Notification(notification),
            None => SessionEvent::Ended,
        },
    }
}

/// Entry point used by `main.rs`: runs the console front end until `quit`
/// or end of input.
pub async fn run(flags: Flags) -> Result<()> {
    paths::init_cli_overrides(flags.config_dir.clone());

    let mut app = App::new(&flags);
    if flags.list {
        app.print_catalog();
        return Ok(());
    }

    app.render_notification();
    println!("{}", app.i18n.tr("console-help"));
    match flags.url {
        Some(url) => app.start(MediaItem::new(
            url,
            flags.title.unwrap_or_default(),
            flags.description.unwrap_or_default(),
        )),
        None => app.open(flags.select.unwrap_or(0)).await,
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut tick = tokio::time::interval(NOTIFICATION_TICK);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Message::parse(&line) {
                    Some(message) => {
                        if !app.update(message).await {
                            break;
                        }
                    }
                    None => println!(
                        "{}",
                        app.i18n.tr_with_args(
                            "console-unknown-command",
                            &[("command".to_string(), line.trim().to_string())],
                        )
                    ),
                }
            }
            event = next_session_event(&mut app.session) => match event {
                SessionEvent::Ui(state) => app.render_state(&state),
                SessionEvent::Notification(notification) => app.push_notification(notification),
                SessionEvent::Ended => app.close_session().await,
            },
            _ = tick.tick() => {
                let before = app.notifications.presented().map(Notification::id);
                app.notifications.handle_message(&NotificationMessage::Tick);
                if app.notifications.presented().map(Notification::id) != before {
                    app.render_notification();
                }
            }
        }
    }

    app.close_session().await;
    Ok(())
}
