// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::video_player::{Command, DeviceOrientation};

/// Top-level messages consumed by `App::update`, parsed from one line of
/// console input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Forwarded to the running player session.
    Player(Command),
    /// Simulated device rotation.
    Rotate(DeviceOrientation),
    /// Dismiss the notification on screen.
    AcknowledgeNotification,
    /// Open the catalog entry at this index, closing the current session.
    Open(usize),
    /// List the catalog.
    Catalog,
    Help,
    Quit,
}

impl Message {
    /// Parses a console command. Returns `None` for unknown input.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let head = words.next()?;
        let arg = words.next();

        let message = match (head, arg) {
            ("p" | "play" | "pause", None) => Message::Player(Command::PlayPause),
            ("r" | "rewind", None) => Message::Player(Command::Rewind),
            ("f" | "forward", None) => Message::Player(Command::Forward),
            ("s" | "seek", Some(secs)) => Message::Player(Command::SeekTo(secs.parse().ok()?)),
            ("drag", Some(secs)) => Message::Player(Command::SeekPreview(secs.parse().ok()?)),
            ("release", None) => Message::Player(Command::SeekCommit),
            ("l" | "live", None) => Message::Player(Command::JumpToLive),
            ("t" | "tap", None) => Message::Player(Command::UserTapped),
            ("full", None) => Message::Player(Command::RequestFullScreen),
            ("min", None) => Message::Player(Command::RequestMinimize),
            ("close", None) => Message::Player(Command::Close),
            ("rot", Some("l")) => Message::Rotate(DeviceOrientation::LandscapeLeft),
            ("rot", Some("p")) => Message::Rotate(DeviceOrientation::Portrait),
            ("rot", Some("flat")) => Message::Rotate(DeviceOrientation::FaceUp),
            ("ok", None) => Message::AcknowledgeNotification,
            ("open", Some(index)) => Message::Open(index.parse().ok()?),
            ("catalog", None) => Message::Catalog,
            ("h" | "help" | "?", None) => Message::Help,
            ("q" | "quit", None) => Message::Quit,
            _ => return None,
        };
        if words.next().is_some() {
            return None;
        }
        Some(message)
    }
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ko`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ONAIR_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Print the catalog and exit.
    pub list: bool,
    /// Catalog entry to open on startup.
    pub select: Option<usize>,
    /// Custom stream to open instead of a catalog entry.
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Length of the simulated stream in seconds; live if absent.
    pub duration_secs: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_transport_commands() {
        assert_eq!(
            Message::parse("p"),
            Some(Message::Player(Command::PlayPause))
        );
        assert_eq!(
            Message::parse("  seek 42.5 "),
            Some(Message::Player(Command::SeekTo(42.5)))
        );
        assert_eq!(
            Message::parse("l"),
            Some(Message::Player(Command::JumpToLive))
        );
    }

    #[test]
    fn parses_rotation() {
        assert_eq!(
            Message::parse("rot l"),
            Some(Message::Rotate(DeviceOrientation::LandscapeLeft))
        );
        assert_eq!(
            Message::parse("rot flat"),
            Some(Message::Rotate(DeviceOrientation::FaceUp))
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(Message::parse(""), None);
        assert_eq!(Message::parse("seek"), None);
        assert_eq!(Message::parse("seek soon"), None);
        assert_eq!(Message::parse("p now"), None);
        assert_eq!(Message::parse("dance"), None);
    }

    #[test]
    fn parses_catalog_selection() {
        assert_eq!(Message::parse("open 2"), Some(Message::Open(2)));
        assert_eq!(Message::parse("open -1"), None);
    }
}
