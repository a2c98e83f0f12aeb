// SPDX-License-Identifier: MPL-2.0
use crate::domain::video::AssetKey;
use std::fmt;

/// Crate-level error for configuration and I/O plumbing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Player Error: {0}")]
    Player(#[from] PlayerError),
}

/// Why an asset was rejected before loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    /// A required asset key could not be resolved.
    KeyFailed(AssetKey),
    /// The asset is not playable or carries protected content.
    Unplayable,
}

/// Errors recovered at the transport controller boundary.
///
/// None of these are fatal: each one ends up as a single user-visible
/// notification and playback stays unloaded until the user picks a source again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    /// The source URL could not be parsed; the previous item is retained.
    #[error("invalid source URI: {0}")]
    InvalidSourceUri(String),

    /// Asset probing failed or reported unplayable/protected content.
    #[error("{0}")]
    AssetValidationFailed(ValidationFailure),

    /// The engine reported an unexpected failure status.
    #[error("the media engine reported a failure")]
    EngineFault,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::KeyFailed(key) => {
                write!(f, "The media failed to load the key \"{}\"", key.as_str())
            }
            ValidationFailure::Unplayable => write!(
                f,
                "The media isn't playable or it contains protected content."
            ),
        }
    }
}

impl PlayerError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PlayerError::InvalidSourceUri(_) => "error-invalid-source",
            PlayerError::AssetValidationFailed(ValidationFailure::KeyFailed(_)) => {
                "error-asset-key-failed"
            }
            // Engine faults read exactly like an unplayable asset.
            PlayerError::AssetValidationFailed(ValidationFailure::Unplayable)
            | PlayerError::EngineFault => "error-asset-unplayable",
        }
    }

    /// Interpolation arguments for the localized message.
    #[must_use]
    pub fn i18n_args(&self) -> Vec<(String, String)> {
        match self {
            PlayerError::InvalidSourceUri(url) => vec![("url".to_string(), url.clone())],
            PlayerError::AssetValidationFailed(ValidationFailure::KeyFailed(key)) => {
                vec![("key".to_string(), key.as_str().to_string())]
            }
            _ => Vec::new(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn player_error_converts_into_crate_error() {
        let err: Error = PlayerError::EngineFault.into();
        assert!(matches!(err, Error::Player(PlayerError::EngineFault)));
    }

    #[test]
    fn key_failure_message_names_the_key() {
        let err = PlayerError::AssetValidationFailed(ValidationFailure::KeyFailed(
            AssetKey::HasProtectedContent,
        ));
        assert_eq!(
            err.to_string(),
            "The media failed to load the key \"hasProtectedContent\""
        );
        assert_eq!(
            err.i18n_args(),
            vec![("key".to_string(), "hasProtectedContent".to_string())]
        );
    }

    #[test]
    fn player_error_i18n_keys() {
        assert_eq!(
            PlayerError::InvalidSourceUri("x".into()).i18n_key(),
            "error-invalid-source"
        );
        assert_eq!(
            PlayerError::AssetValidationFailed(ValidationFailure::Unplayable).i18n_key(),
            "error-asset-unplayable"
        );
    }

    #[test]
    fn engine_fault_reads_like_unplayable_asset() {
        assert_eq!(
            PlayerError::EngineFault.i18n_key(),
            PlayerError::AssetValidationFailed(ValidationFailure::Unplayable).i18n_key()
        );
    }
}
