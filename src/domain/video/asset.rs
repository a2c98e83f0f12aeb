// SPDX-License-Identifier: MPL-2.0
//! Asset probe results and the validation applied before loading.

use crate::error::{PlayerError, ValidationFailure};

/// Asset properties that must resolve before an item is handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKey {
    Playable,
    HasProtectedContent,
}

impl AssetKey {
    /// Keys that are probed for every item, in probing order.
    pub const REQUIRED: [AssetKey; 2] = [AssetKey::Playable, AssetKey::HasProtectedContent];

    /// Property name as reported by the probe.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AssetKey::Playable => "playable",
            AssetKey::HasProtectedContent => "hasProtectedContent",
        }
    }
}

/// Load status of a single probed key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyStatus {
    #[default]
    Unknown,
    Loaded,
    Failed,
    Cancelled,
}

/// What the asset probe found out about a source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetProperties {
    /// Status per probed key.
    pub key_statuses: Vec<(AssetKey, KeyStatus)>,
    /// Whether the engine can play the asset.
    pub is_playable: bool,
    /// Whether the asset is DRM protected.
    pub has_protected_content: bool,
}

impl AssetProperties {
    /// Properties of a healthy, unprotected asset with every key loaded.
    #[must_use]
    pub fn playable() -> Self {
        Self {
            key_statuses: AssetKey::REQUIRED
                .iter()
                .map(|key| (*key, KeyStatus::Loaded))
                .collect(),
            is_playable: true,
            has_protected_content: false,
        }
    }

    /// Returns the status recorded for `key`.
    #[must_use]
    pub fn status_of(&self, key: AssetKey) -> KeyStatus {
        self.key_statuses
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, status)| *status)
            .unwrap_or_default()
    }

    /// Checks that `keys` resolved and that the asset may be played.
    ///
    /// Keys are checked in order and the first failed one is reported.
    pub fn validate(&self, keys: &[AssetKey]) -> Result<(), PlayerError> {
        if let Some(key) = keys
            .iter()
            .copied()
            .find(|key| self.status_of(*key) == KeyStatus::Failed)
        {
            return Err(PlayerError::AssetValidationFailed(
                ValidationFailure::KeyFailed(key),
            ));
        }

        if !self.is_playable || self.has_protected_content {
            return Err(PlayerError::AssetValidationFailed(
                ValidationFailure::Unplayable,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_asset_validates() {
        assert!(AssetProperties::playable()
            .validate(&AssetKey::REQUIRED)
            .is_ok());
    }

    #[test]
    fn first_failed_key_is_reported() {
        let props = AssetProperties {
            key_statuses: vec![
                (AssetKey::Playable, KeyStatus::Failed),
                (AssetKey::HasProtectedContent, KeyStatus::Failed),
            ],
            ..AssetProperties::playable()
        };
        assert_eq!(
            props.validate(&AssetKey::REQUIRED),
            Err(PlayerError::AssetValidationFailed(
                ValidationFailure::KeyFailed(AssetKey::Playable)
            ))
        );
    }

    #[test]
    fn protected_content_is_rejected() {
        let props = AssetProperties {
            has_protected_content: true,
            ..AssetProperties::playable()
        };
        assert_eq!(
            props.validate(&AssetKey::REQUIRED),
            Err(PlayerError::AssetValidationFailed(
                ValidationFailure::Unplayable
            ))
        );
    }

    #[test]
    fn unplayable_asset_is_rejected() {
        let props = AssetProperties {
            is_playable: false,
            ..AssetProperties::playable()
        };
        assert!(props.validate(&AssetKey::REQUIRED).is_err());
    }

    #[test]
    fn missing_key_counts_as_unknown_not_failed() {
        let props = AssetProperties {
            key_statuses: Vec::new(),
            ..AssetProperties::playable()
        };
        assert_eq!(props.status_of(AssetKey::Playable), KeyStatus::Unknown);
        assert!(props.validate(&AssetKey::REQUIRED).is_ok());
    }
}
