// SPDX-License-Identifier: MPL-2.0
//! Asset probing port definition.

use crate::domain::video::{AssetKey, AssetProperties};
use futures_util::future::BoxFuture;
use url::Url;

/// Port for resolving asset properties before an item is loaded.
///
/// The returned future resolves once every requested key has a final status.
/// Probing is asynchronous; a session keeps running while it is pending.
pub trait AssetProbe: Send + Sync {
    /// Loads the values of `keys` for the asset at `url`.
    fn load_values(&self, url: &Url, keys: &[AssetKey]) -> BoxFuture<'static, AssetProperties>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::video::KeyStatus;
    use futures_util::FutureExt;

    fn _assert_object_safe(_: &dyn AssetProbe) {}

    struct FailingKeyProbe(AssetKey);

    impl AssetProbe for FailingKeyProbe {
        fn load_values(
            &self,
            _url: &Url,
            keys: &[AssetKey],
        ) -> BoxFuture<'static, AssetProperties> {
            let failing = self.0;
            let key_statuses = keys
                .iter()
                .map(|key| {
                    let status = if *key == failing {
                        KeyStatus::Failed
                    } else {
                        KeyStatus::Loaded
                    };
                    (*key, status)
                })
                .collect();
            async move {
                AssetProperties {
                    key_statuses,
                    is_playable: true,
                    has_protected_content: false,
                }
            }
            .boxed()
        }
    }

    #[tokio::test]
    async fn probe_reports_per_key_status() {
        let probe = FailingKeyProbe(AssetKey::HasProtectedContent);
        let url = Url::parse("https://example.com/live.m3u8").unwrap();

        let props = probe.load_values(&url, &AssetKey::REQUIRED).await;

        assert_eq!(props.status_of(AssetKey::Playable), KeyStatus::Loaded);
        assert_eq!(
            props.status_of(AssetKey::HasProtectedContent),
            KeyStatus::Failed
        );
        assert!(props.validate(&AssetKey::REQUIRED).is_err());
    }
}
