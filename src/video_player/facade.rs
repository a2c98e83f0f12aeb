// SPDX-License-Identifier: MPL-2.0
//! The narrow view of the media engine the player core works with.
//!
//! Commands go straight to the engine. Engine notifications are exposed as
//! owned streams; dropping a stream is the only way to unsubscribe.

use crate::application::port::MediaEngine;
use crate::domain::video::{MediaItem, PlaybackStatus, TickInterval};
use crate::error::PlayerError;
use crate::video_player::clock::TickStream;
use futures_util::stream::{self, BoxStream, StreamExt};
use std::sync::Arc;
use tokio::sync::broadcast;
use url::Url;

/// Parses the source of `item`.
///
/// # Errors
///
/// Returns [`PlayerError::InvalidSourceUri`] if the URL does not parse.
pub fn parse_source(item: &MediaItem) -> Result<Url, PlayerError> {
    Url::parse(item.url()).map_err(|err| {
        log::warn!("rejecting source {:?}: {}", item.url(), err);
        PlayerError::InvalidSourceUri(item.url().to_string())
    })
}

/// Facade over one engine instance.
pub struct PlaybackEngineFacade {
    engine: Arc<dyn MediaEngine>,
    tick_interval: TickInterval,
    current: Option<Url>,
}

impl PlaybackEngineFacade {
    #[must_use]
    pub fn new(engine: Arc<dyn MediaEngine>, tick_interval: TickInterval) -> Self {
        Self {
            engine,
            tick_interval,
            current: None,
        }
    }

    /// Replaces the engine's current item with `item`.
    ///
    /// A malformed URL leaves the engine and the previous item untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::InvalidSourceUri`] if the URL does not parse.
    pub fn load(&mut self, item: &MediaItem) -> Result<(), PlayerError> {
        let url = parse_source(item)?;
        log::debug!("loading {}", url);
        self.engine.replace_current_item(&url);
        self.current = Some(url);
        Ok(())
    }

    /// Source of the item last loaded.
    #[must_use]
    pub fn current_source(&self) -> Option<&Url> {
        self.current.as_ref()
    }

    pub fn play(&self) {
        self.engine.play();
    }

    pub fn pause(&self) {
        self.engine.pause();
    }

    /// Exact seek; callers clamp the target.
    pub fn seek(&self, to_secs: f64) {
        self.engine.seek(to_secs, 0.0, 0.0);
    }

    #[must_use]
    pub fn rate(&self) -> f32 {
        self.engine.rate()
    }

    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        self.engine.status()
    }

    #[must_use]
    pub fn current_time(&self) -> f64 {
        self.engine.current_time()
    }

    /// Duration of the current item; `None` while indefinite.
    #[must_use]
    pub fn duration(&self) -> Option<f64> {
        self.engine.duration().filter(|d| d.is_finite() && *d > 0.0)
    }

    /// Future playback rate changes.
    pub fn rate_changes(&self) -> BoxStream<'static, f32> {
        broadcast_stream(self.engine.subscribe_rate(), "rate")
    }

    /// Future item status changes.
    pub fn status_changes(&self) -> BoxStream<'static, PlaybackStatus> {
        broadcast_stream(self.engine.subscribe_status(), "status")
    }

    /// Periodic playback time at the configured cadence.
    #[must_use]
    pub fn periodic_time(&self) -> TickStream {
        TickStream::periodic(Arc::clone(&self.engine), self.tick_interval.as_duration())
    }

    /// Fires when playback crosses one of `times`.
    #[must_use]
    pub fn boundary_time(&self, times: Vec<f64>) -> TickStream {
        TickStream::boundary(Arc::clone(&self.engine), times)
    }
}

/// Turns a broadcast receiver into a stream that skips over lag.
///
/// The stream is fused: once the sender is gone it keeps yielding `None`.
fn broadcast_stream<T>(rx: broadcast::Receiver<T>, name: &'static str) -> BoxStream<'static, T>
where
    T: Clone + Send + 'static,
{
    stream::unfold(rx, move |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(value) => return Some((value, rx)),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    log::warn!("{name} stream lagged, skipped {skipped} events");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    })
    .fuse()
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{EngineCall, SimulatedEngine};

    fn facade_with(engine: &Arc<SimulatedEngine>) -> PlaybackEngineFacade {
        let engine: Arc<dyn MediaEngine> = engine.clone();
        PlaybackEngineFacade::new(engine, TickInterval::default())
    }

    #[tokio::test]
    async fn malformed_url_keeps_previous_item() {
        let engine = Arc::new(SimulatedEngine::new(Some(30.0)));
        let mut facade = facade_with(&engine);

        facade
            .load(&MediaItem::new("https://example.com/a.m3u8", "A", ""))
            .unwrap();
        let err = facade
            .load(&MediaItem::new("not a url", "B", ""))
            .unwrap_err();

        assert_eq!(err, PlayerError::InvalidSourceUri("not a url".into()));
        assert_eq!(
            facade.current_source().map(Url::as_str),
            Some("https://example.com/a.m3u8")
        );
        assert_eq!(
            engine.calls(),
            vec![EngineCall::Replace("https://example.com/a.m3u8".into())]
        );
    }

    #[tokio::test]
    async fn seek_is_exact() {
        let engine = Arc::new(SimulatedEngine::new(Some(30.0)));
        let facade = facade_with(&engine);
        facade.seek(12.5);
        assert_eq!(engine.calls(), vec![EngineCall::Seek(12.5)]);
    }

    #[tokio::test]
    async fn rate_stream_is_cold_join() {
        let engine = Arc::new(SimulatedEngine::new(Some(30.0)));
        let mut facade = facade_with(&engine);
        facade
            .load(&MediaItem::new("https://example.com/a.m3u8", "A", ""))
            .unwrap();

        facade.play();
        let mut rates = facade.rate_changes();
        facade.pause();

        assert_eq!(rates.next().await, Some(0.0));
    }

    #[tokio::test]
    async fn closed_engine_channel_keeps_ending() {
        let (tx, rx) = broadcast::channel::<f32>(1);
        drop(tx);
        let mut rates = broadcast_stream(rx, "rate");

        assert_eq!(rates.next().await, None);
        assert_eq!(rates.next().await, None);
    }

    #[tokio::test]
    async fn duplicate_play_is_harmless() {
        let engine = Arc::new(SimulatedEngine::new(Some(30.0)));
        let mut facade = facade_with(&engine);
        facade
            .load(&MediaItem::new("https://example.com/a.m3u8", "A", ""))
            .unwrap();
        let mut rates = facade.rate_changes();

        facade.play();
        facade.play();

        assert_eq!(rates.next().await, Some(1.0));
        assert_eq!(rates.next().await, Some(1.0));
        assert_eq!(facade.rate(), 1.0);
    }
}
