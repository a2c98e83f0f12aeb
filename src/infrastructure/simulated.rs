// SPDX-License-Identifier: MPL-2.0
//! In-process stand-ins for the platform media stack.
//!
//! [`SimulatedEngine`] plays a virtual timeline on the Tokio clock, so it
//! behaves deterministically under `tokio::time::pause`. It backs the demo
//! binary and the integration tests.

use crate::application::port::{AssetProbe, LayoutEngine, MediaEngine, ObserverToken};
use crate::domain::ui::{LayoutMode, LayoutSpec};
use crate::domain::video::{AssetKey, AssetProperties, KeyStatus, PlaybackStatus};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use url::Url;

/// Delay between replacing the item and the engine deciding its status.
const READY_LATENCY: Duration = Duration::from_millis(100);

/// How often boundary observers sample the timeline.
const BOUNDARY_POLL: Duration = Duration::from_millis(50);

const EVENT_CAPACITY: usize = 16;

/// A call received by the simulated engine, recorded for inspection.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Replace(String),
    Play,
    Pause,
    Seek(f64),
}

struct Timeline {
    item: Option<Url>,
    status: PlaybackStatus,
    rate: f32,
    anchor_secs: f64,
    anchor_at: Instant,
    /// Bumped on every play/pause/seek/replace; stale end-of-item timers compare against it.
    generation: u64,
    /// Bumped on every replace; a pending readiness report compares against it.
    item_generation: u64,
    next_observer: u64,
    /// `None` when registered without a runtime.
    observers: HashMap<u64, Option<JoinHandle<()>>>,
    periodic_sinks: HashMap<u64, mpsc::UnboundedSender<f64>>,
    calls: Vec<EngineCall>,
}

struct Shared {
    timeline: Mutex<Timeline>,
    item_duration: Option<f64>,
    fail_on_load: bool,
    rate_tx: broadcast::Sender<f32>,
    status_tx: broadcast::Sender<PlaybackStatus>,
}

impl Shared {
    fn timeline(&self) -> MutexGuard<'_, Timeline> {
        self.timeline.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn duration_for(&self, timeline: &Timeline) -> Option<f64> {
        if timeline.status.is_ready() {
            self.item_duration
        } else {
            None
        }
    }

    fn position(&self, timeline: &Timeline) -> f64 {
        let elapsed = timeline.anchor_at.elapsed().as_secs_f64();
        let secs = timeline.anchor_secs + f64::from(timeline.rate) * elapsed;
        match self.duration_for(timeline) {
            Some(end) => secs.min(end),
            None => secs,
        }
    }

    /// Freezes the timeline at its current position.
    fn re_anchor(&self, timeline: &mut Timeline) {
        timeline.anchor_secs = self.position(timeline);
        timeline.anchor_at = Instant::now();
        timeline.generation += 1;
    }

    fn set_rate(&self, timeline: &mut Timeline, rate: f32) {
        self.re_anchor(timeline);
        timeline.rate = rate;
        let _ = self.rate_tx.send(rate);
    }
}

/// Media engine running a virtual timeline.
///
/// `item_duration` of `None` simulates a live stream with no known end.
/// The duration is only reported once the item is ready, like a real engine
/// that has to probe the stream first.
pub struct SimulatedEngine {
    shared: Arc<Shared>,
}

impl SimulatedEngine {
    #[must_use]
    pub fn new(item_duration: Option<f64>) -> Self {
        Self::build(item_duration, false)
    }

    /// An engine whose items always end up `Failed`.
    #[must_use]
    pub fn failing() -> Self {
        Self::build(None, true)
    }

    fn build(item_duration: Option<f64>, fail_on_load: bool) -> Self {
        let timeline = Timeline {
            item: None,
            status: PlaybackStatus::Idle,
            rate: 0.0,
            anchor_secs: 0.0,
            anchor_at: Instant::now(),
            generation: 0,
            item_generation: 0,
            next_observer: 0,
            observers: HashMap::new(),
            periodic_sinks: HashMap::new(),
            calls: Vec::new(),
        };
        Self {
            shared: Arc::new(Shared {
                timeline: Mutex::new(timeline),
                item_duration: item_duration.filter(|d| d.is_finite() && *d > 0.0),
                fail_on_load,
                rate_tx: broadcast::channel(EVENT_CAPACITY).0,
                status_tx: broadcast::channel(EVENT_CAPACITY).0,
            }),
        }
    }

    /// Calls received so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<EngineCall> {
        self.shared.timeline().calls.clone()
    }

    /// Number of live time observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.shared.timeline().observers.len()
    }

    /// URL of the current item, if any.
    #[must_use]
    pub fn current_item(&self) -> Option<Url> {
        self.shared.timeline().item.clone()
    }

    fn register(&self, task: impl FnOnce(u64) -> Option<JoinHandle<()>>) -> ObserverToken {
        let id = {
            let mut timeline = self.shared.timeline();
            timeline.next_observer += 1;
            timeline.next_observer
        };
        let handle = task(id);
        self.shared.timeline().observers.insert(id, handle);
        ObserverToken::new(id)
    }
}

fn spawn_task(task: impl Future<Output = ()> + Send + 'static) -> Option<JoinHandle<()>> {
    match Handle::try_current() {
        Ok(handle) => Some(handle.spawn(task)),
        Err(_) => {
            log::warn!("simulated engine used outside a Tokio runtime; timers disabled");
            None
        }
    }
}

/// Arms a timer that stops playback when the item reaches its end.
fn schedule_end_of_item(shared: &Arc<Shared>, timeline: &Timeline) {
    let Some(end) = shared.duration_for(timeline) else {
        return;
    };
    if timeline.rate <= 0.0 {
        return;
    }
    let remaining = ((end - shared.position(timeline)) / f64::from(timeline.rate)).max(0.0);
    let generation = timeline.generation;
    let shared = Arc::clone(shared);
    spawn_task(async move {
        tokio::time::sleep(Duration::from_secs_f64(remaining)).await;
        let mut timeline = shared.timeline();
        if timeline.generation == generation {
            log::debug!("simulated item reached its end at {end:.3}s");
            shared.set_rate(&mut timeline, 0.0);
            timeline.anchor_secs = end;
        }
    });
}

impl MediaEngine for SimulatedEngine {
    fn replace_current_item(&self, url: &Url) {
        let mut timeline = self.shared.timeline();
        timeline.calls.push(EngineCall::Replace(url.to_string()));
        timeline.item = Some(url.clone());
        timeline.status = PlaybackStatus::Idle;
        timeline.anchor_secs = 0.0;
        timeline.anchor_at = Instant::now();
        timeline.generation += 1;
        timeline.item_generation += 1;
        let item_generation = timeline.item_generation;
        drop(timeline);

        let shared = Arc::clone(&self.shared);
        spawn_task(async move {
            tokio::time::sleep(READY_LATENCY).await;
            let mut timeline = shared.timeline();
            if timeline.item_generation != item_generation {
                return;
            }
            let status = if shared.fail_on_load {
                PlaybackStatus::Failed
            } else {
                PlaybackStatus::ReadyToPlay
            };
            shared.re_anchor(&mut timeline);
            timeline.status = status;
            let _ = shared.status_tx.send(status);
            schedule_end_of_item(&shared, &timeline);
        });
    }

    fn play(&self) {
        let mut timeline = self.shared.timeline();
        timeline.calls.push(EngineCall::Play);
        if timeline.item.is_none() || timeline.status.is_failed() {
            return;
        }
        self.shared.set_rate(&mut timeline, 1.0);
        schedule_end_of_item(&self.shared, &timeline);
    }

    fn pause(&self) {
        let mut timeline = self.shared.timeline();
        timeline.calls.push(EngineCall::Pause);
        self.shared.set_rate(&mut timeline, 0.0);
    }

    fn seek(&self, to_secs: f64, _tolerance_before: f64, _tolerance_after: f64) {
        let mut timeline = self.shared.timeline();
        timeline.calls.push(EngineCall::Seek(to_secs));
        let target = match self.shared.duration_for(&timeline) {
            Some(end) => to_secs.clamp(0.0, end),
            None => to_secs.max(0.0),
        };
        timeline.anchor_secs = target;
        timeline.anchor_at = Instant::now();
        timeline.generation += 1;
        // Time observers also fire on discontinuities.
        timeline
            .periodic_sinks
            .retain(|_, sink| sink.send(target).is_ok());
        schedule_end_of_item(&self.shared, &timeline);
    }

    fn rate(&self) -> f32 {
        self.shared.timeline().rate
    }

    fn status(&self) -> PlaybackStatus {
        self.shared.timeline().status
    }

    fn current_time(&self) -> f64 {
        let timeline = self.shared.timeline();
        self.shared.position(&timeline)
    }

    fn duration(&self) -> Option<f64> {
        let timeline = self.shared.timeline();
        self.shared.duration_for(&timeline)
    }

    fn subscribe_rate(&self) -> broadcast::Receiver<f32> {
        self.shared.rate_tx.subscribe()
    }

    fn subscribe_status(&self) -> broadcast::Receiver<PlaybackStatus> {
        self.shared.status_tx.subscribe()
    }

    fn add_periodic_time_observer(
        &self,
        interval: Duration,
        sink: mpsc::UnboundedSender<f64>,
    ) -> ObserverToken {
        let shared = Arc::clone(&self.shared);
        self.register(|id| {
            shared.timeline().periodic_sinks.insert(id, sink.clone());
            spawn_task(async move {
                let mut ticker = tokio::time::interval(interval);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    ticker.tick().await;
                    let time = {
                        let timeline = shared.timeline();
                        if timeline.rate <= 0.0 {
                            continue;
                        }
                        shared.position(&timeline)
                    };
                    if sink.send(time).is_err() {
                        break;
                    }
                }
            })
        })
    }

    fn add_boundary_time_observer(
        &self,
        times: Vec<f64>,
        sink: mpsc::UnboundedSender<f64>,
    ) -> ObserverToken {
        let shared = Arc::clone(&self.shared);
        self.register(|_| {
            spawn_task(async move {
                let mut last = {
                    let timeline = shared.timeline();
                    shared.position(&timeline)
                };
                let mut ticker = tokio::time::interval(BOUNDARY_POLL);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
                loop {
                    ticker.tick().await;
                    let now = {
                        let timeline = shared.timeline();
                        shared.position(&timeline)
                    };
                    for time in times.iter().filter(|t| last < **t && now >= **t) {
                        if sink.send(*time).is_err() {
                            return;
                        }
                    }
                    last = now;
                }
            })
        })
    }

    fn remove_time_observer(&self, token: ObserverToken) {
        let mut timeline = self.shared.timeline();
        timeline.periodic_sinks.remove(&token.id());
        if let Some(Some(handle)) = timeline.observers.remove(&token.id()) {
            handle.abort();
        }
    }
}

/// Asset probe answering with fixed properties after a short delay.
#[derive(Debug, Clone)]
pub struct SimulatedProbe {
    properties: AssetProperties,
    latency: Duration,
}

impl SimulatedProbe {
    #[must_use]
    pub fn new(properties: AssetProperties, latency: Duration) -> Self {
        Self {
            properties,
            latency,
        }
    }

    /// A probe reporting a healthy asset.
    #[must_use]
    pub fn playable() -> Self {
        Self::new(AssetProperties::playable(), Duration::from_millis(50))
    }

    /// A probe for which loading `key` fails.
    #[must_use]
    pub fn failing_key(key: AssetKey) -> Self {
        let mut properties = AssetProperties::playable();
        for (k, status) in &mut properties.key_statuses {
            if *k == key {
                *status = KeyStatus::Failed;
            }
        }
        Self::new(properties, Duration::from_millis(50))
    }
}

impl AssetProbe for SimulatedProbe {
    fn load_values(&self, url: &Url, keys: &[AssetKey]) -> BoxFuture<'static, AssetProperties> {
        log::debug!("probing {} for {} keys", url, keys.len());
        let properties = self.properties.clone();
        let latency = self.latency;
        async move {
            tokio::time::sleep(latency).await;
            properties
        }
        .boxed()
    }
}

/// Layout engine that records every applied mode.
#[derive(Debug, Clone, Default)]
pub struct RecordingLayout {
    applied: Arc<Mutex<Vec<LayoutMode>>>,
}

impl RecordingLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Modes applied so far, oldest first.
    #[must_use]
    pub fn applied(&self) -> Vec<LayoutMode> {
        self.applied
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LayoutEngine for RecordingLayout {
    fn apply_layout(&mut self, spec: &LayoutSpec) {
        log::info!(
            "applying {:?} layout ({:?}, toggle {:?})",
            spec.mode,
            spec.player_height,
            spec.screen_toggle
        );
        self.applied
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(spec.mode);
    }
}
