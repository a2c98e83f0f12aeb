// SPDX-License-Identifier: MPL-2.0
//! Engine time notifications as streams.
//!
//! A [`TickStream`] owns exactly one time observer registration on the
//! engine. Nothing is registered until the stream is first polled, and the
//! registration is removed when the stream is dropped. Restarting means
//! creating a new stream.

use crate::application::port::{MediaEngine, ObserverToken};
use futures_util::Stream;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::sync::mpsc;

/// What kind of observer a stream registers.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeObservation {
    /// Fires at a fixed cadence while playing.
    Periodic(Duration),
    /// Fires when playback crosses one of the given times.
    Boundary(Vec<f64>),
}

/// Lazy stream of playback timestamps (seconds).
pub struct TickStream {
    engine: Arc<dyn MediaEngine>,
    observation: TimeObservation,
    registration: Option<(ObserverToken, mpsc::UnboundedReceiver<f64>)>,
}

impl TickStream {
    #[must_use]
    pub fn periodic(engine: Arc<dyn MediaEngine>, interval: Duration) -> Self {
        Self::new(engine, TimeObservation::Periodic(interval))
    }

    #[must_use]
    pub fn boundary(engine: Arc<dyn MediaEngine>, times: Vec<f64>) -> Self {
        Self::new(engine, TimeObservation::Boundary(times))
    }

    fn new(engine: Arc<dyn MediaEngine>, observation: TimeObservation) -> Self {
        Self {
            engine,
            observation,
            registration: None,
        }
    }

    /// Returns true once the engine observer has been registered.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.registration.is_some()
    }

    fn register(&self) -> (ObserverToken, mpsc::UnboundedReceiver<f64>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let token = match &self.observation {
            TimeObservation::Periodic(interval) => {
                self.engine.add_periodic_time_observer(*interval, tx)
            }
            TimeObservation::Boundary(times) => {
                self.engine.add_boundary_time_observer(times.clone(), tx)
            }
        };
        log::debug!("registered time observer {}", token.id());
        (token, rx)
    }
}

impl Stream for TickStream {
    type Item = f64;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.registration.is_none() {
            this.registration = Some(this.register());
        }
        match this.registration.as_mut() {
            Some((_, rx)) => rx.poll_recv(cx),
            None => Poll::Ready(None),
        }
    }
}

impl Drop for TickStream {
    fn drop(&mut self) {
        if let Some((token, _)) = self.registration.take() {
            self.engine.remove_time_observer(token);
            log::debug!("removed time observer {}", token.id());
        }
    }
}

impl std::fmt::Debug for TickStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickStream")
            .field("observation", &self.observation)
            .field("registered", &self.is_registered())
            .finish()
    }
}
