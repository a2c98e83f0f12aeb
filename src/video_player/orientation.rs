// SPDX-License-Identifier: MPL-2.0
//! Device rotation notifications reduced to "is landscape" readings.

use futures_util::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;

/// Physical device orientation as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceOrientation {
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
    FaceUp,
    FaceDown,
    Unknown,
}

impl DeviceOrientation {
    /// Landscape reading for stable orientations, `None` for flat or unknown.
    ///
    /// Upside-down portrait is treated as landscape.
    #[must_use]
    pub fn is_landscape(self) -> Option<bool> {
        match self {
            Self::LandscapeLeft | Self::LandscapeRight | Self::PortraitUpsideDown => Some(true),
            Self::Portrait => Some(false),
            Self::FaceUp | Self::FaceDown | Self::Unknown => None,
        }
    }
}

/// Drops unstable readings and repeats of the previous value.
#[derive(Debug, Clone, Default)]
pub struct OrientationFilter {
    last: Option<bool>,
}

impl OrientationFilter {
    /// Returns the reading to emit for `orientation`, if any.
    pub fn accept(&mut self, orientation: DeviceOrientation) -> Option<bool> {
        let is_landscape = orientation.is_landscape()?;
        if self.last == Some(is_landscape) {
            return None;
        }
        self.last = Some(is_landscape);
        Some(is_landscape)
    }
}

/// Stream of de-duplicated landscape readings.
#[derive(Debug)]
pub struct OrientationSource {
    notifications: mpsc::UnboundedReceiver<DeviceOrientation>,
    filter: OrientationFilter,
}

impl OrientationSource {
    #[must_use]
    pub fn new(notifications: mpsc::UnboundedReceiver<DeviceOrientation>) -> Self {
        Self {
            notifications,
            filter: OrientationFilter::default(),
        }
    }
}

impl Stream for OrientationSource {
    type Item = bool;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<bool>> {
        let this = self.get_mut();
        loop {
            match this.notifications.poll_recv(cx) {
                Poll::Ready(Some(orientation)) => {
                    if let Some(is_landscape) = this.filter.accept(orientation) {
                        return Poll::Ready(Some(is_landscape));
                    }
                }
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[test]
    fn flat_and_unknown_orientations_are_ignored() {
        let mut filter = OrientationFilter::default();
        assert_eq!(filter.accept(DeviceOrientation::FaceUp), None);
        assert_eq!(filter.accept(DeviceOrientation::FaceDown), None);
        assert_eq!(filter.accept(DeviceOrientation::Unknown), None);
    }

    #[test]
    fn repeated_readings_are_dropped() {
        let mut filter = OrientationFilter::default();
        assert_eq!(filter.accept(DeviceOrientation::LandscapeLeft), Some(true));
        assert_eq!(filter.accept(DeviceOrientation::LandscapeRight), None);
        assert_eq!(filter.accept(DeviceOrientation::FaceUp), None);
        assert_eq!(filter.accept(DeviceOrientation::Portrait), Some(false));
    }

    #[test]
    fn upside_down_counts_as_landscape() {
        assert_eq!(
            DeviceOrientation::PortraitUpsideDown.is_landscape(),
            Some(true)
        );
    }

    #[tokio::test]
    async fn source_yields_filtered_readings() {
        let (tx, rx) = mpsc::unbounded_channel();
        for orientation in [
            DeviceOrientation::Portrait,
            DeviceOrientation::FaceUp,
            DeviceOrientation::Portrait,
            DeviceOrientation::LandscapeLeft,
        ] {
            tx.send(orientation).unwrap();
        }
        drop(tx);

        let readings: Vec<bool> = OrientationSource::new(rx).collect().await;
        assert_eq!(readings, vec![false, true]);
    }
}
