// SPDX-License-Identifier: MPL-2.0
//! Built-in sample streams offered by the selection screen.

use super::MediaItem;

const SAMPLES: [(&str, &str, &str); 4] = [
    (
        "https://demo.unified-streaming.com/k8s/features/stable/video/tears-of-steel/tears-of-steel.ism/.m3u8",
        "Journey into space",
        "Off to the moon",
    ),
    (
        "https://devstreaming-cdn.apple.com/videos/streaming/examples/img_bipbop_adv_example_fmp4/master.m3u8",
        "Commercial break",
        "Starts in 30 minutes",
    ),
    (
        "https://res.cloudinary.com/dannykeane/video/upload/sp_full_hd/q_80:qmax_90,ac_none/v1/dk-memoji-dark.m3u8",
        "Avatar",
        "Made one at a time",
    ),
    (
        "https://bitdash-a.akamaihd.net/content/sintel/hls/playlist.m3u8",
        "Dutch animation classic",
        "Let's watch together",
    ),
];

/// Returns every sample stream in display order.
#[must_use]
pub fn samples() -> Vec<MediaItem> {
    SAMPLES
        .iter()
        .map(|(url, title, description)| MediaItem::new(*url, *title, *description))
        .collect()
}

/// Returns the sample at `index`, as selected from the list.
#[must_use]
pub fn select(index: usize) -> Option<MediaItem> {
    SAMPLES
        .get(index)
        .map(|(url, title, description)| MediaItem::new(*url, *title, *description))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_four_hls_streams() {
        let items = samples();
        assert_eq!(items.len(), 4);
        assert!(items.iter().all(|item| item.url().ends_with(".m3u8")));
    }

    #[test]
    fn select_out_of_range_returns_none() {
        assert!(select(4).is_none());
        assert_eq!(select(3).map(|i| i.title().to_string()), Some("Dutch animation classic".into()));
    }
}
