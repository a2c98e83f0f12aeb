// SPDX-License-Identifier: MPL-2.0
//! The record handed over by the selection screen.

/// A playable source picked by the user.
///
/// Immutable once constructed. The URL is kept as text; it is parsed only
/// when the item is loaded into the engine, so a malformed value is rejected
/// there without disturbing whatever is already playing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    url: String,
    title: String,
    description: String,
}

impl MediaItem {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructor_values() {
        let item = MediaItem::new("https://example.com/a.m3u8", "Title", "Desc");
        assert_eq!(item.url(), "https://example.com/a.m3u8");
        assert_eq!(item.title(), "Title");
        assert_eq!(item.description(), "Desc");
    }
}
