// SPDX-License-Identifier: MPL-2.0
//! Layout modes and the concrete configuration each one maps to.

/// Presentation mode of the player screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    Portrait,
    Landscape,
}

impl LayoutMode {
    /// Mode matching a device orientation reading.
    #[must_use]
    pub fn from_landscape(is_landscape: bool) -> Self {
        if is_landscape {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    #[must_use]
    pub fn is_landscape(self) -> bool {
        matches!(self, Self::Landscape)
    }
}

/// Vertical extent of the video surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerHeight {
    /// Fixed height in points, full width.
    Fixed(f32),
    /// Fills the whole screen.
    Fill,
}

/// Screen background behind the video surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    /// Platform default background.
    System,
    Black,
}

/// Which screen toggle button the overlay carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenToggle {
    FullScreen,
    Minimize,
}

/// Everything the layout engine needs to arrange the player screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSpec {
    pub mode: LayoutMode,
    pub player_height: PlayerHeight,
    /// Edge length of the transport icons.
    pub icon_size: f32,
    /// Horizontal distance between the play button and the skip buttons.
    pub skip_spacing: f32,
    pub close_inset: f32,
    pub close_size: f32,
    pub background: Background,
    pub screen_toggle: ScreenToggle,
}

impl LayoutSpec {
    /// Returns the layout for `mode`.
    #[must_use]
    pub fn for_mode(mode: LayoutMode) -> Self {
        match mode {
            LayoutMode::Portrait => Self {
                mode,
                player_height: PlayerHeight::Fixed(320.0),
                icon_size: 30.0,
                skip_spacing: 50.0,
                close_inset: 8.0,
                close_size: 30.0,
                background: Background::System,
                screen_toggle: ScreenToggle::FullScreen,
            },
            LayoutMode::Landscape => Self {
                mode,
                player_height: PlayerHeight::Fill,
                icon_size: 40.0,
                skip_spacing: 80.0,
                close_inset: 16.0,
                close_size: 40.0,
                background: Background::Black,
                screen_toggle: ScreenToggle::Minimize,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_is_default() {
        assert_eq!(LayoutMode::default(), LayoutMode::Portrait);
    }

    #[test]
    fn portrait_spec_offers_full_screen() {
        let spec = LayoutSpec::for_mode(LayoutMode::Portrait);
        assert_eq!(spec.player_height, PlayerHeight::Fixed(320.0));
        assert_eq!(spec.screen_toggle, ScreenToggle::FullScreen);
        assert_eq!(spec.background, Background::System);
    }

    #[test]
    fn landscape_spec_fills_screen_and_offers_minimize() {
        let spec = LayoutSpec::for_mode(LayoutMode::Landscape);
        assert_eq!(spec.player_height, PlayerHeight::Fill);
        assert_eq!(spec.screen_toggle, ScreenToggle::Minimize);
        assert_eq!(spec.background, Background::Black);
        assert!(spec.icon_size > LayoutSpec::for_mode(LayoutMode::Portrait).icon_size);
    }

    #[test]
    fn for_mode_is_pure() {
        assert_eq!(
            LayoutSpec::for_mode(LayoutMode::Landscape),
            LayoutSpec::for_mode(LayoutMode::Landscape)
        );
    }

    #[test]
    fn from_landscape_maps_both_ways() {
        assert_eq!(LayoutMode::from_landscape(true), LayoutMode::Landscape);
        assert_eq!(LayoutMode::from_landscape(false), LayoutMode::Portrait);
    }
}
