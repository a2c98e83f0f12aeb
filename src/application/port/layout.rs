// SPDX-License-Identifier: MPL-2.0
//! Layout engine port definition.

use crate::domain::ui::LayoutSpec;

/// Port for the component that actually arranges the player screen.
///
/// Implementations may also request the matching device geometry
/// (landscape-right for full screen, portrait otherwise).
pub trait LayoutEngine: Send {
    /// Applies `spec` to the screen.
    fn apply_layout(&mut self, spec: &LayoutSpec);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::LayoutMode;

    fn _assert_object_safe(_: &dyn LayoutEngine) {}

    #[derive(Default)]
    struct RecordingLayout(Vec<LayoutMode>);

    impl LayoutEngine for RecordingLayout {
        fn apply_layout(&mut self, spec: &LayoutSpec) {
            self.0.push(spec.mode);
        }
    }

    #[test]
    fn applied_specs_are_recorded_in_order() {
        let mut layout = RecordingLayout::default();
        layout.apply_layout(&LayoutSpec::for_mode(LayoutMode::Landscape));
        layout.apply_layout(&LayoutSpec::for_mode(LayoutMode::Portrait));
        assert_eq!(layout.0, vec![LayoutMode::Landscape, LayoutMode::Portrait]);
    }
}
