// SPDX-License-Identifier: MPL-2.0
//! Viewport classification for responsive behavior.
//!
//! Recomputed from the window size on every resize event delivered by the
//! runtime. Pure observer: it never mutates the choice store or the
//! sequencer.

use crate::config::MOBILE_BREAKPOINT;
use iced::Size;

/// Orientation and size class of the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResponsiveLayout {
    pub is_portrait: bool,
    pub is_mobile: bool,
}

impl ResponsiveLayout {
    /// Classifies a window size using the fixed thresholds.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self {
            is_portrait: size.height > size.width,
            is_mobile: size.width <= MOBILE_BREAKPOINT,
        }
    }

    /// Whether the orientation guard should replace every other view.
    #[must_use]
    pub fn blocks_interaction(self) -> bool {
        self.is_portrait && self.is_mobile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_desktop_is_neither_portrait_nor_mobile() {
        let layout = ResponsiveLayout::from_size(Size::new(1280.0, 800.0));
        assert!(!layout.is_portrait);
        assert!(!layout.is_mobile);
        assert!(!layout.blocks_interaction());
    }

    #[test]
    fn narrow_portrait_blocks_interaction() {
        let layout = ResponsiveLayout::from_size(Size::new(400.0, 700.0));
        assert!(layout.is_portrait);
        assert!(layout.is_mobile);
        assert!(layout.blocks_interaction());
    }

    #[test]
    fn narrow_landscape_does_not_block() {
        let layout = ResponsiveLayout::from_size(Size::new(700.0, 400.0));
        assert!(!layout.is_portrait);
        assert!(layout.is_mobile);
        assert!(!layout.blocks_interaction());
    }

    #[test]
    fn breakpoint_boundary_counts_as_mobile() {
        let layout = ResponsiveLayout::from_size(Size::new(MOBILE_BREAKPOINT, 400.0));
        assert!(layout.is_mobile);
        let wider = ResponsiveLayout::from_size(Size::new(MOBILE_BREAKPOINT + 1.0, 400.0));
        assert!(!wider.is_mobile);
    }

    #[test]
    fn tall_desktop_is_portrait_but_not_blocking() {
        let layout = ResponsiveLayout::from_size(Size::new(900.0, 1400.0));
        assert!(layout.is_portrait);
        assert!(!layout.is_mobile);
        assert!(!layout.blocks_interaction());
    }
}
