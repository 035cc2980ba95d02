// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the wheel UI.
//!
//! # Organization
//!
//! - **Palette**: Base colors (dark background, indigo brand)
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Typography**: Font size scale
//! - **Radius**: Border radii
//! - **Confetti**: Celebration piece colors

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// App background (#1a1a1a).
    pub const BACKGROUND: Color = Color::from_rgb(0.102, 0.102, 0.102);

    /// Card surfaces on top of the dark background.
    pub const SURFACE: Color = Color::from_rgb(0.97, 0.97, 0.97);

    /// Text on light card surfaces.
    pub const SURFACE_TEXT: Color = Color::from_rgb(0.102, 0.102, 0.102);

    // Brand colors (indigo scale around #646cff)
    pub const PRIMARY_400: Color = Color::from_rgb(0.455, 0.482, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.392, 0.424, 1.0);
    pub const PRIMARY_600: Color = Color::from_rgb(0.31, 0.34, 0.85);

    /// Disabled controls (#666666).
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    /// Remove buttons (#ff4444).
    pub const DANGER_500: Color = Color::from_rgb(1.0, 0.267, 0.267);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const ITEM_BACKDROP: f32 = 0.1;
    pub const ITEM_BACKDROP_HOVER: f32 = 0.2;
    pub const OVERLAY_STRONG: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Winner text and the center label.
    pub const DISPLAY: f32 = 48.0;

    /// Card headings.
    pub const TITLE_LG: f32 = 30.0;

    /// Letter body text.
    pub const BODY_LG: f32 = 18.0;

    /// Wheel item inputs, buttons.
    pub const BODY: f32 = 16.0;

    /// Hints and secondary labels.
    pub const BODY_SM: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Confetti Colors
// ============================================================================

pub mod confetti {
    use super::Color;

    pub const COLORS: [Color; 4] = [
        Color::from_rgb(0.988, 0.643, 0.0),  // amber
        Color::from_rgb(0.0, 0.275, 0.859),  // blue
        Color::from_rgb(0.992, 0.0, 0.0),    // red
        Color::from_rgb(0.996, 0.988, 0.996), // white
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_monotonic() {
        assert!(spacing::XXS < spacing::XS);
        assert!(spacing::XS < spacing::SM);
        assert!(spacing::SM < spacing::MD);
        assert!(spacing::MD < spacing::LG);
        assert!(spacing::LG < spacing::XL);
        assert!(spacing::XL < spacing::XXL);
    }

    #[test]
    fn opacity_values_are_normalized() {
        assert!(opacity::TRANSPARENT == 0.0);
        assert!(opacity::OPAQUE == 1.0);
        assert!(opacity::OVERLAY_STRONG > opacity::ITEM_BACKDROP);
    }

    #[test]
    fn confetti_palette_has_distinct_colors() {
        for (i, a) in confetti::COLORS.iter().enumerate() {
            for b in confetti::COLORS.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
