// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Choices**: Collection bounds and text limits
//! - **Sequencing**: Timer delays for the choose/reveal flow
//! - **Layout**: Wheel radii, scale clamps, and responsive breakpoints
//! - **Effects**: Pulse and confetti tuning
//! - **Volume**: Audio cue volume settings

use std::time::Duration;

// ==========================================================================
// Choice Defaults
// ==========================================================================

/// Maximum number of choices on the wheel.
pub const MAX_CHOICES: usize = 10;

/// Maximum length of a single choice label, in characters.
pub const MAX_CHOICE_TEXT_LEN: usize = 20;

/// Label given to freshly added choices.
pub const NEW_CHOICE_TEXT: &str = "New Option";

/// Choice labels loaded on startup.
pub const DEFAULT_CHOICE_TEXTS: [&str; 5] = [
    "cine2nerdle.com",
    "Time to play chess",
    "Latest Trump news",
    "Time for a mocha",
    "Maccas run",
];

// ==========================================================================
// Sequencing Defaults
// ==========================================================================

/// Time between pressing Choose and revealing the winner.
pub const REVEAL_DELAY: Duration = Duration::from_millis(3000);

/// Delay before the informational line appears on the result card.
pub const RESULT_MESSAGE_DELAY: Duration = Duration::from_millis(2000);

/// Delay before the letter overlay starts its audio track.
pub const LETTER_AUDIO_DELAY: Duration = Duration::from_millis(1500);

/// Tick interval driving the pulse and confetti animations.
pub const ANIMATION_TICK: Duration = Duration::from_millis(33);

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Estimated width of the center label, subtracted from available space.
pub const CENTER_LABEL_WIDTH: f32 = 260.0;

/// Estimated height of the center label.
pub const CENTER_LABEL_HEIGHT: f32 = 80.0;

/// Estimated footprint of a single wheel item (input plus remove button).
pub const ITEM_WIDTH: f32 = 190.0;

/// Estimated height of a single wheel item.
pub const ITEM_HEIGHT: f32 = 44.0;

/// Smallest horizontal radius; items never collapse into the label.
pub const MIN_RADIUS_X: f32 = 170.0;

/// Smallest vertical radius.
pub const MIN_RADIUS_Y: f32 = 90.0;

/// Horizontal radius cap as a fraction of viewport width.
pub const MAX_RADIUS_X_FRACTION: f32 = 0.42;

/// Vertical radius cap as a fraction of viewport height.
pub const MAX_RADIUS_Y_FRACTION: f32 = 0.40;

/// Lower bound for the per-item scale factor so labels stay legible.
pub const MIN_ITEM_SCALE: f32 = 0.65;

/// Upper bound for the per-item scale factor.
pub const MAX_ITEM_SCALE: f32 = 1.0;

/// Viewport width at which the full scale is reached.
pub const SCALE_REFERENCE_WIDTH: f32 = 1200.0;

/// Viewports at or below this width count as mobile.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

// ==========================================================================
// Effect Defaults
// ==========================================================================

/// Full period of the center-label pulse while sequencing.
pub const PULSE_PERIOD: Duration = Duration::from_millis(2000);

/// Peak scale of the pulse (oscillates between 1.0 and this).
pub const PULSE_MAX_SCALE: f32 = 1.05;

/// Trough opacity of the pulse (oscillates between 1.0 and this).
pub const PULSE_MIN_OPACITY: f32 = 0.8;

/// Number of confetti pieces on the result card.
pub const CONFETTI_PIECES: usize = 200;

/// How long confetti keeps falling; no recycling afterwards.
pub const CONFETTI_DURATION: Duration = Duration::from_millis(6000);

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default cue playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 0.8;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Choice validation
    assert!(MAX_CHOICES >= 1);
    assert!(MAX_CHOICE_TEXT_LEN > 0);
    assert!(DEFAULT_CHOICE_TEXTS.len() <= MAX_CHOICES);

    // Layout validation
    assert!(MIN_RADIUS_X > 0.0);
    assert!(MIN_RADIUS_Y > 0.0);
    assert!(MAX_RADIUS_X_FRACTION > 0.0 && MAX_RADIUS_X_FRACTION < 0.5);
    assert!(MAX_RADIUS_Y_FRACTION > 0.0 && MAX_RADIUS_Y_FRACTION < 0.5);
    assert!(MIN_ITEM_SCALE > 0.0);
    assert!(MAX_ITEM_SCALE >= MIN_ITEM_SCALE);
    assert!(MOBILE_BREAKPOINT > 0.0);

    // Effect validation
    assert!(PULSE_MAX_SCALE >= 1.0);
    assert!(PULSE_MIN_OPACITY > 0.0 && PULSE_MIN_OPACITY <= 1.0);
    assert!(CONFETTI_PIECES > 0);

    // Volume validation
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_defaults_are_valid() {
        assert_eq!(MAX_CHOICES, 10);
        assert_eq!(MAX_CHOICE_TEXT_LEN, 20);
        assert!(DEFAULT_CHOICE_TEXTS.len() <= MAX_CHOICES);
        assert!(DEFAULT_CHOICE_TEXTS.iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn sequencing_delays_are_valid() {
        assert_eq!(REVEAL_DELAY, Duration::from_secs(3));
        assert!(RESULT_MESSAGE_DELAY > Duration::ZERO);
        assert!(LETTER_AUDIO_DELAY > Duration::ZERO);
        assert!(ANIMATION_TICK < REVEAL_DELAY);
    }

    #[test]
    fn layout_defaults_are_valid() {
        assert!(MIN_RADIUS_X < SCALE_REFERENCE_WIDTH * MAX_RADIUS_X_FRACTION);
        assert!(MIN_ITEM_SCALE <= MAX_ITEM_SCALE);
        assert_eq!(MOBILE_BREAKPOINT, 768.0);
    }

    #[test]
    fn volume_defaults_are_valid() {
        assert_eq!(DEFAULT_VOLUME, 0.8);
        assert!(DEFAULT_VOLUME >= MIN_VOLUME);
        assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    }
}
