// SPDX-License-Identifier: MPL-2.0
//! Wheel layout math.
//!
//! Placements are a pure function of `(item count, viewport)`: the same
//! inputs always produce the same positions, with no hidden state and no
//! dependency on animation order. Positions are offsets from the viewport
//! center, so the caller can translate them into absolute coordinates.

use crate::config::{
    CENTER_LABEL_HEIGHT, CENTER_LABEL_WIDTH, ITEM_HEIGHT, ITEM_WIDTH, MAX_ITEM_SCALE,
    MAX_RADIUS_X_FRACTION, MAX_RADIUS_Y_FRACTION, MIN_ITEM_SCALE, MIN_RADIUS_X, MIN_RADIUS_Y,
    SCALE_REFERENCE_WIDTH,
};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Computed screen placement for one wheel item, relative to the
/// viewport center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

/// Elliptical radii for the current viewport.
///
/// Half the space left after reserving the center label's footprint and
/// one item's footprint on each side, clamped so items neither collapse
/// into the label nor run off the viewport.
#[must_use]
pub fn radii(width: f32, height: f32) -> (f32, f32) {
    let available_x = (width - CENTER_LABEL_WIDTH - ITEM_WIDTH).max(0.0);
    let available_y = (height - CENTER_LABEL_HEIGHT - ITEM_HEIGHT).max(0.0);

    let r_x = (available_x / 2.0).clamp(MIN_RADIUS_X, (width * MAX_RADIUS_X_FRACTION).max(MIN_RADIUS_X));
    let r_y = (available_y / 2.0).clamp(MIN_RADIUS_Y, (height * MAX_RADIUS_Y_FRACTION).max(MIN_RADIUS_Y));
    (r_x, r_y)
}

/// Uniform item scale for the current viewport and item density.
/// More items mean a smaller scale; clamped to a floor so labels stay
/// legible on small windows.
#[must_use]
pub fn item_scale(count: usize, width: f32, height: f32) -> f32 {
    if count == 0 {
        return MAX_ITEM_SCALE;
    }
    let viewport_factor = (width.min(height * 1.5) / SCALE_REFERENCE_WIDTH).min(1.0);
    let density_factor = 1.0 - 0.04 * (count.saturating_sub(1)) as f32;
    (viewport_factor * density_factor).clamp(MIN_ITEM_SCALE, MAX_ITEM_SCALE)
}

/// Start angle for the first item. Small counts start further from the
/// vertical so the first item clears the center label.
fn offset_angle(count: usize) -> f32 {
    debug_assert!(count > 0);
    -FRAC_PI_2 + PI / (2.0 * count as f32)
}

/// Computes placements for `count` items around the center label.
///
/// Items sit at equal angular steps of `2π / count` on the ellipse
/// returned by [`radii`]. An empty wheel yields an empty list.
#[must_use]
pub fn placements(count: usize, width: f32, height: f32) -> Vec<Placement> {
    if count == 0 {
        return Vec::new();
    }

    let (r_x, r_y) = radii(width, height);
    let scale = item_scale(count, width, height);
    let step = TAU / count as f32;
    let offset = offset_angle(count);

    (0..count)
        .map(|i| {
            let theta = offset + step * i as f32;
            Placement {
                x: r_x * theta.cos(),
                y: r_y * theta.sin(),
                scale,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 1280.0;
    const H: f32 = 800.0;

    #[test]
    fn empty_wheel_yields_no_placements() {
        assert!(placements(0, W, H).is_empty());
    }

    #[test]
    fn single_item_is_placed_without_nan() {
        let placed = placements(1, W, H);
        assert_eq!(placed.len(), 1);
        assert!(placed[0].x.is_finite());
        assert!(placed[0].y.is_finite());
        assert!(placed[0].scale.is_finite());
    }

    #[test]
    fn items_lie_on_the_computed_ellipse() {
        let (r_x, r_y) = radii(W, H);
        for placement in placements(6, W, H) {
            let on_ellipse =
                (placement.x / r_x).powi(2) + (placement.y / r_y).powi(2);
            assert!((on_ellipse - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn angular_steps_are_equal() {
        let placed = placements(5, W, H);
        let (r_x, r_y) = radii(W, H);
        let angles: Vec<f32> = placed
            .iter()
            .map(|p| (p.y / r_y).atan2(p.x / r_x))
            .collect();
        let step = std::f32::consts::TAU / 5.0;
        for pair in angles.windows(2) {
            let mut delta = pair[1] - pair[0];
            if delta < 0.0 {
                delta += std::f32::consts::TAU;
            }
            assert!((delta - step).abs() < 1e-4);
        }
    }

    #[test]
    fn radii_respect_minimums_on_tiny_viewports() {
        let (r_x, r_y) = radii(200.0, 150.0);
        assert!(r_x >= MIN_RADIUS_X);
        assert!(r_y >= MIN_RADIUS_Y);
    }

    #[test]
    fn radii_respect_maximums_on_huge_viewports() {
        let (r_x, r_y) = radii(4000.0, 3000.0);
        assert!(r_x <= 4000.0 * MAX_RADIUS_X_FRACTION);
        assert!(r_y <= 3000.0 * MAX_RADIUS_Y_FRACTION);
    }

    #[test]
    fn scale_shrinks_with_item_count_but_never_below_floor() {
        let few = item_scale(2, W, H);
        let many = item_scale(10, W, H);
        assert!(many <= few);
        assert!(item_scale(10, 320.0, 240.0) >= MIN_ITEM_SCALE);
    }

    #[test]
    fn small_counts_start_at_a_wider_offset() {
        assert!(offset_angle(2) > offset_angle(8));
    }

    #[test]
    fn placements_are_deterministic() {
        assert_eq!(placements(7, W, H), placements(7, W, H));
    }
}
