// SPDX-License-Identifier: MPL-2.0
//! Confetti celebration widget using Canvas.
//!
//! Pieces are a pure function of elapsed time: each piece derives its
//! trajectory from a per-index seeded RNG, so redrawing at any tick
//! produces a consistent animation with no retained particle state.
//! Pieces fall once and are not recycled.

use crate::config::{CONFETTI_DURATION, CONFETTI_PIECES};
use crate::ui::design_tokens::confetti::COLORS;
use iced::widget::canvas::{self, Canvas};
use iced::{mouse, Element, Length, Point, Rectangle, Renderer, Size, Theme};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Falling confetti field parameterized by seconds since the reveal.
#[derive(Debug, Clone, Copy)]
pub struct Confetti {
    elapsed: f32,
}

impl Confetti {
    #[must_use]
    pub fn new(elapsed: f32) -> Self {
        Self { elapsed }
    }

    /// Whether the animation still needs ticks.
    #[must_use]
    pub fn is_active(elapsed: f32) -> bool {
        elapsed < CONFETTI_DURATION.as_secs_f32()
    }

    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for Confetti {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        if !Self::is_active(self.elapsed) {
            return vec![frame.into_geometry()];
        }

        for index in 0..CONFETTI_PIECES {
            // Per-piece parameters are deterministic in the index.
            let mut rng = SmallRng::seed_from_u64(index as u64);
            let x_frac: f32 = rng.random_range(0.0..1.0);
            let fall_speed: f32 = rng.random_range(90.0..220.0);
            let sway_amp: f32 = rng.random_range(8.0..40.0);
            let sway_freq: f32 = rng.random_range(0.8..2.2);
            let sway_phase: f32 = rng.random_range(0.0..TAU);
            let tumble_freq: f32 = rng.random_range(1.5..5.0);
            let piece_size: f32 = rng.random_range(6.0..11.0);
            let release_delay: f32 = rng.random_range(0.0..0.8);
            let color = COLORS[rng.random_range(0..COLORS.len())];

            let t = self.elapsed - release_delay;
            if t < 0.0 {
                continue;
            }

            let y = -piece_size + fall_speed * t;
            if y > bounds.height {
                continue;
            }
            let x = x_frac * bounds.width + sway_amp * (sway_freq * TAU * t + sway_phase).sin();

            // Tumble by modulating the visible height of the piece.
            let visible_height = piece_size * (tumble_freq * TAU * t).cos().abs().max(0.15);

            let path = canvas::Path::rectangle(
                Point::new(x - piece_size / 2.0, y - visible_height / 2.0),
                Size::new(piece_size, visible_height),
            );
            frame.fill(&path, color);
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_until_configured_duration() {
        assert!(Confetti::is_active(0.0));
        assert!(Confetti::is_active(CONFETTI_DURATION.as_secs_f32() - 0.1));
        assert!(!Confetti::is_active(CONFETTI_DURATION.as_secs_f32()));
    }

    #[test]
    fn widget_builds_an_element() {
        #[derive(Debug, Clone)]
        enum TestMessage {}
        let _element: Element<'static, TestMessage> = Confetti::new(1.0).into_element();
    }
}
