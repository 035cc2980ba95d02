// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Fullscreen dark application backdrop.
pub fn app_background(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BACKGROUND)),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Dimming layer behind a card overlay.
pub fn overlay_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        ..container::Style::default()
    }
}

/// Light card floating over the backdrop.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE)),
        text_color: Some(palette::SURFACE_TEXT),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Translucent backdrop behind a single wheel item.
pub fn wheel_item(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::ITEM_BACKDROP,
            ..palette::WHITE
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
