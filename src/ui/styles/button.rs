// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (Choose, Add Option, ...).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Disabled => palette::GRAY_400,
        _ => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Small round remove button on a wheel item.
pub fn remove(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::ITEM_BACKDROP_HOVER,
            ..palette::DANGER_500
        })),
        _ => None,
    };
    button::Style {
        background,
        text_color: palette::DANGER_500,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Unobtrusive close button in a card corner.
pub fn card_close(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::ITEM_BACKDROP,
            ..palette::BLACK
        })),
        _ => None,
    };
    button::Style {
        background,
        text_color: palette::GRAY_400,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// The winner text rendered as a clickable link.
pub fn result_link(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: palette::PRIMARY_500,
        border: Border::default(),
        ..button::Style::default()
    }
}
