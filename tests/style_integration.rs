// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

use iced::Theme;
use iced_wheel::ui::design_tokens::{confetti, opacity, palette, spacing, typography};
use iced_wheel::ui::styles::{button, container};

#[test]
fn all_button_styles_compile() {
    let theme = Theme::Dark;

    let _ = button::primary(&theme, iced::widget::button::Status::Active);
    let _ = button::primary(&theme, iced::widget::button::Status::Disabled);
    let _ = button::remove(&theme, iced::widget::button::Status::Hovered);
    let _ = button::card_close(&theme, iced::widget::button::Status::Active);
    let _ = button::result_link(&theme, iced::widget::button::Status::Active);
}

#[test]
fn all_container_styles_compile() {
    let theme = Theme::Dark;

    let _ = container::app_background(&theme);
    let _ = container::overlay_backdrop(&theme);
    let _ = container::card(&theme);
    let _ = container::wheel_item(&theme);
}

#[test]
fn disabled_primary_is_visually_distinct() {
    let theme = Theme::Dark;
    let active = button::primary(&theme, iced::widget::button::Status::Active);
    let disabled = button::primary(&theme, iced::widget::button::Status::Disabled);
    assert_ne!(active.background, disabled.background);
}

#[test]
fn design_tokens_are_accessible() {
    let _ = palette::PRIMARY_500;
    let _ = palette::BACKGROUND;
    let _ = spacing::MD;
    let _ = opacity::OVERLAY_STRONG;
    let _ = typography::DISPLAY;
    assert_eq!(confetti::COLORS.len(), 4);
}
