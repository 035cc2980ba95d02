// SPDX-License-Identifier: MPL-2.0
//! The letter overlay behind the "Read More" button.
//!
//! The accompanying audio track is the parent's concern; this module
//! only renders the card and reports the dismissal.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Contextual data needed to render the letter overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the letter overlay.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Close,
}

/// Process a letter overlay message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Close => Event::Close,
    }
}

/// Render the letter overlay.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let backdrop = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::overlay_backdrop);

    let close = button(Text::new(ctx.i18n.tr("letter-close-button")).size(typography::BODY_LG))
        .on_press(Message::Close)
        .padding(spacing::XXS)
        .style(styles::button::card_close);

    let close_row = Row::new()
        .width(Length::Fill)
        .push(Space::new().width(Length::Fill))
        .push(close);

    let letter = Column::new()
        .spacing(spacing::MD)
        .push(close_row)
        .push(Text::new(ctx.i18n.tr("letter-greeting")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("letter-body")).size(typography::BODY_LG))
        .push(
            Row::new()
                .width(Length::Fill)
                .push(Space::new().width(Length::Fill))
                .push(Text::new(ctx.i18n.tr("letter-signature")).size(typography::BODY_LG)),
        );

    let card = Container::new(letter)
        .padding(spacing::XL)
        .max_width(480.0)
        .style(styles::container::card);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(
            Container::new(card)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_emits_close_event() {
        assert!(matches!(update(Message::Close), Event::Close));
    }

    #[test]
    fn letter_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }
}
