// SPDX-License-Identifier: MPL-2.0
//! The reveal overlay: confetti, the winner, and a delayed hint.
//!
//! The winner is rendered as a button when it looks like a link; the
//! parent opens the URL in the system browser. The informational hint
//! appears only after its configured delay.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::Confetti;
use crate::wheel::Choice;
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Contextual data needed to render the result overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub winner: &'a Choice,
    /// Seconds since the reveal, drives the confetti field.
    pub confetti_elapsed: f32,
    /// Whether the delayed hint line is due.
    pub show_hint: bool,
}

/// Messages emitted by the result overlay.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
    WinnerClicked,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Close,
    WinnerClicked,
}

/// Process a result overlay message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Close => Event::Close,
        Message::WinnerClicked => Event::WinnerClicked,
    }
}

/// Render the result overlay, confetti included.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let backdrop = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::overlay_backdrop);

    let card = Container::new(build_card(&ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(Confetti::new(ctx.confetti_elapsed).into_element())
        .push(card)
        .into()
}

fn build_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let close = button(Text::new(ctx.i18n.tr("result-close-button")).size(typography::BODY_LG))
        .on_press(Message::Close)
        .padding(spacing::XXS)
        .style(styles::button::card_close);

    let close_row = Row::new()
        .width(Length::Fill)
        .push(Space::new().width(Length::Fill))
        .push(close);

    let title = Text::new(ctx.i18n.tr("result-title")).size(typography::TITLE_LG);

    let winner: Element<'_, Message> = if ctx.winner.is_link() {
        button(Text::new(ctx.winner.text()).size(typography::DISPLAY))
            .on_press(Message::WinnerClicked)
            .padding(0.0)
            .style(styles::button::result_link)
            .into()
    } else {
        Text::new(ctx.winner.text()).size(typography::DISPLAY).into()
    };

    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(close_row)
        .push(title)
        .push(winner);

    if ctx.show_hint && ctx.winner.is_link() {
        content = content.push(
            Text::new(ctx.i18n.tr("result-open-link-hint")).size(typography::BODY_SM),
        );
    }

    Container::new(content)
        .padding(spacing::XL)
        .max_width(600.0)
        .style(styles::container::card)
        .into()
}
