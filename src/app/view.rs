// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Surface precedence, top to bottom: fault notice, orientation guard,
//! then the wheel with its overlays (letter above result, result above
//! the wheel).

use super::Message;
use crate::i18n::fluent::I18n;
use crate::responsive::ResponsiveLayout;
use crate::ui::components::ErrorDisplay;
use crate::ui::orientation;
use crate::ui::read_more::{self, ViewContext as LetterViewContext};
use crate::ui::result_card::{self, ViewContext as ResultViewContext};
use crate::ui::styles;
use crate::ui::wheel_screen::{self, ViewContext as WheelViewContext};
use crate::wheel::{Choice, ChoiceStore, Phase};
use iced::widget::{Container, Stack};
use iced::{Element, Length, Size};
use std::time::Duration;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a ChoiceStore,
    pub phase: Phase,
    pub winner: Option<&'a Choice>,
    pub pulse_elapsed: Option<Duration>,
    pub confetti_elapsed: f32,
    pub show_hint: bool,
    pub window_size: Size,
    pub letter_open: bool,
    pub fault: Option<&'a str>,
}

/// Renders the current application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if let Some(fault) = ctx.fault {
        return view_fault(ctx.i18n, fault);
    }

    if ResponsiveLayout::from_size(ctx.window_size).blocks_interaction() {
        return orientation::view(ctx.i18n);
    }

    let wheel = wheel_screen::view(WheelViewContext {
        i18n: ctx.i18n,
        store: ctx.store,
        phase: ctx.phase,
        pulse_elapsed: ctx.pulse_elapsed,
        window_size: ctx.window_size,
    })
    .map(Message::Wheel);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(wheel);

    if ctx.phase == Phase::Revealed {
        if let Some(winner) = ctx.winner {
            layers = layers.push(
                result_card::view(ResultViewContext {
                    i18n: ctx.i18n,
                    winner,
                    confetti_elapsed: ctx.confetti_elapsed,
                    show_hint: ctx.show_hint,
                })
                .map(Message::Result),
            );
        }
    }

    if ctx.letter_open {
        layers = layers.push(
            read_more::view(LetterViewContext { i18n: ctx.i18n }).map(Message::Letter),
        );
    }

    layers.into()
}

fn view_fault<'a>(i18n: &'a I18n, fault: &'a str) -> Element<'a, Message> {
    let notice = ErrorDisplay::new(i18n.tr("fault-title"))
        .detail(fault)
        .action(i18n.tr("fault-retry-button"), Message::RetryFromFault)
        .view();

    Container::new(notice)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::app_background)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_renders_without_overlays() {
        let i18n = I18n::default();
        let store = ChoiceStore::with_defaults();
        let _element = view(ViewContext {
            i18n: &i18n,
            store: &store,
            phase: Phase::Idle,
            winner: None,
            pulse_elapsed: None,
            confetti_elapsed: 0.0,
            show_hint: false,
            window_size: Size::new(1280.0, 800.0),
            letter_open: false,
            fault: None,
        });
    }

    #[test]
    fn fault_takes_precedence_over_everything() {
        let i18n = I18n::default();
        let store = ChoiceStore::with_defaults();
        let _element = view(ViewContext {
            i18n: &i18n,
            store: &store,
            phase: Phase::Idle,
            winner: None,
            pulse_elapsed: None,
            confetti_elapsed: 0.0,
            show_hint: false,
            window_size: Size::new(400.0, 900.0),
            letter_open: true,
            fault: Some("boom"),
        });
    }
}
