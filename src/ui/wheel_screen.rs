// SPDX-License-Identifier: MPL-2.0
//! The main screen: editable choices arranged around the center label.
//!
//! Items are positioned absolutely by stacking one full-size container
//! per item and offsetting its content with padding computed from the
//! layout math. While a draw is pending the center label pulses and all
//! editing controls are withheld.

use crate::config::{
    ITEM_HEIGHT, ITEM_WIDTH, PULSE_MAX_SCALE, PULSE_MIN_OPACITY, PULSE_PERIOD,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::wheel::{placements, Choice, ChoiceId, ChoiceStore, Phase};
use iced::widget::{button, text, text_input, tooltip, Column, Container, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Padding, Size, Theme,
};
use std::f32::consts::PI;
use std::time::Duration;

/// Contextual data needed to render the wheel screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a ChoiceStore,
    pub phase: Phase,
    /// Time spent sequencing, `Some` only while a draw is pending.
    pub pulse_elapsed: Option<Duration>,
    pub window_size: Size,
}

/// Messages emitted by the wheel screen.
#[derive(Debug, Clone)]
pub enum Message {
    ChoiceTextChanged(ChoiceId, String),
    RemoveChoice(ChoiceId),
    AddChoice,
    ClearAll,
    Choose,
    OpenLetter,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ChoiceTextChanged(ChoiceId, String),
    RemoveChoice(ChoiceId),
    AddChoice,
    ClearAll,
    ChooseRequested,
    LetterRequested,
}

/// Process a wheel screen message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::ChoiceTextChanged(id, value) => Event::ChoiceTextChanged(id, value),
        Message::RemoveChoice(id) => Event::RemoveChoice(id),
        Message::AddChoice => Event::AddChoice,
        Message::ClearAll => Event::ClearAll,
        Message::Choose => Event::ChooseRequested,
        Message::OpenLetter => Event::LetterRequested,
    }
}

/// Scale of the pulsing center label: `1 → 1.05 → 1` over one period.
#[must_use]
pub fn pulse_scale(elapsed: Duration) -> f32 {
    let phase = period_phase(elapsed);
    1.0 + (PULSE_MAX_SCALE - 1.0) * (PI * phase).sin()
}

/// Opacity of the pulsing center label: `1 → 0.8 → 1` over one period.
#[must_use]
pub fn pulse_opacity(elapsed: Duration) -> f32 {
    let phase = period_phase(elapsed);
    1.0 - (1.0 - PULSE_MIN_OPACITY) * (PI * phase).sin()
}

fn period_phase(elapsed: Duration) -> f32 {
    let period = PULSE_PERIOD.as_secs_f32();
    (elapsed.as_secs_f32() % period) / period
}

/// Render the wheel screen.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let editable = ctx.phase == Phase::Idle;
    let width = ctx.window_size.width;
    let height = ctx.window_size.height;

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(build_controls_layer(&ctx, editable))
        .push(build_center_label(&ctx));

    let placed = placements(ctx.store.len(), width, height);
    for (choice, placement) in ctx.store.choices().iter().zip(placed) {
        // Offsets are relative to the viewport center; reserve half the
        // scaled footprint so the item is centered on its anchor point.
        let item_width = ITEM_WIDTH * placement.scale;
        let item_height = ITEM_HEIGHT * placement.scale;
        let left = (width / 2.0 + placement.x - item_width / 2.0).max(0.0);
        let top = (height / 2.0 + placement.y - item_height / 2.0).max(0.0);

        let item = build_item(&ctx, choice, placement.scale, editable);
        layers = layers.push(
            Container::new(item)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Left)
                .align_y(Vertical::Top)
                .padding(Padding {
                    top,
                    right: 0.0,
                    bottom: 0.0,
                    left,
                }),
        );
    }

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::app_background)
        .into()
}

/// The pulsing "CHOOSE" label in the middle of the wheel.
fn build_center_label<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (scale, opacity) = match ctx.pulse_elapsed {
        Some(elapsed) => (pulse_scale(elapsed), pulse_opacity(elapsed)),
        None => (1.0, 1.0),
    };

    let label = Text::new(ctx.i18n.tr("center-label"))
        .size(typography::DISPLAY * scale)
        .style(move |_theme: &Theme| text::Style {
            color: Some(iced::Color {
                a: opacity,
                ..palette::PRIMARY_500
            }),
        });

    Container::new(label)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// One editable wheel item: a text input plus, when allowed, a remove
/// button.
fn build_item<'a>(
    ctx: &ViewContext<'a>,
    choice: &'a Choice,
    scale: f32,
    editable: bool,
) -> Element<'a, Message> {
    let id = choice.id();
    let mut input = text_input(&ctx.i18n.tr("choice-placeholder"), choice.text())
        .size(typography::BODY * scale)
        .width(Length::Fixed(ITEM_WIDTH * scale));
    if editable {
        input = input.on_input(move |value| Message::ChoiceTextChanged(id, value));
    }

    let mut row = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(input);

    // Every item is individually removable; an empty wheel is allowed.
    if editable {
        let remove = button(Text::new("×").size(typography::BODY * scale))
            .on_press(Message::RemoveChoice(id))
            .padding(spacing::XXS)
            .style(styles::button::remove);
        row = row.push(tooltip::Tooltip::new(
            remove,
            text(ctx.i18n.tr("remove-choice-tooltip")),
            tooltip::Position::FollowCursor,
        ));
    }

    Container::new(row)
        .padding(spacing::XXS)
        .style(styles::container::wheel_item)
        .into()
}

/// Bottom action row. Everything except the layout is withheld while a
/// draw is pending.
fn build_controls_layer<'a>(ctx: &ViewContext<'a>, editable: bool) -> Element<'a, Message> {
    let clear_all = button(Text::new(ctx.i18n.tr("button-clear-all")).size(typography::BODY))
        .on_press_maybe((editable && !ctx.store.is_empty()).then_some(Message::ClearAll))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);

    let add_option = button(Text::new(ctx.i18n.tr("button-add-option")).size(typography::BODY))
        .on_press_maybe((editable && !ctx.store.is_full()).then_some(Message::AddChoice))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);

    let choose = button(Text::new(ctx.i18n.tr("button-choose")).size(typography::BODY))
        .on_press_maybe((editable && !ctx.store.is_empty()).then_some(Message::Choose))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);

    let read_more = button(Text::new(ctx.i18n.tr("button-read-more")).size(typography::BODY_SM))
        .on_press_maybe(editable.then_some(Message::OpenLetter))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::card_close);

    let controls = Row::new()
        .spacing(spacing::MD)
        .push(clear_all)
        .push(add_option)
        .push(choose)
        .push(read_more);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .push(Space::new().height(Length::Fill))
        .push(controls)
        .push(Space::new().height(Length::Fixed(spacing::LG)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_map_to_matching_events() {
        assert!(matches!(update(Message::AddChoice), Event::AddChoice));
        assert!(matches!(update(Message::ClearAll), Event::ClearAll));
        assert!(matches!(update(Message::Choose), Event::ChooseRequested));
        assert!(matches!(update(Message::OpenLetter), Event::LetterRequested));
    }

    #[test]
    fn pulse_starts_and_ends_each_period_at_rest() {
        assert!((pulse_scale(Duration::ZERO) - 1.0).abs() < 1e-4);
        assert!((pulse_scale(PULSE_PERIOD) - 1.0).abs() < 1e-3);
        assert!((pulse_opacity(Duration::ZERO) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn pulse_peaks_at_half_period() {
        let peak = pulse_scale(PULSE_PERIOD / 2);
        assert!((peak - PULSE_MAX_SCALE).abs() < 1e-3);
        let dimmest = pulse_opacity(PULSE_PERIOD / 2);
        assert!((dimmest - PULSE_MIN_OPACITY).abs() < 1e-3);
    }

    #[test]
    fn pulse_values_stay_in_range() {
        for ms in (0..4000).step_by(50) {
            let elapsed = Duration::from_millis(ms);
            let scale = pulse_scale(elapsed);
            let opacity = pulse_opacity(elapsed);
            assert!((1.0..=PULSE_MAX_SCALE + 1e-4).contains(&scale));
            assert!((PULSE_MIN_OPACITY - 1e-4..=1.0).contains(&opacity));
        }
    }

    #[test]
    fn wheel_view_renders_for_all_phases() {
        let i18n = I18n::default();
        let store = ChoiceStore::with_defaults();
        for (phase, pulse_elapsed) in [
            (Phase::Idle, None),
            (Phase::Sequencing, Some(Duration::from_millis(500))),
            (Phase::Revealed, None),
        ] {
            let _element = view(ViewContext {
                i18n: &i18n,
                store: &store,
                phase,
                pulse_elapsed,
                window_size: Size::new(1280.0, 800.0),
            });
        }
    }

    #[test]
    fn sole_item_still_offers_its_remove_control() {
        let i18n = I18n::default();
        let mut store = ChoiceStore::new();
        store.add("last one standing").expect("store has room");
        let _element = view(ViewContext {
            i18n: &i18n,
            store: &store,
            phase: Phase::Idle,
            pulse_elapsed: None,
            window_size: Size::new(1280.0, 800.0),
        });
    }

    #[test]
    fn empty_store_still_renders() {
        let i18n = I18n::default();
        let store = ChoiceStore::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            store: &store,
            phase: Phase::Idle,
            pulse_elapsed: None,
            window_size: Size::new(1280.0, 800.0),
        });
    }
}
