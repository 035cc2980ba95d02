// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers receive an `UpdateContext` of mutable references into the
//! app state. All timing decisions go through `Instant`s carried by the
//! messages (or taken once at the top of a handler), never through
//! widget state.

use super::Message;
use crate::config::{LETTER_AUDIO_DELAY, NEW_CHOICE_TEXT};
use crate::media::{Cue, CuePlayer};
use crate::ui::read_more::{self, Event as LetterEvent};
use crate::ui::result_card::{self, Event as ResultEvent};
use crate::ui::wheel_screen::{self, Event as WheelEvent};
use crate::wheel::{ChoiceStore, Sequencer, TickOutcome};
use iced::Task;
use rand::rngs::SmallRng;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub store: &'a mut ChoiceStore,
    pub sequencer: &'a mut Sequencer,
    pub rng: &'a mut SmallRng,
    pub cues: &'a CuePlayer,
    pub letter_open: &'a mut bool,
    /// Bumped on every letter open and close so in-flight audio delays
    /// can tell whether they are stale.
    pub letter_epoch: &'a mut u64,
}

/// Handles messages from the wheel screen.
pub fn handle_wheel_message(
    ctx: &mut UpdateContext<'_>,
    message: wheel_screen::Message,
) -> Task<Message> {
    match wheel_screen::update(message) {
        WheelEvent::ChoiceTextChanged(id, value) => {
            if ctx.sequencer.is_idle() {
                ctx.store.update(id, &value);
            }
            Task::none()
        }
        WheelEvent::RemoveChoice(id) => {
            if ctx.sequencer.is_idle() {
                ctx.store.remove(id);
            }
            Task::none()
        }
        WheelEvent::AddChoice => {
            if ctx.sequencer.is_idle() {
                ctx.store.add(NEW_CHOICE_TEXT);
            }
            Task::none()
        }
        WheelEvent::ClearAll => {
            if ctx.sequencer.is_idle() {
                ctx.store.clear();
            }
            Task::none()
        }
        WheelEvent::ChooseRequested => {
            ctx.sequencer.choose(ctx.store, ctx.rng, Instant::now());
            Task::none()
        }
        WheelEvent::LetterRequested => open_letter(ctx),
    }
}

/// Handles messages from the result overlay.
pub fn handle_result_message(
    ctx: &mut UpdateContext<'_>,
    message: result_card::Message,
) -> Task<Message> {
    match result_card::update(message) {
        ResultEvent::Close => {
            ctx.sequencer.close();
        }
        ResultEvent::WinnerClicked => {
            if let Some(winner) = ctx.sequencer.winner() {
                if winner.is_link() {
                    let url = winner.link_url();
                    if let Err(err) = opener::open(&url) {
                        eprintln!("Failed to open {url}: {err}");
                    }
                }
            }
        }
    }
    Task::none()
}

/// Handles messages from the letter overlay.
pub fn handle_letter_message(
    ctx: &mut UpdateContext<'_>,
    message: read_more::Message,
) -> Task<Message> {
    match read_more::update(message) {
        LetterEvent::Close => {
            close_letter(ctx);
        }
    }
    Task::none()
}

/// Advances the sequencer clock. Fires the celebration cue exactly once,
/// on the tick that discloses the winner.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    if ctx.sequencer.tick(now) == TickOutcome::Revealed {
        ctx.cues.play(Cue::Tada);
    }
    Task::none()
}

/// Starts the letter's audio track, unless the overlay was closed or
/// reopened while the delay was pending.
pub fn handle_letter_audio_due(ctx: &mut UpdateContext<'_>, epoch: u64) -> Task<Message> {
    if *ctx.letter_open && epoch == *ctx.letter_epoch {
        ctx.cues.play(Cue::Letter);
    }
    Task::none()
}

fn open_letter(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.letter_open = true;
    *ctx.letter_epoch += 1;
    let epoch = *ctx.letter_epoch;
    Task::perform(
        async { tokio::time::sleep(LETTER_AUDIO_DELAY).await },
        move |()| Message::LetterAudioDue(epoch),
    )
}

fn close_letter(ctx: &mut UpdateContext<'_>) {
    *ctx.letter_open = false;
    *ctx.letter_epoch += 1;
    ctx.cues.stop();
}
