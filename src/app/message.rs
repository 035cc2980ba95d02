// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::read_more;
use crate::ui::result_card;
use crate::ui::wheel_screen;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Wheel(wheel_screen::Message),
    Result(result_card::Message),
    Letter(read_more::Message),
    /// Periodic tick that drives the pulse, the reveal, and confetti.
    Tick(Instant),
    /// The letter audio delay expired. The payload is the letter epoch
    /// at scheduling time; a stale epoch means the overlay was closed
    /// (or reopened) in the meantime and the cue must not start.
    LetterAudioDue(u64),
    WindowResized(iced::Size),
    WindowCloseRequested(iced::window::Id),
    /// Clear the fault notice and return to a usable wheel.
    RetryFromFault,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Start with audio cues disabled regardless of config.
    pub mute: bool,
}
