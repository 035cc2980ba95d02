// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the wheel, the
//! overlays, and the audio cues.
//!
//! The `App` struct wires together the domains (choice store, sequencer,
//! localization, cue playback) and translates messages into side effects.
//! Timing-sensitive policy (when edits lock, when the winner discloses,
//! when cues fire) stays close to the main update loop so user-facing
//! behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, CONFETTI_DURATION};
use crate::i18n::fluent::I18n;
use crate::media::CuePlayer;
use crate::wheel::{ChoiceStore, Sequencer};
use iced::{window, Element, Size, Subscription, Task, Theme};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    store: ChoiceStore,
    sequencer: Sequencer,
    rng: SmallRng,
    cues: CuePlayer,
    window_size: Size,
    letter_open: bool,
    letter_epoch: u64,
    fault: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.sequencer.phase())
            .field("choices", &self.store.len())
            .field("letter_open", &self.letter_open)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            store: ChoiceStore::with_defaults(),
            sequencer: Sequencer::new(),
            rng: SmallRng::from_os_rng(),
            cues: CuePlayer::silent(),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            letter_open: false,
            letter_epoch: 0,
            fault: None,
        }
    }
}

impl App {
    /// Initializes application state from the persisted config and CLI
    /// flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let sound_enabled = !flags.mute && config.sound_enabled.unwrap_or(true);
        let cues = CuePlayer::new(sound_enabled, config.effective_volume());

        let app = App {
            i18n,
            cues,
            ..Self::default()
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let animating = self.sequencer.is_sequencing()
            || self
                .sequencer
                .revealed_elapsed(Instant::now())
                .is_some_and(|elapsed| elapsed < CONFETTI_DURATION);

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(animating),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            store: &mut self.store,
            sequencer: &mut self.sequencer,
            rng: &mut self.rng,
            cues: &self.cues,
            letter_open: &mut self.letter_open,
            letter_epoch: &mut self.letter_epoch,
        };

        match message {
            Message::Wheel(wheel_message) => update::handle_wheel_message(&mut ctx, wheel_message),
            Message::Result(result_message) => {
                update::handle_result_message(&mut ctx, result_message)
            }
            Message::Letter(letter_message) => {
                update::handle_letter_message(&mut ctx, letter_message)
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::LetterAudioDue(epoch) => update::handle_letter_audio_due(&mut ctx, epoch),
            Message::WindowResized(size) => {
                self.window_size = size;
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                self.cues.stop();
                window::close(id)
            }
            Message::RetryFromFault => {
                self.fault = None;
                self.sequencer = Sequencer::new();
                self.letter_open = false;
                self.letter_epoch += 1;
                self.cues.stop();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let now = Instant::now();
        view::view(view::ViewContext {
            i18n: &self.i18n,
            store: &self.store,
            phase: self.sequencer.phase(),
            winner: self.sequencer.winner(),
            pulse_elapsed: self.sequencer.sequencing_elapsed(now),
            confetti_elapsed: self
                .sequencer
                .revealed_elapsed(now)
                .map_or(0.0, |elapsed| elapsed.as_secs_f32()),
            show_hint: self.sequencer.result_message_due(now),
            window_size: self.window_size,
            letter_open: self.letter_open,
            fault: self.fault.as_deref(),
        })
    }
}
