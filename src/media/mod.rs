// SPDX-License-Identifier: MPL-2.0
//! Best-effort audio cues.
//!
//! The app stays fully usable without sound: every failure in this module
//! is logged with `eprintln!` and swallowed, leaving the player in a
//! silent no-op state.

mod audio_output;
mod wav;

pub use audio_output::AudioOutput;
pub use wav::{decode, WavAudio};

use crate::error::AudioError;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/audio/"]
struct CueAssets;

/// The sound cues the app can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Celebration on winner reveal.
    Tada,
    /// Background track for the letter overlay.
    Letter,
}

impl Cue {
    fn asset_name(self) -> &'static str {
        match self {
            Cue::Tada => "tada.wav",
            Cue::Letter => "letter.wav",
        }
    }
}

/// Plays embedded cues through a lazily opened output stream.
///
/// Construction never fails; when the device is unavailable the player
/// degrades to a silent no-op.
pub struct CuePlayer {
    output: Option<AudioOutput>,
    enabled: bool,
}

impl CuePlayer {
    /// Opens the output device. Device failures are logged and leave the
    /// player silent.
    #[must_use]
    pub fn new(enabled: bool, volume: f32) -> Self {
        let output = if enabled {
            match AudioOutput::new(volume) {
                Ok(output) => Some(output),
                Err(err) => {
                    eprintln!("Audio disabled: {err}");
                    None
                }
            }
        } else {
            None
        };
        Self { output, enabled }
    }

    /// A player that never produces sound, for tests and `--mute` runs.
    #[must_use]
    pub fn silent() -> Self {
        Self {
            output: None,
            enabled: false,
        }
    }

    /// Queues a cue for playback. Decode or device failures are logged
    /// and swallowed.
    pub fn play(&self, cue: Cue) {
        if !self.enabled {
            return;
        }
        let Some(output) = &self.output else {
            return;
        };

        match load_cue(cue) {
            Ok(audio) => {
                let samples = audio.adapt_to(output.sample_rate(), output.channels());
                output.enqueue(&samples);
            }
            Err(err) => {
                eprintln!("Failed to play {:?} cue: {err}", cue);
            }
        }
    }

    /// Stops whatever is playing. Used when the letter overlay is
    /// dismissed before (or while) its track plays.
    pub fn stop(&self) {
        if let Some(output) = &self.output {
            output.stop();
        }
    }

    /// Whether any cue audio is still queued.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.output.as_ref().is_some_and(AudioOutput::is_playing)
    }
}

fn load_cue(cue: Cue) -> Result<WavAudio, AudioError> {
    let name = cue.asset_name();
    let asset =
        CueAssets::get(name).ok_or_else(|| AudioError::MissingAsset(name.to_string()))?;
    decode(asset.data.as_ref())
}
