// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Config(String),
    Audio(AudioError),
}

/// Specific error types for audio cue playback issues.
///
/// Audio is best-effort everywhere: callers log these and carry on
/// without sound.
#[derive(Debug, Clone)]
pub enum AudioError {
    /// No output device is available on this system.
    NoDevice,

    /// The output device rejected our stream configuration.
    StreamConfig(String),

    /// The embedded cue asset is missing from the binary.
    MissingAsset(String),

    /// The cue asset is not a WAV file we can decode (16-bit PCM only).
    UnsupportedFormat(String),

    /// Generic playback failure with raw message.
    Playback(String),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::NoDevice => write!(f, "No audio output device found"),
            AudioError::StreamConfig(msg) => write!(f, "Audio stream config error: {}", msg),
            AudioError::MissingAsset(name) => write!(f, "Missing audio asset: {}", name),
            AudioError::UnsupportedFormat(msg) => {
                write!(f, "Unsupported audio format: {}", msg)
            }
            AudioError::Playback(msg) => write!(f, "Audio playback error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Audio(e) => write!(f, "Audio Error: {}", e),
        }
    }
}

impl From<AudioError> for Error {
    fn from(err: AudioError) -> Self {
        Error::Audio(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_config_error() {
        let err = Error::Config("bad field".to_string());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn from_io_error_produces_config_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Config(message) => assert!(message.contains("boom")),
            _ => panic!("expected Config variant"),
        }
    }

    #[test]
    fn audio_error_wraps_into_error() {
        let err: Error = AudioError::NoDevice.into();
        assert!(matches!(err, Error::Audio(AudioError::NoDevice)));
    }

    #[test]
    fn audio_error_display_mentions_asset_name() {
        let err = AudioError::MissingAsset("tada.wav".to_string());
        assert!(format!("{}", err).contains("tada.wav"));
    }

    #[test]
    fn audio_error_display_unsupported_format() {
        let err = AudioError::UnsupportedFormat("8-bit samples".to_string());
        assert!(format!("{}", err).contains("8-bit samples"));
    }
}
