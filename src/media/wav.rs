// SPDX-License-Identifier: MPL-2.0
//! Minimal WAV reader for the embedded cue assets.
//!
//! Only canonical RIFF files with 16-bit PCM samples are accepted; the
//! assets shipped in the binary satisfy this, and anything else maps to
//! an [`AudioError`] that callers log and swallow.

use crate::error::AudioError;

/// Decoded audio: interleaved f32 samples normalized to [-1.0, 1.0].
#[derive(Debug, Clone)]
pub struct WavAudio {
    pub sample_rate: u32,
    pub channels: u16,
    pub samples: Vec<f32>,
}

impl WavAudio {
    /// Duration of the decoded audio in seconds.
    #[must_use]
    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 || self.channels == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / (self.sample_rate as f32 * f32::from(self.channels))
    }

    /// Converts to the output device's sample rate and channel count
    /// using linear interpolation. Mono is duplicated across channels;
    /// extra source channels are averaged down.
    #[must_use]
    pub fn adapt_to(&self, out_rate: u32, out_channels: u16) -> Vec<f32> {
        if self.samples.is_empty() || self.sample_rate == 0 || self.channels == 0 {
            return Vec::new();
        }

        let in_channels = usize::from(self.channels);
        let frames_in = self.samples.len() / in_channels;
        if frames_in == 0 {
            return Vec::new();
        }

        let frames_out = ((frames_in as u64 * u64::from(out_rate)) / u64::from(self.sample_rate))
            .max(1) as usize;
        let out_ch = usize::from(out_channels).max(1);
        let mut out = Vec::with_capacity(frames_out * out_ch);

        for frame in 0..frames_out {
            let src_pos = frame as f64 * f64::from(self.sample_rate) / f64::from(out_rate);
            let base = src_pos.floor() as usize;
            let frac = (src_pos - src_pos.floor()) as f32;
            let next = (base + 1).min(frames_in - 1);

            // Mix the source frame down to mono, then fan out.
            let mut mixed = 0.0f32;
            for ch in 0..in_channels {
                let a = self.samples[base * in_channels + ch];
                let b = self.samples[next * in_channels + ch];
                mixed += a + (b - a) * frac;
            }
            mixed /= in_channels as f32;

            for _ in 0..out_ch {
                out.push(mixed);
            }
        }

        out
    }
}

/// Parses a RIFF/WAVE byte stream holding 16-bit PCM samples.
pub fn decode(bytes: &[u8]) -> Result<WavAudio, AudioError> {
    if bytes.len() < 12 || &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
        return Err(AudioError::UnsupportedFormat(
            "not a RIFF/WAVE stream".to_string(),
        ));
    }

    let mut sample_rate = None;
    let mut channels = None;
    let mut data: Option<&[u8]> = None;

    let mut offset = 12;
    while offset + 8 <= bytes.len() {
        let chunk_id = &bytes[offset..offset + 4];
        let chunk_len = u32::from_le_bytes(
            bytes[offset + 4..offset + 8]
                .try_into()
                .map_err(|_| AudioError::UnsupportedFormat("truncated chunk header".into()))?,
        ) as usize;
        let body_start = offset + 8;
        let body_end = body_start
            .checked_add(chunk_len)
            .filter(|end| *end <= bytes.len())
            .ok_or_else(|| AudioError::UnsupportedFormat("truncated chunk body".to_string()))?;
        let body = &bytes[body_start..body_end];

        match chunk_id {
            b"fmt " => {
                if body.len() < 16 {
                    return Err(AudioError::UnsupportedFormat("short fmt chunk".to_string()));
                }
                let audio_format = u16::from_le_bytes([body[0], body[1]]);
                let num_channels = u16::from_le_bytes([body[2], body[3]]);
                let rate = u32::from_le_bytes([body[4], body[5], body[6], body[7]]);
                let bits = u16::from_le_bytes([body[14], body[15]]);

                if audio_format != 1 {
                    return Err(AudioError::UnsupportedFormat(format!(
                        "compression format {audio_format}, want PCM"
                    )));
                }
                if bits != 16 {
                    return Err(AudioError::UnsupportedFormat(format!(
                        "{bits}-bit samples, want 16"
                    )));
                }
                if num_channels == 0 {
                    return Err(AudioError::UnsupportedFormat("zero channels".to_string()));
                }
                sample_rate = Some(rate);
                channels = Some(num_channels);
            }
            b"data" => data = Some(body),
            _ => {} // LIST/INFO chunks and friends are skipped
        }

        // Chunks are word-aligned.
        offset = body_end + (chunk_len & 1);
    }

    let sample_rate =
        sample_rate.ok_or_else(|| AudioError::UnsupportedFormat("missing fmt chunk".into()))?;
    let channels =
        channels.ok_or_else(|| AudioError::UnsupportedFormat("missing fmt chunk".into()))?;
    let data = data.ok_or_else(|| AudioError::UnsupportedFormat("missing data chunk".into()))?;

    let samples = data
        .chunks_exact(2)
        .map(|pair| f32::from(i16::from_le_bytes([pair[0], pair[1]])) / 32768.0)
        .collect();

    Ok(WavAudio {
        sample_rate,
        channels,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a canonical 16-bit PCM WAV in memory.
    fn build_wav(sample_rate: u32, channels: u16, frames: &[i16]) -> Vec<u8> {
        let data_len = frames.len() * 2;
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(36 + data_len as u32).to_le_bytes());
        bytes.extend_from_slice(b"WAVE");
        bytes.extend_from_slice(b"fmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
        bytes.extend_from_slice(&channels.to_le_bytes());
        bytes.extend_from_slice(&sample_rate.to_le_bytes());
        let byte_rate = sample_rate * u32::from(channels) * 2;
        bytes.extend_from_slice(&byte_rate.to_le_bytes());
        bytes.extend_from_slice(&(channels * 2).to_le_bytes()); // block align
        bytes.extend_from_slice(&16u16.to_le_bytes()); // bits
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&(data_len as u32).to_le_bytes());
        for sample in frames {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn decodes_canonical_pcm() {
        let wav = build_wav(44_100, 1, &[0, 16_384, -16_384, 32_767]);
        let decoded = decode(&wav).expect("valid wav decodes");
        assert_eq!(decoded.sample_rate, 44_100);
        assert_eq!(decoded.channels, 1);
        assert_eq!(decoded.samples.len(), 4);
        assert!((decoded.samples[1] - 0.5).abs() < 1e-3);
        assert!((decoded.samples[2] + 0.5).abs() < 1e-3);
    }

    #[test]
    fn rejects_non_riff_data() {
        let err = decode(b"OggS\0\0\0\0\0\0\0\0\0\0").unwrap_err();
        assert!(matches!(err, AudioError::UnsupportedFormat(_)));
    }

    #[test]
    fn rejects_non_pcm_format() {
        let mut wav = build_wav(44_100, 1, &[0, 0]);
        // Patch the compression code to IEEE float.
        wav[20] = 3;
        let err = decode(&wav).unwrap_err();
        assert!(matches!(err, AudioError::UnsupportedFormat(_)));
    }

    #[test]
    fn rejects_truncated_data_chunk() {
        let mut wav = build_wav(44_100, 1, &[0, 0, 0, 0]);
        wav.truncate(wav.len() - 3);
        assert!(decode(&wav).is_err());
    }

    #[test]
    fn adapt_duplicates_mono_to_stereo() {
        let audio = WavAudio {
            sample_rate: 48_000,
            channels: 1,
            samples: vec![0.25, -0.25],
        };
        let out = audio.adapt_to(48_000, 2);
        assert_eq!(out.len(), 4);
        assert_eq!(out[0], out[1]);
        assert_eq!(out[2], out[3]);
    }

    #[test]
    fn adapt_resamples_to_device_rate() {
        let audio = WavAudio {
            sample_rate: 22_050,
            channels: 1,
            samples: vec![0.0; 22_050],
        };
        let out = audio.adapt_to(44_100, 1);
        assert_eq!(out.len(), 44_100);
    }

    #[test]
    fn duration_accounts_for_channels() {
        let audio = WavAudio {
            sample_rate: 44_100,
            channels: 2,
            samples: vec![0.0; 88_200],
        };
        assert!((audio.duration_secs() - 1.0).abs() < 1e-6);
    }
}
