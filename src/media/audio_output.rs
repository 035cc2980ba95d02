// SPDX-License-Identifier: MPL-2.0
//! Audio output using cpal for cue playback.
//!
//! A single output stream stays alive for the process lifetime; cues are
//! queued into a shared sample buffer that the device callback drains.
//! Stopping clears the buffer, which is all the cancellation the cue
//! flows need. The volume is fixed when the stream opens; it comes from
//! the persisted settings once per run.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::{Arc, Mutex};

use crate::error::{AudioError, Result};

/// Cap on queued samples: one minute at 48 kHz stereo. Cues are a few
/// seconds long, so hitting this means a caller bug.
const MAX_QUEUED_SAMPLES: usize = 48_000 * 2 * 60;

/// Quadratic curve keeps the volume setting perceptually linear.
fn perceptual_gain(volume: f32) -> f32 {
    volume * volume
}

/// Audio output stream manager for the system's default device.
pub struct AudioOutput {
    buffer: Arc<Mutex<Vec<f32>>>,
    sample_rate: u32,
    channels: u16,
    /// The audio stream (kept alive to maintain playback).
    _stream: cpal::Stream,
}

impl AudioOutput {
    /// Opens the default output device and starts a live stream at the
    /// given volume.
    ///
    /// # Errors
    ///
    /// Returns an error if no output device exists, its configuration
    /// cannot be read, or the stream fails to start.
    pub fn new(volume: f32) -> Result<Self> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(AudioError::NoDevice)?;

        let supported_config = device
            .default_output_config()
            .map_err(|e| AudioError::StreamConfig(e.to_string()))?;

        let sample_rate = supported_config.sample_rate().0;
        let channels = supported_config.channels();

        let buffer: Arc<Mutex<Vec<f32>>> = Arc::new(Mutex::new(Vec::new()));
        let gain = perceptual_gain(volume);

        let stream = match supported_config.sample_format() {
            cpal::SampleFormat::F32 => Self::build_stream::<f32>(
                &device,
                &supported_config.into(),
                Arc::clone(&buffer),
                gain,
            )?,
            cpal::SampleFormat::I16 => Self::build_stream::<i16>(
                &device,
                &supported_config.into(),
                Arc::clone(&buffer),
                gain,
            )?,
            cpal::SampleFormat::U16 => Self::build_stream::<u16>(
                &device,
                &supported_config.into(),
                Arc::clone(&buffer),
                gain,
            )?,
            other => {
                return Err(
                    AudioError::StreamConfig(format!("unsupported sample format {other}")).into(),
                )
            }
        };

        stream
            .play()
            .map_err(|e| AudioError::Playback(e.to_string()))?;

        Ok(Self {
            buffer,
            sample_rate,
            channels,
            _stream: stream,
        })
    }

    /// Builds an audio output stream for a specific sample format.
    fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        buffer: Arc<Mutex<Vec<f32>>>,
        gain: f32,
    ) -> Result<cpal::Stream> {
        let stream = device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    let Ok(mut buf) = buffer.lock() else {
                        // Mutex poisoned, output silence
                        for sample in data.iter_mut() {
                            *sample = T::from_sample(0.0f32);
                        }
                        return;
                    };

                    for (i, sample) in data.iter_mut().enumerate() {
                        if i < buf.len() {
                            let amplified = (buf[i] * gain).clamp(-1.0, 0.999_999_9);
                            *sample = T::from_sample(amplified);
                        } else {
                            *sample = T::from_sample(0.0f32);
                        }
                    }

                    let consumed = data.len().min(buf.len());
                    buf.drain(..consumed);
                },
                |err| {
                    eprintln!("Audio output error: {err}");
                },
                None,
            )
            .map_err(|e| AudioError::StreamConfig(e.to_string()))?;

        Ok(stream)
    }

    /// Queues samples already adapted to the device's rate and channel
    /// count. Samples beyond the queue cap are dropped.
    pub fn enqueue(&self, samples: &[f32]) {
        if let Ok(mut buf) = self.buffer.lock() {
            let available = MAX_QUEUED_SAMPLES.saturating_sub(buf.len());
            let take = samples.len().min(available);
            buf.extend_from_slice(&samples[..take]);
        }
    }

    /// Stops playback by clearing the queue.
    pub fn stop(&self) {
        if let Ok(mut buf) = self.buffer.lock() {
            buf.clear();
        }
    }

    /// Whether any queued audio remains.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.buffer.lock().map(|buf| !buf.is_empty()).unwrap_or(false)
    }

    /// Returns the output sample rate.
    #[must_use]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Returns the number of output channels.
    #[must_use]
    pub fn channels(&self) -> u16 {
        self.channels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perceptual_gain_is_quadratic_and_keeps_the_ends() {
        assert!((perceptual_gain(0.0) - 0.0).abs() < 1e-6);
        assert!((perceptual_gain(0.5) - 0.25).abs() < 1e-6);
        assert!((perceptual_gain(1.0) - 1.0).abs() < 1e-6);
    }

    // Note: Tests that create AudioOutput require actual audio hardware
    // and are better suited for manual testing.
    #[test]
    #[ignore = "requires audio hardware"]
    fn audio_output_can_be_created() {
        let result = AudioOutput::new(0.8);
        if let Ok(output) = result {
            assert!(output.sample_rate() > 0);
            assert!(output.channels() > 0);
            assert!(!output.is_playing());
        }
    }
}
