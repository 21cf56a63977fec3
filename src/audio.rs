//! The little C-major chord played when the first question gets a yes.
//!
//! Sound is optional: without the `audio` feature, or without an output
//! device, playback fails and the caller only logs it.

use std::f32::consts::TAU;
use std::time::Duration;
use thiserror::Error;

pub(crate) const SAMPLE_RATE: u32 = 44_100;
/// C4, E4, G4.
pub(crate) const CHORD_HZ: [f32; 3] = [261.63, 329.63, 392.00];
const GAIN_START: f32 = 0.1;
const GAIN_END: f32 = 0.01;
const LENGTH: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub(crate) enum AudioError {
    #[error("built without audio output")]
    Unsupported,
    #[cfg(feature = "audio")]
    #[error("no audio output device: {0}")]
    Stream(#[from] rodio::StreamError),
    #[cfg(feature = "audio")]
    #[error("could not start playback: {0}")]
    Play(#[from] rodio::PlayError),
    #[cfg(feature = "audio")]
    #[error("could not start the audio thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Mono sine chord with an exponential fade, one sample per `next`.
#[cfg_attr(not(feature = "audio"), allow(dead_code))]
#[derive(Clone, Debug)]
pub(crate) struct Chord {
    n: u32,
    total: u32,
}

#[cfg_attr(not(feature = "audio"), allow(dead_code))]
impl Chord {
    pub(crate) fn new() -> Self {
        Self {
            n: 0,
            total: (SAMPLE_RATE as f32 * LENGTH.as_secs_f32()) as u32,
        }
    }

    /// Per-voice gain at `t` seconds: GAIN_START falling exponentially to
    /// GAIN_END over the chord's length.
    pub(crate) fn gain_at(t: f32) -> f32 {
        let x = (t / LENGTH.as_secs_f32()).clamp(0.0, 1.0);
        GAIN_START * (GAIN_END / GAIN_START).powf(x)
    }
}

impl Iterator for Chord {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.n >= self.total {
            return None;
        }
        let t = self.n as f32 / SAMPLE_RATE as f32;
        self.n += 1;
        let gain = Self::gain_at(t);
        Some(CHORD_HZ.iter().map(|f| (TAU * f * t).sin() * gain).sum())
    }
}

#[cfg(feature = "audio")]
impl rodio::Source for Chord {
    fn current_frame_len(&self) -> Option<usize> {
        Some((self.total - self.n) as usize)
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(LENGTH)
    }
}

/// Where the chord goes.
pub(crate) trait Speaker {
    fn play_chord(&self) -> Result<(), AudioError>;
}

/// Plays nothing, successfully.
pub(crate) struct Muted;

impl Speaker for Muted {
    fn play_chord(&self) -> Result<(), AudioError> {
        Ok(())
    }
}

/// The default output device.
pub(crate) struct DeviceSpeaker;

#[cfg(feature = "audio")]
impl Speaker for DeviceSpeaker {
    fn play_chord(&self) -> Result<(), AudioError> {
        // The output stream must outlive playback and is not Send, so it is
        // opened and held on the playing thread.
        std::thread::Builder::new()
            .name("chord".into())
            .spawn(|| {
                if let Err(e) = play_blocking() {
                    tracing::debug!(error = %e, "audio unavailable");
                }
            })?;
        Ok(())
    }
}

#[cfg(feature = "audio")]
fn play_blocking() -> Result<(), AudioError> {
    let (_stream, handle) = rodio::OutputStream::try_default()?;
    let sink = rodio::Sink::try_new(&handle)?;
    sink.append(Chord::new());
    sink.sleep_until_end();
    Ok(())
}

#[cfg(not(feature = "audio"))]
impl Speaker for DeviceSpeaker {
    fn play_chord(&self) -> Result<(), AudioError> {
        Err(AudioError::Unsupported)
    }
}

/// Plays the chord; failure is never shown to the user, only logged.
pub(crate) fn chime(speaker: &dyn Speaker) {
    if let Err(e) = speaker.play_chord() {
        tracing::debug!(error = %e, "audio unavailable");
    }
}
