//! Sound cues.
//!
//! Every cue is a short synthesized tone played through rodio, so no sound
//! files are needed.  Without an output device the manager stays silent;
//! playback is best-effort and never interrupts the game.

use std::f32::consts::TAU;

use rodio::{buffer::SamplesBuffer, OutputStream, OutputStreamHandle, Sink};

use crate::entities::GameEvent;

pub const SAMPLE_RATE: u32 = 44_100;

/// Peak amplitude of a note; keeps overlapping cues from clipping.
const VOLUME: f32 = 0.12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A word was cleared.
    Correct,
    /// A submission matched nothing.
    Error,
    /// Countdown step.
    Countdown,
    LevelUp,
    /// A word reached the floor.
    GameOver,
}

impl Cue {
    /// Cue to play for a simulation event, if any.
    pub fn for_event(event: &GameEvent) -> Option<Cue> {
        match event {
            GameEvent::Correct => Some(Cue::Correct),
            GameEvent::Mistake => Some(Cue::Error),
            GameEvent::CountdownTick => Some(Cue::Countdown),
            GameEvent::LevelUp { .. } => Some(Cue::LevelUp),
            GameEvent::GameOver => Some(Cue::GameOver),
            GameEvent::RecordImproved => None,
        }
    }

    /// Notes as `(frequency Hz, length s)`, played back to back.
    fn notes(self) -> &'static [(f32, f32)] {
        match self {
            Cue::Correct => &[(660.0, 0.06), (880.0, 0.1)],
            Cue::Error => &[(180.0, 0.18)],
            Cue::Countdown => &[(440.0, 0.12)],
            Cue::LevelUp => &[(523.0, 0.08), (659.0, 0.08), (784.0, 0.16)],
            Cue::GameOver => &[(392.0, 0.15), (330.0, 0.15), (262.0, 0.3)],
        }
    }

    /// Mono samples for this cue: sine notes with an exponential fade so
    /// each one ends without a click.
    pub fn samples(self, sample_rate: u32) -> Vec<f32> {
        let rate = sample_rate as f32;
        let mut samples = Vec::new();
        for &(freq, len) in self.notes() {
            let count = (rate * len) as usize;
            samples.extend((0..count).map(|i| {
                let t = i as f32 / rate;
                let envelope = (-5.0 * t / len).exp();
                (TAU * freq * t).sin() * VOLUME * envelope
            }));
        }
        samples
    }
}

struct Output {
    // Dropping the stream stops all playback.
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

/// Plays cues on the default output device, or nowhere if there is none.
pub struct AudioManager {
    output: Option<Output>,
}

impl AudioManager {
    /// Open the default output device, falling back to silence.
    pub fn new() -> Self {
        match OutputStream::try_default() {
            Ok((stream, handle)) => Self {
                output: Some(Output {
                    _stream: stream,
                    handle,
                }),
            },
            Err(e) => {
                log::warn!("No audio output, cues disabled: {}", e);
                Self::silent()
            }
        }
    }

    /// A manager that never makes a sound.
    pub fn silent() -> Self {
        Self { output: None }
    }

    pub fn is_silent(&self) -> bool {
        self.output.is_none()
    }

    /// Start `cue` without waiting for it to finish.
    pub fn play(&self, cue: Cue) {
        let Some(output) = &self.output else {
            return;
        };
        match Sink::try_new(&output.handle) {
            Ok(sink) => {
                sink.append(SamplesBuffer::new(1, SAMPLE_RATE, cue.samples(SAMPLE_RATE)));
                sink.detach();
            }
            Err(e) => log::debug!("Could not play {:?}: {}", cue, e),
        }
    }
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}
