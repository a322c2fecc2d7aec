//! Synthesised sound cues for eating and dying.

use macroquad::audio::{PlaySoundParams, Sound, load_sound_from_bytes, play_sound};
use tracing::warn;

use crate::game::TickOutcome;

pub const SAMPLE_RATE: u32 = 44_100;
/// Length of the linear ramp at each end of a tone.
const RAMP_SECS: f32 = 0.005;

/// A sine tone, ready to be written as WAV.
#[derive(Debug, Clone, Copy)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_secs: f32,
    pub volume: f32,
}

impl Tone {
    /// 16-bit samples with a short fade in and out, so the tone starts and
    /// stops at zero instead of clicking.
    pub fn samples(&self, sample_rate: u32) -> Vec<i16> {
        let count = (self.duration_secs * sample_rate as f32) as usize;
        let ramp = ((RAMP_SECS * sample_rate as f32) as usize).clamp(1, count.max(1));
        let peak = self.volume.clamp(0.0, 1.0) * 0.7 * i16::MAX as f32;
        let step = std::f32::consts::TAU * self.frequency_hz / sample_rate as f32;
        (0..count)
            .map(|n| {
                let to_end = count - 1 - n;
                let envelope = (n.min(to_end) as f32 / ramp as f32).min(1.0);
                (peak * envelope * (step * n as f32).sin()) as i16
            })
            .collect()
    }

    /// Mono 16-bit PCM WAV bytes.
    pub fn to_wav(&self, sample_rate: u32) -> Vec<u8> {
        let samples = self.samples(sample_rate);
        let data_size = (samples.len() * 2) as u32;
        let mut wav = Vec::with_capacity(44 + samples.len() * 2);

        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&(36 + data_size).to_le_bytes());
        wav.extend_from_slice(b"WAVEfmt ");
        wav.extend_from_slice(&16u32.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
        wav.extend_from_slice(&1u16.to_le_bytes()); // mono
        wav.extend_from_slice(&sample_rate.to_le_bytes());
        wav.extend_from_slice(&(sample_rate * 2).to_le_bytes());
        wav.extend_from_slice(&2u16.to_le_bytes());
        wav.extend_from_slice(&16u16.to_le_bytes());
        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&data_size.to_le_bytes());
        for sample in samples {
            wav.extend_from_slice(&sample.to_le_bytes());
        }
        wav
    }
}

const EAT: Tone = Tone { frequency_hz: 880.0, duration_secs: 0.08, volume: 0.6 };
const DIE: Tone = Tone { frequency_hz: 110.0, duration_secs: 0.25, volume: 0.7 };

pub struct SoundCues {
    eat: Sound,
    die: Sound,
    volume: f32,
}

impl SoundCues {
    /// Returns `None` when the audio backend rejects the samples; the game
    /// then plays silently.
    pub async fn load(volume: f32) -> Option<Self> {
        let eat = load_sound_from_bytes(&EAT.to_wav(SAMPLE_RATE)).await;
        let die = load_sound_from_bytes(&DIE.to_wav(SAMPLE_RATE)).await;
        match (eat, die) {
            (Ok(eat), Ok(die)) => Some(Self {
                eat,
                die,
                volume: volume.clamp(0.0, 1.0),
            }),
            (Err(err), _) | (_, Err(err)) => {
                warn!("sound disabled: {err:?}");
                None
            }
        }
    }

    pub fn play(&self, outcome: TickOutcome) {
        let (sound, gain) = match outcome {
            TickOutcome::Ate => (&self.eat, 0.35),
            TickOutcome::Collided => (&self.die, 0.6),
            TickOutcome::Moved | TickOutcome::Idle => return,
        };
        play_sound(
            sound,
            PlaySoundParams {
                looped: false,
                volume: gain * self.volume,
            },
        );
    }
}
