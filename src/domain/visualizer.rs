use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{f64::consts::TAU, time::Duration};

pub const DEFAULT_BAR_COUNT: usize = 60;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualizerStyle {
    /// Travelling sine keyed to the playback position
    #[default]
    Pulse,
    /// Independent random heights every refresh
    Random,
}

impl std::fmt::Display for VisualizerStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VisualizerStyle::Pulse => write!(f, "pulse"),
            VisualizerStyle::Random => write!(f, "random"),
        }
    }
}

/// Cosmetic bar animation shown in place of the video surface for audio
/// media. Heights are fractions of the canvas height in `[0, 1]`.
pub struct Visualizer {
    style: VisualizerStyle,
    bars: Vec<f64>,
}

impl Visualizer {
    pub fn new(style: VisualizerStyle, bar_count: usize) -> Self {
        Visualizer {
            style,
            bars: vec![0.0; bar_count.max(1)],
        }
    }

    pub fn bars(&self) -> &[f64] {
        &self.bars
    }

    pub fn reset(&mut self) {
        self.bars.iter_mut().for_each(|b| *b = 0.0);
    }

    pub fn update<R: Rng + ?Sized>(&mut self, elapsed: Duration, rng: &mut R) {
        match self.style {
            VisualizerStyle::Pulse => {
                let t = elapsed.as_secs_f64();
                let count = self.bars.len();
                for (i, bar) in self.bars.iter_mut().enumerate() {
                    *bar = pulse_height(i, count, t);
                }
            }
            VisualizerStyle::Random => {
                for bar in self.bars.iter_mut() {
                    *bar = rng.random_range(0.0..=1.0);
                }
            }
        }
    }
}

/// `amplitude = sin(phase) * 0.3 + 0.7`, scaled into `[0.26, 0.5]` of the
/// canvas height.
pub fn pulse_height(idx: usize, count: usize, secs: f64) -> f64 {
    let phase = (idx as f64 / count as f64) * TAU + secs * 0.5;
    let amplitude = phase.sin() * 0.3 + 0.7;
    amplitude * 0.4 + 0.1
}
