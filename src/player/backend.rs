use crate::error::EngineError;
use std::{path::Path, time::Duration};

/// The playback engine boundary. Implementations own decoding, output and
/// timing; everything above this trait only issues transport calls and
/// reads back time, length and end-of-media.
pub trait MediaEngine {
    /// Assigns the media and starts playing it from the beginning.
    fn load(&mut self, path: &Path) -> Result<(), EngineError>;
    fn pause(&mut self);
    /// Resumes paused media, or restarts media that was stopped or ran out.
    fn resume(&mut self) -> Result<(), EngineError>;
    fn stop(&mut self);

    fn time(&self) -> Duration;
    fn length(&self) -> Option<Duration>;
    fn set_time(&mut self, time: Duration) -> Result<(), EngineError>;

    /// `position` is a fraction of the length in `[0, 1]`.
    fn set_position(&mut self, position: f32) -> Result<(), EngineError> {
        let length = self
            .length()
            .filter(|l| !l.is_zero())
            .ok_or(EngineError::UnknownLength)?;

        self.set_time(length.mul_f32(position.clamp(0.0, 1.0)))
    }

    /// `volume` is a percentage in `[0, 100]`.
    fn set_volume(&mut self, volume: u8);

    /// True once the media played through to its end. A manual stop does
    /// not count.
    fn track_ended(&self) -> bool;
}
