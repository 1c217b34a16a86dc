mod backend;
mod backend_rodio;
mod core;
mod handle;
mod metrics;
mod track;

use std::time::Duration;

pub use backend::MediaEngine;
pub use backend_rodio::RodioEngine;
pub use handle::PlayerHandle;
pub use metrics::PlaybackMetrics;
pub use track::MediaTrack;

pub(crate) use self::core::PlayerCore;

#[derive(Debug, PartialEq)]
pub enum PlayerEvent {
    TrackStarted(MediaTrack),
    EndReached(MediaTrack),
    LoadFailed { track: MediaTrack, reason: String },
    Error(String),
}

#[derive(Debug, PartialEq)]
pub enum PlayerCommand {
    Load(MediaTrack),
    Pause,
    Resume,
    Stop,
    SetTime(Duration),
    SetPosition(f32),
    SetVolume(u8),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum PlaybackState {
    Stopped = 0,
    Playing = 1,
    Paused = 2,
}

impl From<PlaybackState> for u8 {
    fn from(state: PlaybackState) -> u8 {
        state as u8
    }
}

impl TryFrom<u8> for PlaybackState {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PlaybackState::Stopped),
            1 => Ok(PlaybackState::Playing),
            2 => Ok(PlaybackState::Paused),
            _ => Err(()),
        }
    }
}
