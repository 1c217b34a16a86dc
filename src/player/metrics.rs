use crate::player::PlaybackState;

use std::{
    sync::{
        Arc,
        atomic::{AtomicU8, AtomicU64, Ordering},
    },
    time::Duration,
};

/// Engine state published by the player thread and read by the UI thread
/// on every refresh tick.
pub struct PlaybackMetrics {
    state: AtomicU8,
    elapsed_ms: AtomicU64,
    length_ms: AtomicU64,
    volume: AtomicU8,
}

impl PlaybackMetrics {
    pub fn new() -> Arc<Self> {
        Arc::new(PlaybackMetrics {
            state: AtomicU8::new(PlaybackState::Stopped.into()),
            elapsed_ms: AtomicU64::new(0),
            length_ms: AtomicU64::new(0),
            volume: AtomicU8::new(100),
        })
    }

    pub fn get_state(&self) -> PlaybackState {
        self.state
            .load(Ordering::Relaxed)
            .try_into()
            .unwrap_or(PlaybackState::Stopped)
    }

    pub fn get_elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms.load(Ordering::Relaxed))
    }

    /// Zero when the engine could not determine the length.
    pub fn get_length(&self) -> Duration {
        Duration::from_millis(self.length_ms.load(Ordering::Relaxed))
    }

    pub fn get_volume(&self) -> u8 {
        self.volume.load(Ordering::Relaxed)
    }

    pub fn is_paused(&self) -> bool {
        PlaybackState::Paused == self.get_state()
    }

    pub fn is_stopped(&self) -> bool {
        PlaybackState::Stopped == self.get_state()
    }

    pub fn set_playback_state(&self, state: PlaybackState) {
        self.state.store(state.into(), Ordering::Relaxed);
    }

    pub fn set_elapsed(&self, d: Duration) {
        self.elapsed_ms
            .store(d.as_millis() as u64, Ordering::Relaxed)
    }

    pub fn set_length(&self, d: Option<Duration>) {
        let ms = d.map(|d| d.as_millis() as u64).unwrap_or(0);
        self.length_ms.store(ms, Ordering::Relaxed)
    }

    pub fn set_volume(&self, volume: u8) {
        self.volume.store(volume, Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.set_elapsed(Duration::ZERO);
        self.set_playback_state(PlaybackState::Stopped);
    }
}
