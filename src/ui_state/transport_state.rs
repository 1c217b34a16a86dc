use crate::{player::MediaTrack, ui_state::UiState};

/// Flags owned by the transport controls. Only their handlers change them;
/// the renderer reads them for labels and visibility.
#[derive(Debug, Default)]
pub struct TransportState {
    pub is_playing: bool,
    pub is_audio: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
    /// Set between mouse-down and mouse-up on the seek bar. While set the
    /// refresh leaves the seek value alone.
    pub is_seek_dragging: bool,
    pub volume: u8,
    /// Media currently assigned to the engine.
    pub loaded: Option<MediaTrack>,
}

impl TransportState {
    pub fn new(volume: u8) -> Self {
        TransportState {
            volume: volume.min(100),
            ..Default::default()
        }
    }

    pub fn play_label(&self) -> &'static str {
        match self.is_playing {
            true => "Pause",
            false => "Play",
        }
    }

    pub fn loop_label(&self) -> &'static str {
        match self.is_looping {
            true => "Loop: On",
            false => "Loop: Off",
        }
    }

    pub fn shuffle_label(&self) -> &'static str {
        match self.is_shuffling {
            true => "Shuffle: On",
            false => "Shuffle: Off",
        }
    }
}

impl UiState {
    pub fn is_playing(&self) -> bool {
        self.transport.is_playing
    }

    pub fn has_media(&self) -> bool {
        self.transport.loaded.is_some()
    }

    pub fn loaded_track(&self) -> Option<&MediaTrack> {
        self.transport.loaded.as_ref()
    }

    pub fn volume(&self) -> u8 {
        self.transport.volume
    }
}
