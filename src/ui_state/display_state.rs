use crate::{
    DurationStyle, get_readable_duration,
    key_handler::Director,
    ui_state::{Mode, UiState},
};
use ratatui::{
    layout::{Position, Rect},
    widgets::ListState,
};
use std::time::Duration;

pub const NO_MEDIA: &str = "No media loaded";

/// The seek bar's own copy of engine time, refreshed once per tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeekBar {
    pub value_ms: u64,
    pub max_ms: u64,
}

impl SeekBar {
    pub fn ratio(&self) -> f64 {
        match self.max_ms {
            0 => 0.0,
            max => (self.value_ms.min(max) as f64) / max as f64,
        }
    }

    pub fn reset(&mut self) {
        *self = SeekBar::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Open,
    PlayPause,
    Stop,
    Clear,
    Fullscreen,
    Loop,
    Shuffle,
    Theme,
}

/// Screen areas recorded by the last render, used to route mouse input.
#[derive(Debug, Default)]
pub struct HitRegions {
    pub seek_bar: Rect,
    pub volume: Rect,
    pub playlist: Rect,
    pub buttons: Vec<(Control, Rect)>,
}

impl HitRegions {
    pub fn button_at(&self, pos: Position) -> Option<Control> {
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(control, _)| *control)
    }

    /// Fraction of `rect`'s width left of `column`, clamped to `[0, 1]`.
    pub fn fraction_along(rect: Rect, column: u16) -> f64 {
        if rect.width <= 1 {
            return 0.0;
        }
        let offset = column.saturating_sub(rect.x).min(rect.width - 1);
        offset as f64 / (rect.width - 1) as f64
    }
}

pub struct DisplayState {
    mode: Mode,
    pub playlist_pos: ListState,

    pub seek: SeekBar,
    pub elapsed_label: String,
    pub length_label: String,
    pub info: String,

    /// Video surface shown; otherwise the visualization canvas is.
    pub video_visible: bool,
    pub hit: HitRegions,
}

impl DisplayState {
    pub fn new() -> Self {
        DisplayState {
            mode: Mode::Normal,
            playlist_pos: ListState::default(),

            seek: SeekBar::default(),
            elapsed_label: clock(Duration::ZERO),
            length_label: clock(Duration::ZERO),
            info: NO_MEDIA.to_string(),

            video_visible: true,
            hit: HitRegions::default(),
        }
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn clock(d: Duration) -> String {
    get_readable_duration(d, DurationStyle::Clock)
}

impl UiState {
    pub fn get_mode(&self) -> Mode {
        self.display_state.mode
    }

    /// Fullscreen is only offered while video is loaded.
    pub fn set_mode(&mut self, mode: Mode) {
        match mode {
            Mode::Fullscreen if !self.can_fullscreen() => (),
            mode => self.display_state.mode = mode,
        }
    }

    pub fn can_fullscreen(&self) -> bool {
        self.has_media() && !self.transport.is_audio
    }

    pub fn set_info(&mut self, info: impl Into<String>) {
        self.display_state.info = info.into();
    }

    pub fn get_info(&self) -> &str {
        &self.display_state.info
    }

    pub fn set_progress(&mut self, elapsed: Duration, length: Duration) {
        self.display_state.seek.max_ms = length.as_millis() as u64;
        if !self.transport.is_seek_dragging {
            self.display_state.seek.value_ms = elapsed.as_millis() as u64;
        }
        self.display_state.elapsed_label = clock(elapsed);
        self.display_state.length_label = clock(length);
    }

    /// Seek value and both labels back to zero.
    pub fn reset_progress(&mut self) {
        self.display_state.seek.value_ms = 0;
        self.display_state.elapsed_label = clock(Duration::ZERO);
    }

    pub fn clear_progress(&mut self) {
        self.display_state.seek.reset();
        self.display_state.elapsed_label = clock(Duration::ZERO);
        self.display_state.length_label = clock(Duration::ZERO);
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.display_state.playlist_pos.selected()
    }

    pub fn highlight_row(&mut self, row: Option<usize>) {
        self.display_state.playlist_pos.select(row);
    }

    pub fn scroll(&mut self, director: Director) {
        let len = self.playlist.len();
        if len == 0 {
            self.display_state.playlist_pos.select(None);
            return;
        }

        let current = self.selected_row().unwrap_or(0);
        let new = match director {
            Director::Up(n) => current.saturating_sub(n),
            Director::Down(n) => (current + n).min(len - 1),
            Director::Top => 0,
            Director::Bottom => len - 1,
        };
        self.display_state.playlist_pos.select(Some(new));
    }

    /// Maps a terminal row inside the playlist area onto an entry index.
    pub fn row_at(&self, pos: Position) -> Option<usize> {
        let area = self.display_state.hit.playlist;
        if !area.contains(pos) {
            return None;
        }
        let idx = (pos.y - area.y) as usize + self.display_state.playlist_pos.offset();
        (idx < self.playlist.len()).then_some(idx)
    }
}
