mod display_state;
mod mode;
mod popup;
mod theme;
mod transport_state;

pub use display_state::{Control, DisplayState, HitRegions, NO_MEDIA, SeekBar};
pub use mode::Mode;
pub use popup::{PopupState, PopupType};
pub use theme::*;
pub use transport_state::TransportState;

use crate::{
    domain::{Playlist, Visualizer},
    settings::{FeatureSet, Settings},
};
use anyhow::Error;

pub struct UiState {
    pub(crate) playlist: Playlist,
    pub(crate) transport: TransportState,
    pub(crate) display_state: DisplayState,

    pub(crate) popup: PopupState,
    pub(crate) theme_manager: ThemeManager,
    pub(crate) visualizer: Visualizer,

    features: FeatureSet,
}

impl UiState {
    pub fn new(settings: &Settings) -> Self {
        Self::with_themes(settings, ThemeManager::new(settings.theme.as_deref()))
    }

    pub fn with_themes(settings: &Settings, theme_manager: ThemeManager) -> Self {
        UiState {
            playlist: Playlist::default(),
            transport: TransportState::new(settings.initial_volume),
            display_state: DisplayState::new(),

            popup: PopupState::new(),
            theme_manager,
            visualizer: Visualizer::new(settings.visualizer, settings.bar_count),

            features: settings.features,
        }
    }

    pub fn features(&self) -> FeatureSet {
        self.features
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn set_error(&mut self, e: Error) {
        tracing::warn!("{e:#}");
        self.show_popup(PopupType::Error(format!("{e:#}")));
    }

    /// Esc: drop whatever popup is up.
    pub fn soft_reset(&mut self) {
        if self.popup.is_open() {
            self.close_popup();
        }
    }
}

fn new_textarea(placeholder: &str) -> tui_textarea::TextArea<'static> {
    let mut input = tui_textarea::TextArea::default();
    input.set_cursor_line_style(ratatui::style::Style::default());
    input.set_placeholder_text(format!(" {placeholder}: "));

    input
}
