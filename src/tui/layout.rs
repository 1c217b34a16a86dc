use crate::ui_state::{Mode, UiState};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub surface: Rect,
    pub playlist: Rect,
    pub info: Rect,
    pub seek_bar: Rect,
    pub controls: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, state: &UiState) -> Self {
        if state.get_mode() == Mode::Fullscreen {
            return Self::fullscreen(area);
        }

        let [upper_block, info, seek_bar, controls] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .areas(area);

        let playlist_percent = match area.width > 100 {
            true => 30,
            false => 40,
        };

        let [surface, _, playlist] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Percentage(playlist_percent),
            ])
            .areas(upper_block);

        AppLayout {
            surface,
            playlist,
            info,
            seek_bar,
            controls,
        }
    }

    /// Surface plus seek bar; everything else collapses to nothing.
    fn fullscreen(area: Rect) -> Self {
        let [surface, seek_bar] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Fill(1), Constraint::Length(1)])
            .areas(area);

        AppLayout {
            surface,
            playlist: Rect::default(),
            info: Rect::default(),
            seek_bar,
            controls: Rect::default(),
        }
    }
}
