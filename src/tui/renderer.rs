use super::{
    AppLayout, render_bg,
    widgets::{Controls, ErrorMsg, InfoLine, OpenPrompt, PlaylistView, SeekSlider, Surface},
};
use crate::ui_state::{Mode, PopupType, UiState};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::{Clear, StatefulWidget, Widget},
};

pub fn render(f: &mut Frame, state: &mut UiState) {
    let layout = AppLayout::new(f.area(), state);

    // Regions are rebuilt on every frame; anything not drawn can't be clicked.
    state.display_state.hit = Default::default();

    render_bg(state, f);
    Surface.render(layout.surface, f.buffer_mut(), state);
    SeekSlider.render(layout.seek_bar, f.buffer_mut(), state);

    if state.get_mode() != Mode::Fullscreen {
        PlaylistView.render(layout.playlist, f.buffer_mut(), state);
        InfoLine.render(layout.info, f.buffer_mut(), state);
        Controls.render(layout.controls, f.buffer_mut(), state);
    }

    if state.popup.is_open() {
        let popup_rect = match &state.popup.current {
            PopupType::Error(_) => centered_rect(40, 9, f.area()),
            _ => centered_rect(50, 8, f.area()),
        };

        Clear.render(popup_rect, f.buffer_mut());
        match &state.popup.current {
            PopupType::Open => OpenPrompt.render(popup_rect, f.buffer_mut(), state),
            PopupType::Error(_) => ErrorMsg.render(popup_rect, f.buffer_mut(), state),
            PopupType::None => (),
        }
    }
}

/// `percent_x` of the width, and `height` rows when it fits.
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let height = height.min(r.height);

    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(r);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);

    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        player::MediaTrack,
        settings::{FeatureSet, Settings},
        ui_state::{Control, ThemeManager},
    };
    use ratatui::{Terminal, backend::TestBackend, layout::Position};
    use std::path::PathBuf;

    fn ui(settings: &Settings) -> UiState {
        UiState::with_themes(settings, ThemeManager::with_theme_dir(None, None))
    }

    fn draw(state: &mut UiState) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal
    }

    fn controls(state: &UiState) -> Vec<Control> {
        state.display_state.hit.buttons.iter().map(|(c, _)| *c).collect()
    }

    #[test]
    fn records_hit_regions() {
        let mut state = ui(&Settings::default());
        state.playlist.add("/m/a.mp3");
        state.playlist.add("/m/b.mp3");
        draw(&mut state);

        let hit = &state.display_state.hit;
        assert!(hit.seek_bar.width > 0);
        assert!(hit.volume.width > 0);
        assert!(hit.playlist.height > 0);

        let first_row = Position::new(hit.playlist.x, hit.playlist.y);
        assert_eq!(state.row_at(first_row), Some(0));
        let below = Position::new(hit.playlist.x, hit.playlist.y + 2);
        assert_eq!(state.row_at(below), None);

        let buttons = controls(&state);
        assert!(buttons.contains(&Control::Loop));
        assert!(buttons.contains(&Control::Theme));
        assert!(!buttons.contains(&Control::Fullscreen));
    }

    #[test]
    fn simple_preset_hides_loop_and_shuffle() {
        let settings = Settings {
            features: FeatureSet::simple(),
            ..Default::default()
        };
        let mut state = ui(&settings);
        draw(&mut state);

        let buttons = controls(&state);
        assert!(!buttons.contains(&Control::Loop));
        assert!(!buttons.contains(&Control::Shuffle));
        assert!(buttons.contains(&Control::Open));
    }

    #[test]
    fn fullscreen_keeps_only_surface_and_seek_bar() {
        let mut state = ui(&Settings::default());
        state.transport.loaded = Some(MediaTrack::new(1, PathBuf::from("/m/film.mkv")));
        state.set_mode(Mode::Fullscreen);
        draw(&mut state);

        let hit = &state.display_state.hit;
        assert!(hit.buttons.is_empty());
        assert_eq!(hit.playlist, Rect::default());
        assert_eq!(hit.seek_bar.y, 29);
    }

    #[test]
    fn error_popup_shows_the_message() {
        let mut state = ui(&Settings::default());
        state.show_popup(PopupType::Error("File not found: /nope".into()));
        let terminal = draw(&mut state);

        let screen = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(screen.contains("File not found: /nope"));
    }
}
