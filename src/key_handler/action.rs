use crate::{
    app_core::MediaDeck,
    key_handler::*,
    ui_state::{Control, HitRegions, Mode, PopupType, UiState},
};
use anyhow::Result;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind},
    layout::Position,
};
use std::time::Instant;

use KeyCode::*;

pub fn handle_key_event(key_event: KeyEvent, state: &UiState) -> Option<Action> {
    if let (C, Char('c')) = (key_event.modifiers, key_event.code) {
        return Some(Action::QUIT);
    }

    if state.popup.is_open() {
        return handle_popup(&key_event, &state.popup.current);
    }

    if let Some(action) = global_commands(&key_event, state) {
        return Some(action);
    }

    match state.features().keyboard_shortcuts {
        true => shortcuts(&key_event),
        false => None,
    }
}

/// Button accelerators and navigation. These exist in every variant.
fn global_commands(key: &KeyEvent, state: &UiState) -> Option<Action> {
    let features = state.features();

    match (key.modifiers, key.code) {
        (X, Char('q')) => Some(Action::QUIT),
        (X, Esc) => match state.get_mode() {
            Mode::Fullscreen => Some(Action::ToggleFullscreen),
            _ => Some(Action::SoftReset),
        },

        (X, Char('o')) => Some(Action::OpenPrompt),
        (X, Char('p')) => Some(Action::TogglePlayPause),
        (X, Char('s')) => Some(Action::Stop),
        (X, Char('c')) => Some(Action::ClearPlaylist),
        (X, Char('f')) => Some(Action::ToggleFullscreen),

        (X, Char('l')) if features.loop_shuffle => Some(Action::ToggleLoop),
        (X, Char('r')) if features.loop_shuffle => Some(Action::ToggleShuffle),
        (X, Char('t')) if features.theme_switcher => Some(Action::CycleTheme),

        (X, Enter) => Some(Action::PlaySelected),

        (X, Char('j')) | (X, Down) => Some(Action::Scroll(Director::Down(1))),
        (X, Char('k')) | (X, Up) => Some(Action::Scroll(Director::Up(1))),
        (X, PageDown) => Some(Action::Scroll(Director::Down(SCROLL_MID))),
        (X, PageUp) => Some(Action::Scroll(Director::Up(SCROLL_MID))),
        (X, Char('g')) | (X, Home) => Some(Action::Scroll(Director::Top)),
        (S, Char('G')) | (X, End) => Some(Action::Scroll(Director::Bottom)),

        _ => None,
    }
}

fn shortcuts(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Char(' ')) => Some(Action::TogglePlayPause),
        (X, Left) => Some(Action::SeekBack),
        (X, Right) => Some(Action::SeekForward),
        // `+` arrives shifted on most layouts
        (_, Char('+')) | (X, Char('=')) => Some(Action::VolumeUp),
        (_, Char('-')) => Some(Action::VolumeDown),
        _ => None,
    }
}

fn handle_popup(key: &KeyEvent, popup: &PopupType) -> Option<Action> {
    match popup {
        PopupType::Error(_) => Some(Action::ClosePopup),
        PopupType::Open => match key.code {
            Esc => Some(Action::ClosePopup),
            Enter => Some(Action::OpenConfirm),
            _ => Some(Action::PopupInput(*key)),
        },
        PopupType::None => None,
    }
}

pub fn handle_mouse_event(mouse: MouseEvent, state: &UiState) -> Option<Action> {
    let pos = Position::new(mouse.column, mouse.row);
    let hit = &state.display_state.hit;
    let dragging = state.transport.is_seek_dragging;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if state.popup.is_open() {
                return None;
            }

            if hit.seek_bar.contains(pos) {
                return Some(Action::SeekPress(HitRegions::fraction_along(
                    hit.seek_bar,
                    pos.x,
                )));
            }

            if hit.volume.contains(pos) {
                let level = HitRegions::fraction_along(hit.volume, pos.x) * 100.0;
                return Some(Action::SetVolume(level.round() as i32));
            }

            if let Some(control) = hit.button_at(pos) {
                return Some(Action::Press(control));
            }

            state.row_at(pos).map(|row| {
                match super::is_double_click(row, Instant::now()) {
                    true => Action::PlayIndex(row),
                    false => Action::SelectRow(row),
                }
            })
        }

        MouseEventKind::Drag(MouseButton::Left) if dragging => Some(Action::SeekDrag(
            HitRegions::fraction_along(hit.seek_bar, pos.x),
        )),

        MouseEventKind::Up(MouseButton::Left) if dragging => Some(Action::SeekRelease(
            HitRegions::fraction_along(hit.seek_bar, pos.x),
        )),

        MouseEventKind::ScrollDown if hit.playlist.contains(pos) => {
            Some(Action::Scroll(Director::Down(1)))
        }
        MouseEventKind::ScrollUp if hit.playlist.contains(pos) => {
            Some(Action::Scroll(Director::Up(1)))
        }

        _ => None,
    }
}

/// A bracketed paste is how terminals deliver dropped files. Inside the open
/// prompt it is plain text instead.
pub fn handle_paste(text: String, state: &UiState) -> Option<Action> {
    match &state.popup.current {
        PopupType::Open => Some(Action::PopupPaste(text)),
        PopupType::Error(_) => None,
        PopupType::None if state.features().drag_drop => Some(Action::Drop(text)),
        PopupType::None => {
            tracing::debug!("ignoring paste, drag and drop is disabled");
            None
        }
    }
}

impl MediaDeck {
    #[rustfmt::skip]
    pub fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            // Transport
            Action::TogglePlayPause => self.toggle_play_pause()?,
            Action::Stop            => self.stop()?,
            Action::SeekForward     => self.seek_by(self.seek_step_ms())?,
            Action::SeekBack        => self.seek_by(-self.seek_step_ms())?,
            Action::VolumeUp        => self.step_volume(1)?,
            Action::VolumeDown      => self.step_volume(-1)?,
            Action::SetVolume(v)    => self.set_volume(v)?,
            Action::ToggleLoop      => self.toggle_loop(),
            Action::ToggleShuffle   => self.toggle_shuffle(),

            Action::SeekPress(f)    => self.begin_seek_drag(f)?,
            Action::SeekDrag(f)     => self.drag_seek(f)?,
            Action::SeekRelease(f)  => self.end_seek_drag(f)?,

            // Playlist
            Action::PlaySelected    => self.play_selected()?,
            Action::PlayIndex(i)    => self.select_and_play(i)?,
            Action::SelectRow(i)    => self.ui.highlight_row(Some(i)),
            Action::Scroll(d)       => self.ui.scroll(d),
            Action::ClearPlaylist   => self.clear_playlist()?,
            Action::Drop(payload)   => self.drop_payload(&payload)?,

            // Display
            Action::Press(control)  => self.press(control)?,
            Action::ToggleFullscreen => self.toggle_fullscreen(),
            Action::CycleTheme      => self.ui.cycle_theme(),

            // Popups
            Action::OpenPrompt      => self.ui.show_popup(PopupType::Open),
            Action::OpenConfirm     => self.open_confirm()?,
            Action::PopupInput(key) => { self.ui.popup.input.input(key); }
            Action::PopupPaste(text) => { self.ui.popup.input.insert_str(text); }
            Action::ClosePopup      => self.ui.close_popup(),

            Action::SoftReset       => self.ui.soft_reset(),
            Action::QUIT            => self.ui.set_mode(Mode::QUIT),
        }
        Ok(())
    }

    fn press(&mut self, control: Control) -> Result<()> {
        let features = self.ui.features();

        match control {
            Control::Open       => self.ui.show_popup(PopupType::Open),
            Control::PlayPause  => self.toggle_play_pause()?,
            Control::Stop       => self.stop()?,
            Control::Clear      => self.clear_playlist()?,
            Control::Fullscreen => self.toggle_fullscreen(),
            Control::Loop if features.loop_shuffle      => self.toggle_loop(),
            Control::Shuffle if features.loop_shuffle   => self.toggle_shuffle(),
            Control::Theme if features.theme_switcher   => self.ui.cycle_theme(),
            _ => (),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{FeatureSet, Settings};
    use crate::ui_state::ThemeManager;
    use ratatui::{crossterm::event::KeyModifiers, layout::Rect};

    fn ui(features: FeatureSet) -> UiState {
        let settings = Settings {
            features,
            ..Default::default()
        };
        UiState::with_themes(&settings, ThemeManager::with_theme_dir(None, None))
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn shortcuts_follow_the_feature_flag() {
        let full = ui(FeatureSet::default());
        assert_eq!(
            handle_key_event(key(Char(' '), X), &full),
            Some(Action::TogglePlayPause)
        );
        assert_eq!(handle_key_event(key(Left, X), &full), Some(Action::SeekBack));
        assert_eq!(handle_key_event(key(Char('+'), S), &full), Some(Action::VolumeUp));
        assert_eq!(handle_key_event(key(Char('-'), X), &full), Some(Action::VolumeDown));

        let simple = ui(FeatureSet::simple());
        assert_eq!(handle_key_event(key(Char(' '), X), &simple), None);
        assert_eq!(handle_key_event(key(Right, X), &simple), None);
        assert_eq!(handle_key_event(key(Char('l'), X), &simple), None);
        assert_eq!(handle_key_event(key(Char('t'), X), &simple), Some(Action::CycleTheme));
        assert_eq!(handle_key_event(key(Char('p'), X), &simple), Some(Action::TogglePlayPause));
    }

    #[test]
    fn popup_captures_keys() {
        let mut state = ui(FeatureSet::default());
        state.show_popup(PopupType::Open);

        assert_eq!(
            handle_key_event(key(Char('q'), X), &state),
            Some(Action::PopupInput(key(Char('q'), X)))
        );
        assert_eq!(handle_key_event(key(Enter, X), &state), Some(Action::OpenConfirm));
        assert_eq!(handle_key_event(key(Char('c'), C), &state), Some(Action::QUIT));

        state.show_popup(PopupType::Error("boom".into()));
        assert_eq!(handle_key_event(key(Char(' '), X), &state), Some(Action::ClosePopup));
    }

    #[test]
    fn seek_drag_session_routing() {
        let mut state = ui(FeatureSet::default());
        state.display_state.hit.seek_bar = Rect::new(0, 10, 101, 1);

        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 50, 10), &state),
            Some(Action::SeekPress(0.5))
        );

        // No session, so drags and releases are not seeks
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 75, 3);
        assert_eq!(handle_mouse_event(drag, &state), None);

        state.transport.is_seek_dragging = true;
        assert_eq!(handle_mouse_event(drag, &state), Some(Action::SeekDrag(0.75)));
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 100, 3), &state),
            Some(Action::SeekRelease(1.0))
        );
    }

    #[test]
    fn clicks_on_volume_buttons_and_rows() {
        let mut state = ui(FeatureSet::default());
        state.display_state.hit.volume = Rect::new(0, 0, 11, 1);
        state.display_state.hit.buttons = vec![(Control::Stop, Rect::new(20, 0, 6, 1))];
        state.display_state.hit.playlist = Rect::new(0, 2, 30, 5);
        state.playlist.add("/m/a.mp3");
        state.playlist.add("/m/b.mp3");

        let down = MouseEventKind::Down(MouseButton::Left);
        assert_eq!(
            handle_mouse_event(mouse(down, 3, 0), &state),
            Some(Action::SetVolume(30))
        );
        assert_eq!(
            handle_mouse_event(mouse(down, 22, 0), &state),
            Some(Action::Press(Control::Stop))
        );
        assert_eq!(
            handle_mouse_event(mouse(down, 4, 3), &state),
            Some(Action::SelectRow(1))
        );
        assert_eq!(
            handle_mouse_event(mouse(down, 4, 3), &state),
            Some(Action::PlayIndex(1))
        );
        // below the last entry
        assert_eq!(handle_mouse_event(mouse(down, 4, 5), &state), None);
    }

    #[test]
    fn paste_is_a_drop_only_when_enabled() {
        let state = ui(FeatureSet::default());
        assert_eq!(
            handle_paste("/m/a.mp3".into(), &state),
            Some(Action::Drop("/m/a.mp3".into()))
        );

        let simple = ui(FeatureSet::simple());
        assert_eq!(handle_paste("/m/a.mp3".into(), &simple), None);

        let mut prompt = ui(FeatureSet::simple());
        prompt.show_popup(PopupType::Open);
        assert_eq!(
            handle_paste("~/Music".into(), &prompt),
            Some(Action::PopupPaste("~/Music".into()))
        );
    }
}
