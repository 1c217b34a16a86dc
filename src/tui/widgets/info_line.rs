use super::{PAUSE_ICON, PLAYING_ICON};
use crate::{truncate_at_last_space, ui_state::UiState};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Stylize,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

/// Title or error text on the left, playback status on the right.
pub struct InfoLine;
impl StatefulWidget for InfoLine {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = state.theme();

        let [left, right] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(24)])
            .areas(area);

        let info = truncate_at_last_space(state.get_info(), left.width.saturating_sub(2) as usize);
        Line::from(format!(" {info}"))
            .fg(theme.text)
            .left_aligned()
            .render(left, buf);

        let status = match (state.has_media(), state.is_playing()) {
            (true, true) => Span::from(format!("{PLAYING_ICON} playing ")).fg(theme.accent),
            (true, false) => Span::from(format!("{PAUSE_ICON} paused ")).fg(theme.text_muted),
            (false, _) => Span::from("idle ").fg(theme.text_muted),
        };

        let transport = &state.transport;
        let flags = [
            (transport.is_looping, "↻ "),
            (transport.is_shuffling, "⤮ "),
        ]
        .into_iter()
        .filter(|(on, _)| *on)
        .map(|(_, icon)| Span::from(icon).fg(theme.accent));

        Line::from_iter(flags.chain([status]))
            .right_aligned()
            .render(right, buf);
    }
}
