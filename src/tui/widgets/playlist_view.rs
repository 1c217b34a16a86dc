use super::{PAUSE_ICON, PLAYING_ICON};
use crate::ui_state::UiState;
use ratatui::{
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, HighlightSpacing, List, ListItem, Padding, StatefulWidget, Widget},
};

pub struct PlaylistView;
impl StatefulWidget for PlaylistView {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = state.theme().clone();
        let current = state.playlist.current_index().filter(|_| state.has_media());

        let marker = match state.transport.is_playing {
            true => PLAYING_ICON,
            false => PAUSE_ICON,
        };

        let items = state.playlist.entries().iter().enumerate().map(|(idx, entry)| {
            let (icon, fg) = match Some(idx) == current {
                true => (marker, theme.accent),
                false => (" ", theme.text),
            };

            ListItem::new(Line::from_iter([
                Span::from(format!("{icon} ")).fg(theme.accent),
                Span::from(entry.name().to_string()).fg(fg),
            ]))
        });

        let keymaps = match state.features().keyboard_shortcuts {
            true => " [o]pen | [c]lear | [⏎] play ",
            false => " [o]pen | [c]lear ",
        };

        let block = Block::bordered()
            .border_type(theme.border_type)
            .border_style(theme.border)
            .bg(theme.bg_panel)
            .title_top(
                Line::from(format!(" Playlist [{}] ", state.playlist.len()))
                    .left_aligned()
                    .fg(theme.text),
            )
            .title_bottom(Line::from(keymaps).centered().fg(theme.text_muted))
            .padding(Padding {
                left: 1,
                right: 1,
                top: 0,
                bottom: 0,
            });

        let inner = block.inner(area);
        block.render(area, buf);

        let list = List::new(items)
            .highlight_style(
                Style::new()
                    .fg(theme.text_selected)
                    .bg(theme.selection)
                    .italic(),
            )
            .highlight_spacing(HighlightSpacing::Never)
            .scroll_padding(2);

        StatefulWidget::render(list, inner, buf, &mut state.display_state.playlist_pos);
        state.display_state.hit.playlist = inner;
    }
}
