use super::POPUP_PADDING;
use crate::ui_state::UiState;
use ratatui::{
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    widgets::{Block, BorderType, Padding, Paragraph, StatefulWidget, Widget},
};

/// Path entry for files and directories.
pub struct OpenPrompt;
impl StatefulWidget for OpenPrompt {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = state.theme().clone();

        let block = Block::bordered()
            .title(" Open Media ")
            .title_bottom(" [Enter] open / [Esc] cancel ")
            .title_alignment(ratatui::layout::Alignment::Center)
            .border_type(BorderType::Double)
            .border_style(Style::new().fg(theme.border))
            .bg(theme.bg_panel)
            .padding(POPUP_PADDING);

        let inner = block.inner(area);
        block.render(area, buf);

        let [hint, input] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).areas(inner);

        Paragraph::new("A media file or a directory to add:")
            .fg(theme.text_muted)
            .render(hint, buf);

        state.popup.input.set_block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .fg(theme.accent)
                .padding(Padding {
                    left: 1,
                    right: 1,
                    top: 0,
                    bottom: 0,
                }),
        );
        state.popup.input.set_style(Style::new().fg(theme.text));

        state.popup.input.render(input, buf);
    }
}
