use super::LABEL_WIDTH;
use crate::ui_state::UiState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Style, Stylize},
    text::Text,
    widgets::{LineGauge, StatefulWidget, Widget},
};

/// Elapsed label, seek bar, length label. The bar's area is recorded for
/// mouse seeking.
pub struct SeekSlider;
impl StatefulWidget for SeekSlider {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = state.theme().clone();
        let display = &state.display_state;

        let [elapsed, bar, length] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(LABEL_WIDTH),
                Constraint::Fill(1),
                Constraint::Length(LABEL_WIDTH),
            ])
            .areas(area);

        Text::from(display.elapsed_label.as_str())
            .fg(theme.text_muted)
            .centered()
            .render(elapsed, buf);

        Text::from(display.length_label.as_str())
            .fg(theme.text_muted)
            .centered()
            .render(length, buf);

        let (complete, incomplete) = theme.progress;
        let filled = match state.transport.is_seek_dragging {
            true => theme.accent,
            false => complete,
        };

        LineGauge::default()
            .filled_style(Style::new().fg(filled))
            .unfilled_style(Style::new().fg(incomplete))
            .filled_symbol("━")
            .unfilled_symbol("─")
            .label("")
            .ratio(display.seek.ratio())
            .render(bar, buf);

        state.display_state.hit.seek_bar = bar;
    }
}
