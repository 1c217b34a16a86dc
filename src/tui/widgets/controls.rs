use crate::ui_state::{Control, ThemeConfig, UiState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Block, Gauge, Paragraph, StatefulWidget, Widget},
};

/// Transport buttons on the left, the volume gauge filling the rest.
pub struct Controls;
impl StatefulWidget for Controls {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = state.theme().clone();
        let buttons = visible_buttons(state);

        let mut constraints = buttons
            .iter()
            .map(|(_, label, _)| Constraint::Length(label.chars().count() as u16 + 4))
            .collect::<Vec<_>>();
        constraints.push(Constraint::Min(12));

        let areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        let mut hits = Vec::with_capacity(buttons.len());
        for ((control, label, lit), rect) in buttons.into_iter().zip(areas.iter()) {
            render_button(&label, lit, *rect, buf, &theme);
            hits.push((control, *rect));
        }

        let volume_area = areas.last().copied().unwrap_or_default();
        let volume = render_volume(state.volume(), volume_area, buf, &theme);

        let hit = &mut state.display_state.hit;
        hit.buttons = hits;
        hit.volume = volume;
    }
}

/// (control, label, highlighted) for every button the feature set offers.
fn visible_buttons(state: &UiState) -> Vec<(Control, String, bool)> {
    let features = state.features();
    let transport = &state.transport;

    let mut buttons = vec![
        (Control::Open, String::from("Open"), false),
        (
            Control::PlayPause,
            transport.play_label().to_string(),
            transport.is_playing,
        ),
        (Control::Stop, String::from("Stop"), false),
        (Control::Clear, String::from("Clear"), false),
    ];

    if state.can_fullscreen() {
        buttons.push((Control::Fullscreen, String::from("Fullscreen"), false));
    }

    if features.loop_shuffle {
        buttons.push((
            Control::Loop,
            transport.loop_label().to_string(),
            transport.is_looping,
        ));
        buttons.push((
            Control::Shuffle,
            transport.shuffle_label().to_string(),
            transport.is_shuffling,
        ));
    }

    if features.theme_switcher {
        buttons.push((
            Control::Theme,
            format!("Theme: {}", state.theme().name),
            false,
        ));
    }

    buttons
}

fn render_button(
    label: &str,
    lit: bool,
    area: Rect,
    buf: &mut ratatui::prelude::Buffer,
    theme: &ThemeConfig,
) {
    let fg = match lit {
        true => theme.accent,
        false => theme.text,
    };

    Paragraph::new(label)
        .centered()
        .fg(fg)
        .block(
            Block::bordered()
                .border_type(theme.border_type)
                .border_style(theme.border)
                .bg(theme.bg_panel),
        )
        .render(area, buf);
}

/// Returns the clickable part of the gauge.
fn render_volume(
    volume: u8,
    area: Rect,
    buf: &mut ratatui::prelude::Buffer,
    theme: &ThemeConfig,
) -> Rect {
    let block = Block::bordered()
        .title(" Volume ")
        .border_type(theme.border_type)
        .border_style(theme.border)
        .bg(theme.bg_panel);
    let inner = block.inner(area);

    Gauge::default()
        .block(block)
        .gauge_style(Style::new().fg(theme.accent).bg(theme.progress.1))
        .ratio(volume.min(100) as f64 / 100.0)
        .label(format!("{volume}%"))
        .render(area, buf);

    inner
}
