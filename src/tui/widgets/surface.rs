use crate::{
    domain::file_name,
    ui_state::{NO_MEDIA, UiState, blend},
};
use ratatui::{
    layout::{Constraint, Layout},
    style::Stylize,
    symbols::Marker,
    text::{Line, Text},
    widgets::{
        Block, Padding, Paragraph, StatefulWidget, Widget,
        canvas::{Canvas, Context, Line as CanvasLine},
    },
};

/// Either the video area or, for audio, the visualization canvas.
pub struct Surface;
impl StatefulWidget for Surface {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        match state.display_state.video_visible {
            true => VideoSurface.render(area, buf, state),
            false => Visualization.render(area, buf, state),
        }
    }
}

/// The engine owns the picture; the terminal only names what is showing.
struct VideoSurface;
impl StatefulWidget for VideoSurface {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = state.theme();

        let block = Block::bordered()
            .border_type(theme.border_type)
            .border_style(theme.border)
            .bg(theme.bg_panel);
        let inner = block.inner(area);
        block.render(area, buf);

        let text = match state.loaded_track() {
            Some(track) => Text::from_iter([
                Line::from(file_name(track.path())).fg(theme.text).bold(),
                Line::from("video is drawn by the playback engine").fg(theme.text_muted),
            ]),
            None => Text::from(NO_MEDIA).fg(theme.text_muted),
        };

        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(text.height() as u16),
            Constraint::Fill(1),
        ])
        .areas(inner);

        Paragraph::new(text).centered().render(middle, buf);
    }
}

struct Visualization;
impl StatefulWidget for Visualization {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = state.theme();
        let bars = state.visualizer.bars();
        let (top, bottom) = theme.visualizer;

        let v_marg = match area.height > 20 {
            true => ((area.height as f32) * 0.1) as u16,
            false => 0,
        };

        Canvas::default()
            .marker(Marker::HalfBlock)
            .x_bounds([0.0, bars.len().max(1) as f64])
            .y_bounds([0.0, 1.0])
            .paint(|ctx| draw_bars(ctx, bars, bottom, top))
            .background_color(theme.bg_panel)
            .block(
                Block::bordered()
                    .border_type(theme.border_type)
                    .border_style(theme.border)
                    .bg(theme.bg_panel)
                    .padding(Padding {
                        left: 1,
                        right: 1,
                        top: v_marg,
                        bottom: 0,
                    }),
            )
            .render(area, buf);
    }
}

const BAR_WIDTH: f64 = 0.7;
const STROKES: usize = 8;
const SEGMENTS: usize = 8;

/// Bars centred vertically, 70% of their slot wide, shaded bottom to top.
fn draw_bars(
    ctx: &mut Context,
    bars: &[f64],
    bottom: ratatui::style::Color,
    top: ratatui::style::Color,
) {
    let margin = (1.0 - BAR_WIDTH) / 2.0;

    for (i, height) in bars.iter().enumerate() {
        let height = height.clamp(0.0, 1.0);
        if height == 0.0 {
            continue;
        }
        let base = (1.0 - height) / 2.0;

        for segment in 0..SEGMENTS {
            let y1 = base + height * segment as f64 / SEGMENTS as f64;
            let y2 = base + height * (segment + 1) as f64 / SEGMENTS as f64;
            let color = blend(bottom, top, ((y1 + y2) / 2.0) as f32);

            for stroke in 0..STROKES {
                let x = i as f64 + margin + BAR_WIDTH * stroke as f64 / (STROKES - 1) as f64;
                ctx.draw(&CanvasLine {
                    x1: x,
                    y1,
                    x2: x,
                    y2,
                    color,
                });
            }
        }
    }
}
