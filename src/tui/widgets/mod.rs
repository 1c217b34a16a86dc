mod controls;
mod error;
mod info_line;
mod open_prompt;
mod playlist_view;
mod seek_slider;
mod surface;

pub use controls::Controls;
pub use error::ErrorMsg;
pub use info_line::InfoLine;
pub use open_prompt::OpenPrompt;
pub use playlist_view::PlaylistView;
pub use seek_slider::SeekSlider;
pub use surface::Surface;

const LABEL_WIDTH: u16 = 7;
const PLAYING_ICON: &str = "▶";
const PAUSE_ICON: &str = "⏸";

static POPUP_PADDING: ratatui::widgets::Padding = ratatui::widgets::Padding {
    left: 2,
    right: 2,
    top: 1,
    bottom: 0,
};
