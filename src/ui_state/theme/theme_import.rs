use serde::Deserialize;

/// On-disk layout of a `*.toml` theme. Colours are kept as strings until
/// `ThemeConfig::try_from` parses them, so one bad value names itself in the
/// error.
#[derive(Deserialize)]
pub struct ThemeImport {
    pub name: String,
    pub colors: ColorScheme,
    #[serde(default)]
    pub borders: BorderScheme,
}

#[derive(Deserialize)]
pub struct ColorScheme {
    #[serde(default = "default_dark")]
    pub dark: bool,

    pub bg: String,
    pub bg_panel: String,
    pub bg_error: String,

    pub text: String,
    pub text_muted: String,
    pub text_selected: String,

    pub accent: String,
    pub selection: String,
    pub border: String,

    pub progress_complete: String,
    pub progress_incomplete: String,

    #[serde(default = "default_viz_top")]
    pub visualizer_top: String,
    #[serde(default = "default_viz_bottom")]
    pub visualizer_bottom: String,
}

#[derive(Deserialize)]
pub struct BorderScheme {
    pub border_type: String,
}

impl Default for BorderScheme {
    fn default() -> Self {
        BorderScheme {
            border_type: "rounded".to_string(),
        }
    }
}

const fn default_dark() -> bool {
    true
}

fn default_viz_top() -> String {
    "#BB86FC".to_string()
}

fn default_viz_bottom() -> String {
    "#6200EE".to_string()
}
