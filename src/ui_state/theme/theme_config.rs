use crate::ui_state::theme::{
    theme_import::ThemeImport,
    theme_utils::{parse_border_type, parse_color},
};
use anyhow::{Context, Result};
use ratatui::{style::Color, widgets::BorderType};
use std::path::Path;

pub const VIZ_TOP: Color = Color::Rgb(0xBB, 0x86, 0xFC);
pub const VIZ_BOTTOM: Color = Color::Rgb(0x62, 0x00, 0xEE);

#[derive(Clone, Debug, PartialEq)]
pub struct ThemeConfig {
    pub name: String,
    pub dark: bool,

    pub bg: Color,
    pub bg_panel: Color,
    pub bg_error: Color,

    pub text: Color,
    pub text_muted: Color,
    pub text_selected: Color,

    pub accent: Color,
    pub selection: Color,
    pub border: Color,
    pub border_type: BorderType,

    pub progress: (Color, Color),
    pub visualizer: (Color, Color),
}

impl ThemeConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file_str = std::fs::read_to_string(path)?;
        let config = toml::from_str::<ThemeImport>(&file_str)
            .with_context(|| format!("Invalid theme file {}", path.display()))?;
        Self::try_from(&config)
    }

    pub fn midnight() -> ThemeConfig {
        ThemeConfig {
            name: String::from("Midnight"),
            dark: true,

            bg: Color::Rgb(18, 18, 24),
            bg_panel: Color::Rgb(28, 27, 36),
            bg_error: Color::Rgb(150, 30, 40),

            text: Color::Rgb(220, 218, 230),
            text_muted: Color::Rgb(110, 106, 128),
            text_selected: Color::Rgb(18, 18, 24),

            accent: VIZ_TOP,
            selection: VIZ_TOP,
            border: Color::Rgb(70, 62, 96),
            border_type: BorderType::Rounded,

            progress: (VIZ_TOP, Color::Rgb(60, 56, 74)),
            visualizer: (VIZ_TOP, VIZ_BOTTOM),
        }
    }

    pub fn daylight() -> ThemeConfig {
        ThemeConfig {
            name: String::from("Daylight"),
            dark: false,

            bg: Color::Rgb(244, 242, 248),
            bg_panel: Color::Rgb(232, 229, 240),
            bg_error: Color::Rgb(255, 110, 110),

            text: Color::Rgb(30, 28, 40),
            text_muted: Color::Rgb(120, 116, 136),
            text_selected: Color::Rgb(250, 250, 255),

            accent: VIZ_BOTTOM,
            selection: VIZ_BOTTOM,
            border: Color::Rgb(170, 160, 200),
            border_type: BorderType::Plain,

            progress: (VIZ_BOTTOM, Color::Rgb(200, 196, 214)),
            visualizer: (VIZ_TOP, VIZ_BOTTOM),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::midnight()
    }
}

impl TryFrom<&ThemeImport> for ThemeConfig {
    type Error = anyhow::Error;

    fn try_from(config: &ThemeImport) -> anyhow::Result<Self> {
        let colors = &config.colors;

        Ok(ThemeConfig {
            name: config.name.clone(),
            dark: colors.dark,

            bg: parse_color(&colors.bg)?,
            bg_panel: parse_color(&colors.bg_panel)?,
            bg_error: parse_color(&colors.bg_error)?,

            text: parse_color(&colors.text)?,
            text_muted: parse_color(&colors.text_muted)?,
            text_selected: parse_color(&colors.text_selected)?,

            accent: parse_color(&colors.accent)?,
            selection: parse_color(&colors.selection)?,
            border: parse_color(&colors.border)?,
            border_type: parse_border_type(&config.borders.border_type),

            progress: (
                parse_color(&colors.progress_complete)?,
                parse_color(&colors.progress_incomplete)?,
            ),
            visualizer: (
                parse_color(&colors.visualizer_top)?,
                parse_color(&colors.visualizer_bottom)?,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SOLARIZED: &str = r##"
name = "Solar"

[colors]
dark = false
bg = "#FDF6E3"
bg_panel = "#EEE8D5"
bg_error = "red"
text = "#657B83"
text_muted = "#93A1A1"
text_selected = "white"
accent = "#268BD2"
selection = "rgb(38, 139, 210)"
border = "#93A1A1"
progress_complete = "#268BD2"
progress_incomplete = "gray"

[borders]
border_type = "double"
"##;

    #[test]
    fn loads_theme_file_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SOLARIZED.as_bytes()).unwrap();

        let theme = ThemeConfig::load_from_file(file.path()).unwrap();
        assert_eq!(theme.name, "Solar");
        assert!(!theme.dark);
        assert_eq!(theme.selection, Color::Rgb(38, 139, 210));
        assert_eq!(theme.border_type, BorderType::Double);
        assert_eq!(theme.visualizer, (VIZ_TOP, VIZ_BOTTOM));
    }

    #[test]
    fn bad_color_fails_the_whole_theme() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SOLARIZED.replace("#FDF6E3", "#FDF6").as_bytes())
            .unwrap();
        assert!(ThemeConfig::load_from_file(file.path()).is_err());
    }
}
