use anyhow::{Result, anyhow};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

pub mod app_core;
pub mod cli;
pub mod domain;
pub mod error;
pub mod key_handler;
pub mod logging;
pub mod player;
pub mod settings;
pub mod tui;
pub mod ui_state;

pub use app_core::MediaDeck;
pub use player::PlayerHandle;
pub use settings::Settings;

// ~30fps
pub const REFRESH_RATE: Duration = Duration::from_millis(33);

pub const CONFIG_DIRECTORY: &str = "mediadeck";
pub const THEME_DIRECTORY: &str = "themes";
pub const LOG_DIRECTORY: &str = "logs";

pub enum DurationStyle {
    Compact,
    /// `mm:ss`, minutes are never folded into hours.
    Clock,
}

pub fn get_readable_duration(duration: Duration, style: DurationStyle) -> String {
    let mut secs = duration.as_secs();
    let mins = secs / 60;
    secs %= 60;

    match style {
        DurationStyle::Compact => format!("{mins}:{secs:02}"),
        DurationStyle::Clock => format!("{mins:02}:{secs:02}"),
    }
}

pub fn truncate_at_last_space(s: &str, limit: usize) -> String {
    if s.chars().count() <= limit {
        return s.to_string();
    }

    let byte_limit = s
        .char_indices()
        .map(|(i, _)| i)
        .nth(limit)
        .unwrap_or(s.len());

    match s[..byte_limit].rfind(' ') {
        Some(last_space) if last_space > 0 => {
            let mut truncated = s[..last_space].to_string();
            truncated.push('…');
            truncated
        }
        _ => {
            let char_boundary = s[..byte_limit]
                .char_indices()
                .map(|(i, _)| i)
                .last()
                .unwrap_or(0);

            let mut truncated = s[..char_boundary].to_string();
            truncated.push('…');
            truncated
        }
    }
}

pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory!"))?;

    if path_str == "~" {
        return Ok(home);
    }

    if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        return Ok(home.join(&path_str[2..]));
    }

    Err(anyhow!("Error reading path with tilde (~): {path_str}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_style_keeps_minutes_past_the_hour() {
        let d = Duration::from_secs(75 * 60 + 9);
        assert_eq!(get_readable_duration(d, DurationStyle::Clock), "75:09");
        assert_eq!(
            get_readable_duration(Duration::ZERO, DurationStyle::Clock),
            "00:00"
        );
    }

    #[test]
    fn compact_style() {
        let d = Duration::from_millis(125_900);
        assert_eq!(get_readable_duration(d, DurationStyle::Compact), "2:05");
    }

    #[test]
    fn truncation_prefers_word_boundaries() {
        assert_eq!(truncate_at_last_space("short", 10), "short");
        assert_eq!(truncate_at_last_space("hello there world", 12), "hello there…");
        assert_eq!(truncate_at_last_space("abcdefghij", 4), "abc…");
    }

    #[test]
    fn tilde_expansion() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/music").unwrap(), home.join("music"));
            assert!(expand_tilde("~someone/x").is_err());
        }
        assert_eq!(expand_tilde("/tmp/a.mp3").unwrap(), PathBuf::from("/tmp/a.mp3"));
    }
}
