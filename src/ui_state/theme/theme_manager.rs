use crate::{
    CONFIG_DIRECTORY, THEME_DIRECTORY,
    ui_state::{ThemeConfig, UiState},
};
use std::path::{Path, PathBuf};

pub struct ThemeManager {
    pub active: ThemeConfig,
    pub theme_lib: Vec<ThemeConfig>,
}

impl ThemeManager {
    /// Built-in themes first, then every readable `*.toml` from the user's
    /// theme directory. `preferred` picks the starting theme by name.
    pub fn new(preferred: Option<&str>) -> Self {
        let dir = theme_dir();
        Self::with_theme_dir(dir.as_deref(), preferred)
    }

    pub fn with_theme_dir(dir: Option<&Path>, preferred: Option<&str>) -> Self {
        let mut theme_lib = vec![ThemeConfig::midnight(), ThemeConfig::daylight()];
        if let Some(dir) = dir {
            theme_lib.extend(collect_themes(dir));
        }

        let active = theme_lib.first().cloned().unwrap_or_default();
        let mut manager = ThemeManager { active, theme_lib };

        if let Some(name) = preferred {
            match manager.find_theme_by_name(name).cloned() {
                Some(theme) => manager.set_theme(theme),
                None => tracing::warn!("theme {name:?} not found, using the default"),
            }
        }
        manager
    }

    /// Case-insensitive.
    pub fn find_theme_by_name(&self, name: &str) -> Option<&ThemeConfig> {
        self.theme_lib
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn get_current_theme_index(&self) -> Option<usize> {
        self.theme_lib
            .iter()
            .position(|t| t.name == self.active.name)
    }

    pub fn set_theme(&mut self, theme: ThemeConfig) {
        self.active = theme
    }

    pub fn cycle(&mut self) {
        let len = self.theme_lib.len();
        if len < 2 {
            return;
        }

        let idx = self.get_current_theme_index().unwrap_or(0);
        let next = (idx + 1) % len;

        if let Some(theme) = self.theme_lib.get(next).cloned() {
            tracing::debug!("theme -> {}", theme.name);
            self.set_theme(theme);
        }
    }
}

fn theme_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIRECTORY).join(THEME_DIRECTORY))
}

fn collect_themes(dir: &Path) -> Vec<ThemeConfig> {
    let mut themes = vec![];

    let Ok(entries) = dir.read_dir() else {
        return themes;
    };

    let mut paths = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("toml"))
        .collect::<Vec<_>>();
    paths.sort();

    for path in paths {
        match ThemeConfig::load_from_file(&path) {
            Ok(theme) => themes.push(theme),
            Err(e) => tracing::warn!("skipping theme {}: {e:#}", path.display()),
        }
    }
    themes
}

impl UiState {
    pub fn cycle_theme(&mut self) {
        self.theme_manager.cycle();
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme_manager.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_come_first_and_cycle_wraps() {
        let mut manager = ThemeManager::with_theme_dir(None, None);
        assert_eq!(manager.active.name, "Midnight");

        manager.cycle();
        assert_eq!(manager.active.name, "Daylight");
        manager.cycle();
        assert_eq!(manager.active.name, "Midnight");
    }

    #[test]
    fn preferred_name_is_case_insensitive() {
        let manager = ThemeManager::with_theme_dir(None, Some("daylight"));
        assert_eq!(manager.active.name, "Daylight");

        let manager = ThemeManager::with_theme_dir(None, Some("Nope"));
        assert_eq!(manager.active.name, "Midnight");
    }

    #[test]
    fn broken_theme_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.toml"), "name = 3").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let manager = ThemeManager::with_theme_dir(Some(dir.path()), None);
        assert_eq!(manager.theme_lib.len(), 2);
        assert!(manager.find_theme_by_name("Daylight").is_some());
    }
}
