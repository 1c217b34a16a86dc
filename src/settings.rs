use crate::{CONFIG_DIRECTORY, cli::Args, domain::VisualizerStyle};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

const CONFIG_FILE: &str = "config.toml";
const MIN_REFRESH_MS: u64 = 10;

/// Which behaviours of the player are switched on. The full player enables
/// everything; `--simple` keeps only the theme switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSet {
    pub loop_shuffle: bool,
    pub drag_drop: bool,
    pub keyboard_shortcuts: bool,
    pub theme_switcher: bool,
}

impl Default for FeatureSet {
    fn default() -> Self {
        FeatureSet {
            loop_shuffle: true,
            drag_drop: true,
            keyboard_shortcuts: true,
            theme_switcher: true,
        }
    }
}

impl FeatureSet {
    pub fn simple() -> Self {
        FeatureSet {
            loop_shuffle: false,
            drag_drop: false,
            keyboard_shortcuts: false,
            theme_switcher: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub refresh_interval_ms: u64,
    pub initial_volume: u8,
    pub seek_step_ms: u64,
    pub volume_step: u8,
    pub visualizer: VisualizerStyle,
    pub bar_count: usize,
    pub theme: Option<String>,
    pub features: FeatureSet,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            refresh_interval_ms: 100,
            initial_volume: 80,
            seek_step_ms: 5000,
            volume_step: 5,
            visualizer: VisualizerStyle::Pulse,
            bar_count: crate::domain::DEFAULT_BAR_COUNT,
            theme: None,
            features: FeatureSet::default(),
        }
    }
}

impl Settings {
    /// The preset of the minimal player: once-a-second refresh, random bars
    /// and only the theme switcher.
    pub fn simple() -> Self {
        Settings {
            refresh_interval_ms: 1000,
            visualizer: VisualizerStyle::Random,
            features: FeatureSet::simple(),
            ..Default::default()
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIRECTORY).join(CONFIG_FILE))
    }

    /// Reads `path`, or the default location when `None`. A missing default
    /// file yields the defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from_file(&path),
                _ => Ok(Settings::default()),
            },
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let file_str = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read settings from {}", path.display()))?;
        let settings = toml::from_str::<Settings>(&file_str)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;

        Ok(settings.sanitized())
    }

    /// Command line flags win over the file. `--simple` replaces the file's
    /// values with the preset before the remaining overrides apply.
    pub fn apply_args(mut self, args: &Args) -> Self {
        if args.simple {
            let theme = self.theme.take();
            self = Settings {
                theme,
                ..Settings::simple()
            };
        }
        if let Some(ms) = args.refresh_ms {
            self.refresh_interval_ms = ms;
        }
        if let Some(volume) = args.volume {
            self.initial_volume = volume;
        }
        self.sanitized()
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    fn sanitized(mut self) -> Self {
        self.refresh_interval_ms = self.refresh_interval_ms.max(MIN_REFRESH_MS);
        self.initial_volume = self.initial_volume.min(100);
        self.volume_step = self.volume_step.clamp(1, 100);
        self.bar_count = self.bar_count.max(1);
        self
    }
}
