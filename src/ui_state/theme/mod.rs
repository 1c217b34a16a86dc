mod theme_config;
mod theme_import;
mod theme_manager;
mod theme_utils;

pub use theme_config::{ThemeConfig, VIZ_BOTTOM, VIZ_TOP};
pub use theme_manager::ThemeManager;
pub use theme_utils::blend;
