use std::{fmt::Display, path::Path};

/// Extensions accepted by the open prompt and by dropped file lists.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["mp4", "avi", "mkv", "mp3", "wav", "flac"];

const AUDIO_EXTENSIONS: [&str; 3] = ["mp3", "wav", "flac"];

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum MediaKind {
    Audio,
    #[default]
    Video,
}

impl MediaKind {
    /// Classification is by extension only, case-insensitive. Anything that
    /// is not a known audio container is treated as video.
    pub fn classify<P: AsRef<Path>>(path: P) -> Self {
        match extension_of(path.as_ref()) {
            Some(ext) if AUDIO_EXTENSIONS.contains(&ext.as_str()) => MediaKind::Audio,
            _ => MediaKind::Video,
        }
    }

    pub fn is_audio(&self) -> bool {
        *self == MediaKind::Audio
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            MediaKind::Audio => write!(f, "audio"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

pub fn is_supported<P: AsRef<Path>>(path: P) -> bool {
    extension_of(path.as_ref()).is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}
