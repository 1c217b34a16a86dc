mod media_kind;
mod media_paths;
mod metadata;
mod playlist;
mod visualizer;

pub use media_kind::{MediaKind, SUPPORTED_EXTENSIONS, is_supported};
pub use media_paths::{collect_media_files, parse_dropped_paths, resolve_open_path};
pub use metadata::{TitleProbe, file_name, probe_title, read_title};
pub use playlist::{Advance, AdvancePolicy, Playlist, PlaylistEntry};
pub use visualizer::{DEFAULT_BAR_COUNT, Visualizer, VisualizerStyle, pulse_height};
