use crate::domain::MediaKind;
use std::path::{Path, PathBuf};

/// A file handed to the engine. The id is the load generation, so results
/// that arrive after a newer load can be told apart and ignored.
#[derive(Debug, Clone)]
pub struct MediaTrack {
    id: u64,
    path: PathBuf,
    kind: MediaKind,
}

impl PartialEq for MediaTrack {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl MediaTrack {
    pub fn new(id: u64, path: PathBuf) -> Self {
        let kind = MediaKind::classify(&path);
        MediaTrack { id, path, kind }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }
}
