use rand::Rng;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    path: PathBuf,
    name: String,
}

impl PlaylistEntry {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        PlaylistEntry { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// What to do once the current entry has finished playing.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Advance {
    Replay(usize),
    Shuffle(usize),
    Next(usize),
    Stop,
}

impl Advance {
    pub fn index(&self) -> Option<usize> {
        match *self {
            Advance::Replay(i) | Advance::Shuffle(i) | Advance::Next(i) => Some(i),
            Advance::Stop => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AdvancePolicy {
    pub looping: bool,
    pub shuffling: bool,
}

#[derive(Debug, Default)]
pub struct Playlist {
    entries: Vec<PlaylistEntry>,
    current: Option<usize>,
}

impl Playlist {
    pub fn new() -> Self {
        Playlist::default()
    }

    /// Appends an entry. Returns `true` when this add started a selection,
    /// i.e. the playlist had no current entry and now points at index 0.
    pub fn add<P: Into<PathBuf>>(&mut self, path: P) -> bool {
        self.entries.push(PlaylistEntry::new(path.into()));

        match self.current {
            None => {
                self.current = Some(0);
                true
            }
            Some(_) => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.current = None;
    }

    /// Moves the selection to `index`. Out of range leaves everything as is.
    pub fn select(&mut self, index: usize) -> Option<&PlaylistEntry> {
        if index >= self.entries.len() {
            return None;
        }
        self.current = Some(index);
        self.entries.get(index)
    }

    pub fn get(&self, index: usize) -> Option<&PlaylistEntry> {
        self.entries.get(index)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current.filter(|&i| i < self.entries.len())
    }

    pub fn current(&self) -> Option<&PlaylistEntry> {
        self.current_index().and_then(|i| self.entries.get(i))
    }

    pub fn entries(&self) -> &[PlaylistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decides what follows the current entry and moves the selection
    /// accordingly. Loop beats shuffle, shuffle beats sequential order.
    /// Shuffle may pick the entry that just finished.
    pub fn advance<R: Rng + ?Sized>(&mut self, policy: AdvancePolicy, rng: &mut R) -> Advance {
        let count = self.entries.len();
        let Some(current) = self.current_index() else {
            return Advance::Stop;
        };

        let decision = if policy.looping {
            Advance::Replay(current)
        } else if policy.shuffling {
            Advance::Shuffle(rng.random_range(0..count))
        } else if current + 1 < count {
            Advance::Next(current + 1)
        } else {
            Advance::Stop
        };

        if let Some(next) = decision.index() {
            self.current = Some(next);
        }
        decision
    }
}
