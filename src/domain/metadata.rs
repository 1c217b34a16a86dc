use crate::player::MediaTrack;
use crossbeam_channel::{Receiver, bounded};
use lofty::prelude::*;
use std::{path::Path, thread};

/// Result of a background tag read for one load.
#[derive(Debug)]
pub struct TitleProbe {
    pub generation: u64,
    pub title: String,
}

/// Reads the title tag off the UI thread. The receiver yields exactly one
/// probe; a missing or unreadable tag falls back to the file name.
pub fn probe_title(track: &MediaTrack) -> Receiver<TitleProbe> {
    let (tx, rx) = bounded(1);
    let generation = track.id();
    let path = track.path().to_path_buf();

    thread::spawn(move || {
        let title = read_title(&path).unwrap_or_else(|| file_name(&path));
        let _ = tx.send(TitleProbe { generation, title });
    });

    rx
}

pub fn read_title(path: &Path) -> Option<String> {
    let tagged = match lofty::read_from_path(path) {
        Ok(t) => t,
        Err(e) => {
            tracing::debug!("no readable tags in {}: {e}", path.display());
            return None;
        }
    };

    tagged
        .primary_tag()
        .or_else(|| tagged.first_tag())
        .and_then(|tag| tag.title().map(|t| t.trim().to_string()))
        .filter(|t| !t.is_empty())
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{path::PathBuf, time::Duration};

    #[test]
    fn untagged_file_falls_back_to_name() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("Field Recording.wav");
        std::fs::write(&path, b"not really audio")?;

        let track = MediaTrack::new(9, PathBuf::from(&path));
        let probe = probe_title(&track).recv_timeout(Duration::from_secs(5))?;

        assert_eq!(probe.generation, 9);
        assert_eq!(probe.title, "Field Recording.wav");
        Ok(())
    }
}
