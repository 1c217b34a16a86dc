use crate::{
    app_core::MediaDeck,
    domain::TitleProbe,
    player::{MediaTrack, PlayerEvent},
};
use anyhow::{Result, anyhow};

impl MediaDeck {
    pub(crate) fn handle_player_event(&mut self, event: PlayerEvent) -> Result<()> {
        match event {
            PlayerEvent::TrackStarted(track) => {
                tracing::debug!("engine started {}", track.path().display());
                Ok(())
            }
            PlayerEvent::EndReached(track) => match self.is_current(&track) {
                true => self.on_end_reached(),
                false => Ok(()),
            },
            PlayerEvent::LoadFailed { track, reason } => {
                if self.is_current(&track) {
                    self.media_failed(&reason);
                }
                Ok(())
            }
            PlayerEvent::Error(e) => Err(anyhow!(e)),
        }
    }

    /// Results for a superseded load are dropped.
    fn is_current(&self, track: &MediaTrack) -> bool {
        self.ui.loaded_track() == Some(track)
    }

    pub(crate) fn apply_title(&mut self, probe: TitleProbe) {
        self.title_rx = None;

        match self.ui.loaded_track() {
            Some(track) if track.id() == probe.generation => {
                self.ui.set_info(format!("Title: {}", probe.title))
            }
            _ => tracing::trace!("dropping stale title {:?}", probe.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        app_core::app::test_support::Harness,
        domain::TitleProbe,
        player::{PlayerCommand, PlayerEvent},
    };
    use std::{fs, path::PathBuf};

    fn media_dir(names: &[&str]) -> (tempfile::TempDir, Vec<PathBuf>) {
        let dir = tempfile::tempdir().unwrap();
        let paths = names
            .iter()
            .map(|n| {
                let p = dir.path().join(n);
                fs::write(&p, b"not really media").unwrap();
                p
            })
            .collect();
        (dir, paths)
    }

    #[test]
    fn load_failure_lands_in_the_info_label() {
        let (_dir, paths) = media_dir(&["broken.mp3"]);
        let mut h = Harness::new();
        h.app.add_paths(paths).unwrap();

        let track = h.app.ui.loaded_track().cloned().unwrap();
        h.deliver(PlayerEvent::LoadFailed {
            track,
            reason: "unsupported codec".into(),
        });

        assert_eq!(h.app.ui.get_info(), "Error playing media: unsupported codec");
        assert!(!h.app.ui.is_playing());
        assert!(!h.app.ui.has_media());
        assert_eq!(h.app.ui.transport.play_label(), "Play");
    }

    #[test]
    fn stale_events_are_ignored() {
        let (_dir, paths) = media_dir(&["a.mp3", "b.mp3"]);
        let mut h = Harness::new();
        h.app.add_paths(paths).unwrap();
        let first = h.app.ui.loaded_track().cloned().unwrap();

        h.app.select_and_play(1).unwrap();
        let _ = h.sent();

        h.deliver(PlayerEvent::EndReached(first.clone()));
        assert!(h.sent().is_empty());

        h.deliver(PlayerEvent::LoadFailed {
            track: first.clone(),
            reason: "late".into(),
        });
        assert!(h.app.ui.has_media());

        h.app.apply_title(TitleProbe {
            generation: first.id(),
            title: "Old".into(),
        });
        assert_eq!(h.app.ui.get_info(), "Title: b.mp3");
    }

    #[test]
    fn title_probe_updates_info() {
        let (_dir, paths) = media_dir(&["song.flac"]);
        let mut h = Harness::new();
        h.app.add_paths(paths).unwrap();
        let current = h.app.ui.loaded_track().cloned().unwrap();

        h.app.apply_title(TitleProbe {
            generation: current.id(),
            title: "Clair de Lune".into(),
        });
        assert_eq!(h.app.ui.get_info(), "Title: Clair de Lune");
        assert!(h.app.title_rx.is_none());
    }

    #[test]
    fn engine_errors_bubble_up() {
        let mut h = Harness::new();
        assert!(
            h.app
                .handle_player_event(PlayerEvent::Error("device lost".into()))
                .is_err()
        );
        assert!(
            h.sent()
                .iter()
                .all(|c| !matches!(c, PlayerCommand::Load(_)))
        );
    }
}
