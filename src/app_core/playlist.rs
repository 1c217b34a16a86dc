use crate::{
    DurationStyle,
    app_core::MediaDeck,
    domain::{Advance, AdvancePolicy, parse_dropped_paths, resolve_open_path},
    get_readable_duration,
    ui_state::NO_MEDIA,
};
use anyhow::{Result, bail};
use std::path::PathBuf;

impl MediaDeck {
    /// Appends every path, then starts the first entry if the playlist had no
    /// selection before this batch.
    pub fn add_paths(&mut self, paths: Vec<PathBuf>) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }
        tracing::info!("adding {} file(s) to the playlist", paths.len());

        let mut started = false;
        for path in paths {
            started |= self.ui.playlist.add(path);
        }

        if self.ui.selected_row().is_none() {
            self.ui.highlight_row(Some(0));
        }

        match started {
            true => self.play_current(),
            false => Ok(()),
        }
    }

    pub fn clear_playlist(&mut self) -> Result<()> {
        self.ui.playlist.clear();
        self.player.stop()?;

        let transport = &mut self.ui.transport;
        transport.loaded = None;
        transport.is_playing = false;
        transport.is_audio = false;
        self.title_rx = None;

        self.ui.clear_progress();
        self.ui.visualizer.reset();
        self.ui.set_info(NO_MEDIA);
        self.ui.highlight_row(None);
        self.ui.display_state.video_visible = true;
        self.ui.set_mode(crate::ui_state::Mode::Normal);
        Ok(())
    }

    /// Out of range is a no-op.
    pub fn select_and_play(&mut self, index: usize) -> Result<()> {
        if self.ui.playlist.select(index).is_none() {
            return Ok(());
        }
        self.play_current()
    }

    pub fn play_selected(&mut self) -> Result<()> {
        match self.ui.selected_row() {
            Some(row) => self.select_and_play(row),
            None => Ok(()),
        }
    }

    fn play_current(&mut self) -> Result<()> {
        let Some(entry) = self.ui.playlist.current() else {
            return Ok(());
        };
        let path = entry.path().to_path_buf();
        self.load_and_play(&path)
    }

    pub(crate) fn on_end_reached(&mut self) -> Result<()> {
        let policy = AdvancePolicy {
            looping: self.ui.transport.is_looping,
            shuffling: self.ui.transport.is_shuffling,
        };

        let decision = self.ui.playlist.advance(policy, &mut self.rng);
        tracing::debug!(
            "end of media after {}: {decision:?}",
            get_readable_duration(self.player.elapsed(), DurationStyle::Compact)
        );

        match decision {
            Advance::Stop => {
                self.player.stop()?;
                self.ui.transport.is_playing = false;
                self.ui.reset_progress();
                Ok(())
            }
            _ => self.play_current(),
        }
    }

    /// Confirms the open prompt.
    pub fn open_confirm(&mut self) -> Result<()> {
        let paths = resolve_open_path(&self.ui.popup_input())?;
        self.ui.close_popup();
        self.add_paths(paths)
    }

    /// Files pasted or dropped onto the terminal. Payloads with no supported
    /// media are ignored.
    pub fn drop_payload(&mut self, payload: &str) -> Result<()> {
        let paths = parse_dropped_paths(payload);
        if paths.is_empty() {
            tracing::debug!("drop contained no supported media");
            return Ok(());
        }

        let missing = paths.iter().filter(|p| !p.exists()).count();
        if missing == paths.len() {
            bail!("Dropped files could not be found");
        }
        self.add_paths(paths)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        app_core::app::test_support::Harness,
        player::{PlayerCommand, PlayerEvent},
        ui_state::{NO_MEDIA, PopupType},
    };
    use std::{fs, path::PathBuf};

    fn media_dir(names: &[&str]) -> (tempfile::TempDir, Vec<PathBuf>) {
        let dir = tempfile::tempdir().unwrap();
        let paths = names
            .iter()
            .map(|n| {
                let p = dir.path().join(n);
                fs::write(&p, b"0").unwrap();
                p
            })
            .collect();
        (dir, paths)
    }

    fn loads(commands: &[PlayerCommand]) -> Vec<PathBuf> {
        commands
            .iter()
            .filter_map(|c| match c {
                PlayerCommand::Load(t) => Some(t.path().to_path_buf()),
                _ => None,
            })
            .collect()
    }

    fn finish_current(h: &mut Harness) {
        let track = h.app.ui.loaded_track().cloned().unwrap();
        h.deliver(PlayerEvent::EndReached(track));
    }

    #[test]
    fn first_add_starts_index_zero_once() {
        let (_dir, paths) = media_dir(&["a.mp3", "b.mkv", "c.wav"]);
        let mut h = Harness::new();

        h.app.add_paths(paths[..2].to_vec()).unwrap();
        h.app.add_paths(paths[2..].to_vec()).unwrap();

        let names: Vec<_> = h.app.ui.playlist().entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["a.mp3", "b.mkv", "c.wav"]);
        assert_eq!(h.app.ui.playlist().current_index(), Some(0));
        assert_eq!(loads(&h.sent()), vec![paths[0].clone()]);
        assert_eq!(h.app.ui.selected_row(), Some(0));
    }

    #[test]
    fn classification_switches_surfaces() {
        let (_dir, paths) = media_dir(&["song.FLAC", "film.mkv"]);
        let mut h = Harness::new();
        h.app.add_paths(paths).unwrap();

        assert!(h.app.ui.transport.is_audio);
        assert!(!h.app.ui.display_state.video_visible);
        assert!(!h.app.ui.can_fullscreen());

        h.app.select_and_play(1).unwrap();
        assert!(!h.app.ui.transport.is_audio);
        assert!(h.app.ui.display_state.video_visible);
        assert!(h.app.ui.can_fullscreen());
    }

    #[test]
    fn clear_resets_everything() {
        let (_dir, paths) = media_dir(&["a.mp3", "b.mp3"]);
        let mut h = Harness::new();
        h.app.add_paths(paths).unwrap();
        h.app.ui.display_state.seek.value_ms = 12_000;
        let _ = h.sent();

        h.app.clear_playlist().unwrap();
        assert!(h.app.ui.playlist().is_empty());
        assert_eq!(h.app.ui.playlist().current_index(), None);
        assert_eq!(h.sent(), vec![PlayerCommand::Stop]);
        assert_eq!(h.app.ui.display_state.seek.value_ms, 0);
        assert_eq!(h.app.ui.get_info(), NO_MEDIA);
        assert_eq!(h.app.ui.transport.play_label(), "Play");
        assert!(h.app.ui.display_state.video_visible);

        // the next add starts from the top again
        let (_dir2, more) = media_dir(&["c.mp3"]);
        h.app.add_paths(more.clone()).unwrap();
        assert_eq!(loads(&h.sent()), more);
    }

    #[test]
    fn sequential_advance_then_stop() {
        let (_dir, paths) = media_dir(&["a.mp3", "b.mp3"]);
        let mut h = Harness::new();
        h.app.add_paths(paths.clone()).unwrap();
        let _ = h.sent();

        finish_current(&mut h);
        assert_eq!(loads(&h.sent()), vec![paths[1].clone()]);
        assert_eq!(h.app.ui.playlist().current_index(), Some(1));

        finish_current(&mut h);
        assert_eq!(h.sent(), vec![PlayerCommand::Stop]);
        assert_eq!(h.app.ui.transport.play_label(), "Play");
    }

    #[test]
    fn loop_wins_over_shuffle() {
        let (_dir, paths) = media_dir(&["a.mp3", "b.mp3", "c.mp3", "d.mp3"]);
        let mut h = Harness::new();
        h.app.add_paths(paths.clone()).unwrap();
        h.app.select_and_play(2).unwrap();
        h.app.toggle_loop();
        h.app.toggle_shuffle();
        let _ = h.sent();

        for _ in 0..5 {
            finish_current(&mut h);
            assert_eq!(loads(&h.sent()), vec![paths[2].clone()]);
        }
    }

    #[test]
    fn shuffle_stays_in_bounds() {
        let (_dir, paths) = media_dir(&["a.mp3", "b.mp3", "c.mp3"]);
        let mut h = Harness::new();
        h.app.add_paths(paths.clone()).unwrap();
        h.app.toggle_shuffle();

        for _ in 0..20 {
            finish_current(&mut h);
            let idx = h.app.ui.playlist().current_index().unwrap();
            assert!(idx < 3);
            assert_eq!(h.app.ui.selected_row(), Some(idx));
        }
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let (_dir, paths) = media_dir(&["a.mp3"]);
        let mut h = Harness::new();
        h.app.add_paths(paths).unwrap();
        let _ = h.sent();

        h.app.select_and_play(5).unwrap();
        assert!(h.sent().is_empty());
        assert_eq!(h.app.ui.playlist().current_index(), Some(0));
    }

    #[test]
    fn missing_file_reports_without_loading() {
        let mut h = Harness::new();
        h.app.add_paths(vec![PathBuf::from("/definitely/not/here.mp3")]).unwrap();

        assert!(loads(&h.sent()).is_empty());
        assert!(h.app.ui.get_info().starts_with("Error playing media:"));
        assert!(!h.app.ui.has_media());
        assert_eq!(h.app.ui.playlist().len(), 1);
    }

    #[test]
    fn open_prompt_accepts_a_directory() {
        let (dir, _paths) = media_dir(&["b.mp3", "a.mkv", "notes.txt"]);
        let mut h = Harness::new();
        h.app.ui.show_popup(PopupType::Open);
        h.app.ui.popup.input.insert_str(dir.path().to_string_lossy());

        h.app.open_confirm().unwrap();
        assert!(!h.app.ui.popup.is_open());

        let names: Vec<_> = h.app.ui.playlist().entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["a.mkv", "b.mp3"]);
    }

    #[test]
    fn open_prompt_rejects_unsupported_files() {
        let (_dir, paths) = media_dir(&["notes.txt"]);
        let mut h = Harness::new();
        h.app.ui.show_popup(PopupType::Open);
        h.app.ui.popup.input.insert_str(paths[0].to_string_lossy());

        assert!(h.app.open_confirm().is_err());
        assert!(h.app.ui.playlist().is_empty());
    }

    #[test]
    fn drop_filters_unsupported_files() {
        let (_dir, paths) = media_dir(&["clip.avi", "cover.jpg"]);
        let mut h = Harness::new();
        let payload = paths
            .iter()
            .map(|p| format!("'{}'", p.display()))
            .collect::<Vec<_>>()
            .join(" ");

        h.app.drop_payload(&payload).unwrap();
        assert_eq!(h.app.ui.playlist().len(), 1);
        assert_eq!(h.app.ui.playlist().entries()[0].name(), "clip.avi");

        h.app.drop_payload("just some text").unwrap();
        assert_eq!(h.app.ui.playlist().len(), 1);
    }
}
