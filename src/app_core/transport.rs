use crate::{
    app_core::MediaDeck,
    domain::file_name,
    player::MediaTrack,
    ui_state::Mode,
};
use anyhow::Result;
use std::{fs::File, path::Path, time::Duration};

impl MediaDeck {
    pub fn toggle_play_pause(&mut self) -> Result<()> {
        if !self.ui.has_media() {
            return Ok(());
        }

        match self.ui.transport.is_playing {
            true => self.player.pause()?,
            false => self.player.resume()?,
        }
        self.ui.transport.is_playing = !self.ui.transport.is_playing;
        Ok(())
    }

    /// Stops the engine but keeps the media assigned, so play starts it over.
    pub fn stop(&mut self) -> Result<()> {
        self.player.stop()?;
        self.ui.transport.is_playing = false;
        self.ui.reset_progress();
        Ok(())
    }

    /// Hands `path` to the engine and switches the surfaces over to it. A
    /// file that cannot be opened is reported in the info label.
    pub(crate) fn load_and_play(&mut self, path: &Path) -> Result<()> {
        self.generation += 1;
        let track = MediaTrack::new(self.generation, path.to_path_buf());

        if let Err(e) = File::open(path) {
            self.player.stop()?;
            self.media_failed(&format!("{}: {e}", path.display()));
            return Ok(());
        }

        self.player.load(track.clone())?;
        tracing::info!("loading {} ({})", path.display(), track.kind());

        let is_audio = track.kind().is_audio();
        self.ui.transport.is_audio = is_audio;
        self.ui.transport.is_playing = true;
        self.ui.display_state.video_visible = !is_audio;
        if is_audio && self.ui.get_mode() == Mode::Fullscreen {
            self.ui.set_mode(Mode::Normal);
        }

        self.ui.visualizer.reset();
        self.ui.clear_progress();
        self.ui.set_info(format!("Title: {}", file_name(path)));
        self.ui.highlight_row(self.ui.playlist.current_index());

        self.title_rx = Some(crate::domain::probe_title(&track));
        self.ui.transport.loaded = Some(track);
        Ok(())
    }

    /// Load failures leave playback stopped with the reason on display.
    pub(crate) fn media_failed(&mut self, reason: &str) {
        tracing::warn!("could not play media: {reason}");

        self.ui.transport.loaded = None;
        self.ui.transport.is_playing = false;
        self.title_rx = None;

        self.ui.clear_progress();
        self.ui.visualizer.reset();
        self.ui.set_info(format!("Error playing media: {reason}"));
    }

    /// Jumps to `value_ms` on the seek bar. Only honoured during a drag
    /// session and while the engine knows the length.
    pub fn seek(&mut self, value_ms: u64) -> Result<()> {
        if !self.ui.transport.is_seek_dragging || !self.ui.has_media() {
            return Ok(());
        }

        let Some(length) = self.player.length() else {
            return Ok(());
        };

        let position = (value_ms as f64 / length.as_millis() as f64).clamp(0.0, 1.0);
        self.player.set_position(position as f32)
    }

    pub fn begin_seek_drag(&mut self, fraction: f64) -> Result<()> {
        self.ui.transport.is_seek_dragging = true;
        self.drag_seek(fraction)
    }

    pub fn drag_seek(&mut self, fraction: f64) -> Result<()> {
        if !self.ui.transport.is_seek_dragging {
            return Ok(());
        }

        let seek = &mut self.ui.display_state.seek;
        seek.value_ms = (seek.max_ms as f64 * fraction.clamp(0.0, 1.0)).round() as u64;
        let value = seek.value_ms;

        self.seek(value)
    }

    pub fn end_seek_drag(&mut self, fraction: f64) -> Result<()> {
        let result = self.drag_seek(fraction);
        self.ui.transport.is_seek_dragging = false;
        result
    }

    /// Keyboard seek by `delta_ms`, clamped to `[0, length]`. Forward seeks
    /// need a known length.
    pub fn seek_by(&mut self, delta_ms: i64) -> Result<()> {
        if !self.ui.has_media() {
            return Ok(());
        }

        let target = self.player.elapsed().as_millis() as i64 + delta_ms;
        let target = match self.player.length() {
            Some(length) => target.clamp(0, length.as_millis() as i64),
            None if delta_ms > 0 => return Ok(()),
            None => target.max(0),
        };
        let target = target as u64;

        if !self.ui.transport.is_seek_dragging {
            self.ui.display_state.seek.value_ms = target;
        }
        self.player.set_time(Duration::from_millis(target))
    }

    pub(crate) fn seek_step_ms(&self) -> i64 {
        self.settings.seek_step_ms as i64
    }

    /// Clamps `level` into `[0, 100]` and forwards it untouched.
    pub fn set_volume(&mut self, level: i32) -> Result<()> {
        let volume = level.clamp(0, 100) as u8;
        self.ui.transport.volume = volume;
        self.player.set_volume(volume)
    }

    pub fn step_volume(&mut self, direction: i32) -> Result<()> {
        let step = self.settings.volume_step as i32;
        self.set_volume(self.ui.volume() as i32 + direction * step)
    }

    pub fn toggle_loop(&mut self) {
        self.ui.transport.is_looping = !self.ui.transport.is_looping;
        tracing::debug!("{}", self.ui.transport.loop_label());
    }

    pub fn toggle_shuffle(&mut self) {
        self.ui.transport.is_shuffling = !self.ui.transport.is_shuffling;
        tracing::debug!("{}", self.ui.transport.shuffle_label());
    }

    pub fn toggle_fullscreen(&mut self) {
        match self.ui.get_mode() {
            Mode::Fullscreen => self.ui.set_mode(Mode::Normal),
            _ => self.ui.set_mode(Mode::Fullscreen),
        }
    }
}
