use crate::app_core::MediaDeck;

impl MediaDeck {
    /// Periodic pull of engine state into the UI. Nothing happens without
    /// loaded media.
    pub fn refresh(&mut self) {
        if !self.ui.has_media() {
            return;
        }

        let elapsed = self.player.elapsed();
        let length = self.player.length().unwrap_or_default();
        self.ui.set_progress(elapsed, length);

        if self.ui.transport.is_audio {
            self.ui.visualizer.update(elapsed, &mut self.rng);
        }
    }
}
