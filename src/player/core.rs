use crate::{
    REFRESH_RATE,
    player::{MediaEngine, MediaTrack, PlaybackMetrics, PlaybackState, PlayerCommand, PlayerEvent},
};
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::{
    sync::Arc,
    thread::{self, JoinHandle},
    time::Duration,
};

pub struct PlayerCore {
    engine: Box<dyn MediaEngine>,
    commands: Receiver<PlayerCommand>,
    events: Sender<PlayerEvent>,
    metrics: Arc<PlaybackMetrics>,

    current: Option<MediaTrack>,
    finished: bool,
}

impl PlayerCore {
    pub fn new(
        engine: Box<dyn MediaEngine>,
        commands: Receiver<PlayerCommand>,
        events: Sender<PlayerEvent>,
        metrics: Arc<PlaybackMetrics>,
    ) -> Self {
        PlayerCore {
            engine,
            commands,
            events,
            metrics,

            current: None,
            finished: true,
        }
    }

    /// The engine is built on the player thread itself: audio output
    /// streams are not guaranteed to be `Send`.
    pub fn spawn<F>(
        factory: F,
        commands: Receiver<PlayerCommand>,
        events: Sender<PlayerEvent>,
        metrics: Arc<PlaybackMetrics>,
        ready: Sender<Result<(), String>>,
    ) -> JoinHandle<()>
    where
        F: FnOnce() -> anyhow::Result<Box<dyn MediaEngine>> + Send + 'static,
    {
        thread::spawn(move || {
            let engine = match factory() {
                Ok(engine) => {
                    let _ = ready.send(Ok(()));
                    engine
                }
                Err(e) => {
                    let _ = ready.send(Err(format!("{e:#}")));
                    return;
                }
            };

            let mut core = PlayerCore::new(engine, commands, events, metrics);
            core.run();
            tracing::debug!("player thread exiting");
        })
    }

    fn run(&mut self) {
        while self.tick() {
            thread::sleep(REFRESH_RATE);
        }
        self.engine.stop();
    }

    /// One pass of the player loop. Returns `false` once the handle is gone.
    pub(crate) fn tick(&mut self) -> bool {
        let alive = self.process_commands();
        self.check_track_end();
        self.update_metrics();
        alive
    }

    fn process_commands(&mut self) -> bool {
        loop {
            match self.commands.try_recv() {
                Ok(cmd) => {
                    tracing::trace!(?cmd, "player command");
                    match cmd {
                        PlayerCommand::Load(track) => self.load(track),
                        PlayerCommand::Pause => self.pause(),
                        PlayerCommand::Resume => self.resume(),
                        PlayerCommand::Stop => self.stop(),
                        PlayerCommand::SetTime(t) => self.set_time(t),
                        PlayerCommand::SetPosition(p) => self.set_position(p),
                        PlayerCommand::SetVolume(v) => self.set_volume(v),
                    }
                }
                Err(TryRecvError::Empty) => return true,
                Err(TryRecvError::Disconnected) => return false,
            }
        }
    }

    fn check_track_end(&mut self) {
        // `finished` ensures the event is sent once per playthrough
        if self.finished || !self.engine.track_ended() {
            return;
        }

        if let Some(track) = &self.current {
            self.finished = true;
            self.metrics.set_playback_state(PlaybackState::Stopped);
            self.emit(PlayerEvent::EndReached(track.clone()));
        }
    }

    fn update_metrics(&mut self) {
        if !self.metrics.is_stopped() {
            self.metrics.set_elapsed(self.engine.time())
        }
    }

    fn load(&mut self, track: MediaTrack) {
        match self.engine.load(track.path()) {
            Ok(()) => {
                self.current = Some(track.clone());
                self.finished = false;

                self.metrics.set_elapsed(Duration::ZERO);
                self.metrics.set_length(self.engine.length());
                self.metrics.set_playback_state(PlaybackState::Playing);
                self.emit(PlayerEvent::TrackStarted(track));
            }
            Err(e) => {
                tracing::warn!("failed to load {}: {e}", track.path().display());
                self.engine.stop();
                self.current = None;
                self.finished = true;

                self.metrics.reset();
                self.metrics.set_length(None);
                self.emit(PlayerEvent::LoadFailed {
                    track,
                    reason: e.to_string(),
                });
            }
        }
    }

    fn pause(&mut self) {
        if self.current.is_none() || self.metrics.is_stopped() {
            return;
        }
        self.engine.pause();
        self.metrics.set_playback_state(PlaybackState::Paused);
    }

    fn resume(&mut self) {
        if self.current.is_none() {
            return;
        }

        match self.engine.resume() {
            Ok(()) => {
                self.finished = false;
                self.metrics.set_playback_state(PlaybackState::Playing);
            }
            Err(e) => self.emit(PlayerEvent::Error(e.to_string())),
        }
    }

    fn stop(&mut self) {
        self.engine.stop();
        self.finished = true;
        self.metrics.reset();
    }

    /// Stopped or finished media has nothing to seek in; the request is dropped.
    fn set_time(&mut self, time: Duration) {
        if self.current.is_none() || self.metrics.is_stopped() {
            return;
        }
        if let Err(e) = self.engine.set_time(time) {
            self.emit(PlayerEvent::Error(e.to_string()));
        }
    }

    fn set_position(&mut self, position: f32) {
        if self.current.is_none() || self.metrics.is_stopped() {
            return;
        }
        if let Err(e) = self.engine.set_position(position) {
            self.emit(PlayerEvent::Error(e.to_string()));
        }
    }

    fn set_volume(&mut self, volume: u8) {
        let volume = volume.min(100);
        self.engine.set_volume(volume);
        self.metrics.set_volume(volume);
    }

    fn emit(&self, event: PlayerEvent) {
        let _ = self.events.send(event);
    }
}
