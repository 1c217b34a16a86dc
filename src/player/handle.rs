use crate::player::{
    MediaEngine, MediaTrack, PlaybackMetrics, PlayerCommand, PlayerCore, PlayerEvent,
    RodioEngine,
};
use anyhow::{Result, anyhow};
use crossbeam_channel::{Receiver, Sender, bounded, unbounded};
use std::{sync::Arc, thread::JoinHandle, time::Duration};

pub struct PlayerHandle {
    commands: Sender<PlayerCommand>,
    events: Receiver<PlayerEvent>,
    metrics: Arc<PlaybackMetrics>,
    _thread: Option<JoinHandle<()>>,
}

impl PlayerHandle {
    /// Starts the player thread on the default audio output.
    pub fn spawn() -> Result<Self> {
        Self::spawn_with(|| {
            let engine = RodioEngine::new()?;
            Ok(Box::new(engine) as Box<dyn MediaEngine>)
        })
    }

    /// Starts the player thread with an engine built by `factory`, and
    /// waits until the engine reports whether it came up.
    pub fn spawn_with<F>(factory: F) -> Result<Self>
    where
        F: FnOnce() -> Result<Box<dyn MediaEngine>> + Send + 'static,
    {
        let (cmd_tx, cmd_rx) = unbounded();
        let (evt_tx, evt_rx) = unbounded();
        let (ready_tx, ready_rx) = bounded(1);
        let metrics = PlaybackMetrics::new();

        let thread = PlayerCore::spawn(factory, cmd_rx, evt_tx, Arc::clone(&metrics), ready_tx);

        match ready_rx.recv() {
            Ok(Ok(())) => (),
            Ok(Err(e)) => return Err(anyhow!("Failed to initialize playback engine: {e}")),
            Err(_) => return Err(anyhow!("Player thread exited during startup")),
        }

        Ok(Self {
            commands: cmd_tx,
            events: evt_rx,
            metrics,
            _thread: Some(thread),
        })
    }

    pub fn metrics(&self) -> Arc<PlaybackMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn events(&self) -> &Receiver<PlayerEvent> {
        &self.events
    }
}

// =====================
//    COMMAND HANDLER
// =====================
impl PlayerHandle {
    pub fn load(&self, track: MediaTrack) -> Result<()> {
        self.commands.send(PlayerCommand::Load(track))?;
        Ok(())
    }

    pub fn pause(&self) -> Result<()> {
        self.commands.send(PlayerCommand::Pause)?;
        Ok(())
    }

    pub fn resume(&self) -> Result<()> {
        self.commands.send(PlayerCommand::Resume)?;
        Ok(())
    }

    pub fn stop(&self) -> Result<()> {
        self.commands.send(PlayerCommand::Stop)?;
        Ok(())
    }

    pub fn set_time(&self, time: Duration) -> Result<()> {
        self.commands.send(PlayerCommand::SetTime(time))?;
        Ok(())
    }

    pub fn set_position(&self, position: f32) -> Result<()> {
        self.commands.send(PlayerCommand::SetPosition(position))?;
        Ok(())
    }

    pub fn set_volume(&self, volume: u8) -> Result<()> {
        self.commands.send(PlayerCommand::SetVolume(volume))?;
        Ok(())
    }
}

// ===============
//    ACCESSORS
// ===============
impl PlayerHandle {
    pub fn elapsed(&self) -> Duration {
        self.metrics.get_elapsed()
    }

    /// `None` while the engine has no length for the current media.
    pub fn length(&self) -> Option<Duration> {
        Some(self.metrics.get_length()).filter(|l| !l.is_zero())
    }
}

#[cfg(test)]
impl PlayerHandle {
    /// A handle with no player thread behind it. Tests read the commands the
    /// app sends and inject the events a player would publish.
    pub(crate) fn detached() -> (Self, Receiver<PlayerCommand>, Sender<PlayerEvent>) {
        let (cmd_tx, cmd_rx) = unbounded();
        let (evt_tx, evt_rx) = unbounded();
        let handle = Self {
            commands: cmd_tx,
            events: evt_rx,
            metrics: PlaybackMetrics::new(),
            _thread: None,
        };
        (handle, cmd_rx, evt_tx)
    }
}
