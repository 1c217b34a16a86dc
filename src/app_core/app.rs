use crate::{
    domain::{TitleProbe, resolve_open_path},
    player::PlayerHandle,
    settings::Settings,
    tui,
    ui_state::{Mode, UiState},
};
use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, unbounded};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::crossterm::{
    ExecutableCommand,
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture, Event,
    },
};
use std::{path::PathBuf, thread};

pub struct MediaDeck {
    pub(crate) settings: Settings,
    pub(crate) ui: UiState,
    pub(crate) player: PlayerHandle,

    pub(crate) rng: StdRng,
    /// Bumped on every load; tags each `MediaTrack`.
    pub(crate) generation: u64,
    pub(crate) title_rx: Option<Receiver<TitleProbe>>,
}

impl MediaDeck {
    /// Opens the audio output and builds the UI state. Failing to reach an
    /// output device is fatal.
    pub fn new(settings: Settings) -> Result<Self> {
        let player = PlayerHandle::spawn().context("Could not start the player")?;
        let ui = UiState::new(&settings);
        Ok(Self::with_player(settings, ui, player))
    }

    pub fn with_player(settings: Settings, ui: UiState, player: PlayerHandle) -> Self {
        MediaDeck {
            settings,
            ui,
            player,

            rng: StdRng::from_os_rng(),
            generation: 0,
            title_rx: None,
        }
    }

    pub fn run(&mut self, paths: Vec<String>) -> Result<()> {
        self.player.set_volume(self.ui.volume())?;
        self.queue_startup_paths(&paths);

        let mut terminal = ratatui::init();
        terminal.clear()?;
        std::io::stdout()
            .execute(EnableMouseCapture)?
            .execute(EnableBracketedPaste)?;

        let input_rx = spawn_input_reader();
        let ticker = crossbeam_channel::tick(self.settings.refresh_interval());

        // MAIN ROUTINE
        let result = loop {
            if let Err(e) = terminal.draw(|f| tui::render(f, &mut self.ui)) {
                break Err(e.into());
            }

            self.select_shortcut(&input_rx, &ticker);

            if self.ui.get_mode() == Mode::QUIT {
                break Ok(());
            }
        };

        self.shutdown();
        result
    }

    fn queue_startup_paths(&mut self, paths: &[String]) {
        let mut found: Vec<PathBuf> = vec![];
        for input in paths {
            match resolve_open_path(input) {
                Ok(files) => found.extend(files),
                Err(e) => self.ui.set_error(e),
            }
        }

        if let Err(e) = self.add_paths(found) {
            self.ui.set_error(e);
        }
    }

    fn shutdown(&mut self) {
        tracing::info!("shutting down");
        let _ = self.player.stop();

        let mut stdout = std::io::stdout();
        let _ = stdout.execute(DisableBracketedPaste);
        let _ = stdout.execute(DisableMouseCapture);
        ratatui::restore();
    }
}

/// Terminal events are read on their own thread so the main loop can wait
/// on them alongside the player and the refresh ticker.
fn spawn_input_reader() -> Receiver<Event> {
    let (tx, rx) = unbounded();

    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("terminal input failed: {e}");
                    break;
                }
            }
        }
    });

    rx
}
