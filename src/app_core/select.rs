use crate::{
    app_core::MediaDeck,
    key_handler::{self, Action},
};
use crossbeam_channel::{Receiver, select};
use ratatui::crossterm::event::{Event, KeyEventKind};
use std::time::Instant;

impl MediaDeck {
    /// Waits for the next thing that needs the UI thread: a player event, a
    /// finished title probe, terminal input or the refresh tick.
    #[inline]
    pub fn select_shortcut(&mut self, input_rx: &Receiver<Event>, ticker: &Receiver<Instant>) {
        let player_rx = self.player.events().clone();
        let title_rx = self.title_rx.clone().unwrap_or_else(never);

        select! {
            recv(player_rx) -> event => {
                if let Ok(event) = event {
                    if let Err(e) = self.handle_player_event(event) {
                        self.ui.set_error(e);
                    }
                }
            }

            recv(title_rx) -> probe => {
                match probe {
                    Ok(probe) => self.apply_title(probe),
                    Err(_) => self.title_rx = None,
                }
            }

            recv(input_rx) -> event => {
                if let Ok(event) = event {
                    self.handle_input(event);
                }
            }

            recv(ticker) -> _ => self.refresh(),
        }
    }

    pub(crate) fn handle_input(&mut self, event: Event) {
        let action = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                key_handler::handle_key_event(key, &self.ui)
            }
            Event::Mouse(mouse) => key_handler::handle_mouse_event(mouse, &self.ui),
            Event::Paste(text) => key_handler::handle_paste(text, &self.ui),
            _ => None,
        };

        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    pub(crate) fn dispatch(&mut self, action: Action) {
        if let Err(e) = self.handle_action(action) {
            self.ui.set_error(e);
        }
    }
}

fn never<T>() -> Receiver<T> {
    crossbeam_channel::never()
}
