mod app;
mod player;
mod playlist;
mod refresh;
mod select;
mod transport;

pub use app::MediaDeck;
