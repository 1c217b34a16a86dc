use std::path::PathBuf;
use thiserror::Error;

/// Failures raised at the playback engine boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported or unreadable media ({0})")]
    Decode(#[from] rodio::decoder::DecoderError),

    #[error("audio output unavailable ({0})")]
    Output(#[from] rodio::StreamError),

    #[error("seek failed ({0})")]
    Seek(#[from] rodio::source::SeekError),

    #[error("media length is unknown")]
    UnknownLength,

    #[error("no media loaded")]
    NothingLoaded,
}
