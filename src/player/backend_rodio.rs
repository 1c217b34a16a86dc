use crate::{error::EngineError, player::MediaEngine};
use lofty::prelude::*;
use rodio::{ChannelCount, Decoder, OutputStream, OutputStreamBuilder, SampleRate, Sink, Source};
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

pub struct RodioEngine {
    sink: Sink,
    _stream: OutputStream,
    ended: Arc<AtomicBool>,
    loaded: Option<PathBuf>,
    length: Option<Duration>,
}

impl RodioEngine {
    pub fn new() -> Result<Self, EngineError> {
        let stream = OutputStreamBuilder::open_default_stream()?;
        let sink = Sink::connect_new(stream.mixer());

        Ok(Self {
            sink,
            _stream: stream,
            ended: Arc::new(AtomicBool::new(false)),
            loaded: None,
            length: None,
        })
    }

    fn start(&mut self, path: &Path) -> Result<(), EngineError> {
        let source = decode(path)?;
        let length = source.total_duration().or_else(|| probe_length(path));

        // Each load watches its own flag so a source dropped by `clear` can
        // never report the end of its successor
        let ended = Arc::new(AtomicBool::new(false));
        self.ended = Arc::clone(&ended);

        self.sink.clear();
        self.sink.append(EndWatch::new(source, ended));
        self.sink.play();

        self.length = length;
        Ok(())
    }
}

impl MediaEngine for RodioEngine {
    fn load(&mut self, path: &Path) -> Result<(), EngineError> {
        self.loaded = None;
        self.length = None;

        self.start(path)?;
        self.loaded = Some(path.to_path_buf());
        Ok(())
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn resume(&mut self) -> Result<(), EngineError> {
        if !self.sink.empty() {
            self.sink.play();
            return Ok(());
        }

        let path = self.loaded.clone().ok_or(EngineError::NothingLoaded)?;
        self.start(&path)
    }

    fn stop(&mut self) {
        // `clear` drops the queued source and leaves the sink reusable
        self.sink.clear();
    }

    fn time(&self) -> Duration {
        self.sink.get_pos()
    }

    fn length(&self) -> Option<Duration> {
        self.length
    }

    fn set_time(&mut self, time: Duration) -> Result<(), EngineError> {
        if self.sink.empty() {
            return Err(EngineError::NothingLoaded);
        }

        let target = match self.length {
            Some(len) => time.min(len),
            None => time,
        };
        self.sink.try_seek(target)?;
        Ok(())
    }

    fn set_volume(&mut self, volume: u8) {
        self.sink.set_volume(volume.min(100) as f32 / 100.0);
    }

    fn track_ended(&self) -> bool {
        self.ended.load(Ordering::SeqCst) && self.sink.empty()
    }
}

fn decode(path: &Path) -> Result<Decoder<BufReader<File>>, EngineError> {
    let file = File::open(path).map_err(|source| EngineError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let len = file
        .metadata()
        .map_err(|source| EngineError::Open {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    let mut builder = Decoder::builder()
        .with_data(BufReader::new(file))
        .with_byte_len(len)
        .with_seekable(true);

    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        let ext = ext.to_ascii_lowercase();
        let hint = match ext.as_str() {
            "mp4" | "m4a" => "audio/mp4",
            "mkv" | "mka" => "audio/matroska",
            "wave" => "wav",
            other => other,
        };
        builder = builder.with_hint(hint);
    }

    Ok(builder.build()?)
}

/// Some containers do not report a frame count; fall back to the tag reader.
fn probe_length(path: &Path) -> Option<Duration> {
    lofty::read_from_path(path)
        .ok()
        .map(|f| f.properties().duration())
        .filter(|d| !d.is_zero())
}

/// Passes samples through untouched and raises `ended` once the inner
/// source runs dry.
pub struct EndWatch<I> {
    input: I,
    ended: Arc<AtomicBool>,
}

impl<I> EndWatch<I> {
    pub fn new(input: I, ended: Arc<AtomicBool>) -> Self {
        EndWatch { input, ended }
    }
}

impl<I> Iterator for EndWatch<I>
where
    I: Source<Item = f32>,
{
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        match self.input.next() {
            Some(sample) => Some(sample),
            None => {
                self.ended.store(true, Ordering::SeqCst);
                None
            }
        }
    }
}

impl<I> Source for EndWatch<I>
where
    I: Source<Item = f32>,
{
    fn channels(&self) -> ChannelCount {
        self.input.channels()
    }

    fn sample_rate(&self) -> SampleRate {
        self.input.sample_rate()
    }

    fn total_duration(&self) -> Option<Duration> {
        self.input.total_duration()
    }

    fn current_span_len(&self) -> Option<usize> {
        self.input.current_span_len()
    }

    fn try_seek(&mut self, pos: Duration) -> Result<(), rodio::source::SeekError> {
        self.input.try_seek(pos)
    }
}
