use clap::Parser;
use std::path::PathBuf;

/// mediadeck - a small terminal media player
#[derive(Parser, Debug, Default)]
#[command(name = "mediadeck", version, about)]
pub struct Args {
    /// Files or directories to queue on startup
    pub paths: Vec<String>,

    /// Read settings from this file instead of the default location
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Use the minimal preset: slow refresh, random bars, theme switching only
    #[arg(long, short = 's')]
    pub simple: bool,

    /// Override the UI refresh interval (milliseconds)
    #[arg(long = "refresh-ms")]
    pub refresh_ms: Option<u64>,

    /// Override the startup volume (0-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub volume: Option<u8>,

    /// Log filter, e.g. `debug` or `mediadeck=trace`
    #[arg(long)]
    pub log_level: Option<String>,

    /// Disable the log file
    #[arg(long)]
    pub no_log: bool,
}
