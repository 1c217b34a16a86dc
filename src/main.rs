use clap::Parser;
use mediadeck::{MediaDeck, Settings, cli::Args, logging};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let _guard = match args.no_log {
        true => None,
        false => Some(logging::init(args.log_level.as_deref())?),
    };

    let settings = Settings::load(args.config.as_deref())?.apply_args(&args);
    tracing::debug!("{settings:?}");

    MediaDeck::new(settings)?.run(args.paths)
}
