use clap::Parser;
use pointmap::{Config, MapServer, Source, TemporalDetection};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Serve point-data layers on a web map with a time slider")]
struct Args {
    /// Folder holding the dataset JSON files
    #[arg(short, long, default_value = "data", conflicts_with = "base_url")]
    data_folder: PathBuf,

    /// Fetch datasets over HTTP relative to this URL instead
    #[arg(long)]
    base_url: Option<String>,

    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// Half-width of the slider's time window
    #[arg(long, default_value_t = 10.0)]
    window: f64,

    /// How a layer is recognised as temporal
    #[arg(long, value_enum, default_value_t = TemporalDetection::FirstRecord)]
    temporal_detection: TemporalDetection,

    /// Leave the invisible click targets unfiltered by the slider
    #[arg(long)]
    unfiltered_hit_targets: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();
    let source = match args.base_url {
        Some(base_url) => Source::Remote { base_url },
        None => Source::Local(args.data_folder),
    };

    let config = Config {
        source,
        port: args.port,
        window_radius: args.window,
        temporal_detection: args.temporal_detection,
        filter_hit_targets: !args.unfiltered_hit_targets,
        ..Config::default()
    };

    let server = MapServer::new(config).await?;
    server.start().await
}
