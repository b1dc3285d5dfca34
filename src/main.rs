use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use parscade::config::Config;
use parscade::logging::init_tracing;
use parscade::motion::{HostMotionPreference, MotionPreference};
use parscade::store::{FileStorage, UiStore};
use parscade::ui::app::App;
use parscade::ui::events::EventHandler;
use parscade::ui::runtime;

/// Terminal showcase of the Parscade document pipeline.
#[derive(Debug, Parser)]
#[command(name = "parscade", version)]
struct Args {
    /// Config file (default: <config dir>/parscade/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Treat the host as preferring reduced motion
    #[arg(long)]
    reduced_motion: bool,

    /// Forget persisted UI state before starting
    #[arg(long)]
    reset_state: bool,

    /// Print the accessibility tree as JSON and exit
    #[arg(long)]
    a11y: bool,

    /// Override the autoplay interval in milliseconds
    #[arg(long, value_name = "MS")]
    interval_ms: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    if let Some(interval_ms) = args.interval_ms {
        config.carousel.autoplay_interval_ms = interval_ms;
        config.validate()?;
    }

    init_tracing(&Config::data_dir().join("parscade.log"))?;
    tracing::info!(config = %config_path.display(), "Configuration loaded");

    let host = HostMotionPreference::detect(args.reduced_motion);
    let storage = FileStorage::new(config.storage_path());
    let mut store = UiStore::load(Box::new(storage), host.prefers_reduced_motion());
    if args.reset_state {
        store.reset();
        tracing::info!("Persisted UI state cleared");
    }

    if args.a11y {
        let events = EventHandler::new();
        let app = App::new(&config, store, events.sender());
        let tree = serde_json::to_string_pretty(&app.accessibility_tree())?;
        println!("{tree}");
        return Ok(());
    }

    runtime::run(&config, store, &host).await?;
    Ok(())
}
