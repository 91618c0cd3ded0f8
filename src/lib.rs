mod config;
mod dates;
mod models;
mod page;
mod render;
mod selector;
mod source;
mod utils;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::error;

pub use config::{ConfigStore, SiteConfig, SocialLink};
pub use dates::parse_event_date;
pub use models::{DataSnapshot, EventId, EventRecord};
pub use page::{compose, latest_card, EventCard, HomePage};
pub use render::{render_latest, render_page};
pub use selector::{select_latest, SelectError};
pub use source::{EventSource, JsonFileSource};

#[derive(Parser)]
#[command(name = "event-showcase", about = "Event agency homepage data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the homepage, footer panel included when there is a latest event
    Page {
        #[arg(long, help = "Path to the site's data.json")]
        data: Option<PathBuf>,
    },
    /// Print the most recent event as JSON
    Latest {
        #[arg(long, help = "Path to the site's data.json")]
        data: Option<PathBuf>,
    },
    /// Remember the data file location in the config
    SetData { path: PathBuf },
}

fn load_snapshot(data: Option<PathBuf>, config: &SiteConfig) -> Result<DataSnapshot> {
    let path = utils::resolve_data_path(data, config.data_path.as_deref());
    let source = JsonFileSource::new(path);
    log::info!("reading events from {}", source.name());
    source.snapshot()
}

fn page_command(
    data: Option<PathBuf>,
    config_store: &ConfigStore,
    out: &mut impl Write,
) -> Result<()> {
    let config = config_store.read();
    let snapshot = load_snapshot(data, &config)?;
    writeln!(out, "{}", render_page(&compose(&snapshot, &config)))?;
    Ok(())
}

fn latest_command(
    data: Option<PathBuf>,
    config_store: &ConfigStore,
    out: &mut impl Write,
) -> Result<()> {
    let snapshot = load_snapshot(data, &config_store.read())?;
    match select_latest(snapshot.events())? {
        Some(event) => writeln!(out, "{}", serde_json::to_string_pretty(event)?)?,
        None => writeln!(out, "no events")?,
    }
    Ok(())
}

fn set_data_command(path: &Path, config_store: &ConfigStore) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)
        .with_context(|| format!("unable to resolve {}", path.display()))?;
    config_store
        .update(|config| config.data_path = Some(absolute.clone()))
        .map_err(|err| anyhow::anyhow!("config update failed: {err}"))?;
    log::info!("data path set to {}", absolute.display());
    Ok(absolute)
}

pub fn run() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config_store = ConfigStore::load();

    let mut stdout = io::stdout().lock();

    let result = match cli.command {
        Commands::Page { data } => page_command(data, &config_store, &mut stdout),
        Commands::Latest { data } => latest_command(data, &config_store, &mut stdout),
        Commands::SetData { path } => set_data_command(&path, &config_store).map(|_| ()),
    };

    if let Err(err) = result {
        error!("{err:#}");
        std::process::exit(1);
    }
}
