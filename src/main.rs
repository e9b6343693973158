use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

use wikiswipe::app::{App, AppEvent};
use wikiswipe::catalog::{self, GROUPS};
use wikiswipe::config::Config;
use wikiswipe::ui;
use wikiswipe::wiki::WikiClient;

/// Get the config directory path (~/.config/wikiswipe/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    let config_dir = PathBuf::from(home).join(".config").join("wikiswipe");
    Ok(config_dir)
}

#[derive(Parser, Debug)]
#[command(
    name = "wikiswipe",
    version,
    about = "Swipe through random Wikipedia articles in your terminal"
)]
struct Args {
    /// Category to start with (see --list-categories)
    #[arg(long, value_name = "ID")]
    category: Option<String>,

    /// Config file (default: ~/.config/wikiswipe/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Articles per request (1-50)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=50))]
    batch_size: Option<u8>,

    /// Print every category id and exit
    #[arg(long)]
    list_categories: bool,
}

fn print_categories() {
    for group in GROUPS {
        println!("{}", group.name);
        for category in group.categories() {
            println!("  {:<24} {}", category.id, category.name);
        }
    }

    let grouped: Vec<&str> = GROUPS
        .iter()
        .flat_map(|g| g.categories().map(|c| c.id))
        .collect();
    let ungrouped: Vec<_> = catalog::CATEGORIES
        .iter()
        .filter(|c| !grouped.contains(&c.id))
        .collect();
    if !ungrouped.is_empty() {
        println!("Other");
        for category in ungrouped {
            println!("  {:<24} {}", category.id, category.name);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the TUI on stdout
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.list_categories {
        print_categories();
        return Ok(());
    }

    let config_path = match args.config {
        Some(path) => path,
        None => get_config_dir()?.join("config.toml"),
    };
    let mut config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if let Some(size) = args.batch_size {
        config.batch_size = usize::from(size);
    }

    let start = match &args.category {
        Some(id) => catalog::find(id).with_context(|| {
            format!(
                "Unknown category '{}' (run with --list-categories to see all)",
                id
            )
        })?,
        None => config.startup_category(),
    };

    let client = WikiClient::new(&config.api_base_url, config.request_timeout())
        .with_context(|| format!("Invalid api_base_url '{}'", config.api_base_url))?;

    let mut app = App::new(Arc::new(client), &config);

    // Create event channel for background tasks
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    tracing::info!(category = start.id, batch_size = app.pager.batch_size(), "Starting");
    ui::start_category(&mut app, start, &event_tx);

    // Run the TUI
    ui::run(&mut app, event_tx, event_rx).await?;

    Ok(())
}
