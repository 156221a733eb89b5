//! `marquee`: browse the TMDB movie catalog from the terminal.

mod interactive;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use marquee_config::{Config, ConfigLoad, ConfigLoader};
use marquee_core::{LoadOutcome, PreferenceStore, TmdbCatalog, ViewController};
use marquee_model::Theme;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::render::TextRenderer;

#[derive(Parser, Debug)]
#[command(name = "marquee", version)]
#[command(about = "Browse, search and filter the TMDB movie catalog")]
struct Cli {
    /// Path to a marquee.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to a .env file (defaults to ./.env when present)
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Popular movies, most popular first
    Browse(ListArgs),
    /// Movies matching a title search
    Search {
        term: String,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Full record for one movie
    Detail { id: u64 },
    /// Show or change the persisted theme
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },
    /// Line-oriented browsing session
    Interactive {
        /// Print poster URLs under each row
        #[arg(long)]
        posters: bool,
    },
}

#[derive(ClapArgs, Debug, Clone)]
struct ListArgs {
    /// Number of pages to accumulate
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pages: u32,

    /// Genre name or id, or "all"
    #[arg(long)]
    genre: Option<String>,

    /// Four-digit release year, or "all"
    #[arg(long)]
    year: Option<String>,

    /// popularity, rating, year or title
    #[arg(long)]
    sort: Option<String>,

    /// Print poster URLs under each row
    #[arg(long)]
    posters: bool,
}

impl ListArgs {
    fn has_filters(&self) -> bool {
        self.genre.is_some() || self.year.is_some() || self.sort.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum ThemeAction {
    Show,
    Toggle,
    Light,
    Dark,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(&cli)?;

    match cli.command {
        Command::Browse(list) => list_movies(&config, None, list).await,
        Command::Search { term, list } => list_movies(&config, Some(term), list).await,
        Command::Detail { id } => show_detail(&config, id).await,
        Command::Theme { action } => theme(&preference_store(&config)?, action).await,
        Command::Interactive { posters } => {
            let controller = build_controller(&config);
            let renderer = TextRenderer::new(config.api.image_urls(), posters);
            interactive::run(controller, renderer, preference_store(&config)?).await
        }
    }
}

fn preference_store(config: &Config) -> anyhow::Result<PreferenceStore> {
    match &config.storage.preferences_path {
        Some(path) => Ok(PreferenceStore::at(path)),
        None => PreferenceStore::from_project_dirs()
            .context("failed to locate the preferences directory"),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &cli.env_file {
        loader = loader.with_env_file(path);
    }

    let ConfigLoad { config, warnings } =
        loader.load().context("failed to load configuration")?;

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        debug!(path = %path.display(), "configuration file in use");
    }
    warnings.log();

    Ok(config)
}

fn build_controller(config: &Config) -> ViewController {
    let mut catalog = TmdbCatalog::new(config.api.base_url.clone());
    if let Some(key) = &config.api.api_key {
        catalog = catalog.with_api_key(key.clone());
    }
    ViewController::with_debounce(Arc::new(catalog), config.browse.search_debounce)
}

async fn list_movies(
    config: &Config,
    term: Option<String>,
    list: ListArgs,
) -> anyhow::Result<()> {
    let controller = build_controller(config);

    let first = match &term {
        Some(term) => controller.search_now(term).await,
        None => controller.load_movies(1).await,
    };
    if let LoadOutcome::Failed(error) = first {
        return Err(error).context("failed to load movies");
    }

    for _ in 1..list.pages {
        match controller.load_more().await {
            LoadOutcome::Loaded { .. } => {}
            LoadOutcome::Exhausted => break,
            LoadOutcome::Failed(error) => {
                tracing::warn!(%error, "stopping after a failed page");
                break;
            }
            other => debug!(?other, "unexpected load outcome"),
        }
    }

    if list.has_filters() {
        controller.apply_filter_controls(
            list.genre.as_deref().unwrap_or("all"),
            list.year.as_deref().unwrap_or("all"),
            list.sort.as_deref().unwrap_or("popularity"),
        )?;
    }

    let renderer = TextRenderer::new(config.api.image_urls(), list.posters);
    print!("{}", renderer.grid(&controller.snapshot()));
    Ok(())
}

async fn show_detail(config: &Config, id: u64) -> anyhow::Result<()> {
    let controller = build_controller(config);
    let detail = controller
        .show_detail(id)
        .await
        .with_context(|| format!("failed to load movie details for {id}"))?;

    let renderer = TextRenderer::new(config.api.image_urls(), true);
    print!("{}", renderer.detail(&detail));
    Ok(())
}

async fn theme(preferences: &PreferenceStore, action: ThemeAction) -> anyhow::Result<()> {
    let theme = match action {
        ThemeAction::Show => preferences.theme().await?,
        ThemeAction::Toggle => preferences.toggle_theme().await?,
        ThemeAction::Light => {
            preferences.set_theme(Theme::Light).await?;
            Theme::Light
        }
        ThemeAction::Dark => {
            preferences.set_theme(Theme::Dark).await?;
            Theme::Dark
        }
    };
    println!("{theme}");
    Ok(())
}
