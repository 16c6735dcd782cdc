use std::path::PathBuf;

use anyhow::Context;
use canvas_core::Catalog;
use canvas_server::{
    AppState, create_app,
    infra::config::{Config, ConfigLoad, ConfigLoader, DataConfig},
};
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "canvas-server")]
#[command(about = "Read-only HTTP API over the Canvas art catalog")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Server port (overrides PORT and the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Server host (overrides HOST and the config file)
    #[arg(long)]
    host: Option<String>,

    /// Directory holding paintings-nested.json, artists.json and galleries.json
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Path to a canvas.toml configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load configuration and the catalog, report collection sizes and exit
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_runtime_config(&cli.serve)?;

    match cli.command {
        Some(Command::Check) => run_check(&config),
        None => run_server(config).await,
    }
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = args.config.clone() {
        loader = loader.with_config_path(path);
    }

    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }
    if let Some(dir) = args.data_dir.as_ref() {
        config.data = DataConfig::in_dir(dir);
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = config.metadata.config_path.as_ref() {
        info!(path = %path.display(), "configuration file loaded");
    }

    if !warnings.is_empty() {
        for warning in &warnings.items {
            match &warning.hint {
                Some(hint) => {
                    warn!(message = %warning.message, hint = %hint, "configuration warning")
                }
                None => {
                    warn!(message = %warning.message, "configuration warning")
                }
            }
        }
        info!(count = warnings.items.len(), "configuration loaded with warnings");
    }

    Ok(config)
}

fn load_catalog(config: &Config) -> anyhow::Result<Catalog> {
    Catalog::load(&config.catalog_sources()).with_context(|| {
        format!(
            "failed to load catalog from {}",
            config.data.dir.display()
        )
    })
}

fn run_check(config: &Config) -> anyhow::Result<()> {
    let stats = load_catalog(config)?.stats();
    info!(
        paintings = stats.paintings,
        artists = stats.artists,
        galleries = stats.galleries,
        "catalog check passed"
    );
    Ok(())
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    let catalog = load_catalog(&config)?;

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app = create_app(AppState::new(catalog, config));

    info!(%addr, "starting Canvas catalog server");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
