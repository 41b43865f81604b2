mod args;
mod targets;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scarlet_core::{
    default_config_path, load_config, validate_config, Console, FsPlacer, ImportError, Importer,
    ImporterConfig, MalClient, MalConfig, PlacerConfig, PresenterError, SanitizedConfig,
};

use args::Args;
use targets::import_targets;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(args).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("Fatal error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Import every target directory. Returns whether all of them were clean.
async fn run(args: Args) -> Result<bool> {
    let config_path = match args.config.clone() {
        Some(path) => path,
        None => default_config_path().context("Could not determine the user config directory")?,
    };

    info!("Loading configuration from {:?}", config_path);
    let mut config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    if let Some(library) = args.library.clone() {
        config.library_dir = library;
    }
    if let Some(limit) = args.limit {
        config.search_limit = limit;
    }

    validate_config(&config).context("Configuration validation failed")?;
    info!("Configuration: {:?}", SanitizedConfig::from(&config));

    let catalog = MalClient::new(MalConfig {
        client_id: config.mal_client_id.clone(),
        base_url: config.mal_base_url.clone(),
        timeout_secs: config.request_timeout_secs,
    })
    .context("Failed to create MyAnimeList client")?;

    let placer = FsPlacer::new(PlacerConfig::default().with_dry_run(args.dry_run));
    if args.dry_run {
        info!("Dry run: the library will not be modified");
    }

    let importer = Importer::new(
        ImporterConfig::from_config(&config, args.skip_non_manga),
        catalog,
        placer,
    );

    let targets = import_targets(args.dirs, config.import_dir.as_deref()).await?;
    info!("Importing {} directories", targets.len());

    let mut console = Console::stdio();
    let mut clean = true;

    for dir in &targets {
        match importer.import_directory(dir, &mut console).await {
            Ok(report) => {
                if !report.is_clean() {
                    clean = false;
                }
            }
            Err(e) if e.is_fatal() => {
                return Err(e).with_context(|| format!("Failed to import {}", dir.display()));
            }
            Err(ImportError::Presenter(PresenterError::Aborted)) => {
                warn!("Input closed, stopping before {}", dir.display());
                clean = false;
                break;
            }
            Err(e) => {
                error!("Failed to import {}: {}", dir.display(), e);
                console.line(format!("Skipping {}: {}", dir.display(), e))?;
                clean = false;
            }
        }
        console.blank()?;
    }

    Ok(clean)
}
