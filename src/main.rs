use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use planet_catalog::app::CatalogUseCase;
use planet_catalog::common::constants::DEFAULT_CONFIG_PATH;
use planet_catalog::config::Config;
use planet_catalog::infra::{InMemoryStore, ReqwestHttp};
use planet_catalog::observability::{self, metrics};

#[derive(Parser)]
#[command(name = "planet_catalog")]
#[command(about = "Browse SWAPI planets with film titles resolved")]
#[command(version)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load films and the first page of planets
    Load,
    /// Load films, then look up planets by id (repeated ids are served from cache)
    Planet {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Load and print the film catalog
    Films,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init_logging();
    metrics::describe_all();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;
    info!(
        "Using planets at {} and films at {}",
        config.api.planets_url, config.api.films_url
    );

    let store = Arc::new(InMemoryStore::new());
    let http = ReqwestHttp::new(&config.http)?;
    let use_case = CatalogUseCase::new(Box::new(http), store.clone(), &config.api);

    match cli.command {
        Commands::Load => {
            use_case.load_initial_data().await?;
            print_json(&store.state().planet_page)?;
        }
        Commands::Planet { ids } => {
            use_case.load_films().await?;
            for id in &ids {
                use_case
                    .resolve_or_fetch_planet(id)
                    .await
                    .with_context(|| format!("looking up planet {}", id))?;
                print_json(&store.state().current_planet)?;
            }
        }
        Commands::Films => {
            use_case.load_films().await?;
            print_json(&store.state().films)?;
        }
    }

    info!("Dispatched {} actions", store.dispatched().len());
    Ok(())
}
