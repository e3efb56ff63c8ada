//! Grove CLI - manage the tree-planting registry from the terminal

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use grove::TreeService;
use grove::config::{self, GroveConfig};
use grove::storage::SqliteStore;
use grove::ui::{self, theme};
use grove::validate::{Coordinate, TreeInput};

#[derive(Parser)]
#[command(name = "grove")]
#[command(version)]
#[command(about = "Geotagged tree-planting registry")]
#[command(long_about = r#"
Grove keeps a registry of planted trees and serves it to the map UI:
  • Record species, coordinates, and planting date
  • Track which trees need a follow-up visit
  • Aggregate statistics for the conservation dashboard

Example usage:
  grove serve --port 5000
  grove add --species "Acacia tortilis" --latitude -1.2921 --longitude 36.8219 --planted-date 2024-03-14
  grove list
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP/JSON API consumed by the map and admin UI
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Record a newly planted tree
    Add {
        /// Tree species
        #[arg(short, long)]
        species: String,

        /// Latitude of the planting site
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,

        /// Longitude of the planting site
        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,

        /// Planting date (YYYY-MM-DD)
        #[arg(long)]
        planted_date: String,

        /// Who planted it
        #[arg(long)]
        planter_name: Option<String>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,

        /// healthy or needs_attention
        #[arg(long)]
        status: Option<String>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// List all recorded trees, newest first
    List {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Remove a tree record
    Remove {
        /// Record id
        #[arg(short, long)]
        id: i64,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Show aggregate statistics for the registry
    Stats {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Write a starter grove.toml config
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

fn resolve_database(flag: Option<PathBuf>, cfg: &Option<GroveConfig>) -> PathBuf {
    flag.or_else(|| {
        cfg.as_ref()
            .and_then(|c| c.database.clone())
            .map(PathBuf::from)
    })
    .unwrap_or_else(config::default_database_path)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let cfg = config::load_config(None)?;

    match cli.command {
        Commands::Serve { port, database } => {
            let database = resolve_database(database, &cfg);
            let port = port.or(cfg.as_ref().and_then(|c| c.port)).unwrap_or(5000);
            config::ensure_db_dir(&database)?;
            grove::server::start_server(port, database).await?;
        }

        Commands::Add {
            species,
            latitude,
            longitude,
            planted_date,
            planter_name,
            notes,
            status,
            database,
        } => {
            let database = resolve_database(database, &cfg);
            config::ensure_db_dir(&database)?;
            let store = SqliteStore::open(&database)?;

            let input = TreeInput {
                species: Some(species),
                latitude: Some(Coordinate::Number(latitude)),
                longitude: Some(Coordinate::Number(longitude)),
                planted_date: Some(planted_date),
                planter_name,
                notes,
                status,
            };

            let id = TreeService::new(&store).create(input)?;
            println!("{} Tree #{} recorded", "🌱".style(theme().success), id);
        }

        Commands::List { database } => {
            let database = resolve_database(database, &cfg);
            let store = SqliteStore::open(&database)?;
            let trees = TreeService::new(&store).list()?;

            if trees.is_empty() {
                println!("∅ No trees recorded yet.");
            } else {
                println!("{}", ui::table::tree_table(&trees));
                println!("{}", format!("{} trees", trees.len()).style(theme().dim));
            }
        }

        Commands::Remove { id, database } => {
            let database = resolve_database(database, &cfg);
            let store = SqliteStore::open(&database)?;
            TreeService::new(&store).delete(id)?;
            println!("{} Tree #{} removed", "🪓".style(theme().success), id);
        }

        Commands::Stats { database } => {
            let database = resolve_database(database, &cfg);
            let store = SqliteStore::open(&database)?;
            let stats = TreeService::new(&store).stats()?;

            println!("{}", "📊 Registry Statistics".style(theme().header));
            println!("{}", ui::table::stats_table(&stats));
        }

        Commands::Init { force } => {
            let path = config::default_config_path();
            let starter = GroveConfig {
                database: Some(config::default_database_path().display().to_string()),
                port: Some(5000),
            };
            config::write_config(&path, &starter, force)?;
            println!("{} Wrote {}", "✅".style(theme().success), path.display());
        }
    }

    Ok(())
}
