//! Datapulse CLI
//!
//! Command-line interface for the console host:
//! - Serve the UI bundle
//! - Print the route table
//! - Resolve a path to its page and data state
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use datapulse::config::{generate_default_config, Config};
use datapulse::report::{render_route_table, resolve_path, route_table};
use datapulse::server::{serve, AppState};
use datapulse_console::{ConnectionStatus, FetchOutcome};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "datapulse")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Datapulse seller console host")]
#[command(long_about = "Serves the Datapulse analytics console and inspects its routes.\nBuild the UI bundle with `trunk build` in datapulse-ui first.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the console bundle
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory with the built UI bundle
        #[arg(short, long)]
        dist: Option<PathBuf>,
    },

    /// Print the route table
    Routes {
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Show how the console renders a path
    Resolve {
        /// Path to resolve, e.g. /finance/pnl
        path: String,
        /// Connection status: connected or not_connected (default: from config)
        #[arg(short, long)]
        status: Option<ConnectionStatus>,
        /// Pretend a data fetch returned this many rows
        #[arg(long, conflicts_with = "failed")]
        rows: Option<usize>,
        /// Pretend the data fetch failed
        #[arg(long)]
        failed: bool,
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, report) = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    datapulse::logging::init(&config.logging);
    report.log();

    match cli.command {
        Commands::Serve { host, port, dist } => {
            let mut server = config.server;
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }
            if let Some(dist) = dist {
                server.dist_dir = dist;
            }

            tracing::info!("Starting Datapulse console v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("UI bundle directory: {:?}", server.dist_dir);

            if let Err(e) = serve(AppState::new(server)).await {
                tracing::error!("Console host failed: {}", e);
                return Err(e.into());
            }
        }

        Commands::Routes { format } => {
            let rows = route_table();
            match format {
                Format::Table => print!("{}", render_route_table(&rows)),
                Format::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
            }
        }

        Commands::Resolve {
            path,
            status,
            rows,
            failed,
            format,
        } => {
            let status = status.unwrap_or(config.console.connection_status);
            let fetch = if failed {
                Some(FetchOutcome::Failed)
            } else {
                rows.map(FetchOutcome::Rows)
            };

            let resolved = resolve_path(&path, status, fetch);
            match format {
                Format::Table => print!("{}", resolved.render()),
                Format::Json => println!("{}", serde_json::to_string_pretty(&resolved)?),
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}
