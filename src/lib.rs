//! # Datapulse
//!
//! Host and operator tooling for the Datapulse seller console. The console
//! itself is a Leptos front-end (`datapulse-ui`) built on the shared
//! [`datapulse_console`] model; this crate serves its bundle and inspects
//! its route table from the command line.
//!
//! ## Modules
//!
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: `tracing` subscriber setup
//! - [`server`]: Axum host with health probes and SPA fallback
//! - [`report`]: route table and route resolution reports
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use datapulse::config::Config;
//! use datapulse::server::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (config, report) = Config::load_default();
//!     datapulse::logging::init(&config.logging);
//!     report.log();
//!
//!     serve(AppState::new(config.server)).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod logging;
pub mod report;
pub mod server;

pub use config::{Config, ConfigError, LoadReport};
pub use server::{build_router, serve, AppState, ServerError};
