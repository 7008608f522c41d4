//! Cockpit Server
//!
//! JSON API backend for the UHNW liquidity intelligence dashboard:
//! - Login/logout over the seeded user directory, session held server-side
//! - Liquidity trigger panel: timeline filtering, totals, CSV export
//! - Data source monitoring: status, ingestion metrics, conflict resolution
//! - Manual intelligence intake with form validation
//!
//! Usage:
//! ```bash
//! # With config file
//! cockpit-server --config config.yaml
//!
//! # Or with environment variables
//! COCKPIT_PORT=9000 cockpit-server
//! ```
//!
//! Test with:
//! ```bash
//! curl http://localhost:8090/api/triggers?timeline=0-30
//!
//! curl http://localhost:8090/api/auth/login \
//!   -H "Content-Type: application/json" \
//!   -d '{"email": "rm_user@nuvama.com", "password": "cockpit2025"}'
//! ```

mod config;

use clap::{Parser, Subcommand};
use config::ServerConfig;
use cockpit_api::ApiServer;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const BANNER: &str = r#"
   ___         _        _ _
  / __|___  __| |___ __(_) |_
 | (__/ _ \/ _| / / '_ \ |  _|   UHNW Liquidity Intelligence
  \___\___/\__|_\_\ .__/_|\__|   version : {VERSION}
                  |_|
"#;

/// Cockpit Server - UHNW liquidity intelligence backend
#[derive(Parser)]
#[command(name = "cockpit-server")]
#[command(about = "Cockpit dashboard API server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to configuration file (YAML or TOML)
    #[arg(short, long, value_name = "FILE", env = "COCKPIT_CONFIG", global = true)]
    config: Option<String>,

    /// Host to bind to (overrides config)
    #[arg(long, value_name = "HOST", global = true)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long, value_name = "PORT", global = true)]
    port: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective configuration and exit
    PrintConfig,
}

fn load_config(cli: &Cli) -> anyhow::Result<ServerConfig> {
    let mut config = match &cli.config {
        Some(path) => ServerConfig::from_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config from {}: {}", path, e))?,
        None => ServerConfig::default(),
    };

    config.merge_env();

    // CLI flags beat both file and env
    if let Some(host) = &cli.host {
        config.api.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.api.port = port;
    }

    Ok(config)
}

fn init_tracing(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(config.logging.log_requests)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if let Some(Commands::PrintConfig) = cli.command {
        println!("{}", serde_yaml::to_string(&config)?);
        return Ok(());
    }

    init_tracing(&config);
    println!(
        "{}",
        BANNER.replace("{VERSION}", env!("CARGO_PKG_VERSION"))
    );
    info!(
        host = %config.api.host,
        port = config.api.port,
        simulate_latency = config.api.simulate_latency,
        "starting cockpit server"
    );

    ApiServer::new(config.api).serve().await
}
