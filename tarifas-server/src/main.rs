//! tarifas-server binary - HTTP API for the package tariff front-end
//!
//! Reads database settings from the environment (a local `.env` is
//! honored), then serves the JSON API until Ctrl+C/SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use tarifas_core::{init_tracing, DatabaseConfig, TracingConfig};
use tarifas_server::db::ConnectionManager;
use tarifas_server::http::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "tarifas-server",
    version,
    about = "HTTP API over the tarifas database - clientes, paises, paquetes"
)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    init_tracing(&TracingConfig { debug: args.debug })?;

    let db_config = DatabaseConfig::from_env().context("database configuration")?;
    let manager = ConnectionManager::new(db_config);

    let bind_addr: SocketAddr = format!("{}:{}", args.bind, args.port)
        .parse()
        .context("invalid bind address")?;

    run_server(manager, ServerConfig { bind_addr }).await?;
    Ok(())
}
