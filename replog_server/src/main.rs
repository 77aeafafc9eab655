mod api;
mod error;
mod params;

use actix_web::{web, App, HttpServer};
use clap::Parser;
use replog_core::{Config, JsonDocStore, Result};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "replog")]
#[command(about = "Exercise log tracking service", long_about = None)]
struct Cli {
    /// Path to a config file (defaults to the XDG config location)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override data directory
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Override listen port
    #[arg(long)]
    port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    bind: Option<String>,
}

/// Resolve the listen port: CLI flag beats the PORT env var beats the config
///
/// An unparseable PORT value is ignored rather than fatal.
fn resolve_port(flag: Option<u16>, env_port: Option<String>, config_port: u16) -> u16 {
    flag.or_else(|| env_port.and_then(|p| p.trim().parse().ok()))
        .unwrap_or(config_port)
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize logging
    replog_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Precedence: CLI flag, then environment, then config file
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let port = resolve_port(cli.port, std::env::var("PORT").ok(), config.server.port);
    let bind = cli.bind.unwrap_or_else(|| config.server.bind.clone());

    let store = web::Data::new(JsonDocStore::new(&data_dir));
    tracing::info!("Storing user documents under {:?}", data_dir);

    let server = HttpServer::new(move || {
        App::new()
            // The API has no credentials to protect; allow any origin
            .wrap(actix_cors::Cors::permissive())
            .app_data(store.clone())
            .configure(api::configure)
            .default_service(web::route().to(api::not_found))
    })
    .bind((bind.as_str(), port))?;

    tracing::info!("Listening on {}:{}", bind, port);
    server.run().await?;

    Ok(())
}
