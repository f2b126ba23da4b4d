//! Catalog API server binary.
//!
//! This binary reads settings from the environment, opens the database pool,
//! and hands both to the API server. The API layer itself stays agnostic of
//! the storage backend.

use std::net::IpAddr;

use catalog::api::{self, ApiError, Config};
use catalog::config::Settings;
use catalog::db::{DbError, PgDatabase};
use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use tracing::info;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(catalog::binary::database))]
    Database(#[from] DbError),

    #[error("API server error: {0}")]
    #[diagnostic(code(catalog::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "catalog-api")]
#[command(author, version, about = "Catalog API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    // Variables already present in the process environment win over .env.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::from_env();

    api::init_tracing();
    info!("{} v{}", settings.app_name, settings.app_version);

    let db = PgDatabase::connect(&settings).await?;
    info!(
        "Connected to database at {}:{}/{}",
        settings.db_host, settings.db_port, settings.db_name
    );

    api::run(
        Config {
            host: cli.host,
            port: cli.port,
        },
        &settings,
        db,
    )
    .await?;

    info!("Server stopped");
    Ok(())
}
