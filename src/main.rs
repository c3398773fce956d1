mod config;
mod handlers;
mod models;
mod routes;
mod services;
mod sheets;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use crate::config::load_config;
use crate::routes::create_router;
use crate::sheets::SheetsClient;

fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = load_config().map_err(|e| anyhow::anyhow!("config error: {e}"))?;

    let sheets = SheetsClient::new(&config);
    let app = create_router(sheets, &config);

    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    info!("Listening on {}", config.server_address);
    axum::serve(listener, app).await?;

    Ok(())
}
