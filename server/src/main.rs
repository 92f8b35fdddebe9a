mod config;
mod routes;
mod state;

use std::net::SocketAddr;

use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    if config.contract.is_deployed() {
        tracing::info!(address = %config.contract.address, chain_id = ?config.contract.chain_id, "contract configured");
    } else {
        tracing::warn!(address = %config.contract.address, "contract address is a placeholder");
    }

    let state = state::AppState::new(passport::sample_record(), config.contract.clone())?;
    let app = routes::app(state)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(port = config.port, "battery passport listening");
    axum::serve(listener, app).await?;
    Ok(())
}
