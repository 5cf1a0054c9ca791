use clap::Parser;
use shows_api::lifecycle::{serve, setup_tracing, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = Config::parse();
    setup_tracing();

    info!(addr = %config.addr(), buffer_size = config.buffer_size, "Starting shows API");
    serve(&config).await.map_err(|e| e.to_string())?;

    info!("Server stopped");
    Ok(())
}
