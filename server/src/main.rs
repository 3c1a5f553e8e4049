use delivery_server::{Config, Server, ServerState, utils};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();
    utils::logger::init(&config);

    tracing::info!("Delivery API server starting...");

    // 3. Build application state
    let state = ServerState::new(config.clone());

    // 4. Run the HTTP server
    let server = Server::with_state(config, state);
    server.run().await?;

    Ok(())
}
