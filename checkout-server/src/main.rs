use checkout_server::{AppState, Config, Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment and logging
    dotenv::dotenv().ok();
    let config = Config::from_env();
    checkout_server::utils::init_logger_with_file(
        Some(&config.log_level),
        config.log_dir.as_deref(),
    );

    tracing::info!("Checkout server starting...");

    // 2. Initialize state (in-memory store backend)
    let state = AppState::in_memory(config.clone());

    // 3. Run the HTTP server until shutdown
    if let Err(e) = Server::with_state(config, state).run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
