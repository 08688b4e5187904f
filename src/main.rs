use swasthya_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load .env and set up logging before anything can emit
    let _ = dotenvy::dotenv();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(None, log_dir.as_deref());

    // 2. Load configuration
    let config = Config::from_env();

    tracing::info!(
        "Swasthya server starting (env: {}, port: {})",
        config.environment,
        config.http_port
    );

    // 3. Initialize state (data dir, database, JWT)
    let state = ServerState::initialize(&config).await?;

    // 4. Run the HTTP server until shutdown
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
