use reservation_server::{Config, Server, ServerState, setup_logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. .env, configuration, logging
    let _ = dotenvy::dotenv();
    let config = Config::from_env()?;
    setup_logging(&config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        "Reservation server starting"
    );
    tracing::info!(
        timezone = %config.policy.timezone,
        closed = %config.policy.closed_weekday,
        opening = %config.policy.opening_time,
        last_seating = %config.policy.last_seating_time,
        "Booking policy loaded"
    );

    // 2. Database and shared state
    let state = ServerState::initialize(&config).await?;

    // 3. HTTP server
    let server = Server::new(state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
