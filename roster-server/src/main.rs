use roster_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env and logging first so everything after shows up in the logs
    setup_environment()?;

    print_banner();

    let config = Config::from_env();
    tracing::info!(environment = %config.environment, "Roster server starting...");

    let state = ServerState::initialize(&config).await?;

    if let Err(e) = Server::with_state(config, state).run().await {
        tracing::error!("Server failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
