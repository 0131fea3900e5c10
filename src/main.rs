//! APEX MCP Relay server entrypoint

use tracing_subscriber::EnvFilter;

use apex_mcp_relay::{routes, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let bind_address = config.bind_address.clone();

    let state = AppState::new(config);
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!(%bind_address, "apex-mcp-relay listening");

    axum::serve(listener, app).await?;
    Ok(())
}
