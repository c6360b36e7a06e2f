use profile_server::{app::App, config::ServerConfig, shutdown, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = ServerConfig::load()?;

    // Initialize tracing
    telemetry::init(&settings.log.level)?;
    info!(
        msg = "Loaded configuration",
        addr = %settings.server.addr(),
        sink = ?settings.app.sink,
        cors_allowed_origins = ?settings.app.cors_allowed_origins
    );

    // Build routes
    let app = App::new().service(&settings)?;

    let addr = settings.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(msg = "Starting server", addr = %addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::signal())
        .await?;

    info!(msg = "Server stopped");

    Ok(())
}
