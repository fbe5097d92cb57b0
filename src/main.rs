// Start of file: src/main.rs

use axum::{serve, Router};
use tokio::net::TcpListener;

use axum_responder::core::{logging::init_tracing, server};
use axum_responder::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // set up logging
    init_tracing();

    let state: AppState = AppState::from_env()?;

    // build our router
    let app: Router = server::create_app(&state);

    let listener: TcpListener = server::setup_listener(&state).await?;

    tracing::info!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}

// End of file: src/main.rs
