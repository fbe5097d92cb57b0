//! tests/mod.rs
//! A shared test helper to spawn the demo app on an ephemeral port.

#![allow(dead_code)]

use axum::{serve, Router};
use axum_responder::config::{environment::EnvironmentVariables, state::AppState};
use axum_responder::core::server::create_app;
use axum_responder::responder::ResponderOptions;
use tokio::net::TcpListener as TokioTcpListener;

/// Spawns the app with default settings and returns its base URL.
pub fn spawn_app() -> String {
    spawn_app_with(EnvironmentVariables::default(), ResponderOptions::default())
}

/// Spawns the app with explicit environment and responder options.
pub fn spawn_app_with(env: EnvironmentVariables, options: ResponderOptions) -> String {
    let state: AppState = AppState::with_options(env, options);

    // * Build the application with the same layers as main().
    let app: Router = create_app(&state);

    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    format!("http://{}", addr)
}
