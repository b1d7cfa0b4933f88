#![warn(clippy::pedantic, clippy::all, clippy::nursery)]

use registro_estudiantes::{config::RuntimeConfiguration, routes, state::RegistroState};
use sqlx::sqlite::SqlitePoolOptions;
use std::env;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[macro_use]
extern crate tracing;

async fn shutdown_signal(state: RegistroState) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    state.sensible_shutdown().await;
    warn!("signal received, starting graceful shutdown");
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    info!("`tracing` online");

    let options = SqlitePoolOptions::new().max_connections(15);
    let config = RuntimeConfiguration::new().expect("unable to create config");
    let state = RegistroState::new(options, &config)
        .await
        .expect("unable to create state");

    let app = routes::router(state.clone());

    let server_ip =
        env::var("REGISTRO_SERVER_IP").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let listener = TcpListener::bind(&server_ip)
        .await
        .expect("unable to listen on server ip");

    info!(?server_ip, "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .expect("unable to serve app");
}
