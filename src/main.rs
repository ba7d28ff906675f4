//! svcerr Server entry point.

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use svcerr_server::AppState;
use svcerr_server::config::Config;

#[tokio::main]
async fn main() {
    let config = Config::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let addr = SocketAddr::new(config.host.parse().expect("invalid host"), config.port);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        %addr,
        log_format = %config.log_format,
        redact_server_detail = config.redact,
        sentinels = svcerr_core::sentinels().len(),
        "svcerr server starting",
    );

    let app = svcerr_server::router(AppState::new(&config));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "accepting requests");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("svcerr server shut down");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install signal handler");
    tracing::info!("Shutdown signal received");
}
