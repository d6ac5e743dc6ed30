//! HTTP server bind and serve lifecycle.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::error::Result;
use crate::utils::shutdown_signal;

/// Bind the listener and serve until shutdown.
///
/// Binds on all interfaces at the configured port and emits the single
/// startup log line. A bind failure (port occupied, permission denied)
/// is returned to the caller; the process must not serve partial state.
/// On Ctrl+C or SIGTERM the server stops accepting new connections and
/// drains in-flight requests before returning.
pub async fn run(config: &Config) -> Result<()> {
    let state = AppState::new(config.sha());
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    info!(
        port = config.port,
        environment = %config.app_env,
        sha = config.sha(),
        "profiles-api listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
