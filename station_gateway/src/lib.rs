#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! HTTP gateway for the pumping station.
//!
//! ```text
//! +------------------------------------------+
//! |  Axum HTTP Server                        |
//! |  /api/sensors (POST) -> ingest sample    |
//! |  /api/sensors (GET)  -> state snapshot   |
//! |  /api/logs    (GET)  -> event log text   |
//! |  anything else       -> 404 (HEAD too)   |
//! +------------------------------------------+
//!          |
//!          v
//! +------------------------------------------+
//! |  Arc<ControlEngine> (single lock)        |
//! +------------------------------------------+
//! ```

mod error;
pub mod handlers;
pub mod types;

pub use error::GatewayError;
pub use handlers::AppState;
pub use types::{SensorPayload, SensorStatus};

use axum::Router;
use axum::routing::get;
use eyre::WrapErr;
use std::net::SocketAddr;
use std::sync::Arc;
use station_core::ControlEngine;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Bind the listener and serve in a background task.
///
/// Must be called from within a tokio runtime. Port 0 picks a free port; the
/// actual address is returned together with a token that stops the server
/// gracefully when cancelled.
pub async fn start_server(
    engine: Arc<ControlEngine>,
    addr: SocketAddr,
) -> eyre::Result<(SocketAddr, CancellationToken)> {
    let listener = TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("failed to bind gateway to {addr}"))?;
    let actual_addr = listener
        .local_addr()
        .wrap_err("failed to read bound address")?;

    tracing::info!(addr = %actual_addr, "gateway listening");

    let shutdown = CancellationToken::new();
    let server_shutdown = shutdown.clone();
    let app = create_router(engine);
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(server_shutdown.cancelled_owned())
            .await
        {
            tracing::error!(error = %e, "gateway server error");
        }
        tracing::debug!("gateway stopped");
    });

    Ok((actual_addr, shutdown))
}

/// Create the router with all routes configured.
pub fn create_router(engine: Arc<ControlEngine>) -> Router {
    Router::new()
        .route(
            "/api/sensors",
            get(handlers::read_sensors)
                .head(handlers::unknown_route)
                .post(handlers::ingest_sensors)
                .fallback(handlers::unknown_route),
        )
        .route(
            "/api/logs",
            get(handlers::read_logs)
                .head(handlers::unknown_route)
                .fallback(handlers::unknown_route),
        )
        .fallback(handlers::unknown_route)
        .with_state(engine)
}
