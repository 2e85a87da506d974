//! # plausch-observability
//!
//! Observability-Crate fuer Plausch:
//! - Health-Check-Endpunkt (`/health`) mit Client-Zahlen
//! - Structured JSON Logging via tracing-subscriber

pub mod health;
pub mod logging;

pub use health::{HealthResponse, HealthStatus, Statistik, health_router};
pub use logging::logging_initialisieren;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// Startet den Observability-HTTP-Server
///
/// Endpunkte:
/// - `GET /health` – Health-Check JSON mit Uptime und Client-Zahlen
pub async fn observability_server_starten(
    bind_addr: SocketAddr,
    statistik: Arc<dyn Statistik>,
) -> Result<()> {
    let app = health_router(statistik).layer(tower_http::trace::TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Observability-Server gestartet");

    axum::serve(listener, app).await?;
    Ok(())
}
