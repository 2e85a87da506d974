//! Health-Check-Endpunkt fuer Plausch
//!
//! Endpoint: `GET /health`
//! Response: JSON mit Status, Version, Uptime und aktuellen Client-Zahlen

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Liefert die aktuellen Client-Zahlen und die Uptime fuer den Health-Check.
///
/// Implementiert vom Server ueber Registry, Warteschlange und Startzeit,
/// damit dieses Crate keine Abhaengigkeit auf den Signaling-Kern braucht.
pub trait Statistik: Send + Sync {
    /// Anzahl aktuell verbundener Clients
    fn online_anzahl(&self) -> usize;
    /// Anzahl Clients in der Warteschlange
    fn wartende_anzahl(&self) -> usize;
    /// Sekunden seit dem Serverstart (nicht seit Router-Konstruktion)
    fn uptime_sekunden(&self) -> u64;
}

/// Status des Health-Checks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Antwort des Health-Check-Endpunkts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub online_clients: usize,
    pub waiting_clients: usize,
}

/// Geteilter Zustand fuer den Health-Check-Handler
#[derive(Clone)]
struct HealthState {
    statistik: Arc<dyn Statistik>,
}

/// Axum-Router fuer den `/health`-Endpunkt
pub fn health_router(statistik: Arc<dyn Statistik>) -> Router {
    let state = HealthState { statistik };
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

/// `GET /health` – gibt den Serverstatus zurueck
async fn health_handler(State(state): State<HealthState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.statistik.uptime_sekunden(),
        online_clients: state.statistik.online_anzahl(),
        waiting_clients: state.statistik.wartende_anzahl(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FesteStatistik {
        online: AtomicUsize,
        wartend: AtomicUsize,
        uptime: u64,
    }

    impl Statistik for FesteStatistik {
        fn online_anzahl(&self) -> usize {
            self.online.load(Ordering::Relaxed)
        }

        fn wartende_anzahl(&self) -> usize {
            self.wartend.load(Ordering::Relaxed)
        }

        fn uptime_sekunden(&self) -> u64 {
            self.uptime
        }
    }

    #[test]
    fn health_response_serialisierung() {
        let response = HealthResponse {
            status: HealthStatus::Healthy,
            version: "0.1.0".to_string(),
            uptime_seconds: 3600,
            online_clients: 12,
            waiting_clients: 1,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"version\":\"0.1.0\""));
        assert!(json.contains("\"uptime_seconds\":3600"));
        assert!(json.contains("\"online_clients\":12"));
        assert!(json.contains("\"waiting_clients\":1"));
    }

    #[test]
    fn health_response_deserialisierung() {
        let json = r#"{"status":"healthy","version":"0.1.0","uptime_seconds":100,"online_clients":0,"waiting_clients":0}"#;
        let response: HealthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, HealthStatus::Healthy);
        assert_eq!(response.version, "0.1.0");
        assert_eq!(response.uptime_seconds, 100);
        assert_eq!(response.online_clients, 0);
    }

    #[test]
    fn statistik_wird_durchgereicht() {
        let statistik = Arc::new(FesteStatistik {
            online: AtomicUsize::new(7),
            wartend: AtomicUsize::new(1),
            uptime: 42,
        });
        assert_eq!(statistik.online_anzahl(), 7);
        assert_eq!(statistik.wartende_anzahl(), 1);
        // Die Uptime kommt aus der Statistik, nicht aus dem Router
        assert_eq!(statistik.uptime_sekunden(), 42);

        // Router-Konstruktion mit Trait-Objekt kompiliert und haelt den Zustand
        let _router = health_router(statistik);
    }
}
