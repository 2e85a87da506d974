//! Gemeinsamer Server-Zustand fuer den Signaling-Service
//!
//! Haelt die drei geteilten Zustands-Manager (Registry, Vermittlung,
//! Broadcaster) samt Router und Lifecycle als einen Arc-geteilten Besitzer.
//! Alle Invarianten werden an dieser Grenze durchgesetzt; keine Komponente
//! greift in den internen Speicher einer anderen.

use plausch_matching::registry::SessionRegistry;
use plausch_matching::vermittlung::Vermittlung;
use std::sync::Arc;
use std::time::Instant;

use crate::broadcast::EventBroadcaster;
use crate::lifecycle::SessionLifecycle;
use crate::router::MessageRouter;

/// Konfiguration fuer den Signaling-Service
#[derive(Debug, Clone)]
pub struct SignalingConfig {
    /// Anzeigename des Servers
    pub server_name: String,
    /// Maximale gleichzeitige Clients
    pub max_clients: u32,
}

impl Default for SignalingConfig {
    fn default() -> Self {
        Self {
            server_name: "Plausch Server".to_string(),
            max_clients: 4096,
        }
    }
}

/// Gemeinsamer Server-Zustand (thread-safe, Arc-geteilt)
///
/// Alle Manager teilen via Clone ihren inneren Zustand; der `SignalingState`
/// ist die einzige Stelle, die sie zusammensetzt.
pub struct SignalingState {
    /// Server-Konfiguration
    pub config: Arc<SignalingConfig>,
    /// Session-Registry (wer ist verbunden, Profil-Flags)
    pub registry: SessionRegistry,
    /// Vermittlungs-Engine (Warteschlange + Partnerschaften)
    pub vermittlung: Vermittlung,
    /// Send-Queues aller Clients
    pub broadcaster: EventBroadcaster,
    /// Gezielte Zustellung mit Registry-Pruefung
    pub router: MessageRouter,
    /// Verbinden/Trennen/Skip-Abwicklung
    pub lifecycle: SessionLifecycle,
    /// Startzeitpunkt des Servers (fuer Uptime-Berechnung)
    pub start_time: Instant,
}

impl SignalingState {
    /// Erstellt einen neuen SignalingState
    pub fn neu(config: SignalingConfig) -> Arc<Self> {
        let registry = SessionRegistry::neu();
        let vermittlung = Vermittlung::neu();
        let broadcaster = EventBroadcaster::neu();
        let router = MessageRouter::neu(registry.clone(), broadcaster.clone());
        let lifecycle =
            SessionLifecycle::neu(registry.clone(), vermittlung.clone(), router.clone());

        Arc::new(Self {
            config: Arc::new(config),
            registry,
            vermittlung,
            broadcaster,
            router,
            lifecycle,
            start_time: Instant::now(),
        })
    }

    /// Gibt die Uptime in Sekunden zurueck
    pub fn uptime_sek(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
