//! Event-Broadcaster – Send-Queues aller verbundenen Clients
//!
//! Der EventBroadcaster verwaltet pro verbundenem Client eine begrenzte
//! Send-Queue. Die `ClientConnection` liest aus ihrer Queue und schreibt
//! auf den TCP-Stream; alle anderen Komponenten stellen ueber
//! `an_client_senden` zu, ohne den Transport zu kennen.
//!
//! Zustellung ist fire-and-forget: volle oder geschlossene Queues verwerfen
//! die Nachricht mit einem Log-Eintrag, es gibt keine Wiederholung.

use dashmap::DashMap;
use plausch_core::types::ClientId;
use plausch_protocol::nachrichten::ServerNachricht;
use std::sync::Arc;
use tokio::sync::mpsc;

// ---------------------------------------------------------------------------
// Konfiguration
// ---------------------------------------------------------------------------

/// Groesse der Send-Queue pro Client
const SEND_QUEUE_GROESSE: usize = 64;

// ---------------------------------------------------------------------------
// ClientSender
// ---------------------------------------------------------------------------

/// Handle auf die Send-Queue eines verbundenen Clients
#[derive(Clone, Debug)]
pub struct ClientSender {
    pub client_id: ClientId,
    pub tx: mpsc::Sender<ServerNachricht>,
}

impl ClientSender {
    /// Sendet eine Nachricht nicht-blockierend an den Client
    ///
    /// Gibt `false` zurueck wenn die Queue voll oder geschlossen ist.
    pub fn senden(&self, nachricht: ServerNachricht) -> bool {
        match self.tx.try_send(nachricht) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                tracing::warn!(client = %self.client_id, "Send-Queue voll – Nachricht verworfen");
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                tracing::debug!(client = %self.client_id, "Send-Queue geschlossen (Client getrennt)");
                false
            }
        }
    }
}

// ---------------------------------------------------------------------------
// EventBroadcaster
// ---------------------------------------------------------------------------

/// Zentraler Event-Broadcaster fuer alle verbundenen Clients
///
/// Thread-safe via Arc + DashMap. Clone teilt den inneren Zustand.
#[derive(Clone)]
pub struct EventBroadcaster {
    inner: Arc<EventBroadcasterInner>,
}

struct EventBroadcasterInner {
    /// Client-Sender, indiziert nach ClientId
    clients: DashMap<ClientId, ClientSender>,
}

impl EventBroadcaster {
    /// Erstellt einen neuen EventBroadcaster
    pub fn neu() -> Self {
        Self {
            inner: Arc::new(EventBroadcasterInner {
                clients: DashMap::new(),
            }),
        }
    }

    /// Registriert einen neuen Client und gibt seine Empfangs-Queue zurueck
    ///
    /// Die `ClientConnection` liest aus dieser Queue und sendet via TCP.
    pub fn client_registrieren(&self, client_id: ClientId) -> mpsc::Receiver<ServerNachricht> {
        let (tx, rx) = mpsc::channel(SEND_QUEUE_GROESSE);
        let sender = ClientSender { client_id, tx };
        self.inner.clients.insert(client_id, sender);
        tracing::debug!(client = %client_id, "Client im Broadcaster registriert");
        rx
    }

    /// Entfernt einen Client aus dem Broadcaster
    pub fn client_entfernen(&self, client_id: &ClientId) {
        self.inner.clients.remove(client_id);
        tracing::debug!(client = %client_id, "Client aus Broadcaster entfernt");
    }

    /// Sendet eine Nachricht an einen einzelnen Client
    ///
    /// Gibt `true` zurueck wenn der Client gefunden und die Nachricht
    /// eingereiht wurde.
    pub fn an_client_senden(&self, client_id: &ClientId, nachricht: ServerNachricht) -> bool {
        match self.inner.clients.get(client_id) {
            Some(sender) => sender.senden(nachricht),
            None => {
                tracing::debug!(client = %client_id, "Senden an unbekannten Client");
                false
            }
        }
    }

    /// Prueft ob ein Client registriert ist
    pub fn ist_registriert(&self, client_id: &ClientId) -> bool {
        self.inner.clients.contains_key(client_id)
    }

    /// Gibt die Anzahl der registrierten Clients zurueck
    pub fn client_anzahl(&self) -> usize {
        self.inner.clients.len()
    }
}

impl Default for EventBroadcaster {
    fn default() -> Self {
        Self::neu()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn client_registrieren_und_senden() {
        let broadcaster = EventBroadcaster::neu();
        let id = ClientId::new();

        let mut rx = broadcaster.client_registrieren(id);
        assert!(broadcaster.ist_registriert(&id));

        let gesendet = broadcaster.an_client_senden(&id, ServerNachricht::Skipped);
        assert!(gesendet);

        let empfangen = rx.try_recv().expect("Nachricht muss vorhanden sein");
        assert!(matches!(empfangen, ServerNachricht::Skipped));
    }

    #[tokio::test]
    async fn senden_an_unbekannten_client_wird_verworfen() {
        let broadcaster = EventBroadcaster::neu();
        let gesendet =
            broadcaster.an_client_senden(&ClientId::new(), ServerNachricht::PartnerDisconnected);
        assert!(!gesendet);
    }

    #[tokio::test]
    async fn entfernter_client_empfaengt_nichts_mehr() {
        let broadcaster = EventBroadcaster::neu();
        let id = ClientId::new();

        let _rx = broadcaster.client_registrieren(id);
        broadcaster.client_entfernen(&id);

        assert!(!broadcaster.ist_registriert(&id));
        assert!(!broadcaster.an_client_senden(&id, ServerNachricht::Skipped));
        assert_eq!(broadcaster.client_anzahl(), 0);
    }

    #[tokio::test]
    async fn volle_queue_verwirft_statt_zu_blockieren() {
        let broadcaster = EventBroadcaster::neu();
        let id = ClientId::new();
        let _rx = broadcaster.client_registrieren(id);

        // Queue bis zum Rand fuellen; niemand liest
        for _ in 0..SEND_QUEUE_GROESSE {
            assert!(broadcaster.an_client_senden(&id, ServerNachricht::Skipped));
        }
        // Naechste Nachricht wird verworfen, Aufruf kehrt sofort zurueck
        assert!(!broadcaster.an_client_senden(&id, ServerNachricht::Skipped));
    }

    #[tokio::test]
    async fn clone_teilt_inneren_state() {
        let b1 = EventBroadcaster::neu();
        let b2 = b1.clone();
        let id = ClientId::new();

        let _rx = b1.client_registrieren(id);
        assert!(b2.ist_registriert(&id));
    }
}
