//! Message-Router – Validiert Ziele und stellt Nachrichten gezielt zu
//!
//! Der Router ist ein zustandsloses, opakes Relay: er prueft das Ziel gegen
//! die Session-Registry und reicht die Nachricht an die Send-Queue des
//! Empfaengers weiter. Inhalte werden weder validiert noch limitiert.
//!
//! Unbekannte Ziele werden still verworfen – der Absender bekommt fuer
//! keine Nachrichtenart eine Zustellbestaetigung (best-effort at-most-once).

use plausch_core::types::ClientId;
use plausch_matching::registry::SessionRegistry;
use plausch_protocol::nachrichten::ServerNachricht;

use crate::broadcast::EventBroadcaster;

/// Stellt Nachrichten an einzelne Clients zu, nach Registry-Pruefung
#[derive(Clone)]
pub struct MessageRouter {
    registry: SessionRegistry,
    broadcaster: EventBroadcaster,
}

impl MessageRouter {
    /// Erstellt einen neuen MessageRouter
    pub fn neu(registry: SessionRegistry, broadcaster: EventBroadcaster) -> Self {
        Self {
            registry,
            broadcaster,
        }
    }

    /// Leitet eine Nachricht an `ziel` weiter
    ///
    /// Gibt `true` zurueck wenn das Ziel registriert war und die Nachricht
    /// eingereiht wurde; `false` bei unbekanntem Ziel oder voller Queue.
    /// In beiden Faellen erfaehrt der Absender nichts davon.
    pub fn weiterleiten(&self, ziel: &ClientId, nachricht: ServerNachricht) -> bool {
        if !self.registry.existiert(ziel) {
            tracing::debug!(ziel = %ziel, "Weiterleitung an unbekanntes Ziel verworfen");
            return false;
        }
        self.broadcaster.an_client_senden(ziel, nachricht)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn router_mit_state() -> (MessageRouter, SessionRegistry, EventBroadcaster) {
        let registry = SessionRegistry::neu();
        let broadcaster = EventBroadcaster::neu();
        let router = MessageRouter::neu(registry.clone(), broadcaster.clone());
        (router, registry, broadcaster)
    }

    #[tokio::test]
    async fn zustellung_an_registrierten_client() {
        let (router, registry, broadcaster) = router_mit_state();
        let id = ClientId::new();

        registry.registrieren(id);
        let mut rx = broadcaster.client_registrieren(id);

        assert!(router.weiterleiten(&id, ServerNachricht::Skipped));
        assert!(matches!(rx.try_recv().unwrap(), ServerNachricht::Skipped));
    }

    #[tokio::test]
    async fn unbekanntes_ziel_wird_still_verworfen() {
        let (router, _registry, _broadcaster) = router_mit_state();

        // Nie registrierte ID: keine Zustellung, kein Fehler
        let gesendet = router.weiterleiten(&ClientId::new(), ServerNachricht::PartnerDisconnected);
        assert!(!gesendet);
    }

    #[tokio::test]
    async fn entfernte_session_blockiert_zustellung() {
        let (router, registry, broadcaster) = router_mit_state();
        let id = ClientId::new();

        registry.registrieren(id);
        let mut rx = broadcaster.client_registrieren(id);
        registry.entfernen(&id);

        // Registry-Pruefung greift auch wenn die Queue noch existiert
        assert!(!router.weiterleiten(&id, ServerNachricht::Skipped));
        assert!(rx.try_recv().is_err());
    }
}
