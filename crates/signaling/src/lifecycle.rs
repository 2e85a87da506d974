//! Session-Lifecycle – Ankunft, Trennung und Skip konsistent abwickeln
//!
//! Sorgt dafuer, dass Warteschlange und aktive Partnerschaften konsistent
//! bleiben wenn ein Client verschwindet oder explizit ueberspringt.
//!
//! ## Reihenfolge beim Trennen
//! Erst Partnerschaft aufloesen und den verbleibenden Partner benachrichtigen,
//! dann den Registry-Eintrag loeschen. Der Partner-Lookup haengt an der
//! Partnerschafts-Kante, nicht an der Registry; die Benachrichtigung muss
//! aber vor dem Entfernen laufen, damit kein Forward des Partners eine halb
//! abgebaute Session trifft.

use plausch_core::types::ClientId;
use plausch_matching::registry::SessionRegistry;
use plausch_matching::vermittlung::Vermittlung;
use plausch_protocol::nachrichten::ServerNachricht;

use crate::router::MessageRouter;

/// Wickelt Verbinden, Trennen und Skip ab
#[derive(Clone)]
pub struct SessionLifecycle {
    registry: SessionRegistry,
    vermittlung: Vermittlung,
    router: MessageRouter,
}

impl SessionLifecycle {
    /// Erstellt einen neuen SessionLifecycle
    pub fn neu(
        registry: SessionRegistry,
        vermittlung: Vermittlung,
        router: MessageRouter,
    ) -> Self {
        Self {
            registry,
            vermittlung,
            router,
        }
    }

    /// Neuer Client: Session mit Standard-Flags anlegen
    pub fn verbinden(&self, id: ClientId) {
        self.registry.registrieren(id);
    }

    /// Client weg: Partnerschaft aufloesen, Partner benachrichtigen,
    /// Session loeschen
    pub fn trennen(&self, id: &ClientId) {
        let aufloesung = self.vermittlung.aufloesen(id);
        if let Some(partner) = aufloesung.partner {
            self.router
                .weiterleiten(&partner, ServerNachricht::PartnerDisconnected);
        }
        self.registry.entfernen(id);
        tracing::debug!(client = %id, "Session abgewickelt");
    }

    /// Client ueberspringt: Partnerschaft aufloesen, Partner benachrichtigen
    ///
    /// Der ueberspringende Client bleibt registriert und darf sofort wieder
    /// einen Partner suchen.
    pub fn ueberspringen(&self, id: &ClientId) {
        let aufloesung = self.vermittlung.aufloesen(id);
        if let Some(partner) = aufloesung.partner {
            self.router.weiterleiten(&partner, ServerNachricht::Skipped);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
