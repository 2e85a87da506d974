//! Vermittlungs-Engine – FIFO-Warteschlange und Partnerschafts-Kanten
//!
//! Die einzige Komponente mit Matching-Logik. Vermittelt wird strikt FIFO:
//! der aelteste Wartende zuerst, ohne Prioritaets-Umordnung – auch nicht
//! fuer Premium-Clients und unabhaengig vom Geschlechts-Filter (beobachtetes
//! Produktverhalten; die Flags werden gespeichert, aber nicht ausgewertet).
//!
//! ## Invarianten
//! - Keine ID erscheint doppelt in der Warteschlange
//! - Partnerschaften sind symmetrisch: existiert A→B, existiert auch B→A
//! - Ein Client hat hoechstens einen Partner
//! - Ein Client ist zu jedem Zeitpunkt in hoechstens einem der Zustaende
//!   {wartend, vermittelt}
//!
//! ## Nebenlaeufigkeit
//! Ein einziger Mutex ueber der Warteschlange bildet den kritischen
//! Abschnitt: "Pool pruefen, Kopf entnehmen, Kanten anlegen" laeuft als ein
//! logischer Schritt. Zwei gleichzeitige Partner-Suchen koennen so nie
//! denselben Wartenden beanspruchen.

use dashmap::DashMap;
use parking_lot::Mutex;
use plausch_core::types::ClientId;
use std::collections::VecDeque;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Ergebnistypen
// ---------------------------------------------------------------------------

/// Ausgang einer Partner-Suche
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VermittlungsErgebnis {
    /// Partner gefunden; beide Seiten muessen benachrichtigt werden
    Vermittelt { partner: ClientId },
    /// Kein Partner verfuegbar; Client wartet jetzt in der Warteschlange
    Eingereiht,
}

/// Ausgang einer Aufloesung (Skip oder Trennung)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aufloesung {
    /// Der bisherige Partner, falls der Client vermittelt war
    pub partner: Option<ClientId>,
    /// True wenn der Client aus der Warteschlange entfernt wurde
    pub war_wartend: bool,
}

impl Aufloesung {
    /// True wenn weder Partnerschaft noch Warteschlangen-Eintrag existierte
    pub fn war_no_op(&self) -> bool {
        self.partner.is_none() && !self.war_wartend
    }
}

// ---------------------------------------------------------------------------
// Vermittlung
// ---------------------------------------------------------------------------

/// Warteschlange + Partnerschafts-Kanten, hinter einem gemeinsamen Mutex
///
/// Thread-safe via Arc. Clone teilt den inneren Zustand.
#[derive(Clone)]
pub struct Vermittlung {
    inner: Arc<VermittlungInner>,
}

struct VermittlungInner {
    /// FIFO-Warteschlange der Partner-Suchenden; der Mutex ist zugleich der
    /// kritische Abschnitt fuer alle zustandsaendernden Operationen
    warteschlange: Mutex<VecDeque<ClientId>>,
    /// Partnerschafts-Kanten, beide Richtungen (A→B und B→A)
    partner: DashMap<ClientId, ClientId>,
}

impl Vermittlung {
    /// Erstellt eine neue, leere Vermittlung
    pub fn neu() -> Self {
        Self {
            inner: Arc::new(VermittlungInner {
                warteschlange: Mutex::new(VecDeque::new()),
                partner: DashMap::new(),
            }),
        }
    }

    /// Sucht einen Partner fuer `id` oder reiht den Client ein
    ///
    /// Der Aufrufer muss eine bestehende Partnerschaft vorher aufloesen
    /// (und den alten Partner benachrichtigen); als Rueckfallebene wird
    /// eine uebrig gebliebene Kante hier still entfernt, damit die
    /// Ein-Partner-Invariante nie brechen kann.
    pub fn partner_suchen(&self, id: ClientId) -> VermittlungsErgebnis {
        let mut warteschlange = self.inner.warteschlange.lock();

        if let Some((_, alter)) = self.inner.partner.remove(&id) {
            self.inner.partner.remove(&alter);
            tracing::warn!(
                client = %id,
                alter_partner = %alter,
                "Partner-Suche mit bestehender Partnerschaft – Kante aufgeloest"
            );
        }

        // Bereits wartend -> idempotent, Position bleibt erhalten
        if warteschlange.contains(&id) {
            return VermittlungsErgebnis::Eingereiht;
        }

        match warteschlange.pop_front() {
            // Selbst-Match darf durch die Invarianten nicht vorkommen;
            // defensiv wie ein leerer Pool behandeln und wieder einreihen
            Some(partner) if partner == id => {
                warteschlange.push_back(id);
                VermittlungsErgebnis::Eingereiht
            }
            Some(partner) => {
                self.inner.partner.insert(id, partner);
                self.inner.partner.insert(partner, id);
                tracing::info!(client = %id, partner = %partner, "Partnerschaft gebildet");
                VermittlungsErgebnis::Vermittelt { partner }
            }
            None => {
                warteschlange.push_back(id);
                tracing::debug!(
                    client = %id,
                    wartende = warteschlange.len(),
                    "In Warteschlange eingereiht"
                );
                VermittlungsErgebnis::Eingereiht
            }
        }
    }

    /// Loest Partnerschaft und/oder Warteschlangen-Eintrag von `id` auf
    ///
    /// Beide Pruefungen laufen immer (defensiv), obwohl ein Client per
    /// Invariante nur in einem der Zustaende sein kann. Doppelte Aufloesung
    /// ist ein No-op, kein Fehler.
    pub fn aufloesen(&self, id: &ClientId) -> Aufloesung {
        let mut warteschlange = self.inner.warteschlange.lock();

        let partner = self.inner.partner.remove(id).map(|(_, p)| p);
        if let Some(ref p) = partner {
            self.inner.partner.remove(p);
            tracing::info!(client = %id, partner = %p, "Partnerschaft aufgeloest");
        }

        let vorher = warteschlange.len();
        warteschlange.retain(|anderer| anderer != id);
        let war_wartend = warteschlange.len() != vorher;
        if war_wartend {
            tracing::debug!(client = %id, "Aus Warteschlange entfernt");
        }

        Aufloesung {
            partner,
            war_wartend,
        }
    }

    /// Gibt den aktuellen Partner von `id` zurueck
    pub fn partner_von(&self, id: &ClientId) -> Option<ClientId> {
        self.inner.partner.get(id).map(|p| *p)
    }

    /// Prueft ob `id` gerade in der Warteschlange wartet
    pub fn wartet(&self, id: &ClientId) -> bool {
        self.inner.warteschlange.lock().contains(id)
    }

    /// Gibt die Anzahl der Wartenden zurueck
    pub fn wartende_anzahl(&self) -> usize {
        self.inner.warteschlange.lock().len()
    }
}

impl Default for Vermittlung {
    fn default() -> Self {
        Self::neu()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
