//! Session-Registry – Verwaltet die Sessions aller verbundenen Clients
//!
//! Die Registry ist der alleinige Eigentuemer der `ClientSession`-Eintraege:
//! angelegt beim Verbindungsaufbau, veraendert nur durch Profil-Updates,
//! geloescht beim Trennen. Alle anderen Komponenten lesen nur.

use dashmap::DashMap;
use plausch_core::types::{ClientId, GenderFilter};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// ClientSession
// ---------------------------------------------------------------------------

/// Transienter Zustand eines verbundenen Clients
///
/// Alle Flags sind client-behauptet und rein advisorisch; der Server
/// verifiziert nichts und wertet sie bei der Vermittlung nicht aus.
#[derive(Debug, Clone)]
pub struct ClientSession {
    pub id: ClientId,
    /// Premium-Flag (unverifiziert, nur zur Anzeige beim Partner)
    pub is_premium: bool,
    /// Geschlechts-Filter (entgegengenommen, vom Matching nicht ausgewertet)
    pub gender_filter: GenderFilter,
    /// Nur-Audio-Modus gewuenscht
    pub voice_only: bool,
}

impl ClientSession {
    /// Erstellt eine frische Session mit Standard-Flags
    fn neu(id: ClientId) -> Self {
        Self {
            id,
            is_premium: false,
            gender_filter: GenderFilter::Any,
            voice_only: false,
        }
    }
}

// ---------------------------------------------------------------------------
// SessionRegistry
// ---------------------------------------------------------------------------

/// Verwaltet die Sessions aller verbundenen Clients
///
/// Thread-safe via Arc + DashMap. Clone der Registry teilt den inneren Zustand.
#[derive(Clone)]
pub struct SessionRegistry {
    inner: Arc<SessionRegistryInner>,
}

struct SessionRegistryInner {
    /// Alle Sessions, indiziert nach ClientId
    sessions: DashMap<ClientId, ClientSession>,
}

impl SessionRegistry {
    /// Erstellt eine neue, leere SessionRegistry
    pub fn neu() -> Self {
        Self {
            inner: Arc::new(SessionRegistryInner {
                sessions: DashMap::new(),
            }),
        }
    }

    /// Registriert einen neuen Client mit Standard-Flags
    ///
    /// Jede ID wird pro Verbindung frisch vergeben; Idempotenz ist daher
    /// nicht erforderlich.
    pub fn registrieren(&self, id: ClientId) {
        self.inner.sessions.insert(id, ClientSession::neu(id));
        tracing::info!(client = %id, "Client registriert");
    }

    /// Fuegt partielle Profil-Felder in eine bestehende Session ein
    ///
    /// Stiller No-op wenn die ID unbekannt ist – es darf nie eine
    /// Geister-Session entstehen.
    pub fn profil_aktualisieren(
        &self,
        id: &ClientId,
        is_premium: Option<bool>,
        gender_filter: Option<GenderFilter>,
        voice_only: Option<bool>,
    ) {
        let mut session = match self.inner.sessions.get_mut(id) {
            Some(s) => s,
            None => {
                tracing::debug!(client = %id, "Profil-Update fuer unbekannten Client ignoriert");
                return;
            }
        };

        if let Some(premium) = is_premium {
            session.is_premium = premium;
        }
        if let Some(filter) = gender_filter {
            session.gender_filter = filter;
        }
        if let Some(voice) = voice_only {
            session.voice_only = voice;
        }

        tracing::debug!(
            client = %id,
            is_premium = session.is_premium,
            gender_filter = ?session.gender_filter,
            voice_only = session.voice_only,
            "Profil aktualisiert"
        );
    }

    /// Prueft ob ein Client registriert ist
    ///
    /// Vom Message-Router benutzt, um Weiterleitungsziele zu validieren.
    pub fn existiert(&self, id: &ClientId) -> bool {
        self.inner.sessions.contains_key(id)
    }

    /// Entfernt eine Session (nur vom Session-Lifecycle beim Trennen gerufen)
    pub fn entfernen(&self, id: &ClientId) {
        if self.inner.sessions.remove(id).is_some() {
            tracing::info!(client = %id, "Client entfernt");
        }
    }

    /// Gibt eine Kopie der Session zurueck
    pub fn session(&self, id: &ClientId) -> Option<ClientSession> {
        self.inner.sessions.get(id).map(|s| s.clone())
    }

    /// Gibt die Anzahl der registrierten Clients zurueck
    pub fn anzahl(&self) -> usize {
        self.inner.sessions.len()
    }
}

impl Default for SessionRegistry {
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

    #[test]
    fn registrieren_und_entfernen() {
        let registry = SessionRegistry::neu();
        let id = ClientId::new();

        registry.registrieren(id);
        assert!(registry.existiert(&id));
        assert_eq!(registry.anzahl(), 1);

        registry.entfernen(&id);
        assert!(!registry.existiert(&id));
        assert_eq!(registry.anzahl(), 0);
    }

    #[test]
    fn frische_session_hat_standard_flags() {
        let registry = SessionRegistry::neu();
        let id = ClientId::new();
        registry.registrieren(id);

        let session = registry.session(&id).expect("Session muss existieren");
        assert!(!session.is_premium);
        assert_eq!(session.gender_filter, GenderFilter::Any);
        assert!(!session.voice_only);
    }

    #[test]
    fn profil_update_fuegt_partiell_ein() {
        let registry = SessionRegistry::neu();
        let id = ClientId::new();
        registry.registrieren(id);

        registry.profil_aktualisieren(&id, Some(true), None, None);
        let session = registry.session(&id).unwrap();
        assert!(session.is_premium);
        assert_eq!(session.gender_filter, GenderFilter::Any);

        // Zweites Update darf das Premium-Flag nicht zuruecksetzen
        registry.profil_aktualisieren(&id, None, Some(GenderFilter::Female), Some(true));
        let session = registry.session(&id).unwrap();
        assert!(session.is_premium);
        assert_eq!(session.gender_filter, GenderFilter::Female);
        assert!(session.voice_only);
    }

    #[test]
    fn profil_update_unbekannte_id_erzeugt_keine_geister_session() {
        let registry = SessionRegistry::neu();
        let id = ClientId::new();

        registry.profil_aktualisieren(&id, Some(true), None, None);
        assert!(!registry.existiert(&id));
        assert_eq!(registry.anzahl(), 0);
    }

    #[test]
    fn entfernen_unbekannter_id_ist_no_op() {
        let registry = SessionRegistry::neu();
        registry.entfernen(&ClientId::new());
        assert_eq!(registry.anzahl(), 0);
    }

    #[test]
    fn clone_teilt_inneren_state() {
        let r1 = SessionRegistry::neu();
        let r2 = r1.clone();
        let id = ClientId::new();

        r1.registrieren(id);
        assert!(r2.existiert(&id));
    }
}
