//! Gemeinsame Identifikations- und Profiltypen fuer Plausch
//!
//! Client-IDs verwenden das Newtype-Pattern um Verwechslungen mit anderen
//! Strings zur Compilezeit auszuschliessen. Die ID wird beim Verbindungsaufbau
//! vom Transport vergeben und ist fuer die Lebensdauer der Verbindung stabil.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Eindeutige Client-ID (pro Verbindung, transport-vergeben)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub Uuid);

impl ClientId {
    /// Erstellt eine neue zufaellige ClientId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Gibt die innere UUID zurueck
    pub fn inner(&self) -> Uuid {
        self.0
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "client:{}", self.0)
    }
}

/// Vom Client angegebener Geschlechts-Filter
///
/// Wird entgegengenommen und in der Session gespeichert, vom
/// Vermittlungs-Algorithmus aber nicht ausgewertet (reines FIFO-Matching,
/// beobachtetes Verhalten des Produkts).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderFilter {
    /// Kein Filter (Standard)
    #[default]
    Any,
    Male,
    Female,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_id_eindeutig() {
        let a = ClientId::new();
        let b = ClientId::new();
        assert_ne!(a, b, "Zwei neue ClientIds muessen verschieden sein");
    }

    #[test]
    fn client_id_display() {
        let id = ClientId(Uuid::nil());
        assert!(id.to_string().starts_with("client:"));
    }

    #[test]
    fn client_id_serde_kompatibel() {
        let id = ClientId::new();
        let json = serde_json::to_string(&id).unwrap();
        let id2: ClientId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, id2);
    }

    #[test]
    fn gender_filter_kleinschreibung_auf_dem_draht() {
        assert_eq!(
            serde_json::to_string(&GenderFilter::Female).unwrap(),
            "\"female\""
        );
        let f: GenderFilter = serde_json::from_str("\"any\"").unwrap();
        assert_eq!(f, GenderFilter::Any);
    }

    #[test]
    fn gender_filter_standard_ist_any() {
        assert_eq!(GenderFilter::default(), GenderFilter::Any);
    }
}
