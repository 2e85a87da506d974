//! Signalisierungs-Nachrichten
//!
//! Alle Nachrichten die zwischen Client und Server ausgetauscht werden.
//! SDP-, ICE- und Negotiation-Payloads sind bewusst `serde_json::Value`:
//! der Server leitet sie nur weiter und interpretiert sie nie.
//!
//! ## Draht-Format
//! - Variante als `"type"`-Tag in kebab-case (`"ice-candidate"`, ...)
//! - Felder in camelCase (`isPremium`, `messageId`, ...)

use plausch_core::types::{ClientId, GenderFilter};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Client -> Server
// ---------------------------------------------------------------------------

/// Nachrichten vom Client an den Server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ClientNachricht {
    /// Partielles Profil-Update; fehlende Felder bleiben unveraendert
    ProfileUpdate {
        is_premium: Option<bool>,
        gender_filter: Option<GenderFilter>,
        voice_only: Option<bool>,
    },
    /// Partner-Suche starten (Vermittlung oder Einreihung in die Warteschlange)
    FindMatch,
    /// WebRTC-Offer an den Partner
    Offer { sdp: Value, to: ClientId },
    /// WebRTC-Answer an den Partner
    Answer { sdp: Value, to: ClientId },
    /// ICE-Kandidat an den Partner
    IceCandidate { candidate: Value, to: ClientId },
    /// Re-Negotiation angestossen (z.B. Track hinzugefuegt)
    NegotiationNeeded { offer: Value, to: ClientId },
    /// Re-Negotiation abgeschlossen
    NegotiationDone { answer: Value, to: ClientId },
    /// Chat-Nachricht an den Partner
    SendMessage {
        message: String,
        to: ClientId,
        /// Ephemere Nachricht (wird beim Empfaenger nicht dauerhaft angezeigt)
        #[serde(default)]
        is_secret: bool,
        /// Client-vergebene ID, wird zur Korrelation zurueckgespiegelt
        message_id: String,
    },
    /// Premium-Status dem Partner mitteilen (rein informativ)
    PremiumStatus { is_premium: bool, to: ClientId },
    /// Antwort auf eine "Verbunden bleiben?"-Anfrage des Partners
    StayConnectedResponse { want_to_stay: bool, to: ClientId },
    /// Aktuelle Partnerschaft aufloesen, Client bleibt verbunden
    Skip,
}

// ---------------------------------------------------------------------------
// Server -> Client
// ---------------------------------------------------------------------------

/// Nachrichten vom Server an den Client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ServerNachricht {
    /// Begruessung direkt nach dem Verbindungsaufbau mit der vergebenen ID
    Welcome { client_id: ClientId },
    /// Vermittlung erfolgreich; geht an beide Seiten der neuen Partnerschaft
    Connected { partner_id: ClientId },
    /// Weitergeleitetes WebRTC-Offer
    Offer { sdp: Value, from: ClientId },
    /// Weitergeleitete WebRTC-Answer
    Answer { sdp: Value, from: ClientId },
    /// Weitergeleiteter ICE-Kandidat
    IceCandidate { candidate: Value, from: ClientId },
    /// Weitergeleitete Re-Negotiation-Anfrage
    NegotiationNeeded { offer: Value, from: ClientId },
    /// Weitergeleiteter Re-Negotiation-Abschluss (Relay von `negotiation-done`)
    NegotiationFinal { answer: Value, from: ClientId },
    /// Weitergeleitete Chat-Nachricht
    MessageReceived {
        message: String,
        from: ClientId,
        is_secret: bool,
        message_id: String,
    },
    /// Premium-Status des Partners
    PartnerPremiumStatus { is_premium: bool, from: ClientId },
    /// Weitergeleitete "Verbunden bleiben?"-Antwort
    StayConnectedResponse { want_to_stay: bool, from: ClientId },
    /// Der Partner hat uebersprungen; Empfaenger ist wieder ohne Partner
    Skipped,
    /// Der Partner hat die Verbindung getrennt
    PartnerDisconnected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_nachricht_tag_kebab_case() {
        let json = serde_json::to_value(ClientNachricht::FindMatch).unwrap();
        assert_eq!(json["type"], "find-match");

        let json = serde_json::to_value(ClientNachricht::IceCandidate {
            candidate: serde_json::json!({"candidate": "candidate:0 1 UDP ..."}),
            to: ClientId::new(),
        })
        .unwrap();
        assert_eq!(json["type"], "ice-candidate");
    }

    #[test]
    fn felder_camel_case() {
        let json = serde_json::to_value(ClientNachricht::SendMessage {
            message: "hallo".into(),
            to: ClientId::new(),
            is_secret: true,
            message_id: "m1".into(),
        })
        .unwrap();
        assert_eq!(json["type"], "send-message");
        assert_eq!(json["isSecret"], true);
        assert_eq!(json["messageId"], "m1");
    }

    #[test]
    fn profile_update_partiell() {
        // Nur isPremium gesetzt; die anderen Felder fehlen im JSON
        let json = r#"{"type":"profile-update","isPremium":true}"#;
        let nachricht: ClientNachricht = serde_json::from_str(json).unwrap();
        match nachricht {
            ClientNachricht::ProfileUpdate {
                is_premium,
                gender_filter,
                voice_only,
            } => {
                assert_eq!(is_premium, Some(true));
                assert_eq!(gender_filter, None);
                assert_eq!(voice_only, None);
            }
            _ => panic!("Falsche Variante"),
        }
    }

    #[test]
    fn send_message_ohne_secret_flag() {
        let to = ClientId::new();
        let json = format!(
            r#"{{"type":"send-message","message":"hi","to":{},"messageId":"m9"}}"#,
            serde_json::to_string(&to).unwrap()
        );
        let nachricht: ClientNachricht = serde_json::from_str(&json).unwrap();
        match nachricht {
            ClientNachricht::SendMessage { is_secret, .. } => assert!(!is_secret),
            _ => panic!("Falsche Variante"),
        }
    }

    #[test]
    fn server_nachricht_round_trip() {
        let original = ServerNachricht::MessageReceived {
            message: "hi".into(),
            from: ClientId::new(),
            is_secret: false,
            message_id: "m1".into(),
        };
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("\"type\":\"message-received\""));
        let decoded: ServerNachricht = serde_json::from_str(&json).unwrap();
        assert!(matches!(decoded, ServerNachricht::MessageReceived { .. }));
    }

    #[test]
    fn partner_disconnected_ohne_payload() {
        let json = serde_json::to_string(&ServerNachricht::PartnerDisconnected).unwrap();
        assert_eq!(json, r#"{"type":"partner-disconnected"}"#);
    }
}
