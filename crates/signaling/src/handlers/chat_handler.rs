//! Chat-Handler – verarbeitet `send-message`, `premium-status` und
//! `stay-connected-response`
//!
//! Chat-Nachrichten werden nicht gespeichert (explizit kein Verlauf);
//! der Server reicht sie nur an das Ziel durch.

use plausch_core::types::ClientId;
use plausch_protocol::nachrichten::ServerNachricht;

use crate::server_state::SignalingState;

/// Leitet eine Chat-Nachricht als `message-received` an `to` weiter
///
/// Die client-vergebene `message_id` wird zur Korrelation zurueckgespiegelt,
/// das `is_secret`-Flag unveraendert durchgereicht.
pub fn handle_send_message(
    client_id: ClientId,
    message: String,
    to: ClientId,
    is_secret: bool,
    message_id: String,
    state: &SignalingState,
) {
    state.router.weiterleiten(
        &to,
        ServerNachricht::MessageReceived {
            message,
            from: client_id,
            is_secret,
            message_id,
        },
    );
}

/// Teilt dem Partner den (unverifizierten) Premium-Status mit
pub fn handle_premium_status(
    client_id: ClientId,
    is_premium: bool,
    to: ClientId,
    state: &SignalingState,
) {
    state.router.weiterleiten(
        &to,
        ServerNachricht::PartnerPremiumStatus {
            is_premium,
            from: client_id,
        },
    );
}

/// Leitet die Antwort auf eine "Verbunden bleiben?"-Anfrage weiter
pub fn handle_stay_connected(
    client_id: ClientId,
    want_to_stay: bool,
    to: ClientId,
    state: &SignalingState,
) {
    state.router.weiterleiten(
        &to,
        ServerNachricht::StayConnectedResponse {
            want_to_stay,
            from: client_id,
        },
    );
}
