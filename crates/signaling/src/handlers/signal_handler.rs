//! Signal-Handler – leitet WebRTC-Negotiation-Nachrichten weiter
//!
//! Offer, Answer, ICE-Kandidaten und Re-Negotiation werden unveraendert an
//! das angegebene Ziel weitergereicht, ergaenzt um die Absender-ID. Der
//! Server interpretiert die Payloads nie (opaques Relay).

use plausch_core::types::ClientId;
use plausch_protocol::nachrichten::ServerNachricht;
use serde_json::Value;

use crate::server_state::SignalingState;

/// Leitet ein WebRTC-Offer an `to` weiter
pub fn handle_offer(client_id: ClientId, sdp: Value, to: ClientId, state: &SignalingState) {
    state
        .router
        .weiterleiten(&to, ServerNachricht::Offer { sdp, from: client_id });
}

/// Leitet eine WebRTC-Answer an `to` weiter
pub fn handle_answer(client_id: ClientId, sdp: Value, to: ClientId, state: &SignalingState) {
    state
        .router
        .weiterleiten(&to, ServerNachricht::Answer { sdp, from: client_id });
}

/// Leitet einen ICE-Kandidaten an `to` weiter
pub fn handle_ice_candidate(
    client_id: ClientId,
    candidate: Value,
    to: ClientId,
    state: &SignalingState,
) {
    state.router.weiterleiten(
        &to,
        ServerNachricht::IceCandidate {
            candidate,
            from: client_id,
        },
    );
}

/// Leitet eine Re-Negotiation-Anfrage an `to` weiter
pub fn handle_negotiation_needed(
    client_id: ClientId,
    offer: Value,
    to: ClientId,
    state: &SignalingState,
) {
    state.router.weiterleiten(
        &to,
        ServerNachricht::NegotiationNeeded {
            offer,
            from: client_id,
        },
    );
}

/// Leitet den Re-Negotiation-Abschluss als `negotiation-final` an `to` weiter
pub fn handle_negotiation_done(
    client_id: ClientId,
    answer: Value,
    to: ClientId,
    state: &SignalingState,
) {
    state.router.weiterleiten(
        &to,
        ServerNachricht::NegotiationFinal {
            answer,
            from: client_id,
        },
    );
}
