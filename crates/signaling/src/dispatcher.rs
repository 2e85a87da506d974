//! Message-Dispatcher – Routet ClientNachrichten an die richtigen Handler
//!
//! Der Dispatcher empfaengt dekodierte Nachrichten von einer
//! `ClientConnection` und reicht sie an den passenden Handler weiter.
//! Es gibt keine Antworten an den Absender: alle Effekte laufen als
//! Push-Benachrichtigungen ueber den Broadcaster.
//!
//! Ein Fehlverhalten eines Clients (unbekanntes Ziel, Skip ohne Partner)
//! wird lokal und still behandelt – das Protokoll kennt keine
//! Fehler-Nachrichtenart.

use plausch_core::types::ClientId;
use plausch_protocol::nachrichten::ClientNachricht;
use std::sync::Arc;

use crate::handlers::{chat_handler, profil_handler, signal_handler, vermittlung_handler};
use crate::server_state::SignalingState;

/// Zentraler Message-Dispatcher
pub struct MessageDispatcher {
    state: Arc<SignalingState>,
}

impl MessageDispatcher {
    /// Erstellt einen neuen Dispatcher
    pub fn neu(state: Arc<SignalingState>) -> Self {
        Self { state }
    }

    /// Verarbeitet eine eingehende ClientNachricht
    pub fn dispatch(&self, nachricht: ClientNachricht, client_id: ClientId) {
        match nachricht {
            // -----------------------------------------------------------------
            // Profil
            // -----------------------------------------------------------------
            ClientNachricht::ProfileUpdate {
                is_premium,
                gender_filter,
                voice_only,
            } => profil_handler::handle_profil_update(
                client_id,
                is_premium,
                gender_filter,
                voice_only,
                &self.state,
            ),

            // -----------------------------------------------------------------
            // Vermittlung
            // -----------------------------------------------------------------
            ClientNachricht::FindMatch => {
                vermittlung_handler::handle_partner_suche(client_id, &self.state)
            }

            ClientNachricht::Skip => vermittlung_handler::handle_skip(client_id, &self.state),

            // -----------------------------------------------------------------
            // WebRTC-Signalisierung
            // -----------------------------------------------------------------
            ClientNachricht::Offer { sdp, to } => {
                signal_handler::handle_offer(client_id, sdp, to, &self.state)
            }

            ClientNachricht::Answer { sdp, to } => {
                signal_handler::handle_answer(client_id, sdp, to, &self.state)
            }

            ClientNachricht::IceCandidate { candidate, to } => {
                signal_handler::handle_ice_candidate(client_id, candidate, to, &self.state)
            }

            ClientNachricht::NegotiationNeeded { offer, to } => {
                signal_handler::handle_negotiation_needed(client_id, offer, to, &self.state)
            }

            ClientNachricht::NegotiationDone { answer, to } => {
                signal_handler::handle_negotiation_done(client_id, answer, to, &self.state)
            }

            // -----------------------------------------------------------------
            // Chat & Status
            // -----------------------------------------------------------------
            ClientNachricht::SendMessage {
                message,
                to,
                is_secret,
                message_id,
            } => chat_handler::handle_send_message(
                client_id, message, to, is_secret, message_id, &self.state,
            ),

            ClientNachricht::PremiumStatus { is_premium, to } => {
                chat_handler::handle_premium_status(client_id, is_premium, to, &self.state)
            }

            ClientNachricht::StayConnectedResponse { want_to_stay, to } => {
                chat_handler::handle_stay_connected(client_id, want_to_stay, to, &self.state)
            }
        }
    }
}
