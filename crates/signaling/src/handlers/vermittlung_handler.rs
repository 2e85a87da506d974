//! Vermittlungs-Handler – verarbeitet `find-match` und `skip`

use plausch_core::types::ClientId;
use plausch_matching::vermittlung::VermittlungsErgebnis;
use plausch_protocol::nachrichten::ServerNachricht;

use crate::server_state::SignalingState;

/// Startet die Partner-Suche fuer den Absender
///
/// Vermittelt mit dem aeltesten Wartenden (strikt FIFO, keine Prioritaet
/// fuer Premium, kein Geschlechts-Filter – beobachtetes Produktverhalten)
/// oder reiht den Client ein. Bei Erfolg bekommen beide Seiten ein
/// `connected` mit der ID der jeweils anderen.
///
/// Eine noch bestehende Partnerschaft wird vorher mit Skip-Semantik
/// aufgeloest; der alte Partner bekommt `skipped`.
pub fn handle_partner_suche(client_id: ClientId, state: &SignalingState) {
    if state.vermittlung.partner_von(&client_id).is_some() {
        state.lifecycle.ueberspringen(&client_id);
    }

    match state.vermittlung.partner_suchen(client_id) {
        VermittlungsErgebnis::Vermittelt { partner } => {
            state
                .router
                .weiterleiten(&partner, ServerNachricht::Connected {
                    partner_id: client_id,
                });
            state
                .router
                .weiterleiten(&client_id, ServerNachricht::Connected {
                    partner_id: partner,
                });
        }
        VermittlungsErgebnis::Eingereiht => {
            // Keine Rueckmeldung: der Client bleibt clientseitig im
            // "Suchen"-Zustand bis ein `connected` eintrifft
        }
    }
}

/// Loest die aktuelle Partnerschaft des Absenders auf (Skip)
///
/// Der verbleibende Partner bekommt `skipped`; der Absender bleibt
/// verbunden und darf sofort neu suchen. Ohne Partner ein No-op.
pub fn handle_skip(client_id: ClientId, state: &SignalingState) {
    state.lifecycle.ueberspringen(&client_id);
}
