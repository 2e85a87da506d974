//! Profil-Handler – verarbeitet `profile-update`

use plausch_core::types::{ClientId, GenderFilter};

use crate::server_state::SignalingState;

/// Fuegt partielle Profil-Felder in die Session des Absenders ein
///
/// Alle Flags sind client-behauptet und advisorisch; der Server verifiziert
/// nichts. Unbekannte Absender werden still ignoriert.
pub fn handle_profil_update(
    client_id: ClientId,
    is_premium: Option<bool>,
    gender_filter: Option<GenderFilter>,
    voice_only: Option<bool>,
    state: &SignalingState,
) {
    state
        .registry
        .profil_aktualisieren(&client_id, is_premium, gender_filter, voice_only);
}
