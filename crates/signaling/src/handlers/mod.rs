//! Handler-Module fuer die verschiedenen Nachrichtenarten

pub mod chat_handler;
pub mod profil_handler;
pub mod signal_handler;
pub mod vermittlung_handler;
