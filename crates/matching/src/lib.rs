//! plausch-matching – Session-Registry und Vermittlungs-Engine
//!
//! Dieses Crate haelt den gesamten geteilten In-Memory-Zustand der
//! Partnervermittlung:
//!
//! - `SessionRegistry` – wer ist verbunden, mit welchen Profil-Flags
//! - `Vermittlung` – FIFO-Warteschlange + Partnerschafts-Kanten
//!
//! Beide Manager sind thread-safe (Arc + DashMap bzw. Mutex); Clone teilt
//! den inneren Zustand. Kein I/O – die Benachrichtigung der Clients ist
//! Sache des Signaling-Crates.

pub mod registry;
pub mod vermittlung;

// Bequeme Re-Exporte
pub use registry::{ClientSession, SessionRegistry};
pub use vermittlung::{Aufloesung, Vermittlung, VermittlungsErgebnis};
