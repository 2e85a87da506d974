//! plausch-protocol – Nachrichten- und Wire-Format
//!
//! Definiert die Signalisierungs-Nachrichten zwischen Client und Server
//! sowie das frame-basierte Wire-Format (Laenge + JSON) fuer die
//! TCP-Verbindung.
//!
//! ## Design
//! - Fire-and-forget: keine Request-IDs, keine Antwort-Zuordnung, keine
//!   Zustellbestaetigung (best-effort at-most-once)
//! - Getrennte Enums pro Richtung (`ClientNachricht` / `ServerNachricht`)
//! - Tagged Enums via serde fuer typsichere Nachrichtentypen

pub mod nachrichten;
pub mod wire;

// Bequeme Re-Exporte
pub use nachrichten::{ClientNachricht, ServerNachricht};
pub use wire::{ClientCodec, FrameCodec, ServerCodec, DEFAULT_MAX_FRAME_SIZE};
