//! plausch-signaling – TCP Signaling- und Vermittlungs-Service
//!
//! Dieser Crate implementiert den Signalisierungs-Kern von Plausch:
//! er verwaltet TCP-Verbindungen anonymer Clients, vermittelt Partner
//! (FIFO-Warteschlange) und leitet WebRTC-Negotiation sowie Chat-Nachrichten
//! zwischen genau zwei vermittelten Peers weiter.
//!
//! ## Architektur
//!
//! ```text
//! TCP Listener (SignalingServer)
//!     |
//!     v
//! ClientConnection (pro Verbindung ein Task)
//!     |
//!     v
//! MessageDispatcher
//!     |
//!     +-- ProfilHandler      (profile-update)
//!     +-- VermittlungHandler (find-match, skip)
//!     +-- SignalHandler      (offer, answer, ice-candidate, negotiation-*)
//!     +-- ChatHandler        (send-message, premium-status, stay-connected)
//!
//! SessionLifecycle – Verbinden/Trennen/Skip konsistent abwickeln
//! MessageRouter    – Ziel validieren, Nachricht gezielt zustellen
//! EventBroadcaster – Send-Queues aller verbundenen Clients
//! ```
//!
//! Die eigentlichen Audio/Video-Daten fliessen peer-to-peer und nie durch
//! diesen Server; zugestellt wird best-effort ohne Bestaetigung.

pub mod broadcast;
pub mod connection;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod lifecycle;
pub mod router;
pub mod server_state;
pub mod tcp;

// Bequeme Re-Exporte
pub use broadcast::EventBroadcaster;
pub use connection::ClientConnection;
pub use dispatcher::MessageDispatcher;
pub use error::{SignalingError, SignalingResult};
pub use lifecycle::SessionLifecycle;
pub use router::MessageRouter;
pub use server_state::{SignalingConfig, SignalingState};
pub use tcp::SignalingServer;
