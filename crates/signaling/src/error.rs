//! Fehlertypen fuer den Signaling-Service
//!
//! Das Protokoll kennt keine Fehler-Nachrichtenart und die Zustellung ist
//! best-effort; fehlschlagen kann daher nur der Transport selbst.

use thiserror::Error;

/// Fehlertyp fuer den Signaling-Service
#[derive(Debug, Error)]
pub enum SignalingError {
    /// IO-Fehler (TCP, Socket)
    #[error("IO-Fehler: {0}")]
    Io(#[from] std::io::Error),
}

/// Result-Typ fuer den Signaling-Service
pub type SignalingResult<T> = Result<T, SignalingError>;
