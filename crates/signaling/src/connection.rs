//! Client-Connection – Verwaltet eine einzelne TCP-Verbindung
//!
//! Jede TCP-Verbindung bekommt eine `ClientConnection` in einem eigenen
//! tokio-Task. Die Client-ID wird beim Verbindungsaufbau vergeben und dem
//! Client per `welcome` mitgeteilt; eine Authentifizierung gibt es nicht
//! (anonyme Clients).
//!
//! ## Ablauf
//! 1. Session registrieren, Send-Queue im Broadcaster anlegen
//! 2. `welcome` mit der vergebenen ID senden
//! 3. Schleife: eingehende Frames dispatchen, ausgehende Queue leeren,
//!    auf Shutdown-Signal reagieren
//! 4. Beim Ende genau einmal abwickeln: Partner benachrichtigen,
//!    Session und Queue entfernen

use futures_util::{SinkExt, StreamExt};
use plausch_core::types::ClientId;
use plausch_protocol::nachrichten::ServerNachricht;
use plausch_protocol::wire::ServerCodec;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio_util::codec::Framed;

use crate::dispatcher::MessageDispatcher;
use crate::server_state::SignalingState;

/// Verarbeitet eine einzelne TCP-Verbindung
///
/// Liest Frames via `ServerCodec`, dispatcht an den `MessageDispatcher` und
/// schreibt Nachrichten aus der Send-Queue zurueck. Laeuft in einem eigenen
/// tokio-Task.
pub struct ClientConnection {
    state: Arc<SignalingState>,
    peer_addr: SocketAddr,
    client_id: ClientId,
}

impl ClientConnection {
    /// Erstellt eine neue ClientConnection mit frisch vergebener ID
    pub fn neu(state: Arc<SignalingState>, peer_addr: SocketAddr) -> Self {
        Self {
            state,
            peer_addr,
            client_id: ClientId::new(),
        }
    }

    /// Gibt die vergebene Client-ID zurueck
    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    /// Startet die Verbindungs-Verarbeitungsschleife
    ///
    /// Laeuft bis die Verbindung getrennt wird oder ein Shutdown-Signal
    /// eingeht. Die Abwicklung am Ende laeuft in jedem Fall.
    pub async fn verarbeiten(
        self,
        stream: TcpStream,
        mut shutdown_rx: tokio::sync::watch::Receiver<bool>,
    ) {
        let peer_addr = self.peer_addr;
        let client_id = self.client_id;

        tracing::info!(peer = %peer_addr, client = %client_id, "Neue Verbindung");

        let mut framed = Framed::new(stream, ServerCodec::new());

        // Session anlegen und Send-Queue abonnieren, bevor irgendetwas
        // an diesen Client weitergeleitet werden kann
        self.state.lifecycle.verbinden(client_id);
        let mut sende_rx = self.state.broadcaster.client_registrieren(client_id);
        let dispatcher = MessageDispatcher::neu(Arc::clone(&self.state));

        // Dem Client seine transport-vergebene ID mitteilen
        if let Err(e) = framed.send(ServerNachricht::Welcome { client_id }).await {
            tracing::warn!(peer = %peer_addr, fehler = %e, "Welcome-Senden fehlgeschlagen");
            self.abwickeln();
            return;
        }

        loop {
            tokio::select! {
                // Eingehende Nachricht vom Client
                frame = framed.next() => {
                    match frame {
                        Some(Ok(nachricht)) => {
                            tracing::trace!(
                                peer = %peer_addr,
                                client = %client_id,
                                "Nachricht empfangen"
                            );
                            dispatcher.dispatch(nachricht, client_id);
                        }
                        Some(Err(e)) => {
                            // Ein kaputter Frame desynchronisiert den
                            // Laengen-Praefix-Strom; nur diese eine
                            // Verbindung wird beendet
                            tracing::warn!(
                                peer = %peer_addr,
                                client = %client_id,
                                fehler = %e,
                                "Frame-Lesefehler"
                            );
                            break;
                        }
                        None => {
                            tracing::info!(
                                peer = %peer_addr,
                                client = %client_id,
                                "Verbindung vom Client getrennt"
                            );
                            break;
                        }
                    }
                }

                // Ausgehende Nachricht aus der Send-Queue
                Some(ausgehend) = sende_rx.recv() => {
                    if let Err(e) = framed.send(ausgehend).await {
                        tracing::warn!(
                            peer = %peer_addr,
                            client = %client_id,
                            fehler = %e,
                            "Senden fehlgeschlagen"
                        );
                        break;
                    }
                }

                // Shutdown-Signal
                Ok(()) = shutdown_rx.changed() => {
                    if *shutdown_rx.borrow() {
                        tracing::info!(
                            peer = %peer_addr,
                            client = %client_id,
                            "Shutdown-Signal – Verbindung wird getrennt"
                        );
                        break;
                    }
                }
            }
        }

        self.abwickeln();
        tracing::info!(peer = %peer_addr, client = %client_id, "Verbindungs-Task beendet");
    }

    /// Wickelt die Session ab: Partner benachrichtigen, dann Session und
    /// Send-Queue entfernen
    fn abwickeln(&self) {
        self.state.lifecycle.trennen(&self.client_id);
        self.state.broadcaster.client_entfernen(&self.client_id);
    }
}
