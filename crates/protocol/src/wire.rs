//! Wire-Format fuer TCP-Verbindungen
//!
//! Frame-basiertes Protokoll: Length(u32 big-endian) + JSON-Payload.
//!
//! ## Frame-Format
//!
//! ```text
//! +--------+--------+--------+--------+----...----+
//! | Laenge (u32 BE) | 4 Bytes        | Payload    |
//! +--------+--------+--------+--------+----...----+
//! ```
//!
//! Die Laenge gibt die Anzahl der Payload-Bytes an (ohne die 4 Laengen-Bytes).
//! Maximale Frame-Groesse ist konfigurierbar (Standard: 1 MB).
//!
//! Der Codec ist generisch ueber Eingangs- und Ausgangstyp, damit derselbe
//! Code das Server-Ende (`ServerCodec`) und das Client-Ende (`ClientCodec`,
//! fuer Tests und Werkzeuge) bedient.

use bytes::{Buf, BufMut, BytesMut};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;
use std::marker::PhantomData;
use tokio_util::codec::{Decoder, Encoder};

use crate::nachrichten::{ClientNachricht, ServerNachricht};

// ---------------------------------------------------------------------------
// Konstanten
// ---------------------------------------------------------------------------

/// Standard-maximale Frame-Groesse (1 MB)
pub const DEFAULT_MAX_FRAME_SIZE: usize = 1024 * 1024;

/// Groesse des Laengen-Felds in Bytes
pub const LENGTH_FIELD_SIZE: usize = 4;

// ---------------------------------------------------------------------------
// FrameCodec
// ---------------------------------------------------------------------------

/// tokio-util Codec fuer frame-basierte TCP-Verbindungen
///
/// Implementiert `Decoder` fuer den Eingangstyp `In` und `Encoder` fuer den
/// Ausgangstyp `Out`, fuer nahtlose Integration mit `tokio_util::codec::Framed`.
#[derive(Debug)]
pub struct FrameCodec<In, Out> {
    /// Maximale erlaubte Frame-Groesse in Bytes
    max_frame_size: usize,
    _richtung: PhantomData<fn(Out) -> In>,
}

/// Server-Ende: dekodiert `ClientNachricht`, kodiert `ServerNachricht`
pub type ServerCodec = FrameCodec<ClientNachricht, ServerNachricht>;

/// Client-Ende: dekodiert `ServerNachricht`, kodiert `ClientNachricht`
pub type ClientCodec = FrameCodec<ServerNachricht, ClientNachricht>;

impl<In, Out> FrameCodec<In, Out> {
    /// Erstellt einen neuen `FrameCodec` mit Standard-Limits
    pub fn new() -> Self {
        Self {
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,
            _richtung: PhantomData,
        }
    }

    /// Erstellt einen `FrameCodec` mit benutzerdefinierter maximaler Frame-Groesse
    pub fn with_max_size(max_frame_size: usize) -> Self {
        Self {
            max_frame_size,
            _richtung: PhantomData,
        }
    }

    /// Gibt die konfigurierte maximale Frame-Groesse zurueck
    pub fn max_frame_size(&self) -> usize {
        self.max_frame_size
    }
}

impl<In, Out> Default for FrameCodec<In, Out> {
    fn default() -> Self {
        Self::new()
    }
}

impl<In, Out> Clone for FrameCodec<In, Out> {
    fn clone(&self) -> Self {
        Self {
            max_frame_size: self.max_frame_size,
            _richtung: PhantomData,
        }
    }
}

// ---------------------------------------------------------------------------
// Decoder-Implementierung
// ---------------------------------------------------------------------------

impl<In, Out> Decoder for FrameCodec<In, Out>
where
    In: DeserializeOwned,
{
    type Item = In;
    type Error = io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        // Warte auf mindestens 4 Bytes fuer das Laengen-Feld
        if src.len() < LENGTH_FIELD_SIZE {
            return Ok(None);
        }

        // Laenge lesen (big-endian u32) ohne den Buffer zu veraendern
        let length = u32::from_be_bytes([src[0], src[1], src[2], src[3]]) as usize;

        // Maximale Frame-Groesse pruefen
        if length > self.max_frame_size {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Frame zu gross: {} Bytes (Maximum: {} Bytes)",
                    length, self.max_frame_size
                ),
            ));
        }

        // Pruefen ob der vollstaendige Frame bereits im Buffer ist
        let total_size = LENGTH_FIELD_SIZE + length;
        if src.len() < total_size {
            // Speicher vorbelegen um Reallocations zu vermeiden
            src.reserve(total_size - src.len());
            return Ok(None);
        }

        // Laengen-Feld verbrauchen
        src.advance(LENGTH_FIELD_SIZE);

        // Payload-Bytes extrahieren
        let payload = src.split_to(length);

        // JSON deserialisieren
        let message: In = serde_json::from_slice(&payload).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("JSON-Deserialisierung fehlgeschlagen: {}", e),
            )
        })?;

        Ok(Some(message))
    }
}

// ---------------------------------------------------------------------------
// Encoder-Implementierung
// ---------------------------------------------------------------------------

impl<In, Out> Encoder<Out> for FrameCodec<In, Out>
where
    Out: Serialize,
{
    type Error = io::Error;

    fn encode(&mut self, item: Out, dst: &mut BytesMut) -> Result<(), Self::Error> {
        // JSON serialisieren
        let json = serde_json::to_vec(&item).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("JSON-Serialisierung fehlgeschlagen: {}", e),
            )
        })?;

        // Groesse pruefen
        if json.len() > self.max_frame_size {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Nachricht zu gross: {} Bytes (Maximum: {} Bytes)",
                    json.len(),
                    self.max_frame_size
                ),
            ));
        }

        // Laengen-Feld + Payload schreiben
        dst.reserve(LENGTH_FIELD_SIZE + json.len());
        dst.put_u32(json.len() as u32);
        dst.put_slice(&json);

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use plausch_core::types::ClientId;

    #[test]
    fn frame_codec_encode_decode_round_trip() {
        // Server kodiert, Client dekodiert
        let mut server_codec = ServerCodec::new();
        let mut client_codec = ClientCodec::new();
        let partner = ClientId::new();
        let original = ServerNachricht::Connected { partner_id: partner };

        // Kodieren
        let mut buf = BytesMut::new();
        server_codec.encode(original, &mut buf).unwrap();

        // Laengen-Feld pruefen
        let payload_len = u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]) as usize;
        assert!(payload_len > 0);
        assert_eq!(buf.len(), LENGTH_FIELD_SIZE + payload_len);

        // Dekodieren
        let decoded = client_codec
            .decode(&mut buf)
            .unwrap()
            .expect("Muss eine Nachricht enthalten");
        match decoded {
            ServerNachricht::Connected { partner_id } => assert_eq!(partner_id, partner),
            _ => panic!("Falsche Variante dekodiert"),
        }
    }

    #[test]
    fn frame_codec_unvollstaendiger_frame() {
        let mut client_codec = ClientCodec::new();
        let mut server_codec = ServerCodec::new();

        let mut buf = BytesMut::new();
        client_codec
            .encode(ClientNachricht::FindMatch, &mut buf)
            .unwrap();

        // Nur die Haelfte der Bytes behalten
        let half = buf.len() / 2;
        let mut partial = buf.split_to(half);

        // Sollte None zurueckgeben (wartet auf mehr Daten)
        let result = server_codec.decode(&mut partial).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn frame_codec_zu_wenig_bytes_fuer_laengenfeld() {
        let mut codec = ServerCodec::new();
        let mut buf = BytesMut::from(&[0x00, 0x00][..]);
        let result = codec.decode(&mut buf).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn frame_codec_ablehnung_zu_grosser_frame() {
        let mut codec = ServerCodec::with_max_size(100);

        // Frame-Laenge von 200 Bytes im Buffer simulieren
        let mut buf = BytesMut::new();
        buf.put_u32(200);
        buf.put_slice(&[b'x'; 200]);

        let result = codec.decode(&mut buf);
        assert!(result.is_err());
    }

    #[test]
    fn frame_codec_ungueltiges_json_ist_fehler() {
        let mut codec = ServerCodec::new();

        let mut buf = BytesMut::new();
        let kaputt = b"{nicht json";
        buf.put_u32(kaputt.len() as u32);
        buf.put_slice(kaputt);

        let result = codec.decode(&mut buf);
        assert!(result.is_err());
    }

    #[test]
    fn frame_codec_mehrere_frames_im_buffer() {
        let mut client_codec = ClientCodec::new();
        let mut server_codec = ServerCodec::new();

        let mut buf = BytesMut::new();
        client_codec
            .encode(ClientNachricht::FindMatch, &mut buf)
            .unwrap();
        client_codec
            .encode(ClientNachricht::Skip, &mut buf)
            .unwrap();

        let erste = server_codec.decode(&mut buf).unwrap().unwrap();
        assert!(matches!(erste, ClientNachricht::FindMatch));
        let zweite = server_codec.decode(&mut buf).unwrap().unwrap();
        assert!(matches!(zweite, ClientNachricht::Skip));
        assert!(server_codec.decode(&mut buf).unwrap().is_none());
    }
}
