//! Envelope codec: serializing named messages across a process boundary.
//!
//! The in-process halves of the bridge exchange [`WireEnvelope`] values
//! directly, but any transport that crosses a real process boundary needs a
//! byte representation.  The codec here is JSON text, one envelope per
//! frame — the transport owns framing (one message per IPC delivery), so no
//! length prefix or stream reassembly is needed.
//!
//! # Decode policy
//!
//! Decoding is strict about *structure* (bytes must be UTF-8 JSON with a
//! non-empty `channel` string) and deliberately loose about *content*: an
//! envelope for an unrecognized channel decodes fine.  Recognition is the
//! receiver's concern, not the codec's.

use thiserror::Error;

use super::messages::WireEnvelope;

// ── Error type ────────────────────────────────────────────────────────────────

/// Errors produced by the envelope codec.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The bytes were not a valid JSON envelope (bad UTF-8, bad JSON, or a
    /// JSON value of the wrong shape).
    #[error("malformed envelope: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The envelope decoded but its channel name was empty.
    ///
    /// An empty name can never match any channel, so it is rejected at the
    /// codec layer where the problem is visible.
    #[error("envelope has an empty channel name")]
    EmptyChannel,
}

// ── Encode / decode ───────────────────────────────────────────────────────────

/// Encodes an envelope as JSON bytes.
///
/// # Errors
///
/// Returns [`ProtocolError::EmptyChannel`] if the envelope's channel name is
/// empty, and [`ProtocolError::Malformed`] if serde_json rejects the value
/// (not reachable for envelopes built from this crate's types).
pub fn encode_envelope(envelope: &WireEnvelope) -> Result<Vec<u8>, ProtocolError> {
    if envelope.channel.is_empty() {
        return Err(ProtocolError::EmptyChannel);
    }
    Ok(serde_json::to_vec(envelope)?)
}

/// Decodes an envelope from JSON bytes.
///
/// # Errors
///
/// Returns [`ProtocolError::Malformed`] for anything that is not a UTF-8
/// JSON object with a string `channel` field, and
/// [`ProtocolError::EmptyChannel`] when the channel name is the empty string.
pub fn decode_envelope(bytes: &[u8]) -> Result<WireEnvelope, ProtocolError> {
    let envelope: WireEnvelope = serde_json::from_slice(bytes)?;
    if envelope.channel.is_empty() {
        return Err(ProtocolError::EmptyChannel);
    }
    Ok(envelope)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
