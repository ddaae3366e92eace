//! Protocol module containing channel names, message types, and the envelope codec.

pub mod channels;
pub mod codec;
pub mod messages;

pub use channels::InboundChannel;
pub use codec::{decode_envelope, encode_envelope, ProtocolError};
pub use messages::*;
