//! Wire encodings for the handshake values the engine negotiates.

#[macro_use]
mod macros;

/// Readers, writers and range checks for TLS wire encodings.
pub mod codec;
/// Protocol enums carried inside handshake messages.
pub mod enums;
/// Handshake message bodies the engine builds or checks.
pub mod handshake;

pub use codec::{Codec, ListLength, Reader};
