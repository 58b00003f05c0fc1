use core::fmt::Debug;
use std::boxed::Box;
use std::sync::Arc;
use std::vec::Vec;

use pki_types::PrivateKeyDer;
use zeroize::Zeroize;

use crate::error::Error;
pub use crate::error::GetRandomFailed;
use crate::msgs::enums::{HashAlgorithm, NamedGroup};
use crate::msgs::handshake::SignatureAndHashAlgorithm;
use crate::suites::{EncryptionAlgorithm, MacAlgorithm};

/// *ring* based CryptoProvider.
#[cfg(feature = "ring")]
pub mod ring;

/// Record encryption/decryption interfaces.
pub mod cipher;

/// Hashing interfaces.
pub mod hash;

/// HMAC interfaces.
pub mod hmac;

/// Message signing and verification interfaces.
pub mod signer;

/// Cryptography specific to TLS1.2 and earlier.
pub mod tls12;

/// Cryptography specific to TLS1.3.
pub mod tls13;

pub use signer::{CertifiedKey, Signer, SigningKey, Verifier};

/// Pluggable crypto galore.
///
/// The engine asks the provider what it can do before offering or accepting
/// anything, and obtains every primitive through it.
pub trait CryptoProvider: Send + Sync + Debug + 'static {
    /// Fill the given buffer with random bytes.
    fn fill_random(&self, buf: &mut [u8]) -> Result<(), GetRandomFailed>;

    /// The hash function `algorithm`, if provided.
    fn hash(&self, algorithm: HashAlgorithm) -> Option<&'static dyn hash::Hash>;

    /// HMAC over the hash function `algorithm`, if provided.
    fn hmac(&self, algorithm: HashAlgorithm) -> Option<&'static dyn hmac::Hmac>;

    /// Key agreement in `group`, if provided.
    fn kx_group(&self, group: NamedGroup) -> Option<&'static dyn SupportedKxGroup>;

    /// Record protection using `algorithm`, if provided.
    fn record_cipher(
        &self,
        algorithm: EncryptionAlgorithm,
    ) -> Option<&'static dyn cipher::RecordCipherAlgorithm>;

    /// Whether handshake signatures with `algorithm` can be verified.
    fn has_signature_algorithm(&self, algorithm: SignatureAndHashAlgorithm) -> bool;

    /// Decode and validate a private signing key from `key_der`.
    ///
    /// Return an error if the key type encoding is not supported, or if the key fails validation.
    fn load_private_key(&self, key_der: PrivateKeyDer<'static>) -> Result<Arc<dyn SigningKey>, Error>;

    /// HKDF over the hash function `algorithm`, if provided.
    fn hkdf(&self, algorithm: HashAlgorithm) -> Option<Box<dyn tls13::Hkdf>> {
        self.hmac(algorithm)
            .map(|hmac| -> Box<dyn tls13::Hkdf> { Box::new(tls13::HkdfUsingHmac(hmac)) })
    }

    /// Whether `algorithm` is available for record protection.
    fn has_encryption_algorithm(&self, algorithm: EncryptionAlgorithm) -> bool {
        self.record_cipher(algorithm).is_some()
    }

    /// Whether `algorithm` is available as a record MAC.
    fn has_mac_algorithm(&self, algorithm: MacAlgorithm) -> bool {
        match algorithm.hash() {
            None => true,
            Some(hash) => self.hmac(hash).is_some(),
        }
    }

    /// Whether the hash function `algorithm` is provided.
    fn has_hash_algorithm(&self, algorithm: HashAlgorithm) -> bool {
        self.hash(algorithm).is_some()
    }

    /// Whether key agreement in `group` is provided.
    fn has_named_group(&self, group: NamedGroup) -> bool {
        self.kx_group(group).is_some()
    }

    /// Whether any finite field Diffie-Hellman group is provided.
    fn has_dh_agreement(&self) -> bool {
        NamedGroup::ALL
            .iter()
            .any(|group| group.refers_to_a_specific_finite_field() && self.has_named_group(*group))
    }

    /// Whether any elliptic curve Diffie-Hellman group is provided.
    fn has_ecdh_agreement(&self) -> bool {
        NamedGroup::ALL
            .iter()
            .any(|group| group.refers_to_a_specific_curve() && self.has_named_group(*group))
    }

    /// Whether RSA key transport is provided.
    fn has_rsa_encryption(&self) -> bool {
        false
    }

    /// Whether SRP authentication is provided.
    fn has_srp_authentication(&self) -> bool {
        false
    }
}

/// A supported key exchange group.
///
/// This has a TLS-level name expressed using the [`NamedGroup`] enum, and
/// a function which produces a [`ActiveKeyExchange`].
pub trait SupportedKxGroup: Send + Sync + Debug {
    /// Start a key exchange.
    ///
    /// This will prepare an ephemeral secret key in the supported group, and a corresponding
    /// public key. The key exchange can be completed by calling [ActiveKeyExchange#complete]
    /// or discarded.
    ///
    /// # Errors
    ///
    /// This can fail if the random source fails during ephemeral key generation.
    fn start(&self) -> Result<Box<dyn ActiveKeyExchange>, Error>;

    /// Named group the SupportedKxGroup operates in.
    fn name(&self) -> NamedGroup;
}

/// An in-progress key exchange originating from a `SupportedKxGroup`.
pub trait ActiveKeyExchange: Send + Sync {
    /// Completes the key exchange, given the peer's public key.
    ///
    /// This consumes and so terminates the [`ActiveKeyExchange`]; the
    /// private ephemeral is discarded.
    fn complete(self: Box<Self>, peer_pub_key: &[u8]) -> Result<SharedSecret, Error>;

    /// Return the public key being used.
    fn pub_key(&self) -> &[u8];

    /// Return the group being used.
    fn group(&self) -> NamedGroup;
}

/// The result from `ActiveKeyExchange::complete` as a value.
pub struct SharedSecret(Vec<u8>);

impl SharedSecret {
    /// Returns the shared secret as a slice of bytes.
    pub fn secret_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl From<&[u8]> for SharedSecret {
    fn from(source: &[u8]) -> Self {
        Self(source.to_vec())
    }
}
