use std::sync::Arc;

use pki_types::PrivateKeyDer;

use crate::crypto::cipher::RecordCipherAlgorithm;
use crate::crypto::{self, CryptoProvider, GetRandomFailed, SigningKey, SupportedKxGroup};
use crate::error::Error;
use crate::msgs::enums::{HashAlgorithm, NamedGroup};
use crate::msgs::handshake::SignatureAndHashAlgorithm;
use crate::suites::EncryptionAlgorithm;

/// Using software keys for authentication.
pub mod sign;

/// Verifying handshake signatures with certificate keys.
pub mod verify;

pub(crate) mod cipher;
pub(crate) mod hash;
pub(crate) mod hmac;
pub(crate) mod kx;

pub use kx::ALL_KX_GROUPS;
pub use verify::{PublicKeyKind, RingCertificate};

/// The default crypto provider, backed by [*ring*].
///
/// [*ring*]: https://github.com/briansmith/ring
pub fn default_provider() -> Arc<dyn CryptoProvider> {
    Arc::new(Ring)
}

/// Crypto provider backed by *ring*, with RustCrypto filling in the legacy
/// hashes *ring* leaves out.
#[derive(Debug)]
pub struct Ring;

impl CryptoProvider for Ring {
    fn fill_random(&self, buf: &mut [u8]) -> Result<(), GetRandomFailed> {
        use ring::rand::SecureRandom;

        ring::rand::SystemRandom::new()
            .fill(buf)
            .map_err(|_| GetRandomFailed)
    }

    fn hash(&self, algorithm: HashAlgorithm) -> Option<&'static dyn crypto::hash::Hash> {
        Some(match algorithm {
            HashAlgorithm::MD5 => &hash::MD5,
            HashAlgorithm::SHA1 => &hash::SHA1,
            HashAlgorithm::SHA224 => &hash::SHA224,
            HashAlgorithm::SHA256 => &hash::SHA256,
            HashAlgorithm::SHA384 => &hash::SHA384,
            HashAlgorithm::SHA512 => &hash::SHA512,
            _ => return None,
        })
    }

    fn hmac(&self, algorithm: HashAlgorithm) -> Option<&'static dyn crypto::hmac::Hmac> {
        Some(match algorithm {
            HashAlgorithm::MD5 => &hmac::HMAC_MD5,
            HashAlgorithm::SHA1 => &hmac::HMAC_SHA1,
            HashAlgorithm::SHA224 => &hmac::HMAC_SHA224,
            HashAlgorithm::SHA256 => &hmac::HMAC_SHA256,
            HashAlgorithm::SHA384 => &hmac::HMAC_SHA384,
            HashAlgorithm::SHA512 => &hmac::HMAC_SHA512,
            _ => return None,
        })
    }

    fn kx_group(&self, group: NamedGroup) -> Option<&'static dyn SupportedKxGroup> {
        ALL_KX_GROUPS
            .iter()
            .find(|kx| kx.name() == group)
            .copied()
    }

    fn record_cipher(
        &self,
        algorithm: EncryptionAlgorithm,
    ) -> Option<&'static dyn RecordCipherAlgorithm> {
        Some(match algorithm {
            EncryptionAlgorithm::Aes128Gcm => &cipher::AES_128_GCM,
            EncryptionAlgorithm::Aes256Gcm => &cipher::AES_256_GCM,
            EncryptionAlgorithm::Chacha20Poly1305 => &cipher::CHACHA20_POLY1305,
            _ => return None,
        })
    }

    fn has_signature_algorithm(&self, algorithm: SignatureAndHashAlgorithm) -> bool {
        verify::supports(algorithm)
    }

    fn load_private_key(
        &self,
        key_der: PrivateKeyDer<'static>,
    ) -> Result<Arc<dyn SigningKey>, Error> {
        sign::any_supported_type(&key_der)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suites::MacAlgorithm;

    #[test]
    fn capabilities() {
        let provider = Ring;
        assert!(provider.has_hash_algorithm(HashAlgorithm::MD5));
        assert!(provider.has_hash_algorithm(HashAlgorithm::SHA224));
        assert!(!provider.has_hash_algorithm(HashAlgorithm::Intrinsic));
        assert!(provider.has_mac_algorithm(MacAlgorithm::Null));
        assert!(provider.has_mac_algorithm(MacAlgorithm::HmacSha384));
        assert!(provider.has_encryption_algorithm(EncryptionAlgorithm::Chacha20Poly1305));
        assert!(!provider.has_encryption_algorithm(EncryptionAlgorithm::Aes128Cbc));
        assert!(provider.has_named_group(NamedGroup::X25519));
        assert!(!provider.has_named_group(NamedGroup::FFDHE2048));
        assert!(provider.has_ecdh_agreement());
        assert!(!provider.has_dh_agreement());
        assert!(!provider.has_rsa_encryption());
        assert!(!provider.has_srp_authentication());
        assert!(provider.hkdf(HashAlgorithm::SHA384).is_some());
        assert!(provider.hkdf(HashAlgorithm::NONE).is_none());
    }

    #[test]
    fn random_bytes_are_filled() {
        let mut buf = [0u8; 32];
        Ring.fill_random(&mut buf).unwrap();
        assert_ne!(buf, [0u8; 32]);
    }
}
