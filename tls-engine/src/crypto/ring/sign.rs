use core::fmt::{self, Debug, Formatter};
use std::boxed::Box;
use std::format;
use std::sync::Arc;
use std::vec;
use std::vec::Vec;

use pki_types::{PrivateKeyDer, PrivatePkcs8KeyDer};
use ring::rand::SystemRandom;
use ring::signature::{self, EcdsaKeyPair, Ed25519KeyPair, KeyPair, RsaKeyPair};

use crate::crypto::signer::{Signer, SigningKey};
use crate::error::Error;
use crate::msgs::enums::{HashAlgorithm, SignatureAlgorithm};
use crate::msgs::handshake::SignatureAndHashAlgorithm;

/// Parse `der` as any supported key type, returning the first which works.
pub fn any_supported_type(der: &PrivateKeyDer<'_>) -> Result<Arc<dyn SigningKey>, Error> {
    if let Ok(rsa) = RsaSigningKey::new(der) {
        return Ok(Arc::new(rsa));
    }

    if let Ok(ecdsa) = any_ecdsa_type(der) {
        return Ok(ecdsa);
    }

    if let PrivateKeyDer::Pkcs8(pkcs8) = der {
        if let Ok(eddsa) = any_eddsa_type(pkcs8) {
            return Ok(eddsa);
        }
    }

    Err(Error::General(
        "failed to parse private key as RSA, ECDSA, or EdDSA".into(),
    ))
}

/// Parse `der` as any ECDSA key type, returning the first which works.
///
/// Only PKCS#8 encodings are supported.
pub fn any_ecdsa_type(der: &PrivateKeyDer<'_>) -> Result<Arc<dyn SigningKey>, Error> {
    let PrivateKeyDer::Pkcs8(pkcs8) = der else {
        return Err(Error::General(
            "ECDSA private keys must be PKCS#8".into(),
        ));
    };

    if let Ok(ecdsa_p256) = EcdsaSigningKey::new(
        pkcs8,
        SignatureAndHashAlgorithm::new(HashAlgorithm::SHA256, SignatureAlgorithm::ECDSA),
        &signature::ECDSA_P256_SHA256_ASN1_SIGNING,
    ) {
        return Ok(Arc::new(ecdsa_p256));
    }

    if let Ok(ecdsa_p384) = EcdsaSigningKey::new(
        pkcs8,
        SignatureAndHashAlgorithm::new(HashAlgorithm::SHA384, SignatureAlgorithm::ECDSA),
        &signature::ECDSA_P384_SHA384_ASN1_SIGNING,
    ) {
        return Ok(Arc::new(ecdsa_p384));
    }

    Err(Error::General(
        "failed to parse ECDSA private key as PKCS#8".into(),
    ))
}

/// Parse `der` as an Ed25519 key.
pub fn any_eddsa_type(der: &PrivatePkcs8KeyDer<'_>) -> Result<Arc<dyn SigningKey>, Error> {
    match Ed25519KeyPair::from_pkcs8_maybe_unchecked(der.secret_pkcs8_der()) {
        Ok(key_pair) => Ok(Arc::new(Ed25519SigningKey {
            key: Arc::new(key_pair),
        })),
        Err(e) => Err(Error::General(format!(
            "failed to parse Ed25519 private key: {e}"
        ))),
    }
}

/// A `SigningKey` for RSA-PKCS1 or RSA-PSS.
struct RsaSigningKey {
    key: Arc<RsaKeyPair>,
}

impl RsaSigningKey {
    /// Make a new `RsaSigningKey` from a DER encoding, in either
    /// PKCS#1 or PKCS#8 format.
    fn new(der: &PrivateKeyDer<'_>) -> Result<Self, Error> {
        let key_pair = match der {
            PrivateKeyDer::Pkcs1(pkcs1) => RsaKeyPair::from_der(pkcs1.secret_pkcs1_der()),
            PrivateKeyDer::Pkcs8(pkcs8) => RsaKeyPair::from_pkcs8(pkcs8.secret_pkcs8_der()),
            _ => {
                return Err(Error::General(
                    "failed to parse RSA private key as either PKCS#1 or PKCS#8".into(),
                ));
            }
        }
        .map_err(|key_rejected| {
            Error::General(format!("failed to parse RSA private key: {key_rejected}"))
        })?;

        Ok(Self {
            key: Arc::new(key_pair),
        })
    }

    fn encoding(algorithm: SignatureAndHashAlgorithm) -> Option<&'static dyn signature::RsaEncoding> {
        Some(match (algorithm.hash, algorithm.signature) {
            (HashAlgorithm::SHA256, SignatureAlgorithm::RSA) => &signature::RSA_PKCS1_SHA256,
            (HashAlgorithm::SHA384, SignatureAlgorithm::RSA) => &signature::RSA_PKCS1_SHA384,
            (HashAlgorithm::SHA512, SignatureAlgorithm::RSA) => &signature::RSA_PKCS1_SHA512,
            (HashAlgorithm::Intrinsic, SignatureAlgorithm::RSA_PSS_RSAE_SHA256) => {
                &signature::RSA_PSS_SHA256
            }
            (HashAlgorithm::Intrinsic, SignatureAlgorithm::RSA_PSS_RSAE_SHA384) => {
                &signature::RSA_PSS_SHA384
            }
            (HashAlgorithm::Intrinsic, SignatureAlgorithm::RSA_PSS_RSAE_SHA512) => {
                &signature::RSA_PSS_SHA512
            }
            _ => return None,
        })
    }
}

impl SigningKey for RsaSigningKey {
    fn choose_algorithm(&self, offered: &[SignatureAndHashAlgorithm]) -> Option<Box<dyn Signer>> {
        offered.iter().find_map(|&algorithm| {
            Self::encoding(algorithm).map(|encoding| -> Box<dyn Signer> {
                Box::new(RsaSigner {
                    key: self.key.clone(),
                    algorithm,
                    encoding,
                })
            })
        })
    }

    fn algorithm(&self) -> SignatureAlgorithm {
        SignatureAlgorithm::RSA
    }
}

impl Debug for RsaSigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaSigningKey")
            .finish_non_exhaustive()
    }
}

struct RsaSigner {
    key: Arc<RsaKeyPair>,
    algorithm: SignatureAndHashAlgorithm,
    encoding: &'static dyn signature::RsaEncoding,
}

impl Signer for RsaSigner {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, Error> {
        let mut sig = vec![0; self.key.public().modulus_len()];

        let rng = SystemRandom::new();
        self.key
            .sign(self.encoding, &rng, message, &mut sig)
            .map(|_| sig)
            .map_err(|_| Error::General("signing failed".into()))
    }

    fn algorithm(&self) -> Option<SignatureAndHashAlgorithm> {
        Some(self.algorithm)
    }
}

impl Debug for RsaSigner {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaSigner")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

/// A [`SigningKey`] and [`Signer`] implementation for ECDSA.
///
/// Unlike [`RsaSigningKey`]/[`RsaSigner`], where we have one key that supports
/// multiple signature algorithms, we can use the same type for both traits here.
#[derive(Clone)]
struct EcdsaSigningKey {
    key: Arc<EcdsaKeyPair>,
    algorithm: SignatureAndHashAlgorithm,
}

impl EcdsaSigningKey {
    /// Make a new [`EcdsaSigningKey`] from a PKCS#8 encoding, expecting a key
    /// usable with precisely the given signature algorithm.
    fn new(
        der: &PrivatePkcs8KeyDer<'_>,
        algorithm: SignatureAndHashAlgorithm,
        sigalg: &'static signature::EcdsaSigningAlgorithm,
    ) -> Result<Self, ()> {
        let rng = SystemRandom::new();
        let key_pair =
            EcdsaKeyPair::from_pkcs8(sigalg, der.secret_pkcs8_der(), &rng).map_err(|_| ())?;

        Ok(Self {
            key: Arc::new(key_pair),
            algorithm,
        })
    }
}

impl SigningKey for EcdsaSigningKey {
    fn choose_algorithm(&self, offered: &[SignatureAndHashAlgorithm]) -> Option<Box<dyn Signer>> {
        if offered.contains(&self.algorithm) {
            Some(Box::new(self.clone()))
        } else {
            None
        }
    }

    fn algorithm(&self) -> SignatureAlgorithm {
        SignatureAlgorithm::ECDSA
    }
}

impl Signer for EcdsaSigningKey {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, Error> {
        let rng = SystemRandom::new();
        self.key
            .sign(&rng, message)
            .map_err(|_| Error::General("signing failed".into()))
            .map(|sig| sig.as_ref().into())
    }

    fn algorithm(&self) -> Option<SignatureAndHashAlgorithm> {
        Some(self.algorithm)
    }
}

impl Debug for EcdsaSigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcdsaSigningKey")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

/// A [`SigningKey`] and [`Signer`] implementation for ED25519.
#[derive(Clone)]
struct Ed25519SigningKey {
    key: Arc<Ed25519KeyPair>,
}

impl SigningKey for Ed25519SigningKey {
    fn choose_algorithm(&self, offered: &[SignatureAndHashAlgorithm]) -> Option<Box<dyn Signer>> {
        if offered.contains(&SignatureAndHashAlgorithm::ED25519) {
            Some(Box::new(self.clone()))
        } else {
            None
        }
    }

    fn algorithm(&self) -> SignatureAlgorithm {
        SignatureAlgorithm::ED25519
    }
}

impl Signer for Ed25519SigningKey {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, Error> {
        Ok(self.key.sign(message).as_ref().into())
    }

    fn algorithm(&self) -> Option<SignatureAndHashAlgorithm> {
        Some(SignatureAndHashAlgorithm::ED25519)
    }
}

impl Debug for Ed25519SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed25519SigningKey")
            .field("public_key", &self.key.public_key())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::format;

    use pki_types::PrivatePkcs8KeyDer;
    use ring::rand::SystemRandom;
    use ring::signature::{EcdsaKeyPair, Ed25519KeyPair, ECDSA_P384_SHA384_ASN1_SIGNING};

    use super::*;

    fn ed25519_der() -> PrivateKeyDer<'static> {
        let pkcs8 = Ed25519KeyPair::generate_pkcs8(&SystemRandom::new()).unwrap();
        PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(pkcs8.as_ref().to_vec()))
    }

    #[test]
    fn can_load_eddsa() {
        let key = any_supported_type(&ed25519_der()).unwrap();
        assert_eq!(key.algorithm(), SignatureAlgorithm::ED25519);
        assert!(format!("{key:?}").contains("Ed25519SigningKey"));

        let rsa_only = [SignatureAndHashAlgorithm::new(
            HashAlgorithm::SHA256,
            SignatureAlgorithm::RSA,
        )];
        assert!(key.choose_algorithm(&rsa_only).is_none());
        assert!(key.legacy_signer().is_none());

        let signer = key
            .choose_algorithm(&[SignatureAndHashAlgorithm::ED25519])
            .unwrap();
        assert_eq!(signer.algorithm(), Some(SignatureAndHashAlgorithm::ED25519));
        assert_eq!(signer.sign(b"hello").unwrap().len(), 64);
    }

    #[test]
    fn can_load_ecdsa_p384() {
        let rng = SystemRandom::new();
        let pkcs8 = EcdsaKeyPair::generate_pkcs8(&ECDSA_P384_SHA384_ASN1_SIGNING, &rng).unwrap();
        let der = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(pkcs8.as_ref().to_vec()));

        let key = any_ecdsa_type(&der).unwrap();
        assert_eq!(key.algorithm(), SignatureAlgorithm::ECDSA);

        let p384 = SignatureAndHashAlgorithm::new(HashAlgorithm::SHA384, SignatureAlgorithm::ECDSA);
        let p256 = SignatureAndHashAlgorithm::new(HashAlgorithm::SHA256, SignatureAlgorithm::ECDSA);
        assert!(key.choose_algorithm(&[p256]).is_none());
        let signer = key.choose_algorithm(&[p256, p384]).unwrap();
        assert_eq!(signer.algorithm(), Some(p384));
        assert!(!signer.sign(b"hello").unwrap().is_empty());
    }

    #[test]
    fn cannot_load_invalid_pkcs8_encoding() {
        let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(&b"invalid"[..]));
        assert_eq!(
            any_supported_type(&key).err(),
            Some(Error::General(
                "failed to parse private key as RSA, ECDSA, or EdDSA".into()
            ))
        );
        assert!(any_ecdsa_type(&key).is_err());
    }
}
