use core::fmt;
use std::boxed::Box;
use std::string::String;
use std::vec::Vec;

use pki_types::CertificateDer;
use ring::signature;

use crate::crypto::Verifier;
use crate::error::{Error, PeerMisbehaved};
use crate::msgs::enums::{HashAlgorithm, SignatureAlgorithm};
use crate::msgs::handshake::SignatureAndHashAlgorithm;
use crate::x509::Certificate;

/// The kinds of public key *ring* can verify signatures with.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublicKeyKind {
    /// `rsaEncryption`: PKCS#1 v1.5 and RSASSA-PSS (`rsae`) signatures.
    Rsa,
    /// `id-RSASSA-PSS`: RSASSA-PSS (`pss`) signatures only.
    RsaPss,
    /// ECDSA over P-256.
    EcdsaP256,
    /// ECDSA over P-384.
    EcdsaP384,
    /// Ed25519.
    Ed25519,
}

impl PublicKeyKind {
    fn signs_with(self, algorithm: SignatureAlgorithm) -> bool {
        use SignatureAlgorithm::*;
        match self {
            Self::Rsa => matches!(
                algorithm,
                RSA | RSA_PSS_RSAE_SHA256 | RSA_PSS_RSAE_SHA384 | RSA_PSS_RSAE_SHA512
            ),
            Self::RsaPss => matches!(
                algorithm,
                RSA_PSS_PSS_SHA256 | RSA_PSS_PSS_SHA384 | RSA_PSS_PSS_SHA512
            ),
            Self::EcdsaP256 | Self::EcdsaP384 => algorithm == ECDSA,
            Self::Ed25519 => algorithm == ED25519,
        }
    }

    /// The *ring* algorithm verifying `algorithm` signatures by this kind of key.
    fn verification_algorithm(
        self,
        algorithm: SignatureAndHashAlgorithm,
    ) -> Option<&'static dyn signature::VerificationAlgorithm> {
        use HashAlgorithm as H;
        use SignatureAlgorithm as S;

        Some(match (self, algorithm.hash, algorithm.signature) {
            (Self::Rsa, H::SHA1, S::RSA) => &signature::RSA_PKCS1_2048_8192_SHA1_FOR_LEGACY_USE_ONLY,
            (Self::Rsa, H::SHA256, S::RSA) => &signature::RSA_PKCS1_2048_8192_SHA256,
            (Self::Rsa, H::SHA384, S::RSA) => &signature::RSA_PKCS1_2048_8192_SHA384,
            (Self::Rsa, H::SHA512, S::RSA) => &signature::RSA_PKCS1_2048_8192_SHA512,
            (Self::Rsa, H::Intrinsic, S::RSA_PSS_RSAE_SHA256)
            | (Self::RsaPss, H::Intrinsic, S::RSA_PSS_PSS_SHA256) => {
                &signature::RSA_PSS_2048_8192_SHA256
            }
            (Self::Rsa, H::Intrinsic, S::RSA_PSS_RSAE_SHA384)
            | (Self::RsaPss, H::Intrinsic, S::RSA_PSS_PSS_SHA384) => {
                &signature::RSA_PSS_2048_8192_SHA384
            }
            (Self::Rsa, H::Intrinsic, S::RSA_PSS_RSAE_SHA512)
            | (Self::RsaPss, H::Intrinsic, S::RSA_PSS_PSS_SHA512) => {
                &signature::RSA_PSS_2048_8192_SHA512
            }
            (Self::EcdsaP256, H::SHA256, S::ECDSA) => &signature::ECDSA_P256_SHA256_ASN1,
            (Self::EcdsaP256, H::SHA384, S::ECDSA) => &signature::ECDSA_P256_SHA384_ASN1,
            (Self::EcdsaP384, H::SHA256, S::ECDSA) => &signature::ECDSA_P384_SHA256_ASN1,
            (Self::EcdsaP384, H::SHA384, S::ECDSA) => &signature::ECDSA_P384_SHA384_ASN1,
            (Self::Ed25519, H::Intrinsic, S::ED25519) => &signature::ED25519,
            _ => return None,
        })
    }
}

/// Whether any key kind can verify `algorithm` with *ring*.
pub(super) fn supports(algorithm: SignatureAndHashAlgorithm) -> bool {
    [
        PublicKeyKind::Rsa,
        PublicKeyKind::RsaPss,
        PublicKeyKind::EcdsaP256,
        PublicKeyKind::EcdsaP384,
        PublicKeyKind::Ed25519,
    ]
    .into_iter()
    .any(|kind| kind.verification_algorithm(algorithm).is_some())
}

/// A certificate whose fields were decoded elsewhere, verifying with *ring*.
///
/// `public_key` is the contents of the `subjectPublicKey` BIT STRING: an
/// `RSAPublicKey` for RSA keys, an uncompressed point for ECDSA, and the raw
/// 32 bytes for Ed25519.
pub struct RingCertificate {
    der: CertificateDer<'static>,
    kind: PublicKeyKind,
    public_key: Vec<u8>,
    sig_alg_oid: Option<String>,
    sig_alg_params: Option<Vec<u8>>,
    extensions: Vec<(String, Vec<u8>)>,
}

impl RingCertificate {
    /// Make a certificate for the encoding `der`, carrying `public_key`.
    pub fn new(der: CertificateDer<'static>, kind: PublicKeyKind, public_key: Vec<u8>) -> Self {
        Self {
            der,
            kind,
            public_key,
            sig_alg_oid: None,
            sig_alg_params: None,
            extensions: Vec::new(),
        }
    }

    /// Record the certificate's own `signatureAlgorithm`.
    pub fn with_signature_algorithm(mut self, oid: &str, params: Option<Vec<u8>>) -> Self {
        self.sig_alg_oid = Some(oid.into());
        self.sig_alg_params = params;
        self
    }

    /// Record an extension, as its OID and `extnValue` contents.
    pub fn with_extension(mut self, oid: &str, value: Vec<u8>) -> Self {
        self.extensions.push((oid.into(), value));
        self
    }

    /// The kind of key this certificate carries.
    pub fn kind(&self) -> PublicKeyKind {
        self.kind
    }
}

impl Certificate for RingCertificate {
    fn encoding(&self) -> &[u8] {
        self.der.as_ref()
    }

    fn sig_alg_oid(&self) -> Option<&str> {
        self.sig_alg_oid.as_deref()
    }

    fn sig_alg_params(&self) -> Option<&[u8]> {
        self.sig_alg_params.as_deref()
    }

    fn extension(&self, oid: &str) -> Option<&[u8]> {
        self.extensions
            .iter()
            .find(|(known, _)| known == oid)
            .map(|(_, value)| value.as_slice())
    }

    fn legacy_signature_algorithm(&self) -> Option<SignatureAlgorithm> {
        match self.kind {
            PublicKeyKind::Rsa => Some(SignatureAlgorithm::RSA),
            PublicKeyKind::EcdsaP256 | PublicKeyKind::EcdsaP384 => Some(SignatureAlgorithm::ECDSA),
            PublicKeyKind::RsaPss | PublicKeyKind::Ed25519 => None,
        }
    }

    fn supports_signature_algorithm(&self, algorithm: SignatureAlgorithm) -> bool {
        self.kind.signs_with(algorithm)
    }

    fn supports_signature_algorithm_ca(&self, algorithm: SignatureAlgorithm) -> bool {
        self.kind.signs_with(algorithm)
    }

    fn create_verifier(
        &self,
        algorithm: SignatureAndHashAlgorithm,
    ) -> Result<Box<dyn Verifier>, Error> {
        match self.kind.verification_algorithm(algorithm) {
            Some(alg) => Ok(Box::new(RingVerifier {
                alg,
                public_key: self.public_key.clone(),
            })),
            None => Err(PeerMisbehaved::SignedHandshakeWithUnadvertisedSigScheme.into()),
        }
    }
}

impl fmt::Debug for RingCertificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingCertificate")
            .field("kind", &self.kind)
            .field("sig_alg_oid", &self.sig_alg_oid)
            .finish_non_exhaustive()
    }
}

struct RingVerifier {
    alg: &'static dyn signature::VerificationAlgorithm,
    public_key: Vec<u8>,
}

impl Verifier for RingVerifier {
    fn verify_signature(&self, message: &[u8], signature: &[u8]) -> Result<bool, Error> {
        Ok(signature::UnparsedPublicKey::new(self.alg, &self.public_key)
            .verify(message, signature)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use ring::rand::SystemRandom;
    use ring::signature::{Ed25519KeyPair, KeyPair};

    use super::*;

    #[test]
    fn ed25519_signatures_verify() {
        let pkcs8 = Ed25519KeyPair::generate_pkcs8(&SystemRandom::new()).unwrap();
        let pair = Ed25519KeyPair::from_pkcs8(pkcs8.as_ref()).unwrap();
        let cert = RingCertificate::new(
            CertificateDer::from(b"not parsed".to_vec()),
            PublicKeyKind::Ed25519,
            pair.public_key().as_ref().to_vec(),
        )
        .with_signature_algorithm("1.3.101.112", None);

        assert!(cert.supports_signature_algorithm(SignatureAlgorithm::ED25519));
        assert!(!cert.supports_signature_algorithm(SignatureAlgorithm::ECDSA));
        assert_eq!(cert.legacy_signature_algorithm(), None);
        assert_eq!(cert.sig_alg_oid(), Some("1.3.101.112"));
        assert_eq!(cert.encoding(), b"not parsed");

        let sig = pair.sign(b"message");
        let verifier = cert
            .create_verifier(SignatureAndHashAlgorithm::ED25519)
            .unwrap();
        assert_eq!(verifier.verify_signature(b"message", sig.as_ref()), Ok(true));
        assert_eq!(verifier.verify_signature(b"massage", sig.as_ref()), Ok(false));

        assert!(cert
            .create_verifier(SignatureAndHashAlgorithm::new(
                HashAlgorithm::SHA256,
                SignatureAlgorithm::ECDSA
            ))
            .is_err());
    }

    #[test]
    fn extensions_are_found_by_oid() {
        let cert = RingCertificate::new(
            CertificateDer::from(Vec::new()),
            PublicKeyKind::Rsa,
            Vec::new(),
        )
        .with_extension("1.3.6.1.5.5.7.1.24", vec![0x30, 0x00]);
        assert_eq!(cert.extension("1.3.6.1.5.5.7.1.24"), Some(&[0x30, 0x00][..]));
        assert_eq!(cert.extension("2.5.29.15"), None);
        assert_eq!(cert.legacy_signature_algorithm(), Some(SignatureAlgorithm::RSA));
    }

    #[test]
    fn supported_algorithms() {
        assert!(supports(SignatureAndHashAlgorithm::RSA_PSS_PSS_SHA256));
        assert!(supports(SignatureAndHashAlgorithm::new(
            HashAlgorithm::SHA1,
            SignatureAlgorithm::RSA
        )));
        assert!(!supports(SignatureAndHashAlgorithm::new(
            HashAlgorithm::SHA1,
            SignatureAlgorithm::ECDSA
        )));
        assert!(!supports(SignatureAndHashAlgorithm::ED448));
        assert!(!supports(SignatureAndHashAlgorithm::new(
            HashAlgorithm::SHA256,
            SignatureAlgorithm::DSA
        )));
    }
}
