use core::fmt::Debug;
use std::boxed::Box;
use std::sync::Arc;
use std::vec::Vec;

use pki_types::CertificateDer;

use crate::error::Error;
use crate::msgs::enums::SignatureAlgorithm;
use crate::msgs::handshake::SignatureAndHashAlgorithm;

/// An abstract signing key.
///
/// This interface is used to produce handshake signatures for both server
/// and client authentication.  Objects of this type are always used as
/// `Arc<dyn SigningKey>`.
pub trait SigningKey: Debug + Send + Sync {
    /// Choose a signature algorithm from those offered, in the order given.
    ///
    /// Expresses the choice by returning something that implements `Signer`,
    /// using the chosen algorithm.
    fn choose_algorithm(&self, offered: &[SignatureAndHashAlgorithm]) -> Option<Box<dyn Signer>>;

    /// A signer for protocol versions before TLS 1.2, where no algorithm is
    /// negotiated and the hash is implied by the key type.
    ///
    /// Returns `None` if this key cannot produce such signatures.
    fn legacy_signer(&self) -> Option<Box<dyn Signer>> {
        None
    }

    /// What kind of key we have.
    fn algorithm(&self) -> SignatureAlgorithm;
}

/// A thing that can sign a message.
pub trait Signer: Debug + Send + Sync {
    /// Signs `message` using the selected algorithm.
    ///
    /// `message` is not hashed; the implementer must hash it using the hash function
    /// implicit in [`Self::algorithm()`].
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, Error>;

    /// Reveals which algorithm will be used when you call [`Self::sign()`].
    ///
    /// `None` for a legacy signer, which uses the pre-TLS 1.2 construction.
    fn algorithm(&self) -> Option<SignatureAndHashAlgorithm>;
}

/// Verifies signatures made with one algorithm by one public key.
///
/// Produced by a certificate for a particular [`SignatureAndHashAlgorithm`].
pub trait Verifier: Send + Sync {
    /// Verify `signature` over the whole of `message`.
    ///
    /// Returns `Ok(false)` for a signature that is well-formed but wrong.
    fn verify_signature(&self, message: &[u8], signature: &[u8]) -> Result<bool, Error>;

    /// Verify `signature` over an already-computed digest.
    ///
    /// Only the pre-TLS 1.2 RSA construction needs this, as it signs the
    /// combined MD5 and SHA-1 digest without a `DigestInfo` wrapper.
    fn verify_raw_signature(&self, digest: &[u8], signature: &[u8]) -> Result<bool, Error> {
        let _ = (digest, signature);
        Err(Error::General(
            "verifier does not support raw signatures".into(),
        ))
    }
}

/// Accumulates signed content in pieces, then signs it.
#[derive(Debug)]
pub struct StreamSigner {
    signer: Box<dyn Signer>,
    buffer: Vec<u8>,
}

impl StreamSigner {
    /// Begin a signature using `signer`.
    pub fn new(signer: Box<dyn Signer>) -> Self {
        Self {
            signer,
            buffer: Vec::new(),
        }
    }

    /// Add `data` to the signed content.
    pub fn update(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// The algorithm the signature will use.
    pub fn algorithm(&self) -> Option<SignatureAndHashAlgorithm> {
        self.signer.algorithm()
    }

    /// Sign everything added so far.
    pub fn finish(self) -> Result<Vec<u8>, Error> {
        self.signer.sign(&self.buffer)
    }
}

/// Accumulates signed content in pieces, then verifies a signature over it.
pub struct StreamVerifier {
    verifier: Box<dyn Verifier>,
    buffer: Vec<u8>,
}

impl StreamVerifier {
    /// Begin verification with `verifier`.
    pub fn new(verifier: Box<dyn Verifier>) -> Self {
        Self {
            verifier,
            buffer: Vec::new(),
        }
    }

    /// Add `data` to the signed content.
    pub fn update(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Verify `signature` over everything added so far.
    pub fn finish(self, signature: &[u8]) -> Result<bool, Error> {
        self.verifier
            .verify_signature(&self.buffer, signature)
    }
}

/// A packaged-together certificate chain and matching `SigningKey`.
#[derive(Clone, Debug)]
pub struct CertifiedKey {
    /// The certificate chain.
    pub cert: Vec<CertificateDer<'static>>,

    /// The certified key.
    pub key: Arc<dyn SigningKey>,
}

impl CertifiedKey {
    /// Make a new CertifiedKey, with the given chain and key.
    ///
    /// The cert chain must not be empty. The first certificate in the chain
    /// must be the end-entity certificate.
    pub fn new(cert: Vec<CertificateDer<'static>>, key: Arc<dyn SigningKey>) -> Self {
        Self { cert, key }
    }
}
