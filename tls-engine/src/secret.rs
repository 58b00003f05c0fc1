use core::fmt;
use std::sync::{Mutex, PoisonError};
use std::vec;
use std::vec::Vec;

use zeroize::Zeroize;

use crate::crypto::{tls12 as prf, CryptoProvider};
use crate::error::{ApiMisuse, Error};
use crate::msgs::enums::HashAlgorithm;
use crate::suites::PrfAlgorithm;
use crate::tls12::ssl3;
use crate::tls13::key_schedule::hkdf_expand_label;

/// A secret value held by the key schedule.
///
/// A secret is alive until it is [destroyed](Self::destroy), its contents
/// are [extracted](Self::extract) or it is [adopted](Self::adopt) by a new
/// owner.  Any later use fails.  The contents are zeroized when the secret
/// dies and when it is dropped.
pub struct TlsSecret {
    data: Vec<u8>,
    alive: bool,
}

impl TlsSecret {
    /// Make a secret holding a copy of `data`.
    pub fn new(data: &[u8]) -> Self {
        Self::from_vec(data.to_vec())
    }

    /// Make a secret taking ownership of `data`.
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self { data, alive: true }
    }

    /// A secret of `len` zero bytes.
    pub fn zeroes(len: usize) -> Self {
        Self::from_vec(vec![0u8; len])
    }

    /// Whether this secret can still be used.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Length of the secret, in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the secret has no contents.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Zeroize the contents.  The secret cannot be used afterwards.
    pub fn destroy(&mut self) {
        self.data.zeroize();
        self.data.clear();
        self.alive = false;
    }

    /// Take the raw contents, destroying this secret.
    pub fn extract(&mut self) -> Result<Vec<u8>, Error> {
        self.check_alive()?;
        self.alive = false;
        Ok(core::mem::take(&mut self.data))
    }

    /// Move the contents into a new owner, destroying this secret.
    pub fn adopt(&mut self) -> Result<Self, Error> {
        self.extract().map(Self::from_vec)
    }

    /// An independent copy of this secret.
    pub fn copy(&self) -> Result<Self, Error> {
        Ok(Self::new(self.bytes()?))
    }

    /// Derive `len` bytes using the TLS 1.2-and-earlier PRF `prf`.
    ///
    /// The SSL 3.0 construction has no label and ignores `label`.  The HKDF
    /// schedules are not PRFs and are rejected.
    pub fn derive_prf(
        &self,
        provider: &dyn CryptoProvider,
        algorithm: PrfAlgorithm,
        label: &[u8],
        seed: &[u8],
        len: usize,
    ) -> Result<Self, Error> {
        let secret = self.bytes()?;
        let mut out = vec![0u8; len];

        match algorithm {
            PrfAlgorithm::SslPrfLegacy => ssl3::prf(provider, &mut out, secret, seed)?,
            PrfAlgorithm::TlsPrfLegacy => {
                let md5 = provider
                    .hmac(HashAlgorithm::MD5)
                    .ok_or(ApiMisuse::AlgorithmNotProvided)?;
                let sha1 = provider
                    .hmac(HashAlgorithm::SHA1)
                    .ok_or(ApiMisuse::AlgorithmNotProvided)?;
                prf::legacy_prf(&mut out, md5, sha1, secret, label, seed);
            }
            PrfAlgorithm::TlsPrfSha256 | PrfAlgorithm::TlsPrfSha384 => {
                let hmac = algorithm
                    .hash()
                    .and_then(|hash| provider.hmac(hash))
                    .ok_or(ApiMisuse::AlgorithmNotProvided)?;
                prf::prf(&mut out, &*hmac.with_key(secret), label, seed);
            }
            PrfAlgorithm::Tls13HkdfSha256
            | PrfAlgorithm::Tls13HkdfSha384
            | PrfAlgorithm::Tls13HkdfSm3 => {
                return Err(ApiMisuse::UnsupportedForProtocolVersion.into());
            }
        }

        Ok(Self::from_vec(out))
    }

    /// `HKDF-Extract(salt = self, ikm)`.
    pub fn hkdf_extract(
        &self,
        provider: &dyn CryptoProvider,
        hash: HashAlgorithm,
        ikm: &[u8],
    ) -> Result<Self, Error> {
        let hkdf = provider
            .hkdf(hash)
            .ok_or(ApiMisuse::AlgorithmNotProvided)?;
        Ok(Self::from_vec(
            hkdf.extract(Some(self.bytes()?), ikm)
                .to_vec(),
        ))
    }

    /// `HKDF-Expand-Label(self, label, context, len)`.
    pub fn hkdf_expand_label(
        &self,
        provider: &dyn CryptoProvider,
        hash: HashAlgorithm,
        label: &[u8],
        context: &[u8],
        len: usize,
    ) -> Result<Self, Error> {
        let hkdf = provider
            .hkdf(hash)
            .ok_or(ApiMisuse::AlgorithmNotProvided)?;
        let expander = hkdf.expander_for_okm(&crate::crypto::tls13::OkmBlock::new(self.bytes()?));
        hkdf_expand_label(expander.as_ref(), label, context, len).map(Self::from_vec)
    }

    pub(crate) fn bytes(&self) -> Result<&[u8], Error> {
        self.check_alive()?;
        Ok(&self.data)
    }

    fn check_alive(&self) -> Result<(), Error> {
        match self.alive {
            true => Ok(()),
            false => Err(ApiMisuse::SecretDestroyed.into()),
        }
    }
}

impl Drop for TlsSecret {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}

impl fmt::Debug for TlsSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TlsSecret")
            .field("alive", &self.alive)
            .finish_non_exhaustive()
    }
}

/// Take over a pooled resumable master secret, if it is still alive.
///
/// The check and the adoption happen under one lock, so exactly one session
/// can resume from a given secret.
///
/// A poisoned lock is recovered: no `TlsSecret` operation panics part way
/// through, so the alive flag still tells whether the secret is usable.
pub fn session_master_secret(pooled: &Mutex<TlsSecret>) -> Option<TlsSecret> {
    let mut secret = pooled
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    match secret.is_alive() {
        true => secret.adopt().ok(),
        false => None,
    }
}
