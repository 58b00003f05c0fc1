//! The building blocks of the RFC 8446 key schedule.

use std::vec;
use std::vec::Vec;

use crate::crypto::hash::Hash;
use crate::crypto::tls13::{Hkdf, HkdfExpander, OkmBlock};
use crate::crypto::CryptoProvider;
use crate::error::{ApiMisuse, Error};
use crate::msgs::enums::HashAlgorithm;
use crate::secret::TlsSecret;

/// The labels of secrets derived with `Derive-Secret`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SecretKind {
    ClientEarlyTrafficSecret,
    EarlyExporterMasterSecret,
    ClientHandshakeTrafficSecret,
    ServerHandshakeTrafficSecret,
    ClientApplicationTrafficSecret,
    ServerApplicationTrafficSecret,
    ExporterMasterSecret,
    ResumptionMasterSecret,
    DerivedSecret,
}

impl SecretKind {
    pub(crate) fn to_bytes(self) -> &'static [u8] {
        use self::SecretKind::*;
        match self {
            ClientEarlyTrafficSecret => b"c e traffic",
            EarlyExporterMasterSecret => b"e exp master",
            ClientHandshakeTrafficSecret => b"c hs traffic",
            ServerHandshakeTrafficSecret => b"s hs traffic",
            ClientApplicationTrafficSecret => b"c ap traffic",
            ServerApplicationTrafficSecret => b"s ap traffic",
            ExporterMasterSecret => b"exp master",
            ResumptionMasterSecret => b"res master",
            DerivedSecret => b"derived",
        }
    }
}

/// The hash, HKDF and `HashLen` of one key schedule.
pub(crate) struct KeyScheduleSuite {
    pub(crate) hash: &'static dyn Hash,
    pub(crate) hkdf: std::boxed::Box<dyn Hkdf>,
}

impl KeyScheduleSuite {
    pub(crate) fn new(provider: &dyn CryptoProvider, hash: HashAlgorithm) -> Result<Self, Error> {
        match (provider.hash(hash), provider.hkdf(hash)) {
            (Some(hash), Some(hkdf)) => Ok(Self { hash, hkdf }),
            _ => Err(ApiMisuse::AlgorithmNotProvided.into()),
        }
    }

    pub(crate) fn hash_len(&self) -> usize {
        self.hash.output_len()
    }

    /// `HKDF-Extract(salt, ikm)`, with an absent salt meaning `HashLen` zeroes.
    pub(crate) fn extract(&self, salt: Option<&TlsSecret>, ikm: &[u8]) -> Result<TlsSecret, Error> {
        let salt = match salt {
            Some(salt) => Some(salt.bytes()?),
            None => None,
        };
        Ok(TlsSecret::from_vec(
            self.hkdf
                .extract(salt, ikm)
                .to_vec(),
        ))
    }

    /// `Derive-Secret(secret, label, Messages)`, where `transcript_hash` is
    /// `Transcript-Hash(Messages)`.
    pub(crate) fn derive(
        &self,
        secret: &TlsSecret,
        kind: SecretKind,
        transcript_hash: &[u8],
    ) -> Result<TlsSecret, Error> {
        self.expand_label(secret, kind.to_bytes(), transcript_hash, self.hash_len())
    }

    /// `Derive-Secret(secret, label, "")`.
    pub(crate) fn derive_for_empty_hash(
        &self,
        secret: &TlsSecret,
        kind: SecretKind,
    ) -> Result<TlsSecret, Error> {
        let empty_hash = self.hash.hash(&[]);
        self.derive(secret, kind, empty_hash.as_ref())
    }

    /// `HKDF-Expand-Label(secret, label, context, len)`.
    pub(crate) fn expand_label(
        &self,
        secret: &TlsSecret,
        label: &[u8],
        context: &[u8],
        len: usize,
    ) -> Result<TlsSecret, Error> {
        let expander = self
            .hkdf
            .expander_for_okm(&OkmBlock::new(secret.bytes()?));
        hkdf_expand_label(expander.as_ref(), label, context, len).map(TlsSecret::from_vec)
    }

    /// HMAC over this schedule's hash, keyed with `key`.
    pub(crate) fn hmac_sign(&self, key: &TlsSecret, message: &[u8]) -> Result<Vec<u8>, Error> {
        Ok(self
            .hkdf
            .hmac_sign(&OkmBlock::new(key.bytes()?), message)
            .as_ref()
            .to_vec())
    }
}

/// [HKDF-Expand-Label] into a new buffer of `len` bytes.
///
/// Fails if `label` or `context` do not fit their length prefixes, or if
/// `len` exceeds `255 * HashLen`.
///
/// [HKDF-Expand-Label]: <https://www.rfc-editor.org/rfc/rfc8446#section-7.1>
pub fn hkdf_expand_label(
    expander: &dyn HkdfExpander,
    label: &[u8],
    context: &[u8],
    len: usize,
) -> Result<Vec<u8>, Error> {
    const LABEL_PREFIX: &[u8] = b"tls13 ";

    let full_label_len = LABEL_PREFIX.len() + label.len();
    if full_label_len > 255 {
        return Err(ApiMisuse::ValueOutOfRange {
            bits: 8,
            value: full_label_len as u64,
        }
        .into());
    }
    if context.len() > 255 {
        return Err(ApiMisuse::ValueOutOfRange {
            bits: 8,
            value: context.len() as u64,
        }
        .into());
    }
    if len > usize::from(u16::MAX) {
        return Err(ApiMisuse::KeyDerivationOutputTooLong.into());
    }

    let output_len = u16::to_be_bytes(len as u16);
    let label_len = u8::to_be_bytes(full_label_len as u8);
    let context_len = u8::to_be_bytes(context.len() as u8);

    let info = &[
        &output_len[..],
        &label_len[..],
        LABEL_PREFIX,
        label,
        &context_len[..],
        context,
    ];

    let mut out = vec![0u8; len];
    expander
        .expand_slice(info, &mut out)
        .map_err(|_| ApiMisuse::KeyDerivationOutputTooLong)?;
    Ok(out)
}
