//! Static descriptions of every recognised cipher suite.

use std::vec::Vec;

use crate::enums::{CipherSuite, ProtocolVersion};
use crate::error::{Error, PeerMisbehaved};
use crate::msgs::enums::HashAlgorithm;

/// The key exchange family a cipher suite names.
///
/// TLS 1.3 suites do not name one, and map to [`KeyExchangeAlgorithm::Null`].
#[non_exhaustive]
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyExchangeAlgorithm {
    Null,
    Rsa,
    DheDss,
    DheRsa,
    DhDss,
    DhRsa,
    DhAnon,
    Psk,
    DhePsk,
    RsaPsk,
    EcdhEcdsa,
    EcdheEcdsa,
    EcdhRsa,
    EcdheRsa,
    EcdhAnon,
    EcdhePsk,
    Srp,
    SrpDss,
    SrpRsa,
}

impl KeyExchangeAlgorithm {
    /// The named group roles this key exchange needs.
    ///
    /// [`KeyExchangeAlgorithm::Null`] (TLS 1.3) may use either finite field
    /// or elliptic curve groups.
    pub fn named_group_roles(self) -> &'static [NamedGroupRole] {
        use NamedGroupRole::*;
        match self {
            Self::DhAnon | Self::DhDss | Self::DhRsa | Self::DheDss | Self::DhePsk | Self::DheRsa => {
                &[Dh]
            }
            Self::EcdhAnon | Self::EcdhRsa | Self::EcdhePsk | Self::EcdheRsa => &[Ecdh],
            Self::EcdhEcdsa | Self::EcdheEcdsa => &[Ecdh, Ecdsa],
            Self::Null => &[Dh, Ecdh],
            Self::Rsa | Self::Psk | Self::RsaPsk | Self::Srp | Self::SrpDss | Self::SrpRsa => &[],
        }
    }

    /// Whether this key exchange authenticates the server with a signature
    /// over its ephemeral parameters.
    pub fn signs_server_key_exchange(self) -> bool {
        matches!(
            self,
            Self::DheDss | Self::DheRsa | Self::EcdheEcdsa | Self::EcdheRsa | Self::SrpDss | Self::SrpRsa
        )
    }

    /// Whether this key exchange is anonymous or purely pre-shared-key based,
    /// so no certificate is involved.
    pub fn is_anonymous(self) -> bool {
        matches!(
            self,
            Self::DhAnon | Self::EcdhAnon | Self::Psk | Self::DhePsk | Self::EcdhePsk | Self::Srp
        )
    }
}

/// What a named group is used for by a key exchange.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NamedGroupRole {
    Dh,
    Ecdh,
    Ecdsa,
}

/// The bulk encryption algorithm a cipher suite names.
#[non_exhaustive]
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EncryptionAlgorithm {
    Null,
    TripleDesEdeCbc,
    Aes128Cbc,
    Aes256Cbc,
    Aes128Gcm,
    Aes256Gcm,
    Aes128Ccm,
    Aes128Ccm8,
    Aes256Ccm,
    Aes256Ccm8,
    Camellia128Cbc,
    Camellia256Cbc,
    Camellia128Gcm,
    Camellia256Gcm,
    SeedCbc,
    Aria128Cbc,
    Aria256Cbc,
    Aria128Gcm,
    Aria256Gcm,
    Chacha20Poly1305,
    Sm4Gcm,
    Sm4Ccm,
}

impl EncryptionAlgorithm {
    /// Whether this is a stream, block or AEAD cipher.
    pub fn cipher_type(self) -> CipherType {
        use EncryptionAlgorithm::*;
        match self {
            Null => CipherType::Stream,
            TripleDesEdeCbc | Aes128Cbc | Aes256Cbc | Camellia128Cbc | Camellia256Cbc | SeedCbc
            | Aria128Cbc | Aria256Cbc => CipherType::Block,
            Aes128Gcm | Aes256Gcm | Aes128Ccm | Aes128Ccm8 | Aes256Ccm | Aes256Ccm8
            | Camellia128Gcm | Camellia256Gcm | Aria128Gcm | Aria256Gcm | Chacha20Poly1305
            | Sm4Gcm | Sm4Ccm => CipherType::Aead,
        }
    }

    /// Length of the cipher key, in bytes.
    pub fn key_len(self) -> usize {
        use EncryptionAlgorithm::*;
        match self {
            Null => 0,
            TripleDesEdeCbc => 24,
            Aes128Cbc | Aes128Gcm | Aes128Ccm | Aes128Ccm8 | Camellia128Cbc | Camellia128Gcm
            | SeedCbc | Aria128Cbc | Aria128Gcm | Sm4Gcm | Sm4Ccm => 16,
            Aes256Cbc | Aes256Gcm | Aes256Ccm | Aes256Ccm8 | Camellia256Cbc | Camellia256Gcm
            | Aria256Cbc | Aria256Gcm | Chacha20Poly1305 => 32,
        }
    }

    /// Length of the implicit IV taken from the key block under `version`.
    ///
    /// TLS 1.3 always uses a 12-byte IV.  TLS 1.2 AEAD ciphers use a 4-byte
    /// salt, except ChaCha20-Poly1305 which uses the full nonce.  Block ciphers
    /// only carry an implicit IV before TLS 1.1.
    pub fn fixed_iv_len(self, version: ProtocolVersion) -> usize {
        if version.is_tls13_or_later() {
            return 12;
        }

        match (self.cipher_type(), self) {
            (CipherType::Aead, Self::Chacha20Poly1305) => 12,
            (CipherType::Aead, _) => 4,
            (CipherType::Block, _) if !version.is_tls11_or_later() => self.block_len(),
            _ => 0,
        }
    }

    fn block_len(self) -> usize {
        match self {
            Self::TripleDesEdeCbc => 8,
            _ => 16,
        }
    }
}

/// How a cipher processes record payloads.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CipherType {
    Stream,
    Block,
    Aead,
}

/// The record MAC a cipher suite names.  AEAD suites use [`MacAlgorithm::Null`].
#[non_exhaustive]
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MacAlgorithm {
    Null,
    HmacMd5,
    HmacSha1,
    HmacSha256,
    HmacSha384,
    HmacSha512,
}

impl MacAlgorithm {
    /// The hash underlying this HMAC, if any.
    pub fn hash(self) -> Option<HashAlgorithm> {
        match self {
            Self::Null => None,
            Self::HmacMd5 => Some(HashAlgorithm::MD5),
            Self::HmacSha1 => Some(HashAlgorithm::SHA1),
            Self::HmacSha256 => Some(HashAlgorithm::SHA256),
            Self::HmacSha384 => Some(HashAlgorithm::SHA384),
            Self::HmacSha512 => Some(HashAlgorithm::SHA512),
        }
    }

    /// Length of the MAC key, in bytes.
    pub fn key_len(self) -> usize {
        self.hash()
            .and_then(HashAlgorithm::output_len)
            .unwrap_or(0)
    }
}

/// The pseudo-random function used to derive secrets.
#[non_exhaustive]
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrfAlgorithm {
    /// The SSL 3.0 MD5/SHA-1 construction.
    SslPrfLegacy,
    /// The TLS 1.0 and 1.1 `P_MD5 XOR P_SHA1` construction.
    TlsPrfLegacy,
    TlsPrfSha256,
    TlsPrfSha384,
    Tls13HkdfSha256,
    Tls13HkdfSha384,
    /// The RFC 8998 HKDF over SM3.
    Tls13HkdfSm3,
}

impl PrfAlgorithm {
    /// The hash this PRF is built on.
    ///
    /// The legacy PRFs combine MD5 and SHA-1 and have no single hash.  SM3
    /// has no `HashAlgorithm` code point.
    pub fn hash(self) -> Option<HashAlgorithm> {
        match self {
            Self::SslPrfLegacy | Self::TlsPrfLegacy | Self::Tls13HkdfSm3 => None,
            Self::TlsPrfSha256 | Self::Tls13HkdfSha256 => Some(HashAlgorithm::SHA256),
            Self::TlsPrfSha384 | Self::Tls13HkdfSha384 => Some(HashAlgorithm::SHA384),
        }
    }

    /// Whether this is a TLS 1.3 HKDF-based schedule.
    pub fn is_hkdf(self) -> bool {
        matches!(
            self,
            Self::Tls13HkdfSha256 | Self::Tls13HkdfSha384 | Self::Tls13HkdfSm3
        )
    }
}

/// The hash a suite's PRF is built on.
#[allow(non_camel_case_types, missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrfHash {
    SHA256,
    SHA384,
    /// Only used by the RFC 8998 TLS 1.3 suites.
    SM3,
}

/// Everything the registry knows about one cipher suite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CipherSuiteDescriptor {
    /// The suite identifier.
    pub suite: CipherSuite,
    /// Its key exchange.
    pub key_exchange: KeyExchangeAlgorithm,
    /// Its bulk encryption.
    pub encryption: EncryptionAlgorithm,
    /// Its record MAC.
    pub mac: MacAlgorithm,
    /// The earliest protocol version it may be used with.
    pub minimum_version: ProtocolVersion,
    /// The hash of its PRF on TLS 1.2 and TLS 1.3.
    pub prf_hash: PrfHash,
}

impl CipherSuiteDescriptor {
    /// Look up `suite`.  Returns `None` for suites this registry does not recognise.
    pub fn lookup(suite: CipherSuite) -> Option<&'static Self> {
        SUITES.iter().find(|desc| desc.suite == suite)
    }

    /// Every recognised suite, in ascending order of identifier.
    pub fn all() -> &'static [Self] {
        SUITES
    }

    /// Whether this is a stream, block or AEAD suite.
    pub fn cipher_type(&self) -> CipherType {
        self.encryption.cipher_type()
    }

    /// Whether this suite is only for TLS 1.3.
    pub fn is_tls13(&self) -> bool {
        self.minimum_version == ProtocolVersion::TLSv1_3
    }

    /// The PRF this suite uses under `version`.
    ///
    /// Fails with `illegal_parameter` if the suite cannot be used under
    /// `version`.
    pub fn prf_algorithm(&self, version: ProtocolVersion) -> Result<PrfAlgorithm, Error> {
        prf_algorithm_for(self.minimum_version, self.prf_hash, version)
    }
}

fn prf_algorithm_for(
    minimum_version: ProtocolVersion,
    prf_hash: PrfHash,
    version: ProtocolVersion,
) -> Result<PrfAlgorithm, Error> {
    let unusable = Err(PeerMisbehaved::SelectedUnsupportedVersionForCipherSuite.into());
    let sha384 = prf_hash == PrfHash::SHA384;

    if minimum_version == ProtocolVersion::TLSv1_3 {
        return match (version.is_tls13_or_later(), prf_hash) {
            (false, _) => unusable,
            (true, PrfHash::SHA256) => Ok(PrfAlgorithm::Tls13HkdfSha256),
            (true, PrfHash::SHA384) => Ok(PrfAlgorithm::Tls13HkdfSha384),
            (true, PrfHash::SM3) => Ok(PrfAlgorithm::Tls13HkdfSm3),
        };
    }

    if version.is_tls13_or_later() {
        return unusable;
    }

    if version.is_tls12_exactly() {
        return Ok(match sha384 {
            true => PrfAlgorithm::TlsPrfSha384,
            false => PrfAlgorithm::TlsPrfSha256,
        });
    }

    if minimum_version == ProtocolVersion::TLSv1_2 {
        return unusable;
    }

    Ok(match version.is_ssl() {
        true => PrfAlgorithm::SslPrfLegacy,
        false => PrfAlgorithm::TlsPrfLegacy,
    })
}

/// The key exchange `suite` names, or `None` if it is not recognised.
pub fn key_exchange_algorithm(suite: CipherSuite) -> Option<KeyExchangeAlgorithm> {
    CipherSuiteDescriptor::lookup(suite).map(|desc| desc.key_exchange)
}

/// The bulk encryption `suite` names, or `None` if it is not recognised.
pub fn encryption_algorithm(suite: CipherSuite) -> Option<EncryptionAlgorithm> {
    CipherSuiteDescriptor::lookup(suite).map(|desc| desc.encryption)
}

/// The record MAC `suite` names, or `None` if it is not recognised.
pub fn mac_algorithm(suite: CipherSuite) -> Option<MacAlgorithm> {
    CipherSuiteDescriptor::lookup(suite).map(|desc| desc.mac)
}

/// The earliest version `suite` may be used with, or `None` if it is not recognised.
pub fn minimum_version(suite: CipherSuite) -> Option<ProtocolVersion> {
    CipherSuiteDescriptor::lookup(suite).map(|desc| desc.minimum_version)
}

/// Whether `suite` uses a stream, block or AEAD cipher, or `None` if it is not recognised.
pub fn cipher_type(suite: CipherSuite) -> Option<CipherType> {
    CipherSuiteDescriptor::lookup(suite).map(CipherSuiteDescriptor::cipher_type)
}

/// Whether `suite` is a recognised AEAD suite.
pub fn is_aead_cipher_suite(suite: CipherSuite) -> bool {
    cipher_type(suite) == Some(CipherType::Aead)
}

/// Whether `suite` is a recognised block cipher suite.
pub fn is_block_cipher_suite(suite: CipherSuite) -> bool {
    cipher_type(suite) == Some(CipherType::Block)
}

/// Whether `suite` is a recognised stream (or null) cipher suite.
pub fn is_stream_cipher_suite(suite: CipherSuite) -> bool {
    cipher_type(suite) == Some(CipherType::Stream)
}

/// The PRF to use for `suite` under `version`.
///
/// Unrecognised suites are treated as pre-TLS 1.2 suites with a SHA-256
/// PRF.  Fails with `illegal_parameter` where `suite` cannot be used
/// under `version`.
pub fn prf_algorithm(version: ProtocolVersion, suite: CipherSuite) -> Result<PrfAlgorithm, Error> {
    match CipherSuiteDescriptor::lookup(suite) {
        Some(desc) => desc.prf_algorithm(version),
        None => prf_algorithm_for(ProtocolVersion::SSLv3, PrfHash::SHA256, version),
    }
}

/// The distinct key exchanges named by the recognised suites in `suites`,
/// in first-seen order.
pub fn key_exchange_algorithms(suites: &[CipherSuite]) -> Vec<KeyExchangeAlgorithm> {
    let mut ret = Vec::new();
    for kx in suites
        .iter()
        .filter_map(|suite| key_exchange_algorithm(*suite))
    {
        if !ret.contains(&kx) {
            ret.push(kx);
        }
    }
    ret
}

/// The named group roles needed by any of `suites`, in sorted order.
pub fn named_group_roles(suites: &[CipherSuite]) -> Vec<NamedGroupRole> {
    let mut ret = Vec::new();
    for kx in key_exchange_algorithms(suites) {
        for role in kx.named_group_roles() {
            if !ret.contains(role) {
                ret.push(*role);
            }
        }
    }
    ret.sort();
    ret
}

macro_rules! suites {
    ($($suite:ident: $kx:ident, $enc:ident, $mac:ident, $min:ident, $prf:ident;)*) => {
        static SUITES: &[CipherSuiteDescriptor] = &[
            $(
                CipherSuiteDescriptor {
                    suite: CipherSuite::$suite,
                    key_exchange: KeyExchangeAlgorithm::$kx,
                    encryption: EncryptionAlgorithm::$enc,
                    mac: MacAlgorithm::$mac,
                    minimum_version: ProtocolVersion::$min,
                    prf_hash: PrfHash::$prf,
                },
            )*
        ];
    };
}

// name: key exchange, encryption, mac, minimum version, prf hash
suites! {
    TLS_RSA_WITH_NULL_SHA: Rsa, Null, HmacSha1, SSLv3, SHA256;
    TLS_RSA_WITH_3DES_EDE_CBC_SHA: Rsa, TripleDesEdeCbc, HmacSha1, SSLv3, SHA256;
    TLS_DH_DSS_WITH_3DES_EDE_CBC_SHA: DhDss, TripleDesEdeCbc, HmacSha1, SSLv3, SHA256;
    TLS_DH_RSA_WITH_3DES_EDE_CBC_SHA: DhRsa, TripleDesEdeCbc, HmacSha1, SSLv3, SHA256;
    TLS_DHE_DSS_WITH_3DES_EDE_CBC_SHA: DheDss, TripleDesEdeCbc, HmacSha1, SSLv3, SHA256;
    TLS_DHE_RSA_WITH_3DES_EDE_CBC_SHA: DheRsa, TripleDesEdeCbc, HmacSha1, SSLv3, SHA256;
    TLS_DH_anon_WITH_3DES_EDE_CBC_SHA: DhAnon, TripleDesEdeCbc, HmacSha1, SSLv3, SHA256;
    TLS_PSK_WITH_NULL_SHA: Psk, Null, HmacSha1, SSLv3, SHA256;
    TLS_DHE_PSK_WITH_NULL_SHA: DhePsk, Null, HmacSha1, SSLv3, SHA256;
    TLS_RSA_PSK_WITH_NULL_SHA: RsaPsk, Null, HmacSha1, SSLv3, SHA256;
    TLS_RSA_WITH_AES_128_CBC_SHA: Rsa, Aes128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DH_DSS_WITH_AES_128_CBC_SHA: DhDss, Aes128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DH_RSA_WITH_AES_128_CBC_SHA: DhRsa, Aes128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DHE_DSS_WITH_AES_128_CBC_SHA: DheDss, Aes128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DHE_RSA_WITH_AES_128_CBC_SHA: DheRsa, Aes128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DH_anon_WITH_AES_128_CBC_SHA: DhAnon, Aes128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_RSA_WITH_AES_256_CBC_SHA: Rsa, Aes256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DH_DSS_WITH_AES_256_CBC_SHA: DhDss, Aes256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DH_RSA_WITH_AES_256_CBC_SHA: DhRsa, Aes256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DHE_DSS_WITH_AES_256_CBC_SHA: DheDss, Aes256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DHE_RSA_WITH_AES_256_CBC_SHA: DheRsa, Aes256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DH_anon_WITH_AES_256_CBC_SHA: DhAnon, Aes256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_RSA_WITH_NULL_SHA256: Rsa, Null, HmacSha256, TLSv1_2, SHA256;
    TLS_RSA_WITH_AES_128_CBC_SHA256: Rsa, Aes128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_RSA_WITH_AES_256_CBC_SHA256: Rsa, Aes256Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DH_DSS_WITH_AES_128_CBC_SHA256: DhDss, Aes128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DH_RSA_WITH_AES_128_CBC_SHA256: DhRsa, Aes128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DHE_DSS_WITH_AES_128_CBC_SHA256: DheDss, Aes128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_RSA_WITH_CAMELLIA_128_CBC_SHA: Rsa, Camellia128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DH_DSS_WITH_CAMELLIA_128_CBC_SHA: DhDss, Camellia128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DH_RSA_WITH_CAMELLIA_128_CBC_SHA: DhRsa, Camellia128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DHE_DSS_WITH_CAMELLIA_128_CBC_SHA: DheDss, Camellia128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DHE_RSA_WITH_CAMELLIA_128_CBC_SHA: DheRsa, Camellia128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DH_anon_WITH_CAMELLIA_128_CBC_SHA: DhAnon, Camellia128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DHE_RSA_WITH_AES_128_CBC_SHA256: DheRsa, Aes128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DH_DSS_WITH_AES_256_CBC_SHA256: DhDss, Aes256Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DH_RSA_WITH_AES_256_CBC_SHA256: DhRsa, Aes256Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DHE_DSS_WITH_AES_256_CBC_SHA256: DheDss, Aes256Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DHE_RSA_WITH_AES_256_CBC_SHA256: DheRsa, Aes256Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DH_anon_WITH_AES_128_CBC_SHA256: DhAnon, Aes128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DH_anon_WITH_AES_256_CBC_SHA256: DhAnon, Aes256Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_RSA_WITH_CAMELLIA_256_CBC_SHA: Rsa, Camellia256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DH_DSS_WITH_CAMELLIA_256_CBC_SHA: DhDss, Camellia256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DH_RSA_WITH_CAMELLIA_256_CBC_SHA: DhRsa, Camellia256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DHE_DSS_WITH_CAMELLIA_256_CBC_SHA: DheDss, Camellia256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DHE_RSA_WITH_CAMELLIA_256_CBC_SHA: DheRsa, Camellia256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DH_anon_WITH_CAMELLIA_256_CBC_SHA: DhAnon, Camellia256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_PSK_WITH_3DES_EDE_CBC_SHA: Psk, TripleDesEdeCbc, HmacSha1, SSLv3, SHA256;
    TLS_PSK_WITH_AES_128_CBC_SHA: Psk, Aes128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_PSK_WITH_AES_256_CBC_SHA: Psk, Aes256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DHE_PSK_WITH_3DES_EDE_CBC_SHA: DhePsk, TripleDesEdeCbc, HmacSha1, SSLv3, SHA256;
    TLS_DHE_PSK_WITH_AES_128_CBC_SHA: DhePsk, Aes128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_DHE_PSK_WITH_AES_256_CBC_SHA: DhePsk, Aes256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_RSA_PSK_WITH_3DES_EDE_CBC_SHA: RsaPsk, TripleDesEdeCbc, HmacSha1, SSLv3, SHA256;
    TLS_RSA_PSK_WITH_AES_128_CBC_SHA: RsaPsk, Aes128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_RSA_PSK_WITH_AES_256_CBC_SHA: RsaPsk, Aes256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_RSA_WITH_SEED_CBC_SHA: Rsa, SeedCbc, HmacSha1, SSLv3, SHA256;
    TLS_DH_DSS_WITH_SEED_CBC_SHA: DhDss, SeedCbc, HmacSha1, SSLv3, SHA256;
    TLS_DH_RSA_WITH_SEED_CBC_SHA: DhRsa, SeedCbc, HmacSha1, SSLv3, SHA256;
    TLS_DHE_DSS_WITH_SEED_CBC_SHA: DheDss, SeedCbc, HmacSha1, SSLv3, SHA256;
    TLS_DHE_RSA_WITH_SEED_CBC_SHA: DheRsa, SeedCbc, HmacSha1, SSLv3, SHA256;
    TLS_DH_anon_WITH_SEED_CBC_SHA: DhAnon, SeedCbc, HmacSha1, SSLv3, SHA256;
    TLS_RSA_WITH_AES_128_GCM_SHA256: Rsa, Aes128Gcm, Null, TLSv1_2, SHA256;
    TLS_RSA_WITH_AES_256_GCM_SHA384: Rsa, Aes256Gcm, Null, TLSv1_2, SHA384;
    TLS_DHE_RSA_WITH_AES_128_GCM_SHA256: DheRsa, Aes128Gcm, Null, TLSv1_2, SHA256;
    TLS_DHE_RSA_WITH_AES_256_GCM_SHA384: DheRsa, Aes256Gcm, Null, TLSv1_2, SHA384;
    TLS_DH_RSA_WITH_AES_128_GCM_SHA256: DhRsa, Aes128Gcm, Null, TLSv1_2, SHA256;
    TLS_DH_RSA_WITH_AES_256_GCM_SHA384: DhRsa, Aes256Gcm, Null, TLSv1_2, SHA384;
    TLS_DHE_DSS_WITH_AES_128_GCM_SHA256: DheDss, Aes128Gcm, Null, TLSv1_2, SHA256;
    TLS_DHE_DSS_WITH_AES_256_GCM_SHA384: DheDss, Aes256Gcm, Null, TLSv1_2, SHA384;
    TLS_DH_DSS_WITH_AES_128_GCM_SHA256: DhDss, Aes128Gcm, Null, TLSv1_2, SHA256;
    TLS_DH_DSS_WITH_AES_256_GCM_SHA384: DhDss, Aes256Gcm, Null, TLSv1_2, SHA384;
    TLS_DH_anon_WITH_AES_128_GCM_SHA256: DhAnon, Aes128Gcm, Null, TLSv1_2, SHA256;
    TLS_DH_anon_WITH_AES_256_GCM_SHA384: DhAnon, Aes256Gcm, Null, TLSv1_2, SHA384;
    TLS_PSK_WITH_AES_128_GCM_SHA256: Psk, Aes128Gcm, Null, TLSv1_2, SHA256;
    TLS_PSK_WITH_AES_256_GCM_SHA384: Psk, Aes256Gcm, Null, TLSv1_2, SHA384;
    TLS_DHE_PSK_WITH_AES_128_GCM_SHA256: DhePsk, Aes128Gcm, Null, TLSv1_2, SHA256;
    TLS_DHE_PSK_WITH_AES_256_GCM_SHA384: DhePsk, Aes256Gcm, Null, TLSv1_2, SHA384;
    TLS_RSA_PSK_WITH_AES_128_GCM_SHA256: RsaPsk, Aes128Gcm, Null, TLSv1_2, SHA256;
    TLS_RSA_PSK_WITH_AES_256_GCM_SHA384: RsaPsk, Aes256Gcm, Null, TLSv1_2, SHA384;
    TLS_PSK_WITH_AES_128_CBC_SHA256: Psk, Aes128Cbc, HmacSha256, SSLv3, SHA256;
    TLS_PSK_WITH_AES_256_CBC_SHA384: Psk, Aes256Cbc, HmacSha384, SSLv3, SHA384;
    TLS_PSK_WITH_NULL_SHA256: Psk, Null, HmacSha256, SSLv3, SHA256;
    TLS_PSK_WITH_NULL_SHA384: Psk, Null, HmacSha384, SSLv3, SHA384;
    TLS_DHE_PSK_WITH_AES_128_CBC_SHA256: DhePsk, Aes128Cbc, HmacSha256, SSLv3, SHA256;
    TLS_DHE_PSK_WITH_AES_256_CBC_SHA384: DhePsk, Aes256Cbc, HmacSha384, SSLv3, SHA384;
    TLS_DHE_PSK_WITH_NULL_SHA256: DhePsk, Null, HmacSha256, SSLv3, SHA256;
    TLS_DHE_PSK_WITH_NULL_SHA384: DhePsk, Null, HmacSha384, SSLv3, SHA384;
    TLS_RSA_PSK_WITH_AES_128_CBC_SHA256: RsaPsk, Aes128Cbc, HmacSha256, SSLv3, SHA256;
    TLS_RSA_PSK_WITH_AES_256_CBC_SHA384: RsaPsk, Aes256Cbc, HmacSha384, SSLv3, SHA384;
    TLS_RSA_PSK_WITH_NULL_SHA256: RsaPsk, Null, HmacSha256, SSLv3, SHA256;
    TLS_RSA_PSK_WITH_NULL_SHA384: RsaPsk, Null, HmacSha384, SSLv3, SHA384;
    TLS_RSA_WITH_CAMELLIA_128_CBC_SHA256: Rsa, Camellia128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DH_DSS_WITH_CAMELLIA_128_CBC_SHA256: DhDss, Camellia128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DH_RSA_WITH_CAMELLIA_128_CBC_SHA256: DhRsa, Camellia128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DHE_DSS_WITH_CAMELLIA_128_CBC_SHA256: DheDss, Camellia128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DHE_RSA_WITH_CAMELLIA_128_CBC_SHA256: DheRsa, Camellia128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DH_anon_WITH_CAMELLIA_128_CBC_SHA256: DhAnon, Camellia128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_RSA_WITH_CAMELLIA_256_CBC_SHA256: Rsa, Camellia256Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DH_DSS_WITH_CAMELLIA_256_CBC_SHA256: DhDss, Camellia256Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DH_RSA_WITH_CAMELLIA_256_CBC_SHA256: DhRsa, Camellia256Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DHE_DSS_WITH_CAMELLIA_256_CBC_SHA256: DheDss, Camellia256Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DHE_RSA_WITH_CAMELLIA_256_CBC_SHA256: DheRsa, Camellia256Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DH_anon_WITH_CAMELLIA_256_CBC_SHA256: DhAnon, Camellia256Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_SM4_GCM_SM3: Null, Sm4Gcm, Null, TLSv1_3, SM3;
    TLS_SM4_CCM_SM3: Null, Sm4Ccm, Null, TLSv1_3, SM3;
    TLS13_AES_128_GCM_SHA256: Null, Aes128Gcm, Null, TLSv1_3, SHA256;
    TLS13_AES_256_GCM_SHA384: Null, Aes256Gcm, Null, TLSv1_3, SHA384;
    TLS13_CHACHA20_POLY1305_SHA256: Null, Chacha20Poly1305, Null, TLSv1_3, SHA256;
    TLS13_AES_128_CCM_SHA256: Null, Aes128Ccm, Null, TLSv1_3, SHA256;
    TLS13_AES_128_CCM_8_SHA256: Null, Aes128Ccm8, Null, TLSv1_3, SHA256;
    TLS_ECDH_ECDSA_WITH_NULL_SHA: EcdhEcdsa, Null, HmacSha1, SSLv3, SHA256;
    TLS_ECDH_ECDSA_WITH_3DES_EDE_CBC_SHA: EcdhEcdsa, TripleDesEdeCbc, HmacSha1, SSLv3, SHA256;
    TLS_ECDH_ECDSA_WITH_AES_128_CBC_SHA: EcdhEcdsa, Aes128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_ECDH_ECDSA_WITH_AES_256_CBC_SHA: EcdhEcdsa, Aes256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_ECDHE_ECDSA_WITH_NULL_SHA: EcdheEcdsa, Null, HmacSha1, SSLv3, SHA256;
    TLS_ECDHE_ECDSA_WITH_3DES_EDE_CBC_SHA: EcdheEcdsa, TripleDesEdeCbc, HmacSha1, SSLv3, SHA256;
    TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA: EcdheEcdsa, Aes128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA: EcdheEcdsa, Aes256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_ECDH_RSA_WITH_NULL_SHA: EcdhRsa, Null, HmacSha1, SSLv3, SHA256;
    TLS_ECDH_RSA_WITH_3DES_EDE_CBC_SHA: EcdhRsa, TripleDesEdeCbc, HmacSha1, SSLv3, SHA256;
    TLS_ECDH_RSA_WITH_AES_128_CBC_SHA: EcdhRsa, Aes128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_ECDH_RSA_WITH_AES_256_CBC_SHA: EcdhRsa, Aes256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_ECDHE_RSA_WITH_NULL_SHA: EcdheRsa, Null, HmacSha1, SSLv3, SHA256;
    TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA: EcdheRsa, TripleDesEdeCbc, HmacSha1, SSLv3, SHA256;
    TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA: EcdheRsa, Aes128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA: EcdheRsa, Aes256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_ECDH_anon_WITH_NULL_SHA: EcdhAnon, Null, HmacSha1, SSLv3, SHA256;
    TLS_ECDH_anon_WITH_3DES_EDE_CBC_SHA: EcdhAnon, TripleDesEdeCbc, HmacSha1, SSLv3, SHA256;
    TLS_ECDH_anon_WITH_AES_128_CBC_SHA: EcdhAnon, Aes128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_ECDH_anon_WITH_AES_256_CBC_SHA: EcdhAnon, Aes256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_SRP_SHA_WITH_3DES_EDE_CBC_SHA: Srp, TripleDesEdeCbc, HmacSha1, SSLv3, SHA256;
    TLS_SRP_SHA_RSA_WITH_3DES_EDE_CBC_SHA: SrpRsa, TripleDesEdeCbc, HmacSha1, SSLv3, SHA256;
    TLS_SRP_SHA_DSS_WITH_3DES_EDE_CBC_SHA: SrpDss, TripleDesEdeCbc, HmacSha1, SSLv3, SHA256;
    TLS_SRP_SHA_WITH_AES_128_CBC_SHA: Srp, Aes128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_SRP_SHA_RSA_WITH_AES_128_CBC_SHA: SrpRsa, Aes128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_SRP_SHA_DSS_WITH_AES_128_CBC_SHA: SrpDss, Aes128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_SRP_SHA_WITH_AES_256_CBC_SHA: Srp, Aes256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_SRP_SHA_RSA_WITH_AES_256_CBC_SHA: SrpRsa, Aes256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_SRP_SHA_DSS_WITH_AES_256_CBC_SHA: SrpDss, Aes256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256: EcdheEcdsa, Aes128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA384: EcdheEcdsa, Aes256Cbc, HmacSha384, TLSv1_2, SHA384;
    TLS_ECDH_ECDSA_WITH_AES_128_CBC_SHA256: EcdhEcdsa, Aes128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_ECDH_ECDSA_WITH_AES_256_CBC_SHA384: EcdhEcdsa, Aes256Cbc, HmacSha384, TLSv1_2, SHA384;
    TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256: EcdheRsa, Aes128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA384: EcdheRsa, Aes256Cbc, HmacSha384, TLSv1_2, SHA384;
    TLS_ECDH_RSA_WITH_AES_128_CBC_SHA256: EcdhRsa, Aes128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_ECDH_RSA_WITH_AES_256_CBC_SHA384: EcdhRsa, Aes256Cbc, HmacSha384, TLSv1_2, SHA384;
    TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256: EcdheEcdsa, Aes128Gcm, Null, TLSv1_2, SHA256;
    TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384: EcdheEcdsa, Aes256Gcm, Null, TLSv1_2, SHA384;
    TLS_ECDH_ECDSA_WITH_AES_128_GCM_SHA256: EcdhEcdsa, Aes128Gcm, Null, TLSv1_2, SHA256;
    TLS_ECDH_ECDSA_WITH_AES_256_GCM_SHA384: EcdhEcdsa, Aes256Gcm, Null, TLSv1_2, SHA384;
    TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256: EcdheRsa, Aes128Gcm, Null, TLSv1_2, SHA256;
    TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384: EcdheRsa, Aes256Gcm, Null, TLSv1_2, SHA384;
    TLS_ECDH_RSA_WITH_AES_128_GCM_SHA256: EcdhRsa, Aes128Gcm, Null, TLSv1_2, SHA256;
    TLS_ECDH_RSA_WITH_AES_256_GCM_SHA384: EcdhRsa, Aes256Gcm, Null, TLSv1_2, SHA384;
    TLS_ECDHE_PSK_WITH_3DES_EDE_CBC_SHA: EcdhePsk, TripleDesEdeCbc, HmacSha1, SSLv3, SHA256;
    TLS_ECDHE_PSK_WITH_AES_128_CBC_SHA: EcdhePsk, Aes128Cbc, HmacSha1, SSLv3, SHA256;
    TLS_ECDHE_PSK_WITH_AES_256_CBC_SHA: EcdhePsk, Aes256Cbc, HmacSha1, SSLv3, SHA256;
    TLS_ECDHE_PSK_WITH_AES_128_CBC_SHA256: EcdhePsk, Aes128Cbc, HmacSha256, SSLv3, SHA256;
    TLS_ECDHE_PSK_WITH_AES_256_CBC_SHA384: EcdhePsk, Aes256Cbc, HmacSha384, SSLv3, SHA384;
    TLS_ECDHE_PSK_WITH_NULL_SHA: EcdhePsk, Null, HmacSha1, SSLv3, SHA256;
    TLS_ECDHE_PSK_WITH_NULL_SHA256: EcdhePsk, Null, HmacSha256, SSLv3, SHA256;
    TLS_ECDHE_PSK_WITH_NULL_SHA384: EcdhePsk, Null, HmacSha384, SSLv3, SHA384;
    TLS_RSA_WITH_ARIA_128_CBC_SHA256: Rsa, Aria128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_RSA_WITH_ARIA_256_CBC_SHA384: Rsa, Aria256Cbc, HmacSha384, TLSv1_2, SHA384;
    TLS_DH_DSS_WITH_ARIA_128_CBC_SHA256: DhDss, Aria128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DH_DSS_WITH_ARIA_256_CBC_SHA384: DhDss, Aria256Cbc, HmacSha384, TLSv1_2, SHA384;
    TLS_DH_RSA_WITH_ARIA_128_CBC_SHA256: DhRsa, Aria128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DH_RSA_WITH_ARIA_256_CBC_SHA384: DhRsa, Aria256Cbc, HmacSha384, TLSv1_2, SHA384;
    TLS_DHE_DSS_WITH_ARIA_128_CBC_SHA256: DheDss, Aria128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DHE_DSS_WITH_ARIA_256_CBC_SHA384: DheDss, Aria256Cbc, HmacSha384, TLSv1_2, SHA384;
    TLS_DHE_RSA_WITH_ARIA_128_CBC_SHA256: DheRsa, Aria128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DHE_RSA_WITH_ARIA_256_CBC_SHA384: DheRsa, Aria256Cbc, HmacSha384, TLSv1_2, SHA384;
    TLS_DH_anon_WITH_ARIA_128_CBC_SHA256: DhAnon, Aria128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DH_anon_WITH_ARIA_256_CBC_SHA384: DhAnon, Aria256Cbc, HmacSha384, TLSv1_2, SHA384;
    TLS_ECDHE_ECDSA_WITH_ARIA_128_CBC_SHA256: EcdheEcdsa, Aria128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_ECDHE_ECDSA_WITH_ARIA_256_CBC_SHA384: EcdheEcdsa, Aria256Cbc, HmacSha384, TLSv1_2, SHA384;
    TLS_ECDH_ECDSA_WITH_ARIA_128_CBC_SHA256: EcdhEcdsa, Aria128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_ECDH_ECDSA_WITH_ARIA_256_CBC_SHA384: EcdhEcdsa, Aria256Cbc, HmacSha384, TLSv1_2, SHA384;
    TLS_ECDHE_RSA_WITH_ARIA_128_CBC_SHA256: EcdheRsa, Aria128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_ECDHE_RSA_WITH_ARIA_256_CBC_SHA384: EcdheRsa, Aria256Cbc, HmacSha384, TLSv1_2, SHA384;
    TLS_ECDH_RSA_WITH_ARIA_128_CBC_SHA256: EcdhRsa, Aria128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_ECDH_RSA_WITH_ARIA_256_CBC_SHA384: EcdhRsa, Aria256Cbc, HmacSha384, TLSv1_2, SHA384;
    TLS_RSA_WITH_ARIA_128_GCM_SHA256: Rsa, Aria128Gcm, Null, TLSv1_2, SHA256;
    TLS_RSA_WITH_ARIA_256_GCM_SHA384: Rsa, Aria256Gcm, Null, TLSv1_2, SHA384;
    TLS_DHE_RSA_WITH_ARIA_128_GCM_SHA256: DheRsa, Aria128Gcm, Null, TLSv1_2, SHA256;
    TLS_DHE_RSA_WITH_ARIA_256_GCM_SHA384: DheRsa, Aria256Gcm, Null, TLSv1_2, SHA384;
    TLS_DH_RSA_WITH_ARIA_128_GCM_SHA256: DhRsa, Aria128Gcm, Null, TLSv1_2, SHA256;
    TLS_DH_RSA_WITH_ARIA_256_GCM_SHA384: DhRsa, Aria256Gcm, Null, TLSv1_2, SHA384;
    TLS_DHE_DSS_WITH_ARIA_128_GCM_SHA256: DheDss, Aria128Gcm, Null, TLSv1_2, SHA256;
    TLS_DHE_DSS_WITH_ARIA_256_GCM_SHA384: DheDss, Aria256Gcm, Null, TLSv1_2, SHA384;
    TLS_DH_DSS_WITH_ARIA_128_GCM_SHA256: DhDss, Aria128Gcm, Null, TLSv1_2, SHA256;
    TLS_DH_DSS_WITH_ARIA_256_GCM_SHA384: DhDss, Aria256Gcm, Null, TLSv1_2, SHA384;
    TLS_DH_anon_WITH_ARIA_128_GCM_SHA256: DhAnon, Aria128Gcm, Null, TLSv1_2, SHA256;
    TLS_DH_anon_WITH_ARIA_256_GCM_SHA384: DhAnon, Aria256Gcm, Null, TLSv1_2, SHA384;
    TLS_ECDHE_ECDSA_WITH_ARIA_128_GCM_SHA256: EcdheEcdsa, Aria128Gcm, Null, TLSv1_2, SHA256;
    TLS_ECDHE_ECDSA_WITH_ARIA_256_GCM_SHA384: EcdheEcdsa, Aria256Gcm, Null, TLSv1_2, SHA384;
    TLS_ECDH_ECDSA_WITH_ARIA_128_GCM_SHA256: EcdhEcdsa, Aria128Gcm, Null, TLSv1_2, SHA256;
    TLS_ECDH_ECDSA_WITH_ARIA_256_GCM_SHA384: EcdhEcdsa, Aria256Gcm, Null, TLSv1_2, SHA384;
    TLS_ECDHE_RSA_WITH_ARIA_128_GCM_SHA256: EcdheRsa, Aria128Gcm, Null, TLSv1_2, SHA256;
    TLS_ECDHE_RSA_WITH_ARIA_256_GCM_SHA384: EcdheRsa, Aria256Gcm, Null, TLSv1_2, SHA384;
    TLS_ECDH_RSA_WITH_ARIA_128_GCM_SHA256: EcdhRsa, Aria128Gcm, Null, TLSv1_2, SHA256;
    TLS_ECDH_RSA_WITH_ARIA_256_GCM_SHA384: EcdhRsa, Aria256Gcm, Null, TLSv1_2, SHA384;
    TLS_PSK_WITH_ARIA_128_CBC_SHA256: Psk, Aria128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_PSK_WITH_ARIA_256_CBC_SHA384: Psk, Aria256Cbc, HmacSha384, TLSv1_2, SHA384;
    TLS_DHE_PSK_WITH_ARIA_128_CBC_SHA256: DhePsk, Aria128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_DHE_PSK_WITH_ARIA_256_CBC_SHA384: DhePsk, Aria256Cbc, HmacSha384, TLSv1_2, SHA384;
    TLS_RSA_PSK_WITH_ARIA_128_CBC_SHA256: RsaPsk, Aria128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_RSA_PSK_WITH_ARIA_256_CBC_SHA384: RsaPsk, Aria256Cbc, HmacSha384, TLSv1_2, SHA384;
    TLS_PSK_WITH_ARIA_128_GCM_SHA256: Psk, Aria128Gcm, Null, TLSv1_2, SHA256;
    TLS_PSK_WITH_ARIA_256_GCM_SHA384: Psk, Aria256Gcm, Null, TLSv1_2, SHA384;
    TLS_DHE_PSK_WITH_ARIA_128_GCM_SHA256: DhePsk, Aria128Gcm, Null, TLSv1_2, SHA256;
    TLS_DHE_PSK_WITH_ARIA_256_GCM_SHA384: DhePsk, Aria256Gcm, Null, TLSv1_2, SHA384;
    TLS_RSA_PSK_WITH_ARIA_128_GCM_SHA256: RsaPsk, Aria128Gcm, Null, TLSv1_2, SHA256;
    TLS_RSA_PSK_WITH_ARIA_256_GCM_SHA384: RsaPsk, Aria256Gcm, Null, TLSv1_2, SHA384;
    TLS_ECDHE_PSK_WITH_ARIA_128_CBC_SHA256: EcdhePsk, Aria128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_ECDHE_PSK_WITH_ARIA_256_CBC_SHA384: EcdhePsk, Aria256Cbc, HmacSha384, TLSv1_2, SHA384;
    TLS_ECDHE_ECDSA_WITH_CAMELLIA_128_CBC_SHA256: EcdheEcdsa, Camellia128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_ECDHE_ECDSA_WITH_CAMELLIA_256_CBC_SHA384: EcdheEcdsa, Camellia256Cbc, HmacSha384, TLSv1_2, SHA384;
    TLS_ECDH_ECDSA_WITH_CAMELLIA_128_CBC_SHA256: EcdhEcdsa, Camellia128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_ECDH_ECDSA_WITH_CAMELLIA_256_CBC_SHA384: EcdhEcdsa, Camellia256Cbc, HmacSha384, TLSv1_2, SHA384;
    TLS_ECDHE_RSA_WITH_CAMELLIA_128_CBC_SHA256: EcdheRsa, Camellia128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_ECDHE_RSA_WITH_CAMELLIA_256_CBC_SHA384: EcdheRsa, Camellia256Cbc, HmacSha384, TLSv1_2, SHA384;
    TLS_ECDH_RSA_WITH_CAMELLIA_128_CBC_SHA256: EcdhRsa, Camellia128Cbc, HmacSha256, TLSv1_2, SHA256;
    TLS_ECDH_RSA_WITH_CAMELLIA_256_CBC_SHA384: EcdhRsa, Camellia256Cbc, HmacSha384, TLSv1_2, SHA384;
    TLS_RSA_WITH_CAMELLIA_128_GCM_SHA256: Rsa, Camellia128Gcm, Null, TLSv1_2, SHA256;
    TLS_RSA_WITH_CAMELLIA_256_GCM_SHA384: Rsa, Camellia256Gcm, Null, TLSv1_2, SHA384;
    TLS_DHE_RSA_WITH_CAMELLIA_128_GCM_SHA256: DheRsa, Camellia128Gcm, Null, TLSv1_2, SHA256;
    TLS_DHE_RSA_WITH_CAMELLIA_256_GCM_SHA384: DheRsa, Camellia256Gcm, Null, TLSv1_2, SHA384;
    TLS_DH_RSA_WITH_CAMELLIA_128_GCM_SHA256: DhRsa, Camellia128Gcm, Null, TLSv1_2, SHA256;
    TLS_DH_RSA_WITH_CAMELLIA_256_GCM_SHA384: DhRsa, Camellia256Gcm, Null, TLSv1_2, SHA384;
    TLS_DHE_DSS_WITH_CAMELLIA_128_GCM_SHA256: DheDss, Camellia128Gcm, Null, TLSv1_2, SHA256;
    TLS_DHE_DSS_WITH_CAMELLIA_256_GCM_SHA384: DheDss, Camellia256Gcm, Null, TLSv1_2, SHA384;
    TLS_DH_DSS_WITH_CAMELLIA_128_GCM_SHA256: DhDss, Camellia128Gcm, Null, TLSv1_2, SHA256;
    TLS_DH_DSS_WITH_CAMELLIA_256_GCM_SHA384: DhDss, Camellia256Gcm, Null, TLSv1_2, SHA384;
    TLS_DH_anon_WITH_CAMELLIA_128_GCM_SHA256: DhAnon, Camellia128Gcm, Null, TLSv1_2, SHA256;
    TLS_DH_anon_WITH_CAMELLIA_256_GCM_SHA384: DhAnon, Camellia256Gcm, Null, TLSv1_2, SHA384;
    TLS_ECDHE_ECDSA_WITH_CAMELLIA_128_GCM_SHA256: EcdheEcdsa, Camellia128Gcm, Null, TLSv1_2, SHA256;
    TLS_ECDHE_ECDSA_WITH_CAMELLIA_256_GCM_SHA384: EcdheEcdsa, Camellia256Gcm, Null, TLSv1_2, SHA384;
    TLS_ECDH_ECDSA_WITH_CAMELLIA_128_GCM_SHA256: EcdhEcdsa, Camellia128Gcm, Null, TLSv1_2, SHA256;
    TLS_ECDH_ECDSA_WITH_CAMELLIA_256_GCM_SHA384: EcdhEcdsa, Camellia256Gcm, Null, TLSv1_2, SHA384;
    TLS_ECDHE_RSA_WITH_CAMELLIA_128_GCM_SHA256: EcdheRsa, Camellia128Gcm, Null, TLSv1_2, SHA256;
    TLS_ECDHE_RSA_WITH_CAMELLIA_256_GCM_SHA384: EcdheRsa, Camellia256Gcm, Null, TLSv1_2, SHA384;
    TLS_ECDH_RSA_WITH_CAMELLIA_128_GCM_SHA256: EcdhRsa, Camellia128Gcm, Null, TLSv1_2, SHA256;
    TLS_ECDH_RSA_WITH_CAMELLIA_256_GCM_SHA384: EcdhRsa, Camellia256Gcm, Null, TLSv1_2, SHA384;
    TLS_PSK_WITH_CAMELLIA_128_GCM_SHA256: Psk, Camellia128Gcm, Null, TLSv1_2, SHA256;
    TLS_PSK_WITH_CAMELLIA_256_GCM_SHA384: Psk, Camellia256Gcm, Null, TLSv1_2, SHA384;
    TLS_DHE_PSK_WITH_CAMELLIA_128_GCM_SHA256: DhePsk, Camellia128Gcm, Null, TLSv1_2, SHA256;
    TLS_DHE_PSK_WITH_CAMELLIA_256_GCM_SHA384: DhePsk, Camellia256Gcm, Null, TLSv1_2, SHA384;
    TLS_RSA_PSK_WITH_CAMELLIA_128_GCM_SHA256: RsaPsk, Camellia128Gcm, Null, TLSv1_2, SHA256;
    TLS_RSA_PSK_WITH_CAMELLIA_256_GCM_SHA384: RsaPsk, Camellia256Gcm, Null, TLSv1_2, SHA384;
    TLS_PSK_WITH_CAMELLIA_128_CBC_SHA256: Psk, Camellia128Cbc, HmacSha256, SSLv3, SHA256;
    TLS_PSK_WITH_CAMELLIA_256_CBC_SHA384: Psk, Camellia256Cbc, HmacSha384, SSLv3, SHA384;
    TLS_DHE_PSK_WITH_CAMELLIA_128_CBC_SHA256: DhePsk, Camellia128Cbc, HmacSha256, SSLv3, SHA256;
    TLS_DHE_PSK_WITH_CAMELLIA_256_CBC_SHA384: DhePsk, Camellia256Cbc, HmacSha384, SSLv3, SHA384;
    TLS_RSA_PSK_WITH_CAMELLIA_128_CBC_SHA256: RsaPsk, Camellia128Cbc, HmacSha256, SSLv3, SHA256;
    TLS_RSA_PSK_WITH_CAMELLIA_256_CBC_SHA384: RsaPsk, Camellia256Cbc, HmacSha384, SSLv3, SHA384;
    TLS_ECDHE_PSK_WITH_CAMELLIA_128_CBC_SHA256: EcdhePsk, Camellia128Cbc, HmacSha256, SSLv3, SHA256;
    TLS_ECDHE_PSK_WITH_CAMELLIA_256_CBC_SHA384: EcdhePsk, Camellia256Cbc, HmacSha384, SSLv3, SHA384;
    TLS_RSA_WITH_AES_128_CCM: Rsa, Aes128Ccm, Null, TLSv1_2, SHA256;
    TLS_RSA_WITH_AES_256_CCM: Rsa, Aes256Ccm, Null, TLSv1_2, SHA256;
    TLS_DHE_RSA_WITH_AES_128_CCM: DheRsa, Aes128Ccm, Null, TLSv1_2, SHA256;
    TLS_DHE_RSA_WITH_AES_256_CCM: DheRsa, Aes256Ccm, Null, TLSv1_2, SHA256;
    TLS_RSA_WITH_AES_128_CCM_8: Rsa, Aes128Ccm8, Null, TLSv1_2, SHA256;
    TLS_RSA_WITH_AES_256_CCM_8: Rsa, Aes256Ccm8, Null, TLSv1_2, SHA256;
    TLS_DHE_RSA_WITH_AES_128_CCM_8: DheRsa, Aes128Ccm8, Null, TLSv1_2, SHA256;
    TLS_DHE_RSA_WITH_AES_256_CCM_8: DheRsa, Aes256Ccm8, Null, TLSv1_2, SHA256;
    TLS_PSK_WITH_AES_128_CCM: Psk, Aes128Ccm, Null, TLSv1_2, SHA256;
    TLS_PSK_WITH_AES_256_CCM: Psk, Aes256Ccm, Null, TLSv1_2, SHA256;
    TLS_DHE_PSK_WITH_AES_128_CCM: DhePsk, Aes128Ccm, Null, TLSv1_2, SHA256;
    TLS_DHE_PSK_WITH_AES_256_CCM: DhePsk, Aes256Ccm, Null, TLSv1_2, SHA256;
    TLS_PSK_WITH_AES_128_CCM_8: Psk, Aes128Ccm8, Null, TLSv1_2, SHA256;
    TLS_PSK_WITH_AES_256_CCM_8: Psk, Aes256Ccm8, Null, TLSv1_2, SHA256;
    TLS_PSK_DHE_WITH_AES_128_CCM_8: DhePsk, Aes128Ccm8, Null, TLSv1_2, SHA256;
    TLS_PSK_DHE_WITH_AES_256_CCM_8: DhePsk, Aes256Ccm8, Null, TLSv1_2, SHA256;
    TLS_ECDHE_ECDSA_WITH_AES_128_CCM: EcdheEcdsa, Aes128Ccm, Null, TLSv1_2, SHA256;
    TLS_ECDHE_ECDSA_WITH_AES_256_CCM: EcdheEcdsa, Aes256Ccm, Null, TLSv1_2, SHA256;
    TLS_ECDHE_ECDSA_WITH_AES_128_CCM_8: EcdheEcdsa, Aes128Ccm8, Null, TLSv1_2, SHA256;
    TLS_ECDHE_ECDSA_WITH_AES_256_CCM_8: EcdheEcdsa, Aes256Ccm8, Null, TLSv1_2, SHA256;
    TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256: EcdheRsa, Chacha20Poly1305, Null, TLSv1_2, SHA256;
    TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256: EcdheEcdsa, Chacha20Poly1305, Null, TLSv1_2, SHA256;
    TLS_DHE_RSA_WITH_CHACHA20_POLY1305_SHA256: DheRsa, Chacha20Poly1305, Null, TLSv1_2, SHA256;
    TLS_PSK_WITH_CHACHA20_POLY1305_SHA256: Psk, Chacha20Poly1305, Null, TLSv1_2, SHA256;
    TLS_ECDHE_PSK_WITH_CHACHA20_POLY1305_SHA256: EcdhePsk, Chacha20Poly1305, Null, TLSv1_2, SHA256;
    TLS_DHE_PSK_WITH_CHACHA20_POLY1305_SHA256: DhePsk, Chacha20Poly1305, Null, TLSv1_2, SHA256;
    TLS_RSA_PSK_WITH_CHACHA20_POLY1305_SHA256: RsaPsk, Chacha20Poly1305, Null, TLSv1_2, SHA256;
    TLS_ECDHE_PSK_WITH_AES_128_GCM_SHA256: EcdhePsk, Aes128Gcm, Null, TLSv1_2, SHA256;
    TLS_ECDHE_PSK_WITH_AES_256_GCM_SHA384: EcdhePsk, Aes256Gcm, Null, TLSv1_2, SHA384;
    TLS_ECDHE_PSK_WITH_AES_128_CCM_8_SHA256: EcdhePsk, Aes128Ccm8, Null, TLSv1_2, SHA256;
    TLS_ECDHE_PSK_WITH_AES_128_CCM_SHA256: EcdhePsk, Aes128Ccm, Null, TLSv1_2, SHA256;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_recognised_suite_is_fully_described() {
        assert_eq!(SUITES.len(), 291);
        for desc in SUITES {
            let suite = desc.suite;
            assert!(key_exchange_algorithm(suite).is_some(), "{suite:?}");
            assert!(encryption_algorithm(suite).is_some(), "{suite:?}");
            assert!(mac_algorithm(suite).is_some(), "{suite:?}");
            assert!(cipher_type(suite).is_some(), "{suite:?}");

            match desc.cipher_type() {
                CipherType::Aead => assert_eq!(desc.mac, MacAlgorithm::Null, "{suite:?}"),
                _ => assert_ne!(desc.mac, MacAlgorithm::Null, "{suite:?}"),
            }
        }
    }

    #[test]
    fn registry_is_sorted_and_unique() {
        for pair in SUITES.windows(2) {
            assert!(u16::from(pair[0].suite) < u16::from(pair[1].suite));
        }
    }

    #[test]
    fn unrecognised_suites_are_absent_everywhere() {
        for suite in [
            CipherSuite::TLS_NULL_WITH_NULL_NULL,
            CipherSuite::TLS_EMPTY_RENEGOTIATION_INFO_SCSV,
            CipherSuite::TLS_FALLBACK_SCSV,
            CipherSuite::Unknown(0xfefe),
        ] {
            assert_eq!(key_exchange_algorithm(suite), None);
            assert_eq!(encryption_algorithm(suite), None);
            assert_eq!(mac_algorithm(suite), None);
            assert_eq!(cipher_type(suite), None);
            assert_eq!(minimum_version(suite), None);
        }
    }

    #[test]
    fn sample_descriptors() {
        let desc = CipherSuiteDescriptor::lookup(CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256)
            .unwrap();
        assert_eq!(desc.key_exchange, KeyExchangeAlgorithm::EcdheRsa);
        assert_eq!(desc.encryption, EncryptionAlgorithm::Aes128Gcm);
        assert_eq!(desc.mac, MacAlgorithm::Null);
        assert_eq!(desc.minimum_version, ProtocolVersion::TLSv1_2);

        let desc = CipherSuiteDescriptor::lookup(CipherSuite::TLS_RSA_WITH_3DES_EDE_CBC_SHA).unwrap();
        assert_eq!(desc.cipher_type(), CipherType::Block);
        assert_eq!(desc.mac, MacAlgorithm::HmacSha1);
        assert_eq!(desc.minimum_version, ProtocolVersion::SSLv3);

        let desc = CipherSuiteDescriptor::lookup(CipherSuite::TLS13_AES_256_GCM_SHA384).unwrap();
        assert!(desc.is_tls13());
        assert_eq!(desc.key_exchange, KeyExchangeAlgorithm::Null);
        assert_eq!(desc.prf_hash, PrfHash::SHA384);

        assert!(is_stream_cipher_suite(CipherSuite::TLS_RSA_WITH_NULL_SHA));
        assert!(is_block_cipher_suite(CipherSuite::TLS_RSA_WITH_AES_128_CBC_SHA));
        assert!(is_aead_cipher_suite(CipherSuite::TLS13_CHACHA20_POLY1305_SHA256));

        let desc = CipherSuiteDescriptor::lookup(CipherSuite::TLS_SM4_CCM_SM3).unwrap();
        assert!(desc.is_tls13());
        assert_eq!(desc.key_exchange, KeyExchangeAlgorithm::Null);
        assert_eq!(desc.encryption, EncryptionAlgorithm::Sm4Ccm);
        assert_eq!(desc.mac, MacAlgorithm::Null);
        assert_eq!(
            encryption_algorithm(CipherSuite::TLS_SM4_GCM_SM3),
            Some(EncryptionAlgorithm::Sm4Gcm)
        );
        assert!(is_aead_cipher_suite(CipherSuite::TLS_SM4_GCM_SM3));
    }

    #[test]
    fn prf_selection() {
        use ProtocolVersion::*;

        let cases = [
            (TLSv1_3, CipherSuite::TLS13_AES_128_GCM_SHA256, Some(PrfAlgorithm::Tls13HkdfSha256)),
            (TLSv1_3, CipherSuite::TLS13_AES_256_GCM_SHA384, Some(PrfAlgorithm::Tls13HkdfSha384)),
            (TLSv1_2, CipherSuite::TLS13_AES_128_GCM_SHA256, None),
            (TLSv1_3, CipherSuite::TLS_SM4_GCM_SM3, Some(PrfAlgorithm::Tls13HkdfSm3)),
            (TLSv1_2, CipherSuite::TLS_SM4_CCM_SM3, None),
            (TLSv1_2, CipherSuite::TLS_RSA_WITH_AES_256_GCM_SHA384, Some(PrfAlgorithm::TlsPrfSha384)),
            (TLSv1_1, CipherSuite::TLS_RSA_WITH_AES_256_GCM_SHA384, None),
            (DTLSv1_2, CipherSuite::TLS_RSA_WITH_AES_128_CBC_SHA256, Some(PrfAlgorithm::TlsPrfSha256)),
            (TLSv1_2, CipherSuite::TLS_PSK_WITH_AES_256_CBC_SHA384, Some(PrfAlgorithm::TlsPrfSha384)),
            (TLSv1_0, CipherSuite::TLS_PSK_WITH_AES_256_CBC_SHA384, Some(PrfAlgorithm::TlsPrfLegacy)),
            (TLSv1_2, CipherSuite::TLS_RSA_WITH_AES_128_CBC_SHA, Some(PrfAlgorithm::TlsPrfSha256)),
            (TLSv1_1, CipherSuite::TLS_RSA_WITH_AES_128_CBC_SHA, Some(PrfAlgorithm::TlsPrfLegacy)),
            (DTLSv1_0, CipherSuite::TLS_RSA_WITH_AES_128_CBC_SHA, Some(PrfAlgorithm::TlsPrfLegacy)),
            (SSLv3, CipherSuite::TLS_RSA_WITH_AES_128_CBC_SHA, Some(PrfAlgorithm::SslPrfLegacy)),
            (TLSv1_3, CipherSuite::TLS_RSA_WITH_AES_128_CBC_SHA, None),
            (TLSv1_2, CipherSuite::Unknown(0xfefe), Some(PrfAlgorithm::TlsPrfSha256)),
        ];

        for (version, suite, expected) in cases {
            let got = prf_algorithm(version, suite).ok();
            assert_eq!(got, expected, "{version:?} {suite:?}");
        }

        assert_eq!(
            prf_algorithm(TLSv1_2, CipherSuite::TLS13_AES_128_GCM_SHA256),
            Err(PeerMisbehaved::SelectedUnsupportedVersionForCipherSuite.into())
        );
    }

    #[test]
    fn group_roles() {
        assert_eq!(
            named_group_roles(&[CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256]),
            vec![NamedGroupRole::Ecdh, NamedGroupRole::Ecdsa]
        );
        assert_eq!(
            named_group_roles(&[
                CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
                CipherSuite::TLS_DHE_RSA_WITH_AES_128_GCM_SHA256,
                CipherSuite::TLS_RSA_WITH_AES_128_GCM_SHA256,
            ]),
            vec![NamedGroupRole::Dh, NamedGroupRole::Ecdh]
        );
        assert_eq!(
            named_group_roles(&[CipherSuite::TLS13_AES_128_GCM_SHA256]),
            vec![NamedGroupRole::Dh, NamedGroupRole::Ecdh]
        );
        assert!(named_group_roles(&[CipherSuite::TLS_PSK_WITH_AES_128_CBC_SHA]).is_empty());
    }

    #[test]
    fn key_exchange_list_is_deduplicated() {
        assert_eq!(
            key_exchange_algorithms(&[
                CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
                CipherSuite::TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
                CipherSuite::Unknown(0x1234),
                CipherSuite::TLS_RSA_WITH_AES_128_CBC_SHA,
            ]),
            vec![KeyExchangeAlgorithm::EcdheRsa, KeyExchangeAlgorithm::Rsa]
        );
    }

    #[test]
    fn record_key_sizes() {
        use ProtocolVersion::*;
        assert_eq!(EncryptionAlgorithm::Aes128Gcm.fixed_iv_len(TLSv1_2), 4);
        assert_eq!(EncryptionAlgorithm::Chacha20Poly1305.fixed_iv_len(TLSv1_2), 12);
        assert_eq!(EncryptionAlgorithm::Aes128Gcm.fixed_iv_len(TLSv1_3), 12);
        assert_eq!(EncryptionAlgorithm::Aes128Cbc.fixed_iv_len(TLSv1_0), 16);
        assert_eq!(EncryptionAlgorithm::TripleDesEdeCbc.fixed_iv_len(SSLv3), 8);
        assert_eq!(EncryptionAlgorithm::Aes128Cbc.fixed_iv_len(TLSv1_1), 0);
        assert_eq!(EncryptionAlgorithm::Sm4Gcm.key_len(), 16);
        assert_eq!(EncryptionAlgorithm::Sm4Ccm.fixed_iv_len(TLSv1_3), 12);
        assert_eq!(MacAlgorithm::HmacSha384.key_len(), 48);
        assert_eq!(MacAlgorithm::Null.key_len(), 0);
    }
}
