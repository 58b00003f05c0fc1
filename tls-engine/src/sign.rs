//! Choosing handshake signature algorithms, and producing the signatures.
//!
//! From TLS 1.2 each signature carries a [`SignatureAndHashAlgorithm`]
//! picked from those the peer offered.  Before TLS 1.2 nothing is
//! negotiated: the algorithm follows from the certificate's key and the
//! signed content is hashed with the combined MD5 and SHA-1 hash.

use std::vec::Vec;

use crate::crypto::signer::{Signer, StreamSigner};
use crate::crypto::CryptoProvider;
use crate::enums::ProtocolVersion;
use crate::error::{ApiMisuse, Error};
use crate::log::trace;
use crate::msgs::enums::{ClientCertificateType, HashAlgorithm, SignatureAlgorithm};
use crate::msgs::handshake::{DigitallySigned, SignatureAndHashAlgorithm};
use crate::security_params::{SecurityParameters, Side};
use crate::suites::KeyExchangeAlgorithm;

/// Hashes weaker than this are never chosen.
pub const MINIMUM_HASH_STRICT: HashAlgorithm = HashAlgorithm::SHA1;

/// Hashes at least this strong are preferred.
pub const MINIMUM_HASH_PREFERRED: HashAlgorithm = HashAlgorithm::SHA256;

const fn pair(hash: HashAlgorithm, signature: SignatureAlgorithm) -> SignatureAndHashAlgorithm {
    SignatureAndHashAlgorithm::new(hash, signature)
}

static DEFAULT_SUPPORTED_SIGNATURE_ALGORITHMS: &[SignatureAndHashAlgorithm] = &[
    SignatureAndHashAlgorithm::ED25519,
    SignatureAndHashAlgorithm::ED448,
    pair(HashAlgorithm::SHA256, SignatureAlgorithm::ECDSA),
    pair(HashAlgorithm::SHA384, SignatureAlgorithm::ECDSA),
    pair(HashAlgorithm::SHA512, SignatureAlgorithm::ECDSA),
    SignatureAndHashAlgorithm::RSA_PSS_RSAE_SHA256,
    SignatureAndHashAlgorithm::RSA_PSS_RSAE_SHA384,
    SignatureAndHashAlgorithm::RSA_PSS_RSAE_SHA512,
    SignatureAndHashAlgorithm::RSA_PSS_PSS_SHA256,
    SignatureAndHashAlgorithm::RSA_PSS_PSS_SHA384,
    SignatureAndHashAlgorithm::RSA_PSS_PSS_SHA512,
    pair(HashAlgorithm::SHA256, SignatureAlgorithm::RSA),
    pair(HashAlgorithm::SHA384, SignatureAlgorithm::RSA),
    pair(HashAlgorithm::SHA512, SignatureAlgorithm::RSA),
    pair(HashAlgorithm::SHA256, SignatureAlgorithm::DSA),
    pair(HashAlgorithm::SHA384, SignatureAlgorithm::DSA),
    pair(HashAlgorithm::SHA512, SignatureAlgorithm::DSA),
    pair(HashAlgorithm::SHA224, SignatureAlgorithm::ECDSA),
    pair(HashAlgorithm::SHA224, SignatureAlgorithm::RSA),
    pair(HashAlgorithm::SHA224, SignatureAlgorithm::DSA),
    pair(HashAlgorithm::SHA1, SignatureAlgorithm::ECDSA),
    pair(HashAlgorithm::SHA1, SignatureAlgorithm::RSA),
    pair(HashAlgorithm::SHA1, SignatureAlgorithm::DSA),
];

static LEGACY_SIGNATURE_ALGORITHMS: &[SignatureAndHashAlgorithm] = &[
    pair(HashAlgorithm::SHA1, SignatureAlgorithm::DSA),
    pair(HashAlgorithm::SHA1, SignatureAlgorithm::ECDSA),
    pair(HashAlgorithm::SHA1, SignatureAlgorithm::RSA),
];

/// Every signature algorithm we know how to use, most preferred first.
pub fn all_signature_algorithms() -> &'static [SignatureAndHashAlgorithm] {
    DEFAULT_SUPPORTED_SIGNATURE_ALGORITHMS
}

/// The algorithms a TLS 1.2 peer is assumed to support when it sends no
/// `signature_algorithms` extension (RFC 5246 section 7.4.1.4.1).
pub fn default_signature_algorithms() -> &'static [SignatureAndHashAlgorithm] {
    LEGACY_SIGNATURE_ALGORITHMS
}

/// Our default `signature_algorithms`: those of
/// [`all_signature_algorithms`] that `provider` can verify.
pub fn default_supported_signature_algorithms(
    provider: &dyn CryptoProvider,
) -> Vec<SignatureAndHashAlgorithm> {
    DEFAULT_SUPPORTED_SIGNATURE_ALGORITHMS
        .iter()
        .copied()
        .filter(|alg| provider.has_signature_algorithm(*alg))
        .collect()
}

/// The algorithm assumed for `signature` when the peer sent no list.
pub fn default_signature_algorithm(
    signature: SignatureAlgorithm,
) -> Option<SignatureAndHashAlgorithm> {
    match signature {
        SignatureAlgorithm::DSA | SignatureAlgorithm::ECDSA | SignatureAlgorithm::RSA => {
            Some(pair(HashAlgorithm::SHA1, signature))
        }
        _ => None,
    }
}

/// The client certificate type matching a pre-TLS 1.2 signature algorithm.
pub fn legacy_client_cert_type(signature: SignatureAlgorithm) -> Option<ClientCertificateType> {
    match signature {
        SignatureAlgorithm::RSA => Some(ClientCertificateType::RSASign),
        SignatureAlgorithm::DSA => Some(ClientCertificateType::DSSSign),
        SignatureAlgorithm::ECDSA => Some(ClientCertificateType::ECDSASign),
        _ => None,
    }
}

/// The signature algorithm a client certificate of `cert_type` signs
/// `CertificateVerify` with.
pub fn legacy_signature_algorithm_client(
    cert_type: ClientCertificateType,
) -> Option<SignatureAlgorithm> {
    match cert_type {
        ClientCertificateType::DSSSign => Some(SignatureAlgorithm::DSA),
        ClientCertificateType::ECDSASign => Some(SignatureAlgorithm::ECDSA),
        ClientCertificateType::RSASign => Some(SignatureAlgorithm::RSA),
        _ => None,
    }
}

/// The signature algorithm a CA uses for client certificates of `cert_type`.
pub fn legacy_signature_algorithm_client_cert(
    cert_type: ClientCertificateType,
) -> Option<SignatureAlgorithm> {
    use ClientCertificateType::*;
    match cert_type {
        DSSSign | DSSFixedDH => Some(SignatureAlgorithm::DSA),
        ECDSASign | ECDSAFixedECDH => Some(SignatureAlgorithm::ECDSA),
        RSASign | RSAFixedDH | RSAFixedECDH => Some(SignatureAlgorithm::RSA),
        _ => None,
    }
}

/// The signature algorithm of `ServerKeyExchange` under `kx` before TLS 1.2.
pub fn legacy_signature_algorithm_server(kx: KeyExchangeAlgorithm) -> Option<SignatureAlgorithm> {
    use KeyExchangeAlgorithm::*;
    match kx {
        DheDss | SrpDss => Some(SignatureAlgorithm::DSA),
        EcdheEcdsa => Some(SignatureAlgorithm::ECDSA),
        DheRsa | EcdheRsa | SrpRsa => Some(SignatureAlgorithm::RSA),
        _ => None,
    }
}

/// The signature algorithm server certificates are signed with under `kx`,
/// when the client expressed no preference (RFC 4346 section 7.4.2).
pub fn legacy_signature_algorithm_server_cert(
    kx: KeyExchangeAlgorithm,
) -> Option<SignatureAlgorithm> {
    use KeyExchangeAlgorithm::*;
    match kx {
        DhDss | DheDss | SrpDss => Some(SignatureAlgorithm::DSA),
        EcdhEcdsa | EcdheEcdsa => Some(SignatureAlgorithm::ECDSA),
        DhRsa | DheRsa | EcdhRsa | EcdheRsa | Rsa | RsaPsk | SrpRsa => Some(SignatureAlgorithm::RSA),
        _ => None,
    }
}

/// Whether any entry of `algorithms` uses `signature`.
pub fn contains_any_signature_algorithm(
    algorithms: &[SignatureAndHashAlgorithm],
    signature: SignatureAlgorithm,
) -> bool {
    algorithms
        .iter()
        .any(|alg| alg.signature == signature)
}

/// Choose the hash to use with `signature` from the peer's `sig_algs`.
///
/// Returns `None` before TLS 1.2, where there is no choice to make.  A peer
/// that sent no list is taken to support only SHA-1.  Hashes below
/// [`MINIMUM_HASH_STRICT`] are never chosen.  Among the rest, the weakest
/// hash at or above [`MINIMUM_HASH_PREFERRED`] wins; failing that, the
/// strongest one below it.  Having nothing to choose is an internal error,
/// as callers only ask for signature algorithms the peer offered.
pub fn choose_signature_and_hash_algorithm(
    version: ProtocolVersion,
    sig_algs: Option<&[SignatureAndHashAlgorithm]>,
    signature: SignatureAlgorithm,
) -> Result<Option<SignatureAndHashAlgorithm>, Error> {
    if !version.allows_signature_algorithms() {
        return Ok(None);
    }

    let defaults;
    let sig_algs = match sig_algs {
        Some(sig_algs) => sig_algs,
        None => {
            defaults = default_signature_algorithm(signature);
            defaults.as_slice()
        }
    };

    let strict = u8::from(MINIMUM_HASH_STRICT);
    let preferred = u8::from(MINIMUM_HASH_PREFERRED);

    let mut chosen: Option<SignatureAndHashAlgorithm> = None;
    for alg in sig_algs
        .iter()
        .filter(|alg| alg.signature == signature)
    {
        let hash = u8::from(alg.hash);
        if hash < strict {
            continue;
        }

        let Some(current) = chosen else {
            chosen = Some(*alg);
            continue;
        };

        let current = u8::from(current.hash);
        let better = if current < preferred {
            hash > current
        } else {
            hash >= preferred && hash < current
        };
        if better {
            chosen = Some(*alg);
        }
    }

    match chosen {
        Some(alg) => {
            trace!("chose signature algorithm {alg:?} for {signature:?}");
            Ok(Some(alg))
        }
        None => Err(Error::Unreachable(
            "no usable hash for an offered signature algorithm",
        )),
    }
}

/// The distinct signature algorithms in `sig_algs` with an acceptable hash.
///
/// A peer that sent no list can use RSA, DSA and ECDSA.
pub fn usable_signature_algorithms(
    sig_algs: Option<&[SignatureAndHashAlgorithm]>,
) -> Vec<SignatureAlgorithm> {
    let Some(sig_algs) = sig_algs else {
        return vec![
            SignatureAlgorithm::RSA,
            SignatureAlgorithm::DSA,
            SignatureAlgorithm::ECDSA,
        ];
    };

    let mut usable = Vec::new();
    for alg in sig_algs {
        if u8::from(alg.hash) >= u8::from(MINIMUM_HASH_STRICT) && !usable.contains(&alg.signature)
        {
            usable.push(alg.signature);
        }
    }
    usable
}

/// The algorithm to put in a signature made by `signer` under `version`.
///
/// From TLS 1.2 the signer must have one.
pub fn signature_and_hash_algorithm(
    version: ProtocolVersion,
    signer: &dyn Signer,
) -> Result<Option<SignatureAndHashAlgorithm>, Error> {
    if !version.allows_signature_algorithms() {
        return Ok(None);
    }

    match signer.algorithm() {
        Some(alg) => Ok(Some(alg)),
        None => Err(ApiMisuse::SignerWithoutAlgorithm.into()),
    }
}

/// The content signed in a TLS 1.3 `CertificateVerify` sent by `sender`
/// (RFC 8446 section 4.4.3).
pub fn tls13_certificate_verify_message(transcript_hash: &[u8], sender: Side) -> Vec<u8> {
    let context: &[u8] = match sender {
        Side::Server => SERVER_CONTEXT,
        Side::Client => CLIENT_CONTEXT,
    };

    let mut message = Vec::with_capacity(64 + context.len() + 1 + transcript_hash.len());
    message.resize(64, 0x20);
    message.extend_from_slice(context);
    message.push(0x00);
    message.extend_from_slice(transcript_hash);
    message
}

const SERVER_CONTEXT: &[u8] = b"TLS 1.3, server CertificateVerify";
const CLIENT_CONTEXT: &[u8] = b"TLS 1.3, client CertificateVerify";

/// The content signed in a `ServerKeyExchange`: both randoms, then the
/// key exchange parameters.
pub fn server_key_exchange_message(params: &SecurityParameters, kx_params: &[u8]) -> Vec<u8> {
    let mut message = Vec::with_capacity(64 + kx_params.len());
    message.extend_from_slice(&params.client_random);
    message.extend_from_slice(&params.server_random);
    message.extend_from_slice(kx_params);
    message
}

/// Sign a TLS 1.2-and-earlier `CertificateVerify` over the handshake
/// messages so far.
///
/// `handshake_messages` is the retained transcript, as from
/// [`HandshakeHash::take_handshake_buf`](crate::hash_hs::HandshakeHash::take_handshake_buf).
pub fn generate_certificate_verify(
    params: &SecurityParameters,
    signer: &dyn Signer,
    handshake_messages: &[u8],
) -> Result<DigitallySigned, Error> {
    let version = params.require_version()?;
    if version.is_tls13_or_later() {
        return Err(ApiMisuse::UnsupportedForProtocolVersion.into());
    }

    let algorithm = signature_and_hash_algorithm(version, signer)?;
    let signature = signer.sign(handshake_messages)?;
    Ok(DigitallySigned::new(algorithm, signature))
}

/// Sign a TLS 1.3 `CertificateVerify` for our side over `transcript_hash`.
pub fn generate_tls13_certificate_verify(
    params: &SecurityParameters,
    signer: &dyn Signer,
    transcript_hash: &[u8],
) -> Result<DigitallySigned, Error> {
    if !params.require_version()?.is_tls13_or_later() {
        return Err(ApiMisuse::UnsupportedForProtocolVersion.into());
    }

    let algorithm = signer
        .algorithm()
        .ok_or(ApiMisuse::SignerWithoutAlgorithm)?;
    let message = tls13_certificate_verify_message(transcript_hash, params.side);
    let signature = signer.sign(&message)?;
    Ok(DigitallySigned::new(Some(algorithm), signature))
}

/// Sign the `ServerKeyExchange` parameters `kx_params`.
pub fn generate_server_key_exchange_signature(
    params: &SecurityParameters,
    signer: &dyn Signer,
    kx_params: &[u8],
) -> Result<DigitallySigned, Error> {
    let algorithm = signature_and_hash_algorithm(params.require_version()?, signer)?;
    let signature = signer.sign(&server_key_exchange_message(params, kx_params))?;
    Ok(DigitallySigned::new(algorithm, signature))
}

/// Begin a streamed `ServerKeyExchange` signature, with the randoms
/// already added.  The caller adds the key exchange parameters.
pub fn server_key_exchange_stream_signer(
    params: &SecurityParameters,
    signer: std::boxed::Box<dyn Signer>,
) -> Result<StreamSigner, Error> {
    signature_and_hash_algorithm(params.require_version()?, signer.as_ref())?;

    let mut stream = StreamSigner::new(signer);
    stream.update(&params.client_random);
    stream.update(&params.server_random);
    Ok(stream)
}
