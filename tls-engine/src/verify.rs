//! Checking the peer's handshake signatures and certificate chain.
//!
//! Nothing here decides whether a chain is trusted: that is the caller's
//! job.  What is checked is that each signature the peer made, and each
//! signature in its chain, uses an algorithm we offered, and that the
//! signatures it made over handshake content are correct.

use std::sync::Arc;
use std::vec::Vec;

use crate::crypto::hash::CombinedContext;
use crate::crypto::signer::{StreamVerifier, Verifier};
use crate::crypto::CryptoProvider;
use crate::enums::CipherSuite;
use crate::error::{ApiMisuse, CertificateError, Error, PeerMisbehaved};
use crate::log::{trace, warn};
use crate::msgs::enums::{ClientCertificateType, ExtensionType, HashAlgorithm, SignatureAlgorithm};
use crate::msgs::handshake::{CertificateRequest, DigitallySigned, SignatureAndHashAlgorithm};
use crate::security_params::{SecurityParameters, Side};
use crate::sign;
use crate::suites::{self, KeyExchangeAlgorithm};
use crate::x509::{self, Certificate};

/// Check that the peer signed with `algorithm`, one of the `supported`
/// algorithms we offered.
pub fn verify_supported_signature_algorithm(
    supported: Option<&[SignatureAndHashAlgorithm]>,
    algorithm: SignatureAndHashAlgorithm,
) -> Result<(), Error> {
    let supported = supported.ok_or(ApiMisuse::MissingNegotiatedValue(
        "supported signature algorithms",
    ))?;
    if supported.is_empty() || supported.len() >= 1 << 15 {
        return Err(ApiMisuse::SignatureAlgorithmListLength.into());
    }

    if algorithm.is_anonymous() || !supported.contains(&algorithm) {
        warn!("peer signed with {algorithm:?}, which we did not offer");
        return Err(PeerMisbehaved::SignedHandshakeWithUnadvertisedSigScheme.into());
    }

    Ok(())
}

/// Whether a `ServerKeyExchange` under `kx` may be signed with `signature`.
pub fn is_valid_signature_algorithm_for_server_key_exchange(
    signature: SignatureAlgorithm,
    kx: KeyExchangeAlgorithm,
) -> bool {
    use KeyExchangeAlgorithm::*;
    match kx {
        DheRsa | EcdheRsa | SrpRsa => signature == SignatureAlgorithm::RSA || signature.is_rsa_pss(),
        DheDss | SrpDss => signature == SignatureAlgorithm::DSA,
        EcdheEcdsa => matches!(
            signature,
            SignatureAlgorithm::ECDSA | SignatureAlgorithm::ED25519 | SignatureAlgorithm::ED448
        ),
        Null => signature != SignatureAlgorithm::Anonymous,
        _ => false,
    }
}

/// Whether `suite` can be authenticated with one of `signatures`.
///
/// Suites whose key exchange is not signed are always usable.
pub fn is_valid_cipher_suite_for_signature_algorithms(
    suite: CipherSuite,
    signatures: &[SignatureAlgorithm],
) -> bool {
    let Some(kx) = suites::key_exchange_algorithm(suite) else {
        return true;
    };

    use KeyExchangeAlgorithm::*;
    if !matches!(
        kx,
        DheDss | DheRsa | EcdheEcdsa | EcdheRsa | Null | SrpRsa | SrpDss
    ) {
        return true;
    }

    signatures
        .iter()
        .any(|sig| is_valid_signature_algorithm_for_server_key_exchange(*sig, kx))
}

/// Whether a client certificate of `cert_type` can sign with `signature`.
fn is_valid_signature_algorithm_for_client_cert(
    signature: SignatureAlgorithm,
    cert_type: ClientCertificateType,
) -> bool {
    match cert_type {
        ClientCertificateType::RSASign => {
            signature == SignatureAlgorithm::RSA || signature.is_rsa_pss()
        }
        ClientCertificateType::DSSSign => signature == SignatureAlgorithm::DSA,
        ClientCertificateType::ECDSASign => matches!(
            signature,
            SignatureAlgorithm::ECDSA | SignatureAlgorithm::ED25519 | SignatureAlgorithm::ED448
        ),
        _ => false,
    }
}

/// Whether a `CertificateVerify` signed with `signature` answers a request
/// for any of `cert_types`.
pub fn is_valid_signature_algorithm_for_certificate_verify(
    signature: SignatureAlgorithm,
    cert_types: &[ClientCertificateType],
) -> bool {
    cert_types
        .iter()
        .any(|cert_type| is_valid_signature_algorithm_for_client_cert(signature, *cert_type))
}

/// Whether `algorithm` may sign a TLS 1.3 `CertificateVerify`
/// (RFC 8446 section 4.4.3).
fn usable_in_tls13(algorithm: SignatureAndHashAlgorithm) -> bool {
    match algorithm.signature {
        SignatureAlgorithm::RSA | SignatureAlgorithm::DSA | SignatureAlgorithm::Anonymous => false,
        SignatureAlgorithm::ECDSA => matches!(
            algorithm.hash,
            HashAlgorithm::SHA256 | HashAlgorithm::SHA384 | HashAlgorithm::SHA512
        ),
        _ => true,
    }
}

fn peer_leaf(params: &SecurityParameters) -> Result<&dyn Certificate, Error> {
    params
        .peer_certificate
        .as_deref()
        .and_then(|chain| chain.first())
        .map(|cert| cert.as_ref())
        .ok_or_else(|| ApiMisuse::MissingNegotiatedValue("peer certificate").into())
}

/// Turn the outcome of a signature check into our error.
///
/// A wrong signature and a failure while checking it are not distinguished.
fn signature_checked(verified: Result<bool, Error>) -> Result<(), Error> {
    match verified {
        Ok(true) => Ok(()),
        Ok(false) | Err(_) => {
            warn!("peer signature did not verify");
            Err(CertificateError::BadSignature.into())
        }
    }
}

/// Verify a TLS 1.2-and-earlier signature by `cert` over `message`.
///
/// Before TLS 1.2 there is no algorithm: RSA signs the combined MD5 and SHA-1
/// digest without a `DigestInfo`, and DSA and ECDSA sign with SHA-1.
fn verify_legacy_or_tls12(
    provider: &dyn CryptoProvider,
    cert: &dyn Certificate,
    algorithm: Option<SignatureAndHashAlgorithm>,
    legacy_signature: SignatureAlgorithm,
    message: &[u8],
    signature: &[u8],
) -> Result<(), Error> {
    if let Some(algorithm) = algorithm {
        let verifier = cert.create_verifier(algorithm)?;
        return signature_checked(verifier.verify_signature(message, signature));
    }

    if legacy_signature != SignatureAlgorithm::RSA {
        let verifier = cert.create_verifier(SignatureAndHashAlgorithm::new(
            HashAlgorithm::SHA1,
            legacy_signature,
        ))?;
        return signature_checked(verifier.verify_signature(message, signature));
    }

    let verifier = cert.create_verifier(SignatureAndHashAlgorithm::new(
        HashAlgorithm::NONE,
        SignatureAlgorithm::RSA,
    ))?;
    let (Some(md5), Some(sha1)) = (
        provider.hash(HashAlgorithm::MD5),
        provider.hash(HashAlgorithm::SHA1),
    ) else {
        return Err(ApiMisuse::AlgorithmNotProvided.into());
    };
    let digest = CombinedContext::hash(md5, sha1, message);
    signature_checked(verifier.verify_raw_signature(digest.as_ref(), signature))
}

/// Verify the client's TLS 1.2-and-earlier `CertificateVerify`, as the server.
///
/// `request` is the `CertificateRequest` we sent, and `handshake_messages`
/// every handshake message up to but excluding the `CertificateVerify`.
pub fn verify_certificate_verify_client(
    params: &SecurityParameters,
    provider: &dyn CryptoProvider,
    request: &CertificateRequest,
    certificate_verify: &DigitallySigned,
    handshake_messages: &[u8],
) -> Result<(), Error> {
    if params.require_version()?.is_tls13_or_later() {
        return Err(ApiMisuse::UnsupportedForProtocolVersion.into());
    }

    let cert = peer_leaf(params)?;
    let signature = match certificate_verify.algorithm {
        None => {
            let signature = cert
                .legacy_signature_algorithm()
                .ok_or(CertificateError::UnsupportedCertificateType)?;
            match sign::legacy_client_cert_type(signature) {
                Some(cert_type) if request.certificate_types.contains(&cert_type) => signature,
                _ => return Err(CertificateError::UnsupportedCertificateType.into()),
            }
        }
        Some(algorithm) => {
            if !is_valid_signature_algorithm_for_certificate_verify(
                algorithm.signature,
                &request.certificate_types,
            ) {
                return Err(PeerMisbehaved::SignedHandshakeWithUnadvertisedSigScheme.into());
            }
            verify_supported_signature_algorithm(params.server_sig_algs(), algorithm)?;
            algorithm.signature
        }
    };

    verify_legacy_or_tls12(
        provider,
        cert,
        certificate_verify.algorithm,
        signature,
        handshake_messages,
        &certificate_verify.signature,
    )
}

/// Verify the peer's TLS 1.3 `CertificateVerify` over `transcript_hash`.
///
/// A server checks against the algorithms it offered in its
/// `CertificateRequest`; a client against those in its `ClientHello`.
pub fn verify_tls13_certificate_verify(
    params: &SecurityParameters,
    certificate_verify: &DigitallySigned,
    transcript_hash: &[u8],
) -> Result<(), Error> {
    if !params.require_version()?.is_tls13_or_later() {
        return Err(ApiMisuse::UnsupportedForProtocolVersion.into());
    }

    let algorithm = certificate_verify
        .algorithm
        .ok_or(PeerMisbehaved::SignedHandshakeWithUnadvertisedSigScheme)?;
    let offered = match params.side {
        Side::Server => params.server_sig_algs(),
        Side::Client => params.client_sig_algs(),
    };
    verify_supported_signature_algorithm(offered, algorithm)?;
    if !usable_in_tls13(algorithm) {
        return Err(PeerMisbehaved::SignedHandshakeWithUnadvertisedSigScheme.into());
    }

    let verifier = peer_leaf(params)?.create_verifier(algorithm)?;
    let message = sign::tls13_certificate_verify_message(transcript_hash, params.side.peer());
    signature_checked(verifier.verify_signature(&message, &certificate_verify.signature))
}

/// The signature algorithm of a `ServerKeyExchange` signed as `signed`,
/// after checking it against the key exchange and our offer.
fn server_key_exchange_signature_algorithm(
    params: &SecurityParameters,
    signed: &DigitallySigned,
) -> Result<SignatureAlgorithm, Error> {
    let version = params.require_version()?;
    let kx = params
        .key_exchange
        .ok_or(ApiMisuse::MissingNegotiatedValue("key exchange algorithm"))?;

    match (signed.algorithm, version.allows_signature_algorithms()) {
        (None, false) => sign::legacy_signature_algorithm_server(kx)
            .ok_or_else(|| PeerMisbehaved::SignedKxWithWrongAlgorithm.into()),
        (Some(algorithm), true) => {
            if !is_valid_signature_algorithm_for_server_key_exchange(algorithm.signature, kx) {
                warn!("{algorithm:?} cannot sign a {kx:?} key exchange");
                return Err(PeerMisbehaved::SignedKxWithWrongAlgorithm.into());
            }
            verify_supported_signature_algorithm(params.client_sig_algs(), algorithm)?;
            Ok(algorithm.signature)
        }
        _ => Err(PeerMisbehaved::SignedKxWithWrongAlgorithm.into()),
    }
}

/// Verify the server's `ServerKeyExchange` signature over `kx_params`, as
/// the client.
pub fn verify_server_key_exchange_signature(
    params: &SecurityParameters,
    provider: &dyn CryptoProvider,
    signed: &DigitallySigned,
    kx_params: &[u8],
) -> Result<(), Error> {
    let signature = server_key_exchange_signature_algorithm(params, signed)?;
    trace!("verifying ServerKeyExchange signed with {signature:?}");

    verify_legacy_or_tls12(
        provider,
        peer_leaf(params)?,
        signed.algorithm,
        signature,
        &sign::server_key_exchange_message(params, kx_params),
        &signed.signature,
    )
}

/// Begin streamed verification of a TLS 1.2 `ServerKeyExchange`, with the
/// randoms already added.  The caller adds the key exchange parameters and
/// finishes with [`finish_stream_verification`].
pub fn server_key_exchange_stream_verifier(
    params: &SecurityParameters,
    signed: &DigitallySigned,
) -> Result<StreamVerifier, Error> {
    server_key_exchange_signature_algorithm(params, signed)?;
    let algorithm = signed
        .algorithm
        .ok_or(ApiMisuse::UnsupportedForProtocolVersion)?;

    let verifier: std::boxed::Box<dyn Verifier> = peer_leaf(params)?.create_verifier(algorithm)?;
    let mut stream = StreamVerifier::new(verifier);
    stream.update(&params.client_random);
    stream.update(&params.server_random);
    Ok(stream)
}

/// Finish a streamed verification of `signature`.
pub fn finish_stream_verification(stream: StreamVerifier, signature: &[u8]) -> Result<(), Error> {
    signature_checked(stream.finish(signature))
}

/// Whether a link of the peer's chain may be signed with `alg`.
fn acceptable_in_chain(params: &SecurityParameters, alg: SignatureAndHashAlgorithm) -> bool {
    if params.side == Side::Server {
        return match params.server_sig_algs_cert() {
            Some(sig_algs_cert) => sig_algs_cert.contains(&alg),
            None => params
                .client_cert_types()
                .unwrap_or_default()
                .iter()
                .any(|cert_type| {
                    sign::legacy_signature_algorithm_client_cert(*cert_type) == Some(alg.signature)
                }),
        };
    }

    let Some(sig_algs_cert) = params.client_sig_algs_cert() else {
        return params
            .key_exchange
            .and_then(sign::legacy_signature_algorithm_server_cert)
            == Some(alg.signature);
    };

    let tls13 = params
        .version
        .is_some_and(|version| version.is_tls13_or_later());
    let sig_algs = match tls13 {
        true => None,
        false => params
            .client_sig_algs()
            .filter(|sig_algs| *sig_algs != sig_algs_cert),
    };

    sig_algs_cert.contains(&alg) || sig_algs.is_some_and(|sig_algs| sig_algs.contains(&alg))
}

/// Check that every signature in the peer's `chain` uses an algorithm we
/// accept.
///
/// The chain is leaf first; the last certificate is the trust anchor, whose
/// own signature is not checked.  A server checks against the
/// `signature_algorithms_cert` of its `CertificateRequest`, or without one
/// the certificate types it requested.  A client checks against its
/// `signature_algorithms_cert`, and `signature_algorithms` when it sent a
/// separate one before TLS 1.3, or without either the algorithm implied by
/// the key exchange.
pub fn check_peer_sig_algs(
    params: &SecurityParameters,
    chain: &[Arc<dyn Certificate>],
) -> Result<(), Error> {
    for link in chain.windows(2) {
        let (subject, issuer) = (link[0].as_ref(), link[1].as_ref());
        let valid = match x509::cert_sig_and_hash_alg(subject, issuer) {
            Some(alg) => acceptable_in_chain(params, alg),
            None => false,
        };

        if !valid {
            warn!(
                "peer certificate signed with unacceptable algorithm {:?}",
                subject.sig_alg_oid()
            );
            return Err(CertificateError::UnsupportedSignatureAlgorithmInChain.into());
        }
    }

    Ok(())
}

/// Check the server certificate's RFC 7633 TLS feature extension.
///
/// Every listed extension the client offered must have been answered by
/// the server.
pub fn check_tls_features(
    cert: &dyn Certificate,
    client_extensions: &[ExtensionType],
    server_extensions: &[ExtensionType],
) -> Result<(), Error> {
    for feature in x509::tls_features(cert)? {
        let typ = ExtensionType::from(feature);
        if client_extensions.contains(&typ) && !server_extensions.contains(&typ) {
            warn!("server did not confirm required TLS feature {typ:?}");
            return Err(CertificateError::MissingRequiredTlsFeature(feature).into());
        }
    }
    Ok(())
}

/// The RFC 5929 `tls-server-end-point` binding for `cert`: its hash under the
/// hash of its signature algorithm.
///
/// Empty when there is no such hash, or `provider` lacks it.
pub fn calculate_end_point_hash(provider: &dyn CryptoProvider, cert: &dyn Certificate) -> Vec<u8> {
    x509::end_point_hash_algorithm(cert)
        .and_then(|hash| provider.hash(hash))
        .map(|hash| hash.hash(cert.encoding()).as_ref().to_vec())
        .unwrap_or_default()
}

/// Record the client's certificate chain, as the server.
///
/// The chain may be empty when the client has no certificate.
pub fn process_client_certificate(
    params: &mut SecurityParameters,
    chain: Vec<Arc<dyn Certificate>>,
) -> Result<(), Error> {
    if params.peer_certificate.is_some() {
        return Err(PeerMisbehaved::DuplicatePeerCertificate.into());
    }

    trace!("client sent {} certificates", chain.len());
    params.peer_certificate = Some(chain);
    Ok(())
}

/// Record the server's certificate chain, as the client, and derive its
/// channel binding.
///
/// `client_extensions` and `server_extensions` are the extension types of
/// the two hellos, for [`check_tls_features`].
pub fn process_server_certificate(
    params: &mut SecurityParameters,
    provider: &dyn CryptoProvider,
    chain: Vec<Arc<dyn Certificate>>,
    client_extensions: &[ExtensionType],
    server_extensions: &[ExtensionType],
) -> Result<(), Error> {
    if params.peer_certificate.is_some() {
        return Err(PeerMisbehaved::DuplicatePeerCertificate.into());
    }

    let leaf = chain
        .first()
        .ok_or(crate::error::InvalidMessage::IllegalEmptyList("Certificates"))?;
    check_tls_features(leaf.as_ref(), client_extensions, server_extensions)?;

    params.tls_server_end_point = Some(calculate_end_point_hash(provider, leaf.as_ref()));
    params.peer_certificate = Some(chain);
    Ok(())
}

/// Record that the server sent no certificate, as a TLS 1.2-and-earlier
/// client using an anonymous key exchange.
pub fn skip_server_certificate(params: &mut SecurityParameters) -> Result<(), Error> {
    if params.require_version()?.is_tls13_or_later() {
        return Err(ApiMisuse::UnsupportedForProtocolVersion.into());
    }

    params.tls_server_end_point = Some(Vec::new());
    Ok(())
}
