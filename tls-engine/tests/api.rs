//! Handshake signatures and errors, end to end through the public API.

use std::sync::Arc;

use pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer};
use ring::rand::SystemRandom;
use ring::signature::{self, EcdsaKeyPair, Ed25519KeyPair, KeyPair};
use tls_engine::crypto::ring::{default_provider, sign as ring_sign, PublicKeyKind, Ring, RingCertificate};
use tls_engine::crypto::CertifiedKey;
use tls_engine::negotiate::Credentials;
use tls_engine::x509::Certificate;
use tls_engine::{
    capability, sign, verify, AlertDescription, ApiMisuse, CertificateError, CipherSuite, Error,
    HashAlgorithm, NegotiationConfig, PeerIncompatible, PeerMisbehaved, ProtocolVersion,
    SecurityParameters, Side, SignatureAlgorithm, SignatureAndHashAlgorithm,
    DEFAULT_CIPHER_SUITES,
};

fn init() {
    let _ = env_logger::builder()
        .is_test(true)
        .try_init();
}

fn leaf() -> CertificateDer<'static> {
    CertificateDer::from(b"leaf certificate".to_vec())
}

fn ed25519() -> (CertifiedKey, RingCertificate) {
    let pkcs8 = Ed25519KeyPair::generate_pkcs8(&SystemRandom::new()).unwrap();
    let pair = Ed25519KeyPair::from_pkcs8(pkcs8.as_ref()).unwrap();
    let cert = RingCertificate::new(
        leaf(),
        PublicKeyKind::Ed25519,
        pair.public_key().as_ref().to_vec(),
    );

    let key = ring_sign::any_eddsa_type(&PrivatePkcs8KeyDer::from(pkcs8.as_ref().to_vec())).unwrap();
    (CertifiedKey::new(vec![leaf()], key), cert)
}

fn ecdsa_p256() -> (CertifiedKey, RingCertificate) {
    let rng = SystemRandom::new();
    let alg = &signature::ECDSA_P256_SHA256_ASN1_SIGNING;
    let pkcs8 = EcdsaKeyPair::generate_pkcs8(alg, &rng).unwrap();
    let pair = EcdsaKeyPair::from_pkcs8(alg, pkcs8.as_ref(), &rng).unwrap();
    let cert = RingCertificate::new(
        leaf(),
        PublicKeyKind::EcdsaP256,
        pair.public_key().as_ref().to_vec(),
    );

    let der = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(pkcs8.as_ref().to_vec()));
    let key = ring_sign::any_ecdsa_type(&der).unwrap();
    (CertifiedKey::new(vec![leaf()], key), cert)
}

fn ecdsa_sha256() -> SignatureAndHashAlgorithm {
    SignatureAndHashAlgorithm::new(HashAlgorithm::SHA256, SignatureAlgorithm::ECDSA)
}

fn ecdsa_sha384() -> SignatureAndHashAlgorithm {
    SignatureAndHashAlgorithm::new(HashAlgorithm::SHA384, SignatureAlgorithm::ECDSA)
}

fn client_with_server_cert(
    version: ProtocolVersion,
    suite: CipherSuite,
    sig_algs: Vec<SignatureAndHashAlgorithm>,
    cert: RingCertificate,
) -> SecurityParameters {
    let mut client = SecurityParameters::new(Side::Client);
    client.negotiated_version(version);
    client.negotiated_cipher_suite(suite).unwrap();
    client.set_randoms([1u8; 32], [2u8; 32]);
    client.set_client_sig_algs(Some(sig_algs), None);

    let chain: Vec<Arc<dyn Certificate>> = vec![Arc::new(cert)];
    verify::process_server_certificate(&mut client, &Ring, chain, &[], &[]).unwrap();
    client
}

fn server(version: ProtocolVersion, suite: CipherSuite) -> SecurityParameters {
    let mut server = SecurityParameters::new(Side::Server);
    server.negotiated_version(version);
    server.negotiated_cipher_suite(suite).unwrap();
    server.set_randoms([1u8; 32], [2u8; 32]);
    server
}

#[test]
fn tls13_certificate_verify_round_trip() {
    init();
    let (key, cert) = ed25519();
    let suite = CipherSuite::TLS13_AES_128_GCM_SHA256;
    let offered = vec![ecdsa_sha256(), SignatureAndHashAlgorithm::ED25519];

    let credentials = Credentials::for_signing(key, ProtocolVersion::TLSv1_3, Some(&offered[..])).unwrap();
    let signer = &credentials.require_signer().unwrap().signer;
    assert_eq!(signer.algorithm(), Some(SignatureAndHashAlgorithm::ED25519));

    let transcript_hash = [0x42u8; 32];
    let server = server(ProtocolVersion::TLSv1_3, suite);
    let certificate_verify =
        sign::generate_tls13_certificate_verify(&server, signer.as_ref(), &transcript_hash).unwrap();

    let client = client_with_server_cert(ProtocolVersion::TLSv1_3, suite, offered, cert);
    verify::verify_tls13_certificate_verify(&client, &certificate_verify, &transcript_hash).unwrap();

    let err = verify::verify_tls13_certificate_verify(&client, &certificate_verify, &[0x43u8; 32])
        .unwrap_err();
    assert_eq!(err, Error::InvalidCertificate(CertificateError::BadSignature));
    assert_eq!(AlertDescription::try_from(&err), Ok(AlertDescription::DecryptError));
}

#[test]
fn tls13_certificate_verify_is_bound_to_sender() {
    let (key, cert) = ed25519();
    let suite = CipherSuite::TLS13_AES_128_GCM_SHA256;
    let offered = vec![SignatureAndHashAlgorithm::ED25519];
    let credentials = Credentials::for_signing(key, ProtocolVersion::TLSv1_3, Some(&offered[..])).unwrap();
    let signer = &credentials.require_signer().unwrap().signer;

    // signed as a client, so a client expecting the server's signature refuses it
    let as_client = client_with_server_cert(ProtocolVersion::TLSv1_3, suite, offered.clone(), cert);
    let certificate_verify =
        sign::generate_tls13_certificate_verify(&as_client, signer.as_ref(), &[0u8; 32]).unwrap();
    assert_eq!(
        verify::verify_tls13_certificate_verify(&as_client, &certificate_verify, &[0u8; 32]),
        Err(Error::from(CertificateError::BadSignature))
    );
}

#[test]
fn tls12_server_key_exchange_round_trip() {
    init();
    let (key, cert) = ecdsa_p256();
    let suite = CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256;
    let offered = vec![ecdsa_sha384(), ecdsa_sha256()];
    let kx_params = b"\x03\x00\x1d\x20 thirty-two bytes of public key!";

    let credentials = Credentials::for_signing(key, ProtocolVersion::TLSv1_2, Some(&offered[..])).unwrap();
    let signer = &credentials.require_signer().unwrap().signer;
    assert_eq!(signer.algorithm(), Some(ecdsa_sha256()));
    assert_eq!(
        credentials.require_decryptor().unwrap_err(),
        Error::from(ApiMisuse::UnexpectedCredentialKind)
    );

    let server = server(ProtocolVersion::TLSv1_2, suite);
    let signed =
        sign::generate_server_key_exchange_signature(&server, signer.as_ref(), kx_params).unwrap();
    assert_eq!(signed.algorithm, Some(ecdsa_sha256()));

    let client = client_with_server_cert(ProtocolVersion::TLSv1_2, suite, offered, cert);
    verify::verify_server_key_exchange_signature(&client, &Ring, &signed, kx_params).unwrap();
    assert_eq!(
        verify::verify_server_key_exchange_signature(&client, &Ring, &signed, b"other params"),
        Err(Error::from(CertificateError::BadSignature))
    );
}

#[test]
fn tls12_server_key_exchange_with_unoffered_algorithm() {
    let (key, cert) = ecdsa_p256();
    let suite = CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256;

    let credentials =
        Credentials::for_signing(key, ProtocolVersion::TLSv1_2, Some(&[ecdsa_sha256()][..])).unwrap();
    let signer = &credentials.require_signer().unwrap().signer;
    let signed = sign::generate_server_key_exchange_signature(
        &server(ProtocolVersion::TLSv1_2, suite),
        signer.as_ref(),
        b"params",
    )
    .unwrap();

    let client = client_with_server_cert(ProtocolVersion::TLSv1_2, suite, vec![ecdsa_sha384()], cert);
    let err = verify::verify_server_key_exchange_signature(&client, &Ring, &signed, b"params")
        .unwrap_err();
    assert_eq!(
        err,
        Error::PeerMisbehaved(PeerMisbehaved::SignedHandshakeWithUnadvertisedSigScheme)
    );
    assert_eq!(AlertDescription::try_from(&err), Ok(AlertDescription::IllegalParameter));
}

#[test]
fn signing_without_common_algorithm() {
    let (key, _) = ed25519();
    assert_eq!(
        Credentials::for_signing(key, ProtocolVersion::TLSv1_3, Some(&[ecdsa_sha256()][..]))
            .unwrap_err(),
        Error::PeerIncompatible(PeerIncompatible::NoSignatureSchemesInCommon)
    );
}

#[test]
fn errors_map_to_alerts() {
    let cases: [(Error, Result<AlertDescription, ()>); 6] = [
        (
            PeerIncompatible::NoCipherSuitesInCommon.into(),
            Ok(AlertDescription::HandshakeFailure),
        ),
        (
            PeerMisbehaved::UnexpectedCertificateRequest.into(),
            Ok(AlertDescription::UnexpectedMessage),
        ),
        (
            PeerMisbehaved::AttemptedDowngradeToTls12WhenTls13IsSupported.into(),
            Ok(AlertDescription::IllegalParameter),
        ),
        (
            ApiMisuse::ExporterOutputTooLong.into(),
            Ok(AlertDescription::InternalError),
        ),
        (
            Error::Unreachable("test"),
            Ok(AlertDescription::InternalError),
        ),
        (Error::General("local failure".into()), Err(())),
    ];

    for (error, alert) in cases {
        assert_eq!(AlertDescription::try_from(&error), alert, "{error}");
    }

    assert!(Error::Unreachable("test")
        .to_string()
        .contains("please file a bug in tls-engine"));
}

#[test]
fn ring_serves_the_default_suites() {
    assert_eq!(
        capability::supported_cipher_suites(&Ring, DEFAULT_CIPHER_SUITES),
        DEFAULT_CIPHER_SUITES.to_vec()
    );
    assert!(capability::has_any_rsa_sig_algs(&Ring));

    let err = NegotiationConfig::builder(default_provider())
        .with_cipher_suites(&[CipherSuite::TLS_RSA_WITH_AES_128_CBC_SHA])
        .build()
        .unwrap_err();
    assert_eq!(err, Error::General("no usable cipher suites configured".into()));
}
