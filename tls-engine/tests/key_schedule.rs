//! Known-answer tests for the key schedules, through the public API.

use tls_engine::crypto::ring::Ring;
use tls_engine::crypto::SharedSecret;
use tls_engine::suites::PrfAlgorithm;
use tls_engine::{
    tls12, tls13, ApiMisuse, CipherSuite, Error, ProtocolVersion, SecurityParameters, Side,
    TlsSecret,
};

fn init() {
    let _ = env_logger::builder()
        .is_test(true)
        .try_init();
}

fn bytes(secret: Option<&TlsSecret>) -> String {
    hex::encode(
        secret
            .unwrap()
            .copy()
            .unwrap()
            .extract()
            .unwrap(),
    )
}

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

// RFC 8448 section 3: a simple 1-RTT handshake with X25519 and
// TLS_AES_128_GCM_SHA256.
const RFC8448_ECDHE: &str = "8bd4054fb55b9d63fdfbacf9f04b9f0d35e6d63f537563efd46272900f89492d";
const RFC8448_SERVER_HELLO_HASH: &str =
    "860c06edc07858ee8e78f0e7428c58edd6b43f2ca3e6e95f02ed063cf0e1cad8";
const RFC8448_SERVER_FINISHED_HASH: &str =
    "9608102a0f1ccc6db6250b7b7e417b1a000eaada3daae4777a7686c9ff83df13";

fn rfc8448_params(side: Side) -> SecurityParameters {
    let mut params = SecurityParameters::new(side);
    params
        .negotiated_version_tls_client(ProtocolVersion::TLSv1_3)
        .unwrap();
    params
        .negotiated_cipher_suite(CipherSuite::TLS13_AES_128_GCM_SHA256)
        .unwrap();

    let ecdhe = SharedSecret::from(&unhex(RFC8448_ECDHE)[..]);
    tls13::establish_phase_secrets(&mut params, &Ring, None, Some(&ecdhe)).unwrap();
    params
}

#[test]
fn rfc8448_master_secret() {
    init();
    let params = rfc8448_params(Side::Client);
    assert_eq!(
        bytes(params.master_secret()),
        "18df06843d13a08bf2a449844c5f8a478001bc4d4c627984d5a41da8d0402919"
    );
}

#[test]
fn rfc8448_handshake_traffic() {
    init();
    let mut params = rfc8448_params(Side::Client);
    tls13::establish_phase_handshake(&mut params, &Ring, &unhex(RFC8448_SERVER_HELLO_HASH))
        .unwrap();

    assert_eq!(
        bytes(params.traffic_secret(Side::Client)),
        "b3eddb126e067f35a780b3abf45e2d8f3b1a950738f52e9600746a0e27a55a21"
    );
    assert_eq!(
        bytes(params.traffic_secret(Side::Server)),
        "b67b7d690cc16c4e75e54213cb2d37b4e9c912bcded9105d42befd59d391ad38"
    );

    let (key, iv) = tls13::traffic_keys(&params, &Ring, Side::Server).unwrap();
    assert_eq!(hex::encode(key.as_ref()), "3fce516009c21727d0f2e4e86ee403bc");
    assert_eq!(hex::encode(iv.as_ref()), "5d313eb2671276ee13000b30");

    let (key, iv) = tls13::traffic_keys(&params, &Ring, Side::Client).unwrap();
    assert_eq!(hex::encode(key.as_ref()), "dbfaa693d1762c5b666af5d950258d01");
    assert_eq!(hex::encode(iv.as_ref()), "5bd3c71b836e0b76bb73265f");
}

#[test]
fn rfc8448_application_traffic() {
    init();
    let mut params = rfc8448_params(Side::Server);
    tls13::establish_phase_handshake(&mut params, &Ring, &unhex(RFC8448_SERVER_HELLO_HASH))
        .unwrap();
    tls13::establish_phase_application(&mut params, &Ring, &unhex(RFC8448_SERVER_FINISHED_HASH))
        .unwrap();

    assert_eq!(
        bytes(params.traffic_secret(Side::Client)),
        "9e40646ce79a7f9dc05af8889bce6552875afa0b06df0087f792ebb7c17504a5"
    );
    assert_eq!(
        bytes(params.traffic_secret(Side::Server)),
        "a11af9f05531f856ad47116b45a950328204b4f44bfb6b3a4b4f1f3fcb631643"
    );
    assert_eq!(
        bytes(params.exporter_master_secret()),
        "fe22f881176eda18eb8f44529e6792c50c9a3f89452f68d8ae311b4309d3cf50"
    );
}

#[test]
fn tls13_exporter_treats_absent_and_empty_context_alike() {
    init();
    let mut params = rfc8448_params(Side::Client);
    tls13::establish_phase_handshake(&mut params, &Ring, &unhex(RFC8448_SERVER_HELLO_HASH))
        .unwrap();
    tls13::establish_phase_application(&mut params, &Ring, &unhex(RFC8448_SERVER_FINISHED_HASH))
        .unwrap();

    let absent = tls13::export_keying_material(&params, &Ring, b"label", None, 32).unwrap();
    let empty = tls13::export_keying_material(&params, &Ring, b"label", Some(&b""[..]), 32).unwrap();
    let other = tls13::export_keying_material(&params, &Ring, b"label", Some(&b"x"[..]), 32).unwrap();
    assert_eq!(absent, empty);
    assert_ne!(absent, other);

    assert_eq!(
        tls13::export_keying_material(&params, &Ring, b"label", None, 255 * 32 + 1),
        Err(Error::from(ApiMisuse::ExporterOutputTooLong))
    );
}

#[test]
fn tls12_prf_vector() {
    // the widely circulated P_SHA256 vector from the IETF TLS list
    let secret = TlsSecret::new(&unhex("9bbe436ba940f017b17652849a71db35"));
    let out = secret
        .derive_prf(
            &Ring,
            PrfAlgorithm::TlsPrfSha256,
            b"test label",
            &unhex("a0ba9f936cda311827a6f796ffd5198c"),
            100,
        )
        .unwrap()
        .extract()
        .unwrap();
    assert_eq!(
        hex::encode(out),
        "e3f229ba727be17b8d122620557cd453c2aab21d07c3d495329b52d4e61edb5a\
         6b301791e90d35c9c9a46b4e14baf9af0fa022f7077def17abfd3797c0564bab\
         4fbc91666e9def9b97fce34f796789baa48082d122ee42c5a72e5a5110fff701\
         87347b66"
    );
}

fn pre_master_secret() -> TlsSecret {
    let mut pms = vec![0x03, 0x03];
    pms.extend(0u8..46);
    TlsSecret::from_vec(pms)
}

fn tls12_params(version: ProtocolVersion, suite: CipherSuite) -> SecurityParameters {
    let mut params = SecurityParameters::new(Side::Client);
    params.negotiated_version(version);
    params
        .negotiated_cipher_suite(suite)
        .unwrap();
    params.set_randoms([1u8; 32], [2u8; 32]);
    params
}

#[test]
fn tls12_master_secret_and_exporter() {
    init();
    let mut params = tls12_params(
        ProtocolVersion::TLSv1_2,
        CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
    );
    let mut pms = pre_master_secret();
    tls12::establish_master_secret(&mut params, &Ring, &mut pms).unwrap();
    assert!(!pms.is_alive());

    assert_eq!(
        bytes(params.master_secret()),
        "6a313cc40536dbd7624c1798a5dff6902c34ecbcf76f9c0326ecedba173e9160\
         caded395f4a946ad01903c9a42de3af1"
    );

    let export = |context: Option<&[u8]>| {
        hex::encode(
            tls12::export_keying_material(&params, &Ring, b"EXPERIMENTAL test", context, 32)
                .unwrap(),
        )
    };
    assert_eq!(
        export(None),
        "6dc33cf8b106953cf0f872e9f35f88b1487a612dfd41775377a949243de1f2ac"
    );
    assert_eq!(
        export(Some(&b"ctx"[..])),
        "78d54cf5dcd3c508351dc2e7cced72292ae205b422b3e71b16cdb498b2682e41"
    );
    // unlike TLS 1.3, an empty context differs from none
    assert_eq!(
        export(Some(&b""[..])),
        "bef56eba8ab2a05fd02f5aaee581bd9c3cfc83e9d6043c528ee83b0cf2b16c3c"
    );

    assert_eq!(
        tls12::export_keying_material(
            &params,
            &Ring,
            b"EXPERIMENTAL test",
            Some(&[0u8; 0x10000][..]),
            32
        ),
        Err(Error::from(ApiMisuse::ExporterContextTooLong))
    );
}

#[test]
fn tls12_extended_master_secret() {
    init();
    let mut params = tls12_params(
        ProtocolVersion::TLSv1_2,
        CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
    );
    params.set_extended_master_secret(true);
    let session_hash = ring::digest::digest(&ring::digest::SHA256, b"handshake so far");
    params.set_session_hash(session_hash.as_ref());

    tls12::establish_master_secret(&mut params, &Ring, &mut pre_master_secret()).unwrap();
    assert_eq!(
        bytes(params.master_secret()),
        "c237a98b60d6e0a64cdfd7da73072fc31ef5636eb5974f61c4316ae39121e845\
         514e0085055d3131f86680b84f603b41"
    );
    assert_eq!(tls12::check_extended_master_secret(&params, true), Ok(()));
}

#[test]
fn tls10_legacy_prf_master_secret() {
    init();
    let mut params = tls12_params(
        ProtocolVersion::TLSv1_0,
        CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA,
    );
    assert_eq!(params.prf(), Some(PrfAlgorithm::TlsPrfLegacy));
    assert_eq!(params.prf_hash(), None);

    tls12::establish_master_secret(&mut params, &Ring, &mut pre_master_secret()).unwrap();
    assert_eq!(
        bytes(params.master_secret()),
        "bd66c289f2e0843311b03550327cce83da80208d57dc8f3523d308b14efd51ca\
         92ee9ba602355fcb4b01048edd2aab81"
    );
}

#[test]
fn tls13_schedule_rejects_tls12_session() {
    let mut params = tls12_params(
        ProtocolVersion::TLSv1_2,
        CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
    );
    assert_eq!(
        tls13::establish_phase_secrets(&mut params, &Ring, None, None),
        Err(Error::ApiMisuse(ApiMisuse::UnsupportedForProtocolVersion))
    );
}
