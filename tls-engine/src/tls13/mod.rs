//! The TLS 1.3 key schedule, as transitions of [`SecurityParameters`].
//!
//! ```text
//!              0
//!              |
//!   PSK ->  HKDF-Extract = Early Secret  --> c e traffic, e exp master
//!              |
//!        Derive-Secret(., "derived", "")
//!              |
//! (EC)DHE -> HKDF-Extract = Handshake Secret  --> c hs traffic, s hs traffic
//!              |
//!        Derive-Secret(., "derived", "")
//!              |
//!   0 -> HKDF-Extract = Master Secret  --> c ap traffic, s ap traffic,
//!                                          exp master, res master
//! ```

use std::boxed::Box;
use std::vec::Vec;

use crate::crypto::cipher::{AeadKey, Iv, MessageDecrypter, MessageEncrypter, RecordProtection};
use crate::crypto::{CryptoProvider, SharedSecret};
use crate::enums::ProtocolVersion;
use crate::error::{ApiMisuse, Error};
use crate::log::trace;
use crate::msgs::enums::HashAlgorithm;
use crate::secret::TlsSecret;
use crate::security_params::{SecurityParameters, Side};
use crate::suites::CipherSuiteDescriptor;

/// The HKDF-based secret derivations of RFC 8446 section 7.1.
pub mod key_schedule;

use key_schedule::{KeyScheduleSuite, SecretKind};

/// Derive the early, handshake and master secrets.
///
/// An absent `psk` or `ecdhe` is replaced by `HashLen` zero bytes.  The
/// PSK is consumed.  This may only happen once per handshake.
pub fn establish_phase_secrets(
    params: &mut SecurityParameters,
    provider: &dyn CryptoProvider,
    psk: Option<TlsSecret>,
    ecdhe: Option<&SharedSecret>,
) -> Result<(), Error> {
    if params.early_secret.is_some()
        || params.handshake_secret.is_some()
        || params.master_secret.is_some()
    {
        return Err(ApiMisuse::PhaseSecretsAlreadyEstablished.into());
    }

    let suite = schedule_suite(params, provider)?;
    let zeroes = TlsSecret::zeroes(suite.hash_len());

    let early = match psk {
        Some(mut psk) => {
            let early = suite.extract(None, psk.bytes()?);
            psk.destroy();
            early?
        }
        None => suite.extract(None, zeroes.bytes()?)?,
    };

    let salt = suite.derive_for_empty_hash(&early, SecretKind::DerivedSecret)?;
    let handshake = match ecdhe {
        Some(shared) => suite.extract(Some(&salt), shared.secret_bytes())?,
        None => suite.extract(Some(&salt), zeroes.bytes()?)?,
    };

    let salt = suite.derive_for_empty_hash(&handshake, SecretKind::DerivedSecret)?;
    let master = suite.extract(Some(&salt), zeroes.bytes()?)?;

    params.early_secret = Some(early);
    params.handshake_secret = Some(handshake);
    params.master_secret = Some(master);
    trace!("established phase secrets");
    Ok(())
}

/// Derive the early exporter master secret, and the client early traffic
/// secret if early data was offered.
///
/// `client_hello_hash` is the transcript hash through the ClientHello.
pub fn establish_phase_early(
    params: &mut SecurityParameters,
    provider: &dyn CryptoProvider,
    client_hello_hash: &[u8],
    early_data_offered: bool,
) -> Result<(), Error> {
    let suite = schedule_suite(params, provider)?;
    let early = require(&params.early_secret, "early secret")?;

    if early_data_offered {
        params.traffic_secret_client =
            Some(suite.derive(early, SecretKind::ClientEarlyTrafficSecret, client_hello_hash)?);
    }

    params.early_exporter_master_secret =
        Some(suite.derive(early, SecretKind::EarlyExporterMasterSecret, client_hello_hash)?);
    trace!("entered early phase");
    Ok(())
}

/// Derive the handshake traffic secrets, and record protection for our side.
///
/// `server_hello_hash` is the transcript hash through the ServerHello.
/// The handshake traffic secrets also become the Finished base keys.  The
/// early secret is retired.
pub fn establish_phase_handshake(
    params: &mut SecurityParameters,
    provider: &dyn CryptoProvider,
    server_hello_hash: &[u8],
) -> Result<RecordProtection, Error> {
    let suite = schedule_suite(params, provider)?;
    let handshake = require(&params.handshake_secret, "handshake secret")?;

    let client =
        suite.derive(handshake, SecretKind::ClientHandshakeTrafficSecret, server_hello_hash)?;
    let server =
        suite.derive(handshake, SecretKind::ServerHandshakeTrafficSecret, server_hello_hash)?;

    params.base_key_client = Some(client.copy()?);
    params.base_key_server = Some(server.copy()?);
    params.traffic_secret_client = Some(client);
    params.traffic_secret_server = Some(server);
    params.early_secret = None;

    trace!("entered handshake phase");
    record_protection(params, provider)
}

/// Derive the application traffic secrets and the exporter master secret,
/// and record protection for our side.
///
/// `server_finished_hash` is the transcript hash through the server
/// Finished.  The handshake secret is retired; the Finished base keys are
/// kept for the client Finished.
pub fn establish_phase_application(
    params: &mut SecurityParameters,
    provider: &dyn CryptoProvider,
    server_finished_hash: &[u8],
) -> Result<RecordProtection, Error> {
    let suite = schedule_suite(params, provider)?;
    let master = require(&params.master_secret, "master secret")?;

    let client = suite.derive(
        master,
        SecretKind::ClientApplicationTrafficSecret,
        server_finished_hash,
    )?;
    let server = suite.derive(
        master,
        SecretKind::ServerApplicationTrafficSecret,
        server_finished_hash,
    )?;
    let exporter = suite.derive(master, SecretKind::ExporterMasterSecret, server_finished_hash)?;

    params.traffic_secret_client = Some(client);
    params.traffic_secret_server = Some(server);
    params.exporter_master_secret = Some(exporter);
    params.handshake_secret = None;

    trace!("entered application phase");
    record_protection(params, provider)
}

/// Derive the resumption master secret and retire the master secret.
///
/// `client_finished_hash` is the transcript hash through the client Finished.
pub fn establish_resumption_master_secret(
    params: &mut SecurityParameters,
    provider: &dyn CryptoProvider,
    client_finished_hash: &[u8],
) -> Result<(), Error> {
    let suite = schedule_suite(params, provider)?;
    let master = require(&params.master_secret, "master secret")?;

    params.resumption_master_secret =
        Some(suite.derive(master, SecretKind::ResumptionMasterSecret, client_finished_hash)?);
    params.master_secret = None;
    params.base_key_client = None;
    params.base_key_server = None;
    Ok(())
}

/// The PSK for a ticket issued with `nonce` (RFC 8446 section 4.6.1).
pub fn derive_ticket_psk(
    params: &SecurityParameters,
    provider: &dyn CryptoProvider,
    nonce: &[u8],
) -> Result<TlsSecret, Error> {
    let suite = schedule_suite(params, provider)?;
    let rms = require(&params.resumption_master_secret, "resumption master secret")?;
    suite.expand_label(rms, b"resumption", nonce, suite.hash_len())
}

/// Ratchet the traffic secret for records sent by `side` (RFC 8446 section 7.2).
///
/// The superseded secret is destroyed.  Each direction is updated
/// independently.
pub fn update_traffic_secret(
    params: &mut SecurityParameters,
    provider: &dyn CryptoProvider,
    side: Side,
) -> Result<(), Error> {
    let suite = schedule_suite(params, provider)?;
    let slot = match side {
        Side::Client => &mut params.traffic_secret_client,
        Side::Server => &mut params.traffic_secret_server,
    };
    let current = slot
        .as_mut()
        .ok_or(ApiMisuse::MissingNegotiatedValue("traffic secret"))?;

    let next = suite.expand_label(current, b"traffic upd", &[], suite.hash_len())?;
    current.destroy();
    *slot = Some(next);
    trace!("updated {side:?} traffic secret");
    Ok(())
}

/// The Finished contents for `base_key` over `transcript_hash`.
pub(crate) fn verify_data(
    provider: &dyn CryptoProvider,
    hash: HashAlgorithm,
    base_key: &TlsSecret,
    transcript_hash: &[u8],
) -> Result<Vec<u8>, Error> {
    let suite = KeyScheduleSuite::new(provider, hash)?;
    let finished_key = suite.expand_label(base_key, b"finished", &[], suite.hash_len())?;
    suite.hmac_sign(&finished_key, transcript_hash)
}

/// The key and IV protecting records sent by `side` under its current
/// traffic secret.
pub fn traffic_keys(
    params: &SecurityParameters,
    provider: &dyn CryptoProvider,
    side: Side,
) -> Result<(AeadKey, Iv), Error> {
    let suite = schedule_suite(params, provider)?;
    let secret = params
        .traffic_secret(side)
        .ok_or(ApiMisuse::MissingNegotiatedValue("traffic secret"))?;
    let encryption = descriptor(params)?.encryption;

    let key = suite.expand_label(secret, b"key", &[], encryption.key_len())?;
    let iv = suite.expand_label(
        secret,
        b"iv",
        &[],
        encryption.fixed_iv_len(ProtocolVersion::TLSv1_3),
    )?;
    Ok((AeadKey::new(key.bytes()?)?, Iv::copy(iv.bytes()?)?))
}

/// Protection for records we send, under our current traffic secret.
pub fn encrypter(
    params: &SecurityParameters,
    provider: &dyn CryptoProvider,
) -> Result<Box<dyn MessageEncrypter>, Error> {
    let (key, iv) = traffic_keys(params, provider, params.side)?;
    record_cipher(params, provider)?.encrypter(ProtocolVersion::TLSv1_3, key, iv.as_ref())
}

/// Protection for records the peer sends, under its current traffic secret.
pub fn decrypter(
    params: &SecurityParameters,
    provider: &dyn CryptoProvider,
) -> Result<Box<dyn MessageDecrypter>, Error> {
    let (key, iv) = traffic_keys(params, provider, params.side.peer())?;
    record_cipher(params, provider)?.decrypter(ProtocolVersion::TLSv1_3, key, iv.as_ref())
}

/// RFC 5705 keying material from the exporter master secret (RFC 8446 section 7.5).
///
/// An absent `context` and an empty one give the same output.
pub fn export_keying_material(
    params: &SecurityParameters,
    provider: &dyn CryptoProvider,
    label: &[u8],
    context: Option<&[u8]>,
    len: usize,
) -> Result<Vec<u8>, Error> {
    let secret = require(&params.exporter_master_secret, "exporter master secret")?;
    export(params, provider, secret, label, context, len)
}

/// Keying material from the early exporter master secret.
pub fn export_early_keying_material(
    params: &SecurityParameters,
    provider: &dyn CryptoProvider,
    label: &[u8],
    context: Option<&[u8]>,
    len: usize,
) -> Result<Vec<u8>, Error> {
    let secret = require(
        &params.early_exporter_master_secret,
        "early exporter master secret",
    )?;
    export(params, provider, secret, label, context, len)
}

fn export(
    params: &SecurityParameters,
    provider: &dyn CryptoProvider,
    secret: &TlsSecret,
    label: &[u8],
    context: Option<&[u8]>,
    len: usize,
) -> Result<Vec<u8>, Error> {
    let suite = schedule_suite(params, provider)?;
    let h_empty = suite.hash.hash(&[]);
    let derived = suite.expand_label(secret, label, h_empty.as_ref(), suite.hash_len())?;

    let h_context = suite.hash.hash(context.unwrap_or(&[]));
    let mut out = suite
        .expand_label(&derived, b"exporter", h_context.as_ref(), len)
        .map_err(|err| match err {
            Error::ApiMisuse(ApiMisuse::KeyDerivationOutputTooLong) => {
                ApiMisuse::ExporterOutputTooLong.into()
            }
            err => err,
        })?;
    out.extract()
}

fn record_protection(
    params: &SecurityParameters,
    provider: &dyn CryptoProvider,
) -> Result<RecordProtection, Error> {
    Ok(RecordProtection {
        encrypter: encrypter(params, provider)?,
        decrypter: decrypter(params, provider)?,
    })
}

fn record_cipher(
    params: &SecurityParameters,
    provider: &dyn CryptoProvider,
) -> Result<&'static dyn crate::crypto::cipher::RecordCipherAlgorithm, Error> {
    provider
        .record_cipher(descriptor(params)?.encryption)
        .ok_or_else(|| ApiMisuse::AlgorithmNotProvided.into())
}

fn descriptor(params: &SecurityParameters) -> Result<&'static CipherSuiteDescriptor, Error> {
    let suite = params
        .cipher_suite
        .ok_or(ApiMisuse::MissingNegotiatedValue("cipher suite"))?;
    CipherSuiteDescriptor::lookup(suite).ok_or_else(|| ApiMisuse::UnknownCipherSuite.into())
}

fn schedule_suite(
    params: &SecurityParameters,
    provider: &dyn CryptoProvider,
) -> Result<KeyScheduleSuite, Error> {
    if !params.require_version()?.is_tls13_or_later() {
        return Err(ApiMisuse::UnsupportedForProtocolVersion.into());
    }
    KeyScheduleSuite::new(provider, params.require_prf_hash()?)
}

fn require<'a>(secret: &'a Option<TlsSecret>, what: &'static str) -> Result<&'a TlsSecret, Error> {
    secret
        .as_ref()
        .ok_or(ApiMisuse::MissingNegotiatedValue(what).into())
}
