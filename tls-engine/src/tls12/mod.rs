//! The key schedule of TLS 1.2 and earlier, as transitions of [`SecurityParameters`].

use std::vec::Vec;

use zeroize::Zeroizing;

use crate::crypto::cipher::{AeadKey, RecordProtection};
use crate::crypto::CryptoProvider;
use crate::enums::ProtocolVersion;
use crate::error::{ApiMisuse, Error, PeerIncompatible};
use crate::log::trace;
use crate::secret::TlsSecret;
use crate::security_params::{SecurityParameters, Side, RANDOM_LEN};
use crate::suites::{CipherSuiteDescriptor, PrfAlgorithm};

pub(crate) mod ssl3;

/// Length of the master secret.
pub const MASTER_SECRET_LEN: usize = 48;

/// The master secret for `pre_master_secret`, which is destroyed.
///
/// With the extended master secret (RFC 7627) the seed is the session
/// hash; otherwise it is the client and server randoms.
pub fn calculate_master_secret(
    params: &SecurityParameters,
    provider: &dyn CryptoProvider,
    pre_master_secret: &mut TlsSecret,
) -> Result<TlsSecret, Error> {
    let prf = params.require_prf()?;

    let master = match params.extended_master_secret {
        true => {
            let session_hash = params
                .session_hash
                .as_deref()
                .ok_or(ApiMisuse::MissingNegotiatedValue("session hash"))?;
            pre_master_secret.derive_prf(
                provider,
                prf,
                b"extended master secret",
                session_hash,
                MASTER_SECRET_LEN,
            )
        }
        false => pre_master_secret.derive_prf(
            provider,
            prf,
            b"master secret",
            &join_randoms(&params.client_random, &params.server_random),
            MASTER_SECRET_LEN,
        ),
    };

    pre_master_secret.destroy();
    master
}

/// Derive the master secret from `pre_master_secret` and keep it.
pub fn establish_master_secret(
    params: &mut SecurityParameters,
    provider: &dyn CryptoProvider,
    pre_master_secret: &mut TlsSecret,
) -> Result<(), Error> {
    let master = calculate_master_secret(params, provider, pre_master_secret)?;
    params.master_secret = Some(master);
    trace!(
        "established master secret (extended: {})",
        params.extended_master_secret
    );
    Ok(())
}

/// Reject a resumption or full handshake without the extended master
/// secret when `required`.
pub fn check_extended_master_secret(
    params: &SecurityParameters,
    required: bool,
) -> Result<(), Error> {
    match required && !params.extended_master_secret {
        true => Err(PeerIncompatible::ExtendedMasterSecretExtensionRequired.into()),
        false => Ok(()),
    }
}

/// The Finished contents sent by `sender`, over `handshake_hash`.
pub(crate) fn verify_data(
    provider: &dyn CryptoProvider,
    prf: PrfAlgorithm,
    master_secret: &TlsSecret,
    handshake_hash: &[u8],
    sender: Side,
    len: usize,
) -> Result<Vec<u8>, Error> {
    let label: &[u8] = match sender {
        Side::Client => b"client finished",
        Side::Server => b"server finished",
    };
    master_secret
        .derive_prf(provider, prf, label, handshake_hash, len)?
        .extract()
}

/// `len` bytes of key material from the master secret.
///
/// The seed is the server random followed by the client random.
pub fn key_block(
    params: &SecurityParameters,
    provider: &dyn CryptoProvider,
    len: usize,
) -> Result<TlsSecret, Error> {
    params.require_master_secret()?.derive_prf(
        provider,
        params.require_prf()?,
        b"key expansion",
        &join_randoms(&params.server_random, &params.client_random),
        len,
    )
}

/// The lengths of one side's MAC key, encryption key and implicit IV.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyBlockLayout {
    /// Record MAC key length.
    pub mac_key_len: usize,
    /// Encryption key length.
    pub enc_key_len: usize,
    /// Implicit IV length.
    pub fixed_iv_len: usize,
}

impl KeyBlockLayout {
    /// The layout for `suite` under `version`.
    pub fn new(suite: &CipherSuiteDescriptor, version: ProtocolVersion) -> Self {
        Self {
            mac_key_len: suite.mac.key_len(),
            enc_key_len: suite.encryption.key_len(),
            fixed_iv_len: suite.encryption.fixed_iv_len(version),
        }
    }

    /// Length of the whole key block, for both sides.
    pub fn len(&self) -> usize {
        2 * (self.mac_key_len + self.enc_key_len + self.fixed_iv_len)
    }

    /// Whether the key block is empty, as for the null cipher and MAC.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Record protection for our side, from the key block.
///
/// The key block is `client MAC || server MAC || client key || server key
/// || client IV || server IV`.  Only ciphers the provider supplies can be
/// installed.
pub fn record_protection(
    params: &SecurityParameters,
    provider: &dyn CryptoProvider,
) -> Result<RecordProtection, Error> {
    let version = params.require_version()?;
    if version.is_tls13_or_later() {
        return Err(ApiMisuse::UnsupportedForProtocolVersion.into());
    }

    let suite = params
        .cipher_suite
        .and_then(CipherSuiteDescriptor::lookup)
        .ok_or(ApiMisuse::MissingNegotiatedValue("cipher suite"))?;
    let cipher = provider
        .record_cipher(suite.encryption)
        .ok_or(ApiMisuse::AlgorithmNotProvided)?;

    let layout = KeyBlockLayout::new(suite, version);
    let block = Zeroizing::new(key_block(params, provider, layout.len())?.extract()?);

    let (_client_mac, rest) = block.split_at(layout.mac_key_len);
    let (_server_mac, rest) = rest.split_at(layout.mac_key_len);
    let (client_key, rest) = rest.split_at(layout.enc_key_len);
    let (server_key, rest) = rest.split_at(layout.enc_key_len);
    let (client_iv, server_iv) = rest.split_at(layout.fixed_iv_len);

    let (write_key, write_iv, read_key, read_iv) = match params.side {
        Side::Client => (client_key, client_iv, server_key, server_iv),
        Side::Server => (server_key, server_iv, client_key, client_iv),
    };

    Ok(RecordProtection {
        encrypter: cipher.encrypter(version, AeadKey::new(write_key)?, write_iv)?,
        decrypter: cipher.decrypter(version, AeadKey::new(read_key)?, read_iv)?,
    })
}

/// The RFC 5705 exporter seed: the randoms, then the length-prefixed context.
pub fn exporter_seed(params: &SecurityParameters, context: Option<&[u8]>) -> Result<Vec<u8>, Error> {
    let mut seed = join_randoms(&params.client_random, &params.server_random).to_vec();

    if let Some(context) = context {
        let len = u16::try_from(context.len()).map_err(|_| ApiMisuse::ExporterContextTooLong)?;
        seed.extend_from_slice(&len.to_be_bytes());
        seed.extend_from_slice(context);
    }

    Ok(seed)
}

/// RFC 5705 keying material from the master secret.
pub fn export_keying_material(
    params: &SecurityParameters,
    provider: &dyn CryptoProvider,
    label: &[u8],
    context: Option<&[u8]>,
    len: usize,
) -> Result<Vec<u8>, Error> {
    if params.require_version()?.is_tls13_or_later() {
        return Err(ApiMisuse::UnsupportedForProtocolVersion.into());
    }

    let seed = exporter_seed(params, context)?;
    params
        .require_master_secret()?
        .derive_prf(provider, params.require_prf()?, label, &seed, len)?
        .extract()
}

fn join_randoms(first: &[u8; RANDOM_LEN], second: &[u8; RANDOM_LEN]) -> [u8; 2 * RANDOM_LEN] {
    let mut randoms = [0u8; 2 * RANDOM_LEN];
    randoms[..RANDOM_LEN].copy_from_slice(first);
    randoms[RANDOM_LEN..].copy_from_slice(second);
    randoms
}
