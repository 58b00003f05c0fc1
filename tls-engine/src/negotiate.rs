//! Negotiation policy: which suite, which group, which key share, and the
//! checks on what the peer selected.

use core::fmt;
use std::boxed::Box;
use std::vec::Vec;

use pki_types::{CertificateDer, PrivateKeyDer};
use subtle::ConstantTimeEq;

use crate::crypto::signer::{CertifiedKey, Signer};
use crate::crypto::{ActiveKeyExchange, CryptoProvider};
use crate::enums::{CipherSuite, HandshakeType, ProtocolVersion};
use crate::error::{ApiMisuse, Error, InvalidMessage, PeerIncompatible, PeerMisbehaved};
use crate::hash_hs::HandshakeHash;
use crate::log::{debug, trace, warn};
use crate::msgs::enums::{ClientCertificateType, ExtensionType, NamedGroup};
use crate::msgs::handshake::{CertificateRequest, KeyShareEntry, SignatureAndHashAlgorithm};
use crate::sign;
use crate::suites::{self, KeyExchangeAlgorithm};

/// The suites in both `peer` and `local`, without repeats.
///
/// They are ordered as in `local` if `use_local_order`, else as in `peer`.
pub fn common_cipher_suites(
    peer: &[CipherSuite],
    local: &[CipherSuite],
    use_local_order: bool,
) -> Vec<CipherSuite> {
    let (ordered, unordered) = match use_local_order {
        true => (local, peer),
        false => (peer, local),
    };

    let mut common = Vec::with_capacity(ordered.len().min(unordered.len()));
    for suite in ordered {
        if !common.contains(suite) && unordered.contains(suite) {
            common.push(*suite);
        }
    }
    common
}

/// The first suite in both lists, in the order given by `use_local_order`,
/// that is valid at `version`.
pub fn common_cipher_suite13(
    version: ProtocolVersion,
    peer: &[CipherSuite],
    local: &[CipherSuite],
    use_local_order: bool,
) -> Option<CipherSuite> {
    let (ordered, unordered) = match use_local_order {
        true => (local, peer),
        false => (peer, local),
    };

    let suite = ordered
        .iter()
        .copied()
        .find(|suite| unordered.contains(suite) && is_valid_version_for_cipher_suite(*suite, version));
    debug!("common cipher suite at {version:?}: {suite:?}");
    suite
}

/// Whether `suite` may be used at `version`.
///
/// TLS 1.3 suites are only for TLS 1.3.  Earlier suites may be used from
/// their minimum version up to, but excluding, TLS 1.3.
pub fn is_valid_version_for_cipher_suite(suite: CipherSuite, version: ProtocolVersion) -> bool {
    let (Some(version), Some(minimum)) = (
        version.equivalent_tls_version(),
        suites::minimum_version(suite),
    ) else {
        return false;
    };

    if minimum == version {
        return true;
    }
    if !minimum.is_earlier_version_of(version) {
        return false;
    }

    ProtocolVersion::TLSv1_3.is_equal_or_earlier_version_of(minimum)
        || ProtocolVersion::TLSv1_3.is_later_version_of(version)
}

/// Whether a server may select `suite`, having been offered `offered`.
pub fn is_valid_cipher_suite_selection(offered: &[CipherSuite], suite: CipherSuite) -> bool {
    offered.contains(&suite) && suite != CipherSuite::TLS_NULL_WITH_NULL_NULL && !suite.is_scsv()
}

/// Check the suite a server selected at `version`, as the client that
/// `offered` the list.
pub fn check_cipher_suite_selection(
    version: ProtocolVersion,
    offered: &[CipherSuite],
    suite: CipherSuite,
) -> Result<(), Error> {
    let error = if !offered.contains(&suite) {
        PeerMisbehaved::SelectedUnofferedCipherSuite
    } else if !is_valid_cipher_suite_selection(offered, suite) {
        PeerMisbehaved::SelectedInvalidCipherSuite
    } else if !is_valid_version_for_cipher_suite(suite, version) {
        PeerMisbehaved::SelectedUnsupportedVersionForCipherSuite
    } else {
        return Ok(());
    };

    warn!("server selected {suite:?} at {version:?}");
    Err(error.into())
}

/// Whether the provider can run a key agreement in `group`.
fn can_agree(provider: &dyn CryptoProvider, group: NamedGroup) -> bool {
    if !provider.has_named_group(group) {
        return false;
    }

    !(group.refers_to_a_specific_curve() && !provider.has_ecdh_agreement()
        || group.refers_to_a_specific_finite_field() && !provider.has_dh_agreement())
}

/// The group for a TLS 1.3 key share: the first of `client_groups` that is
/// permitted at `version`, in `server_groups`, and that `provider` can agree in.
///
/// `None` means the server must send a HelloRetryRequest, or give up.
pub fn select_key_share_group(
    provider: &dyn CryptoProvider,
    version: ProtocolVersion,
    client_groups: &[NamedGroup],
    server_groups: &[NamedGroup],
) -> Option<NamedGroup> {
    let group = client_groups.iter().copied().find(|group| {
        group.usable_for_version(version)
            && server_groups.contains(group)
            && can_agree(provider, *group)
    });

    if group.is_none() {
        debug!("no common key share group");
    }
    group
}

/// The first of the client's key shares the server can use.
///
/// Like [`select_key_share_group`], but only groups the client sent a share
/// for are candidates, in the order of its shares.
pub fn select_key_share<'a>(
    provider: &dyn CryptoProvider,
    version: ProtocolVersion,
    client_shares: &'a [KeyShareEntry],
    client_groups: &[NamedGroup],
    server_groups: &[NamedGroup],
) -> Option<&'a KeyShareEntry> {
    client_shares.iter().find(|share| {
        share.group.usable_for_version(version)
            && server_groups.contains(&share.group)
            && client_groups.contains(&share.group)
            && can_agree(provider, share.group)
    })
}

/// The client's key share after a HelloRetryRequest for `group`.
///
/// The retried `ClientHello` must carry exactly one share, of that group.
pub fn select_key_share_for_retry(
    client_shares: &[KeyShareEntry],
    group: NamedGroup,
) -> Option<&KeyShareEntry> {
    match client_shares {
        [share] if share.group == group => Some(share),
        _ => None,
    }
}

/// A client's ephemeral key agreements, one per group it sent a share for.
#[derive(Default)]
pub struct ClientKeyShares {
    agreements: Vec<Box<dyn ActiveKeyExchange>>,
}

impl ClientKeyShares {
    /// The `key_share` entries to send, in the order the groups were offered.
    pub fn entries(&self) -> Vec<KeyShareEntry> {
        self.agreements
            .iter()
            .map(|kx| KeyShareEntry::new(kx.group(), kx.pub_key()))
            .collect()
    }

    /// The groups shares were sent for.
    pub fn groups(&self) -> Vec<NamedGroup> {
        self.agreements
            .iter()
            .map(|kx| kx.group())
            .collect()
    }

    /// Whether a share for `group` was sent.
    pub fn contains(&self, group: NamedGroup) -> bool {
        self.agreements
            .iter()
            .any(|kx| kx.group() == group)
    }

    /// Take the agreement for `group`, to complete it with the server's share.
    pub fn take(&mut self, group: NamedGroup) -> Option<Box<dyn ActiveKeyExchange>> {
        let pos = self
            .agreements
            .iter()
            .position(|kx| kx.group() == group)?;
        Some(self.agreements.remove(pos))
    }

    /// Number of shares.
    pub fn len(&self) -> usize {
        self.agreements.len()
    }

    /// Whether no shares were made.
    pub fn is_empty(&self) -> bool {
        self.agreements.is_empty()
    }

    /// Start an agreement for each of `supported_groups` that is also in
    /// `share_groups`, skipping groups already agreed or that `provider`
    /// cannot agree in.
    fn collect(
        &mut self,
        provider: &dyn CryptoProvider,
        supported_groups: &[NamedGroup],
        share_groups: &[NamedGroup],
    ) -> Result<(), Error> {
        for group in supported_groups {
            if !share_groups.contains(group) || self.contains(*group) || !can_agree(provider, *group) {
                continue;
            }

            let Some(kx_group) = provider.kx_group(*group) else {
                continue;
            };
            trace!("starting key share for {group:?}");
            self.agreements.push(kx_group.start()?);
        }
        Ok(())
    }
}

impl fmt::Debug for ClientKeyShares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientKeyShares")
            .field("groups", &self.groups())
            .finish()
    }
}

/// The key shares for a first `ClientHello` offering up to `max_version`.
///
/// Shares are made for `share_groups` that appear in `supported_groups`.
/// Returns `None` when TLS 1.3 is not offered, so no `key_share` is sent.
/// An empty set of shares is valid.
pub fn add_early_key_shares(
    provider: &dyn CryptoProvider,
    max_version: ProtocolVersion,
    supported_groups: &[NamedGroup],
    share_groups: &[NamedGroup],
) -> Result<Option<ClientKeyShares>, Error> {
    if !max_version.is_tls13_or_later() {
        return Ok(None);
    }

    let mut shares = ClientKeyShares::default();
    shares.collect(provider, supported_groups, share_groups)?;
    debug!("early key shares for {:?}", shares.groups());
    Ok(Some(shares))
}

/// The key share for a `ClientHello` retried after a HelloRetryRequest
/// asking for `group`.
pub fn add_key_share_to_client_hello_retry(
    provider: &dyn CryptoProvider,
    group: NamedGroup,
) -> Result<ClientKeyShares, Error> {
    let mut shares = ClientKeyShares::default();
    shares.collect(provider, &[group], &[group])?;

    if shares.is_empty() {
        return Err(Error::Unreachable(
            "HelloRetryRequest accepted for a group we cannot agree in",
        ));
    }
    Ok(shares)
}

/// Whether a server's HelloRetryRequest may ask for `group`.
///
/// The group must be one we support, not one we already sent a share for,
/// and usable at `version`.
pub fn is_valid_key_share_selection(
    version: ProtocolVersion,
    client_groups: &[NamedGroup],
    sent: &ClientKeyShares,
    group: NamedGroup,
) -> bool {
    client_groups.contains(&group) && !sent.contains(group) && group.usable_for_version(version)
}

/// Check a HelloRetryRequest's `group` with [`is_valid_key_share_selection`].
pub fn check_hello_retry_group(
    version: ProtocolVersion,
    client_groups: &[NamedGroup],
    sent: &ClientKeyShares,
    group: NamedGroup,
) -> Result<(), Error> {
    if is_valid_key_share_selection(version, client_groups, sent, group) {
        return Ok(());
    }

    warn!("server asked to retry with {group:?}");
    Err(match sent.contains(group) {
        true => PeerMisbehaved::IllegalHelloRetryRequestWithOfferedGroup,
        false => PeerMisbehaved::IllegalHelloRetryRequestWithUnofferedNamedGroup,
    }
    .into())
}

/// Check the key share in a TLS 1.3 `ServerHello` against the shares we
/// `sent`.
///
/// After a HelloRetryRequest, `retry_group` is the group it asked for.
pub fn check_server_key_share(
    sent: &ClientKeyShares,
    retry_group: Option<NamedGroup>,
    share: &KeyShareEntry,
) -> Result<(), Error> {
    if retry_group.is_some_and(|group| group != share.group) {
        return Err(PeerMisbehaved::WrongGroupForKeyShare.into());
    }

    if !sent.contains(share.group) {
        warn!("server chose unoffered group {:?}", share.group);
        return Err(PeerMisbehaved::SelectedUnofferedKxGroup.into());
    }

    match share.payload.is_empty() {
        true => Err(PeerMisbehaved::SelectedInvalidKeyShare.into()),
        false => Ok(()),
    }
}

/// The last eight bytes of a TLS 1.3 server's random when it negotiates
/// TLS 1.2 (RFC 8446 section 4.1.3).
const DOWNGRADE_TLS12: [u8; 8] = *b"DOWNGRD\x01";

/// As [`DOWNGRADE_TLS12`], when negotiating TLS 1.1 or earlier.
const DOWNGRADE_TLS11: [u8; 8] = *b"DOWNGRD\x00";

fn has_marker(random: &[u8; 32], marker: &[u8; 8]) -> bool {
    bool::from(random[24..].ct_eq(marker))
}

/// Check a server random for a downgrade marker, as a client that supports
/// a version later than the negotiated `version`.
pub fn check_downgrade_marker(version: ProtocolVersion, random: &[u8; 32]) -> Result<(), Error> {
    let Some(version) = version.equivalent_tls_version() else {
        return Ok(());
    };

    if version.is_equal_or_earlier_version_of(ProtocolVersion::TLSv1_1)
        && has_marker(random, &DOWNGRADE_TLS11)
    {
        return Err(PeerMisbehaved::AttemptedDowngradeToTls11WhenTls12IsSupported.into());
    }

    if version.is_equal_or_earlier_version_of(ProtocolVersion::TLSv1_2)
        && has_marker(random, &DOWNGRADE_TLS12)
    {
        return Err(PeerMisbehaved::AttemptedDowngradeToTls12WhenTls13IsSupported.into());
    }

    Ok(())
}

/// Write the downgrade marker into a server random, as a server that
/// supports a version later than the negotiated `version`.
pub fn write_downgrade_marker(version: ProtocolVersion, random: &mut [u8; 32]) -> Result<(), Error> {
    let version = version
        .equivalent_tls_version()
        .ok_or(ApiMisuse::UnsupportedForProtocolVersion)?;

    let marker = if version == ProtocolVersion::TLSv1_2 {
        &DOWNGRADE_TLS12
    } else if version.is_equal_or_earlier_version_of(ProtocolVersion::TLSv1_1) {
        &DOWNGRADE_TLS11
    } else {
        return Err(ApiMisuse::UnsupportedForProtocolVersion.into());
    };

    random[24..].copy_from_slice(marker);
    Ok(())
}

/// A fresh server random for a handshake negotiated at `version` by a
/// server supporting up to `max_version`.
///
/// Carries the downgrade marker when a server supporting TLS 1.2 or later
/// settles for less than its best.
pub fn server_random(
    provider: &dyn CryptoProvider,
    version: ProtocolVersion,
    max_version: ProtocolVersion,
) -> Result<[u8; 32], Error> {
    let mut random = [0u8; 32];
    provider.fill_random(&mut random)?;

    let downgraded = match (
        version.equivalent_tls_version(),
        max_version.equivalent_tls_version(),
    ) {
        (Some(version), Some(max)) => {
            version.is_earlier_version_of(max)
                && ProtocolVersion::TLSv1_2.is_equal_or_earlier_version_of(max)
        }
        _ => false,
    };

    if downgraded {
        write_downgrade_marker(version, &mut random)?;
    }
    Ok(random)
}

/// Replace the transcript so far with its `message_hash`, on sending or
/// receiving a HelloRetryRequest.
pub fn adjust_transcript_for_retry(transcript: &mut HandshakeHash) {
    trace!("rolling up transcript for HelloRetryRequest");
    transcript.rollup_for_hrr();
}

/// The session id to offer for resumption: `stored` if it is a valid
/// non-empty id, else empty.
pub fn session_id(stored: Option<&[u8]>) -> &[u8] {
    match stored {
        Some(id) if (1..=32).contains(&id.len()) => id,
        _ => &[],
    }
}

/// Whether a TLS 1.3 `handshake` message may carry extension `typ`
/// (RFC 8446 section 4.2).
///
/// Unrecognised extensions are permitted anywhere.
pub fn is_permitted_extension_type13(handshake: HandshakeType, typ: ExtensionType) -> bool {
    use ExtensionType as E;
    use HandshakeType as H;

    match typ {
        E::ServerName
        | E::MaxFragmentLength
        | E::EllipticCurves
        | E::UseSRTP
        | E::Heartbeat
        | E::ALProtocolNegotiation
        | E::ClientCertificateType
        | E::ServerCertificateType => {
            matches!(handshake, H::ClientHello | H::EncryptedExtensions)
        }
        E::StatusRequest | E::SCT => {
            matches!(
                handshake,
                H::ClientHello | H::CertificateRequest | H::Certificate
            )
        }
        E::SignatureAlgorithms | E::CertificateAuthorities | E::SignatureAlgorithmsCert => {
            matches!(handshake, H::ClientHello | H::CertificateRequest)
        }
        E::Padding | E::PSKKeyExchangeModes | E::PostHandshakeAuth => handshake == H::ClientHello,
        E::KeyShare | E::SupportedVersions => matches!(
            handshake,
            H::ClientHello | H::ServerHello | H::HelloRetryRequest
        ),
        E::PreSharedKey => matches!(handshake, H::ClientHello | H::ServerHello),
        E::EarlyData => matches!(
            handshake,
            H::ClientHello | H::EncryptedExtensions | H::NewSessionTicket
        ),
        E::Cookie => matches!(handshake, H::ClientHello | H::HelloRetryRequest),
        E::OIDFilters => handshake == H::CertificateRequest,
        _ => !typ.is_recognized(),
    }
}

/// Check every one of `extensions` may appear in a TLS 1.3 `handshake`
/// message, failing with `error` otherwise.
pub fn check_extension_data13(
    extensions: &[ExtensionType],
    handshake: HandshakeType,
    error: PeerMisbehaved,
) -> Result<(), Error> {
    match extensions
        .iter()
        .find(|typ| !is_permitted_extension_type13(handshake, **typ))
    {
        Some(typ) => {
            warn!("{typ:?} extension is not permitted in {handshake:?}");
            Err(error.into())
        }
        None => Ok(()),
    }
}

/// Check the extension types of a TLS 1.3 `EncryptedExtensions` message,
/// as the client whose `ClientHello` carried `sent`.
///
/// Each type may appear once, must be permitted in `EncryptedExtensions`,
/// and must answer one we sent.
pub fn check_encrypted_extensions(
    received: &[ExtensionType],
    sent: &[ExtensionType],
) -> Result<(), Error> {
    for (i, typ) in received.iter().enumerate() {
        if received[..i].contains(typ) {
            return Err(InvalidMessage::DuplicateExtension(u16::from(*typ)).into());
        }
    }

    check_extension_data13(
        received,
        HandshakeType::EncryptedExtensions,
        PeerMisbehaved::DisallowedExtension,
    )?;

    match received.iter().find(|typ| !sent.contains(typ)) {
        Some(typ) => {
            warn!("unsolicited {typ:?} extension");
            Err(PeerMisbehaved::UnsolicitedEncryptedExtension.into())
        }
        None => Ok(()),
    }
}

/// The client certificate types usable with key exchange `kx` in TLS 1.2
/// and earlier.
///
/// Empty for key exchanges that never authenticate the client.
pub fn client_certificate_types(kx: KeyExchangeAlgorithm) -> &'static [ClientCertificateType] {
    use KeyExchangeAlgorithm::*;
    match kx {
        Rsa | DheDss | DheRsa | EcdheEcdsa | EcdheRsa => &[
            ClientCertificateType::DSSSign,
            ClientCertificateType::ECDSASign,
            ClientCertificateType::RSASign,
        ],
        DhDss | DhRsa => &[
            ClientCertificateType::DSSFixedDH,
            ClientCertificateType::RSAFixedDH,
        ],
        EcdhEcdsa | EcdhRsa => &[
            ClientCertificateType::ECDSAFixedECDH,
            ClientCertificateType::RSAFixedECDH,
        ],
        _ => &[],
    }
}

/// `request` with its certificate types narrowed to `valid`.
///
/// `None` if it asks for none of them.
pub fn normalize_certificate_request(
    request: CertificateRequest,
    valid: &[ClientCertificateType],
) -> Option<CertificateRequest> {
    if request
        .certificate_types
        .iter()
        .all(|typ| valid.contains(typ))
    {
        return Some(request);
    }

    let retained = valid
        .iter()
        .copied()
        .filter(|typ| request.certificate_types.contains(typ))
        .collect::<Vec<_>>();
    if retained.is_empty() {
        return None;
    }

    Some(CertificateRequest {
        certificate_types: retained,
        ..request
    })
}

/// Check a TLS 1.2-and-earlier `CertificateRequest` received under key
/// exchange `kx`, returning it narrowed to the usable certificate types.
pub fn validate_certificate_request(
    request: CertificateRequest,
    kx: KeyExchangeAlgorithm,
) -> Result<CertificateRequest, Error> {
    let valid = client_certificate_types(kx);
    if valid.is_empty() {
        return Err(PeerMisbehaved::UnexpectedCertificateRequest.into());
    }

    normalize_certificate_request(request, valid)
        .ok_or_else(|| PeerMisbehaved::CertificateRequestWithoutUsableCertificateTypes.into())
}

/// How we authenticate, resolved once when the suite is known.
#[derive(Debug)]
pub enum Credentials {
    /// Static (EC)DH: the certificate carries our key agreement key.
    Agreement(AgreementCredentials),
    /// RSA key transport: the peer encrypts the premaster secret to us.
    Decryptor(DecryptorCredentials),
    /// We sign the handshake.
    Signer(SignerCredentials),
}

impl Credentials {
    /// Signing credentials for `key`, choosing from the peer's `offered`
    /// signature algorithms at `version`.
    ///
    /// Before TLS 1.2 the key's legacy signer is used.  A TLS 1.2 peer that
    /// sent no list is taken to offer the SHA-1 defaults, while a TLS 1.3
    /// peer must send one.
    pub fn for_signing(
        key: CertifiedKey,
        version: ProtocolVersion,
        offered: Option<&[SignatureAndHashAlgorithm]>,
    ) -> Result<Self, Error> {
        let signer = match (version.allows_signature_algorithms(), offered) {
            (false, _) => key.key.legacy_signer(),
            (true, Some(offered)) => key.key.choose_algorithm(offered),
            (true, None) if version.is_tls13_or_later() => {
                return Err(PeerIncompatible::SignatureAlgorithmsExtensionRequired.into());
            }
            (true, None) => key
                .key
                .choose_algorithm(sign::default_signature_algorithms()),
        };

        match signer {
            Some(signer) => {
                debug!("signing with {:?}", signer.algorithm());
                Ok(Self::Signer(SignerCredentials {
                    certified_key: key,
                    signer,
                }))
            }
            None => Err(PeerIncompatible::NoSignatureSchemesInCommon.into()),
        }
    }

    /// These credentials, if they are for key agreement.
    pub fn require_agreement(&self) -> Result<&AgreementCredentials, Error> {
        match self {
            Self::Agreement(creds) => Ok(creds),
            _ => Err(ApiMisuse::UnexpectedCredentialKind.into()),
        }
    }

    /// These credentials, if they are for decryption.
    pub fn require_decryptor(&self) -> Result<&DecryptorCredentials, Error> {
        match self {
            Self::Decryptor(creds) => Ok(creds),
            _ => Err(ApiMisuse::UnexpectedCredentialKind.into()),
        }
    }

    /// These credentials, if they are for signing.
    pub fn require_signer(&self) -> Result<&SignerCredentials, Error> {
        match self {
            Self::Signer(creds) => Ok(creds),
            _ => Err(ApiMisuse::UnexpectedCredentialKind.into()),
        }
    }
}

/// A certificate chain with the private key for its static key agreement.
pub struct AgreementCredentials {
    /// The certificate chain, end-entity first.
    pub cert: Vec<CertificateDer<'static>>,
    /// The private key of the end-entity certificate.
    pub key: PrivateKeyDer<'static>,
}

impl fmt::Debug for AgreementCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgreementCredentials")
            .field("cert", &self.cert.len())
            .finish_non_exhaustive()
    }
}

/// A certificate chain with the private key that decrypts the premaster
/// secret.
pub struct DecryptorCredentials {
    /// The certificate chain, end-entity first.
    pub cert: Vec<CertificateDer<'static>>,
    /// The private key of the end-entity certificate.
    pub key: PrivateKeyDer<'static>,
}

impl fmt::Debug for DecryptorCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecryptorCredentials")
            .field("cert", &self.cert.len())
            .finish_non_exhaustive()
    }
}

/// A certified key and the signer chosen for this handshake.
#[derive(Debug)]
pub struct SignerCredentials {
    /// The certificate chain and key.
    pub certified_key: CertifiedKey,
    /// The signer, using the negotiated algorithm.
    pub signer: Box<dyn Signer>,
}

#[cfg(test)]
mod tests {
    use std::vec;

    use super::*;

    const A: CipherSuite = CipherSuite::TLS13_AES_128_GCM_SHA256;
    const B: CipherSuite = CipherSuite::TLS13_AES_256_GCM_SHA384;
    const C: CipherSuite = CipherSuite::TLS13_CHACHA20_POLY1305_SHA256;

    #[test]
    fn common_suites_follow_chosen_order() {
        assert_eq!(common_cipher_suites(&[A, B, C], &[C, A], true), vec![C, A]);
        assert_eq!(common_cipher_suites(&[A, B, C], &[C, A], false), vec![A, C]);
        assert_eq!(common_cipher_suites(&[A, A, B], &[B, A], false), vec![A, B]);
        assert!(common_cipher_suites(&[A], &[B], true).is_empty());
    }

    #[test]
    fn common_suite13_skips_suites_for_other_versions() {
        let tls12 = CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256;
        assert_eq!(
            common_cipher_suite13(ProtocolVersion::TLSv1_3, &[tls12, B], &[B, tls12], false),
            Some(B)
        );
        assert_eq!(
            common_cipher_suite13(ProtocolVersion::TLSv1_2, &[tls12, B], &[B, tls12], true),
            Some(tls12)
        );
        assert_eq!(
            common_cipher_suite13(ProtocolVersion::TLSv1_2, &[B], &[B], true),
            None
        );
    }

    #[test]
    fn version_validity_of_suites() {
        let tls12_only = CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256;
        let tls10 = CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA;

        assert!(!is_valid_version_for_cipher_suite(A, ProtocolVersion::TLSv1_2));
        assert!(is_valid_version_for_cipher_suite(A, ProtocolVersion::TLSv1_3));
        assert!(is_valid_version_for_cipher_suite(tls12_only, ProtocolVersion::TLSv1_2));
        assert!(is_valid_version_for_cipher_suite(tls12_only, ProtocolVersion::DTLSv1_2));
        assert!(!is_valid_version_for_cipher_suite(tls12_only, ProtocolVersion::TLSv1_1));
        assert!(!is_valid_version_for_cipher_suite(tls12_only, ProtocolVersion::TLSv1_3));
        assert!(is_valid_version_for_cipher_suite(tls10, ProtocolVersion::TLSv1_1));
        assert!(is_valid_version_for_cipher_suite(tls10, ProtocolVersion::DTLSv1_0));
        assert!(!is_valid_version_for_cipher_suite(
            CipherSuite::Unknown(0x1234),
            ProtocolVersion::TLSv1_2
        ));
    }

    #[test]
    fn cipher_suite_selection() {
        let offered = [A, CipherSuite::TLS_FALLBACK_SCSV, CipherSuite::TLS_NULL_WITH_NULL_NULL];
        assert!(is_valid_cipher_suite_selection(&offered, A));
        assert!(!is_valid_cipher_suite_selection(&offered, B));
        assert!(!is_valid_cipher_suite_selection(&offered, CipherSuite::TLS_FALLBACK_SCSV));
        assert!(!is_valid_cipher_suite_selection(
            &offered,
            CipherSuite::TLS_NULL_WITH_NULL_NULL
        ));
    }

    #[test]
    fn checking_the_server_selected_suite() {
        let offered = [A, CipherSuite::TLS_FALLBACK_SCSV, CipherSuite::TLS_NULL_WITH_NULL_NULL];
        assert_eq!(
            check_cipher_suite_selection(ProtocolVersion::TLSv1_3, &offered, A),
            Ok(())
        );
        assert_eq!(
            check_cipher_suite_selection(ProtocolVersion::TLSv1_3, &offered, B),
            Err(PeerMisbehaved::SelectedUnofferedCipherSuite.into())
        );
        assert_eq!(
            check_cipher_suite_selection(
                ProtocolVersion::TLSv1_3,
                &offered,
                CipherSuite::TLS_FALLBACK_SCSV
            ),
            Err(PeerMisbehaved::SelectedInvalidCipherSuite.into())
        );
        assert_eq!(
            check_cipher_suite_selection(
                ProtocolVersion::TLSv1_2,
                &offered,
                CipherSuite::TLS_NULL_WITH_NULL_NULL
            ),
            Err(PeerMisbehaved::SelectedInvalidCipherSuite.into())
        );
        assert_eq!(
            check_cipher_suite_selection(ProtocolVersion::TLSv1_2, &offered, A),
            Err(PeerMisbehaved::SelectedUnsupportedVersionForCipherSuite.into())
        );
    }

    #[test]
    fn encrypted_extensions_checks() {
        use ExtensionType as E;
        let sent = [E::ServerName, E::ALProtocolNegotiation, E::KeyShare, E::EarlyData];

        assert_eq!(check_encrypted_extensions(&[], &sent), Ok(()));
        assert_eq!(
            check_encrypted_extensions(&[E::ALProtocolNegotiation, E::ServerName], &sent),
            Ok(())
        );
        assert_eq!(
            check_encrypted_extensions(&[E::ServerName, E::ServerName], &sent),
            Err(InvalidMessage::DuplicateExtension(0).into())
        );
        assert_eq!(
            check_encrypted_extensions(&[E::KeyShare], &sent),
            Err(PeerMisbehaved::DisallowedExtension.into())
        );
        assert_eq!(
            check_encrypted_extensions(&[E::UseSRTP], &sent),
            Err(PeerMisbehaved::UnsolicitedEncryptedExtension.into())
        );
    }

    #[test]
    fn retry_share_must_be_single_and_matching() {
        let x25519 = KeyShareEntry::new(NamedGroup::X25519, vec![1u8; 32]);
        let p256 = KeyShareEntry::new(NamedGroup::secp256r1, vec![4u8; 65]);

        assert_eq!(
            select_key_share_for_retry(&[x25519.clone()], NamedGroup::X25519),
            Some(&x25519)
        );
        assert_eq!(select_key_share_for_retry(&[p256.clone()], NamedGroup::X25519), None);
        assert_eq!(
            select_key_share_for_retry(&[x25519, p256], NamedGroup::X25519),
            None
        );
        assert_eq!(select_key_share_for_retry(&[], NamedGroup::X25519), None);
    }

    #[test]
    fn downgrade_markers() {
        let mut random = [0u8; 32];
        write_downgrade_marker(ProtocolVersion::TLSv1_2, &mut random).unwrap();
        assert_eq!(&random[24..], b"DOWNGRD\x01");
        assert_eq!(
            check_downgrade_marker(ProtocolVersion::TLSv1_2, &random),
            Err(PeerMisbehaved::AttemptedDowngradeToTls12WhenTls13IsSupported.into())
        );
        assert_eq!(
            check_downgrade_marker(ProtocolVersion::TLSv1_1, &random),
            Err(PeerMisbehaved::AttemptedDowngradeToTls12WhenTls13IsSupported.into())
        );
        assert_eq!(check_downgrade_marker(ProtocolVersion::TLSv1_3, &random), Ok(()));

        let mut random = [0u8; 32];
        write_downgrade_marker(ProtocolVersion::DTLSv1_0, &mut random).unwrap();
        assert_eq!(&random[24..], b"DOWNGRD\x00");
        assert_eq!(
            check_downgrade_marker(ProtocolVersion::TLSv1_0, &random),
            Err(PeerMisbehaved::AttemptedDowngradeToTls11WhenTls12IsSupported.into())
        );
        // only TLS 1.1 and earlier look for this marker
        assert_eq!(check_downgrade_marker(ProtocolVersion::TLSv1_2, &random), Ok(()));
        assert_eq!(check_downgrade_marker(ProtocolVersion::TLSv1_1, &[0u8; 32]), Ok(()));

        assert_eq!(
            write_downgrade_marker(ProtocolVersion::TLSv1_3, &mut random),
            Err(ApiMisuse::UnsupportedForProtocolVersion.into())
        );
    }

    #[test]
    fn session_ids() {
        assert_eq!(session_id(None), b"");
        assert_eq!(session_id(Some(&[][..])), b"");
        assert_eq!(session_id(Some(&[7u8; 32][..])), &[7u8; 32]);
        assert_eq!(session_id(Some(&[7u8; 33][..])), b"");
    }

    #[test]
    fn tls13_extension_placement() {
        use ExtensionType as E;
        use HandshakeType as H;

        assert!(is_permitted_extension_type13(H::ClientHello, E::KeyShare));
        assert!(is_permitted_extension_type13(H::HelloRetryRequest, E::Cookie));
        assert!(!is_permitted_extension_type13(H::ServerHello, E::ServerName));
        assert!(is_permitted_extension_type13(H::EncryptedExtensions, E::ALProtocolNegotiation));
        assert!(is_permitted_extension_type13(H::Certificate, E::StatusRequest));
        assert!(!is_permitted_extension_type13(H::EncryptedExtensions, E::SignatureAlgorithms));
        assert!(is_permitted_extension_type13(H::NewSessionTicket, E::EarlyData));
        assert!(is_permitted_extension_type13(H::CertificateRequest, E::OIDFilters));
        assert!(!is_permitted_extension_type13(H::ClientHello, E::OIDFilters));
        assert!(!is_permitted_extension_type13(H::ClientHello, E::ExtendedMasterSecret));
        assert!(is_permitted_extension_type13(H::ServerHello, E::Unknown(0xfafa)));

        assert_eq!(
            check_extension_data13(
                &[E::KeyShare, E::SupportedVersions],
                H::ServerHello,
                PeerMisbehaved::DisallowedExtension
            ),
            Ok(())
        );
        assert_eq!(
            check_extension_data13(
                &[E::KeyShare, E::ServerName],
                H::ServerHello,
                PeerMisbehaved::DisallowedExtension
            ),
            Err(PeerMisbehaved::DisallowedExtension.into())
        );
    }

    fn request(types: Vec<ClientCertificateType>) -> CertificateRequest {
        CertificateRequest {
            certificate_types: types,
            supported_signature_algorithms: None,
            certificate_authorities: vec![b"ca".to_vec()],
        }
    }

    #[test]
    fn certificate_request_is_narrowed() {
        let req = request(vec![
            ClientCertificateType::RSASign,
            ClientCertificateType::RSAFixedDH,
        ]);
        let narrowed = validate_certificate_request(req, KeyExchangeAlgorithm::EcdheRsa).unwrap();
        assert_eq!(narrowed.certificate_types, vec![ClientCertificateType::RSASign]);
        assert_eq!(narrowed.certificate_authorities, vec![b"ca".to_vec()]);

        let all_valid = request(vec![ClientCertificateType::ECDSASign]);
        assert_eq!(
            normalize_certificate_request(all_valid.clone(), client_certificate_types(KeyExchangeAlgorithm::Rsa)),
            Some(all_valid)
        );
    }

    #[test]
    fn certificate_request_errors() {
        assert_eq!(
            validate_certificate_request(
                request(vec![ClientCertificateType::RSASign]),
                KeyExchangeAlgorithm::DhAnon
            ),
            Err(PeerMisbehaved::UnexpectedCertificateRequest.into())
        );
        assert_eq!(
            validate_certificate_request(
                request(vec![ClientCertificateType::RSAFixedDH]),
                KeyExchangeAlgorithm::EcdheEcdsa
            ),
            Err(PeerMisbehaved::CertificateRequestWithoutUsableCertificateTypes.into())
        );
    }

    #[test]
    fn credentials_kinds() {
        let creds = Credentials::Decryptor(DecryptorCredentials {
            cert: vec![CertificateDer::from(vec![0x30, 0x00])],
            key: PrivateKeyDer::Pkcs8(vec![1, 2, 3].into()),
        });
        assert!(creds.require_decryptor().is_ok());
        assert_eq!(
            creds.require_signer().err(),
            Some(ApiMisuse::UnexpectedCredentialKind.into())
        );
        assert_eq!(
            creds.require_agreement().err(),
            Some(ApiMisuse::UnexpectedCredentialKind.into())
        );
        assert!(!format!("{creds:?}").contains("[1, 2, 3]"));
    }

    #[cfg(feature = "ring")]
    mod with_ring {
        use std::sync::Arc;

        use pki_types::PrivatePkcs8KeyDer;
        use ring::rand::SystemRandom;
        use ring::signature::Ed25519KeyPair;

        use super::*;
        use crate::crypto::ring::Ring;
        use crate::crypto::{
            cipher, hash, hmac, GetRandomFailed, SigningKey, SupportedKxGroup,
        };
        use crate::hash_hs::HandshakeHashBuffer;
        use crate::msgs::enums::HashAlgorithm;
        use crate::suites::EncryptionAlgorithm;

        #[test]
        fn key_share_group_follows_client_order() {
            let client = [NamedGroup::FFDHE2048, NamedGroup::secp384r1, NamedGroup::X25519];
            let server = [NamedGroup::X25519, NamedGroup::secp384r1, NamedGroup::FFDHE2048];
            assert_eq!(
                select_key_share_group(&Ring, ProtocolVersion::TLSv1_3, &client, &server),
                Some(NamedGroup::secp384r1)
            );
            assert_eq!(
                select_key_share_group(&Ring, ProtocolVersion::TLSv1_3, &[NamedGroup::X448], &[NamedGroup::X448]),
                None
            );
            // no longer permitted in TLS 1.3
            assert_eq!(
                select_key_share_group(
                    &Ring,
                    ProtocolVersion::TLSv1_3,
                    &[NamedGroup::secp256k1],
                    &[NamedGroup::secp256k1]
                ),
                None
            );
        }

        #[test]
        fn key_share_selection_needs_a_usable_share() {
            let shares = [
                KeyShareEntry::new(NamedGroup::FFDHE2048, vec![2u8; 256]),
                KeyShareEntry::new(NamedGroup::X25519, vec![1u8; 32]),
            ];
            let groups = [NamedGroup::FFDHE2048, NamedGroup::X25519];
            assert_eq!(
                select_key_share(&Ring, ProtocolVersion::TLSv1_3, &shares, &groups, &groups),
                Some(&shares[1])
            );
            assert_eq!(
                select_key_share(
                    &Ring,
                    ProtocolVersion::TLSv1_3,
                    &shares,
                    &groups,
                    &[NamedGroup::secp256r1]
                ),
                None
            );
        }

        #[test]
        fn early_key_shares() {
            let supported = [NamedGroup::X25519, NamedGroup::secp256r1, NamedGroup::FFDHE2048];
            let shares = add_early_key_shares(
                &Ring,
                ProtocolVersion::TLSv1_3,
                &supported,
                &[NamedGroup::FFDHE2048, NamedGroup::secp256r1, NamedGroup::X25519],
            )
            .unwrap()
            .unwrap();
            assert_eq!(shares.groups(), vec![NamedGroup::X25519, NamedGroup::secp256r1]);
            let entries = shares.entries();
            assert_eq!(entries[0].payload.len(), 32);
            assert_eq!(entries[1].payload.len(), 65);

            assert!(add_early_key_shares(&Ring, ProtocolVersion::TLSv1_2, &supported, &supported)
                .unwrap()
                .is_none());

            assert!(is_valid_key_share_selection(
                ProtocolVersion::TLSv1_3,
                &supported,
                &shares,
                NamedGroup::FFDHE2048
            ));
            assert_eq!(
                check_hello_retry_group(
                    ProtocolVersion::TLSv1_3,
                    &supported,
                    &shares,
                    NamedGroup::X25519
                ),
                Err(PeerMisbehaved::IllegalHelloRetryRequestWithOfferedGroup.into())
            );
            assert_eq!(
                check_hello_retry_group(
                    ProtocolVersion::TLSv1_3,
                    &supported,
                    &shares,
                    NamedGroup::secp384r1
                ),
                Err(PeerMisbehaved::IllegalHelloRetryRequestWithUnofferedNamedGroup.into())
            );
        }

        #[test]
        fn retry_key_share() {
            let mut shares = add_key_share_to_client_hello_retry(&Ring, NamedGroup::secp384r1).unwrap();
            assert_eq!(shares.len(), 1);
            assert!(shares.take(NamedGroup::secp384r1).is_some());
            assert!(shares.is_empty());

            assert!(matches!(
                add_key_share_to_client_hello_retry(&Ring, NamedGroup::FFDHE2048),
                Err(Error::Unreachable(_))
            ));
        }

        #[test]
        fn retry_rewrites_transcript() {
            let sha256 = Ring.hash(HashAlgorithm::SHA256).unwrap();
            let mut buffer = HandshakeHashBuffer::new();
            buffer.add_message(b"client hello");
            let mut transcript = buffer.start_hash(sha256);
            adjust_transcript_for_retry(&mut transcript);

            let mut expected = vec![0xfe, 0x00, 0x00, 0x20];
            expected.extend_from_slice(sha256.hash(b"client hello").as_ref());
            assert_eq!(
                transcript.current_hash().as_ref(),
                sha256.hash(&expected).as_ref()
            );
        }

        /// *ring* with a broken random source.
        #[derive(Debug)]
        struct NoRandom;

        impl CryptoProvider for NoRandom {
            fn fill_random(&self, _buf: &mut [u8]) -> Result<(), GetRandomFailed> {
                Err(GetRandomFailed)
            }

            fn hash(&self, algorithm: HashAlgorithm) -> Option<&'static dyn hash::Hash> {
                Ring.hash(algorithm)
            }

            fn hmac(&self, algorithm: HashAlgorithm) -> Option<&'static dyn hmac::Hmac> {
                Ring.hmac(algorithm)
            }

            fn kx_group(&self, group: NamedGroup) -> Option<&'static dyn SupportedKxGroup> {
                Ring.kx_group(group)
            }

            fn record_cipher(
                &self,
                algorithm: EncryptionAlgorithm,
            ) -> Option<&'static dyn cipher::RecordCipherAlgorithm> {
                Ring.record_cipher(algorithm)
            }

            fn has_signature_algorithm(&self, algorithm: SignatureAndHashAlgorithm) -> bool {
                Ring.has_signature_algorithm(algorithm)
            }

            fn load_private_key(
                &self,
                key_der: PrivateKeyDer<'static>,
            ) -> Result<Arc<dyn SigningKey>, Error> {
                Ring.load_private_key(key_der)
            }
        }

        #[test]
        fn server_randoms() {
            let random =
                server_random(&Ring, ProtocolVersion::TLSv1_3, ProtocolVersion::TLSv1_3).unwrap();
            assert_eq!(check_downgrade_marker(ProtocolVersion::TLSv1_3, &random), Ok(()));

            let random =
                server_random(&Ring, ProtocolVersion::TLSv1_2, ProtocolVersion::TLSv1_3).unwrap();
            assert_eq!(&random[24..], b"DOWNGRD\x01");

            let random =
                server_random(&Ring, ProtocolVersion::DTLSv1_0, ProtocolVersion::DTLSv1_2).unwrap();
            assert_eq!(&random[24..], b"DOWNGRD\x00");

            // a TLS 1.1 server has nothing to protect
            let random =
                server_random(&Ring, ProtocolVersion::TLSv1_0, ProtocolVersion::TLSv1_1).unwrap();
            assert_ne!(&random[24..], b"DOWNGRD\x00");

            let err = server_random(&NoRandom, ProtocolVersion::TLSv1_3, ProtocolVersion::TLSv1_3)
                .unwrap_err();
            assert_eq!(err, Error::FailedToGetRandomBytes);
            assert_eq!(
                crate::AlertDescription::try_from(&err),
                Ok(crate::AlertDescription::InternalError)
            );
        }

        #[test]
        fn signing_credentials() {
            let pkcs8 = Ed25519KeyPair::generate_pkcs8(&SystemRandom::new()).unwrap();
            let key = Ring
                .load_private_key(PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(
                    pkcs8.as_ref().to_vec(),
                )))
                .unwrap();
            let certified = CertifiedKey::new(vec![CertificateDer::from(vec![0x30, 0x00])], key);

            let creds = Credentials::for_signing(
                certified.clone(),
                ProtocolVersion::TLSv1_3,
                Some(&[SignatureAndHashAlgorithm::ED25519]),
            )
            .unwrap();
            let signer = creds.require_signer().unwrap();
            assert_eq!(
                signer.signer.algorithm(),
                Some(SignatureAndHashAlgorithm::ED25519)
            );
            assert!(Arc::ptr_eq(&signer.certified_key.key, &certified.key));

            // the SHA-1 defaults do not include Ed25519
            assert_eq!(
                Credentials::for_signing(certified.clone(), ProtocolVersion::TLSv1_2, None).err(),
                Some(PeerIncompatible::NoSignatureSchemesInCommon.into())
            );
            assert_eq!(
                Credentials::for_signing(certified.clone(), ProtocolVersion::TLSv1_1, None).err(),
                Some(PeerIncompatible::NoSignatureSchemesInCommon.into())
            );

            // a TLS 1.3 peer gets no defaults
            assert_eq!(
                Credentials::for_signing(certified, ProtocolVersion::TLSv1_3, None).err(),
                Some(PeerIncompatible::SignatureAlgorithmsExtensionRequired.into())
            );
        }
    }
}
