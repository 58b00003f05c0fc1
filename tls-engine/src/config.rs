use core::fmt;
use std::sync::Arc;
use std::vec::Vec;

use crate::capability;
use crate::crypto::CryptoProvider;
use crate::enums::{CipherSuite, ProtocolVersion};
use crate::error::{Error, PeerIncompatible};
use crate::log::debug;
use crate::msgs::enums::NamedGroup;
use crate::msgs::handshake::SignatureAndHashAlgorithm;
use crate::negotiate::{self, ClientKeyShares};
use crate::security_params::SecurityParameters;
use crate::sign;
use crate::tls12;

/// The cipher suites enabled by default, most preferred first.
pub static DEFAULT_CIPHER_SUITES: &[CipherSuite] = &[
    CipherSuite::TLS13_AES_256_GCM_SHA384,
    CipherSuite::TLS13_AES_128_GCM_SHA256,
    CipherSuite::TLS13_CHACHA20_POLY1305_SHA256,
    CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
    CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
    CipherSuite::TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256,
    CipherSuite::TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
    CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
    CipherSuite::TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
];

/// The named groups supported by default, most preferred first.
pub static DEFAULT_NAMED_GROUPS: &[NamedGroup] = &[
    NamedGroup::X25519,
    NamedGroup::secp256r1,
    NamedGroup::secp384r1,
    NamedGroup::FFDHE2048,
    NamedGroup::FFDHE3072,
];

/// The groups a client sends key shares for in its first `ClientHello`.
pub static DEFAULT_EARLY_KEY_SHARE_GROUPS: &[NamedGroup] = &[NamedGroup::X25519];

/// Local negotiation preferences, shared by every handshake that uses them.
///
/// Make one with [`NegotiationConfig::builder`].  Everything listed here
/// has already been filtered against the provider, so nothing offered from
/// a config is something the provider cannot do.
#[derive(Clone)]
pub struct NegotiationConfig {
    provider: Arc<dyn CryptoProvider>,
    cipher_suites: Vec<CipherSuite>,
    named_groups: Vec<NamedGroup>,
    early_key_share_groups: Vec<NamedGroup>,
    signature_algorithms: Vec<SignatureAndHashAlgorithm>,
    prefer_local_order: bool,
    require_extended_master_secret: bool,
}

impl NegotiationConfig {
    /// Start building a config that uses `provider`.
    pub fn builder(provider: Arc<dyn CryptoProvider>) -> NegotiationConfigBuilder {
        NegotiationConfigBuilder {
            provider,
            cipher_suites: DEFAULT_CIPHER_SUITES.to_vec(),
            named_groups: DEFAULT_NAMED_GROUPS.to_vec(),
            early_key_share_groups: DEFAULT_EARLY_KEY_SHARE_GROUPS.to_vec(),
            signature_algorithms: None,
            prefer_local_order: true,
            require_extended_master_secret: true,
        }
    }

    /// The crypto provider.
    pub fn provider(&self) -> &Arc<dyn CryptoProvider> {
        &self.provider
    }

    /// Enabled cipher suites, most preferred first.
    pub fn cipher_suites(&self) -> &[CipherSuite] {
        &self.cipher_suites
    }

    /// Supported named groups, most preferred first.
    pub fn named_groups(&self) -> &[NamedGroup] {
        &self.named_groups
    }

    /// Groups for which a client sends key shares up front.
    pub fn early_key_share_groups(&self) -> &[NamedGroup] {
        &self.early_key_share_groups
    }

    /// Our `signature_algorithms`.
    pub fn signature_algorithms(&self) -> &[SignatureAndHashAlgorithm] {
        &self.signature_algorithms
    }

    /// Whether our suite order wins over the peer's.
    pub fn prefer_local_order(&self) -> bool {
        self.prefer_local_order
    }

    /// Whether sessions without the extended master secret are refused.
    pub fn require_extended_master_secret(&self) -> bool {
        self.require_extended_master_secret
    }

    /// The suite to use at `version`, from the peer's `offered` list.
    pub fn select_cipher_suite(
        &self,
        version: ProtocolVersion,
        offered: &[CipherSuite],
    ) -> Result<CipherSuite, Error> {
        negotiate::common_cipher_suite13(
            version,
            offered,
            &self.cipher_suites,
            self.prefer_local_order,
        )
        .ok_or_else(|| PeerIncompatible::NoCipherSuitesInCommon.into())
    }

    /// The TLS 1.3 key share group to use, from the client's `offered` groups.
    ///
    /// A server whose client sent no usable share asks for this group in a
    /// HelloRetryRequest.
    pub fn select_key_share_group(
        &self,
        version: ProtocolVersion,
        offered: &[NamedGroup],
    ) -> Result<NamedGroup, Error> {
        negotiate::select_key_share_group(self.provider.as_ref(), version, offered, &self.named_groups)
            .ok_or_else(|| PeerIncompatible::NoKxGroupsInCommon.into())
    }

    /// The key shares for a first `ClientHello` offering up to `max_version`.
    pub fn early_key_shares(&self, max_version: ProtocolVersion) -> Result<Option<ClientKeyShares>, Error> {
        negotiate::add_early_key_shares(
            self.provider.as_ref(),
            max_version,
            &self.named_groups,
            &self.early_key_share_groups,
        )
    }

    /// Apply the extended master secret requirement to a negotiated session.
    pub fn check_extended_master_secret(&self, params: &SecurityParameters) -> Result<(), Error> {
        tls12::check_extended_master_secret(params, self.require_extended_master_secret)
    }
}

impl fmt::Debug for NegotiationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NegotiationConfig")
            .field("provider", &self.provider)
            .field("cipher_suites", &self.cipher_suites)
            .field("named_groups", &self.named_groups)
            .field("early_key_share_groups", &self.early_key_share_groups)
            .field("prefer_local_order", &self.prefer_local_order)
            .field(
                "require_extended_master_secret",
                &self.require_extended_master_secret,
            )
            .finish_non_exhaustive()
    }
}

/// Builder for a [`NegotiationConfig`].
///
/// Every setting starts at its default; only override what you need.
#[derive(Debug)]
pub struct NegotiationConfigBuilder {
    provider: Arc<dyn CryptoProvider>,
    cipher_suites: Vec<CipherSuite>,
    named_groups: Vec<NamedGroup>,
    early_key_share_groups: Vec<NamedGroup>,
    signature_algorithms: Option<Vec<SignatureAndHashAlgorithm>>,
    prefer_local_order: bool,
    require_extended_master_secret: bool,
}

impl NegotiationConfigBuilder {
    /// Enable `suites`, most preferred first, instead of [`DEFAULT_CIPHER_SUITES`].
    pub fn with_cipher_suites(mut self, suites: &[CipherSuite]) -> Self {
        self.cipher_suites = suites.to_vec();
        self
    }

    /// Support `groups`, most preferred first, instead of [`DEFAULT_NAMED_GROUPS`].
    pub fn with_named_groups(mut self, groups: &[NamedGroup]) -> Self {
        self.named_groups = groups.to_vec();
        self
    }

    /// Send early key shares for `groups` instead of
    /// [`DEFAULT_EARLY_KEY_SHARE_GROUPS`].
    ///
    /// Groups that are not also supported are ignored.
    pub fn with_early_key_share_groups(mut self, groups: &[NamedGroup]) -> Self {
        self.early_key_share_groups = groups.to_vec();
        self
    }

    /// Advertise `algorithms` instead of everything the provider verifies.
    pub fn with_signature_algorithms(mut self, algorithms: &[SignatureAndHashAlgorithm]) -> Self {
        self.signature_algorithms = Some(algorithms.to_vec());
        self
    }

    /// Whether our suite order wins over the peer's.  Defaults to true.
    pub fn with_local_order(mut self, prefer: bool) -> Self {
        self.prefer_local_order = prefer;
        self
    }

    /// Whether to refuse sessions without the extended master secret.
    /// Defaults to true.
    pub fn with_extended_master_secret_required(mut self, required: bool) -> Self {
        self.require_extended_master_secret = required;
        self
    }

    /// Finish, dropping anything the provider cannot do.
    ///
    /// Fails if no cipher suite or no named group remains, or if an
    /// explicit signature algorithm list ends up empty.
    pub fn build(self) -> Result<NegotiationConfig, Error> {
        let provider = self.provider;

        let cipher_suites = capability::supported_cipher_suites(provider.as_ref(), &self.cipher_suites);
        if cipher_suites.is_empty() {
            return Err(Error::General("no usable cipher suites configured".into()));
        }

        let named_groups = self
            .named_groups
            .into_iter()
            .filter(|group| provider.has_named_group(*group))
            .collect::<Vec<_>>();
        if named_groups.is_empty() {
            return Err(Error::General("no usable named groups configured".into()));
        }

        let early_key_share_groups = self
            .early_key_share_groups
            .into_iter()
            .filter(|group| named_groups.contains(group))
            .collect();

        let signature_algorithms = match self.signature_algorithms {
            Some(algorithms) => algorithms
                .into_iter()
                .filter(|alg| !alg.is_anonymous() && provider.has_signature_algorithm(*alg))
                .collect(),
            None => sign::default_supported_signature_algorithms(provider.as_ref()),
        };
        if signature_algorithms.is_empty() {
            return Err(Error::General(
                "no usable signature algorithms configured".into(),
            ));
        }

        debug!("configured cipher suites {cipher_suites:?} and groups {named_groups:?}");
        Ok(NegotiationConfig {
            provider,
            cipher_suites,
            named_groups,
            early_key_share_groups,
            signature_algorithms,
            prefer_local_order: self.prefer_local_order,
            require_extended_master_secret: self.require_extended_master_secret,
        })
    }
}

#[cfg(all(test, feature = "ring"))]
mod tests {
    use std::vec;

    use super::*;
    use crate::crypto::ring::default_provider;
    use crate::error::PeerIncompatible;
    use crate::security_params::Side;

    #[test]
    fn defaults_are_filtered_by_provider() {
        let config = NegotiationConfig::builder(default_provider())
            .build()
            .unwrap();
        assert_eq!(config.cipher_suites(), DEFAULT_CIPHER_SUITES);
        // ring has no finite field groups
        assert_eq!(
            config.named_groups(),
            &[NamedGroup::X25519, NamedGroup::secp256r1, NamedGroup::secp384r1]
        );
        assert_eq!(config.early_key_share_groups(), &[NamedGroup::X25519]);
        assert_eq!(
            config.signature_algorithms(),
            sign::default_supported_signature_algorithms(config.provider().as_ref())
        );
        assert!(config.prefer_local_order());
        assert!(config.require_extended_master_secret());
    }

    #[test]
    fn unusable_settings_are_rejected() {
        let err = NegotiationConfig::builder(default_provider())
            .with_cipher_suites(&[CipherSuite::TLS_RSA_WITH_AES_128_GCM_SHA256])
            .build()
            .unwrap_err();
        assert_eq!(err, Error::General("no usable cipher suites configured".into()));

        let err = NegotiationConfig::builder(default_provider())
            .with_named_groups(&[NamedGroup::FFDHE2048])
            .build()
            .unwrap_err();
        assert_eq!(err, Error::General("no usable named groups configured".into()));

        let err = NegotiationConfig::builder(default_provider())
            .with_signature_algorithms(&[SignatureAndHashAlgorithm::ED448])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::General("no usable signature algorithms configured".into())
        );
    }

    #[test]
    fn suite_order() {
        let offered = [
            CipherSuite::TLS13_CHACHA20_POLY1305_SHA256,
            CipherSuite::TLS13_AES_128_GCM_SHA256,
        ];
        let local = NegotiationConfig::builder(default_provider())
            .build()
            .unwrap();
        assert_eq!(
            local.select_cipher_suite(ProtocolVersion::TLSv1_3, &offered),
            Ok(CipherSuite::TLS13_AES_128_GCM_SHA256)
        );

        let peer = NegotiationConfig::builder(default_provider())
            .with_local_order(false)
            .build()
            .unwrap();
        assert_eq!(
            peer.select_cipher_suite(ProtocolVersion::TLSv1_3, &offered),
            Ok(CipherSuite::TLS13_CHACHA20_POLY1305_SHA256)
        );
        assert_eq!(
            peer.select_cipher_suite(ProtocolVersion::TLSv1_2, &offered),
            Err(PeerIncompatible::NoCipherSuitesInCommon.into())
        );
    }

    #[test]
    fn early_shares_only_for_supported_groups() {
        let config = NegotiationConfig::builder(default_provider())
            .with_named_groups(&[NamedGroup::secp256r1, NamedGroup::X25519])
            .with_early_key_share_groups(&[NamedGroup::secp384r1, NamedGroup::X25519])
            .build()
            .unwrap();
        assert_eq!(config.early_key_share_groups(), &[NamedGroup::X25519]);

        let shares = config
            .early_key_shares(ProtocolVersion::TLSv1_3)
            .unwrap()
            .unwrap();
        assert_eq!(shares.groups(), vec![NamedGroup::X25519]);
        assert_eq!(
            config.select_key_share_group(
                ProtocolVersion::TLSv1_3,
                &[NamedGroup::secp384r1, NamedGroup::secp256r1]
            ),
            Ok(NamedGroup::secp256r1)
        );
        assert_eq!(
            config.select_key_share_group(ProtocolVersion::TLSv1_3, &[NamedGroup::secp384r1]),
            Err(PeerIncompatible::NoKxGroupsInCommon.into())
        );
    }

    #[test]
    fn extended_master_secret_requirement() {
        let params = SecurityParameters::new(Side::Server);
        let strict = NegotiationConfig::builder(default_provider())
            .build()
            .unwrap();
        assert_eq!(
            strict.check_extended_master_secret(&params),
            Err(PeerIncompatible::ExtendedMasterSecretExtensionRequired.into())
        );

        let relaxed = NegotiationConfig::builder(default_provider())
            .with_extended_master_secret_required(false)
            .build()
            .unwrap();
        assert_eq!(relaxed.check_extended_master_secret(&params), Ok(()));
    }
}
