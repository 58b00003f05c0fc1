use core::fmt;
use std::sync::Arc;
use std::vec::Vec;

use crate::crypto::CryptoProvider;
use crate::enums::{CipherSuite, ProtocolVersion};
use crate::error::{ApiMisuse, Error};
use crate::hash_hs::HandshakeHash;
use crate::log::{debug, trace};
use crate::msgs::enums::{ClientCertificateType, HashAlgorithm, NamedGroup};
use crate::msgs::handshake::SignatureAndHashAlgorithm;
use crate::secret::TlsSecret;
use crate::suites::{CipherSuiteDescriptor, KeyExchangeAlgorithm, PrfAlgorithm};
use crate::x509::Certificate;
use crate::{sign, tls12, tls13};

/// Which end of the connection we are.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Side {
    /// A client initiates the connection.
    Client,
    /// A server waits for a client to connect.
    Server,
}

impl Side {
    /// The other end.
    pub fn peer(&self) -> Self {
        match self {
            Self::Client => Self::Server,
            Self::Server => Self::Client,
        }
    }
}

/// Length of the client and server random values.
pub const RANDOM_LEN: usize = 32;

/// Everything negotiated and derived for one session.
///
/// The handshake driver owns one of these per session and passes it by
/// exclusive reference to each negotiation and key schedule step.  Values
/// are filled in as the handshake progresses; a HelloRetryRequest resets
/// only the values that depend on the discarded transcript.  Secrets are
/// zeroized as they are superseded and when this is dropped.
pub struct SecurityParameters {
    pub(crate) side: Side,
    pub(crate) version: Option<ProtocolVersion>,
    pub(crate) cipher_suite: Option<CipherSuite>,
    pub(crate) key_exchange: Option<KeyExchangeAlgorithm>,
    pub(crate) prf: Option<PrfAlgorithm>,
    pub(crate) prf_hash: Option<HashAlgorithm>,
    pub(crate) prf_hash_len: usize,
    pub(crate) verify_data_len: usize,

    pub(crate) client_random: [u8; RANDOM_LEN],
    pub(crate) server_random: [u8; RANDOM_LEN],
    pub(crate) session_hash: Option<Vec<u8>>,
    pub(crate) extended_master_secret: bool,
    pub(crate) session_id: Vec<u8>,

    pub(crate) negotiated_group: Option<NamedGroup>,
    pub(crate) client_supported_groups: Vec<NamedGroup>,

    pub(crate) early_secret: Option<TlsSecret>,
    pub(crate) handshake_secret: Option<TlsSecret>,
    pub(crate) master_secret: Option<TlsSecret>,
    pub(crate) early_exporter_master_secret: Option<TlsSecret>,
    pub(crate) exporter_master_secret: Option<TlsSecret>,
    pub(crate) resumption_master_secret: Option<TlsSecret>,
    pub(crate) traffic_secret_client: Option<TlsSecret>,
    pub(crate) traffic_secret_server: Option<TlsSecret>,
    pub(crate) base_key_client: Option<TlsSecret>,
    pub(crate) base_key_server: Option<TlsSecret>,

    pub(crate) peer_certificate: Option<Vec<Arc<dyn Certificate>>>,
    pub(crate) client_sig_algs: Option<Vec<SignatureAndHashAlgorithm>>,
    pub(crate) client_sig_algs_cert: Option<Vec<SignatureAndHashAlgorithm>>,
    pub(crate) server_sig_algs: Option<Vec<SignatureAndHashAlgorithm>>,
    pub(crate) server_sig_algs_cert: Option<Vec<SignatureAndHashAlgorithm>>,
    pub(crate) client_cert_types: Option<Vec<ClientCertificateType>>,
    pub(crate) tls_server_end_point: Option<Vec<u8>>,
}

impl SecurityParameters {
    /// Fresh parameters for a session on `side`.
    pub fn new(side: Side) -> Self {
        Self {
            side,
            version: None,
            cipher_suite: None,
            key_exchange: None,
            prf: None,
            prf_hash: None,
            prf_hash_len: 0,
            verify_data_len: 0,
            client_random: [0u8; RANDOM_LEN],
            server_random: [0u8; RANDOM_LEN],
            session_hash: None,
            extended_master_secret: false,
            session_id: Vec::new(),
            negotiated_group: None,
            client_supported_groups: Vec::new(),
            early_secret: None,
            handshake_secret: None,
            master_secret: None,
            early_exporter_master_secret: None,
            exporter_master_secret: None,
            resumption_master_secret: None,
            traffic_secret_client: None,
            traffic_secret_server: None,
            base_key_client: None,
            base_key_server: None,
            peer_certificate: None,
            client_sig_algs: None,
            client_sig_algs_cert: None,
            server_sig_algs: None,
            server_sig_algs_cert: None,
            client_cert_types: None,
            tls_server_end_point: None,
        }
    }

    /// Record `suite` as negotiated, with its key exchange and PRF.
    ///
    /// The legacy PRFs have no single hash, so the PRF hash is left unset
    /// for them.  The Finished length is the PRF hash length for TLS 1.3,
    /// 36 bytes for SSL 3.0 and 12 bytes otherwise.  Nothing is recorded if
    /// the suite's PRF hash cannot be named, as for the SM3 HKDF.
    pub fn negotiated_cipher_suite(&mut self, suite: CipherSuite) -> Result<(), Error> {
        let version = self.require_version()?;
        let descriptor =
            CipherSuiteDescriptor::lookup(suite).ok_or(ApiMisuse::UnknownCipherSuite)?;
        let prf = descriptor.prf_algorithm(version)?;

        let (prf_hash, prf_hash_len) = match prf {
            PrfAlgorithm::SslPrfLegacy | PrfAlgorithm::TlsPrfLegacy => (None, 0),
            _ => {
                let hash = prf
                    .hash()
                    .ok_or(ApiMisuse::AlgorithmNotProvided)?;
                let len = hash
                    .output_len()
                    .ok_or(ApiMisuse::AlgorithmNotProvided)?;
                (Some(hash), len)
            }
        };

        self.cipher_suite = Some(suite);
        self.key_exchange = Some(descriptor.key_exchange);
        self.prf = Some(prf);
        self.prf_hash = prf_hash;
        self.prf_hash_len = prf_hash_len;

        self.verify_data_len = match () {
            _ if version.is_tls13_or_later() => self.prf_hash_len,
            _ if version.is_ssl() => 36,
            _ => 12,
        };

        debug!("negotiated cipher suite {suite:?} with {prf:?} at {version:?}");
        Ok(())
    }

    /// Record `version` as negotiated, without checking it is one we support.
    ///
    /// Before TLS 1.2 there are no signature algorithm lists, so any
    /// received ones are dropped.  From TLS 1.2 a client that sent no list
    /// is taken to support SHA-1 with each signature algorithm, and a
    /// client that sent no certificate list uses its handshake list.
    pub fn negotiated_version(&mut self, version: ProtocolVersion) {
        self.version = Some(version);

        if !version.allows_signature_algorithms() {
            self.client_sig_algs = None;
            self.client_sig_algs_cert = None;
            return;
        }

        if self.client_sig_algs.is_none() {
            self.client_sig_algs = Some(sign::default_signature_algorithms().to_vec());
        }

        if self.client_sig_algs_cert.is_none() {
            self.client_sig_algs_cert = self.client_sig_algs.clone();
        }
    }

    /// A TLS client accepting the server's choice of `version`.
    pub fn negotiated_version_tls_client(&mut self, version: ProtocolVersion) -> Result<(), Error> {
        self.negotiated_version_checked(version, ProtocolVersion::is_supported_tls_version)
    }

    /// A TLS server settling on `version`.
    pub fn negotiated_version_tls_server(&mut self, version: ProtocolVersion) -> Result<(), Error> {
        self.negotiated_version_checked(version, ProtocolVersion::is_supported_tls_version)
    }

    /// A DTLS client accepting the server's choice of `version`.
    pub fn negotiated_version_dtls_client(&mut self, version: ProtocolVersion) -> Result<(), Error> {
        self.negotiated_version_checked(version, ProtocolVersion::is_supported_dtls_version)
    }

    /// A DTLS server settling on `version`.
    pub fn negotiated_version_dtls_server(&mut self, version: ProtocolVersion) -> Result<(), Error> {
        self.negotiated_version_checked(version, ProtocolVersion::is_supported_dtls_version)
    }

    fn negotiated_version_checked(
        &mut self,
        version: ProtocolVersion,
        supported: fn(ProtocolVersion) -> bool,
    ) -> Result<(), Error> {
        if !supported(version) {
            return Err(ApiMisuse::UnsupportedForProtocolVersion.into());
        }
        self.negotiated_version(version);
        debug!("negotiated version {version:?}");
        Ok(())
    }

    /// Forget everything derived from the transcript a HelloRetryRequest discards.
    ///
    /// The version, cipher suite and randoms survive.
    pub fn reset_for_hello_retry(&mut self) {
        self.negotiated_group = None;
        self.session_hash = None;
        for secret in [
            &mut self.early_secret,
            &mut self.handshake_secret,
            &mut self.master_secret,
            &mut self.early_exporter_master_secret,
            &mut self.exporter_master_secret,
            &mut self.resumption_master_secret,
            &mut self.traffic_secret_client,
            &mut self.traffic_secret_server,
            &mut self.base_key_client,
            &mut self.base_key_server,
        ] {
            *secret = None;
        }
        trace!("reset key schedule for HelloRetryRequest");
    }

    /// The Finished contents sent by `sender`, over the transcript so far.
    ///
    /// `transcript` must exclude the Finished message itself.
    pub fn calculate_verify_data(
        &self,
        provider: &dyn CryptoProvider,
        transcript: &HandshakeHash,
        sender: Side,
    ) -> Result<Vec<u8>, Error> {
        let version = self.require_version()?;

        if version.is_tls13_or_later() {
            let base_key = match sender {
                Side::Client => &self.base_key_client,
                Side::Server => &self.base_key_server,
            };
            let base_key = base_key
                .as_ref()
                .ok_or(ApiMisuse::MissingNegotiatedValue("base key"))?;
            return tls13::verify_data(
                provider,
                self.require_prf_hash()?,
                base_key,
                transcript.current_hash().as_ref(),
            );
        }

        let master_secret = self.require_master_secret()?;

        if version.is_ssl() {
            let (md5, sha1) = transcript
                .fork_legacy()
                .ok_or(ApiMisuse::UnsupportedForProtocolVersion)?;
            return tls12::ssl3::verify_data(provider, md5, sha1, master_secret.bytes()?, sender);
        }

        tls12::verify_data(
            provider,
            self.require_prf()?,
            master_secret,
            transcript.current_hash().as_ref(),
            sender,
            self.verify_data_len,
        )
    }

    /// Which side these parameters belong to.
    pub fn side(&self) -> Side {
        self.side
    }

    /// The negotiated protocol version.
    pub fn version(&self) -> Option<ProtocolVersion> {
        self.version
    }

    /// The negotiated cipher suite.
    pub fn cipher_suite(&self) -> Option<CipherSuite> {
        self.cipher_suite
    }

    /// The negotiated suite's key exchange.
    pub fn key_exchange(&self) -> Option<KeyExchangeAlgorithm> {
        self.key_exchange
    }

    /// The negotiated PRF.
    pub fn prf(&self) -> Option<PrfAlgorithm> {
        self.prf
    }

    /// The PRF's hash, unless the PRF is one of the legacy constructions.
    pub fn prf_hash(&self) -> Option<HashAlgorithm> {
        self.prf_hash
    }

    /// Output length of [`Self::prf_hash`], or zero.
    pub fn prf_hash_len(&self) -> usize {
        self.prf_hash_len
    }

    /// Length of the Finished message contents.
    pub fn verify_data_len(&self) -> usize {
        self.verify_data_len
    }

    /// The client's random value.
    pub fn client_random(&self) -> &[u8; RANDOM_LEN] {
        &self.client_random
    }

    /// The server's random value.
    pub fn server_random(&self) -> &[u8; RANDOM_LEN] {
        &self.server_random
    }

    /// Record the random values from the hello messages.
    pub fn set_randoms(&mut self, client: [u8; RANDOM_LEN], server: [u8; RANDOM_LEN]) {
        self.client_random = client;
        self.server_random = server;
    }

    /// Record the transcript hash for the extended master secret (RFC 7627).
    pub fn set_session_hash(&mut self, hash: &[u8]) {
        self.session_hash = Some(hash.to_vec());
    }

    /// Whether the extended master secret was negotiated.
    pub fn extended_master_secret(&self) -> bool {
        self.extended_master_secret
    }

    /// Record whether the extended master secret was negotiated.
    pub fn set_extended_master_secret(&mut self, negotiated: bool) {
        self.extended_master_secret = negotiated;
    }

    /// The session identifier, empty if there is none.
    pub fn session_id(&self) -> &[u8] {
        &self.session_id
    }

    /// Record the session identifier.
    pub fn set_session_id(&mut self, session_id: &[u8]) {
        self.session_id = session_id.to_vec();
    }

    /// The key exchange group chosen for TLS 1.3.
    pub fn negotiated_group(&self) -> Option<NamedGroup> {
        self.negotiated_group
    }

    /// The groups from the client's `supported_groups` extension.
    pub fn set_client_supported_groups(&mut self, groups: Vec<NamedGroup>) {
        self.client_supported_groups = groups;
    }

    /// The TLS 1.2-and-earlier master secret, or the TLS 1.3 one.
    pub fn master_secret(&self) -> Option<&TlsSecret> {
        self.master_secret.as_ref()
    }

    /// Install a master secret, as when resuming a session.
    pub fn set_master_secret(&mut self, secret: TlsSecret) {
        self.master_secret = Some(secret);
    }

    /// The TLS 1.3 early exporter master secret.
    pub fn early_exporter_master_secret(&self) -> Option<&TlsSecret> {
        self.early_exporter_master_secret.as_ref()
    }

    /// The TLS 1.3 exporter master secret.
    pub fn exporter_master_secret(&self) -> Option<&TlsSecret> {
        self.exporter_master_secret.as_ref()
    }

    /// The TLS 1.3 resumption master secret.
    pub fn resumption_master_secret(&self) -> Option<&TlsSecret> {
        self.resumption_master_secret.as_ref()
    }

    /// The current traffic secret for records sent by `side`.
    pub fn traffic_secret(&self, side: Side) -> Option<&TlsSecret> {
        match side {
            Side::Client => self.traffic_secret_client.as_ref(),
            Side::Server => self.traffic_secret_server.as_ref(),
        }
    }

    /// The peer's certificate chain, leaf first.
    pub fn peer_certificate(&self) -> Option<&[Arc<dyn Certificate>]> {
        self.peer_certificate.as_deref()
    }

    /// The client's `signature_algorithms`.
    pub fn client_sig_algs(&self) -> Option<&[SignatureAndHashAlgorithm]> {
        self.client_sig_algs.as_deref()
    }

    /// The client's `signature_algorithms_cert`, defaulting to [`Self::client_sig_algs`].
    pub fn client_sig_algs_cert(&self) -> Option<&[SignatureAndHashAlgorithm]> {
        self.client_sig_algs_cert.as_deref()
    }

    /// Record the client's signature algorithm lists, as received.
    pub fn set_client_sig_algs(
        &mut self,
        sig_algs: Option<Vec<SignatureAndHashAlgorithm>>,
        sig_algs_cert: Option<Vec<SignatureAndHashAlgorithm>>,
    ) {
        self.client_sig_algs = sig_algs;
        self.client_sig_algs_cert = sig_algs_cert;
    }

    /// The server's signature algorithms for client authentication.
    pub fn server_sig_algs(&self) -> Option<&[SignatureAndHashAlgorithm]> {
        self.server_sig_algs.as_deref()
    }

    /// The server's certificate signature algorithms for client authentication.
    pub fn server_sig_algs_cert(&self) -> Option<&[SignatureAndHashAlgorithm]> {
        self.server_sig_algs_cert.as_deref()
    }

    /// Record the server's signature algorithm lists for client authentication.
    pub fn set_server_sig_algs(
        &mut self,
        sig_algs: Option<Vec<SignatureAndHashAlgorithm>>,
        sig_algs_cert: Option<Vec<SignatureAndHashAlgorithm>>,
    ) {
        self.server_sig_algs = sig_algs;
        self.server_sig_algs_cert = sig_algs_cert;
    }

    /// The certificate types a TLS 1.2-and-earlier server asked for.
    pub fn client_cert_types(&self) -> Option<&[ClientCertificateType]> {
        self.client_cert_types.as_deref()
    }

    /// Record the certificate types a TLS 1.2-and-earlier server asked for.
    pub fn set_client_cert_types(&mut self, types: Vec<ClientCertificateType>) {
        self.client_cert_types = Some(types);
    }

    /// The RFC 5929 `tls-server-end-point` channel binding, once the
    /// server certificate is known.  Empty when the certificate has no
    /// suitable hash or the server sent none.
    pub fn tls_server_end_point(&self) -> Option<&[u8]> {
        self.tls_server_end_point.as_deref()
    }

    pub(crate) fn require_version(&self) -> Result<ProtocolVersion, Error> {
        self.version
            .ok_or_else(|| ApiMisuse::MissingNegotiatedValue("protocol version").into())
    }

    pub(crate) fn require_prf(&self) -> Result<PrfAlgorithm, Error> {
        self.prf
            .ok_or_else(|| ApiMisuse::NoPrfNegotiated.into())
    }

    pub(crate) fn require_prf_hash(&self) -> Result<HashAlgorithm, Error> {
        self.prf_hash
            .ok_or_else(|| ApiMisuse::NoPrfNegotiated.into())
    }

    pub(crate) fn require_master_secret(&self) -> Result<&TlsSecret, Error> {
        self.master_secret
            .as_ref()
            .ok_or_else(|| ApiMisuse::MissingNegotiatedValue("master secret").into())
    }
}

impl fmt::Debug for SecurityParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityParameters")
            .field("side", &self.side)
            .field("version", &self.version)
            .field("cipher_suite", &self.cipher_suite)
            .field("prf", &self.prf)
            .field("extended_master_secret", &self.extended_master_secret)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PeerMisbehaved;
    use crate::msgs::enums::SignatureAlgorithm;

    fn params_at(version: ProtocolVersion) -> SecurityParameters {
        let mut params = SecurityParameters::new(Side::Server);
        params.negotiated_version(version);
        params
    }

    #[test]
    fn cipher_suite_before_version_is_misuse() {
        let mut params = SecurityParameters::new(Side::Client);
        assert_eq!(
            params.negotiated_cipher_suite(CipherSuite::TLS13_AES_128_GCM_SHA256),
            Err(ApiMisuse::MissingNegotiatedValue("protocol version").into())
        );
    }

    #[test]
    fn tls13_suite_lengths() {
        let mut params = params_at(ProtocolVersion::TLSv1_3);
        params
            .negotiated_cipher_suite(CipherSuite::TLS13_AES_256_GCM_SHA384)
            .unwrap();
        assert_eq!(params.prf(), Some(PrfAlgorithm::Tls13HkdfSha384));
        assert_eq!(params.prf_hash(), Some(HashAlgorithm::SHA384));
        assert_eq!(params.prf_hash_len(), 48);
        assert_eq!(params.verify_data_len(), 48);
    }

    #[test]
    fn sm3_prf_is_recognised_but_not_runnable() {
        let mut params = params_at(ProtocolVersion::TLSv1_3);
        assert_eq!(
            params.negotiated_cipher_suite(CipherSuite::TLS_SM4_GCM_SM3),
            Err(ApiMisuse::AlgorithmNotProvided.into())
        );
        assert_eq!(params.cipher_suite(), None);
        assert_eq!(params.prf(), None);
    }

    #[test]
    fn tls12_suite_lengths() {
        let mut params = params_at(ProtocolVersion::TLSv1_2);
        params
            .negotiated_cipher_suite(CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256)
            .unwrap();
        assert_eq!(params.prf(), Some(PrfAlgorithm::TlsPrfSha256));
        assert_eq!(params.key_exchange(), Some(KeyExchangeAlgorithm::EcdheRsa));
        assert_eq!(params.verify_data_len(), 12);
    }

    #[test]
    fn legacy_prfs_have_no_hash() {
        let mut params = SecurityParameters::new(Side::Client);
        params.negotiated_version(ProtocolVersion::TLSv1_0);
        params
            .negotiated_cipher_suite(CipherSuite::TLS_RSA_WITH_AES_128_CBC_SHA)
            .unwrap();
        assert_eq!(params.prf(), Some(PrfAlgorithm::TlsPrfLegacy));
        assert_eq!(params.prf_hash(), None);
        assert_eq!(params.prf_hash_len(), 0);
        assert_eq!(params.verify_data_len(), 12);

        let mut params = SecurityParameters::new(Side::Client);
        params.negotiated_version(ProtocolVersion::SSLv3);
        params
            .negotiated_cipher_suite(CipherSuite::TLS_RSA_WITH_AES_128_CBC_SHA)
            .unwrap();
        assert_eq!(params.prf(), Some(PrfAlgorithm::SslPrfLegacy));
        assert_eq!(params.verify_data_len(), 36);
    }

    #[test]
    fn tls13_suite_rejected_below_tls13() {
        let mut params = params_at(ProtocolVersion::TLSv1_2);
        assert_eq!(
            params.negotiated_cipher_suite(CipherSuite::TLS13_AES_128_GCM_SHA256),
            Err(PeerMisbehaved::SelectedUnsupportedVersionForCipherSuite.into())
        );
        assert_eq!(params.cipher_suite(), None);
    }

    #[test]
    fn unknown_suite_is_misuse() {
        let mut params = params_at(ProtocolVersion::TLSv1_2);
        assert_eq!(
            params.negotiated_cipher_suite(CipherSuite::Unknown(0xfefe)),
            Err(ApiMisuse::UnknownCipherSuite.into())
        );
    }

    #[test]
    fn signature_algorithm_defaults() {
        let params = params_at(ProtocolVersion::TLSv1_2);
        let sig_algs = params.client_sig_algs().unwrap();
        assert_eq!(sig_algs.len(), 3);
        assert!(sig_algs
            .iter()
            .all(|alg| alg.hash == HashAlgorithm::SHA1));
        assert!(sig_algs.contains(&SignatureAndHashAlgorithm::new(
            HashAlgorithm::SHA1,
            SignatureAlgorithm::ECDSA
        )));
        assert_eq!(params.client_sig_algs_cert(), Some(sig_algs));
    }

    #[test]
    fn received_signature_algorithms_are_kept() {
        let mut params = SecurityParameters::new(Side::Server);
        params.set_client_sig_algs(Some(vec![SignatureAndHashAlgorithm::ED25519]), None);
        params.negotiated_version(ProtocolVersion::TLSv1_3);
        assert_eq!(
            params.client_sig_algs_cert(),
            Some(&[SignatureAndHashAlgorithm::ED25519][..])
        );
    }

    #[test]
    fn old_versions_drop_signature_algorithms() {
        let mut params = SecurityParameters::new(Side::Server);
        params.set_client_sig_algs(Some(vec![SignatureAndHashAlgorithm::ED25519]), None);
        params.negotiated_version(ProtocolVersion::TLSv1_1);
        assert_eq!(params.client_sig_algs(), None);
        assert_eq!(params.client_sig_algs_cert(), None);
    }

    #[test]
    fn version_entry_points_check_support() {
        let mut params = SecurityParameters::new(Side::Client);
        assert!(params
            .negotiated_version_tls_client(ProtocolVersion::TLSv1_3)
            .is_ok());
        assert_eq!(
            params.negotiated_version_tls_server(ProtocolVersion::SSLv3),
            Err(ApiMisuse::UnsupportedForProtocolVersion.into())
        );
        assert_eq!(
            params.negotiated_version_dtls_client(ProtocolVersion::TLSv1_2),
            Err(ApiMisuse::UnsupportedForProtocolVersion.into())
        );
        assert!(params
            .negotiated_version_dtls_server(ProtocolVersion::DTLSv1_2)
            .is_ok());
        assert_eq!(params.version(), Some(ProtocolVersion::DTLSv1_2));
    }

    #[test]
    fn hello_retry_keeps_negotiated_suite() {
        let mut params = params_at(ProtocolVersion::TLSv1_3);
        params
            .negotiated_cipher_suite(CipherSuite::TLS13_AES_128_GCM_SHA256)
            .unwrap();
        params.negotiated_group = Some(NamedGroup::X25519);
        params.early_secret = Some(TlsSecret::zeroes(32));
        params.reset_for_hello_retry();
        assert_eq!(params.negotiated_group(), None);
        assert!(params.early_secret.is_none());
        assert_eq!(
            params.cipher_suite(),
            Some(CipherSuite::TLS13_AES_128_GCM_SHA256)
        );
    }

    #[test]
    fn debug_omits_secrets() {
        let mut params = SecurityParameters::new(Side::Client);
        params.set_master_secret(TlsSecret::new(&[0xaa; 48]));
        let debug = format!("{params:?}");
        assert!(!debug.contains("170"));
        assert!(debug.starts_with("SecurityParameters { side: Client"));
    }
}
