//! Whether a [`CryptoProvider`] can service a cipher suite.

use std::vec::Vec;

use crate::crypto::CryptoProvider;
use crate::enums::CipherSuite;
use crate::log::trace;
use crate::msgs::enums::SignatureAlgorithm;
use crate::sign;
use crate::suites::{self, KeyExchangeAlgorithm};

/// Whether `provider` can run `suite`: its key exchange, its bulk
/// encryption and its MAC.
///
/// Unknown suites are never supported.
pub fn is_supported_cipher_suite(provider: &dyn CryptoProvider, suite: CipherSuite) -> bool {
    let (Some(kx), Some(encryption), Some(mac)) = (
        suites::key_exchange_algorithm(suite),
        suites::encryption_algorithm(suite),
        suites::mac_algorithm(suite),
    ) else {
        return false;
    };

    is_supported_key_exchange(provider, kx)
        && provider.has_encryption_algorithm(encryption)
        && provider.has_mac_algorithm(mac)
}

/// Whether `provider` can perform key exchange `kx`, including any
/// signatures it requires.
pub fn is_supported_key_exchange(provider: &dyn CryptoProvider, kx: KeyExchangeAlgorithm) -> bool {
    use KeyExchangeAlgorithm::*;
    match kx {
        DhAnon | DhDss | DhRsa | DhePsk => provider.has_dh_agreement(),
        DheDss => provider.has_dh_agreement() && has_signature_algorithm(provider, SignatureAlgorithm::DSA),
        DheRsa => provider.has_dh_agreement() && has_any_rsa_sig_algs(provider),
        EcdhAnon | EcdhEcdsa | EcdhRsa | EcdhePsk => provider.has_ecdh_agreement(),
        EcdheEcdsa => {
            provider.has_ecdh_agreement()
                && (has_signature_algorithm(provider, SignatureAlgorithm::ECDSA)
                    || has_signature_algorithm(provider, SignatureAlgorithm::ED25519)
                    || has_signature_algorithm(provider, SignatureAlgorithm::ED448))
        }
        EcdheRsa => provider.has_ecdh_agreement() && has_any_rsa_sig_algs(provider),
        Null | Psk => true,
        Rsa | RsaPsk => provider.has_rsa_encryption(),
        Srp => provider.has_srp_authentication(),
        SrpDss => {
            provider.has_srp_authentication()
                && has_signature_algorithm(provider, SignatureAlgorithm::DSA)
        }
        SrpRsa => provider.has_srp_authentication() && has_any_rsa_sig_algs(provider),
    }
}

/// Whether `provider` can verify signatures of the `signature` family with
/// some hash we know of.
pub fn has_signature_algorithm(provider: &dyn CryptoProvider, signature: SignatureAlgorithm) -> bool {
    sign::all_signature_algorithms()
        .iter()
        .filter(|alg| alg.signature == signature)
        .any(|alg| provider.has_signature_algorithm(*alg))
}

/// Whether `provider` verifies any RSA signature: PKCS#1 or either PSS
/// flavour.
pub fn has_any_rsa_sig_algs(provider: &dyn CryptoProvider) -> bool {
    [
        SignatureAlgorithm::RSA,
        SignatureAlgorithm::RSA_PSS_RSAE_SHA256,
        SignatureAlgorithm::RSA_PSS_RSAE_SHA384,
        SignatureAlgorithm::RSA_PSS_RSAE_SHA512,
        SignatureAlgorithm::RSA_PSS_PSS_SHA256,
        SignatureAlgorithm::RSA_PSS_PSS_SHA384,
        SignatureAlgorithm::RSA_PSS_PSS_SHA512,
    ]
    .into_iter()
    .any(|signature| has_signature_algorithm(provider, signature))
}

/// The subset of `suites` that `provider` supports, in the same order.
pub fn supported_cipher_suites(provider: &dyn CryptoProvider, suites: &[CipherSuite]) -> Vec<CipherSuite> {
    suites
        .iter()
        .copied()
        .filter(|suite| {
            let supported = is_supported_cipher_suite(provider, *suite);
            if !supported {
                trace!("provider cannot service {suite:?}");
            }
            supported
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pki_types::PrivateKeyDer;

    use super::*;
    use crate::crypto::{GetRandomFailed, SigningKey, SupportedKxGroup, cipher, hash, hmac};
    use crate::error::Error;
    use crate::msgs::enums::{HashAlgorithm, NamedGroup};
    use crate::msgs::handshake::SignatureAndHashAlgorithm;
    use crate::suites::EncryptionAlgorithm;

    /// Finite-field DH and DSA only, with every bulk cipher but no HMAC.
    #[derive(Debug)]
    struct DhDsaOnly;

    impl CryptoProvider for DhDsaOnly {
        fn fill_random(&self, _buf: &mut [u8]) -> Result<(), GetRandomFailed> {
            Ok(())
        }

        fn hash(&self, _algorithm: HashAlgorithm) -> Option<&'static dyn hash::Hash> {
            None
        }

        fn hmac(&self, _algorithm: HashAlgorithm) -> Option<&'static dyn hmac::Hmac> {
            None
        }

        fn kx_group(&self, _group: NamedGroup) -> Option<&'static dyn SupportedKxGroup> {
            None
        }

        fn record_cipher(
            &self,
            _algorithm: EncryptionAlgorithm,
        ) -> Option<&'static dyn cipher::RecordCipherAlgorithm> {
            None
        }

        fn has_signature_algorithm(&self, algorithm: SignatureAndHashAlgorithm) -> bool {
            algorithm.signature == SignatureAlgorithm::DSA
        }

        fn load_private_key(&self, _key_der: PrivateKeyDer<'static>) -> Result<Arc<dyn SigningKey>, Error> {
            Err(Error::General("no keys".into()))
        }

        fn has_encryption_algorithm(&self, _algorithm: EncryptionAlgorithm) -> bool {
            true
        }

        fn has_dh_agreement(&self) -> bool {
            true
        }
    }

    #[test]
    fn key_exchange_needs_agreement_and_signatures() {
        use KeyExchangeAlgorithm::*;

        for kx in [DhAnon, DhDss, DhRsa, DhePsk, DheDss, Null, Psk] {
            assert!(is_supported_key_exchange(&DhDsaOnly, kx), "{kx:?}");
        }
        for kx in [DheRsa, EcdheEcdsa, EcdheRsa, EcdhAnon, Rsa, RsaPsk, Srp, SrpDss, SrpRsa] {
            assert!(!is_supported_key_exchange(&DhDsaOnly, kx), "{kx:?}");
        }
        assert!(!has_any_rsa_sig_algs(&DhDsaOnly));
    }

    #[test]
    fn suites_need_mac_too() {
        assert!(is_supported_cipher_suite(
            &DhDsaOnly,
            CipherSuite::TLS_DHE_DSS_WITH_AES_128_GCM_SHA256
        ));
        // needs HMAC-SHA1
        assert!(!is_supported_cipher_suite(
            &DhDsaOnly,
            CipherSuite::TLS_ECDH_anon_WITH_AES_128_CBC_SHA
        ));
        assert!(!is_supported_cipher_suite(&DhDsaOnly, CipherSuite::Unknown(0x1234)));
    }

    #[cfg(feature = "ring")]
    #[test]
    fn ring_suites() {
        use crate::crypto::ring::Ring;

        let offered = [
            CipherSuite::TLS_DHE_RSA_WITH_AES_128_GCM_SHA256,
            CipherSuite::TLS13_AES_128_GCM_SHA256,
            CipherSuite::TLS_RSA_WITH_AES_128_GCM_SHA256,
            CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
            CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA,
            CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
            CipherSuite::TLS_PSK_WITH_AES_128_GCM_SHA256,
        ];
        assert_eq!(
            supported_cipher_suites(&Ring, &offered),
            vec![
                CipherSuite::TLS13_AES_128_GCM_SHA256,
                CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
                CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
                CipherSuite::TLS_PSK_WITH_AES_128_GCM_SHA256,
            ]
        );
        assert!(has_any_rsa_sig_algs(&Ring));
        assert!(!has_signature_algorithm(&Ring, SignatureAlgorithm::DSA));
    }
}
