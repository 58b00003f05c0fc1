//! The narrow certificate interface the handshake needs, and the registry
//! mapping certificate signature algorithm OIDs to TLS algorithm pairs.
//!
//! Parsing certificates is left to the caller's ASN.1 layer.  The only DER
//! read here is the handful of structures whose contents steer negotiation:
//! RSASSA-PSS parameters and the RFC 7633 TLS feature extension.

use core::fmt::Debug;
use std::boxed::Box;
use std::string::ToString;
use std::vec::Vec;

use der::asn1::{AnyRef, ObjectIdentifier};
use der::{Decode, Reader, SliceReader, Tag, TagNumber, Tagged};

use crate::crypto::Verifier;
use crate::error::{CertificateError, Error};
use crate::msgs::enums::{HashAlgorithm, SignatureAlgorithm};
use crate::msgs::handshake::SignatureAndHashAlgorithm;

/// Object identifiers with meaning to the handshake, in dotted form.
pub mod oid {
    /// `id-RSASSA-PSS`
    pub const RSASSA_PSS: &str = "1.2.840.113549.1.1.10";
    /// `id-sha256`
    pub const SHA256: &str = "2.16.840.1.101.3.4.2.1";
    /// `id-sha384`
    pub const SHA384: &str = "2.16.840.1.101.3.4.2.2";
    /// `id-sha512`
    pub const SHA512: &str = "2.16.840.1.101.3.4.2.3";
    /// `id-pe-tlsfeature` (RFC 7633)
    pub const TLS_FEATURE: &str = "1.3.6.1.5.5.7.1.24";
}

/// A decoded peer or local certificate.
///
/// Implementations are supplied by whatever parses X.509; the engine only
/// asks these questions of it.
pub trait Certificate: Debug + Send + Sync {
    /// The DER encoding of the whole certificate.
    fn encoding(&self) -> &[u8];

    /// The `signatureAlgorithm` OID of the certificate, in dotted form.
    fn sig_alg_oid(&self) -> Option<&str>;

    /// The DER encoding of the `signatureAlgorithm` parameters, if present.
    fn sig_alg_params(&self) -> Option<&[u8]>;

    /// The DER contents (`extnValue`) of the extension `oid`, if present.
    fn extension(&self, oid: &str) -> Option<&[u8]>;

    /// The signature algorithm this certificate's key uses before TLS 1.2,
    /// where it is implied by the key type.
    fn legacy_signature_algorithm(&self) -> Option<SignatureAlgorithm>;

    /// Whether this certificate's key can make handshake signatures with
    /// `algorithm`.
    fn supports_signature_algorithm(&self, algorithm: SignatureAlgorithm) -> bool;

    /// Whether this certificate's key can sign certificates with `algorithm`.
    fn supports_signature_algorithm_ca(&self, algorithm: SignatureAlgorithm) -> bool;

    /// A verifier for signatures made by this certificate's key with `algorithm`.
    fn create_verifier(
        &self,
        algorithm: SignatureAndHashAlgorithm,
    ) -> Result<Box<dyn Verifier>, Error>;
}

const fn pair(hash: HashAlgorithm, signature: SignatureAlgorithm) -> SignatureAndHashAlgorithm {
    SignatureAndHashAlgorithm::new(hash, signature)
}

static CERT_SIG_ALG_OIDS: &[(&str, SignatureAndHashAlgorithm)] = &[
    // NIST DSA
    ("2.16.840.1.101.3.4.3.1", pair(HashAlgorithm::SHA224, SignatureAlgorithm::DSA)),
    ("2.16.840.1.101.3.4.3.2", pair(HashAlgorithm::SHA256, SignatureAlgorithm::DSA)),
    ("2.16.840.1.101.3.4.3.3", pair(HashAlgorithm::SHA384, SignatureAlgorithm::DSA)),
    ("2.16.840.1.101.3.4.3.4", pair(HashAlgorithm::SHA512, SignatureAlgorithm::DSA)),
    // OIW
    ("1.3.14.3.2.27", pair(HashAlgorithm::SHA1, SignatureAlgorithm::DSA)),
    ("1.3.14.3.2.29", pair(HashAlgorithm::SHA1, SignatureAlgorithm::RSA)),
    // PKCS#1
    ("1.2.840.113549.1.1.5", pair(HashAlgorithm::SHA1, SignatureAlgorithm::RSA)),
    ("1.2.840.113549.1.1.14", pair(HashAlgorithm::SHA224, SignatureAlgorithm::RSA)),
    ("1.2.840.113549.1.1.11", pair(HashAlgorithm::SHA256, SignatureAlgorithm::RSA)),
    ("1.2.840.113549.1.1.12", pair(HashAlgorithm::SHA384, SignatureAlgorithm::RSA)),
    ("1.2.840.113549.1.1.13", pair(HashAlgorithm::SHA512, SignatureAlgorithm::RSA)),
    // X9.62 / X9.57
    ("1.2.840.10045.4.1", pair(HashAlgorithm::SHA1, SignatureAlgorithm::ECDSA)),
    ("1.2.840.10045.4.3.1", pair(HashAlgorithm::SHA224, SignatureAlgorithm::ECDSA)),
    ("1.2.840.10045.4.3.2", pair(HashAlgorithm::SHA256, SignatureAlgorithm::ECDSA)),
    ("1.2.840.10045.4.3.3", pair(HashAlgorithm::SHA384, SignatureAlgorithm::ECDSA)),
    ("1.2.840.10045.4.3.4", pair(HashAlgorithm::SHA512, SignatureAlgorithm::ECDSA)),
    ("1.2.840.10040.4.3", pair(HashAlgorithm::SHA1, SignatureAlgorithm::DSA)),
    // BSI TR-03110 terminal authentication
    ("0.4.0.127.0.7.2.2.2.2.1", pair(HashAlgorithm::SHA1, SignatureAlgorithm::ECDSA)),
    ("0.4.0.127.0.7.2.2.2.2.2", pair(HashAlgorithm::SHA224, SignatureAlgorithm::ECDSA)),
    ("0.4.0.127.0.7.2.2.2.2.3", pair(HashAlgorithm::SHA256, SignatureAlgorithm::ECDSA)),
    ("0.4.0.127.0.7.2.2.2.2.4", pair(HashAlgorithm::SHA384, SignatureAlgorithm::ECDSA)),
    ("0.4.0.127.0.7.2.2.2.2.5", pair(HashAlgorithm::SHA512, SignatureAlgorithm::ECDSA)),
    ("0.4.0.127.0.7.2.2.2.1.1", pair(HashAlgorithm::SHA1, SignatureAlgorithm::RSA)),
    ("0.4.0.127.0.7.2.2.2.1.2", pair(HashAlgorithm::SHA256, SignatureAlgorithm::RSA)),
    // BSI plain ECDSA
    ("0.4.0.127.0.7.1.1.4.1.1", pair(HashAlgorithm::SHA1, SignatureAlgorithm::ECDSA)),
    ("0.4.0.127.0.7.1.1.4.1.2", pair(HashAlgorithm::SHA224, SignatureAlgorithm::ECDSA)),
    ("0.4.0.127.0.7.1.1.4.1.3", pair(HashAlgorithm::SHA256, SignatureAlgorithm::ECDSA)),
    ("0.4.0.127.0.7.1.1.4.1.4", pair(HashAlgorithm::SHA384, SignatureAlgorithm::ECDSA)),
    ("0.4.0.127.0.7.1.1.4.1.5", pair(HashAlgorithm::SHA512, SignatureAlgorithm::ECDSA)),
    // RFC 8410
    ("1.3.101.112", SignatureAndHashAlgorithm::ED25519),
    ("1.3.101.113", SignatureAndHashAlgorithm::ED448),
];

/// The algorithm pair a certificate signature algorithm OID denotes.
///
/// `id-RSASSA-PSS` is not listed: its hash lives in the parameters, see
/// [`cert_sig_and_hash_alg`].
pub fn sig_and_hash_alg_for_oid(oid: &str) -> Option<SignatureAndHashAlgorithm> {
    CERT_SIG_ALG_OIDS
        .iter()
        .find(|(known, _)| *known == oid)
        .map(|(_, alg)| *alg)
}

/// The algorithm pair `subject` was signed with by `issuer`.
///
/// RSASSA-PSS signatures map to the `rsa_pss_pss_*` pair when the issuer
/// key is itself a PSS key, else to `rsa_pss_rsae_*`.  Returns `None` for an
/// unrecognised algorithm.
pub fn cert_sig_and_hash_alg(
    subject: &dyn Certificate,
    issuer: &dyn Certificate,
) -> Option<SignatureAndHashAlgorithm> {
    let sig_alg_oid = subject.sig_alg_oid()?;
    if sig_alg_oid != oid::RSASSA_PSS {
        return sig_and_hash_alg_for_oid(sig_alg_oid);
    }

    let hash = pss_hash_algorithm(subject.sig_alg_params()?).ok()??;
    let (pss, rsae) = match hash {
        HashAlgorithm::SHA256 => (
            SignatureAndHashAlgorithm::RSA_PSS_PSS_SHA256,
            SignatureAndHashAlgorithm::RSA_PSS_RSAE_SHA256,
        ),
        HashAlgorithm::SHA384 => (
            SignatureAndHashAlgorithm::RSA_PSS_PSS_SHA384,
            SignatureAndHashAlgorithm::RSA_PSS_RSAE_SHA384,
        ),
        HashAlgorithm::SHA512 => (
            SignatureAndHashAlgorithm::RSA_PSS_PSS_SHA512,
            SignatureAndHashAlgorithm::RSA_PSS_RSAE_SHA512,
        ),
        _ => return None,
    };

    [pss, rsae]
        .into_iter()
        .find(|alg| issuer.supports_signature_algorithm_ca(alg.signature))
}

/// The hash used for the RFC 5929 `tls-server-end-point` channel binding.
///
/// This is the hash of the certificate's signature algorithm, with MD5 and
/// SHA-1 upgraded to SHA-256.  `None` when there is no single such hash.
pub fn end_point_hash_algorithm(cert: &dyn Certificate) -> Option<HashAlgorithm> {
    let sig_alg_oid = cert.sig_alg_oid()?;
    let hash = match sig_alg_oid == oid::RSASSA_PSS {
        true => pss_hash_algorithm(cert.sig_alg_params()?).ok()??,
        false => sig_and_hash_alg_for_oid(sig_alg_oid)?.hash,
    };

    match hash {
        HashAlgorithm::MD5 | HashAlgorithm::SHA1 => Some(HashAlgorithm::SHA256),
        HashAlgorithm::Intrinsic => None,
        other => Some(other),
    }
}

/// The hash named by DER-encoded `RSASSA-PSS-params`, when it is SHA-2.
///
/// An absent `hashAlgorithm` field means SHA-1, which yields `Ok(None)`.
pub fn pss_hash_algorithm(params: &[u8]) -> Result<Option<HashAlgorithm>, Error> {
    let Some(hash_oid) = pss_hash_oid(params).map_err(|_| bad_encoding())? else {
        return Ok(None);
    };

    Ok(match hash_oid.to_string().as_str() {
        oid::SHA256 => Some(HashAlgorithm::SHA256),
        oid::SHA384 => Some(HashAlgorithm::SHA384),
        oid::SHA512 => Some(HashAlgorithm::SHA512),
        _ => None,
    })
}

/// ```text
/// RSASSA-PSS-params ::= SEQUENCE {
///     hashAlgorithm      [0] HashAlgorithm DEFAULT sha1,
///     maskGenAlgorithm   [1] MaskGenAlgorithm DEFAULT mgf1SHA1,
///     saltLength         [2] INTEGER DEFAULT 20,
///     trailerField       [3] TrailerField DEFAULT trailerFieldBC }
/// ```
fn pss_hash_oid(params: &[u8]) -> der::Result<Option<ObjectIdentifier>> {
    let fields = Vec::<AnyRef<'_>>::from_der(params)?;
    let hash_field = Tag::ContextSpecific {
        constructed: true,
        number: TagNumber::N0,
    };

    let Some(explicit) = fields
        .first()
        .filter(|field| field.tag() == hash_field)
    else {
        return Ok(None);
    };

    let mut reader = SliceReader::new(explicit.value())?;
    let hash_oid = reader.sequence(|alg_id| {
        let hash_oid = ObjectIdentifier::decode(alg_id)?;
        // parameters: NULL or absent
        while !alg_id.is_finished() {
            AnyRef::decode(alg_id)?;
        }
        Ok(hash_oid)
    })?;
    reader.finish(Some(hash_oid))
}

/// The extension types listed in `cert`'s RFC 7633 TLS feature extension.
///
/// Empty when the extension is absent.
pub fn tls_features(cert: &dyn Certificate) -> Result<Vec<u16>, Error> {
    match cert.extension(oid::TLS_FEATURE) {
        // Features ::= SEQUENCE OF INTEGER
        Some(value) => Vec::<u16>::from_der(value).map_err(|_| bad_encoding()),
        None => Ok(Vec::new()),
    }
}

fn bad_encoding() -> Error {
    Error::InvalidCertificate(CertificateError::BadEncoding)
}

#[cfg(test)]
mod tests {
    use std::vec;

    use super::*;

    #[derive(Debug, Default)]
    struct TestCert {
        sig_alg_oid: Option<&'static str>,
        sig_alg_params: Option<Vec<u8>>,
        tls_feature: Option<Vec<u8>>,
        ca_algorithms: Vec<SignatureAlgorithm>,
    }

    impl Certificate for TestCert {
        fn encoding(&self) -> &[u8] {
            &[]
        }

        fn sig_alg_oid(&self) -> Option<&str> {
            self.sig_alg_oid
        }

        fn sig_alg_params(&self) -> Option<&[u8]> {
            self.sig_alg_params.as_deref()
        }

        fn extension(&self, oid: &str) -> Option<&[u8]> {
            match oid == oid::TLS_FEATURE {
                true => self.tls_feature.as_deref(),
                false => None,
            }
        }

        fn legacy_signature_algorithm(&self) -> Option<SignatureAlgorithm> {
            None
        }

        fn supports_signature_algorithm(&self, _: SignatureAlgorithm) -> bool {
            false
        }

        fn supports_signature_algorithm_ca(&self, algorithm: SignatureAlgorithm) -> bool {
            self.ca_algorithms.contains(&algorithm)
        }

        fn create_verifier(
            &self,
            _: SignatureAndHashAlgorithm,
        ) -> Result<Box<dyn Verifier>, Error> {
            Err(Error::General("test certificate".into()))
        }
    }

    /// RSASSA-PSS-params naming SHA-384, with the optional NULL parameters.
    const PSS_SHA384_PARAMS: &[u8] = &[
        0x30, 0x11, 0xa0, 0x0f, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04,
        0x02, 0x02, 0x05, 0x00,
    ];

    #[test]
    fn registry_lookup() {
        assert_eq!(
            sig_and_hash_alg_for_oid("1.2.840.113549.1.1.11"),
            Some(SignatureAndHashAlgorithm::new(
                HashAlgorithm::SHA256,
                SignatureAlgorithm::RSA
            ))
        );
        assert_eq!(
            sig_and_hash_alg_for_oid("1.3.101.112"),
            Some(SignatureAndHashAlgorithm::ED25519)
        );
        assert_eq!(sig_and_hash_alg_for_oid(oid::RSASSA_PSS), None);
        assert_eq!(sig_and_hash_alg_for_oid("1.2.3"), None);
    }

    #[test]
    fn registry_has_no_duplicate_oids() {
        for (i, (a, _)) in CERT_SIG_ALG_OIDS.iter().enumerate() {
            assert!(!CERT_SIG_ALG_OIDS[i + 1..]
                .iter()
                .any(|(b, _)| a == b));
        }
    }

    #[test]
    fn pss_params() {
        assert_eq!(
            pss_hash_algorithm(PSS_SHA384_PARAMS).unwrap(),
            Some(HashAlgorithm::SHA384)
        );
        // defaults to SHA-1
        assert_eq!(pss_hash_algorithm(&[0x30, 0x00]).unwrap(), None);
        assert_eq!(
            pss_hash_algorithm(&[0x30, 0x05, 0xa0]),
            Err(bad_encoding())
        );
    }

    #[test]
    fn pss_chain_link_prefers_pss_issuer() {
        let subject = TestCert {
            sig_alg_oid: Some(oid::RSASSA_PSS),
            sig_alg_params: Some(PSS_SHA384_PARAMS.to_vec()),
            ..TestCert::default()
        };

        let rsae_issuer = TestCert {
            ca_algorithms: vec![SignatureAlgorithm::RSA_PSS_RSAE_SHA384],
            ..TestCert::default()
        };
        assert_eq!(
            cert_sig_and_hash_alg(&subject, &rsae_issuer),
            Some(SignatureAndHashAlgorithm::RSA_PSS_RSAE_SHA384)
        );

        let pss_issuer = TestCert {
            ca_algorithms: vec![
                SignatureAlgorithm::RSA_PSS_RSAE_SHA384,
                SignatureAlgorithm::RSA_PSS_PSS_SHA384,
            ],
            ..TestCert::default()
        };
        assert_eq!(
            cert_sig_and_hash_alg(&subject, &pss_issuer),
            Some(SignatureAndHashAlgorithm::RSA_PSS_PSS_SHA384)
        );

        assert_eq!(cert_sig_and_hash_alg(&subject, &TestCert::default()), None);
    }

    #[test]
    fn end_point_hash_upgrades_weak_hashes() {
        let sha1_rsa = TestCert {
            sig_alg_oid: Some("1.2.840.113549.1.1.5"),
            ..TestCert::default()
        };
        assert_eq!(end_point_hash_algorithm(&sha1_rsa), Some(HashAlgorithm::SHA256));

        let sha384_ecdsa = TestCert {
            sig_alg_oid: Some("1.2.840.10045.4.3.3"),
            ..TestCert::default()
        };
        assert_eq!(end_point_hash_algorithm(&sha384_ecdsa), Some(HashAlgorithm::SHA384));

        let ed25519 = TestCert {
            sig_alg_oid: Some("1.3.101.112"),
            ..TestCert::default()
        };
        assert_eq!(end_point_hash_algorithm(&ed25519), None);
    }

    #[test]
    fn tls_feature_extension() {
        let none = TestCert::default();
        assert_eq!(tls_features(&none).unwrap(), vec![]);

        // status_request(5), status_request_v2(17), and 0x0100
        let cert = TestCert {
            tls_feature: Some(vec![
                0x30, 0x0a, 0x02, 0x01, 0x05, 0x02, 0x01, 0x11, 0x02, 0x02, 0x01, 0x00,
            ]),
            ..TestCert::default()
        };
        assert_eq!(tls_features(&cert).unwrap(), vec![5, 17, 256]);

        let too_big = TestCert {
            tls_feature: Some(vec![0x30, 0x05, 0x02, 0x03, 0x01, 0x00, 0x00]),
            ..TestCert::default()
        };
        assert_eq!(tls_features(&too_big), Err(bad_encoding()));

        let trailing = TestCert {
            tls_feature: Some(vec![0x30, 0x00, 0x00]),
            ..TestCert::default()
        };
        assert_eq!(tls_features(&trailing), Err(bad_encoding()));
    }

    #[test]
    fn pss_params_with_other_hashes() {
        // id-sha1 named explicitly
        let sha1 = [
            0x30, 0x0b, 0xa0, 0x09, 0x30, 0x07, 0x06, 0x05, 0x2b, 0x0e, 0x03, 0x02, 0x1a,
        ];
        assert_eq!(pss_hash_algorithm(&sha1).unwrap(), None);

        // saltLength only, so the hash defaults
        let salt_only = [0x30, 0x05, 0xa2, 0x03, 0x02, 0x01, 0x20];
        assert_eq!(pss_hash_algorithm(&salt_only).unwrap(), None);

        // SHA-256 without the NULL parameters
        let sha256 = [
            0x30, 0x0f, 0xa0, 0x0d, 0x30, 0x0b, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03,
            0x04, 0x02, 0x01,
        ];
        assert_eq!(pss_hash_algorithm(&sha256).unwrap(), Some(HashAlgorithm::SHA256));
        assert_eq!(pss_hash_algorithm(&sha256[..sha256.len() - 1]), Err(bad_encoding()));

        // bytes after the AlgorithmIdentifier inside [0]
        let trailing = [
            0x30, 0x11, 0xa0, 0x0f, 0x30, 0x0b, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03,
            0x04, 0x02, 0x01, 0x05, 0x00,
        ];
        assert_eq!(pss_hash_algorithm(&trailing), Err(bad_encoding()));
    }
}
