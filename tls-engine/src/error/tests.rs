use std::prelude::v1::*;
use std::{fmt, println, vec};

use super::{
    AlertDescription, ApiMisuse, CertificateError, Error, GetRandomFailed, InvalidMessage,
    OtherError, PeerIncompatible, PeerMisbehaved,
};
use crate::msgs::enums::tests::test_enum8_display;

#[derive(Debug)]
struct TestError;

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "test error")
    }
}

impl std::error::Error for TestError {}

#[test]
fn certificate_error_equality() {
    use super::CertificateError::*;
    assert_eq!(BadEncoding, BadEncoding);
    assert_eq!(BadSignature, BadSignature);
    assert_eq!(
        UnsupportedSignatureAlgorithmInChain,
        UnsupportedSignatureAlgorithmInChain
    );
    assert_eq!(UnsupportedCertificateType, UnsupportedCertificateType);
    assert_eq!(MissingRequiredTlsFeature(5), MissingRequiredTlsFeature(5));
    assert_ne!(MissingRequiredTlsFeature(5), MissingRequiredTlsFeature(17));
    assert_ne!(BadEncoding, BadSignature);
}

#[test]
fn other_error_never_equal() {
    let err = Error::Other(OtherError::new(TestError));
    assert_ne!(err, err.clone());
    assert_eq!(format!("{err}"), "other error: test error");
}

#[test]
fn alert_for_each_error_family() {
    let cases = vec![
        (
            Error::InvalidMessage(InvalidMessage::MessageTooShort),
            AlertDescription::DecodeError,
        ),
        (
            Error::InvalidMessage(InvalidMessage::DuplicateExtension(43)),
            AlertDescription::IllegalParameter,
        ),
        (
            PeerMisbehaved::SelectedUnofferedCipherSuite.into(),
            AlertDescription::IllegalParameter,
        ),
        (
            PeerMisbehaved::UnsolicitedEncryptedExtension.into(),
            AlertDescription::UnsupportedExtension,
        ),
        (
            PeerMisbehaved::DuplicatePeerCertificate.into(),
            AlertDescription::UnexpectedMessage,
        ),
        (
            PeerMisbehaved::UnexpectedCertificateRequest.into(),
            AlertDescription::UnexpectedMessage,
        ),
        (
            PeerMisbehaved::CertificateRequestWithoutUsableCertificateTypes.into(),
            AlertDescription::IllegalParameter,
        ),
        (
            CertificateError::UnsupportedCertificateType.into(),
            AlertDescription::UnsupportedCertificate,
        ),
        (
            CertificateError::BadEncoding.into(),
            AlertDescription::BadCertificate,
        ),
        (
            CertificateError::UnsupportedSignatureAlgorithmInChain.into(),
            AlertDescription::BadCertificate,
        ),
        (
            CertificateError::BadSignature.into(),
            AlertDescription::DecryptError,
        ),
        (
            CertificateError::MissingRequiredTlsFeature(5).into(),
            AlertDescription::CertificateUnknown,
        ),
        (
            PeerIncompatible::NoCipherSuitesInCommon.into(),
            AlertDescription::HandshakeFailure,
        ),
        (
            ApiMisuse::NoPrfNegotiated.into(),
            AlertDescription::InternalError,
        ),
        (
            Error::Unreachable("test"),
            AlertDescription::InternalError,
        ),
        (GetRandomFailed.into(), AlertDescription::InternalError),
        (Error::DecryptError, AlertDescription::BadRecordMac),
    ];

    for (err, alert) in cases {
        println!("{err:?} -> {alert:?}");
        assert_eq!(AlertDescription::try_from(&err), Ok(alert));
    }

    assert_eq!(
        AlertDescription::try_from(&Error::General("x".into())),
        Err(())
    );
}

#[test]
fn smoke() {
    let all = vec![
        Error::InvalidMessage(InvalidMessage::TrailingData("opaque")),
        Error::PeerIncompatible(PeerIncompatible::SignatureAlgorithmsExtensionRequired),
        Error::PeerMisbehaved(PeerMisbehaved::InvalidKeyShare),
        Error::InvalidCertificate(CertificateError::BadEncoding),
        Error::InvalidCertificate(CertificateError::MissingRequiredTlsFeature(5)),
        Error::DecryptError,
        Error::FailedToGetRandomBytes,
        Error::General("undocumented error".to_string()),
        Error::Unreachable("smoke"),
        Error::ApiMisuse(ApiMisuse::ValueOutOfRange {
            bits: 8,
            value: 256,
        }),
        Error::Other(OtherError::new(TestError)),
    ];

    for err in all {
        println!("{err:?}:");
        println!("  fmt '{err}'");
    }
}

#[test]
fn alert_display() {
    println!("Review the following error messages for syntax and grammar errors:");
    for u in 0..=u8::MAX {
        let err = Error::from(CertificateError::MissingRequiredTlsFeature(u16::from(u)));
        let _ = err.to_string();
    }

    test_enum8_display::<AlertDescription>(
        AlertDescription::CloseNotify,
        AlertDescription::NoApplicationProtocol,
    );
}

#[test]
fn rand_error_mapping() {
    let err: Error = GetRandomFailed.into();
    assert_eq!(err, Error::FailedToGetRandomBytes);
}
