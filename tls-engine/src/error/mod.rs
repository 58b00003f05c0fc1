//! Error types used throughout tls-engine.

use core::fmt;
use std::error::Error as StdError;
use std::string::String;
use std::sync::Arc;

use crate::msgs::codec::{Codec, Reader};

#[cfg(test)]
mod tests;

/// tls-engine reports protocol errors using this type.
///
/// Every variant is fatal to the handshake in progress.  Use
/// [`AlertDescription::try_from`] to find the alert the caller should send
/// before closing the connection.
#[non_exhaustive]
#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    /// The peer sent us a TLS message with invalid contents.
    InvalidMessage(InvalidMessage),

    /// We couldn't decrypt a record.  This is invariably fatal.
    DecryptError,

    /// The peer doesn't support a protocol version/feature we require.
    /// The parameter gives a hint as to what version/feature it is.
    PeerIncompatible(PeerIncompatible),

    /// The peer deviated from the standard TLS protocol.
    /// The parameter gives a hint where.
    PeerMisbehaved(PeerMisbehaved),

    /// We saw an invalid certificate, or a handshake signature that did
    /// not verify.
    InvalidCertificate(CertificateError),

    /// A catch-all error for unlikely errors.
    General(String),

    /// We failed to acquire random bytes from the system.
    FailedToGetRandomBytes,

    /// Errors of this variant should never be produced by the library.
    ///
    /// Please file a bug if you see one.
    Unreachable(&'static str),

    /// The caller misused the API.
    ///
    /// This only results from the ordering, dependencies or parameter values
    /// of calls.  These are never caused by the values of untrusted data.
    ApiMisuse(ApiMisuse),

    /// Any other error.
    ///
    /// This variant should only be used when the error is not better described by a more
    /// specific variant, for example an error from a custom crypto provider.
    ///
    /// Enums holding this variant will never compare equal to each other.
    Other(OtherError),
}

/// Determine which alert should be sent for a given error.
///
/// If this mapping fails, no alert is sent.
impl TryFrom<&Error> for AlertDescription {
    type Error = ();

    fn try_from(error: &Error) -> Result<Self, Self::Error> {
        Ok(match error {
            Error::DecryptError => Self::BadRecordMac,
            Error::InvalidCertificate(e) => Self::from(e),
            Error::InvalidMessage(e) => Self::from(*e),
            Error::PeerMisbehaved(e) => Self::from(*e),
            Error::PeerIncompatible(e) => Self::from(*e),
            Error::ApiMisuse(_) | Error::Unreachable(_) | Error::FailedToGetRandomBytes => {
                Self::InternalError
            }

            _ => return Err(()),
        })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMessage(typ) => {
                write!(f, "received corrupt message of type {typ:?}")
            }
            Self::PeerIncompatible(why) => write!(f, "peer is incompatible: {why:?}"),
            Self::PeerMisbehaved(why) => write!(f, "peer misbehaved: {why:?}"),
            Self::InvalidCertificate(err) => {
                write!(f, "invalid peer certificate: {err}")
            }
            Self::DecryptError => write!(f, "cannot decrypt peer's message"),
            Self::FailedToGetRandomBytes => write!(f, "failed to get random bytes"),
            Self::General(err) => write!(f, "unexpected error: {err}"),
            Self::Unreachable(err) => write!(
                f,
                "unreachable condition: {err} (please file a bug in tls-engine)"
            ),
            Self::ApiMisuse(why) => write!(f, "API misuse: {why}"),
            Self::Other(err) => write!(f, "other error: {err}"),
        }
    }
}

impl From<CertificateError> for Error {
    #[inline]
    fn from(e: CertificateError) -> Self {
        Self::InvalidCertificate(e)
    }
}

impl From<InvalidMessage> for Error {
    #[inline]
    fn from(e: InvalidMessage) -> Self {
        Self::InvalidMessage(e)
    }
}

impl From<PeerMisbehaved> for Error {
    #[inline]
    fn from(e: PeerMisbehaved) -> Self {
        Self::PeerMisbehaved(e)
    }
}

impl From<PeerIncompatible> for Error {
    #[inline]
    fn from(e: PeerIncompatible) -> Self {
        Self::PeerIncompatible(e)
    }
}

impl From<ApiMisuse> for Error {
    fn from(e: ApiMisuse) -> Self {
        Self::ApiMisuse(e)
    }
}

impl From<OtherError> for Error {
    fn from(value: OtherError) -> Self {
        Self::Other(value)
    }
}

impl From<GetRandomFailed> for Error {
    fn from(_: GetRandomFailed) -> Self {
        Self::FailedToGetRandomBytes
    }
}

impl StdError for Error {}

/// Random material generation failed.
#[derive(Debug)]
pub struct GetRandomFailed;

/// The ways in which certificate and handshake signature checks can fail.
///
/// The protocol code interprets specifically these error codes to send
/// specific TLS alerts.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum CertificateError {
    /// The certificate is not correctly encoded.
    BadEncoding,

    /// A handshake signature made with this certificate's key did not verify,
    /// or the verifier failed while checking it.
    BadSignature,

    /// A certificate in the peer's chain was signed with an algorithm that
    /// is unrecognised or not permitted by the negotiated constraints.
    UnsupportedSignatureAlgorithmInChain,

    /// The peer's end-entity certificate is of a type that the negotiated
    /// parameters do not allow.
    UnsupportedCertificateType,

    /// The certificate carries a TLS feature (RFC 7633) that was offered by
    /// the client but not confirmed by the server.
    MissingRequiredTlsFeature(u16),
}

impl From<&CertificateError> for AlertDescription {
    fn from(e: &CertificateError) -> Self {
        use CertificateError::*;
        match e {
            BadEncoding | UnsupportedSignatureAlgorithmInChain => Self::BadCertificate,
            BadSignature => Self::DecryptError,
            UnsupportedCertificateType => Self::UnsupportedCertificate,
            // RFC 5246/RFC 8446
            // certificate_unknown
            //  Some other (unspecified) issue arose in processing the
            //  certificate, rendering it unacceptable.
            MissingRequiredTlsFeature(_) => Self::CertificateUnknown,
        }
    }
}

impl fmt::Display for CertificateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequiredTlsFeature(typ) => write!(
                f,
                "certificate requires TLS feature {typ} which the server did not confirm"
            ),
            other => write!(f, "{other:?}"),
        }
    }
}

enum_builder! {
    /// The `AlertDescription` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    #[repr(u8)]
    pub enum AlertDescription {
        CloseNotify => 0x00,
        UnexpectedMessage => 0x0a,
        BadRecordMac => 0x14,
        DecryptionFailed => 0x15,
        RecordOverflow => 0x16,
        DecompressionFailure => 0x1e,
        HandshakeFailure => 0x28,
        NoCertificate => 0x29,
        BadCertificate => 0x2a,
        UnsupportedCertificate => 0x2b,
        CertificateRevoked => 0x2c,
        CertificateExpired => 0x2d,
        CertificateUnknown => 0x2e,
        IllegalParameter => 0x2f,
        UnknownCa => 0x30,
        AccessDenied => 0x31,
        DecodeError => 0x32,
        DecryptError => 0x33,
        ExportRestriction => 0x3c,
        ProtocolVersion => 0x46,
        InsufficientSecurity => 0x47,
        InternalError => 0x50,
        InappropriateFallback => 0x56,
        UserCanceled => 0x5a,
        NoRenegotiation => 0x64,
        MissingExtension => 0x6d,
        UnsupportedExtension => 0x6e,
        CertificateUnobtainable => 0x6f,
        UnrecognizedName => 0x70,
        BadCertificateStatusResponse => 0x71,
        BadCertificateHashValue => 0x72,
        UnknownPskIdentity => 0x73,
        CertificateRequired => 0x74,
        NoApplicationProtocol => 0x78,
    }
}

impl fmt::Display for AlertDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // these should be:
        // - in past tense
        // - be syntactically correct if prefaced with 'the peer' to describe
        //   received alerts
        match self {
            // this is normal.
            Self::CloseNotify => write!(f, "cleanly closed the connection"),

            // these are abnormal.  they are usually symptomatic of an interop failure.
            Self::UnexpectedMessage => write!(f, "received an unexpected message"),
            Self::BadRecordMac => write!(f, "failed to verify a message"),
            Self::RecordOverflow => write!(f, "rejected an over-length message"),
            Self::IllegalParameter => write!(
                f,
                "rejected a message because a field was incorrect or inconsistent"
            ),
            Self::DecodeError => write!(f, "failed to decode a message"),
            Self::DecryptError => {
                write!(f, "failed to perform a handshake cryptographic operation")
            }
            Self::InappropriateFallback => {
                write!(f, "detected an attempted version downgrade")
            }
            Self::MissingExtension => {
                write!(f, "required a specific extension that was not provided")
            }
            Self::UnsupportedExtension => write!(f, "rejected an unsolicited extension"),

            // these are deprecated by TLS1.3 and should be very rare (but possible
            // with TLS1.2 or earlier peers)
            Self::DecryptionFailed => write!(f, "failed to decrypt a message"),
            Self::DecompressionFailure => write!(f, "failed to decompress a message"),
            Self::NoCertificate => write!(f, "found no certificate"),
            Self::ExportRestriction => write!(f, "refused due to export restrictions"),
            Self::NoRenegotiation => write!(f, "rejected an attempt at renegotiation"),
            Self::CertificateUnobtainable => {
                write!(f, "failed to retrieve its certificate")
            }
            Self::BadCertificateHashValue => {
                write!(f, "rejected the `certificate_hash` extension")
            }

            // the peer cannot choose compatible parameters given our offer.
            Self::HandshakeFailure => write!(
                f,
                "failed to negotiate an acceptable set of security parameters"
            ),
            Self::ProtocolVersion => write!(f, "did not support a suitable TLS version"),
            Self::InsufficientSecurity => {
                write!(f, "required a higher security level than was offered")
            }

            // these usually indicate a local misconfiguration, either in certificate selection
            // or issuance.
            Self::BadCertificate => {
                write!(
                    f,
                    "rejected the certificate as corrupt or incorrectly signed"
                )
            }
            Self::UnsupportedCertificate => {
                write!(f, "did not support the certificate")
            }
            Self::CertificateRevoked => write!(f, "found the certificate to be revoked"),
            Self::CertificateExpired => write!(f, "found the certificate to be expired"),
            Self::CertificateUnknown => {
                write!(f, "rejected the certificate for an unspecified reason")
            }
            Self::UnknownCa => write!(f, "found the certificate was not issued by a trusted CA"),
            Self::BadCertificateStatusResponse => {
                write!(f, "rejected the certificate status response")
            }
            Self::AccessDenied => write!(f, "denied access"),
            Self::CertificateRequired => write!(f, "required a client certificate"),

            Self::InternalError => write!(f, "encountered an internal error"),
            Self::UserCanceled => write!(f, "canceled the handshake"),

            Self::UnrecognizedName => {
                write!(f, "did not recognize a name in the `server_name` extension")
            }
            Self::UnknownPskIdentity => {
                write!(f, "did not recognize any offered PSK identity")
            }
            Self::NoApplicationProtocol => write!(
                f,
                "did not support any of the offered application protocols"
            ),

            Self::Unknown(n) => write!(f, "sent an unknown alert (0x{n:02x?})"),
        }
    }
}

/// A corrupt TLS message payload that resulted in an error.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidMessage {
    /// Message is shorter than the expected length
    MessageTooShort,
    /// A TLS message payload was larger than allowed.
    MessageTooLarge,
    /// Missing data for the named handshake payload value
    MissingData(&'static str),
    /// Trailing data found for the named handshake payload value
    TrailingData(&'static str),
    /// A length-prefixed value was shorter than its minimum length.
    ///
    /// The argument names the context.
    LengthBelowMinimum(&'static str),
    /// A list's byte length is not a multiple of its element size.
    ///
    /// The argument names the context.
    InvalidListLength(&'static str),
    /// A peer sent an empty list of items, but a non-empty list is required.
    ///
    /// The argument names the context.
    IllegalEmptyList(&'static str),
    /// A peer sent a message where a given extension type was repeated
    DuplicateExtension(u16),
}

impl From<InvalidMessage> for AlertDescription {
    fn from(e: InvalidMessage) -> Self {
        match e {
            InvalidMessage::DuplicateExtension(_) => Self::IllegalParameter,
            _ => Self::DecodeError,
        }
    }
}

/// The set of cases where we failed to make a connection because we thought
/// the peer was misbehaving.
///
/// This is `non_exhaustive`: we might add or stop using items here in minor
/// versions.  Generally a user shouldn't vary its behaviour on these error
/// codes, and there is nothing it can do to improve matters.
#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PeerMisbehaved {
    AttemptedDowngradeToTls12WhenTls13IsSupported,
    AttemptedDowngradeToTls11WhenTls12IsSupported,
    CertificateRequestWithoutUsableCertificateTypes,
    DisallowedExtension,
    DuplicatePeerCertificate,
    IllegalHelloRetryRequestWithOfferedGroup,
    IllegalHelloRetryRequestWithUnofferedNamedGroup,
    IllegalTlsInnerPlaintext,
    InvalidKeyShare,
    SelectedInvalidCipherSuite,
    SelectedInvalidKeyShare,
    SelectedUnofferedCipherSuite,
    SelectedUnofferedKxGroup,
    SelectedUnsupportedVersionForCipherSuite,
    SignedHandshakeWithUnadvertisedSigScheme,
    SignedKxWithWrongAlgorithm,
    UnexpectedCertificateRequest,
    UnsolicitedEncryptedExtension,
    WrongGroupForKeyShare,
}

impl From<PeerMisbehaved> for AlertDescription {
    fn from(e: PeerMisbehaved) -> Self {
        match e {
            PeerMisbehaved::UnsolicitedEncryptedExtension => Self::UnsupportedExtension,

            PeerMisbehaved::UnexpectedCertificateRequest
            | PeerMisbehaved::DuplicatePeerCertificate
            | PeerMisbehaved::IllegalTlsInnerPlaintext => Self::UnexpectedMessage,

            _ => Self::IllegalParameter,
        }
    }
}

/// The set of cases where we failed to make a connection because a peer
/// doesn't support a TLS version/feature we require.
///
/// This is `non_exhaustive`: we might add or stop using items here in minor
/// versions.
#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PeerIncompatible {
    ExtendedMasterSecretExtensionRequired,
    NoCipherSuitesInCommon,
    NoKxGroupsInCommon,
    NoSignatureSchemesInCommon,
    SignatureAlgorithmsExtensionRequired,
}

impl From<PeerIncompatible> for AlertDescription {
    fn from(_: PeerIncompatible) -> Self {
        Self::HandshakeFailure
    }
}

/// Describes cases of API misuse
///
/// Variants here should be sufficiently detailed that the action needed is clear.
/// They always surface to the peer as an `internal_error` alert.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum ApiMisuse {
    /// A value does not fit in the fixed-width wire field it is being encoded into.
    ValueOutOfRange {
        /// Width of the field, in bits
        bits: u32,
        /// The offending value
        value: u64,
    },

    /// A key schedule or transcript operation was attempted before a PRF
    /// algorithm was negotiated.
    NoPrfNegotiated,

    /// An operation needed a negotiated value that has not been set yet.
    ///
    /// The argument names the missing value.
    MissingNegotiatedValue(&'static str),

    /// A secret was used after it was destroyed, consumed or adopted elsewhere.
    SecretDestroyed,

    /// A phase secret was derived twice in one handshake.
    PhaseSecretsAlreadyEstablished,

    /// The operation is not defined for the negotiated protocol version.
    UnsupportedForProtocolVersion,

    /// The crypto provider offered no implementation for an algorithm that was
    /// previously declared supported.
    AlgorithmNotProvided,

    /// The `anonymous` signature algorithm cannot be advertised.
    AnonymousSignatureAlgorithm,

    /// Signature algorithm lists must contain between 1 and 2^15-1 entries.
    SignatureAlgorithmListLength,

    /// A signer for TLS1.2 or later was not configured with a signature algorithm.
    SignerWithoutAlgorithm,

    /// Credentials of a different kind were required.
    UnexpectedCredentialKind,

    /// The `context` parameter to an exporter was too long.
    ///
    /// For TLS1.2 connections (only) this parameter is limited to 64KB.
    ExporterContextTooLong,

    /// The requested exporter output length was too long.
    ///
    /// For TLS1.3 connections this is limited to 255 times the hash output length.
    ExporterOutputTooLong,

    /// A key derivation was asked for more output than its construction can produce.
    KeyDerivationOutputTooLong,

    /// The negotiated cipher suite is not in the registry.
    UnknownCipherSuite,
}

impl fmt::Display for ApiMisuse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl StdError for ApiMisuse {}

mod other_error {
    use core::fmt;
    use std::error::Error as StdError;
    use std::sync::Arc;

    /// Any other error that cannot be expressed by a more specific [`Error`][super::Error]
    /// variant.
    ///
    /// For example, an `OtherError` could be produced by a custom crypto provider
    /// exposing a provider specific error.
    ///
    /// Enums holding this type will never compare equal to each other.
    #[derive(Debug, Clone)]
    pub struct OtherError(pub Arc<dyn StdError + Send + Sync>);

    impl PartialEq<Self> for OtherError {
        fn eq(&self, _other: &Self) -> bool {
            false
        }
    }

    impl fmt::Display for OtherError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl StdError for OtherError {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(self.0.as_ref())
        }
    }
}

pub use other_error::OtherError;

impl OtherError {
    /// Wrap any error type.
    pub fn new(err: impl StdError + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }
}
