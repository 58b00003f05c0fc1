//! # tls-engine - the negotiation and key schedule core of a TLS stack
//!
//! This crate holds the parts of a TLS implementation that decide *what* a
//! connection uses and derive the keys it uses, without owning sockets,
//! record framing or the handshake state machine.  A handshake driver calls
//! into it at each step, passing the session's [`SecurityParameters`].
//!
//! ## What's here
//!
//! * Wire encodings for the negotiated values: signature algorithm lists,
//!   opaque vectors, key shares, `DigitallySigned`.
//! * A registry of every recognised cipher suite and its key exchange,
//!   bulk cipher, MAC and PRF.
//! * Key schedules: the TLS 1.3 HKDF schedule (early, handshake,
//!   application, exporter and resumption secrets), the TLS 1.2 PRF, the
//!   TLS 1.0/1.1 MD5+SHA-1 PRF and the SSLv3 construction, plus RFC 5705
//!   exporters for both families.
//! * Handshake signatures: choosing, generating and verifying
//!   `CertificateVerify` and `ServerKeyExchange` signatures, and checking a
//!   peer's certificate chain against the algorithms we advertised.
//! * Negotiation policy: cipher suite and key share selection,
//!   HelloRetryRequest handling, downgrade protection, TLS 1.3 extension
//!   placement and `CertificateRequest` checks.
//! * A capability gate over a pluggable [`crypto::CryptoProvider`], so
//!   nothing is offered or accepted that the provider cannot do.
//!
//! ## Crate features
//!
//! - `ring` (enabled by default): a [`crypto::CryptoProvider`] backed by
//!   *ring*, with MD5 and SHA-224 from RustCrypto for the legacy PRFs.
//!
//! - `logging` (enabled by default): make the crate use the `log` crate
//!   to report negotiation decisions and rejected peer values.  Secret
//!   material is never logged.
//!
//! ## Getting started
//!
//! ```
//! # #[cfg(feature = "ring")] {
//! use tls_engine::{CipherSuite, NegotiationConfig, ProtocolVersion};
//!
//! let config = NegotiationConfig::builder(tls_engine::crypto::ring::default_provider())
//!     .build()
//!     .unwrap();
//!
//! let chosen = config.select_cipher_suite(
//!     ProtocolVersion::TLSv1_3,
//!     &[CipherSuite::TLS13_AES_128_GCM_SHA256],
//! );
//! assert_eq!(chosen, Ok(CipherSuite::TLS13_AES_128_GCM_SHA256));
//! # }
//! ```

// Require docs for public APIs, deny unsafe code, etc.
#![forbid(unsafe_code, unused_must_use)]
#![deny(
    clippy::clone_on_ref_ptr,
    clippy::use_self,
    trivial_casts,
    unused_import_braces,
    unused_extern_crates
)]
#![warn(missing_docs, unreachable_pub)]
// Relax these clippy lints:
// - too_many_arguments: some things just need a lot of state, wrapping it
//   doesn't necessarily make it easier to follow what's going on
// - new_ret_no_self: we sometimes return `Arc<Self>`, which seems fine
// - single_component_path_imports: our top-level `use log` import causes
//   a false positive, https://github.com/rust-lang/rust-clippy/issues/5210
// - new_without_default: for internal constructors, the indirection is not
//   helpful
#![allow(
    clippy::too_many_arguments,
    clippy::new_ret_no_self,
    clippy::single_component_path_imports,
    clippy::new_without_default
)]
// Enable documentation for all features on docs.rs
#![cfg_attr(docsrs, feature(doc_cfg))]

// log for logging (optional).
#[cfg(feature = "logging")]
use log;

#[cfg(not(feature = "logging"))]
mod log {
    macro_rules! trace    ( ($($tt:tt)*) => {{}} );
    macro_rules! debug    ( ($($tt:tt)*) => {{}} );
    macro_rules! warn     ( ($($tt:tt)*) => {{}} );
    macro_rules! error    ( ($($tt:tt)*) => {{}} );
    #[allow(unused_imports)]
    pub(crate) use {debug, error, trace, warn};
}

#[macro_use]
mod msgs;
mod enums;
mod error;

/// Cipher suite, key exchange and PRF descriptions.
pub mod suites;

/// Crypto provider interface, and the bundled *ring* provider.
pub mod crypto;

/// Certificates as the handshake sees them.
pub mod x509;

/// Secret values and the PRF/HKDF operations over them.
pub mod secret;

/// The handshake transcript hash.
pub mod hash_hs;

/// Per-session negotiated state.
pub mod security_params;

/// The TLS 1.2 and earlier key schedule.
pub mod tls12;

/// The TLS 1.3 key schedule.
pub mod tls13;

/// Choosing and generating handshake signatures.
pub mod sign;

/// Verifying handshake signatures and peer certificate chains.
pub mod verify;

/// Cipher suite, group and key share negotiation.
pub mod negotiate;

/// What a crypto provider can service.
pub mod capability;

mod config;

/// Internal classes which may be useful outside the library.
/// The contents of this section DO NOT form part of the stable interface.
pub mod internal {
    /// Low-level TLS message parsing and encoding functions.
    pub mod msgs {
        pub use crate::msgs::*;
    }
}

pub use crate::config::{
    NegotiationConfig, NegotiationConfigBuilder, DEFAULT_CIPHER_SUITES,
    DEFAULT_EARLY_KEY_SHARE_GROUPS, DEFAULT_NAMED_GROUPS,
};
pub use crate::enums::{CipherSuite, ContentType, HandshakeType, ProtocolVersion};
pub use crate::error::{
    AlertDescription, ApiMisuse, CertificateError, Error, InvalidMessage, OtherError,
    PeerIncompatible, PeerMisbehaved,
};
pub use crate::msgs::enums::{
    ClientCertificateType, ExtensionType, HashAlgorithm, NamedGroup, SignatureAlgorithm,
};
pub use crate::msgs::handshake::{
    CertificateRequest, DigitallySigned, KeyShareEntry, SignatureAndHashAlgorithm,
};
pub use crate::secret::TlsSecret;
pub use crate::security_params::{SecurityParameters, Side};
