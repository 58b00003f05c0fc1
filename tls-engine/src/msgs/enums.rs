#![allow(clippy::upper_case_acronyms)]
#![allow(non_camel_case_types)]
use crate::enums::ProtocolVersion;
use crate::msgs::codec::{Codec, Reader};

enum_builder! {
    /// The `ClientCertificateType` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    #[repr(u8)]
    pub enum ClientCertificateType {
        RSASign => 0x01,
        DSSSign => 0x02,
        RSAFixedDH => 0x03,
        DSSFixedDH => 0x04,
        RSAEphemeralDH => 0x05,
        DSSEphemeralDH => 0x06,
        FortezzaDMS => 0x14,
        ECDSASign => 0x40,
        RSAFixedECDH => 0x41,
        ECDSAFixedECDH => 0x42,
    }
}

impl ClientCertificateType {
    /// Whether a certificate of this type is used to sign `CertificateVerify`.
    pub fn has_signing_capability(self) -> bool {
        matches!(self, Self::RSASign | Self::DSSSign | Self::ECDSASign)
    }
}

enum_builder! {
    /// The `ExtensionType` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    #[repr(u16)]
    pub enum ExtensionType {
        ServerName => 0x0000,
        MaxFragmentLength => 0x0001,
        ClientCertificateUrl => 0x0002,
        TrustedCAKeys => 0x0003,
        TruncatedHMAC => 0x0004,
        StatusRequest => 0x0005,
        UserMapping => 0x0006,
        ClientAuthz => 0x0007,
        ServerAuthz => 0x0008,
        CertificateType => 0x0009,
        EllipticCurves => 0x000a,
        ECPointFormats => 0x000b,
        SRP => 0x000c,
        SignatureAlgorithms => 0x000d,
        UseSRTP => 0x000e,
        Heartbeat => 0x000f,
        ALProtocolNegotiation => 0x0010,
        StatusRequestV2 => 0x0011,
        SCT => 0x0012,
        ClientCertificateType => 0x0013,
        ServerCertificateType => 0x0014,
        Padding => 0x0015,
        EncryptThenMac => 0x0016,
        ExtendedMasterSecret => 0x0017,
        CachedInfo => 0x0019,
        CompressCertificate => 0x001b,
        RecordSizeLimit => 0x001c,
        SessionTicket => 0x0023,
        PreSharedKey => 0x0029,
        EarlyData => 0x002a,
        SupportedVersions => 0x002b,
        Cookie => 0x002c,
        PSKKeyExchangeModes => 0x002d,
        CertificateAuthorities => 0x002f,
        OIDFilters => 0x0030,
        PostHandshakeAuth => 0x0031,
        SignatureAlgorithmsCert => 0x0032,
        KeyShare => 0x0033,
        RenegotiationInfo => 0xff01,
    }
}

impl ExtensionType {
    /// Whether this extension type has a named variant.
    pub fn is_recognized(self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

enum_builder! {
    /// The `NamedGroup` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    ///
    /// This enum is used for recognizing key exchange groups advertised
    /// by a peer during a TLS handshake. It is **not** a list of groups that
    /// are supported locally; those are determined by the
    /// [`CryptoProvider`][crate::crypto::CryptoProvider] in use.
    #[repr(u16)]
    pub enum NamedGroup {
        sect163k1 => 0x0001,
        sect163r1 => 0x0002,
        sect163r2 => 0x0003,
        sect193r1 => 0x0004,
        sect193r2 => 0x0005,
        sect233k1 => 0x0006,
        sect233r1 => 0x0007,
        sect239k1 => 0x0008,
        sect283k1 => 0x0009,
        sect283r1 => 0x000a,
        sect409k1 => 0x000b,
        sect409r1 => 0x000c,
        sect571k1 => 0x000d,
        sect571r1 => 0x000e,
        secp160k1 => 0x000f,
        secp160r1 => 0x0010,
        secp160r2 => 0x0011,
        secp192k1 => 0x0012,
        secp192r1 => 0x0013,
        secp224k1 => 0x0014,
        secp224r1 => 0x0015,
        secp256k1 => 0x0016,
        secp256r1 => 0x0017,
        secp384r1 => 0x0018,
        secp521r1 => 0x0019,
        brainpoolP256r1 => 0x001a,
        brainpoolP384r1 => 0x001b,
        brainpoolP512r1 => 0x001c,
        X25519 => 0x001d,
        X448 => 0x001e,
        /// <https://www.iana.org/go/rfc8734>
        brainpoolP256r1tls13 => 0x001f,
        /// <https://www.iana.org/go/rfc8734>
        brainpoolP384r1tls13 => 0x0020,
        /// <https://www.iana.org/go/rfc8734>
        brainpoolP512r1tls13 => 0x0021,
        GC256A => 0x0022,
        GC256B => 0x0023,
        GC256C => 0x0024,
        GC256D => 0x0025,
        GC512A => 0x0026,
        GC512B => 0x0027,
        GC512C => 0x0028,
        /// <https://www.iana.org/go/rfc8998>
        curveSM2 => 0x0029,
        FFDHE2048 => 0x0100,
        FFDHE3072 => 0x0101,
        FFDHE4096 => 0x0102,
        FFDHE6144 => 0x0103,
        FFDHE8192 => 0x0104,
        arbitrary_explicit_prime_curves => 0xff01,
        arbitrary_explicit_char2_curves => 0xff02,
    }
}

impl NamedGroup {
    /// Whether this group has a named variant.
    pub fn is_valid(self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Whether this group names one specific elliptic curve.
    pub fn refers_to_a_specific_curve(self) -> bool {
        matches!(u16::from(self), 0x0001..=0x0029)
    }

    /// Whether this group names one specific finite field group.
    pub fn refers_to_a_specific_finite_field(self) -> bool {
        matches!(u16::from(self), 0x0100..=0x0104)
    }

    /// Returns whether this `NamedGroup` may be negotiated with the given protocol version.
    ///
    /// TLS 1.3 drops the binary, Koblitz, legacy brainpool, GOST and explicit
    /// curves; earlier versions cannot use the TLS 1.3 brainpool or SM2 codepoints.
    pub fn usable_for_version(self, version: ProtocolVersion) -> bool {
        let value = u16::from(self);
        let permitted = match version.is_tls13_or_later() {
            true => !matches!(value, 0x0001..=0x0016 | 0x001a..=0x001c | 0x0022..=0x0028 | 0xff01..=0xff02),
            false => !matches!(value, 0x001f..=0x0021 | 0x0029),
        };
        permitted && self.is_valid()
    }
}

enum_builder! {
    /// The `HashAlgorithm` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    #[repr(u8)]
    pub enum HashAlgorithm {
        NONE => 0x00,
        MD5 => 0x01,
        SHA1 => 0x02,
        SHA224 => 0x03,
        SHA256 => 0x04,
        SHA384 => 0x05,
        SHA512 => 0x06,
        /// The hash is part of the signature algorithm itself (RFC 8422, RFC 8446).
        Intrinsic => 0x08,
    }
}

impl HashAlgorithm {
    /// Length in bytes of this hash's output, if it is a real hash function.
    pub fn output_len(self) -> Option<usize> {
        match self {
            Self::MD5 => Some(16),
            Self::SHA1 => Some(20),
            Self::SHA224 => Some(28),
            Self::SHA256 => Some(32),
            Self::SHA384 => Some(48),
            Self::SHA512 => Some(64),
            _ => None,
        }
    }

    /// Whether this is a hash function that can actually be computed.
    pub fn is_recognized(self) -> bool {
        self.output_len().is_some()
    }
}

enum_builder! {
    /// The `SignatureAlgorithm` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    ///
    /// Values from 4 upwards are the low byte of a TLS 1.3 signature scheme
    /// whose hash is `Intrinsic`.
    #[repr(u8)]
    pub enum SignatureAlgorithm {
        Anonymous => 0x00,
        RSA => 0x01,
        DSA => 0x02,
        ECDSA => 0x03,
        RSA_PSS_RSAE_SHA256 => 0x04,
        RSA_PSS_RSAE_SHA384 => 0x05,
        RSA_PSS_RSAE_SHA512 => 0x06,
        ED25519 => 0x07,
        ED448 => 0x08,
        RSA_PSS_PSS_SHA256 => 0x09,
        RSA_PSS_PSS_SHA384 => 0x0a,
        RSA_PSS_PSS_SHA512 => 0x0b,
        ECDSA_BRAINPOOLP256R1TLS13_SHA256 => 0x1a,
        ECDSA_BRAINPOOLP384R1TLS13_SHA384 => 0x1b,
        ECDSA_BRAINPOOLP512R1TLS13_SHA512 => 0x1c,
    }
}

impl SignatureAlgorithm {
    /// The client certificate type able to produce this signature, if any.
    pub fn client_certificate_type(self) -> Option<ClientCertificateType> {
        match self {
            Self::RSA
            | Self::RSA_PSS_RSAE_SHA256
            | Self::RSA_PSS_RSAE_SHA384
            | Self::RSA_PSS_RSAE_SHA512 => Some(ClientCertificateType::RSASign),
            Self::DSA => Some(ClientCertificateType::DSSSign),
            Self::ECDSA | Self::ED25519 | Self::ED448 => Some(ClientCertificateType::ECDSASign),
            _ => None,
        }
    }

    /// The hash used by a TLS 1.3 style scheme, when it is fixed by the algorithm.
    pub fn intrinsic_hash(self) -> Option<HashAlgorithm> {
        match self {
            Self::RSA_PSS_RSAE_SHA256
            | Self::RSA_PSS_PSS_SHA256
            | Self::ECDSA_BRAINPOOLP256R1TLS13_SHA256 => Some(HashAlgorithm::SHA256),
            Self::RSA_PSS_RSAE_SHA384
            | Self::RSA_PSS_PSS_SHA384
            | Self::ECDSA_BRAINPOOLP384R1TLS13_SHA384 => Some(HashAlgorithm::SHA384),
            Self::RSA_PSS_RSAE_SHA512
            | Self::RSA_PSS_PSS_SHA512
            | Self::ECDSA_BRAINPOOLP512R1TLS13_SHA512 => Some(HashAlgorithm::SHA512),
            _ => None,
        }
    }

    /// Whether this is one of the RSASSA-PSS algorithms.
    pub fn is_rsa_pss(self) -> bool {
        matches!(
            self,
            Self::RSA_PSS_RSAE_SHA256
                | Self::RSA_PSS_RSAE_SHA384
                | Self::RSA_PSS_RSAE_SHA512
                | Self::RSA_PSS_PSS_SHA256
                | Self::RSA_PSS_PSS_SHA384
                | Self::RSA_PSS_PSS_SHA512
        )
    }
}
