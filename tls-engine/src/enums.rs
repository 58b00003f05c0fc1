#![allow(non_camel_case_types)]
#![allow(clippy::upper_case_acronyms)]
use crate::msgs::codec::{Codec, Reader};

enum_builder! {
    /// The `HandshakeType` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    #[repr(u8)]
    pub enum HandshakeType {
        HelloRequest => 0x00,
        ClientHello => 0x01,
        ServerHello => 0x02,
        HelloVerifyRequest => 0x03,
        NewSessionTicket => 0x04,
        EndOfEarlyData => 0x05,
        HelloRetryRequest => 0x06,
        EncryptedExtensions => 0x08,
        RequestConnectionId => 0x09,
        NewConnectionId => 0x0a,
        Certificate => 0x0b,
        ServerKeyExchange => 0x0c,
        CertificateRequest => 0x0d,
        ServerHelloDone => 0x0e,
        CertificateVerify => 0x0f,
        ClientKeyExchange => 0x10,
        Finished => 0x14,
        CertificateURL => 0x15,
        CertificateStatus => 0x16,
        SupplementalData => 0x17,
        KeyUpdate => 0x18,
        CompressedCertificate => 0x19,
        MessageHash => 0xfe,
    }
}

enum_builder! {
    /// The `ContentType` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    #[repr(u8)]
    pub enum ContentType {
        ChangeCipherSpec => 0x14,
        Alert => 0x15,
        Handshake => 0x16,
        ApplicationData => 0x17,
        Heartbeat => 0x18,
    }
}

enum_builder! {
    /// The `ProtocolVersion` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    #[repr(u16)]
    pub enum ProtocolVersion {
        SSLv2 => 0x0200,
        SSLv3 => 0x0300,
        TLSv1_0 => 0x0301,
        TLSv1_1 => 0x0302,
        TLSv1_2 => 0x0303,
        TLSv1_3 => 0x0304,
        DTLSv1_0 => 0xFEFF,
        DTLSv1_2 => 0xFEFD,
        DTLSv1_3 => 0xFEFC,
    }
}

impl ProtocolVersion {
    /// The high byte of the wire encoding.
    pub fn major(self) -> u8 {
        self.to_array()[0]
    }

    /// The low byte of the wire encoding.
    pub fn minor(self) -> u8 {
        self.to_array()[1]
    }

    /// SSL 3.0 only.
    pub fn is_ssl(self) -> bool {
        self == Self::SSLv3
    }

    /// Any version in the SSL 3.0/TLS family.
    pub fn is_tls(self) -> bool {
        self.major() == 0x03
    }

    /// Any version in the DTLS family.
    pub fn is_dtls(self) -> bool {
        self.major() == 0xfe
    }

    /// The TLS version whose record protection and key schedule this version uses.
    ///
    /// TLS versions map to themselves.  DTLS 1.0 was derived from TLS 1.1.
    /// Returns `None` for unrecognised DTLS versions and other families.
    pub fn equivalent_tls_version(self) -> Option<Self> {
        match self.major() {
            0x03 => Some(self),
            0xfe => match self {
                Self::DTLSv1_0 => Some(Self::TLSv1_1),
                Self::DTLSv1_2 => Some(Self::TLSv1_2),
                Self::DTLSv1_3 => Some(Self::TLSv1_3),
                _ => None,
            },
            _ => None,
        }
    }

    /// Whether `self` precedes `other` in the same protocol family.
    ///
    /// DTLS minor versions count downwards.  Versions from different
    /// families are never ordered.
    pub fn is_earlier_version_of(self, other: Self) -> bool {
        if self.major() != other.major() {
            return false;
        }

        match self.is_dtls() {
            true => self.minor() > other.minor(),
            false => self.minor() < other.minor(),
        }
    }

    /// Whether `self` is `other`, or precedes it in the same family.
    pub fn is_equal_or_earlier_version_of(self, other: Self) -> bool {
        self == other || self.is_earlier_version_of(other)
    }

    /// Whether `self` follows `other` in the same protocol family.
    pub fn is_later_version_of(self, other: Self) -> bool {
        other.is_earlier_version_of(self)
    }

    /// Whether `self` is `other`, or follows it in the same family.
    pub fn is_equal_or_later_version_of(self, other: Self) -> bool {
        self == other || self.is_later_version_of(other)
    }

    fn is_at_least_tls(self, floor: Self) -> bool {
        match self.equivalent_tls_version() {
            Some(tls) => tls.is_equal_or_later_version_of(floor),
            None => false,
        }
    }

    /// TLS 1.1, DTLS 1.0 or anything later.
    pub fn is_tls11_or_later(self) -> bool {
        self.is_at_least_tls(Self::TLSv1_1)
    }

    /// TLS 1.2, DTLS 1.2 or anything later.
    pub fn is_tls12_or_later(self) -> bool {
        self.is_at_least_tls(Self::TLSv1_2)
    }

    /// TLS 1.3, DTLS 1.3 or anything later.
    pub fn is_tls13_or_later(self) -> bool {
        self.is_at_least_tls(Self::TLSv1_3)
    }

    /// Exactly TLS 1.2 or DTLS 1.2.
    pub fn is_tls12_exactly(self) -> bool {
        self.is_tls12_or_later() && !self.is_tls13_or_later()
    }

    /// TLS versions a session can be negotiated at: 1.0 to 1.3.
    ///
    /// SSL 3.0 keys can still be derived for legacy peers, but a new
    /// session is never negotiated at that version.
    pub fn is_supported_tls_version(self) -> bool {
        matches!(
            self,
            Self::TLSv1_0 | Self::TLSv1_1 | Self::TLSv1_2 | Self::TLSv1_3
        )
    }

    /// DTLS versions a session can be negotiated at: 1.0 and 1.2.
    pub fn is_supported_dtls_version(self) -> bool {
        matches!(self, Self::DTLSv1_0 | Self::DTLSv1_2)
    }

    /// Whether the `signature_algorithms` extension exists at this version.
    pub fn allows_signature_algorithms(self) -> bool {
        self.is_tls12_or_later()
    }
}

enum_builder! {
    /// The `CipherSuite` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    #[repr(u16)]
    pub enum CipherSuite {
        /// The `TLS_NULL_WITH_NULL_NULL` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_NULL_WITH_NULL_NULL => 0x0000,

        /// The `TLS_RSA_WITH_NULL_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_RSA_WITH_NULL_SHA => 0x0002,

        /// The `TLS_RSA_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_RSA_WITH_3DES_EDE_CBC_SHA => 0x000a,

        /// The `TLS_DH_DSS_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DH_DSS_WITH_3DES_EDE_CBC_SHA => 0x000d,

        /// The `TLS_DH_RSA_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DH_RSA_WITH_3DES_EDE_CBC_SHA => 0x0010,

        /// The `TLS_DHE_DSS_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DHE_DSS_WITH_3DES_EDE_CBC_SHA => 0x0013,

        /// The `TLS_DHE_RSA_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DHE_RSA_WITH_3DES_EDE_CBC_SHA => 0x0016,

        /// The `TLS_DH_anon_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DH_anon_WITH_3DES_EDE_CBC_SHA => 0x001b,

        /// The `TLS_PSK_WITH_NULL_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc4785>
        TLS_PSK_WITH_NULL_SHA => 0x002c,

        /// The `TLS_DHE_PSK_WITH_NULL_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc4785>
        TLS_DHE_PSK_WITH_NULL_SHA => 0x002d,

        /// The `TLS_RSA_PSK_WITH_NULL_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc4785>
        TLS_RSA_PSK_WITH_NULL_SHA => 0x002e,

        /// The `TLS_RSA_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_RSA_WITH_AES_128_CBC_SHA => 0x002f,

        /// The `TLS_DH_DSS_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DH_DSS_WITH_AES_128_CBC_SHA => 0x0030,

        /// The `TLS_DH_RSA_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DH_RSA_WITH_AES_128_CBC_SHA => 0x0031,

        /// The `TLS_DHE_DSS_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DHE_DSS_WITH_AES_128_CBC_SHA => 0x0032,

        /// The `TLS_DHE_RSA_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DHE_RSA_WITH_AES_128_CBC_SHA => 0x0033,

        /// The `TLS_DH_anon_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DH_anon_WITH_AES_128_CBC_SHA => 0x0034,

        /// The `TLS_RSA_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_RSA_WITH_AES_256_CBC_SHA => 0x0035,

        /// The `TLS_DH_DSS_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DH_DSS_WITH_AES_256_CBC_SHA => 0x0036,

        /// The `TLS_DH_RSA_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DH_RSA_WITH_AES_256_CBC_SHA => 0x0037,

        /// The `TLS_DHE_DSS_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DHE_DSS_WITH_AES_256_CBC_SHA => 0x0038,

        /// The `TLS_DHE_RSA_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DHE_RSA_WITH_AES_256_CBC_SHA => 0x0039,

        /// The `TLS_DH_anon_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DH_anon_WITH_AES_256_CBC_SHA => 0x003a,

        /// The `TLS_RSA_WITH_NULL_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_RSA_WITH_NULL_SHA256 => 0x003b,

        /// The `TLS_RSA_WITH_AES_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_RSA_WITH_AES_128_CBC_SHA256 => 0x003c,

        /// The `TLS_RSA_WITH_AES_256_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_RSA_WITH_AES_256_CBC_SHA256 => 0x003d,

        /// The `TLS_DH_DSS_WITH_AES_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DH_DSS_WITH_AES_128_CBC_SHA256 => 0x003e,

        /// The `TLS_DH_RSA_WITH_AES_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DH_RSA_WITH_AES_128_CBC_SHA256 => 0x003f,

        /// The `TLS_DHE_DSS_WITH_AES_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DHE_DSS_WITH_AES_128_CBC_SHA256 => 0x0040,

        /// The `TLS_RSA_WITH_CAMELLIA_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_RSA_WITH_CAMELLIA_128_CBC_SHA => 0x0041,

        /// The `TLS_DH_DSS_WITH_CAMELLIA_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DH_DSS_WITH_CAMELLIA_128_CBC_SHA => 0x0042,

        /// The `TLS_DH_RSA_WITH_CAMELLIA_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DH_RSA_WITH_CAMELLIA_128_CBC_SHA => 0x0043,

        /// The `TLS_DHE_DSS_WITH_CAMELLIA_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DHE_DSS_WITH_CAMELLIA_128_CBC_SHA => 0x0044,

        /// The `TLS_DHE_RSA_WITH_CAMELLIA_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DHE_RSA_WITH_CAMELLIA_128_CBC_SHA => 0x0045,

        /// The `TLS_DH_anon_WITH_CAMELLIA_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DH_anon_WITH_CAMELLIA_128_CBC_SHA => 0x0046,

        /// The `TLS_DHE_RSA_WITH_AES_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DHE_RSA_WITH_AES_128_CBC_SHA256 => 0x0067,

        /// The `TLS_DH_DSS_WITH_AES_256_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DH_DSS_WITH_AES_256_CBC_SHA256 => 0x0068,

        /// The `TLS_DH_RSA_WITH_AES_256_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DH_RSA_WITH_AES_256_CBC_SHA256 => 0x0069,

        /// The `TLS_DHE_DSS_WITH_AES_256_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DHE_DSS_WITH_AES_256_CBC_SHA256 => 0x006a,

        /// The `TLS_DHE_RSA_WITH_AES_256_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DHE_RSA_WITH_AES_256_CBC_SHA256 => 0x006b,

        /// The `TLS_DH_anon_WITH_AES_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DH_anon_WITH_AES_128_CBC_SHA256 => 0x006c,

        /// The `TLS_DH_anon_WITH_AES_256_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5246>
        TLS_DH_anon_WITH_AES_256_CBC_SHA256 => 0x006d,

        /// The `TLS_RSA_WITH_CAMELLIA_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_RSA_WITH_CAMELLIA_256_CBC_SHA => 0x0084,

        /// The `TLS_DH_DSS_WITH_CAMELLIA_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DH_DSS_WITH_CAMELLIA_256_CBC_SHA => 0x0085,

        /// The `TLS_DH_RSA_WITH_CAMELLIA_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DH_RSA_WITH_CAMELLIA_256_CBC_SHA => 0x0086,

        /// The `TLS_DHE_DSS_WITH_CAMELLIA_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DHE_DSS_WITH_CAMELLIA_256_CBC_SHA => 0x0087,

        /// The `TLS_DHE_RSA_WITH_CAMELLIA_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DHE_RSA_WITH_CAMELLIA_256_CBC_SHA => 0x0088,

        /// The `TLS_DH_anon_WITH_CAMELLIA_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DH_anon_WITH_CAMELLIA_256_CBC_SHA => 0x0089,

        /// The `TLS_PSK_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc4279>
        TLS_PSK_WITH_3DES_EDE_CBC_SHA => 0x008b,

        /// The `TLS_PSK_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc4279>
        TLS_PSK_WITH_AES_128_CBC_SHA => 0x008c,

        /// The `TLS_PSK_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc4279>
        TLS_PSK_WITH_AES_256_CBC_SHA => 0x008d,

        /// The `TLS_DHE_PSK_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc4279>
        TLS_DHE_PSK_WITH_3DES_EDE_CBC_SHA => 0x008f,

        /// The `TLS_DHE_PSK_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc4279>
        TLS_DHE_PSK_WITH_AES_128_CBC_SHA => 0x0090,

        /// The `TLS_DHE_PSK_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc4279>
        TLS_DHE_PSK_WITH_AES_256_CBC_SHA => 0x0091,

        /// The `TLS_RSA_PSK_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc4279>
        TLS_RSA_PSK_WITH_3DES_EDE_CBC_SHA => 0x0093,

        /// The `TLS_RSA_PSK_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc4279>
        TLS_RSA_PSK_WITH_AES_128_CBC_SHA => 0x0094,

        /// The `TLS_RSA_PSK_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc4279>
        TLS_RSA_PSK_WITH_AES_256_CBC_SHA => 0x0095,

        /// The `TLS_RSA_WITH_SEED_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc4162>
        TLS_RSA_WITH_SEED_CBC_SHA => 0x0096,

        /// The `TLS_DH_DSS_WITH_SEED_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc4162>
        TLS_DH_DSS_WITH_SEED_CBC_SHA => 0x0097,

        /// The `TLS_DH_RSA_WITH_SEED_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc4162>
        TLS_DH_RSA_WITH_SEED_CBC_SHA => 0x0098,

        /// The `TLS_DHE_DSS_WITH_SEED_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc4162>
        TLS_DHE_DSS_WITH_SEED_CBC_SHA => 0x0099,

        /// The `TLS_DHE_RSA_WITH_SEED_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc4162>
        TLS_DHE_RSA_WITH_SEED_CBC_SHA => 0x009a,

        /// The `TLS_DH_anon_WITH_SEED_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc4162>
        TLS_DH_anon_WITH_SEED_CBC_SHA => 0x009b,

        /// The `TLS_RSA_WITH_AES_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5288>
        TLS_RSA_WITH_AES_128_GCM_SHA256 => 0x009c,

        /// The `TLS_RSA_WITH_AES_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5288>
        TLS_RSA_WITH_AES_256_GCM_SHA384 => 0x009d,

        /// The `TLS_DHE_RSA_WITH_AES_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5288>
        TLS_DHE_RSA_WITH_AES_128_GCM_SHA256 => 0x009e,

        /// The `TLS_DHE_RSA_WITH_AES_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5288>
        TLS_DHE_RSA_WITH_AES_256_GCM_SHA384 => 0x009f,

        /// The `TLS_DH_RSA_WITH_AES_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5288>
        TLS_DH_RSA_WITH_AES_128_GCM_SHA256 => 0x00a0,

        /// The `TLS_DH_RSA_WITH_AES_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5288>
        TLS_DH_RSA_WITH_AES_256_GCM_SHA384 => 0x00a1,

        /// The `TLS_DHE_DSS_WITH_AES_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5288>
        TLS_DHE_DSS_WITH_AES_128_GCM_SHA256 => 0x00a2,

        /// The `TLS_DHE_DSS_WITH_AES_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5288>
        TLS_DHE_DSS_WITH_AES_256_GCM_SHA384 => 0x00a3,

        /// The `TLS_DH_DSS_WITH_AES_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5288>
        TLS_DH_DSS_WITH_AES_128_GCM_SHA256 => 0x00a4,

        /// The `TLS_DH_DSS_WITH_AES_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5288>
        TLS_DH_DSS_WITH_AES_256_GCM_SHA384 => 0x00a5,

        /// The `TLS_DH_anon_WITH_AES_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5288>
        TLS_DH_anon_WITH_AES_128_GCM_SHA256 => 0x00a6,

        /// The `TLS_DH_anon_WITH_AES_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5288>
        TLS_DH_anon_WITH_AES_256_GCM_SHA384 => 0x00a7,

        /// The `TLS_PSK_WITH_AES_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5487>
        TLS_PSK_WITH_AES_128_GCM_SHA256 => 0x00a8,

        /// The `TLS_PSK_WITH_AES_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5487>
        TLS_PSK_WITH_AES_256_GCM_SHA384 => 0x00a9,

        /// The `TLS_DHE_PSK_WITH_AES_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5487>
        TLS_DHE_PSK_WITH_AES_128_GCM_SHA256 => 0x00aa,

        /// The `TLS_DHE_PSK_WITH_AES_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5487>
        TLS_DHE_PSK_WITH_AES_256_GCM_SHA384 => 0x00ab,

        /// The `TLS_RSA_PSK_WITH_AES_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5487>
        TLS_RSA_PSK_WITH_AES_128_GCM_SHA256 => 0x00ac,

        /// The `TLS_RSA_PSK_WITH_AES_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5487>
        TLS_RSA_PSK_WITH_AES_256_GCM_SHA384 => 0x00ad,

        /// The `TLS_PSK_WITH_AES_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5487>
        TLS_PSK_WITH_AES_128_CBC_SHA256 => 0x00ae,

        /// The `TLS_PSK_WITH_AES_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5487>
        TLS_PSK_WITH_AES_256_CBC_SHA384 => 0x00af,

        /// The `TLS_PSK_WITH_NULL_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5487>
        TLS_PSK_WITH_NULL_SHA256 => 0x00b0,

        /// The `TLS_PSK_WITH_NULL_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5487>
        TLS_PSK_WITH_NULL_SHA384 => 0x00b1,

        /// The `TLS_DHE_PSK_WITH_AES_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5487>
        TLS_DHE_PSK_WITH_AES_128_CBC_SHA256 => 0x00b2,

        /// The `TLS_DHE_PSK_WITH_AES_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5487>
        TLS_DHE_PSK_WITH_AES_256_CBC_SHA384 => 0x00b3,

        /// The `TLS_DHE_PSK_WITH_NULL_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5487>
        TLS_DHE_PSK_WITH_NULL_SHA256 => 0x00b4,

        /// The `TLS_DHE_PSK_WITH_NULL_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5487>
        TLS_DHE_PSK_WITH_NULL_SHA384 => 0x00b5,

        /// The `TLS_RSA_PSK_WITH_AES_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5487>
        TLS_RSA_PSK_WITH_AES_128_CBC_SHA256 => 0x00b6,

        /// The `TLS_RSA_PSK_WITH_AES_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5487>
        TLS_RSA_PSK_WITH_AES_256_CBC_SHA384 => 0x00b7,

        /// The `TLS_RSA_PSK_WITH_NULL_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5487>
        TLS_RSA_PSK_WITH_NULL_SHA256 => 0x00b8,

        /// The `TLS_RSA_PSK_WITH_NULL_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5487>
        TLS_RSA_PSK_WITH_NULL_SHA384 => 0x00b9,

        /// The `TLS_RSA_WITH_CAMELLIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_RSA_WITH_CAMELLIA_128_CBC_SHA256 => 0x00ba,

        /// The `TLS_DH_DSS_WITH_CAMELLIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DH_DSS_WITH_CAMELLIA_128_CBC_SHA256 => 0x00bb,

        /// The `TLS_DH_RSA_WITH_CAMELLIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DH_RSA_WITH_CAMELLIA_128_CBC_SHA256 => 0x00bc,

        /// The `TLS_DHE_DSS_WITH_CAMELLIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DHE_DSS_WITH_CAMELLIA_128_CBC_SHA256 => 0x00bd,

        /// The `TLS_DHE_RSA_WITH_CAMELLIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DHE_RSA_WITH_CAMELLIA_128_CBC_SHA256 => 0x00be,

        /// The `TLS_DH_anon_WITH_CAMELLIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DH_anon_WITH_CAMELLIA_128_CBC_SHA256 => 0x00bf,

        /// The `TLS_RSA_WITH_CAMELLIA_256_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_RSA_WITH_CAMELLIA_256_CBC_SHA256 => 0x00c0,

        /// The `TLS_DH_DSS_WITH_CAMELLIA_256_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DH_DSS_WITH_CAMELLIA_256_CBC_SHA256 => 0x00c1,

        /// The `TLS_DH_RSA_WITH_CAMELLIA_256_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DH_RSA_WITH_CAMELLIA_256_CBC_SHA256 => 0x00c2,

        /// The `TLS_DHE_DSS_WITH_CAMELLIA_256_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DHE_DSS_WITH_CAMELLIA_256_CBC_SHA256 => 0x00c3,

        /// The `TLS_DHE_RSA_WITH_CAMELLIA_256_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DHE_RSA_WITH_CAMELLIA_256_CBC_SHA256 => 0x00c4,

        /// The `TLS_DH_anon_WITH_CAMELLIA_256_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5932>
        TLS_DH_anon_WITH_CAMELLIA_256_CBC_SHA256 => 0x00c5,

        /// The `TLS_SM4_GCM_SM3` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8998>
        TLS_SM4_GCM_SM3 => 0x00c6,

        /// The `TLS_SM4_CCM_SM3` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8998>
        TLS_SM4_CCM_SM3 => 0x00c7,

        /// The `TLS_EMPTY_RENEGOTIATION_INFO_SCSV` signalling cipher suite value.  Defined in
        /// <https://www.iana.org/go/rfc5746>
        TLS_EMPTY_RENEGOTIATION_INFO_SCSV => 0x00ff,

        /// The `TLS_AES_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8446>
        TLS13_AES_128_GCM_SHA256 => 0x1301,

        /// The `TLS_AES_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8446>
        TLS13_AES_256_GCM_SHA384 => 0x1302,

        /// The `TLS_CHACHA20_POLY1305_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8446>
        TLS13_CHACHA20_POLY1305_SHA256 => 0x1303,

        /// The `TLS_AES_128_CCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8446>
        TLS13_AES_128_CCM_SHA256 => 0x1304,

        /// The `TLS_AES_128_CCM_8_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8446>
        TLS13_AES_128_CCM_8_SHA256 => 0x1305,

        /// The `TLS_FALLBACK_SCSV` signalling cipher suite value.  Defined in
        /// <https://www.iana.org/go/rfc7507>
        TLS_FALLBACK_SCSV => 0x5600,

        /// The `TLS_ECDH_ECDSA_WITH_NULL_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDH_ECDSA_WITH_NULL_SHA => 0xc001,

        /// The `TLS_ECDH_ECDSA_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDH_ECDSA_WITH_3DES_EDE_CBC_SHA => 0xc003,

        /// The `TLS_ECDH_ECDSA_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDH_ECDSA_WITH_AES_128_CBC_SHA => 0xc004,

        /// The `TLS_ECDH_ECDSA_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDH_ECDSA_WITH_AES_256_CBC_SHA => 0xc005,

        /// The `TLS_ECDHE_ECDSA_WITH_NULL_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDHE_ECDSA_WITH_NULL_SHA => 0xc006,

        /// The `TLS_ECDHE_ECDSA_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDHE_ECDSA_WITH_3DES_EDE_CBC_SHA => 0xc008,

        /// The `TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA => 0xc009,

        /// The `TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA => 0xc00a,

        /// The `TLS_ECDH_RSA_WITH_NULL_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDH_RSA_WITH_NULL_SHA => 0xc00b,

        /// The `TLS_ECDH_RSA_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDH_RSA_WITH_3DES_EDE_CBC_SHA => 0xc00d,

        /// The `TLS_ECDH_RSA_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDH_RSA_WITH_AES_128_CBC_SHA => 0xc00e,

        /// The `TLS_ECDH_RSA_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDH_RSA_WITH_AES_256_CBC_SHA => 0xc00f,

        /// The `TLS_ECDHE_RSA_WITH_NULL_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDHE_RSA_WITH_NULL_SHA => 0xc010,

        /// The `TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA => 0xc012,

        /// The `TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA => 0xc013,

        /// The `TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA => 0xc014,

        /// The `TLS_ECDH_anon_WITH_NULL_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDH_anon_WITH_NULL_SHA => 0xc015,

        /// The `TLS_ECDH_anon_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDH_anon_WITH_3DES_EDE_CBC_SHA => 0xc017,

        /// The `TLS_ECDH_anon_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDH_anon_WITH_AES_128_CBC_SHA => 0xc018,

        /// The `TLS_ECDH_anon_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8422>
        TLS_ECDH_anon_WITH_AES_256_CBC_SHA => 0xc019,

        /// The `TLS_SRP_SHA_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5054>
        TLS_SRP_SHA_WITH_3DES_EDE_CBC_SHA => 0xc01a,

        /// The `TLS_SRP_SHA_RSA_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5054>
        TLS_SRP_SHA_RSA_WITH_3DES_EDE_CBC_SHA => 0xc01b,

        /// The `TLS_SRP_SHA_DSS_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5054>
        TLS_SRP_SHA_DSS_WITH_3DES_EDE_CBC_SHA => 0xc01c,

        /// The `TLS_SRP_SHA_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5054>
        TLS_SRP_SHA_WITH_AES_128_CBC_SHA => 0xc01d,

        /// The `TLS_SRP_SHA_RSA_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5054>
        TLS_SRP_SHA_RSA_WITH_AES_128_CBC_SHA => 0xc01e,

        /// The `TLS_SRP_SHA_DSS_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5054>
        TLS_SRP_SHA_DSS_WITH_AES_128_CBC_SHA => 0xc01f,

        /// The `TLS_SRP_SHA_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5054>
        TLS_SRP_SHA_WITH_AES_256_CBC_SHA => 0xc020,

        /// The `TLS_SRP_SHA_RSA_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5054>
        TLS_SRP_SHA_RSA_WITH_AES_256_CBC_SHA => 0xc021,

        /// The `TLS_SRP_SHA_DSS_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5054>
        TLS_SRP_SHA_DSS_WITH_AES_256_CBC_SHA => 0xc022,

        /// The `TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256 => 0xc023,

        /// The `TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA384 => 0xc024,

        /// The `TLS_ECDH_ECDSA_WITH_AES_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDH_ECDSA_WITH_AES_128_CBC_SHA256 => 0xc025,

        /// The `TLS_ECDH_ECDSA_WITH_AES_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDH_ECDSA_WITH_AES_256_CBC_SHA384 => 0xc026,

        /// The `TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256 => 0xc027,

        /// The `TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA384 => 0xc028,

        /// The `TLS_ECDH_RSA_WITH_AES_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDH_RSA_WITH_AES_128_CBC_SHA256 => 0xc029,

        /// The `TLS_ECDH_RSA_WITH_AES_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDH_RSA_WITH_AES_256_CBC_SHA384 => 0xc02a,

        /// The `TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256 => 0xc02b,

        /// The `TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384 => 0xc02c,

        /// The `TLS_ECDH_ECDSA_WITH_AES_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDH_ECDSA_WITH_AES_128_GCM_SHA256 => 0xc02d,

        /// The `TLS_ECDH_ECDSA_WITH_AES_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDH_ECDSA_WITH_AES_256_GCM_SHA384 => 0xc02e,

        /// The `TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256 => 0xc02f,

        /// The `TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384 => 0xc030,

        /// The `TLS_ECDH_RSA_WITH_AES_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDH_RSA_WITH_AES_128_GCM_SHA256 => 0xc031,

        /// The `TLS_ECDH_RSA_WITH_AES_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5289>
        TLS_ECDH_RSA_WITH_AES_256_GCM_SHA384 => 0xc032,

        /// The `TLS_ECDHE_PSK_WITH_3DES_EDE_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5489>
        TLS_ECDHE_PSK_WITH_3DES_EDE_CBC_SHA => 0xc034,

        /// The `TLS_ECDHE_PSK_WITH_AES_128_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5489>
        TLS_ECDHE_PSK_WITH_AES_128_CBC_SHA => 0xc035,

        /// The `TLS_ECDHE_PSK_WITH_AES_256_CBC_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5489>
        TLS_ECDHE_PSK_WITH_AES_256_CBC_SHA => 0xc036,

        /// The `TLS_ECDHE_PSK_WITH_AES_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5489>
        TLS_ECDHE_PSK_WITH_AES_128_CBC_SHA256 => 0xc037,

        /// The `TLS_ECDHE_PSK_WITH_AES_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5489>
        TLS_ECDHE_PSK_WITH_AES_256_CBC_SHA384 => 0xc038,

        /// The `TLS_ECDHE_PSK_WITH_NULL_SHA` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5489>
        TLS_ECDHE_PSK_WITH_NULL_SHA => 0xc039,

        /// The `TLS_ECDHE_PSK_WITH_NULL_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5489>
        TLS_ECDHE_PSK_WITH_NULL_SHA256 => 0xc03a,

        /// The `TLS_ECDHE_PSK_WITH_NULL_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc5489>
        TLS_ECDHE_PSK_WITH_NULL_SHA384 => 0xc03b,

        /// The `TLS_RSA_WITH_ARIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_RSA_WITH_ARIA_128_CBC_SHA256 => 0xc03c,

        /// The `TLS_RSA_WITH_ARIA_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_RSA_WITH_ARIA_256_CBC_SHA384 => 0xc03d,

        /// The `TLS_DH_DSS_WITH_ARIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DH_DSS_WITH_ARIA_128_CBC_SHA256 => 0xc03e,

        /// The `TLS_DH_DSS_WITH_ARIA_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DH_DSS_WITH_ARIA_256_CBC_SHA384 => 0xc03f,

        /// The `TLS_DH_RSA_WITH_ARIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DH_RSA_WITH_ARIA_128_CBC_SHA256 => 0xc040,

        /// The `TLS_DH_RSA_WITH_ARIA_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DH_RSA_WITH_ARIA_256_CBC_SHA384 => 0xc041,

        /// The `TLS_DHE_DSS_WITH_ARIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DHE_DSS_WITH_ARIA_128_CBC_SHA256 => 0xc042,

        /// The `TLS_DHE_DSS_WITH_ARIA_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DHE_DSS_WITH_ARIA_256_CBC_SHA384 => 0xc043,

        /// The `TLS_DHE_RSA_WITH_ARIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DHE_RSA_WITH_ARIA_128_CBC_SHA256 => 0xc044,

        /// The `TLS_DHE_RSA_WITH_ARIA_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DHE_RSA_WITH_ARIA_256_CBC_SHA384 => 0xc045,

        /// The `TLS_DH_anon_WITH_ARIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DH_anon_WITH_ARIA_128_CBC_SHA256 => 0xc046,

        /// The `TLS_DH_anon_WITH_ARIA_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DH_anon_WITH_ARIA_256_CBC_SHA384 => 0xc047,

        /// The `TLS_ECDHE_ECDSA_WITH_ARIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_ECDHE_ECDSA_WITH_ARIA_128_CBC_SHA256 => 0xc048,

        /// The `TLS_ECDHE_ECDSA_WITH_ARIA_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_ECDHE_ECDSA_WITH_ARIA_256_CBC_SHA384 => 0xc049,

        /// The `TLS_ECDH_ECDSA_WITH_ARIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_ECDH_ECDSA_WITH_ARIA_128_CBC_SHA256 => 0xc04a,

        /// The `TLS_ECDH_ECDSA_WITH_ARIA_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_ECDH_ECDSA_WITH_ARIA_256_CBC_SHA384 => 0xc04b,

        /// The `TLS_ECDHE_RSA_WITH_ARIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_ECDHE_RSA_WITH_ARIA_128_CBC_SHA256 => 0xc04c,

        /// The `TLS_ECDHE_RSA_WITH_ARIA_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_ECDHE_RSA_WITH_ARIA_256_CBC_SHA384 => 0xc04d,

        /// The `TLS_ECDH_RSA_WITH_ARIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_ECDH_RSA_WITH_ARIA_128_CBC_SHA256 => 0xc04e,

        /// The `TLS_ECDH_RSA_WITH_ARIA_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_ECDH_RSA_WITH_ARIA_256_CBC_SHA384 => 0xc04f,

        /// The `TLS_RSA_WITH_ARIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_RSA_WITH_ARIA_128_GCM_SHA256 => 0xc050,

        /// The `TLS_RSA_WITH_ARIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_RSA_WITH_ARIA_256_GCM_SHA384 => 0xc051,

        /// The `TLS_DHE_RSA_WITH_ARIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DHE_RSA_WITH_ARIA_128_GCM_SHA256 => 0xc052,

        /// The `TLS_DHE_RSA_WITH_ARIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DHE_RSA_WITH_ARIA_256_GCM_SHA384 => 0xc053,

        /// The `TLS_DH_RSA_WITH_ARIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DH_RSA_WITH_ARIA_128_GCM_SHA256 => 0xc054,

        /// The `TLS_DH_RSA_WITH_ARIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DH_RSA_WITH_ARIA_256_GCM_SHA384 => 0xc055,

        /// The `TLS_DHE_DSS_WITH_ARIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DHE_DSS_WITH_ARIA_128_GCM_SHA256 => 0xc056,

        /// The `TLS_DHE_DSS_WITH_ARIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DHE_DSS_WITH_ARIA_256_GCM_SHA384 => 0xc057,

        /// The `TLS_DH_DSS_WITH_ARIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DH_DSS_WITH_ARIA_128_GCM_SHA256 => 0xc058,

        /// The `TLS_DH_DSS_WITH_ARIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DH_DSS_WITH_ARIA_256_GCM_SHA384 => 0xc059,

        /// The `TLS_DH_anon_WITH_ARIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DH_anon_WITH_ARIA_128_GCM_SHA256 => 0xc05a,

        /// The `TLS_DH_anon_WITH_ARIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DH_anon_WITH_ARIA_256_GCM_SHA384 => 0xc05b,

        /// The `TLS_ECDHE_ECDSA_WITH_ARIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_ECDHE_ECDSA_WITH_ARIA_128_GCM_SHA256 => 0xc05c,

        /// The `TLS_ECDHE_ECDSA_WITH_ARIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_ECDHE_ECDSA_WITH_ARIA_256_GCM_SHA384 => 0xc05d,

        /// The `TLS_ECDH_ECDSA_WITH_ARIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_ECDH_ECDSA_WITH_ARIA_128_GCM_SHA256 => 0xc05e,

        /// The `TLS_ECDH_ECDSA_WITH_ARIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_ECDH_ECDSA_WITH_ARIA_256_GCM_SHA384 => 0xc05f,

        /// The `TLS_ECDHE_RSA_WITH_ARIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_ECDHE_RSA_WITH_ARIA_128_GCM_SHA256 => 0xc060,

        /// The `TLS_ECDHE_RSA_WITH_ARIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_ECDHE_RSA_WITH_ARIA_256_GCM_SHA384 => 0xc061,

        /// The `TLS_ECDH_RSA_WITH_ARIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_ECDH_RSA_WITH_ARIA_128_GCM_SHA256 => 0xc062,

        /// The `TLS_ECDH_RSA_WITH_ARIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_ECDH_RSA_WITH_ARIA_256_GCM_SHA384 => 0xc063,

        /// The `TLS_PSK_WITH_ARIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_PSK_WITH_ARIA_128_CBC_SHA256 => 0xc064,

        /// The `TLS_PSK_WITH_ARIA_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_PSK_WITH_ARIA_256_CBC_SHA384 => 0xc065,

        /// The `TLS_DHE_PSK_WITH_ARIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DHE_PSK_WITH_ARIA_128_CBC_SHA256 => 0xc066,

        /// The `TLS_DHE_PSK_WITH_ARIA_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DHE_PSK_WITH_ARIA_256_CBC_SHA384 => 0xc067,

        /// The `TLS_RSA_PSK_WITH_ARIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_RSA_PSK_WITH_ARIA_128_CBC_SHA256 => 0xc068,

        /// The `TLS_RSA_PSK_WITH_ARIA_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_RSA_PSK_WITH_ARIA_256_CBC_SHA384 => 0xc069,

        /// The `TLS_PSK_WITH_ARIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_PSK_WITH_ARIA_128_GCM_SHA256 => 0xc06a,

        /// The `TLS_PSK_WITH_ARIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_PSK_WITH_ARIA_256_GCM_SHA384 => 0xc06b,

        /// The `TLS_DHE_PSK_WITH_ARIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DHE_PSK_WITH_ARIA_128_GCM_SHA256 => 0xc06c,

        /// The `TLS_DHE_PSK_WITH_ARIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_DHE_PSK_WITH_ARIA_256_GCM_SHA384 => 0xc06d,

        /// The `TLS_RSA_PSK_WITH_ARIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_RSA_PSK_WITH_ARIA_128_GCM_SHA256 => 0xc06e,

        /// The `TLS_RSA_PSK_WITH_ARIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_RSA_PSK_WITH_ARIA_256_GCM_SHA384 => 0xc06f,

        /// The `TLS_ECDHE_PSK_WITH_ARIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_ECDHE_PSK_WITH_ARIA_128_CBC_SHA256 => 0xc070,

        /// The `TLS_ECDHE_PSK_WITH_ARIA_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6209>
        TLS_ECDHE_PSK_WITH_ARIA_256_CBC_SHA384 => 0xc071,

        /// The `TLS_ECDHE_ECDSA_WITH_CAMELLIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_ECDHE_ECDSA_WITH_CAMELLIA_128_CBC_SHA256 => 0xc072,

        /// The `TLS_ECDHE_ECDSA_WITH_CAMELLIA_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_ECDHE_ECDSA_WITH_CAMELLIA_256_CBC_SHA384 => 0xc073,

        /// The `TLS_ECDH_ECDSA_WITH_CAMELLIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_ECDH_ECDSA_WITH_CAMELLIA_128_CBC_SHA256 => 0xc074,

        /// The `TLS_ECDH_ECDSA_WITH_CAMELLIA_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_ECDH_ECDSA_WITH_CAMELLIA_256_CBC_SHA384 => 0xc075,

        /// The `TLS_ECDHE_RSA_WITH_CAMELLIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_ECDHE_RSA_WITH_CAMELLIA_128_CBC_SHA256 => 0xc076,

        /// The `TLS_ECDHE_RSA_WITH_CAMELLIA_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_ECDHE_RSA_WITH_CAMELLIA_256_CBC_SHA384 => 0xc077,

        /// The `TLS_ECDH_RSA_WITH_CAMELLIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_ECDH_RSA_WITH_CAMELLIA_128_CBC_SHA256 => 0xc078,

        /// The `TLS_ECDH_RSA_WITH_CAMELLIA_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_ECDH_RSA_WITH_CAMELLIA_256_CBC_SHA384 => 0xc079,

        /// The `TLS_RSA_WITH_CAMELLIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_RSA_WITH_CAMELLIA_128_GCM_SHA256 => 0xc07a,

        /// The `TLS_RSA_WITH_CAMELLIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_RSA_WITH_CAMELLIA_256_GCM_SHA384 => 0xc07b,

        /// The `TLS_DHE_RSA_WITH_CAMELLIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_DHE_RSA_WITH_CAMELLIA_128_GCM_SHA256 => 0xc07c,

        /// The `TLS_DHE_RSA_WITH_CAMELLIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_DHE_RSA_WITH_CAMELLIA_256_GCM_SHA384 => 0xc07d,

        /// The `TLS_DH_RSA_WITH_CAMELLIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_DH_RSA_WITH_CAMELLIA_128_GCM_SHA256 => 0xc07e,

        /// The `TLS_DH_RSA_WITH_CAMELLIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_DH_RSA_WITH_CAMELLIA_256_GCM_SHA384 => 0xc07f,

        /// The `TLS_DHE_DSS_WITH_CAMELLIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_DHE_DSS_WITH_CAMELLIA_128_GCM_SHA256 => 0xc080,

        /// The `TLS_DHE_DSS_WITH_CAMELLIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_DHE_DSS_WITH_CAMELLIA_256_GCM_SHA384 => 0xc081,

        /// The `TLS_DH_DSS_WITH_CAMELLIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_DH_DSS_WITH_CAMELLIA_128_GCM_SHA256 => 0xc082,

        /// The `TLS_DH_DSS_WITH_CAMELLIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_DH_DSS_WITH_CAMELLIA_256_GCM_SHA384 => 0xc083,

        /// The `TLS_DH_anon_WITH_CAMELLIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_DH_anon_WITH_CAMELLIA_128_GCM_SHA256 => 0xc084,

        /// The `TLS_DH_anon_WITH_CAMELLIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_DH_anon_WITH_CAMELLIA_256_GCM_SHA384 => 0xc085,

        /// The `TLS_ECDHE_ECDSA_WITH_CAMELLIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_ECDHE_ECDSA_WITH_CAMELLIA_128_GCM_SHA256 => 0xc086,

        /// The `TLS_ECDHE_ECDSA_WITH_CAMELLIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_ECDHE_ECDSA_WITH_CAMELLIA_256_GCM_SHA384 => 0xc087,

        /// The `TLS_ECDH_ECDSA_WITH_CAMELLIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_ECDH_ECDSA_WITH_CAMELLIA_128_GCM_SHA256 => 0xc088,

        /// The `TLS_ECDH_ECDSA_WITH_CAMELLIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_ECDH_ECDSA_WITH_CAMELLIA_256_GCM_SHA384 => 0xc089,

        /// The `TLS_ECDHE_RSA_WITH_CAMELLIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_ECDHE_RSA_WITH_CAMELLIA_128_GCM_SHA256 => 0xc08a,

        /// The `TLS_ECDHE_RSA_WITH_CAMELLIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_ECDHE_RSA_WITH_CAMELLIA_256_GCM_SHA384 => 0xc08b,

        /// The `TLS_ECDH_RSA_WITH_CAMELLIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_ECDH_RSA_WITH_CAMELLIA_128_GCM_SHA256 => 0xc08c,

        /// The `TLS_ECDH_RSA_WITH_CAMELLIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_ECDH_RSA_WITH_CAMELLIA_256_GCM_SHA384 => 0xc08d,

        /// The `TLS_PSK_WITH_CAMELLIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_PSK_WITH_CAMELLIA_128_GCM_SHA256 => 0xc08e,

        /// The `TLS_PSK_WITH_CAMELLIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_PSK_WITH_CAMELLIA_256_GCM_SHA384 => 0xc08f,

        /// The `TLS_DHE_PSK_WITH_CAMELLIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_DHE_PSK_WITH_CAMELLIA_128_GCM_SHA256 => 0xc090,

        /// The `TLS_DHE_PSK_WITH_CAMELLIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_DHE_PSK_WITH_CAMELLIA_256_GCM_SHA384 => 0xc091,

        /// The `TLS_RSA_PSK_WITH_CAMELLIA_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_RSA_PSK_WITH_CAMELLIA_128_GCM_SHA256 => 0xc092,

        /// The `TLS_RSA_PSK_WITH_CAMELLIA_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_RSA_PSK_WITH_CAMELLIA_256_GCM_SHA384 => 0xc093,

        /// The `TLS_PSK_WITH_CAMELLIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_PSK_WITH_CAMELLIA_128_CBC_SHA256 => 0xc094,

        /// The `TLS_PSK_WITH_CAMELLIA_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_PSK_WITH_CAMELLIA_256_CBC_SHA384 => 0xc095,

        /// The `TLS_DHE_PSK_WITH_CAMELLIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_DHE_PSK_WITH_CAMELLIA_128_CBC_SHA256 => 0xc096,

        /// The `TLS_DHE_PSK_WITH_CAMELLIA_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_DHE_PSK_WITH_CAMELLIA_256_CBC_SHA384 => 0xc097,

        /// The `TLS_RSA_PSK_WITH_CAMELLIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_RSA_PSK_WITH_CAMELLIA_128_CBC_SHA256 => 0xc098,

        /// The `TLS_RSA_PSK_WITH_CAMELLIA_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_RSA_PSK_WITH_CAMELLIA_256_CBC_SHA384 => 0xc099,

        /// The `TLS_ECDHE_PSK_WITH_CAMELLIA_128_CBC_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_ECDHE_PSK_WITH_CAMELLIA_128_CBC_SHA256 => 0xc09a,

        /// The `TLS_ECDHE_PSK_WITH_CAMELLIA_256_CBC_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6367>
        TLS_ECDHE_PSK_WITH_CAMELLIA_256_CBC_SHA384 => 0xc09b,

        /// The `TLS_RSA_WITH_AES_128_CCM` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6655>
        TLS_RSA_WITH_AES_128_CCM => 0xc09c,

        /// The `TLS_RSA_WITH_AES_256_CCM` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6655>
        TLS_RSA_WITH_AES_256_CCM => 0xc09d,

        /// The `TLS_DHE_RSA_WITH_AES_128_CCM` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6655>
        TLS_DHE_RSA_WITH_AES_128_CCM => 0xc09e,

        /// The `TLS_DHE_RSA_WITH_AES_256_CCM` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6655>
        TLS_DHE_RSA_WITH_AES_256_CCM => 0xc09f,

        /// The `TLS_RSA_WITH_AES_128_CCM_8` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6655>
        TLS_RSA_WITH_AES_128_CCM_8 => 0xc0a0,

        /// The `TLS_RSA_WITH_AES_256_CCM_8` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6655>
        TLS_RSA_WITH_AES_256_CCM_8 => 0xc0a1,

        /// The `TLS_DHE_RSA_WITH_AES_128_CCM_8` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6655>
        TLS_DHE_RSA_WITH_AES_128_CCM_8 => 0xc0a2,

        /// The `TLS_DHE_RSA_WITH_AES_256_CCM_8` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6655>
        TLS_DHE_RSA_WITH_AES_256_CCM_8 => 0xc0a3,

        /// The `TLS_PSK_WITH_AES_128_CCM` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6655>
        TLS_PSK_WITH_AES_128_CCM => 0xc0a4,

        /// The `TLS_PSK_WITH_AES_256_CCM` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6655>
        TLS_PSK_WITH_AES_256_CCM => 0xc0a5,

        /// The `TLS_DHE_PSK_WITH_AES_128_CCM` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6655>
        TLS_DHE_PSK_WITH_AES_128_CCM => 0xc0a6,

        /// The `TLS_DHE_PSK_WITH_AES_256_CCM` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6655>
        TLS_DHE_PSK_WITH_AES_256_CCM => 0xc0a7,

        /// The `TLS_PSK_WITH_AES_128_CCM_8` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6655>
        TLS_PSK_WITH_AES_128_CCM_8 => 0xc0a8,

        /// The `TLS_PSK_WITH_AES_256_CCM_8` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6655>
        TLS_PSK_WITH_AES_256_CCM_8 => 0xc0a9,

        /// The `TLS_PSK_DHE_WITH_AES_128_CCM_8` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6655>
        TLS_PSK_DHE_WITH_AES_128_CCM_8 => 0xc0aa,

        /// The `TLS_PSK_DHE_WITH_AES_256_CCM_8` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc6655>
        TLS_PSK_DHE_WITH_AES_256_CCM_8 => 0xc0ab,

        /// The `TLS_ECDHE_ECDSA_WITH_AES_128_CCM` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc7251>
        TLS_ECDHE_ECDSA_WITH_AES_128_CCM => 0xc0ac,

        /// The `TLS_ECDHE_ECDSA_WITH_AES_256_CCM` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc7251>
        TLS_ECDHE_ECDSA_WITH_AES_256_CCM => 0xc0ad,

        /// The `TLS_ECDHE_ECDSA_WITH_AES_128_CCM_8` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc7251>
        TLS_ECDHE_ECDSA_WITH_AES_128_CCM_8 => 0xc0ae,

        /// The `TLS_ECDHE_ECDSA_WITH_AES_256_CCM_8` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc7251>
        TLS_ECDHE_ECDSA_WITH_AES_256_CCM_8 => 0xc0af,

        /// The `TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc7905>
        TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256 => 0xcca8,

        /// The `TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc7905>
        TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256 => 0xcca9,

        /// The `TLS_DHE_RSA_WITH_CHACHA20_POLY1305_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc7905>
        TLS_DHE_RSA_WITH_CHACHA20_POLY1305_SHA256 => 0xccaa,

        /// The `TLS_PSK_WITH_CHACHA20_POLY1305_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc7905>
        TLS_PSK_WITH_CHACHA20_POLY1305_SHA256 => 0xccab,

        /// The `TLS_ECDHE_PSK_WITH_CHACHA20_POLY1305_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc7905>
        TLS_ECDHE_PSK_WITH_CHACHA20_POLY1305_SHA256 => 0xccac,

        /// The `TLS_DHE_PSK_WITH_CHACHA20_POLY1305_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc7905>
        TLS_DHE_PSK_WITH_CHACHA20_POLY1305_SHA256 => 0xccad,

        /// The `TLS_RSA_PSK_WITH_CHACHA20_POLY1305_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc7905>
        TLS_RSA_PSK_WITH_CHACHA20_POLY1305_SHA256 => 0xccae,

        /// The `TLS_ECDHE_PSK_WITH_AES_128_GCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8442>
        TLS_ECDHE_PSK_WITH_AES_128_GCM_SHA256 => 0xd001,

        /// The `TLS_ECDHE_PSK_WITH_AES_256_GCM_SHA384` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8442>
        TLS_ECDHE_PSK_WITH_AES_256_GCM_SHA384 => 0xd002,

        /// The `TLS_ECDHE_PSK_WITH_AES_128_CCM_8_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8442>
        TLS_ECDHE_PSK_WITH_AES_128_CCM_8_SHA256 => 0xd003,

        /// The `TLS_ECDHE_PSK_WITH_AES_128_CCM_SHA256` cipher suite.  Defined in
        /// <https://www.iana.org/go/rfc8442>
        TLS_ECDHE_PSK_WITH_AES_128_CCM_SHA256 => 0xd005,
    }
}

impl CipherSuite {
    /// Whether this is a signalling value rather than a real cipher suite.
    pub fn is_scsv(self) -> bool {
        matches!(
            self,
            Self::TLS_EMPTY_RENEGOTIATION_INFO_SCSV | Self::TLS_FALLBACK_SCSV
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msgs::enums::tests::{test_enum8, test_enum16};

    #[test]
    fn test_enums() {
        test_enum8::<ContentType>(ContentType::ChangeCipherSpec, ContentType::Heartbeat);
        test_enum8::<HandshakeType>(HandshakeType::HelloRequest, HandshakeType::MessageHash);
        test_enum16::<CipherSuite>(
            CipherSuite::TLS_NULL_WITH_NULL_NULL,
            CipherSuite::TLS_EMPTY_RENEGOTIATION_INFO_SCSV,
        );
    }

    #[test]
    fn dtls_versions_map_to_tls() {
        assert_eq!(
            ProtocolVersion::DTLSv1_0.equivalent_tls_version(),
            Some(ProtocolVersion::TLSv1_1)
        );
        assert_eq!(
            ProtocolVersion::DTLSv1_2.equivalent_tls_version(),
            Some(ProtocolVersion::TLSv1_2)
        );
        assert_eq!(
            ProtocolVersion::TLSv1_0.equivalent_tls_version(),
            Some(ProtocolVersion::TLSv1_0)
        );
        assert_eq!(ProtocolVersion::Unknown(0xfe00).equivalent_tls_version(), None);
    }

    #[test]
    fn version_ordering_is_per_family() {
        assert!(ProtocolVersion::SSLv3.is_earlier_version_of(ProtocolVersion::TLSv1_0));
        assert!(ProtocolVersion::TLSv1_2.is_earlier_version_of(ProtocolVersion::TLSv1_3));
        assert!(ProtocolVersion::DTLSv1_0.is_earlier_version_of(ProtocolVersion::DTLSv1_2));
        assert!(!ProtocolVersion::DTLSv1_2.is_earlier_version_of(ProtocolVersion::DTLSv1_0));
        assert!(!ProtocolVersion::TLSv1_0.is_earlier_version_of(ProtocolVersion::DTLSv1_2));
        assert!(!ProtocolVersion::TLSv1_2.is_later_version_of(ProtocolVersion::DTLSv1_0));
        assert!(ProtocolVersion::TLSv1_2.is_equal_or_later_version_of(ProtocolVersion::TLSv1_2));
    }

    #[test]
    fn version_floors() {
        assert!(!ProtocolVersion::SSLv3.is_tls11_or_later());
        assert!(ProtocolVersion::DTLSv1_0.is_tls11_or_later());
        assert!(!ProtocolVersion::DTLSv1_0.is_tls12_or_later());
        assert!(ProtocolVersion::DTLSv1_2.is_tls12_exactly());
        assert!(!ProtocolVersion::TLSv1_3.is_tls12_exactly());
        assert!(ProtocolVersion::TLSv1_3.is_tls13_or_later());
        assert!(ProtocolVersion::SSLv3.is_ssl());
        assert!(!ProtocolVersion::TLSv1_0.is_ssl());
    }

    #[test]
    fn scsv_values() {
        assert!(CipherSuite::TLS_FALLBACK_SCSV.is_scsv());
        assert!(CipherSuite::TLS_EMPTY_RENEGOTIATION_INFO_SCSV.is_scsv());
        assert!(!CipherSuite::TLS_NULL_WITH_NULL_NULL.is_scsv());
    }
}
