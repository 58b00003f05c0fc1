use core::fmt;
use std::vec::Vec;

use crate::enums::ProtocolVersion;
use crate::error::{ApiMisuse, Error, InvalidMessage};
use crate::msgs::codec::{self, Codec, ListLength, Reader};
use crate::msgs::enums::{ClientCertificateType, HashAlgorithm, NamedGroup, SignatureAlgorithm};

/// A `SignatureAndHashAlgorithm` as carried in TLS 1.2 messages.
///
/// TLS 1.3 signature schemes use the same two-byte encoding, with
/// [`HashAlgorithm::Intrinsic`] in the high byte where the scheme fixes its
/// own digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignatureAndHashAlgorithm {
    /// The hash half.
    pub hash: HashAlgorithm,
    /// The signature half.
    pub signature: SignatureAlgorithm,
}

impl SignatureAndHashAlgorithm {
    /// Ed25519 (RFC 8422).
    pub const ED25519: Self = Self::new(HashAlgorithm::Intrinsic, SignatureAlgorithm::ED25519);
    /// Ed448 (RFC 8422).
    pub const ED448: Self = Self::new(HashAlgorithm::Intrinsic, SignatureAlgorithm::ED448);
    /// RSASSA-PSS with SHA-256, for an `rsaEncryption` key.
    pub const RSA_PSS_RSAE_SHA256: Self = Self::new(
        HashAlgorithm::Intrinsic,
        SignatureAlgorithm::RSA_PSS_RSAE_SHA256,
    );
    /// RSASSA-PSS with SHA-384, for an `rsaEncryption` key.
    pub const RSA_PSS_RSAE_SHA384: Self = Self::new(
        HashAlgorithm::Intrinsic,
        SignatureAlgorithm::RSA_PSS_RSAE_SHA384,
    );
    /// RSASSA-PSS with SHA-512, for an `rsaEncryption` key.
    pub const RSA_PSS_RSAE_SHA512: Self = Self::new(
        HashAlgorithm::Intrinsic,
        SignatureAlgorithm::RSA_PSS_RSAE_SHA512,
    );
    /// RSASSA-PSS with SHA-256, for an `RSASSA-PSS` key.
    pub const RSA_PSS_PSS_SHA256: Self = Self::new(
        HashAlgorithm::Intrinsic,
        SignatureAlgorithm::RSA_PSS_PSS_SHA256,
    );
    /// RSASSA-PSS with SHA-384, for an `RSASSA-PSS` key.
    pub const RSA_PSS_PSS_SHA384: Self = Self::new(
        HashAlgorithm::Intrinsic,
        SignatureAlgorithm::RSA_PSS_PSS_SHA384,
    );
    /// RSASSA-PSS with SHA-512, for an `RSASSA-PSS` key.
    pub const RSA_PSS_PSS_SHA512: Self = Self::new(
        HashAlgorithm::Intrinsic,
        SignatureAlgorithm::RSA_PSS_PSS_SHA512,
    );
    /// ECDSA over brainpoolP256r1 with SHA-256 (RFC 8734).
    pub const ECDSA_BRAINPOOLP256R1TLS13_SHA256: Self = Self::new(
        HashAlgorithm::Intrinsic,
        SignatureAlgorithm::ECDSA_BRAINPOOLP256R1TLS13_SHA256,
    );
    /// ECDSA over brainpoolP384r1 with SHA-384 (RFC 8734).
    pub const ECDSA_BRAINPOOLP384R1TLS13_SHA384: Self = Self::new(
        HashAlgorithm::Intrinsic,
        SignatureAlgorithm::ECDSA_BRAINPOOLP384R1TLS13_SHA384,
    );
    /// ECDSA over brainpoolP512r1 with SHA-512 (RFC 8734).
    pub const ECDSA_BRAINPOOLP512R1TLS13_SHA512: Self = Self::new(
        HashAlgorithm::Intrinsic,
        SignatureAlgorithm::ECDSA_BRAINPOOLP512R1TLS13_SHA512,
    );

    /// Make a pair from its two halves.
    pub const fn new(hash: HashAlgorithm, signature: SignatureAlgorithm) -> Self {
        Self { hash, signature }
    }

    /// Decode from a TLS 1.3 `SignatureScheme` codepoint.
    pub fn from_scheme(scheme: u16) -> Self {
        let [hash, signature] = scheme.to_be_bytes();
        Self::new(HashAlgorithm::from(hash), SignatureAlgorithm::from(signature))
    }

    /// The TLS 1.3 `SignatureScheme` codepoint.
    pub fn scheme(&self) -> u16 {
        u16::from_be_bytes([u8::from(self.hash), u8::from(self.signature)])
    }

    /// The digest actually computed over the signed content.
    ///
    /// For `Intrinsic` pairs this is the digest fixed by the signature
    /// algorithm, if there is one.  Ed25519 and Ed448 have none.
    pub fn effective_hash(&self) -> Option<HashAlgorithm> {
        match self.hash {
            HashAlgorithm::Intrinsic => self.signature.intrinsic_hash(),
            HashAlgorithm::NONE => None,
            hash => Some(hash),
        }
    }

    /// Whether this pair names a signature algorithm that is a real signature.
    pub fn is_anonymous(&self) -> bool {
        self.signature == SignatureAlgorithm::Anonymous
    }
}

impl Codec<'_> for SignatureAndHashAlgorithm {
    fn encode(&self, bytes: &mut Vec<u8>) {
        self.hash.encode(bytes);
        self.signature.encode(bytes);
    }

    fn read(r: &mut Reader<'_>) -> Result<Self, InvalidMessage> {
        let hash = HashAlgorithm::read(r)?;
        let signature = SignatureAlgorithm::read(r)?;
        Ok(Self::new(hash, signature))
    }
}

impl fmt::Debug for SignatureAndHashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}+{:?}", self.hash, self.signature)
    }
}

/// Write a `signature_algorithms` list body, including its `u16` length prefix.
///
/// The list must hold between 1 and 2^15-1 entries, none of them `anonymous`.
pub fn encode_supported_signature_algorithms(
    algorithms: &[SignatureAndHashAlgorithm],
    out: &mut Vec<u8>,
) -> Result<(), Error> {
    if algorithms.is_empty() || algorithms.len() >= (1 << 15) {
        return Err(ApiMisuse::SignatureAlgorithmListLength.into());
    }

    if algorithms.iter().any(|alg| alg.is_anonymous()) {
        return Err(ApiMisuse::AnonymousSignatureAlgorithm.into());
    }

    codec::encode_vec(ListLength::U16, algorithms, out)
}

/// Read a `signature_algorithms` list body.
///
/// `anonymous` entries are meaningless here and are dropped.
pub fn parse_supported_signature_algorithms(
    r: &mut Reader<'_>,
) -> Result<Vec<SignatureAndHashAlgorithm>, InvalidMessage> {
    let len = usize::from(u16::read(r)?);
    if len < 2 {
        return Err(InvalidMessage::IllegalEmptyList("SignatureAndHashAlgorithms"));
    }
    if len % 2 != 0 {
        return Err(InvalidMessage::InvalidListLength("SignatureAndHashAlgorithms"));
    }

    let mut sub = r.sub(len)?;
    let mut ret = Vec::with_capacity(len / 2);
    while sub.any_left() {
        let alg = SignatureAndHashAlgorithm::read(&mut sub)?;
        if !alg.is_anonymous() {
            ret.push(alg);
        }
    }
    Ok(ret)
}

/// A signature as carried in `ServerKeyExchange` and `CertificateVerify`.
///
/// Versions before TLS 1.2 do not send the algorithm.
#[derive(Clone, Debug, PartialEq)]
pub struct DigitallySigned {
    /// The algorithm used, if the protocol version carries it.
    pub algorithm: Option<SignatureAndHashAlgorithm>,
    /// The raw signature.
    pub signature: Vec<u8>,
}

impl DigitallySigned {
    /// Make a new signature record.
    pub fn new(algorithm: Option<SignatureAndHashAlgorithm>, signature: Vec<u8>) -> Self {
        Self {
            algorithm,
            signature,
        }
    }

    /// Encode this signature.
    pub fn encode(&self, bytes: &mut Vec<u8>) -> Result<(), Error> {
        if let Some(algorithm) = &self.algorithm {
            algorithm.encode(bytes);
        }
        codec::write_opaque16(&self.signature, bytes)
    }

    /// Decode a signature sent under `version`.
    pub fn read(r: &mut Reader<'_>, version: ProtocolVersion) -> Result<Self, InvalidMessage> {
        let algorithm = match version.is_tls12_or_later() {
            true => Some(SignatureAndHashAlgorithm::read(r)?),
            false => None,
        };
        let signature = codec::read_opaque16(r, 0)?.to_vec();
        Ok(Self {
            algorithm,
            signature,
        })
    }
}

/// A `KeyShareEntry`: one group and the ephemeral public value offered for it.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyShareEntry {
    /// The named group this share belongs to.
    pub group: NamedGroup,
    /// The encoded ephemeral public key.
    pub payload: Vec<u8>,
}

impl KeyShareEntry {
    /// Make a new key share.
    pub fn new(group: NamedGroup, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            group,
            payload: payload.into(),
        }
    }
}

impl Codec<'_> for KeyShareEntry {
    fn encode(&self, bytes: &mut Vec<u8>) {
        self.group.encode(bytes);
        (self.payload.len() as u16).encode(bytes);
        bytes.extend_from_slice(&self.payload);
    }

    fn read(r: &mut Reader<'_>) -> Result<Self, InvalidMessage> {
        let group = NamedGroup::read(r)?;
        let payload = codec::read_opaque16(r, 1)?.to_vec();
        Ok(Self { group, payload })
    }
}

/// A TLS 1.2 and earlier `CertificateRequest` message body.
#[derive(Clone, Debug, PartialEq)]
pub struct CertificateRequest {
    /// The certificate types the server will accept, in its order.
    pub certificate_types: Vec<ClientCertificateType>,
    /// The signature algorithms the server will accept.  TLS 1.2 only.
    pub supported_signature_algorithms: Option<Vec<SignatureAndHashAlgorithm>>,
    /// Encoded distinguished names of acceptable authorities.
    pub certificate_authorities: Vec<Vec<u8>>,
}

impl CertificateRequest {
    /// Encode this request.
    pub fn encode(&self, bytes: &mut Vec<u8>) -> Result<(), Error> {
        codec::encode_vec(ListLength::U8, &self.certificate_types, bytes)?;
        if let Some(algorithms) = &self.supported_signature_algorithms {
            encode_supported_signature_algorithms(algorithms, bytes)?;
        }

        let mut authorities = Vec::new();
        for dn in &self.certificate_authorities {
            codec::write_opaque16(dn, &mut authorities)?;
        }
        codec::write_opaque16(&authorities, bytes)
    }

    /// Decode a request sent under `version`.
    pub fn read(r: &mut Reader<'_>, version: ProtocolVersion) -> Result<Self, InvalidMessage> {
        let certificate_types = codec::read_vec(ListLength::U8, r)?;
        if certificate_types.is_empty() {
            return Err(InvalidMessage::IllegalEmptyList("ClientCertificateTypes"));
        }

        let supported_signature_algorithms = match version.is_tls12_or_later() {
            true => Some(parse_supported_signature_algorithms(r)?),
            false => None,
        };

        let mut dns = Reader::init(codec::read_opaque16(r, 0)?);
        let mut certificate_authorities = Vec::new();
        while dns.any_left() {
            certificate_authorities.push(codec::read_opaque16(&mut dns, 1)?.to_vec());
        }

        Ok(Self {
            certificate_types,
            supported_signature_algorithms,
            certificate_authorities,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::vec;

    use super::*;

    #[test]
    fn scheme_round_trip() {
        let alg = SignatureAndHashAlgorithm::from_scheme(0x0804);
        assert_eq!(alg, SignatureAndHashAlgorithm::RSA_PSS_RSAE_SHA256);
        assert_eq!(alg.scheme(), 0x0804);
        assert_eq!(alg.effective_hash(), Some(HashAlgorithm::SHA256));
        assert_eq!(SignatureAndHashAlgorithm::ED25519.effective_hash(), None);
        assert_eq!(
            SignatureAndHashAlgorithm::from_scheme(0x0403).effective_hash(),
            Some(HashAlgorithm::SHA256)
        );
    }

    #[test]
    fn encoding_signature_algorithm_list() {
        let algs = [
            SignatureAndHashAlgorithm::new(HashAlgorithm::SHA256, SignatureAlgorithm::RSA),
            SignatureAndHashAlgorithm::ED25519,
        ];
        let mut out = vec![];
        encode_supported_signature_algorithms(&algs, &mut out).unwrap();
        assert_eq!(out, vec![0x00, 0x04, 0x04, 0x01, 0x08, 0x07]);

        let parsed = parse_supported_signature_algorithms(&mut Reader::init(&out)).unwrap();
        assert_eq!(parsed, algs.to_vec());
    }

    #[test]
    fn anonymous_rejected_on_encode_and_skipped_on_parse() {
        let anon = SignatureAndHashAlgorithm::new(HashAlgorithm::SHA1, SignatureAlgorithm::Anonymous);
        let mut out = vec![];
        assert_eq!(
            encode_supported_signature_algorithms(&[anon], &mut out),
            Err(Error::ApiMisuse(ApiMisuse::AnonymousSignatureAlgorithm))
        );
        assert_eq!(
            encode_supported_signature_algorithms(&[], &mut out),
            Err(Error::ApiMisuse(ApiMisuse::SignatureAlgorithmListLength))
        );

        let wire = [0x00, 0x04, 0x02, 0x00, 0x02, 0x01];
        let parsed = parse_supported_signature_algorithms(&mut Reader::init(&wire)).unwrap();
        assert_eq!(
            parsed,
            vec![SignatureAndHashAlgorithm::new(
                HashAlgorithm::SHA1,
                SignatureAlgorithm::RSA
            )]
        );
    }

    #[test]
    fn malformed_signature_algorithm_lists() {
        assert_eq!(
            parse_supported_signature_algorithms(&mut Reader::init(&[0x00, 0x00])),
            Err(InvalidMessage::IllegalEmptyList("SignatureAndHashAlgorithms"))
        );
        assert_eq!(
            parse_supported_signature_algorithms(&mut Reader::init(&[0x00, 0x03, 1, 2, 3])),
            Err(InvalidMessage::InvalidListLength("SignatureAndHashAlgorithms"))
        );
        assert_eq!(
            parse_supported_signature_algorithms(&mut Reader::init(&[0x00, 0x04, 1, 2])),
            Err(InvalidMessage::MessageTooShort)
        );
    }

    #[test]
    fn digitally_signed_depends_on_version() {
        let signed = DigitallySigned::new(
            Some(SignatureAndHashAlgorithm::new(
                HashAlgorithm::SHA256,
                SignatureAlgorithm::ECDSA,
            )),
            vec![0xaa, 0xbb],
        );
        let mut out = vec![];
        signed.encode(&mut out).unwrap();
        assert_eq!(out, vec![0x04, 0x03, 0x00, 0x02, 0xaa, 0xbb]);
        let back = DigitallySigned::read(&mut Reader::init(&out), ProtocolVersion::TLSv1_2).unwrap();
        assert_eq!(back, signed);

        let legacy = DigitallySigned::read(&mut Reader::init(&[0x00, 0x01, 0xcc]), ProtocolVersion::TLSv1_0)
            .unwrap();
        assert_eq!(legacy, DigitallySigned::new(None, vec![0xcc]));
    }

    #[test]
    fn key_share_entry_requires_payload() {
        assert_eq!(
            KeyShareEntry::read_bytes(&[0x00, 0x1d, 0x00, 0x00]),
            Err(InvalidMessage::LengthBelowMinimum("opaque"))
        );
        let entry = KeyShareEntry::read_bytes(&[0x00, 0x1d, 0x00, 0x01, 0x42]).unwrap();
        assert_eq!(entry, KeyShareEntry::new(NamedGroup::X25519, vec![0x42]));
    }

    #[test]
    fn certificate_request_round_trip() {
        let req = CertificateRequest {
            certificate_types: vec![ClientCertificateType::RSASign, ClientCertificateType::ECDSASign],
            supported_signature_algorithms: Some(vec![SignatureAndHashAlgorithm::new(
                HashAlgorithm::SHA256,
                SignatureAlgorithm::RSA,
            )]),
            certificate_authorities: vec![vec![0x30, 0x00]],
        };
        let mut out = vec![];
        req.encode(&mut out).unwrap();
        let back = CertificateRequest::read(&mut Reader::init(&out), ProtocolVersion::TLSv1_2).unwrap();
        assert_eq!(back, req);
    }
}
