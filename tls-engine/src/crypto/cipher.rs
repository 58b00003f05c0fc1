use core::fmt;
use std::boxed::Box;
use std::vec::Vec;

use zeroize::Zeroize;

use crate::enums::{ContentType, ProtocolVersion};
use crate::error::{Error, InvalidMessage, PeerMisbehaved};
use crate::msgs::codec;
use crate::suites::EncryptionAlgorithm;

/// Largest plaintext fragment a record may carry.
pub const MAX_FRAGMENT_LEN: usize = 16_384;

/// Builds record protection for one encryption algorithm.
///
/// The engine consumes ciphers only through this trait: a provider maps a
/// negotiated [`EncryptionAlgorithm`] to an implementation, and the key
/// schedule feeds it keys.
pub trait RecordCipherAlgorithm: Send + Sync {
    /// Build a `MessageEncrypter` for the given key and implicit IV.
    ///
    /// The length of `iv` is [`EncryptionAlgorithm::fixed_iv_len`] for `version`.
    fn encrypter(
        &self,
        version: ProtocolVersion,
        key: AeadKey,
        iv: &[u8],
    ) -> Result<Box<dyn MessageEncrypter>, Error>;

    /// Build a `MessageDecrypter` for the given key and implicit IV.
    fn decrypter(
        &self,
        version: ProtocolVersion,
        key: AeadKey,
        iv: &[u8],
    ) -> Result<Box<dyn MessageDecrypter>, Error>;

    /// Which algorithm this is.
    fn algorithm(&self) -> EncryptionAlgorithm;
}

/// A plaintext record, before encryption or after decryption.
#[derive(Clone, Debug, PartialEq)]
pub struct PlainMessage {
    /// Record content type.
    pub typ: ContentType,
    /// Record-layer version.
    pub version: ProtocolVersion,
    /// Record payload.
    pub payload: Vec<u8>,
}

/// A protected record, as it appears on the wire.
#[derive(Clone, Debug, PartialEq)]
pub struct OpaqueMessage {
    /// Record content type.
    pub typ: ContentType,
    /// Record-layer version.
    pub version: ProtocolVersion,
    /// Protected payload.
    pub payload: Vec<u8>,
}

/// Objects with this trait can decrypt TLS messages.
pub trait MessageDecrypter: Send + Sync {
    /// Perform the decryption over the concerned TLS message.
    ///
    /// Any failure to authenticate is [`Error::DecryptError`].
    fn decrypt(&self, m: OpaqueMessage, seq: u64) -> Result<PlainMessage, Error>;
}

/// Objects with this trait can encrypt TLS messages.
pub trait MessageEncrypter: Send + Sync {
    /// Encrypt the message `m`.
    fn encrypt(&self, m: PlainMessage, seq: u64) -> Result<OpaqueMessage, Error>;

    /// Length of the ciphertext for a plaintext of `payload_len` bytes.
    fn encrypted_payload_len(&self, payload_len: usize) -> usize;
}

/// A matched pair of record encrypter and decrypter for one direction each.
pub struct RecordProtection {
    /// Protects records we send.
    pub encrypter: Box<dyn MessageEncrypter>,
    /// Opens records we receive.
    pub decrypter: Box<dyn MessageDecrypter>,
}

impl fmt::Debug for RecordProtection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordProtection")
            .finish_non_exhaustive()
    }
}

/// Checks a decrypted TLS 1.3 payload and removes its padding and inner type.
pub fn tls13_check_length_and_unpad(mut msg: OpaqueMessage) -> Result<PlainMessage, Error> {
    let payload = &mut msg.payload;

    if payload.len() > MAX_FRAGMENT_LEN + 1 {
        return Err(InvalidMessage::MessageTooLarge.into());
    }

    msg.typ = unpad_tls13(payload);
    if msg.typ == ContentType::Unknown(0) {
        return Err(PeerMisbehaved::IllegalTlsInnerPlaintext.into());
    }

    if payload.len() > MAX_FRAGMENT_LEN {
        return Err(InvalidMessage::MessageTooLarge.into());
    }

    Ok(PlainMessage {
        typ: msg.typ,
        version: ProtocolVersion::TLSv1_3,
        payload: msg.payload,
    })
}

/// `v` is a message payload, immediately post-decryption.  This function
/// removes zero padding bytes, until a non-zero byte is encountered which is
/// the content type, which is returned.  See RFC8446 s5.2.
///
/// ContentType(0) is returned if the message payload is empty or all zeroes.
fn unpad_tls13(v: &mut Vec<u8>) -> ContentType {
    loop {
        match v.pop() {
            Some(0) => {}
            Some(content_type) => return ContentType::from(content_type),
            None => return ContentType::Unknown(0),
        }
    }
}

/// Size of TLS nonces (incorrectly termed "IV" in standard) for all supported ciphersuites
/// (AES-GCM, Chacha20Poly1305)
pub const NONCE_LEN: usize = 12;

/// A write or read IV.
#[derive(Default)]
pub struct Iv([u8; NONCE_LEN]);

impl Iv {
    /// Create a new `Iv` from a byte slice, of precisely `NONCE_LEN` bytes.
    pub fn copy(value: &[u8]) -> Result<Self, Error> {
        let mut iv = Self::default();
        match value.len() {
            NONCE_LEN => {
                iv.0.copy_from_slice(value);
                Ok(iv)
            }
            _ => Err(Error::General("IV length does not match nonce length".into())),
        }
    }
}

impl From<[u8; NONCE_LEN]> for Iv {
    fn from(bytes: [u8; NONCE_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Iv {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Drop for Iv {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Combine an `Iv` and sequence number to produce a unique nonce.
///
/// This is `iv ^ seq` where `seq` is encoded as a 96-bit big-endian integer.
#[inline]
pub fn make_nonce(iv: &Iv, seq: u64) -> [u8; NONCE_LEN] {
    let mut nonce = [0u8; NONCE_LEN];
    codec::put_u64(seq, &mut nonce[4..]);

    nonce
        .iter_mut()
        .zip(iv.0.iter())
        .for_each(|(nonce, iv)| {
            *nonce ^= *iv;
        });

    nonce
}

/// Returns a TLS1.3 `additional_data` encoding.
///
/// See RFC8446 s5.2 for the `additional_data` definition.
#[inline]
pub fn make_tls13_aad(payload_len: usize) -> [u8; 5] {
    let version = ProtocolVersion::TLSv1_2.to_array();
    [
        u8::from(ContentType::ApplicationData),
        // nb. this is `legacy_record_version`, ie TLS1.2 even for TLS1.3.
        version[0],
        version[1],
        (payload_len >> 8) as u8,
        (payload_len & 0xff) as u8,
    ]
}

const TLS12_AAD_SIZE: usize = 8 + 1 + 2 + 2;

/// Returns a TLS1.2 `additional_data` encoding.
///
/// See RFC5246 s6.2.3.3 for the `additional_data` definition.
#[inline]
pub fn make_tls12_aad(
    seq: u64,
    typ: ContentType,
    vers: ProtocolVersion,
    len: usize,
) -> [u8; TLS12_AAD_SIZE] {
    let mut out = [0; TLS12_AAD_SIZE];
    codec::put_u64(seq, &mut out[0..]);
    out[8] = u8::from(typ);
    codec::put_u16(u16::from(vers), &mut out[9..]);
    codec::put_u16(len as u16, &mut out[11..]);
    out
}

/// Largest possible AEAD key in the ciphersuites we support.
const MAX_AEAD_KEY_LEN: usize = 32;

/// A key for an AEAD algorithm.
///
/// This is a value type for a byte string up to `MAX_AEAD_KEY_LEN` bytes in length.
pub struct AeadKey {
    buf: [u8; MAX_AEAD_KEY_LEN],
    used: usize,
}

impl AeadKey {
    /// Copy a key of at most 32 bytes.
    pub fn new(buf: &[u8]) -> Result<Self, Error> {
        if buf.len() > MAX_AEAD_KEY_LEN {
            return Err(Error::General("AEAD key too long".into()));
        }

        let mut key = Self::from([0u8; MAX_AEAD_KEY_LEN]);
        key.buf[..buf.len()].copy_from_slice(buf);
        key.used = buf.len();
        Ok(key)
    }
}

impl From<[u8; MAX_AEAD_KEY_LEN]> for AeadKey {
    fn from(bytes: [u8; MAX_AEAD_KEY_LEN]) -> Self {
        Self {
            buf: bytes,
            used: MAX_AEAD_KEY_LEN,
        }
    }
}

impl AsRef<[u8]> for AeadKey {
    fn as_ref(&self) -> &[u8] {
        &self.buf[..self.used]
    }
}

impl Drop for AeadKey {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use std::vec;

    use super::*;

    #[test]
    fn nonce_is_iv_xor_sequence() {
        let iv = Iv::from([0x01; NONCE_LEN]);
        let nonce = make_nonce(&iv, 0x0102_0304_0506_0708);
        assert_eq!(
            nonce,
            [0x01, 0x01, 0x01, 0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06, 0x09]
        );
        assert_eq!(make_nonce(&iv, 0), [0x01; NONCE_LEN]);
    }

    #[test]
    fn aad_layouts() {
        assert_eq!(make_tls13_aad(0x1234), [0x17, 0x03, 0x03, 0x12, 0x34]);
        assert_eq!(
            make_tls12_aad(7, ContentType::Handshake, ProtocolVersion::TLSv1_2, 0x20),
            [0, 0, 0, 0, 0, 0, 0, 7, 0x16, 0x03, 0x03, 0x00, 0x20]
        );
    }

    #[test]
    fn unpadding() {
        let msg = OpaqueMessage {
            typ: ContentType::ApplicationData,
            version: ProtocolVersion::TLSv1_2,
            payload: vec![b'h', b'i', 0x16, 0, 0, 0],
        };
        let plain = tls13_check_length_and_unpad(msg).unwrap();
        assert_eq!(plain.typ, ContentType::Handshake);
        assert_eq!(plain.version, ProtocolVersion::TLSv1_3);
        assert_eq!(plain.payload, b"hi");

        let all_padding = OpaqueMessage {
            typ: ContentType::ApplicationData,
            version: ProtocolVersion::TLSv1_2,
            payload: vec![0, 0],
        };
        assert_eq!(
            tls13_check_length_and_unpad(all_padding),
            Err(PeerMisbehaved::IllegalTlsInnerPlaintext.into())
        );
    }

    #[test]
    fn key_and_iv_length_checks() {
        assert_eq!(AeadKey::new(&[1; 16]).unwrap().as_ref(), &[1; 16]);
        assert!(AeadKey::new(&[1; 33]).is_err());
        assert!(Iv::copy(&[0; 4]).is_err());
        assert_eq!(Iv::copy(&[9; 12]).unwrap().as_ref(), &[9; 12]);
    }
}
