use core::fmt::Debug;
use std::vec::Vec;

use crate::error::{ApiMisuse, Error, InvalidMessage};

/// Wrapper over a slice of bytes that allows reading chunks from
/// with the current position state held using a cursor.
///
/// A new reader for a sub section of the buffer can be created
/// using the `sub` function or a section of a certain length can
/// be obtained using the `take` function
pub struct Reader<'a> {
    /// The underlying buffer storing the readers content
    buffer: &'a [u8],
    /// Stores the current reading position for the buffer
    cursor: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new Reader of the provided `bytes` slice with
    /// the initial cursor position of zero.
    pub fn init(bytes: &'a [u8]) -> Self {
        Reader {
            buffer: bytes,
            cursor: 0,
        }
    }

    /// Attempts to create a new Reader on a sub section of this
    /// readers bytes by taking a slice of the provided `length`
    /// will return None if there is not enough bytes
    pub fn sub(&mut self, length: usize) -> Result<Self, InvalidMessage> {
        match self.take(length) {
            Some(bytes) => Ok(Reader::init(bytes)),
            None => Err(InvalidMessage::MessageTooShort),
        }
    }

    /// Borrows a slice of all the remaining bytes
    /// that appear after the cursor position.
    ///
    /// Moves the cursor to the end of the buffer length.
    pub fn rest(&mut self) -> &'a [u8] {
        let rest = &self.buffer[self.cursor..];
        self.cursor = self.buffer.len();
        rest
    }

    /// Attempts to borrow a slice of bytes from the current
    /// cursor position of `length` if there is not enough
    /// bytes remaining after the cursor to take the length
    /// then None is returned instead.
    pub fn take(&mut self, length: usize) -> Option<&'a [u8]> {
        if self.left() < length {
            return None;
        }
        let current = self.cursor;
        self.cursor += length;
        Some(&self.buffer[current..current + length])
    }

    /// Used to check whether the reader has any content left
    /// after the cursor (cursor has not reached end of buffer)
    pub fn any_left(&self) -> bool {
        self.cursor < self.buffer.len()
    }

    /// Fails with `TrailingData` if anything remains after the cursor.
    pub fn expect_empty(&self, name: &'static str) -> Result<(), InvalidMessage> {
        match self.any_left() {
            true => Err(InvalidMessage::TrailingData(name)),
            false => Ok(()),
        }
    }

    /// Returns the cursor position which is also the number
    /// of bytes that have been read from the buffer.
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Returns the number of bytes that are still able to be
    /// read (The number of remaining takes)
    pub fn left(&self) -> usize {
        self.buffer.len() - self.cursor
    }
}

/// Trait for implementing encoding and decoding functionality
/// on something.
pub trait Codec<'a>: Debug + Sized {
    /// Function for encoding itself by appending itself to
    /// the provided vec of bytes.
    fn encode(&self, bytes: &mut Vec<u8>);

    /// Function for decoding itself from the provided reader
    /// will return Some if the decoding was successful or
    /// None if it was not.
    fn read(_: &mut Reader<'a>) -> Result<Self, InvalidMessage>;

    /// Convenience function for encoding the implementation
    /// into a vec and returning it
    fn get_encoding(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        self.encode(&mut bytes);
        bytes
    }

    /// Function for wrapping a call to the read function in
    /// a Reader for the slice of bytes provided
    fn read_bytes(bytes: &'a [u8]) -> Result<Self, InvalidMessage> {
        let mut reader = Reader::init(bytes);
        Self::read(&mut reader)
    }
}

impl Codec<'_> for u8 {
    fn encode(&self, bytes: &mut Vec<u8>) {
        bytes.push(*self);
    }

    fn read(r: &mut Reader<'_>) -> Result<Self, InvalidMessage> {
        match r.take(1) {
            Some(&[byte]) => Ok(byte),
            _ => Err(InvalidMessage::MissingData("u8")),
        }
    }
}

pub(crate) fn put_u16(v: u16, out: &mut [u8]) {
    out[..2].copy_from_slice(&v.to_be_bytes());
}

impl Codec<'_> for u16 {
    fn encode(&self, bytes: &mut Vec<u8>) {
        bytes.extend_from_slice(&self.to_be_bytes());
    }

    fn read(r: &mut Reader<'_>) -> Result<Self, InvalidMessage> {
        match r.take(2) {
            Some(&[b1, b2]) => Ok(Self::from_be_bytes([b1, b2])),
            _ => Err(InvalidMessage::MissingData("u16")),
        }
    }
}

/// A 24-bit unsigned integer, as used for handshake message lengths.
// Make a distinct type for u24, even though it's a u32 underneath
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone)]
pub struct u24(pub u32);

impl u24 {
    pub(crate) const MAX: u32 = 0xff_ffff;
}

impl From<u24> for usize {
    #[inline]
    fn from(v: u24) -> Self {
        v.0 as Self
    }
}

impl Codec<'_> for u24 {
    fn encode(&self, bytes: &mut Vec<u8>) {
        let be_bytes = u32::to_be_bytes(self.0);
        bytes.extend_from_slice(&be_bytes[1..]);
    }

    fn read(r: &mut Reader<'_>) -> Result<Self, InvalidMessage> {
        match r.take(3) {
            Some(&[a, b, c]) => Ok(Self(u32::from_be_bytes([0, a, b, c]))),
            _ => Err(InvalidMessage::MissingData("u24")),
        }
    }
}

impl Codec<'_> for u32 {
    fn encode(&self, bytes: &mut Vec<u8>) {
        bytes.extend(Self::to_be_bytes(*self));
    }

    fn read(r: &mut Reader<'_>) -> Result<Self, InvalidMessage> {
        match r.take(4) {
            Some(&[a, b, c, d]) => Ok(Self::from_be_bytes([a, b, c, d])),
            _ => Err(InvalidMessage::MissingData("u32")),
        }
    }
}

/// A 48-bit unsigned integer, as used for DTLS sequence numbers.
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct u48(pub u64);

impl u48 {
    pub(crate) const MAX: u64 = 0xffff_ffff_ffff;
}

impl Codec<'_> for u48 {
    fn encode(&self, bytes: &mut Vec<u8>) {
        let be_bytes = u64::to_be_bytes(self.0);
        bytes.extend_from_slice(&be_bytes[2..]);
    }

    fn read(r: &mut Reader<'_>) -> Result<Self, InvalidMessage> {
        match r.take(6) {
            Some(&[a, b, c, d, e, f]) => Ok(Self(u64::from_be_bytes([0, 0, a, b, c, d, e, f]))),
            _ => Err(InvalidMessage::MissingData("u48")),
        }
    }
}

pub(crate) fn put_u64(v: u64, bytes: &mut [u8]) {
    bytes[..8].copy_from_slice(&v.to_be_bytes());
}

impl Codec<'_> for u64 {
    fn encode(&self, bytes: &mut Vec<u8>) {
        let mut b64 = [0u8; 8];
        put_u64(*self, &mut b64);
        bytes.extend_from_slice(&b64);
    }

    fn read(r: &mut Reader<'_>) -> Result<Self, InvalidMessage> {
        match r.take(8) {
            Some(&[a, b, c, d, e, f, g, h]) => Ok(Self::from_be_bytes([a, b, c, d, e, f, g, h])),
            _ => Err(InvalidMessage::MissingData("u64")),
        }
    }
}

macro_rules! uint_checks {
    ($($bits:literal: $max:expr => $is_valid:ident, $check:ident;)*) => {
        $(
            #[doc = concat!("Whether `value` fits in an unsigned ", stringify!($bits), "-bit field.")]
            #[inline]
            pub fn $is_valid(value: u64) -> bool {
                value <= $max
            }

            #[doc = concat!("Fails with an internal error unless `value` fits in an unsigned ", stringify!($bits), "-bit field.")]
            pub fn $check(value: u64) -> Result<(), Error> {
                match $is_valid(value) {
                    true => Ok(()),
                    false => Err(ApiMisuse::ValueOutOfRange { bits: $bits, value }.into()),
                }
            }
        )*
    };
}

uint_checks! {
    8: u64::from(u8::MAX) => is_valid_uint8, check_uint8;
    16: u64::from(u16::MAX) => is_valid_uint16, check_uint16;
    24: u64::from(u24::MAX) => is_valid_uint24, check_uint24;
    32: u64::from(u32::MAX) => is_valid_uint32, check_uint32;
    48: u48::MAX => is_valid_uint48, check_uint48;
}

/// Whether `value` fits in an unsigned 64-bit field, which every `u64` does.
#[inline]
pub fn is_valid_uint64(_value: u64) -> bool {
    true
}

/// The 64-bit counterpart of [`check_uint48`].  It cannot fail.
pub fn check_uint64(value: u64) -> Result<(), Error> {
    match is_valid_uint64(value) {
        true => Ok(()),
        false => Err(ApiMisuse::ValueOutOfRange { bits: 64, value }.into()),
    }
}

/// Width of a length prefix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ListLength {
    /// One byte
    U8,
    /// Two bytes
    U16,
    /// Three bytes
    U24,
}

impl ListLength {
    fn check(self, len: usize) -> Result<(), Error> {
        let len = len as u64;
        match self {
            Self::U8 => check_uint8(len),
            Self::U16 => check_uint16(len),
            Self::U24 => check_uint24(len),
        }
    }

    fn encode_len(self, len: usize, bytes: &mut Vec<u8>) {
        match self {
            Self::U8 => (len as u8).encode(bytes),
            Self::U16 => (len as u16).encode(bytes),
            Self::U24 => u24(len as u32).encode(bytes),
        }
    }

    fn read_len(self, r: &mut Reader<'_>) -> Result<usize, InvalidMessage> {
        Ok(match self {
            Self::U8 => usize::from(u8::read(r)?),
            Self::U16 => usize::from(u16::read(r)?),
            Self::U24 => usize::from(u24::read(r)?),
        })
    }
}

/// Append `data` with a length prefix of the given width.
///
/// Fails with an internal error if `data` is too long for the prefix.
pub fn write_opaque(size_len: ListLength, data: &[u8], out: &mut Vec<u8>) -> Result<(), Error> {
    size_len.check(data.len())?;
    size_len.encode_len(data.len(), out);
    out.extend_from_slice(data);
    Ok(())
}

/// `opaque data<0..2^8-1>`
pub fn write_opaque8(data: &[u8], out: &mut Vec<u8>) -> Result<(), Error> {
    write_opaque(ListLength::U8, data, out)
}

/// `opaque data<0..2^16-1>`
pub fn write_opaque16(data: &[u8], out: &mut Vec<u8>) -> Result<(), Error> {
    write_opaque(ListLength::U16, data, out)
}

/// `opaque data<0..2^24-1>`
pub fn write_opaque24(data: &[u8], out: &mut Vec<u8>) -> Result<(), Error> {
    write_opaque(ListLength::U24, data, out)
}

/// Encode `data` with a length prefix into a new buffer.
pub fn encode_opaque(size_len: ListLength, data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut out = Vec::with_capacity(data.len() + 3);
    write_opaque(size_len, data, &mut out)?;
    Ok(out)
}

/// Read a length-prefixed value of at least `min_len` bytes.
pub fn read_opaque<'a>(
    size_len: ListLength,
    r: &mut Reader<'a>,
    min_len: usize,
) -> Result<&'a [u8], InvalidMessage> {
    let len = size_len.read_len(r)?;
    if len < min_len {
        return Err(InvalidMessage::LengthBelowMinimum("opaque"));
    }

    r.take(len)
        .ok_or(InvalidMessage::MessageTooShort)
}

/// Read an `opaque<min_len..2^8-1>`.
pub fn read_opaque8<'a>(r: &mut Reader<'a>, min_len: usize) -> Result<&'a [u8], InvalidMessage> {
    read_opaque(ListLength::U8, r, min_len)
}

/// Read an `opaque<min_len..2^16-1>`.
pub fn read_opaque16<'a>(r: &mut Reader<'a>, min_len: usize) -> Result<&'a [u8], InvalidMessage> {
    read_opaque(ListLength::U16, r, min_len)
}

/// Read an `opaque<min_len..2^24-1>`.
pub fn read_opaque24<'a>(r: &mut Reader<'a>, min_len: usize) -> Result<&'a [u8], InvalidMessage> {
    read_opaque(ListLength::U24, r, min_len)
}

/// Decode a buffer that must consist of exactly one length-prefixed value.
///
/// The declared length must match the remaining bytes exactly.  Nothing is
/// returned on failure, so callers never observe a partial decode.
pub fn decode_opaque(
    size_len: ListLength,
    buf: &[u8],
    min_len: usize,
) -> Result<&[u8], InvalidMessage> {
    let mut r = Reader::init(buf);
    let value = read_opaque(size_len, &mut r, min_len)?;
    r.expect_empty("opaque")?;
    Ok(value)
}

/// Decode a buffer holding exactly one `opaque<min_len..2^8-1>`.
pub fn decode_opaque8(buf: &[u8], min_len: usize) -> Result<&[u8], InvalidMessage> {
    decode_opaque(ListLength::U8, buf, min_len)
}

/// Decode a buffer holding exactly one `opaque<min_len..2^16-1>`.
pub fn decode_opaque16(buf: &[u8], min_len: usize) -> Result<&[u8], InvalidMessage> {
    decode_opaque(ListLength::U16, buf, min_len)
}

/// Encode a list of items with a length prefix of the given width.
///
/// The prefix counts bytes, not items.
pub fn encode_vec<'a, T: Codec<'a>>(
    size_len: ListLength,
    items: &[T],
    bytes: &mut Vec<u8>,
) -> Result<(), Error> {
    let mut body = Vec::new();
    for i in items {
        i.encode(&mut body);
    }
    write_opaque(size_len, &body, bytes)
}

/// Read a byte-length-prefixed list of items.
pub fn read_vec<'a, T: Codec<'a>>(
    size_len: ListLength,
    r: &mut Reader<'a>,
) -> Result<Vec<T>, InvalidMessage> {
    let len = size_len.read_len(r)?;
    let mut sub = r.sub(len)?;
    let mut ret = Vec::new();
    while sub.any_left() {
        ret.push(T::read(&mut sub)?);
    }
    Ok(ret)
}

#[cfg(test)]
mod tests {
    use std::vec;

    use super::*;

    #[test]
    fn u24_and_u48_are_big_endian() {
        assert_eq!(u24(0x010203).get_encoding(), vec![1, 2, 3]);
        assert_eq!(u48(0x0102_0304_0506).get_encoding(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(
            u48::read_bytes(&[0xff; 6]).unwrap(),
            u48(0xffff_ffff_ffff)
        );
        assert_eq!(
            u24::read_bytes(&[1, 2]).unwrap_err(),
            InvalidMessage::MissingData("u24")
        );
    }

    #[test]
    fn uint_range_checks() {
        assert!(is_valid_uint8(255));
        assert!(!is_valid_uint8(256));
        assert!(is_valid_uint24(0xff_ffff));
        assert!(!is_valid_uint24(0x100_0000));
        assert!(is_valid_uint48(0xffff_ffff_ffff));
        assert_eq!(
            check_uint16(0x1_0000),
            Err(Error::ApiMisuse(ApiMisuse::ValueOutOfRange {
                bits: 16,
                value: 0x1_0000
            }))
        );
        assert_eq!(check_uint32(u64::from(u32::MAX)), Ok(()));

        assert!(!is_valid_uint48(1 << 48));
        assert!(is_valid_uint64(1 << 48));
        assert!(is_valid_uint64(u64::MAX));
        assert_eq!(check_uint64(u64::MAX), Ok(()));
        assert_eq!(
            check_uint48(u64::MAX),
            Err(Error::from(ApiMisuse::ValueOutOfRange {
                bits: 48,
                value: u64::MAX
            }))
        );
    }

    #[test]
    fn opaque_write_rejects_oversized_values() {
        let mut out = vec![];
        assert!(write_opaque8(&[0u8; 256], &mut out).is_err());
        assert!(out.is_empty());

        write_opaque24(b"abc", &mut out).unwrap();
        assert_eq!(out, vec![0, 0, 3, b'a', b'b', b'c']);
    }

    #[test]
    fn opaque16_decode_requires_exact_length() {
        assert_eq!(decode_opaque16(&[0, 2, 0xaa, 0xbb], 0).unwrap(), &[0xaa, 0xbb]);
        assert_eq!(
            decode_opaque16(&[0, 2, 0xaa, 0xbb, 0xcc], 0),
            Err(InvalidMessage::TrailingData("opaque"))
        );
        assert_eq!(
            decode_opaque16(&[0, 3, 0xaa, 0xbb], 0),
            Err(InvalidMessage::MessageTooShort)
        );
        assert_eq!(
            decode_opaque8(&[1, 0xaa], 2),
            Err(InvalidMessage::LengthBelowMinimum("opaque"))
        );
    }

    #[test]
    fn read_opaque_respects_minimum_and_advances() {
        let bytes = [1, 0x55, 0, 1, 0x66];
        let mut r = Reader::init(&bytes);
        assert_eq!(read_opaque8(&mut r, 1).unwrap(), &[0x55]);
        assert_eq!(read_opaque16(&mut r, 0).unwrap(), &[0x66]);
        assert!(!r.any_left());
        assert_eq!(r.used(), 5);
    }

    #[test]
    fn vec_round_trip() {
        let mut out = vec![];
        encode_vec(ListLength::U16, &[0x0102u16, 0x0304], &mut out).unwrap();
        assert_eq!(out, vec![0, 4, 1, 2, 3, 4]);
        let mut r = Reader::init(&out);
        let items: Vec<u16> = read_vec(ListLength::U16, &mut r).unwrap();
        assert_eq!(items, vec![0x0102, 0x0304]);
    }
}
