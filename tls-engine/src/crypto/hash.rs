use std::boxed::Box;

pub use crate::msgs::enums::HashAlgorithm;

/// Describes a single cryptographic hash function.
///
/// This interface can do both one-shot and incremental hashing, using
/// [`Hash::hash()`] and [`Hash::start()`] respectively.
pub trait Hash: Send + Sync {
    /// Start an incremental hash computation.
    fn start(&self) -> Box<dyn Context>;

    /// Return the output of this hash function with input `data`.
    fn hash(&self, data: &[u8]) -> Output;

    /// The length in bytes of this hash function's output.
    fn output_len(&self) -> usize;

    /// Which hash function this is, eg, `HashAlgorithm::SHA256`.
    fn algorithm(&self) -> HashAlgorithm;
}

/// A hash output, stored as a value.
#[derive(Clone)]
pub struct Output {
    buf: [u8; Self::MAX_LEN],
    used: usize,
}

impl Output {
    /// Build a `hash::Output` from a slice of no more than `Output::MAX_LEN` bytes.
    pub fn new(bytes: &[u8]) -> Self {
        let mut output = Self {
            buf: [0u8; Self::MAX_LEN],
            used: bytes.len(),
        };
        debug_assert!(bytes.len() <= Self::MAX_LEN);
        output.buf[..bytes.len()].copy_from_slice(bytes);
        output
    }

    /// Build an output from two concatenated slices, as for the combined
    /// MD5 and SHA-1 hash.
    pub(crate) fn concat(first: &[u8], second: &[u8]) -> Self {
        let mut output = Self::new(first);
        output.buf[first.len()..first.len() + second.len()].copy_from_slice(second);
        output.used += second.len();
        output
    }

    /// Maximum supported hash output size: supports up to SHA512.
    pub const MAX_LEN: usize = 64;
}

impl AsRef<[u8]> for Output {
    fn as_ref(&self) -> &[u8] {
        &self.buf[..self.used]
    }
}

impl core::fmt::Debug for Output {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Output")
            .field(&self.as_ref())
            .finish()
    }
}

/// How to incrementally compute a hash.
pub trait Context: Send + Sync {
    /// Finish the computation, returning the resulting output.
    ///
    /// The computation remains valid, and more data can be added later with
    /// [`Context::update()`].
    fn fork_finish(&self) -> Output;

    /// Fork the computation, producing another context that has the
    /// same prefix as this one.
    fn fork(&self) -> Box<dyn Context>;

    /// Terminate and finish the computation, returning the resulting output.
    ///
    /// Further data cannot be added after this, because the context is consumed.
    fn finish(self: Box<Self>) -> Output;

    /// Add `data` to computation.
    fn update(&mut self, data: &[u8]);
}

/// The MD5 and SHA-1 hashes of the same input, concatenated.
///
/// Used to sign handshake parameters before TLS 1.2, and as the transcript
/// hash of the legacy PRFs.
pub(crate) struct CombinedContext {
    md5: Box<dyn Context>,
    sha1: Box<dyn Context>,
}

impl CombinedContext {
    pub(crate) fn new(md5: &dyn Hash, sha1: &dyn Hash) -> Self {
        Self {
            md5: md5.start(),
            sha1: sha1.start(),
        }
    }

    pub(crate) fn hash(md5: &dyn Hash, sha1: &dyn Hash, data: &[u8]) -> Output {
        Output::concat(md5.hash(data).as_ref(), sha1.hash(data).as_ref())
    }

    /// Fork the MD5 and SHA-1 halves separately.
    pub(crate) fn fork_parts(&self) -> (Box<dyn Context>, Box<dyn Context>) {
        (self.md5.fork(), self.sha1.fork())
    }

    /// Combined output length.
    pub(crate) const OUTPUT_LEN: usize = 36;
}

impl Context for CombinedContext {
    fn fork_finish(&self) -> Output {
        Output::concat(
            self.md5.fork_finish().as_ref(),
            self.sha1.fork_finish().as_ref(),
        )
    }

    fn fork(&self) -> Box<dyn Context> {
        Box::new(Self {
            md5: self.md5.fork(),
            sha1: self.sha1.fork(),
        })
    }

    fn finish(self: Box<Self>) -> Output {
        Output::concat(self.md5.finish().as_ref(), self.sha1.finish().as_ref())
    }

    fn update(&mut self, data: &[u8]) {
        self.md5.update(data);
        self.sha1.update(data);
    }
}
