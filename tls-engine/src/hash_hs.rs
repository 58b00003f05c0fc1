use core::mem;
use std::boxed::Box;
use std::vec::Vec;

use crate::crypto::hash::{self, CombinedContext};
use crate::crypto::CryptoProvider;
use crate::enums::HandshakeType;
use crate::error::{ApiMisuse, Error};
use crate::msgs::codec::{u24, Codec};
use crate::msgs::enums::HashAlgorithm;
use crate::suites::PrfAlgorithm;

/// Early stage buffering of handshake messages.
///
/// Before we know the hash algorithm to use to verify the handshake, we just buffer the messages.
/// During the handshake, we may restart the transcript due to a HelloRetryRequest, reverting
/// from the `HandshakeHash` to a `HandshakeHashBuffer` again.
#[derive(Default)]
pub struct HandshakeHashBuffer {
    buffer: Vec<u8>,
    client_auth_enabled: bool,
}

impl HandshakeHashBuffer {
    /// An empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// We might be doing client auth, so need to keep a full
    /// log of the handshake.
    pub fn set_client_auth_enabled(&mut self) {
        self.client_auth_enabled = true;
    }

    /// Buffer an encoded handshake message, header included.
    pub fn add_message(&mut self, encoded: &[u8]) {
        self.buffer.extend_from_slice(encoded);
    }

    /// Get the hash value if we were to hash `extra` too.
    pub fn get_hash_given(&self, provider: &'static dyn hash::Hash, extra: &[u8]) -> hash::Output {
        let mut ctx = provider.start();
        ctx.update(&self.buffer);
        ctx.update(extra);
        ctx.finish()
    }

    /// We now know what hash function the verify_data will use.
    pub fn start_hash(self, provider: &'static dyn hash::Hash) -> HandshakeHash {
        let mut ctx = provider.start();
        ctx.update(&self.buffer);
        HandshakeHash {
            transcript: Transcript::Single { provider, ctx },
            client_auth: self.client_auth_buffer(),
        }
    }

    /// Start the transcript hash that `prf` uses.
    ///
    /// The legacy PRFs hash the transcript with MD5 and SHA-1 together.
    pub fn start_for_prf(
        self,
        provider: &dyn CryptoProvider,
        prf: PrfAlgorithm,
    ) -> Result<HandshakeHash, Error> {
        if !matches!(prf, PrfAlgorithm::SslPrfLegacy | PrfAlgorithm::TlsPrfLegacy) {
            let hash = prf
                .hash()
                .and_then(|hash| provider.hash(hash))
                .ok_or(ApiMisuse::AlgorithmNotProvided)?;
            return Ok(self.start_hash(hash));
        }

        let md5 = provider
            .hash(HashAlgorithm::MD5)
            .ok_or(ApiMisuse::AlgorithmNotProvided)?;
        let sha1 = provider
            .hash(HashAlgorithm::SHA1)
            .ok_or(ApiMisuse::AlgorithmNotProvided)?;
        let mut ctx = CombinedContext::new(md5, sha1);
        hash::Context::update(&mut ctx, &self.buffer);
        Ok(HandshakeHash {
            transcript: Transcript::Combined { md5, sha1, ctx },
            client_auth: self.client_auth_buffer(),
        })
    }

    fn client_auth_buffer(self) -> Option<Vec<u8>> {
        match self.client_auth_enabled {
            true => Some(self.buffer),
            false => None,
        }
    }
}

/// This deals with keeping a running hash of the handshake
/// messages.  This is computed by buffering initially.  Once
/// we know what hash function we need to use we switch to
/// incremental hashing.
///
/// For client auth, we also need to buffer all the messages.
/// This is disabled in cases where client auth is not possible.
pub struct HandshakeHash {
    transcript: Transcript,

    /// buffer for client-auth.
    client_auth: Option<Vec<u8>>,
}

enum Transcript {
    Single {
        provider: &'static dyn hash::Hash,
        ctx: Box<dyn hash::Context>,
    },
    Combined {
        md5: &'static dyn hash::Hash,
        sha1: &'static dyn hash::Hash,
        ctx: CombinedContext,
    },
}

impl Transcript {
    fn ctx(&self) -> &dyn hash::Context {
        match self {
            Self::Single { ctx, .. } => ctx.as_ref(),
            Self::Combined { ctx, .. } => ctx,
        }
    }

    fn ctx_mut(&mut self) -> &mut dyn hash::Context {
        match self {
            Self::Single { ctx, .. } => ctx.as_mut(),
            Self::Combined { ctx, .. } => ctx,
        }
    }

    /// Start over, returning the hash of everything so far.
    fn restart(&mut self) -> hash::Output {
        match self {
            Self::Single { provider, ctx } => mem::replace(ctx, provider.start()).finish(),
            Self::Combined { md5, sha1, ctx } => {
                let old = mem::replace(ctx, CombinedContext::new(*md5, *sha1));
                hash::Context::finish(Box::new(old))
            }
        }
    }
}

impl HandshakeHash {
    /// We decided not to do client auth after all, so discard
    /// the transcript.
    pub fn abandon_client_auth(&mut self) {
        self.client_auth = None;
    }

    /// Hash/buffer an encoded handshake message, header included.
    pub fn add_message(&mut self, encoded: &[u8]) -> &mut Self {
        self.transcript
            .ctx_mut()
            .update(encoded);

        if let Some(buffer) = &mut self.client_auth {
            buffer.extend_from_slice(encoded);
        }

        self
    }

    /// Get the hash value if we were to hash `extra` too.
    pub fn get_hash_given(&self, extra: &[u8]) -> hash::Output {
        let mut ctx = self.transcript.ctx().fork();
        ctx.update(extra);
        ctx.finish()
    }

    /// Go back to buffering, with the transcript so far replaced by
    /// its `message_hash` message.
    pub fn into_hrr_buffer(mut self) -> HandshakeHashBuffer {
        let old_hash = self.transcript.restart();

        HandshakeHashBuffer {
            client_auth_enabled: self.client_auth.is_some(),
            buffer: message_hash(old_hash.as_ref()),
        }
    }

    /// Take the current hash value, and encapsulate it in a
    /// `message_hash` handshake message.  Start this hash
    /// again, with that message at the front.
    pub fn rollup_for_hrr(&mut self) {
        let old_hash = self.transcript.restart();
        if let Some(buffer) = &mut self.client_auth {
            buffer.clear();
        }
        self.add_message(&message_hash(old_hash.as_ref()));
    }

    /// Get the current hash value.
    pub fn current_hash(&self) -> hash::Output {
        self.transcript.ctx().fork_finish()
    }

    /// An independent copy of the running hash.
    pub fn fork(&self) -> Box<dyn hash::Context> {
        self.transcript.ctx().fork()
    }

    /// The running MD5 and SHA-1 hashes, for transcripts of the legacy PRFs.
    pub(crate) fn fork_legacy(&self) -> Option<(Box<dyn hash::Context>, Box<dyn hash::Context>)> {
        match &self.transcript {
            Transcript::Combined { ctx, .. } => Some(ctx.fork_parts()),
            Transcript::Single { .. } => None,
        }
    }

    /// Takes this object's buffer containing all handshake messages
    /// so far.  This method only works once; it resets the buffer
    /// to empty.
    pub fn take_handshake_buf(&mut self) -> Option<Vec<u8>> {
        self.client_auth.take()
    }

    /// The hashing algorithm, or `None` for the combined MD5 and SHA-1 hash.
    pub fn algorithm(&self) -> Option<HashAlgorithm> {
        match &self.transcript {
            Transcript::Single { provider, .. } => Some(provider.algorithm()),
            Transcript::Combined { .. } => None,
        }
    }
}

/// The synthetic `message_hash` handshake message carrying `hash`.
pub(crate) fn message_hash(hash: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 + hash.len());
    HandshakeType::MessageHash.encode(&mut out);
    u24(hash.len() as u32).encode(&mut out);
    out.extend_from_slice(hash);
    out
}
