use core::marker::PhantomData;
use std::boxed::Box;

use ring::digest;
use sha2::Digest;

use crate::crypto;
use crate::msgs::enums::HashAlgorithm;

pub(crate) struct Hash(&'static digest::Algorithm, HashAlgorithm);

pub(crate) static SHA1: Hash = Hash(&digest::SHA1_FOR_LEGACY_USE_ONLY, HashAlgorithm::SHA1);
pub(crate) static SHA256: Hash = Hash(&digest::SHA256, HashAlgorithm::SHA256);
pub(crate) static SHA384: Hash = Hash(&digest::SHA384, HashAlgorithm::SHA384);
pub(crate) static SHA512: Hash = Hash(&digest::SHA512, HashAlgorithm::SHA512);

impl From<digest::Digest> for crypto::hash::Output {
    fn from(val: digest::Digest) -> Self {
        Self::new(val.as_ref())
    }
}

impl crypto::hash::Hash for Hash {
    fn start(&self) -> Box<dyn crypto::hash::Context> {
        Box::new(Context(digest::Context::new(self.0)))
    }

    fn hash(&self, bytes: &[u8]) -> crypto::hash::Output {
        let mut ctx = digest::Context::new(self.0);
        ctx.update(bytes);
        ctx.finish().into()
    }

    fn output_len(&self) -> usize {
        self.0.output_len()
    }

    fn algorithm(&self) -> HashAlgorithm {
        self.1
    }
}

struct Context(digest::Context);

impl crypto::hash::Context for Context {
    fn fork_finish(&self) -> crypto::hash::Output {
        self.0.clone().finish().into()
    }

    fn fork(&self) -> Box<dyn crypto::hash::Context> {
        Box::new(Self(self.0.clone()))
    }

    fn finish(self: Box<Self>) -> crypto::hash::Output {
        self.0.finish().into()
    }

    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }
}

/// Hashes *ring* does not offer, from the RustCrypto crates.
pub(crate) struct RustCryptoHash<D>(PhantomData<fn() -> D>, HashAlgorithm);

pub(crate) static MD5: RustCryptoHash<md5::Md5> = RustCryptoHash(PhantomData, HashAlgorithm::MD5);
pub(crate) static SHA224: RustCryptoHash<sha2::Sha224> =
    RustCryptoHash(PhantomData, HashAlgorithm::SHA224);

impl<D> crypto::hash::Hash for RustCryptoHash<D>
where
    D: Digest + Clone + Send + Sync + 'static,
{
    fn start(&self) -> Box<dyn crypto::hash::Context> {
        Box::new(RustCryptoContext(D::new()))
    }

    fn hash(&self, data: &[u8]) -> crypto::hash::Output {
        crypto::hash::Output::new(&D::digest(data))
    }

    fn output_len(&self) -> usize {
        <D as Digest>::output_size()
    }

    fn algorithm(&self) -> HashAlgorithm {
        self.1
    }
}

struct RustCryptoContext<D>(D);

impl<D> crypto::hash::Context for RustCryptoContext<D>
where
    D: Digest + Clone + Send + Sync + 'static,
{
    fn fork_finish(&self) -> crypto::hash::Output {
        crypto::hash::Output::new(&self.0.clone().finalize())
    }

    fn fork(&self) -> Box<dyn crypto::hash::Context> {
        Box::new(Self(self.0.clone()))
    }

    fn finish(self: Box<Self>) -> crypto::hash::Output {
        crypto::hash::Output::new(&self.0.finalize())
    }

    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.0, data);
    }
}
