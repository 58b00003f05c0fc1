use core::marker::PhantomData;
use std::boxed::Box;

use hmac::{Mac, SimpleHmac};
use sha2::Digest;
use sha2::digest::core_api::BlockSizeUser;

use crate::crypto;
use crate::msgs::enums::HashAlgorithm;

pub(crate) static HMAC_SHA1: Hmac = Hmac(
    &ring::hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
    HashAlgorithm::SHA1,
);
pub(crate) static HMAC_SHA256: Hmac = Hmac(&ring::hmac::HMAC_SHA256, HashAlgorithm::SHA256);
pub(crate) static HMAC_SHA384: Hmac = Hmac(&ring::hmac::HMAC_SHA384, HashAlgorithm::SHA384);
pub(crate) static HMAC_SHA512: Hmac = Hmac(&ring::hmac::HMAC_SHA512, HashAlgorithm::SHA512);

pub(crate) struct Hmac(&'static ring::hmac::Algorithm, HashAlgorithm);

impl crypto::hmac::Hmac for Hmac {
    fn with_key(&self, key: &[u8]) -> Box<dyn crypto::hmac::Key> {
        Box::new(Key(ring::hmac::Key::new(*self.0, key)))
    }

    fn hash_output_len(&self) -> usize {
        self.0.digest_algorithm().output_len()
    }

    fn hash_algorithm(&self) -> HashAlgorithm {
        self.1
    }
}

struct Key(ring::hmac::Key);

impl crypto::hmac::Key for Key {
    fn sign_concat(&self, first: &[u8], middle: &[&[u8]], last: &[u8]) -> crypto::hmac::Tag {
        let mut ctx = ring::hmac::Context::with_key(&self.0);
        ctx.update(first);
        for d in middle {
            ctx.update(d);
        }
        ctx.update(last);
        crypto::hmac::Tag::new(ctx.sign().as_ref())
    }

    fn tag_len(&self) -> usize {
        self.0
            .algorithm()
            .digest_algorithm()
            .output_len()
    }
}

/// HMAC over the RustCrypto hashes, for the legacy PRF and SHA-224 MACs.
pub(crate) struct RustCryptoHmac<D>(PhantomData<fn() -> D>, HashAlgorithm);

pub(crate) static HMAC_MD5: RustCryptoHmac<md5::Md5> =
    RustCryptoHmac(PhantomData, HashAlgorithm::MD5);
pub(crate) static HMAC_SHA224: RustCryptoHmac<sha2::Sha224> =
    RustCryptoHmac(PhantomData, HashAlgorithm::SHA224);

impl<D> crypto::hmac::Hmac for RustCryptoHmac<D>
where
    D: Digest + BlockSizeUser + Clone + Send + Sync + 'static,
{
    fn with_key(&self, key: &[u8]) -> Box<dyn crypto::hmac::Key> {
        // HMAC hashes or pads the key, so every length is accepted.
        let mac = <SimpleHmac<D> as Mac>::new_from_slice(key)
            .expect("HMAC accepts keys of any length");
        Box::new(RustCryptoKey(mac))
    }

    fn hash_output_len(&self) -> usize {
        <D as Digest>::output_size()
    }

    fn hash_algorithm(&self) -> HashAlgorithm {
        self.1
    }
}

struct RustCryptoKey<D: Digest + BlockSizeUser>(SimpleHmac<D>);

impl<D> crypto::hmac::Key for RustCryptoKey<D>
where
    D: Digest + BlockSizeUser + Clone + Send + Sync + 'static,
{
    fn sign_concat(&self, first: &[u8], middle: &[&[u8]], last: &[u8]) -> crypto::hmac::Tag {
        let mut mac = self.0.clone();
        mac.update(first);
        for d in middle {
            mac.update(d);
        }
        mac.update(last);
        crypto::hmac::Tag::new(&mac.finalize().into_bytes())
    }

    fn tag_len(&self) -> usize {
        <D as Digest>::output_size()
    }
}
