//! The SSL 3.0 key derivation and Finished constructions.

use std::boxed::Box;
use std::vec::Vec;

use crate::crypto::hash::{Context, Hash};
use crate::crypto::CryptoProvider;
use crate::error::{ApiMisuse, Error};
use crate::msgs::enums::HashAlgorithm;
use crate::security_params::Side;

const MD5_PAD_LEN: usize = 48;
const SHA1_PAD_LEN: usize = 40;
const PAD1: u8 = 0x36;
const PAD2: u8 = 0x5c;

/// Each output block uses a longer label: `A`, `BB`, `CCC` and so on up to `Z`.
const MAX_BLOCKS: usize = 26;

/// Fill `out` with `MD5(secret || SHA1(label_i || secret || seed))` blocks.
pub(crate) fn prf(
    provider: &dyn CryptoProvider,
    out: &mut [u8],
    secret: &[u8],
    seed: &[u8],
) -> Result<(), Error> {
    let (md5, sha1) = hashes(provider)?;

    let block_len = md5.output_len();
    if out.len() > MAX_BLOCKS * block_len {
        return Err(Error::General("SSL 3.0 key derivation output too long".into()));
    }

    for (i, chunk) in out.chunks_mut(block_len).enumerate() {
        let label = [b'A' + i as u8; MAX_BLOCKS];
        let mut inner = sha1.start();
        inner.update(&label[..i + 1]);
        inner.update(secret);
        inner.update(seed);
        let inner = inner.finish();

        let mut outer = md5.start();
        outer.update(secret);
        outer.update(inner.as_ref());
        chunk.copy_from_slice(&outer.finish().as_ref()[..chunk.len()]);
    }

    Ok(())
}

/// The 36-byte Finished value sent by `sender`.
///
/// `md5` and `sha1` are the running transcript hashes, which are consumed.
pub(crate) fn verify_data(
    provider: &dyn CryptoProvider,
    md5: Box<dyn Context>,
    sha1: Box<dyn Context>,
    master_secret: &[u8],
    sender: Side,
) -> Result<Vec<u8>, Error> {
    let (md5_hash, sha1_hash) = hashes(provider)?;
    let sender = match sender {
        Side::Client => b"CLNT",
        Side::Server => b"SRVR",
    };

    let mut out = Vec::with_capacity(md5_hash.output_len() + sha1_hash.output_len());
    for (hash, transcript, pad_len) in [
        (md5_hash, md5, MD5_PAD_LEN),
        (sha1_hash, sha1, SHA1_PAD_LEN),
    ] {
        out.extend_from_slice(padded_mac(hash, transcript, sender, master_secret, pad_len).as_ref());
    }
    Ok(out)
}

fn padded_mac(
    hash: &dyn Hash,
    mut transcript: Box<dyn Context>,
    sender: &[u8],
    master_secret: &[u8],
    pad_len: usize,
) -> crate::crypto::hash::Output {
    let pad1 = [PAD1; MD5_PAD_LEN];
    let pad2 = [PAD2; MD5_PAD_LEN];

    transcript.update(sender);
    transcript.update(master_secret);
    transcript.update(&pad1[..pad_len]);
    let inner = transcript.finish();

    let mut outer = hash.start();
    outer.update(master_secret);
    outer.update(&pad2[..pad_len]);
    outer.update(inner.as_ref());
    outer.finish()
}

fn hashes(provider: &dyn CryptoProvider) -> Result<(&'static dyn Hash, &'static dyn Hash), Error> {
    match (
        provider.hash(HashAlgorithm::MD5),
        provider.hash(HashAlgorithm::SHA1),
    ) {
        (Some(md5), Some(sha1)) => Ok((md5, sha1)),
        _ => Err(ApiMisuse::AlgorithmNotProvided.into()),
    }
}

#[cfg(all(test, feature = "ring"))]
mod tests {
    use super::*;
    use crate::crypto::ring::Ring;

    fn master() -> Vec<u8> {
        (0u8..48).collect()
    }

    #[test]
    fn key_derivation() {
        let mut out = [0u8; 104];
        prf(&Ring, &mut out, &master(), &[0x11; 64]).unwrap();
        assert_eq!(
            hex::encode(out),
            "43bc404f630b757b18f0995971be1d997fc78facf17994a16be8ac977f7ac30a\
             85a30026dfc16f5be258fca1b7d6554f11b068eeef2faefd2df32bdab803cce0\
             dc3d538c7d89af92a2dc19bbbc830ecbdc8534dbbeda91767bf90ec33de88eeb\
             660f1a6fe2ef4e96"
        );
    }

    #[test]
    fn key_derivation_length_is_bounded() {
        let mut out = [0u8; 26 * 16];
        assert!(prf(&Ring, &mut out, &master(), b"").is_ok());
        let mut out = [0u8; 26 * 16 + 1];
        assert!(prf(&Ring, &mut out, &master(), b"").is_err());
    }

    #[test]
    fn finished_values() {
        let transcript = |alg| {
            let mut ctx = Ring.hash(alg).unwrap().start();
            ctx.update(b"handshake messages");
            ctx
        };

        let client = verify_data(
            &Ring,
            transcript(HashAlgorithm::MD5),
            transcript(HashAlgorithm::SHA1),
            &master(),
            Side::Client,
        )
        .unwrap();
        assert_eq!(
            hex::encode(client),
            "c2f7d22bbd1e05bca832ac6b8be6320bdbd292db770a9de01b1e6e8ee09568ee51daf7f6"
        );

        let server = verify_data(
            &Ring,
            transcript(HashAlgorithm::MD5),
            transcript(HashAlgorithm::SHA1),
            &master(),
            Side::Server,
        )
        .unwrap();
        assert_eq!(
            hex::encode(server),
            "4bea73d25b7c26fc5fc6be4cac7ca49f3e4ead831f7199c453488b015067d7741e404ce8"
        );
    }
}
