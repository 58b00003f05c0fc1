use super::hmac;

/// `P_hash(secret, label || seed)` from RFC 5246 section 5, filling `out`.
///
/// `hmac_key` carries both the secret and the hash.
pub fn prf(out: &mut [u8], hmac_key: &dyn hmac::Key, label: &[u8], seed: &[u8]) {
    let mut previous_a: Option<hmac::Tag> = None;

    let chunk_size = hmac_key.tag_len();
    for chunk in out.chunks_mut(chunk_size) {
        let a_i = match previous_a {
            // A(0) = HMAC_hash(secret, label + seed)
            None => hmac_key.sign(&[label, seed]),
            // A(i) = HMAC_hash(secret, A(i - 1))
            Some(previous_a) => hmac_key.sign(&[previous_a.as_ref()]),
        };

        // P_hash[i] = HMAC_hash(secret, A(i) + label + seed)
        let p_term = hmac_key.sign(&[a_i.as_ref(), label, seed]);
        chunk.copy_from_slice(&p_term.as_ref()[..chunk.len()]);

        previous_a = Some(a_i);
    }
}

/// The TLS 1.0 and 1.1 PRF: `P_MD5(S1, label || seed) XOR P_SHA1(S2, label || seed)`.
///
/// `S1` and `S2` are the first and last halves of `secret`, sharing the
/// middle byte when its length is odd (RFC 2246 section 5).
pub fn legacy_prf(
    out: &mut [u8],
    md5: &dyn hmac::Hmac,
    sha1: &dyn hmac::Hmac,
    secret: &[u8],
    label: &[u8],
    seed: &[u8],
) {
    let half = secret.len().div_ceil(2);
    let s1 = &secret[..half];
    let s2 = &secret[secret.len() - half..];

    prf(out, md5.with_key(s1).as_ref(), label, seed);

    let mut sha1_out = vec![0u8; out.len()];
    prf(&mut sha1_out, sha1.with_key(s2).as_ref(), label, seed);
    for (o, s) in out.iter_mut().zip(sha1_out.iter()) {
        *o ^= *s;
    }
    zeroize::Zeroize::zeroize(&mut sha1_out);
}
