use std::boxed::Box;
use std::vec::Vec;

use ring::aead;

use crate::crypto::cipher::{
    make_nonce, make_tls12_aad, make_tls13_aad, tls13_check_length_and_unpad, AeadKey, Iv,
    MessageDecrypter, MessageEncrypter, OpaqueMessage, PlainMessage, RecordCipherAlgorithm,
    MAX_FRAGMENT_LEN, NONCE_LEN,
};
use crate::enums::{ContentType, ProtocolVersion};
use crate::error::{Error, InvalidMessage};
use crate::suites::EncryptionAlgorithm;

/// An AEAD record cipher backed by *ring*.
pub(crate) struct RingRecordCipher {
    algorithm: EncryptionAlgorithm,
    aead: &'static aead::Algorithm,
}

pub(crate) static AES_128_GCM: RingRecordCipher = RingRecordCipher {
    algorithm: EncryptionAlgorithm::Aes128Gcm,
    aead: &aead::AES_128_GCM,
};

pub(crate) static AES_256_GCM: RingRecordCipher = RingRecordCipher {
    algorithm: EncryptionAlgorithm::Aes256Gcm,
    aead: &aead::AES_256_GCM,
};

pub(crate) static CHACHA20_POLY1305: RingRecordCipher = RingRecordCipher {
    algorithm: EncryptionAlgorithm::Chacha20Poly1305,
    aead: &aead::CHACHA20_POLY1305,
};

impl RingRecordCipher {
    fn key(&self, key: &AeadKey) -> Result<aead::LessSafeKey, Error> {
        aead::UnboundKey::new(self.aead, key.as_ref())
            .map(aead::LessSafeKey::new)
            .map_err(|_| Error::General("record key has the wrong length".into()))
    }

    /// The full nonce base for `version`.
    ///
    /// TLS 1.2 GCM takes a 4-byte salt from the key block; the remaining 8
    /// bytes are the explicit nonce, which we set to the sequence number.
    fn iv(&self, version: ProtocolVersion, iv: &[u8]) -> Result<Iv, Error> {
        if version.is_tls13_or_later() || self.algorithm == EncryptionAlgorithm::Chacha20Poly1305 {
            return Iv::copy(iv);
        }

        match iv.len() {
            GCM_SALT_LEN => {
                let mut full = [0u8; NONCE_LEN];
                full[..GCM_SALT_LEN].copy_from_slice(iv);
                Ok(Iv::from(full))
            }
            _ => Err(Error::General("GCM salt has the wrong length".into())),
        }
    }
}

impl RecordCipherAlgorithm for RingRecordCipher {
    fn encrypter(
        &self,
        version: ProtocolVersion,
        key: AeadKey,
        iv: &[u8],
    ) -> Result<Box<dyn MessageEncrypter>, Error> {
        let enc_key = self.key(&key)?;
        let iv = self.iv(version, iv)?;

        let encrypter: Box<dyn MessageEncrypter> = match (version.is_tls13_or_later(), self.algorithm) {
            (true, _) => Box::new(Tls13MessageEncrypter { enc_key, iv }),
            (false, EncryptionAlgorithm::Chacha20Poly1305) => {
                Box::new(ChaCha20Poly1305MessageEncrypter {
                    enc_key,
                    enc_offset: iv,
                })
            }
            (false, _) => Box::new(GcmMessageEncrypter { enc_key, iv }),
        };
        Ok(encrypter)
    }

    fn decrypter(
        &self,
        version: ProtocolVersion,
        key: AeadKey,
        iv: &[u8],
    ) -> Result<Box<dyn MessageDecrypter>, Error> {
        let dec_key = self.key(&key)?;
        let iv = self.iv(version, iv)?;

        let decrypter: Box<dyn MessageDecrypter> = match (version.is_tls13_or_later(), self.algorithm) {
            (true, _) => Box::new(Tls13MessageDecrypter { dec_key, iv }),
            (false, EncryptionAlgorithm::Chacha20Poly1305) => {
                Box::new(ChaCha20Poly1305MessageDecrypter {
                    dec_key,
                    dec_offset: iv,
                })
            }
            (false, _) => Box::new(GcmMessageDecrypter { dec_key, iv }),
        };
        Ok(decrypter)
    }

    fn algorithm(&self) -> EncryptionAlgorithm {
        self.algorithm
    }
}

struct Tls13MessageEncrypter {
    enc_key: aead::LessSafeKey,
    iv: Iv,
}

struct Tls13MessageDecrypter {
    dec_key: aead::LessSafeKey,
    iv: Iv,
}

impl MessageEncrypter for Tls13MessageEncrypter {
    fn encrypt(&self, msg: PlainMessage, seq: u64) -> Result<OpaqueMessage, Error> {
        let total_len = self.encrypted_payload_len(msg.payload.len());
        let mut payload = Vec::with_capacity(total_len);
        payload.extend_from_slice(&msg.payload);
        payload.push(u8::from(msg.typ));

        let nonce = aead::Nonce::assume_unique_for_key(make_nonce(&self.iv, seq));
        let aad = aead::Aad::from(make_tls13_aad(total_len));

        self.enc_key
            .seal_in_place_append_tag(nonce, aad, &mut payload)
            .map_err(|_| Error::General("encrypt failed".into()))?;

        Ok(OpaqueMessage {
            typ: ContentType::ApplicationData,
            // nb. `legacy_record_version`
            version: ProtocolVersion::TLSv1_2,
            payload,
        })
    }

    fn encrypted_payload_len(&self, payload_len: usize) -> usize {
        payload_len + 1 + self.enc_key.algorithm().tag_len()
    }
}

impl MessageDecrypter for Tls13MessageDecrypter {
    fn decrypt(&self, mut msg: OpaqueMessage, seq: u64) -> Result<PlainMessage, Error> {
        let payload = &mut msg.payload;
        if payload.len() < self.dec_key.algorithm().tag_len() {
            return Err(Error::DecryptError);
        }

        let nonce = aead::Nonce::assume_unique_for_key(make_nonce(&self.iv, seq));
        let aad = aead::Aad::from(make_tls13_aad(payload.len()));
        let plain_len = self
            .dec_key
            .open_in_place(nonce, aad, payload)
            .map_err(|_| Error::DecryptError)?
            .len();

        payload.truncate(plain_len);
        tls13_check_length_and_unpad(msg)
    }
}

/// A `MessageEncrypter` for AES-GCM AEAD ciphersuites.  TLS1.2 only.
struct GcmMessageEncrypter {
    enc_key: aead::LessSafeKey,
    iv: Iv,
}

/// A `MessageDecrypter` for AES-GCM AEAD ciphersuites.  TLS1.2 only.
struct GcmMessageDecrypter {
    dec_key: aead::LessSafeKey,
    iv: Iv,
}

const GCM_SALT_LEN: usize = 4;
const GCM_EXPLICIT_NONCE_LEN: usize = 8;
const GCM_OVERHEAD: usize = GCM_EXPLICIT_NONCE_LEN + 16;

impl MessageDecrypter for GcmMessageDecrypter {
    fn decrypt(&self, mut msg: OpaqueMessage, seq: u64) -> Result<PlainMessage, Error> {
        let payload = &msg.payload;
        if payload.len() < GCM_OVERHEAD {
            return Err(Error::DecryptError);
        }

        let nonce = {
            let mut nonce = [0u8; NONCE_LEN];
            nonce[..GCM_SALT_LEN].copy_from_slice(&self.iv.as_ref()[..GCM_SALT_LEN]);
            nonce[GCM_SALT_LEN..].copy_from_slice(&payload[..GCM_EXPLICIT_NONCE_LEN]);
            aead::Nonce::assume_unique_for_key(nonce)
        };

        let aad = aead::Aad::from(make_tls12_aad(
            seq,
            msg.typ,
            msg.version,
            payload.len() - GCM_OVERHEAD,
        ));

        let payload = &mut msg.payload;
        let plain_len = self
            .dec_key
            .open_within(nonce, aad, payload, GCM_EXPLICIT_NONCE_LEN..)
            .map_err(|_| Error::DecryptError)?
            .len();

        if plain_len > MAX_FRAGMENT_LEN {
            return Err(InvalidMessage::MessageTooLarge.into());
        }

        payload.truncate(plain_len);
        Ok(PlainMessage {
            typ: msg.typ,
            version: msg.version,
            payload: msg.payload,
        })
    }
}

impl MessageEncrypter for GcmMessageEncrypter {
    fn encrypt(&self, msg: PlainMessage, seq: u64) -> Result<OpaqueMessage, Error> {
        let total_len = self.encrypted_payload_len(msg.payload.len());
        let mut payload = Vec::with_capacity(total_len);

        let nonce = aead::Nonce::assume_unique_for_key(make_nonce(&self.iv, seq));
        let aad = aead::Aad::from(make_tls12_aad(seq, msg.typ, msg.version, msg.payload.len()));
        payload.extend_from_slice(&nonce.as_ref()[GCM_SALT_LEN..]);
        payload.extend_from_slice(&msg.payload);

        self.enc_key
            .seal_in_place_separate_tag(nonce, aad, &mut payload[GCM_EXPLICIT_NONCE_LEN..])
            .map(|tag| payload.extend_from_slice(tag.as_ref()))
            .map_err(|_| Error::General("encrypt failed".into()))?;

        Ok(OpaqueMessage {
            typ: msg.typ,
            version: msg.version,
            payload,
        })
    }

    fn encrypted_payload_len(&self, payload_len: usize) -> usize {
        payload_len + GCM_EXPLICIT_NONCE_LEN + self.enc_key.algorithm().tag_len()
    }
}

/// The RFC7905/RFC7539 ChaCha20Poly1305 construction.
/// This implementation does the AAD construction required in TLS1.2.
/// TLS1.3 uses `Tls13MessageEncrypter`.
struct ChaCha20Poly1305MessageEncrypter {
    enc_key: aead::LessSafeKey,
    enc_offset: Iv,
}

/// The RFC7905/RFC7539 ChaCha20Poly1305 construction.
/// This implementation does the AAD construction required in TLS1.2.
/// TLS1.3 uses `Tls13MessageDecrypter`.
struct ChaCha20Poly1305MessageDecrypter {
    dec_key: aead::LessSafeKey,
    dec_offset: Iv,
}

const CHACHAPOLY1305_OVERHEAD: usize = 16;

impl MessageDecrypter for ChaCha20Poly1305MessageDecrypter {
    fn decrypt(&self, mut msg: OpaqueMessage, seq: u64) -> Result<PlainMessage, Error> {
        let payload = &msg.payload;

        if payload.len() < CHACHAPOLY1305_OVERHEAD {
            return Err(Error::DecryptError);
        }

        let nonce = aead::Nonce::assume_unique_for_key(make_nonce(&self.dec_offset, seq));
        let aad = aead::Aad::from(make_tls12_aad(
            seq,
            msg.typ,
            msg.version,
            payload.len() - CHACHAPOLY1305_OVERHEAD,
        ));

        let payload = &mut msg.payload;
        let plain_len = self
            .dec_key
            .open_in_place(nonce, aad, payload)
            .map_err(|_| Error::DecryptError)?
            .len();

        if plain_len > MAX_FRAGMENT_LEN {
            return Err(InvalidMessage::MessageTooLarge.into());
        }

        payload.truncate(plain_len);
        Ok(PlainMessage {
            typ: msg.typ,
            version: msg.version,
            payload: msg.payload,
        })
    }
}

impl MessageEncrypter for ChaCha20Poly1305MessageEncrypter {
    fn encrypt(&self, msg: PlainMessage, seq: u64) -> Result<OpaqueMessage, Error> {
        let total_len = self.encrypted_payload_len(msg.payload.len());
        let mut payload = Vec::with_capacity(total_len);

        let nonce = aead::Nonce::assume_unique_for_key(make_nonce(&self.enc_offset, seq));
        let aad = aead::Aad::from(make_tls12_aad(seq, msg.typ, msg.version, msg.payload.len()));
        payload.extend_from_slice(&msg.payload);

        self.enc_key
            .seal_in_place_append_tag(nonce, aad, &mut payload)
            .map_err(|_| Error::General("encrypt failed".into()))?;

        Ok(OpaqueMessage {
            typ: msg.typ,
            version: msg.version,
            payload,
        })
    }

    fn encrypted_payload_len(&self, payload_len: usize) -> usize {
        payload_len + self.enc_key.algorithm().tag_len()
    }
}
