//! Sealed envelope format for protected-tier values.
//!
//! Layout: `[version: 1][nonce: 12][AES-256-GCM ciphertext + tag]`.
//! The storage key name is bound as associated data, so an envelope copied
//! under a different key fails authentication instead of decoding as the
//! wrong entity.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::{Aead, KeyInit, OsRng, Payload};
use aes_gcm::{Aes256Gcm, Key, Nonce};

use super::keys::KEY_LENGTH;
use super::CryptoError;

pub const ENVELOPE_VERSION: u8 = 1;

const NONCE_LENGTH: usize = 12;
const TAG_LENGTH: usize = 16;
const HEADER_LENGTH: usize = 1 + NONCE_LENGTH;

fn cipher(key_bytes: &[u8; KEY_LENGTH]) -> Aes256Gcm {
    Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key_bytes))
}

/// Encrypt `plaintext` under a fresh random nonce, bound to `label`.
pub(crate) fn seal(
    key_bytes: &[u8; KEY_LENGTH],
    label: &str,
    plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let mut nonce = [0u8; NONCE_LENGTH];
    OsRng.fill_bytes(&mut nonce);

    let ciphertext = cipher(key_bytes)
        .encrypt(
            Nonce::from_slice(&nonce),
            Payload {
                msg: plaintext,
                aad: label.as_bytes(),
            },
        )
        .map_err(|_| CryptoError::EncryptionFailed)?;

    let mut envelope = Vec::with_capacity(HEADER_LENGTH + ciphertext.len());
    envelope.push(ENVELOPE_VERSION);
    envelope.extend_from_slice(&nonce);
    envelope.extend_from_slice(&ciphertext);
    Ok(envelope)
}

/// Authenticate and decrypt an envelope produced by [`seal`] for `label`.
pub(crate) fn open(
    key_bytes: &[u8; KEY_LENGTH],
    label: &str,
    envelope: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    if envelope.len() < HEADER_LENGTH + TAG_LENGTH {
        return Err(CryptoError::Truncated(envelope.len()));
    }
    let (header, ciphertext) = envelope.split_at(HEADER_LENGTH);
    if header[0] != ENVELOPE_VERSION {
        return Err(CryptoError::UnsupportedVersion(header[0]));
    }

    cipher(key_bytes)
        .decrypt(
            Nonce::from_slice(&header[1..]),
            Payload {
                msg: ciphertext,
                aad: label.as_bytes(),
            },
        )
        .map_err(|_| CryptoError::DecryptionFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; KEY_LENGTH] = [7u8; KEY_LENGTH];

    #[test]
    fn sealed_history_opens_under_same_label() {
        let plaintext = br#"[{"id":1,"symptoms":["Fever"]}]"#;
        let envelope = seal(&KEY, "symptomHistory", plaintext).unwrap();
        assert_eq!(envelope[0], ENVELOPE_VERSION);
        assert_eq!(open(&KEY, "symptomHistory", &envelope).unwrap(), plaintext);
    }

    #[test]
    fn envelope_moved_to_other_label_is_rejected() {
        let envelope = seal(&KEY, "userProfile", b"{}").unwrap();
        assert!(matches!(
            open(&KEY, "symptomHistory", &envelope),
            Err(CryptoError::DecryptionFailed)
        ));
    }

    #[test]
    fn wrong_key_is_rejected() {
        let envelope = seal(&KEY, "userProfile", b"secret").unwrap();
        assert!(matches!(
            open(&[8u8; KEY_LENGTH], "userProfile", &envelope),
            Err(CryptoError::DecryptionFailed)
        ));
    }

    #[test]
    fn flipped_ciphertext_bit_is_detected() {
        let mut envelope = seal(&KEY, "symptomHistory", b"severity 7").unwrap();
        envelope[HEADER_LENGTH] ^= 0x01;
        assert!(open(&KEY, "symptomHistory", &envelope).is_err());
    }

    #[test]
    fn short_input_is_truncated() {
        assert!(matches!(
            open(&KEY, "userProfile", &[ENVELOPE_VERSION; 10]),
            Err(CryptoError::Truncated(10))
        ));
    }

    #[test]
    fn unknown_version_is_reported() {
        let mut envelope = seal(&KEY, "userProfile", b"{}").unwrap();
        envelope[0] = 9;
        assert!(matches!(
            open(&KEY, "userProfile", &envelope),
            Err(CryptoError::UnsupportedVersion(9))
        ));
    }

    #[test]
    fn nonces_differ_between_seals() {
        let a = seal(&KEY, "userProfile", b"same").unwrap();
        let b = seal(&KEY, "userProfile", b"same").unwrap();
        assert_ne!(a[1..HEADER_LENGTH], b[1..HEADER_LENGTH]);
    }
}
