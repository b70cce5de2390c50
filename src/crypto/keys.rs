use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroize;

use super::encryption;
use super::CryptoError;

pub const PBKDF2_ITERATIONS: u32 = 600_000;
pub const KEY_LENGTH: usize = 32; // AES-256
pub const SALT_LENGTH: usize = 32;

const VERIFICATION_LABEL: &str = "passphrase-check";
const VERIFICATION_PLAINTEXT: &[u8] = b"SYMPTOM_JOURNAL_STORE_VERIFICATION_V1";

/// Protected-tier encryption key, zeroed on drop
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct StoreKey {
    pub(super) key_bytes: [u8; KEY_LENGTH],
}

impl StoreKey {
    /// Derive from passphrase + salt using PBKDF2-SHA256
    pub fn derive(passphrase: &str, salt: &[u8; SALT_LENGTH]) -> Self {
        let mut key_bytes = [0u8; KEY_LENGTH];
        pbkdf2_hmac::<Sha256>(
            passphrase.as_bytes(),
            salt,
            PBKDF2_ITERATIONS,
            &mut key_bytes,
        );
        Self { key_bytes }
    }

    /// Wrap raw key material handed over by a platform keystore.
    pub fn from_bytes(key_bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key_bytes }
    }

    /// Seal `plaintext` into an envelope bound to the storage key `label`.
    pub fn seal(&self, label: &str, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        encryption::seal(&self.key_bytes, label, plaintext)
    }

    /// Token written once per store and checked on every unlock.
    pub fn verification_token(&self) -> Result<Vec<u8>, CryptoError> {
        self.seal(VERIFICATION_LABEL, VERIFICATION_PLAINTEXT)
    }

    /// Check this key against a store's verification token.
    pub fn verify(&self, token: &[u8]) -> Result<(), CryptoError> {
        match self.open(VERIFICATION_LABEL, token) {
            Ok(plaintext) if plaintext == VERIFICATION_PLAINTEXT => Ok(()),
            Ok(_) | Err(CryptoError::DecryptionFailed) => Err(CryptoError::WrongPassphrase),
            Err(e) => Err(e),
        }
    }

    /// Open an envelope previously sealed for `label`.
    pub fn open(&self, label: &str, envelope: &[u8]) -> Result<Vec<u8>, CryptoError> {
        encryption::open(&self.key_bytes, label, envelope)
    }
}

impl std::fmt::Debug for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StoreKey(..)")
    }
}

/// Generate a cryptographically random salt
pub fn generate_salt() -> [u8; SALT_LENGTH] {
    use rand::RngCore;
    let mut salt = [0u8; SALT_LENGTH];
    rand::thread_rng().fill_bytes(&mut salt);
    salt
}

/// Parse a salt previously written by [`generate_salt`].
pub fn salt_from_slice(bytes: &[u8]) -> Result<[u8; SALT_LENGTH], CryptoError> {
    bytes
        .try_into()
        .map_err(|_| CryptoError::InvalidSalt(bytes.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_produces_deterministic_key() {
        let salt = [42u8; SALT_LENGTH];
        let key1 = StoreKey::derive("passphrase", &salt);
        let key2 = StoreKey::derive("passphrase", &salt);
        assert_eq!(key1.key_bytes, key2.key_bytes);
    }

    #[test]
    fn different_salts_produce_different_keys() {
        let key1 = StoreKey::derive("passphrase", &[1u8; SALT_LENGTH]);
        let key2 = StoreKey::derive("passphrase", &[2u8; SALT_LENGTH]);
        assert_ne!(key1.key_bytes, key2.key_bytes);
    }

    #[test]
    fn generate_salt_is_random() {
        assert_ne!(generate_salt(), generate_salt());
    }

    #[test]
    fn salt_from_slice_checks_length() {
        assert!(salt_from_slice(&[0u8; SALT_LENGTH]).is_ok());
        assert!(matches!(
            salt_from_slice(&[0u8; 7]),
            Err(CryptoError::InvalidSalt(7))
        ));
    }

    #[test]
    fn key_derived_from_passphrase_opens_its_own_envelopes() {
        let salt = [5u8; SALT_LENGTH];
        let envelope = StoreKey::derive("hunter2", &salt)
            .seal("userProfile", b"{}")
            .unwrap();
        let reopened = StoreKey::derive("hunter2", &salt);
        assert_eq!(reopened.open("userProfile", &envelope).unwrap(), b"{}");
        assert!(StoreKey::derive("hunter3", &salt)
            .open("userProfile", &envelope)
            .is_err());
    }

    #[test]
    fn verification_token_accepts_only_its_key() {
        let salt = [6u8; SALT_LENGTH];
        let token = StoreKey::derive("right", &salt).verification_token().unwrap();
        assert!(StoreKey::derive("right", &salt).verify(&token).is_ok());
        assert!(matches!(
            StoreKey::derive("wrnog", &salt).verify(&token),
            Err(CryptoError::WrongPassphrase)
        ));
    }

    #[test]
    fn data_envelope_is_not_a_verification_token() {
        let key = StoreKey::from_bytes([1u8; KEY_LENGTH]);
        let envelope = key.seal("userProfile", b"{}").unwrap();
        assert!(matches!(
            key.verify(&envelope),
            Err(CryptoError::WrongPassphrase)
        ));
    }

    #[test]
    fn debug_does_not_leak_key_material() {
        let key = StoreKey::from_bytes([0xAB; KEY_LENGTH]);
        let rendered = format!("{key:?}");
        assert_eq!(rendered, "StoreKey(..)");
    }
}
