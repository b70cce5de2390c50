pub mod encryption;
pub mod keys;

pub use encryption::ENVELOPE_VERSION;
pub use keys::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Encryption failed")]
    EncryptionFailed,

    #[error("Wrong passphrase for this store")]
    WrongPassphrase,

    #[error("Decryption failed: wrong key, wrong entry or corrupted data")]
    DecryptionFailed,

    #[error("Sealed value too short: {0} bytes")]
    Truncated(usize),

    #[error("Unsupported envelope version {0}")]
    UnsupportedVersion(u8),

    #[error("Invalid salt length: {0} bytes")]
    InvalidSalt(usize),
}
