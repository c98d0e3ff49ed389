//! Key-length precondition for the Vigenère and Playfair ciphers.
//!
//! The cipher functions themselves accept any key; callers check the length
//! before handing a user-supplied key to them.

use crate::errors::ClassicCryptoError;

pub const MIN_KEY_LENGTH: usize = 12;

/// `true` when the key has at least [`MIN_KEY_LENGTH`] characters.
///
/// ```
/// # use classic_crypto::validate_key_length;
/// assert!(validate_key_length("SECURITYMODE"));
/// assert!(!validate_key_length("SHORT"));
/// ```
pub fn validate_key_length(key: &str) -> bool {
    key.chars().count() >= MIN_KEY_LENGTH
}

pub fn ensure_key_length(key: &str) -> Result<(), ClassicCryptoError> {
    if validate_key_length(key) {
        return Ok(());
    }

    Err(ClassicCryptoError::InvalidKeyLength {
        required: MIN_KEY_LENGTH,
        actual: key.chars().count(),
    })
}
