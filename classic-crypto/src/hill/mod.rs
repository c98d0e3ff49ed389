//! Hill cipher with a 2×2 key matrix over Z_26.

use crate::errors::ClassicCryptoError;
use crate::preset::alphabet::{FILLER, letter_value, letters_only, value_letter};
use crate::ring::KeyMatrix;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hill {
    key: KeyMatrix,
}

impl Hill {
    pub fn new(key: KeyMatrix) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &KeyMatrix {
        &self.key
    }

    /// Letters are upper-cased, everything else is dropped, and an odd tail
    /// is padded with `X`. Encryption never fails, even for a key that
    /// cannot be inverted.
    pub fn encrypt(&self, message: &str) -> String {
        transform(message, &self.key)
    }

    /// Encrypts with the inverse key.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::NonInvertibleMatrix` if the key has no inverse mod 26.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, ClassicCryptoError> {
        let inverse = self.key.inverse()?;
        Ok(transform(ciphertext, &inverse))
    }
}

fn transform(text: &str, key: &KeyMatrix) -> String {
    let mut values: Vec<i64> = letters_only(text)
        .into_iter()
        .filter_map(letter_value)
        .collect();

    if values.len() % 2 != 0 {
        values.extend(letter_value(FILLER));
    }

    values
        .into_iter()
        .tuples()
        .flat_map(|(v0, v1)| key.mul_vector([v0, v1]))
        .map(value_letter)
        .collect()
}

pub fn encrypt(message: &str, key: &KeyMatrix) -> String {
    Hill::new(*key).encrypt(message)
}

pub fn decrypt(ciphertext: &str, key: &KeyMatrix) -> Result<String, ClassicCryptoError> {
    Hill::new(*key).decrypt(ciphertext)
}
