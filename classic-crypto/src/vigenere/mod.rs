//! Vigenère cipher: each letter is shifted by the next key character.
//!
//! Only ASCII letters are transformed (and upper-cased). Every other character
//! is copied unchanged and does not consume a key character.

use crate::preset::alphabet::{letter_value, value_letter};
use crate::ring::Ring;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vigenere {
    /// Shift for each key position, `key_char - 'A'` after upper-casing.
    shifts: Vec<i64>,
}

impl Vigenere {
    /// Non-letter key characters still contribute their raw code point
    /// offset from `'A'`; an empty key shifts nothing.
    pub fn new(key: &str) -> Self {
        let shifts = key
            .chars()
            .map(|ch| ch.to_ascii_uppercase() as i64 - 'A' as i64)
            .collect();

        Self { shifts }
    }

    pub fn encrypt(&self, message: &str) -> String {
        self.apply(message, |ring, p, k| ring.add(p, k))
    }

    pub fn decrypt(&self, ciphertext: &str) -> String {
        self.apply(ciphertext, |ring, c, k| ring.sub(c, k))
    }

    fn apply(&self, text: &str, combine: impl Fn(&Ring, i64, i64) -> i64) -> String {
        let ring = Ring::alphabet();
        let mut cursor = 0usize;

        text.chars()
            .map(|ch| match letter_value(ch) {
                Some(value) => {
                    let shift = match self.shifts.len() {
                        0 => 0,
                        len => self.shifts[cursor % len],
                    };
                    cursor += 1;
                    value_letter(combine(&ring, value, shift))
                }
                None => ch,
            })
            .collect()
    }
}

pub fn encrypt(message: &str, key: &str) -> String {
    Vigenere::new(key).encrypt(message)
}

pub fn decrypt(ciphertext: &str, key: &str) -> String {
    Vigenere::new(key).decrypt(ciphertext)
}
