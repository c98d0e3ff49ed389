//! # Ring Crypto Module
//!
//! Modular arithmetic over Z_26 for the Hill cipher: the [`Ring`] struct, the
//! fixed-size [`KeyMatrix`], and free functions over the letter ring.

pub mod helper;
pub mod math;
pub mod matrix;

/// Number of letters in the Latin alphabet, the modulus of every cipher here.
pub const ALPHABET_SIZE: u64 = 26;

pub use helper::{gcd, is_coprime};
pub use math::Ring;
pub use matrix::{Digram, KeyMatrix};

use crate::errors::ClassicCryptoError;

/// Residue of `x` modulo 26 in `[0, 25]`, also for negative `x`.
pub fn normalize(x: i64) -> i64 {
    Ring::alphabet().normalize(x)
}

/// Determinant of a key matrix reduced modulo 26.
pub fn determinant(matrix: &KeyMatrix) -> i64 {
    matrix.determinant()
}

/// Smallest `x` in `[1, 25]` with `a * x = 1 (mod 26)`.
pub fn modular_inverse(a: i64) -> Result<i64, ClassicCryptoError> {
    Ring::alphabet().inv(a)
}

/// Inverse of a 2×2 key matrix modulo 26.
pub fn invert(matrix: &KeyMatrix) -> Result<KeyMatrix, ClassicCryptoError> {
    matrix.inverse()
}
