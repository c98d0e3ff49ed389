//! Implementation of ring ops using modular arithmetic.

use crate::errors::ClassicCryptoError;

use super::{ALPHABET_SIZE, is_coprime};

use num_integer::Integer;
use serde::{Deserialize, Serialize};

/// Represents a finite ring Z_k using modular arithmetic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: u64,
}

impl Default for Ring {
    fn default() -> Self {
        Self::alphabet()
    }
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, ClassicCryptoError> {
        if modulus <= 1 {
            return Err(ClassicCryptoError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// The ring Z_26 of letter values `A = 0 .. Z = 25`.
    pub const fn alphabet() -> Self {
        Ring {
            modulus: ALPHABET_SIZE,
        }
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(13).unwrap();
    /// assert_eq!(ring.modulus(), 13);
    /// assert_eq!(Ring::alphabet().modulus(), 26);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// This is the floored modulo, so negative values wrap around instead of
    /// keeping the sign of the dividend.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.normalize(27), 1);
    /// assert_eq!(ring.normalize(-3), 23);
    /// assert_eq!(ring.normalize(0), 0);
    /// assert_eq!(ring.normalize(26), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        value.mod_floor(&(self.modulus as i64))
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.add(7, 25), 6);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm + b_norm)
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.sub(7, 5), 2);
    /// assert_eq!(ring.sub(3, 5), 24);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm - b_norm)
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.mul(9, 3), 1); // 27 mod 26 = 1
    /// assert_eq!(ring.mul(-2, 6), 14); // -12 mod 26 = 14
    /// assert_eq!(ring.mul(2, 13), 0);
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        let result = (a_norm as i128 * b_norm as i128) % (self.modulus as i128);

        self.normalize(result as i64)
    }

    /// Computes the additive inverse `-a mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.neg(3), 23);
    /// assert_eq!(ring.neg(0), 0);
    /// assert!(ring.add(3, ring.neg(3)) == 0);
    /// ```
    pub fn neg(&self, a: i64) -> i64 {
        self.sub(0, a)
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The modulus is small, so the inverse is found by trying every candidate
    /// in `[1, modulus - 1]` and returning the smallest one.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::NoInverse` if `gcd(a, modulus) != 1`, which includes `a == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.inv(9).unwrap(), 3); // 9 * 3 = 27 = 1 mod 26
    /// assert_eq!(ring.inv(25).unwrap(), 25);
    /// assert!(ring.inv(2).is_err()); // gcd(2, 26) = 2
    /// assert!(ring.inv(13).is_err());
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, ClassicCryptoError> {
        let a_norm = self.normalize(a);
        let m = self.modulus as i64;

        if !is_coprime(a_norm, m) {
            return Err(ClassicCryptoError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {}",
                a_norm, self.modulus
            )));
        }

        (1..m)
            .find(|&x| self.mul(a_norm, x) == 1)
            .ok_or_else(|| {
                ClassicCryptoError::NoInverse(format!(
                    "No candidate in [1, {}) inverts {} mod {}",
                    m, a_norm, self.modulus
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_creation() {
        assert!(Ring::try_with(26).is_ok());
        assert!(Ring::try_with(2).is_ok());
        assert!(Ring::try_with(1).is_err());
        assert!(Ring::try_with(0).is_err());
        assert_eq!(Ring::default(), Ring::alphabet());
    }

    #[test]
    fn test_element_normalization() {
        let ring = Ring::alphabet();
        assert_eq!(ring.normalize(5), 5);
        assert_eq!(ring.normalize(31), 5);
        assert_eq!(ring.normalize(-21), 5);
        assert_eq!(ring.normalize(-26), 0);
        assert_eq!(ring.normalize(-52), 0);
    }

    #[test]
    fn test_addition() {
        let ring = Ring::alphabet();
        assert_eq!(ring.add(20, 8), 2);
        assert_eq!(ring.add(-3, 8), 5);
    }

    #[test]
    fn test_subtraction() {
        let ring = Ring::alphabet();
        assert_eq!(ring.sub(5, 8), 23);
        assert_eq!(ring.sub(8, 5), 3);
    }

    #[test]
    fn test_multiplication() -> Result<(), ClassicCryptoError> {
        let ring = Ring::try_with(11)?;
        assert_eq!(ring.mul(5, 8), 7);
        assert_eq!(ring.mul(-2, 8), 6);
        Ok(())
    }

    #[test]
    fn test_negation() {
        let ring = Ring::alphabet();
        assert_eq!(ring.neg(5), 21);
        assert_eq!(ring.neg(0), 0);
        assert_eq!(ring.neg(-1), 1);
    }

    #[test]
    fn test_inversion() -> Result<(), ClassicCryptoError> {
        let ring = Ring::alphabet();
        assert_eq!(ring.inv(1)?, 1);
        assert_eq!(ring.inv(3)?, 9);
        assert_eq!(ring.inv(5)?, 21);
        assert_eq!(ring.inv(7)?, 15);
        assert_eq!(ring.inv(-1)?, 25);
        Ok(())
    }

    #[test]
    fn test_inversion_fails_for_non_units() {
        let ring = Ring::alphabet();
        for a in [0, 2, 4, 13, 26, 39] {
            assert!(
                matches!(ring.inv(a), Err(ClassicCryptoError::NoInverse(_))),
                "{} should not be invertible mod 26",
                a
            );
        }
    }

    #[test]
    fn test_every_inverse_is_smallest_positive() {
        let ring = Ring::alphabet();
        for a in 0..26 {
            if let Ok(x) = ring.inv(a) {
                assert!((1..26).contains(&x));
                assert_eq!(ring.mul(a, x), 1);
                assert!((1..x).all(|y| ring.mul(a, y) != 1));
            }
        }
    }
}
