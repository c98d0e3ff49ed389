use crate::errors::ClassicCryptoError;
use crate::preset::alphabet::letter_value;
use crate::ring::Ring;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A pair of letter values processed together by the Hill cipher.
pub type Digram = [i64; 2];

const GENERATE_ATTEMPTS: usize = 100_000;

/// A 2×2 key matrix over Z_26.
///
/// Entries are normalized into `[0, 25]` on construction, so every
/// `KeyMatrix` value maps each entry to a letter.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "[[i64; 2]; 2]", into = "[[i64; 2]; 2]")]
pub struct KeyMatrix {
    rows: [[i64; 2]; 2],
}

impl From<[[i64; 2]; 2]> for KeyMatrix {
    fn from(rows: [[i64; 2]; 2]) -> Self {
        Self::new(rows)
    }
}

impl From<KeyMatrix> for [[i64; 2]; 2] {
    fn from(matrix: KeyMatrix) -> Self {
        matrix.rows
    }
}

impl KeyMatrix {
    pub fn new(rows: [[i64; 2]; 2]) -> Self {
        let ring = Ring::alphabet();
        Self {
            rows: rows.map(|row| row.map(|v| ring.normalize(v))),
        }
    }

    pub fn identity() -> Self {
        Self::new([[1, 0], [0, 1]])
    }

    /// Builds the matrix from four letters read row by row, `A = 0 .. Z = 25`.
    ///
    /// ```
    /// # use classic_crypto::ring::KeyMatrix;
    /// let key = KeyMatrix::from_letters(['D', 'D', 'c', 'f']).unwrap();
    /// assert_eq!(key.rows(), [[3, 3], [2, 5]]);
    /// ```
    pub fn from_letters(letters: [char; 4]) -> Result<Self, ClassicCryptoError> {
        let mut values = [0i64; 4];
        for (slot, ch) in values.iter_mut().zip(letters) {
            *slot = letter_value(ch).ok_or(ClassicCryptoError::InvalidKeyLetter(ch))?;
        }

        Ok(Self::new([[values[0], values[1]], [values[2], values[3]]]))
    }

    pub fn rows(&self) -> [[i64; 2]; 2] {
        self.rows
    }

    /// `M00*M11 - M01*M10` reduced into `[0, 25]`.
    pub fn determinant(&self) -> i64 {
        let [[a, b], [c, d]] = self.rows;
        let ring = Ring::alphabet();

        ring.sub(ring.mul(a, d), ring.mul(b, c))
    }

    pub fn is_invertible(&self) -> bool {
        Ring::alphabet().inv(self.determinant()).is_ok()
    }

    /// Inverse modulo 26: the adjugate scaled by the inverse of the determinant.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::NonInvertibleMatrix` when the determinant shares a factor with 26.
    pub fn inverse(&self) -> Result<KeyMatrix, ClassicCryptoError> {
        let ring = Ring::alphabet();
        let det = self.determinant();

        let det_inv = ring.inv(det).map_err(|_| {
            log::debug!("key matrix {:?} has determinant {} with no inverse", self.rows, det);
            ClassicCryptoError::NonInvertibleMatrix(format!(
                "determinant {} has no inverse mod {}",
                det,
                ring.modulus()
            ))
        })?;

        let [[a, b], [c, d]] = self.rows;
        Ok(Self::new([
            [ring.mul(d, det_inv), ring.mul(ring.neg(b), det_inv)],
            [ring.mul(ring.neg(c), det_inv), ring.mul(a, det_inv)],
        ]))
    }

    /// M·v where v is a column digram.
    pub fn mul_vector(&self, v: Digram) -> Digram {
        let ring = Ring::alphabet();
        self.rows
            .map(|row| ring.add(ring.mul(row[0], v[0]), ring.mul(row[1], v[1])))
    }

    /// Computes the matrix product `C = AB` modulo 26.
    #[allow(clippy::needless_range_loop)]
    pub fn mul(&self, other: &KeyMatrix) -> KeyMatrix {
        let ring = Ring::alphabet();
        let mut c = [[0i64; 2]; 2];

        for (i, row) in c.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                let mut sum = 0i64;
                for k in 0..2 {
                    sum = ring.add(sum, ring.mul(self.rows[i][k], other.rows[k][j]));
                }
                *cell = sum;
            }
        }

        Self::new(c)
    }

    /// Randomly generate a key matrix that can be used for decryption.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, ClassicCryptoError> {
        for attempt in 1..=GENERATE_ATTEMPTS {
            let candidate = Self::new([
                [rng.random_range(0..26), rng.random_range(0..26)],
                [rng.random_range(0..26), rng.random_range(0..26)],
            ]);

            if candidate.is_invertible() {
                log::trace!("generated invertible key matrix after {} attempts", attempt);
                return Ok(candidate);
            }
        }

        Err(ClassicCryptoError::InternalError(
            "Could not generate an invertible key matrix".into(),
        ))
    }
}
