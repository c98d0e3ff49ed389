#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassicCryptoError {
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, k) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// Error when creating a ring with an invalid modulus (k <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// Hill key matrix whose determinant shares a factor with 26.
    #[error("NonInvertibleMatrix: {0}")]
    NonInvertibleMatrix(String),
    #[error("InternalError: {0}")]
    InternalError(String),

    #[error("Key must be at least {required} characters long, got {actual}")]
    InvalidKeyLength { required: usize, actual: usize },
    #[error("Key matrix entries must be letters A-Z, got {0:?}")]
    InvalidKeyLetter(char),
    #[error("MissingKey: {0}")]
    MissingKey(String),
}
