//! # Classic Crypto
//!
//! Vigenère, Playfair and 2×2 Hill ciphers over the 26-letter Latin alphabet,
//! with the modular arithmetic the Hill cipher needs.
//!
//! ```
//! use classic_crypto::{hill_decrypt, hill_encrypt, playfair_encrypt, vigenere_encrypt};
//! use classic_crypto::ring::KeyMatrix;
//!
//! assert_eq!(vigenere_encrypt("HELLO", "SECURITYMODE"), "ZINFF");
//! assert_eq!(playfair_encrypt("EX", "PLAYFAIREXAMPLE"), "XM");
//!
//! let key = KeyMatrix::new([[3, 3], [2, 5]]);
//! assert_eq!(hill_encrypt("HELP", &key), "HIAT");
//! assert_eq!(hill_decrypt("HIAT", &key).unwrap(), "HELP");
//! ```

pub mod cipher;
pub mod errors;
pub mod hill;
pub mod key;
pub mod playfair;
pub mod preset;
pub mod ring;
pub mod vigenere;

pub use cipher::Cipher;
pub use errors::ClassicCryptoError;
pub use hill::{Hill, decrypt as hill_decrypt, encrypt as hill_encrypt};
pub use key::{MIN_KEY_LENGTH, ensure_key_length, validate_key_length};
pub use playfair::{KeySquare, Playfair, decrypt as playfair_decrypt, encrypt as playfair_encrypt};
pub use ring::{KeyMatrix, Ring};
pub use vigenere::{Vigenere, decrypt as vigenere_decrypt, encrypt as vigenere_encrypt};
