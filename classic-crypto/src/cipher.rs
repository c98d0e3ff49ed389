use crate::errors::ClassicCryptoError;
use crate::hill::Hill;
use crate::playfair::Playfair;
use crate::vigenere::Vigenere;

/// A keyed text cipher chosen at runtime.
///
/// Only Hill decryption can fail; the other ciphers always return `Ok`.
pub trait Cipher {
    fn name(&self) -> &'static str;
    fn encrypt(&self, message: &str) -> String;
    fn decrypt(&self, ciphertext: &str) -> Result<String, ClassicCryptoError>;
}

impl Cipher for Vigenere {
    fn name(&self) -> &'static str {
        "vigenere"
    }

    fn encrypt(&self, message: &str) -> String {
        Vigenere::encrypt(self, message)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, ClassicCryptoError> {
        Ok(Vigenere::decrypt(self, ciphertext))
    }
}

impl Cipher for Playfair {
    fn name(&self) -> &'static str {
        "playfair"
    }

    fn encrypt(&self, message: &str) -> String {
        Playfair::encrypt(self, message)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, ClassicCryptoError> {
        Ok(Playfair::decrypt(self, ciphertext))
    }
}

impl Cipher for Hill {
    fn name(&self) -> &'static str {
        "hill"
    }

    fn encrypt(&self, message: &str) -> String {
        Hill::encrypt(self, message)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, ClassicCryptoError> {
        Hill::decrypt(self, ciphertext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::KeyMatrix;

    #[test]
    fn test_dispatch_through_trait_objects() -> Result<(), ClassicCryptoError> {
        let ciphers: Vec<Box<dyn Cipher>> = vec![
            Box::new(Vigenere::new("SECURITYMODE")),
            Box::new(Playfair::new("PLAYFAIREXAMPLE")),
            Box::new(Hill::new(KeyMatrix::new([[3, 3], [2, 5]]))),
        ];

        for cipher in &ciphers {
            let ciphertext = cipher.encrypt("HELP");
            assert_eq!(cipher.decrypt(&ciphertext)?, "HELP", "{}", cipher.name());
        }
        Ok(())
    }
}
