use lazy_static::lazy_static;
use std::collections::HashMap;

/// Letter used to split repeated letters and to pad an odd tail.
pub const FILLER: char = 'X';

/// The 25 letters of a Playfair square in natural order, J merged into I.
pub const SQUARE_ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

lazy_static! {
    /// A static HashMap mapping an index (0 to 25) to its corresponding
    /// uppercase Latin letter (A-Z).
    pub static ref INDEX_TO_LETTER_MAP: HashMap<u8, char> = {
        ('A'..='Z')
            .enumerate()
            .map(|(i, ch)| (i as u8, ch))
            .collect()
    };

    /// A static HashMap mapping an uppercase Latin letter (A-Z) to its
    /// corresponding index (0 to 25).
    pub static ref LETTER_TO_INDEX_MAP: HashMap<char, u8> = {
        let mut map = HashMap::new();

        for (&index, &ch) in INDEX_TO_LETTER_MAP.iter() {
            map.insert(ch, index);
        }

        map
    };
}

/// Value of an ASCII letter in either case, `A = 0 .. Z = 25`.
pub fn letter_value(ch: char) -> Option<i64> {
    LETTER_TO_INDEX_MAP
        .get(&ch.to_ascii_uppercase())
        .map(|&index| index as i64)
}

/// Uppercase letter for a value, reduced modulo 26 first.
pub fn value_letter(value: i64) -> char {
    let index = crate::ring::normalize(value) as u8;
    INDEX_TO_LETTER_MAP[&index]
}

/// Uppercases the message and keeps only ASCII letters.
pub fn letters_only(message: &str) -> Vec<char> {
    message
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_maps_cover_alphabet() {
        assert_eq!(INDEX_TO_LETTER_MAP.len(), 26);
        assert_eq!(LETTER_TO_INDEX_MAP.len(), 26);
        assert_eq!(LETTER_TO_INDEX_MAP[&'A'], 0);
        assert_eq!(LETTER_TO_INDEX_MAP[&'Z'], 25);
    }

    #[test]
    fn test_square_alphabet_skips_j() {
        assert_eq!(SQUARE_ALPHABET.len(), 25);
        assert!(!SQUARE_ALPHABET.contains('J'));
    }

    #[test]
    fn test_letter_value_is_case_insensitive() {
        assert_eq!(letter_value('h'), Some(7));
        assert_eq!(letter_value('H'), Some(7));
        assert_eq!(letter_value('!'), None);
        assert_eq!(letter_value('é'), None);
    }

    #[test]
    fn test_value_letter_wraps() {
        assert_eq!(value_letter(0), 'A');
        assert_eq!(value_letter(27), 'B');
        assert_eq!(value_letter(-1), 'Z');
    }

    #[test]
    fn test_letters_only() {
        assert_eq!(
            letters_only("Hi, there! 42").into_iter().collect::<String>(),
            "HITHERE"
        );
    }

    #[quickcheck]
    fn prop_value_letter_inverts_letter_value(ch: char) -> TestResult {
        match letter_value(ch) {
            Some(v) => TestResult::from_bool(value_letter(v) == ch.to_ascii_uppercase()),
            None => TestResult::from_bool(!ch.is_ascii_alphabetic()),
        }
    }
}
