//! Conversion between text and alphabet indices (`A` = 0 .. `Z` = 25).

use crate::config::ALPHABET_SIZE;

/// Returns the index of an ASCII letter, ignoring case.
///
/// Anything else, including non-ASCII letters, yields `None`.
#[inline]
pub fn letter_index(c: char) -> Option<i64> {
    c.is_ascii_alphabetic().then(|| i64::from(c.to_ascii_uppercase() as u8 - b'A'))
}

/// Maps text to alphabet indices, dropping every non-letter.
pub fn to_indices(text: &str) -> Vec<i64> {
    text.chars().filter_map(letter_index).collect()
}

/// Maps indices back to upper-case letters, reducing each modulo 26.
pub fn to_text(indices: &[i64]) -> String {
    indices.iter().map(|&n| index_letter(n)).collect()
}

#[inline]
fn index_letter(n: i64) -> char {
    // rem_euclid keeps the result in 0..26, so the cast cannot truncate.
    char::from(b'A' + n.rem_euclid(ALPHABET_SIZE) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_index() {
        assert_eq!(letter_index('A'), Some(0));
        assert_eq!(letter_index('z'), Some(25));
        assert_eq!(letter_index('k'), Some(10));
        assert_eq!(letter_index(' '), None);
        assert_eq!(letter_index('7'), None);
        assert_eq!(letter_index('É'), None);
    }

    #[test]
    fn test_to_indices_drops_non_letters() {
        assert_eq!(to_indices("a-C t!\n"), vec![0, 2, 19]);
        assert!(to_indices("1234 ,.;").is_empty());
    }

    #[test]
    fn test_to_text_wraps_negative_and_large() {
        assert_eq!(to_text(&[0, 25, -1, 26, 53]), "AZZAB");
    }
}
