// crates/enigma-core/src/alpha/codec.rs
//
// Letter <-> ordinal conversion. Only ASCII A-Z (either case) count as letters.

use crate::error::{EnigmaError, Result};

pub const ALPHABET_LEN: i32 = 26;

/// Normalize any integer into [0, 25].
#[inline]
pub fn wrap26(n: i32) -> u8 {
    n.rem_euclid(ALPHABET_LEN) as u8
}

#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// A=0 .. Z=25, case-insensitive.
pub fn letter_to_ordinal(c: char) -> Result<u8> {
    if !is_letter(c) {
        return Err(EnigmaError::InvalidInput(format!("{c:?} is not a letter A-Z")));
    }
    Ok(c.to_ascii_uppercase() as u8 - b'A')
}

/// Letter for `n mod 26`; negative and oversized inputs wrap.
#[inline]
pub fn ordinal_to_letter(n: i32) -> char {
    (b'A' + wrap26(n)) as char
}

/// Like `letter_to_ordinal`, for a string that must hold exactly one letter.
pub fn str_to_ordinal(s: &str) -> Result<u8> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => letter_to_ordinal(c),
        _ => Err(EnigmaError::InvalidInput(format!(
            "expected a single letter, got {s:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_handles_negatives() {
        assert_eq!(wrap26(-1), 25);
        assert_eq!(wrap26(-26), 0);
        assert_eq!(wrap26(-27), 25);
        assert_eq!(wrap26(52), 0);
        assert_eq!(ordinal_to_letter(-3), 'X');
    }

    #[test]
    fn lowercase_is_accepted() {
        assert_eq!(letter_to_ordinal('q').unwrap(), 16);
        assert_eq!(letter_to_ordinal('Q').unwrap(), 16);
    }

    #[test]
    fn non_letters_are_rejected() {
        for c in ['1', ' ', '-', 'é', 'Ω'] {
            assert!(matches!(letter_to_ordinal(c), Err(EnigmaError::InvalidInput(_))));
        }
        assert!(str_to_ordinal("").is_err());
        assert!(str_to_ordinal("AB").is_err());
        assert_eq!(str_to_ordinal("z").unwrap(), 25);
    }
}
