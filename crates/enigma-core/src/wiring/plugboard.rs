// crates/enigma-core/src/wiring/plugboard.rs
//
// Pair spec: whitespace-separated two-letter tokens, e.g. "AB CD ef".
// Each letter may be cabled at most once.

use std::str::FromStr;

use crate::alpha::letter::Letter;
use crate::error::{EnigmaError, Result};
use crate::wiring::substitute::Substitute;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plugboard {
    table: [Letter; 26],
}

impl Default for Plugboard {
    fn default() -> Self {
        let mut table = [Letter::A; 26];
        for c in Letter::all() {
            table[c.index()] = c;
        }
        Self { table }
    }
}

impl Plugboard {
    /// No cables: every letter maps to itself.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(pair_spec: &str) -> Result<Self> {
        let mut board = Self::default();

        for token in pair_spec.split_whitespace() {
            let chars: Vec<char> = token.chars().collect();
            if chars.len() != 2 {
                return Err(EnigmaError::InvalidConfig(format!(
                    "plugboard pair must be two letters, got {token:?}"
                )));
            }
            let bad = |_| EnigmaError::InvalidConfig(format!("plugboard pair {token:?} has a non-letter"));
            let a = Letter::from_char(chars[0]).map_err(bad)?;
            let b = Letter::from_char(chars[1]).map_err(bad)?;

            if a == b {
                return Err(EnigmaError::InvalidConfig(format!(
                    "plugboard pair {token:?} connects a letter to itself"
                )));
            }
            for x in [a, b] {
                if board.table[x.index()] != x {
                    return Err(EnigmaError::InvalidConfig(format!(
                        "plugboard letter {x} is used in more than one pair"
                    )));
                }
            }

            board.table[a.index()] = b;
            board.table[b.index()] = a;
        }

        Ok(board)
    }

    pub fn mapping(&self, c: Letter) -> Letter {
        self.table[c.index()]
    }

    /// Cabled pairs, each as (lower, higher), ordered by the lower letter.
    pub fn pairs(&self) -> Vec<(Letter, Letter)> {
        Letter::all()
            .filter_map(|a| {
                let b = self.table[a.index()];
                (b > a).then_some((a, b))
            })
            .collect()
    }

    /// Canonical pair spec, e.g. "AB CD".
    pub fn spec(&self) -> String {
        self.pairs()
            .iter()
            .map(|(a, b)| format!("{a}{b}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromStr for Plugboard {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self> {
        Plugboard::new(s)
    }
}

impl Substitute for Plugboard {
    fn forward(&self, c: Letter) -> Letter {
        self.mapping(c)
    }

    fn reverse(&self, c: Letter) -> Letter {
        self.mapping(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn pairs_swap_both_ways() {
        let p = Plugboard::new("AB cd").unwrap();
        assert_eq!(p.mapping(l('A')), l('B'));
        assert_eq!(p.mapping(l('B')), l('A'));
        assert_eq!(p.mapping(l('D')), l('C'));
        assert_eq!(p.mapping(l('E')), l('E'));
    }

    #[test]
    fn empty_spec_is_identity() {
        let p = Plugboard::new("  ").unwrap();
        assert_eq!(p, Plugboard::empty());
        assert!(p.pairs().is_empty());
    }

    #[test]
    fn duplicate_letter_is_a_config_error() {
        let err = Plugboard::new("AB BC").unwrap_err();
        assert!(matches!(err, EnigmaError::InvalidConfig(_)));
        assert!(Plugboard::new("AB AB").is_err());
        assert!(Plugboard::new("AA").is_err());
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert!(Plugboard::new("ABC").is_err());
        assert!(Plugboard::new("A").is_err());
        assert!(Plugboard::new("A1").is_err());
    }

    #[test]
    fn spec_is_canonical() {
        let p: Plugboard = "zy ba".parse().unwrap();
        assert_eq!(p.spec(), "AB YZ");
    }
}
