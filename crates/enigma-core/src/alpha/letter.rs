use std::fmt;

use crate::alpha::codec::{letter_to_ordinal, ordinal_to_letter, wrap26};
use crate::error::Result;

/// One of the 26 letters, stored as its ordinal (A=0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    pub const A: Letter = Letter(0);

    #[inline]
    pub fn from_ordinal(n: i32) -> Letter {
        Letter(wrap26(n))
    }

    #[inline]
    pub fn from_char(c: char) -> Result<Letter> {
        letter_to_ordinal(c).map(Letter)
    }

    #[inline]
    pub fn ordinal(self) -> i32 {
        self.0 as i32
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn to_char(self) -> char {
        ordinal_to_letter(self.0 as i32)
    }

    /// Shift by `delta` positions, wrapping around Z/A.
    #[inline]
    pub fn wrapping_add(self, delta: i32) -> Letter {
        Letter::from_ordinal(self.ordinal() + delta)
    }

    pub fn all() -> impl Iterator<Item = Letter> {
        (0..26).map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
