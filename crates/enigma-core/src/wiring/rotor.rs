// crates/enigma-core/src/wiring/rotor.rs

use crate::alpha::letter::Letter;
use crate::error::Result;
use crate::validate::{parse_notch, parse_permutation};
use crate::wiring::substitute::Substitute;

/// A wired rotor: fixed permutation, turnover notches, and the two moving
/// offsets (position and ring) that shift the permutation seen by the signal.
#[derive(Clone, Debug)]
pub struct Rotor {
    name: String,
    wiring: [Letter; 26],
    inverse: [Letter; 26],
    notch: Vec<Letter>,
    position: Letter,
    ring: Letter,
}

impl Rotor {
    /// `mapping` must be a permutation of A-Z; `notch` one or more letters.
    /// Starts at position A, ring A.
    pub fn new(name: impl Into<String>, mapping: &str, notch: &str) -> Result<Self> {
        let name = name.into();
        let wiring = parse_permutation(&name, mapping)?;
        let notch = parse_notch(&name, notch)?;

        let mut inverse = [Letter::A; 26];
        for (i, out) in wiring.iter().enumerate() {
            inverse[out.index()] = Letter::from_ordinal(i as i32);
        }

        Ok(Self {
            name,
            wiring,
            inverse,
            notch,
            position: Letter::A,
            ring: Letter::A,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn notch(&self) -> &[Letter] {
        &self.notch
    }

    pub fn position(&self) -> char {
        self.position.to_char()
    }

    pub fn set_position(&mut self, c: char) -> Result<()> {
        self.position = Letter::from_char(c)?;
        Ok(())
    }

    pub fn ring(&self) -> char {
        self.ring.to_char()
    }

    pub fn set_ring(&mut self, c: char) -> Result<()> {
        self.ring = Letter::from_char(c)?;
        Ok(())
    }

    pub(crate) fn place(&mut self, position: Letter, ring: Letter) {
        self.position = position;
        self.ring = ring;
    }

    /// Turn one step. Returns true when the new position is a notch,
    /// i.e. the rotor to the left should move too.
    pub fn advance(&mut self) -> bool {
        self.position = self.position.wrapping_add(1);
        self.at_notch()
    }

    pub fn at_notch(&self) -> bool {
        self.notch.contains(&self.position)
    }

    #[inline]
    fn offset(&self) -> i32 {
        self.position.ordinal() - self.ring.ordinal()
    }

    /// Inbound pass, entry contacts to exit contacts.
    pub fn forward_mapping(&self, c: Letter) -> Letter {
        let off = self.offset();
        let wired = self.wiring[c.wrapping_add(off).index()];
        wired.wrapping_add(-off)
    }

    /// Return pass after the reflector, exit contacts back to entry contacts.
    /// Inverse of `forward_mapping` for the same position and ring.
    pub fn reverse_mapping(&self, c: Letter) -> Letter {
        let off = self.offset();
        let wired = self.inverse[c.wrapping_add(off).index()];
        wired.wrapping_add(-off)
    }
}

impl Substitute for Rotor {
    fn forward(&self, c: Letter) -> Letter {
        self.forward_mapping(c)
    }

    fn reverse(&self, c: Letter) -> Letter {
        self.reverse_mapping(c)
    }
}
