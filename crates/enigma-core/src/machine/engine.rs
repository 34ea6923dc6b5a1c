// crates/enigma-core/src/machine/engine.rs
//
// Signal path for one keypress (rotor index 0 = left, 2 = right):
//   step rotors
//   plugboard -> rotor[2] -> rotor[1] -> rotor[0] -> reflector
//             -> rotor[0] -> rotor[1] -> rotor[2] -> plugboard
// The signal enters through the fastest rotor, as on the real machine.

use tracing::{debug, trace};

use crate::alpha::letter::Letter;
use crate::error::Result;
use crate::machine::stepping;
use crate::settings::config::{MachineConfig, SteppingMode};
use crate::stats::counters::Counters;
use crate::validate::parse_triple;
use crate::wiring::{plugboard::Plugboard, reflector::Reflector, rotor::Rotor, substitute::Substitute};

pub struct Engine {
    rotors: [Rotor; 3],
    reflector: Reflector,
    plugboard: Plugboard,
    offsets: [Letter; 3],
    rings: [Letter; 3],
    stepping: SteppingMode,
    pub stats: Counters,
}

impl Engine {
    /// Build every component from `cfg` and reset.
    pub fn new(cfg: &MachineConfig) -> Result<Self> {
        let [l, m, r] = &cfg.rotors;
        let engine = Self::from_parts(
            l.build()?,
            m.build()?,
            r.build()?,
            &cfg.offsets,
            &cfg.rings,
            cfg.reflector.build()?,
            Plugboard::new(&cfg.plugboard)?,
        )?
        .with_stepping(cfg.stepping);

        debug!(
            rotors = %engine.rotor_names(),
            reflector = engine.reflector.name(),
            offsets = %cfg.offsets,
            rings = %cfg.rings,
            plugboard = %engine.plugboard.spec(),
            stepping = %engine.stepping,
            "engine built"
        );
        Ok(engine)
    }

    /// Assemble from already-built components. Rotors are given left to right;
    /// `rotor_offset` and `ring_setting` are three letters each, same order.
    pub fn from_parts(
        left: Rotor,
        mid: Rotor,
        right: Rotor,
        rotor_offset: &str,
        ring_setting: &str,
        reflector: Reflector,
        plugboard: Plugboard,
    ) -> Result<Self> {
        let offsets = parse_triple("rotor offsets", rotor_offset)?;
        let rings = parse_triple("ring settings", ring_setting)?;

        let mut engine = Self {
            rotors: [left, mid, right],
            reflector,
            plugboard,
            offsets,
            rings,
            stepping: SteppingMode::Carry,
            stats: Counters::default(),
        };
        engine.reset();
        Ok(engine)
    }

    pub fn with_stepping(mut self, stepping: SteppingMode) -> Self {
        self.stepping = stepping;
        self
    }

    pub fn stepping(&self) -> SteppingMode {
        self.stepping
    }

    pub fn rotors(&self) -> &[Rotor; 3] {
        &self.rotors
    }

    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    fn rotor_names(&self) -> String {
        self.rotors
            .iter()
            .map(Rotor::name)
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Current window letters, left to right.
    pub fn positions(&self) -> String {
        self.rotors.iter().map(Rotor::position).collect()
    }

    pub fn rings(&self) -> String {
        self.rotors.iter().map(Rotor::ring).collect()
    }

    /// Put every rotor back to its configured ring and offset; clears stats.
    pub fn reset(&mut self) {
        for ((rotor, &pos), &ring) in self.rotors.iter_mut().zip(&self.offsets).zip(&self.rings) {
            rotor.place(pos, ring);
        }
        self.stats = Counters::default();
        trace!(positions = %self.positions(), rings = %self.rings(), "reset");
    }

    pub fn step_rotors(&mut self) {
        let moved = stepping::step(self.stepping, &mut self.rotors);
        for (count, m) in self.stats.advances.iter_mut().zip(moved) {
            *count += m as u64;
        }
    }

    /// One keypress: step, then run the letter through the whole pipeline.
    pub fn encode_letter(&mut self, c: Letter) -> Letter {
        self.step_rotors();

        let mut x = self.plugboard.forward(c);
        for rotor in self.rotors.iter().rev() {
            x = rotor.forward(x);
        }
        x = self.reflector.forward(x);
        for rotor in self.rotors.iter() {
            x = rotor.reverse(x);
        }
        x = self.plugboard.reverse(x);

        self.stats.encoded += 1;
        trace!(input = %c, output = %x, positions = %self.positions(), "keypress");
        x
    }

    /// `encode_letter` for a `char`; non-letters are an `InvalidInput` error
    /// and leave the rotors untouched.
    pub fn encode_char(&mut self, c: char) -> Result<char> {
        let l = Letter::from_char(c)?;
        Ok(self.encode_letter(l).to_char())
    }

    /// Reset, then lazily encode `text`. Non-letters are dropped and do not
    /// move the rotors.
    pub fn encode_iter<'e, 't>(&'e mut self, text: &'t str) -> Encoder<'e, 't> {
        self.reset();
        Encoder {
            engine: self,
            chars: text.chars(),
        }
    }

    /// Reset, then encode all of `text`. Output is upper case letters only.
    pub fn encode(&mut self, text: &str) -> String {
        let out: String = self.encode_iter(text).collect();
        debug!(
            encoded = self.stats.encoded,
            skipped = self.stats.skipped,
            positions = %self.positions(),
            "message encoded"
        );
        out
    }
}

/// Lazy output of `Engine::encode_iter`. Holds the engine until dropped.
pub struct Encoder<'e, 't> {
    engine: &'e mut Engine,
    chars: std::str::Chars<'t>,
}

impl Iterator for Encoder<'_, '_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        for c in self.chars.by_ref() {
            match Letter::from_char(c) {
                Ok(l) => return Some(self.engine.encode_letter(l).to_char()),
                Err(_) => self.engine.stats.skipped += 1,
            }
        }
        None
    }
}

/// Build an engine from `cfg` and encode `text` from the configured start.
pub fn encode(cfg: &MachineConfig, text: &str) -> Result<String> {
    let mut engine = Engine::new(cfg)?;
    Ok(engine.encode(text))
}
