// crates/enigma-core/src/settings/config.rs

use std::fmt;
use std::str::FromStr;

use crate::error::{EnigmaError, Result};
use crate::wiring::{reflector::Reflector, rotor::Rotor};

/// Named rotor table as supplied by a catalog (or a test).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotorSpec {
    pub name: String,
    pub wiring: String,
    pub notch: String,
}

impl RotorSpec {
    pub fn new(name: &str, wiring: &str, notch: &str) -> Self {
        Self {
            name: name.to_string(),
            wiring: wiring.to_string(),
            notch: notch.to_string(),
        }
    }

    pub fn build(&self) -> Result<Rotor> {
        Rotor::new(self.name.clone(), &self.wiring, &self.notch)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReflectorSpec {
    pub name: String,
    pub wiring: String,
}

impl ReflectorSpec {
    pub fn new(name: &str, wiring: &str) -> Self {
        Self {
            name: name.to_string(),
            wiring: wiring.to_string(),
        }
    }

    pub fn build(&self) -> Result<Reflector> {
        Reflector::new(self.name.clone(), &self.wiring)
    }
}

/// How a keypress moves the rotors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SteppingMode {
    /// Rightmost rotor always turns; a rotor turns its left neighbour when it
    /// lands on a notch. No double step.
    #[default]
    Carry,
    /// Pawl-and-ratchet behaviour of the real machine, including the middle
    /// rotor's double step. Turnover happens when a rotor leaves its notch.
    Historical,
}

impl SteppingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SteppingMode::Carry => "carry",
            SteppingMode::Historical => "historical",
        }
    }
}

impl fmt::Display for SteppingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SteppingMode {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "carry" => Ok(SteppingMode::Carry),
            "historical" => Ok(SteppingMode::Historical),
            other => Err(EnigmaError::InvalidConfig(format!(
                "unknown stepping mode {other:?} (expected carry or historical)"
            ))),
        }
    }
}

/// Everything needed to build and reset an engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MachineConfig {
    /// Left (slowest) to right (fastest).
    pub rotors: [RotorSpec; 3],
    /// Starting positions, one letter per rotor, left to right.
    pub offsets: String,
    /// Ring settings, one letter per rotor, left to right.
    pub rings: String,
    pub reflector: ReflectorSpec,
    /// Whitespace-separated letter pairs; empty for no cables.
    pub plugboard: String,
    pub stepping: SteppingMode,
}
