// crates/enigma-core/src/settings/catalog.rs

use crate::error::{EnigmaError, Result};
use crate::settings::config::{MachineConfig, ReflectorSpec, RotorSpec, SteppingMode};
use crate::settings::defaults::{REFLECTORS, ROTORS};
use crate::validate::{check_name, parse_triple};
use crate::wiring::plugboard::Plugboard;

/// Registry of named rotor and reflector tables the caller can choose from.
///
/// Every entry is validated on insertion, so a config assembled from a
/// catalog only fails on its per-session parts (offsets, rings, plugboard).
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    rotors: Vec<RotorSpec>,
    reflectors: Vec<ReflectorSpec>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotors I-VIII and reflectors A, B, C.
    pub fn historical() -> Self {
        let mut c = Self::new();
        for (name, wiring, notch) in ROTORS {
            c.rotors.push(RotorSpec::new(name, wiring, notch));
        }
        for (name, wiring) in REFLECTORS {
            c.reflectors.push(ReflectorSpec::new(name, wiring));
        }
        c
    }

    pub fn add_rotor(&mut self, spec: RotorSpec) -> Result<()> {
        check_name("rotor", &spec.name)?;
        spec.build()?;
        if self.find_rotor(&spec.name).is_some() {
            return Err(EnigmaError::InvalidConfig(format!(
                "catalog already has a rotor named {:?}",
                spec.name
            )));
        }
        self.rotors.push(spec);
        Ok(())
    }

    pub fn add_reflector(&mut self, spec: ReflectorSpec) -> Result<()> {
        check_name("reflector", &spec.name)?;
        spec.build()?;
        if self.find_reflector(&spec.name).is_some() {
            return Err(EnigmaError::InvalidConfig(format!(
                "catalog already has a reflector named {:?}",
                spec.name
            )));
        }
        self.reflectors.push(spec);
        Ok(())
    }

    pub fn rotors(&self) -> &[RotorSpec] {
        &self.rotors
    }

    pub fn reflectors(&self) -> &[ReflectorSpec] {
        &self.reflectors
    }

    fn find_rotor(&self, name: &str) -> Option<&RotorSpec> {
        self.rotors.iter().find(|r| r.name.eq_ignore_ascii_case(name.trim()))
    }

    fn find_reflector(&self, name: &str) -> Option<&ReflectorSpec> {
        self.reflectors
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Case-insensitive lookup.
    pub fn rotor(&self, name: &str) -> Result<&RotorSpec> {
        self.find_rotor(name)
            .ok_or_else(|| EnigmaError::InvalidConfig(format!("unknown rotor {name:?}")))
    }

    pub fn reflector(&self, name: &str) -> Result<&ReflectorSpec> {
        self.find_reflector(name)
            .ok_or_else(|| EnigmaError::InvalidConfig(format!("unknown reflector {name:?}")))
    }

    /// Assemble a config from names. `rotors` is left to right.
    pub fn machine(
        &self,
        rotors: [&str; 3],
        offsets: &str,
        rings: &str,
        reflector: &str,
        plugboard: &str,
        stepping: SteppingMode,
    ) -> Result<MachineConfig> {
        let [l, m, r] = rotors;
        let rotors = [self.rotor(l)?.clone(), self.rotor(m)?.clone(), self.rotor(r)?.clone()];

        parse_triple("rotor offsets", offsets)?;
        parse_triple("ring settings", rings)?;
        let plugboard = Plugboard::new(plugboard)?.spec();

        Ok(MachineConfig {
            rotors,
            offsets: offsets.to_ascii_uppercase(),
            rings: rings.to_ascii_uppercase(),
            reflector: self.reflector(reflector)?.clone(),
            plugboard,
            stepping,
        })
    }
}
