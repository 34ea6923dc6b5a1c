// crates/enigma-core/src/settings/defaults.rs
//
// Wiring tables of the Wehrmacht/Kriegsmarine rotors I-VIII and reflectors A-C.

use crate::settings::config::{MachineConfig, ReflectorSpec, RotorSpec, SteppingMode};

pub const ROTORS: [(&str, &str, &str); 8] = [
    ("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q"),
    ("II", "AJDKSIRUXBLHWTMCQGZNPYFVOE", "E"),
    ("III", "BDFHJLCPRTXVZNYEIWGAKMUSQO", "V"),
    ("IV", "ESOVPZJAYQUIRHXLNFTGKDCMWB", "J"),
    ("V", "VZBRGITYUPSDNHLXAWMJQOFECK", "Z"),
    ("VI", "JPGVOUMFYQBENHZRDKASXLICTW", "ZM"),
    ("VII", "NZJHGRCXMYSWBOUFAIVLPEKQDT", "ZM"),
    ("VIII", "FKQHTLXOCBJSPDZRAMEWNIUYGV", "ZM"),
];

pub const REFLECTORS: [(&str, &str); 3] = [
    ("A", "EJMZALYXVBWFCRQUONTSPIKHGD"),
    ("B", "YRUHQSLDPXNGOKMIEBFZCWVJAT"),
    ("C", "FVPJIAOYEDRZXWGCTKUQSBNMHL"),
];

fn rotor_at(i: usize) -> RotorSpec {
    let (name, wiring, notch) = ROTORS[i];
    RotorSpec::new(name, wiring, notch)
}

/// Rotors I-II-III left to right, reflector B, positions and rings AAA,
/// no plugboard cables, carry stepping.
pub fn default_config() -> MachineConfig {
    MachineConfig {
        rotors: [rotor_at(0), rotor_at(1), rotor_at(2)],
        offsets: "AAA".into(),
        rings: "AAA".into(),
        reflector: ReflectorSpec::new(REFLECTORS[1].0, REFLECTORS[1].1),
        plugboard: String::new(),
        stepping: SteppingMode::Carry,
    }
}
