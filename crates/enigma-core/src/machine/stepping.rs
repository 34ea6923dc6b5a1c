// crates/enigma-core/src/machine/stepping.rs
//
// Rotor arrays are ordered left (index 0, slowest) to right (index 2, fastest).
// Each function returns which slots moved on this keypress.

use crate::settings::config::SteppingMode;
use crate::wiring::rotor::Rotor;

pub fn step(mode: SteppingMode, rotors: &mut [Rotor; 3]) -> [bool; 3] {
    match mode {
        SteppingMode::Carry => step_carry(rotors),
        SteppingMode::Historical => step_historical(rotors),
    }
}

/// Single pass, right to left: the right rotor always turns, every other rotor
/// turns only if its right neighbour just landed on a notch. The left rotor's
/// carry goes nowhere.
pub fn step_carry(rotors: &mut [Rotor; 3]) -> [bool; 3] {
    let mut moved = [false; 3];
    let mut carry = true;
    for (rotor, m) in rotors.iter_mut().zip(moved.iter_mut()).rev() {
        if !carry {
            break;
        }
        carry = rotor.advance();
        *m = true;
    }
    moved
}

/// Real machine: pawls read the notches before anything moves. A middle rotor
/// sitting on its notch takes the left rotor and itself along (double step).
pub fn step_historical(rotors: &mut [Rotor; 3]) -> [bool; 3] {
    let mid_at_notch = rotors[1].at_notch();
    let right_at_notch = rotors[2].at_notch();

    let moved = [mid_at_notch, mid_at_notch || right_at_notch, true];
    for (rotor, &m) in rotors.iter_mut().zip(moved.iter()) {
        if m {
            rotor.advance();
        }
    }
    moved
}
