use crate::alpha::codec::is_letter;
use crate::alpha::letter::Letter;
use crate::error::{EnigmaError, Result};

/// Catalog names appear verbatim in the settings line, so they may not be
/// empty or contain whitespace, ',' or '|'.
pub fn check_name(kind: &str, name: &str) -> Result<()> {
    if name.is_empty() || name.chars().any(|c| c.is_whitespace() || c == ',' || c == '|') {
        return Err(EnigmaError::InvalidConfig(format!(
            "{kind} name {name:?} must be non-empty without spaces, ',' or '|'"
        )));
    }
    Ok(())
}

/// Parse a 26-letter wiring table; it must name every letter exactly once.
pub fn parse_permutation(name: &str, mapping: &str) -> Result<[Letter; 26]> {
    let letters: Vec<char> = mapping.chars().collect();
    if letters.len() != 26 {
        return Err(EnigmaError::InvalidConfig(format!(
            "{name}: wiring must have 26 letters, got {}",
            letters.len()
        )));
    }

    let mut table = [Letter::A; 26];
    let mut seen = [false; 26];
    for (slot, &c) in table.iter_mut().zip(letters.iter()) {
        let l = Letter::from_char(c).map_err(|_| {
            EnigmaError::InvalidConfig(format!("{name}: wiring contains non-letter {c:?}"))
        })?;
        if seen[l.index()] {
            return Err(EnigmaError::InvalidConfig(format!(
                "{name}: wiring repeats letter {l}"
            )));
        }
        seen[l.index()] = true;
        *slot = l;
    }
    Ok(table)
}

/// Parse a notch set: one or more letters. Repeats collapse.
pub fn parse_notch(name: &str, notch: &str) -> Result<Vec<Letter>> {
    if notch.is_empty() {
        return Err(EnigmaError::InvalidConfig(format!(
            "{name}: notch needs at least one letter"
        )));
    }
    let mut out = Vec::with_capacity(notch.len());
    for c in notch.chars() {
        let l = Letter::from_char(c).map_err(|_| {
            EnigmaError::InvalidConfig(format!("{name}: notch contains non-letter {c:?}"))
        })?;
        if !out.contains(&l) {
            out.push(l);
        }
    }
    Ok(out)
}

/// Parse a per-rotor setting (offsets or rings): exactly three letters, left to right.
pub fn parse_triple(what: &str, s: &str) -> Result<[Letter; 3]> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() != 3 || !chars.iter().all(|&c| is_letter(c)) {
        return Err(EnigmaError::InvalidConfig(format!(
            "{what} must be exactly 3 letters, got {s:?}"
        )));
    }
    let mut out = [Letter::A; 3];
    for (slot, &c) in out.iter_mut().zip(chars.iter()) {
        *slot = Letter::from_char(c)?;
    }
    Ok(out)
}
