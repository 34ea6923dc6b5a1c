// crates/enigma-core/src/settings/format.rs
//
// Settings line (one line, '|' separated, case-insensitive on input):
//   ROTORS|OFFSETS|RINGS|REFLECTOR|STEPPING[|PAIRS]
// e.g. "I II III|AAA|BBB|B|carry|AB CD"
// ROTORS are left to right, separated by spaces or commas.

use crate::error::{EnigmaError, Result};
use crate::settings::catalog::Catalog;
use crate::settings::config::{MachineConfig, SteppingMode};
use crate::wiring::plugboard::Plugboard;

const ID_TAG: &[u8] = b"ENG1";

/// Sorted pairs ("DC ba" -> "AB CD"). A spec the plugboard rejects is only
/// upper-cased and re-spaced, so the line still shows what was configured.
fn canonical_pairs(spec: &str) -> String {
    match Plugboard::new(spec) {
        Ok(board) => board.spec(),
        Err(_) => spec
            .split_whitespace()
            .map(|t| t.to_ascii_uppercase())
            .collect::<Vec<_>>()
            .join(" "),
    }
}

pub fn settings_line(cfg: &MachineConfig) -> String {
    let rotors = cfg
        .rotors
        .iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let mut line = format!(
        "{rotors}|{}|{}|{}|{}",
        cfg.offsets.to_ascii_uppercase(),
        cfg.rings.to_ascii_uppercase(),
        cfg.reflector.name,
        cfg.stepping
    );
    let pairs = canonical_pairs(&cfg.plugboard);
    if !pairs.is_empty() {
        line.push('|');
        line.push_str(&pairs);
    }
    line
}

pub fn parse_settings_line(catalog: &Catalog, line: &str) -> Result<MachineConfig> {
    let fields: Vec<&str> = line.trim().split('|').map(str::trim).collect();
    if fields.len() != 5 && fields.len() != 6 {
        return Err(EnigmaError::InvalidConfig(format!(
            "settings line needs 5 or 6 '|' separated fields, got {}",
            fields.len()
        )));
    }

    let names: Vec<&str> = fields[0]
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    let [l, m, r]: [&str; 3] = names.as_slice().try_into().map_err(|_| {
        EnigmaError::InvalidConfig(format!(
            "settings line must name exactly 3 rotors, got {:?}",
            fields[0]
        ))
    })?;

    let stepping: SteppingMode = fields[4].parse()?;
    let plugboard = fields.get(5).copied().unwrap_or("");

    catalog.machine([l, m, r], fields[1], fields[2], fields[3], plugboard, stepping)
}

/// Stable fingerprint of a config: settings plus the actual wiring tables,
/// so two catalogs reusing a name with different wiring get different ids.
pub fn config_id_16(cfg: &MachineConfig) -> [u8; 16] {
    let mut h = blake3::Hasher::new();
    h.update(ID_TAG);
    h.update(settings_line(cfg).as_bytes());
    for r in &cfg.rotors {
        h.update(&[0]);
        h.update(r.wiring.to_ascii_uppercase().as_bytes());
        h.update(&[0]);
        h.update(r.notch.to_ascii_uppercase().as_bytes());
    }
    h.update(&[0]);
    h.update(cfg.reflector.wiring.to_ascii_uppercase().as_bytes());

    let mut out = [0u8; 16];
    out.copy_from_slice(&h.finalize().as_bytes()[..16]);
    out
}

pub fn config_id_hex(cfg: &MachineConfig) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let id = config_id_16(cfg);
    let mut s = String::with_capacity(32);
    for b in id {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0x0F) as usize] as char);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::defaults::default_config;

    #[test]
    fn default_line() {
        assert_eq!(settings_line(&default_config()), "I II III|AAA|AAA|B|carry");
    }

    #[test]
    fn line_round_trips_through_catalog() {
        let cat = Catalog::historical();
        let cfg = parse_settings_line(&cat, " iv,ii v | xyz|abc|c|Historical| ab  cd ").unwrap();
        assert_eq!(cfg.rotors[0].name, "IV");
        assert_eq!(cfg.rotors[2].name, "V");
        assert_eq!(cfg.stepping, SteppingMode::Historical);

        let line = settings_line(&cfg);
        assert_eq!(line, "IV II V|XYZ|ABC|C|historical|AB CD");
        assert_eq!(parse_settings_line(&cat, &line).unwrap(), cfg);
    }

    #[test]
    fn malformed_lines_fail() {
        let cat = Catalog::historical();
        assert!(parse_settings_line(&cat, "I II III|AAA|AAA|B").is_err());
        assert!(parse_settings_line(&cat, "I II|AAA|AAA|B|carry").is_err());
        assert!(parse_settings_line(&cat, "I II III|AAA|AAA|B|double").is_err());
        assert!(parse_settings_line(&cat, "I II III|AAA|AAA|Q|carry").is_err());
    }

    #[test]
    fn id_tracks_every_setting() {
        let a = default_config();
        let mut b = default_config();
        assert_eq!(config_id_hex(&a), config_id_hex(&b));
        assert_eq!(config_id_hex(&a).len(), 32);

        b.rings = "AAB".into();
        assert_ne!(config_id_16(&a), config_id_16(&b));

        let mut c = default_config();
        c.rotors[0].notch = "R".into();
        assert_ne!(config_id_16(&a), config_id_16(&c));
    }

    #[test]
    fn pair_order_does_not_change_line_or_id() {
        let cat = Catalog::historical();
        let machine = |pairs: &str| {
            cat.machine(["I", "II", "III"], "AAA", "AAA", "B", pairs, SteppingMode::Carry)
                .unwrap()
        };
        let a = machine("AB CD");
        let b = machine("DC BA");
        assert_eq!(settings_line(&a), "I II III|AAA|AAA|B|carry|AB CD");
        assert_eq!(settings_line(&a), settings_line(&b));
        assert_eq!(config_id_hex(&a), config_id_hex(&b));

        // Same holds for a config whose plugboard field was set by hand.
        let mut c = default_config();
        c.plugboard = "dc  ba".into();
        assert_eq!(settings_line(&c), "I II III|AAA|AAA|B|carry|AB CD");
        assert_eq!(config_id_16(&c), config_id_16(&a));
    }
}
