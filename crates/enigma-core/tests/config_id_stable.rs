use enigma_core::settings::{defaults::default_config, format};
use enigma_core::Catalog;

#[test]
fn config_id_changes_when_offsets_change() {
    let c0 = default_config();
    let mut c1 = default_config();
    c1.offsets = "AAB".into();
    assert_ne!(format::config_id_16(&c0), format::config_id_16(&c1));
}

#[test]
fn config_id_ignores_spelling() {
    let cat = Catalog::historical();
    let a = format::parse_settings_line(&cat, "I II III|AAA|AAA|B|carry|ab cd").unwrap();
    let b = format::parse_settings_line(&cat, "i,ii,iii | aaa | aaa | b | CARRY | AB  CD").unwrap();
    assert_eq!(format::config_id_hex(&a), format::config_id_hex(&b));
}

#[test]
fn settings_line_drives_the_same_machine() {
    let cat = Catalog::historical();
    let cfg = format::parse_settings_line(&cat, "I II III|AAA|BBB|B|carry").unwrap();
    assert_eq!(enigma_core::encode(&cfg, "AAAAA").unwrap(), "EWTYX");
}
