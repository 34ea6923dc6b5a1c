use enigma_core::{settings::defaults::default_config, Engine};

#[test]
fn same_config_same_stream() {
    let cfg = default_config();
    let mut e1 = Engine::new(&cfg).unwrap();
    let mut e2 = Engine::new(&cfg).unwrap();

    let text = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG".repeat(20);
    let c1 = e1.encode(&text);
    let c2 = e2.encode(&text);

    assert_eq!(c1.len(), text.len());
    assert_eq!(c1, c2);
}

#[test]
fn encode_resets_every_time() {
    let mut e = Engine::new(&default_config()).unwrap();
    let a = e.encode("ATTACKATDAWN");
    let b = e.encode("ATTACKATDAWN");
    assert_eq!(a, b);
}

#[test]
fn reset_is_idempotent() {
    let mut cfg = default_config();
    cfg.offsets = "QEV".into();
    cfg.rings = "CZM".into();

    let mut e = Engine::new(&cfg).unwrap();
    for c in "SOMETEXT".chars() {
        e.encode_char(c).unwrap();
    }
    assert_ne!(e.positions(), "QEV");

    e.reset();
    e.reset();
    assert_eq!(e.positions(), "QEV");
    assert_eq!(e.rings(), "CZM");
}
