use enigma_core::alpha::codec::{letter_to_ordinal, ordinal_to_letter};

#[test]
fn letter_ordinal_round_trip() {
    for c in ('A'..='Z').chain('a'..='z') {
        let n = letter_to_ordinal(c).unwrap();
        assert!(n < 26);
        assert_eq!(ordinal_to_letter(n as i32), c.to_ascii_uppercase());
    }
}

#[test]
fn ordinal_wraps_in_both_directions() {
    for n in -60..60 {
        for k in -3..=3 {
            assert_eq!(ordinal_to_letter(n), ordinal_to_letter(n + 26 * k));
        }
    }
    assert_eq!(ordinal_to_letter(-1), 'Z');
    assert_eq!(ordinal_to_letter(26), 'A');
}
