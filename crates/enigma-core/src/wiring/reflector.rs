use crate::alpha::letter::Letter;
use crate::error::Result;
use crate::validate::parse_permutation;
use crate::wiring::substitute::Substitute;

/// Fixed turnaround wiring. Historical reflectors are involutions; that is
/// expected of the table but not checked.
#[derive(Clone, Debug)]
pub struct Reflector {
    name: String,
    wiring: [Letter; 26],
}

impl Reflector {
    pub fn new(name: impl Into<String>, mapping: &str) -> Result<Self> {
        let name = name.into();
        let wiring = parse_permutation(&name, mapping)?;
        Ok(Self { name, wiring })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mapping(&self, c: Letter) -> Letter {
        self.wiring[c.index()]
    }
}

impl Substitute for Reflector {
    fn forward(&self, c: Letter) -> Letter {
        self.mapping(c)
    }

    fn reverse(&self, c: Letter) -> Letter {
        self.mapping(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflector_b_is_an_involution() {
        let r = Reflector::new("B", "YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap();
        for c in Letter::all() {
            assert_eq!(r.mapping(r.mapping(c)), c);
            assert_ne!(r.mapping(c), c);
        }
    }

    #[test]
    fn bad_tables_are_rejected() {
        assert!(Reflector::new("short", "YRUH").is_err());
        assert!(Reflector::new("dup", "YYUHQSLDPXNGOKMIEBFZCWVJAT").is_err());
    }
}
