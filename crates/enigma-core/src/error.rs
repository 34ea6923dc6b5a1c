use thiserror::Error;

pub type Result<T> = std::result::Result<T, EnigmaError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Malformed rotor/reflector table, notch, offset, ring or plugboard spec.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A codec operation was handed something other than a single letter.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_kind_and_detail() {
        let e = EnigmaError::InvalidConfig("offset must be 3 letters".into());
        assert_eq!(e.to_string(), "invalid config: offset must be 3 letters");

        let e = EnigmaError::InvalidInput("'7' is not a letter".into());
        assert_eq!(e.to_string(), "invalid input: '7' is not a letter");
    }
}
