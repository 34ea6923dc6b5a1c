//! Rotor cipher machine: three stepping rotors, a reflector and a plugboard.
//!
//! ```
//! use enigma_core::{encode, Catalog, SteppingMode};
//!
//! let cfg = Catalog::historical()
//!     .machine(["I", "II", "III"], "AAA", "BBB", "B", "", SteppingMode::Carry)
//!     .unwrap();
//! let cipher = encode(&cfg, "AAAAA").unwrap();
//! assert_eq!(cipher, "EWTYX");
//! assert_eq!(encode(&cfg, &cipher).unwrap(), "AAAAA");
//! ```

pub mod error;
pub mod validate;

pub mod alpha;
pub mod machine;
pub mod settings;
pub mod stats;
pub mod wiring;

pub use crate::alpha::letter::Letter;
pub use crate::error::{EnigmaError, Result};
pub use crate::machine::engine::{encode, Engine};
pub use crate::settings::catalog::Catalog;
pub use crate::settings::config::{MachineConfig, ReflectorSpec, RotorSpec, SteppingMode};
pub use crate::wiring::{plugboard::Plugboard, reflector::Reflector, rotor::Rotor, substitute::Substitute};
