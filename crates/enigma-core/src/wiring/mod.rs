pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod substitute;
