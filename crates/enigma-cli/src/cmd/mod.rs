// crates/enigma-cli/src/cmd/mod.rs

pub mod catalog;
pub mod encode;
pub mod key;
pub mod machine;
