pub mod codec;
pub mod letter;
