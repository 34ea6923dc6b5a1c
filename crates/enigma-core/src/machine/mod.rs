pub mod engine;
pub mod stepping;
