pub mod catalog;
pub mod config;
pub mod defaults;
pub mod format;
