//! Command implementations for the recipebook CLI

pub mod serve;

pub use serve::run_serve;
