//! Offline client tooling for the land program.
//!
//! Builds instruction descriptors from addresses, decodes land plane account data and renders
//! both as colorized text or JSON.

pub mod account_data;
pub mod cli;
pub mod logs;
pub mod pretty;
pub mod views;

pub use logs::LogColor;
