//! Helpers for pretty-printing land program instructions and account state in a readable,
//! colorized format.

pub mod instruction;
pub mod land_plane;
