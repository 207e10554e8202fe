//! CLI command implementations.

pub mod chunk;
pub mod parse;
pub mod render;
pub mod sanitize;
