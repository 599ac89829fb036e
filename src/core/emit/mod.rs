//! Rendering of the derived artifacts.

pub mod json;
pub mod plain;
pub mod wiki;
