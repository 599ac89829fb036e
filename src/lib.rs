//! Censorctl - bad-word list compiler for the console's censored-word files
//!
//! Censorctl is a CLI tool and library for working with the per-version,
//! per-language censored-word lists shipped in console firmware. It merges
//! and deduplicates the UTF-16 list files, renders a JSON index and a
//! wikitext presence table, and minimizes each language's pattern list by
//! removing entries already covered by a broader pattern.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit codes)
//! - `config`: Configuration file loading and parsing
//! - `core`: List loading, pattern minimization, and artifact rendering

pub mod cli;
pub mod config;
pub mod core;
