//! Core engine: list loading, pattern minimization, and artifact rendering.

pub mod context;
pub mod emit;
pub mod language;
pub mod loader;
pub mod nfa;
pub mod optimize;
pub mod pattern;
pub mod versions;

pub use context::BatchContext;
pub use language::Language;
pub use loader::{ListEntry, LoadResult, ScanWarning, WordTable, load_word_lists};
pub use optimize::{MinimizeResult, Removal, minimize};
