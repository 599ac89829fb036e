use std::path::PathBuf;

use crate::core::{Language, Removal, ScanWarning};

#[derive(Debug)]
pub enum CommandSummary {
    Compile(CompileSummary),
    Optimize(OptimizeSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CompileSummary {
    pub word_count: usize,
    pub version_count: usize,
    pub files_loaded: usize,
    pub json_path: PathBuf,
    pub wiki_path: PathBuf,
}

/// One minimized language list.
#[derive(Debug)]
pub struct LanguageReduction {
    pub language: Language,
    pub before: usize,
    pub after: usize,
    pub path: PathBuf,
    pub removals: Vec<Removal>,
}

#[derive(Debug)]
pub struct OptimizeSummary {
    pub reductions: Vec<LanguageReduction>,
    pub files_loaded: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a command.
///
/// Warnings cover recoverable input problems (unreadable files, stray
/// entries, unsupported patterns); they turn exit code 0 into 1 but never
/// abort the run.
pub struct CommandResult {
    pub summary: CommandSummary,
    pub warnings: Vec<ScanWarning>,
}
