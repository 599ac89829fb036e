//! Loading of the per-version, per-language bad-word list files.
//!
//! The lists root contains one directory per firmware version, each holding
//! UTF-16 text files named after a language index (`0.txt`..`16.txt`) or
//! `common.txt`. Problems with individual directories, files, or lines are
//! collected as warnings and never abort the run.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::Path,
};

use anyhow::{Context, Result, anyhow, bail};
use glob::Pattern;
use walkdir::WalkDir;

use crate::core::language::Language;

/// One occurrence of a word: the (language, version) list that contains it.
///
/// Ordered by language first so per-word occurrence sets iterate in the
/// canonical language order, versions ascending within a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListEntry {
    pub language: Language,
    pub version: u32,
}

/// Every word across every list, with the full set of lists containing it.
pub type WordTable = BTreeMap<String, BTreeSet<ListEntry>>;

/// A non-fatal problem encountered while loading input files.
#[derive(Debug, Clone)]
pub struct ScanWarning {
    pub path: String,
    pub message: String,
}

impl ScanWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result of loading the lists root.
#[derive(Debug, Default)]
pub struct LoadResult {
    pub table: WordTable,
    pub warnings: Vec<ScanWarning>,
    pub files_loaded: usize,
    pub versions: BTreeSet<u32>,
}

impl LoadResult {
    /// Languages present in the loaded table, in canonical order.
    pub fn languages(&self) -> BTreeSet<Language> {
        self.table
            .values()
            .flat_map(|entries| entries.iter().map(|e| e.language))
            .collect()
    }

    /// Union of a language's words across all versions.
    pub fn words_for(&self, language: Language) -> BTreeSet<String> {
        self.table
            .iter()
            .filter(|(_, entries)| entries.iter().any(|e| e.language == language))
            .map(|(word, _)| word.clone())
            .collect()
    }
}

/// Load every list file under `lists_root`.
///
/// Returns an error only if the root itself is missing or unreadable;
/// anything below that degrades to warnings.
pub fn load_word_lists(lists_root: &Path, ignores: &[Pattern]) -> Result<LoadResult> {
    if !lists_root.is_dir() {
        bail!("lists root not found: {}", lists_root.display());
    }

    let mut result = LoadResult::default();

    let root_pattern = format!("{}/*", lists_root.display());
    let version_dirs = glob::glob(&root_pattern)
        .with_context(|| format!("Invalid lists root path: {}", lists_root.display()))?;

    for dir in version_dirs.flatten() {
        if !dir.is_dir() {
            continue;
        }
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let Ok(version) = name.parse::<u32>() else {
            result.warnings.push(ScanWarning::new(
                dir.display().to_string(),
                "directory name is not a version number, skipped",
            ));
            continue;
        };

        load_version_dir(&dir, version, ignores, &mut result);
        result.versions.insert(version);
    }

    Ok(result)
}

fn load_version_dir(dir: &Path, version: u32, ignores: &[Pattern], result: &mut LoadResult) {
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.warnings.push(ScanWarning::new(
                    dir.display().to_string(),
                    format!("cannot access path: {e}"),
                ));
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "txt") {
            continue;
        }
        let path_str = path.to_string_lossy();
        if ignores.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let Some(language) = Language::from_stem(&stem) else {
            result.warnings.push(ScanWarning::new(
                path_str.to_string(),
                format!("unknown language stem '{stem}', skipped"),
            ));
            continue;
        };

        match load_list_file(path) {
            Ok(lines) => {
                for (line_no, word) in lines {
                    if word.is_empty() {
                        result.warnings.push(ScanWarning::new(
                            path_str.to_string(),
                            format!("empty entry on line {line_no}, skipped"),
                        ));
                        continue;
                    }
                    result
                        .table
                        .entry(word)
                        .or_default()
                        .insert(ListEntry { language, version });
                }
                result.files_loaded += 1;
            }
            Err(e) => {
                result
                    .warnings
                    .push(ScanWarning::new(path_str.to_string(), e.to_string()));
            }
        }
    }
}

/// Read one list file and split it into (line number, entry) pairs.
fn load_list_file(path: &Path) -> Result<Vec<(usize, String)>> {
    let bytes = std::fs::read(path).with_context(|| "failed to read file")?;
    let text = decode_utf16(&bytes)?;
    // One early file shipped with CRLF endings; normalize unconditionally.
    let text = text.replace("\r\n", "\n");
    let text = text.trim_end_matches('\n');
    if text.is_empty() {
        return Ok(Vec::new());
    }
    Ok(text
        .split('\n')
        .enumerate()
        .map(|(i, line)| (i + 1, line.to_string()))
        .collect())
}

/// Decode a UTF-16 byte stream, honoring an optional BOM (LE assumed without).
fn decode_utf16(bytes: &[u8]) -> Result<String> {
    let (little_endian, data) = match bytes {
        [0xFF, 0xFE, rest @ ..] => (true, rest),
        [0xFE, 0xFF, rest @ ..] => (false, rest),
        _ => (true, bytes),
    };
    if data.len() % 2 != 0 {
        bail!("truncated UTF-16 stream (odd byte count)");
    }
    let units = data.chunks_exact(2).map(|pair| {
        if little_endian {
            u16::from_le_bytes([pair[0], pair[1]])
        } else {
            u16::from_be_bytes([pair[0], pair[1]])
        }
    });
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|_| anyhow!("invalid UTF-16 (unpaired surrogate)"))
}
