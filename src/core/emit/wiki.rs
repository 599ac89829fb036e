//! The wikitext presence table.
//!
//! One row per word, split into two column pairs: the languages and version
//! ranges for the current hardware generation (version 19 onwards) and for
//! the legacy one (18 and earlier). Rows are ordered so the most recently
//! touched words come first.

use std::collections::BTreeSet;

use crate::core::{
    language::Language,
    loader::{ListEntry, WordTable},
    versions::format_version_ranges,
};

/// First firmware version of the current hardware generation.
pub const CURRENT_GEN_MIN_VERSION: u32 = 19;

pub fn render_wiki(table: &WordTable) -> String {
    let mut rows: Vec<(String, u32)> = Vec::new();
    for (word, entries) in table {
        let versions: BTreeSet<u32> = entries.iter().map(|e| e.version).collect();
        let Some(&latest) = versions.iter().next_back() else {
            continue;
        };

        let current_langs = language_cell(entries, |v| v >= CURRENT_GEN_MIN_VERSION);
        let current_versions = format_version_ranges(
            versions.range(CURRENT_GEN_MIN_VERSION..).copied(),
        );
        let legacy_langs = language_cell(entries, |v| v < CURRENT_GEN_MIN_VERSION);
        let legacy_versions = format_version_ranges(
            versions.range(..CURRENT_GEN_MIN_VERSION).copied(),
        );

        let cells = [
            format!("|-\n| <nowiki>{word}</nowiki>"),
            current_langs,
            current_versions,
            legacy_langs,
            legacy_versions,
        ];
        let row = cells.join(" || ").replace("  ", " ");
        let row = format!("{}\n", row.trim_end_matches(' '));
        rows.push((row, latest));
    }

    // Stable sort: ties keep the word order of the table iteration.
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.into_iter().map(|(row, _)| row).collect()
}

/// Comma-joined codes of the languages containing the word in any version
/// accepted by `in_gen`, canonical order.
fn language_cell(entries: &BTreeSet<ListEntry>, in_gen: impl Fn(u32) -> bool) -> String {
    Language::ALL
        .iter()
        .filter(|&&language| {
            entries
                .iter()
                .any(|e| e.language == language && in_gen(e.version))
        })
        .map(|language| language.code())
        .collect::<Vec<_>>()
        .join(", ")
}
