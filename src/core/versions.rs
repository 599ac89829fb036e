//! Version set helpers for the wiki presence table.
//!
//! List directories are named after the firmware release that shipped them.
//! A handful of releases were never distributed publicly, so a word present
//! in the releases on both sides of such a gap was necessarily present in
//! the unreleased ones too. Range rendering fills those in.

use std::collections::BTreeSet;

/// Inclusive runs of versions that were never publicly released.
/// A run is filled in when the versions on both sides of it are present.
const UNRELEASED_RUNS: &[(u32, u32)] = &[(6, 9)];

/// Individual versions that were never publicly released.
const UNRELEASED_SINGLES: &[u32] = &[15, 22, 36, 56, 58, 61];

/// Insert unreleased versions whose neighbors on both sides are present.
pub fn fill_unreleased(versions: &mut BTreeSet<u32>) {
    for &(lo, hi) in UNRELEASED_RUNS {
        if versions.contains(&(lo - 1)) && versions.contains(&(hi + 1)) {
            versions.extend(lo..=hi);
        }
    }
    for &v in UNRELEASED_SINGLES {
        if versions.contains(&(v - 1)) && versions.contains(&(v + 1)) {
            versions.insert(v);
        }
    }
}

/// Render a version set as a comma-separated list of ranges (`"5–10, 13"`).
///
/// Unreleased versions are filled in first, so `[5, 10]` renders as a single
/// `5–10` range rather than two isolated versions.
pub fn format_version_ranges<I: IntoIterator<Item = u32>>(versions: I) -> String {
    let mut versions: BTreeSet<u32> = versions.into_iter().collect();
    if versions.is_empty() {
        return String::new();
    }
    fill_unreleased(&mut versions);

    let mut ranges: Vec<(u32, u32)> = Vec::new();
    let mut iter = versions.into_iter();
    let first = iter.next().expect("set is non-empty");
    let (mut start, mut prev) = (first, first);
    for v in iter {
        if prev + 1 != v {
            ranges.push((start, prev));
            start = v;
        }
        prev = v;
    }
    ranges.push((start, prev));

    ranges
        .into_iter()
        .map(|(start, end)| {
            if start == end {
                start.to_string()
            } else {
                format!("{start}\u{2013}{end}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
