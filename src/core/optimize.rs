//! Redundancy removal for merged language lists.
//!
//! A pattern is redundant when another pattern in the same list already
//! matches everything it matches. Three passes, cheapest first:
//!
//! 1. simple vs simple: string containment on the classified cores
//! 2. simple vs complicated: probe-string matching with the regex engine
//! 3. complicated vs complicated: exact language inclusion on the
//!    automaton, parallelized (pairwise inclusion is the expensive part)
//!
//! Equivalent but textually distinct patterns keep one canonical form: the
//! shortest, ties broken lexicographically.

use std::collections::BTreeSet;

use rayon::prelude::*;
use regex::Regex;

use crate::core::{
    loader::ScanWarning,
    nfa::PatternNfa,
    pattern::{SimplePattern, SimpleShape, is_complicated},
};

/// One removed pattern and the survivor that covers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub pattern: String,
    pub covered_by: String,
}

#[derive(Debug, Default)]
pub struct MinimizeResult {
    pub kept: BTreeSet<String>,
    pub removals: Vec<Removal>,
    pub warnings: Vec<ScanWarning>,
}

/// Canonical preference order: shorter first, then lexicographic.
fn pattern_key(s: &str) -> (usize, &str) {
    (s.chars().count(), s)
}

/// Minimize one language's merged entry set.
pub fn minimize(entries: &BTreeSet<String>) -> MinimizeResult {
    let mut result = MinimizeResult::default();

    let mut simple: Vec<SimplePattern> = Vec::new();
    let mut complicated: Vec<String> = Vec::new();
    for entry in entries {
        if is_complicated(entry) {
            complicated.push(entry.clone());
        } else {
            simple.push(SimplePattern::classify(entry));
        }
    }

    let (mut kept_simple, mut removals) = minimize_simple(&simple);

    if !complicated.is_empty() {
        let complicated_regexes: Vec<(String, Regex)> = complicated
            .iter()
            .filter_map(|raw| {
                Regex::new(&format!("^(?:{raw})$"))
                    .ok()
                    .map(|re| (raw.clone(), re))
            })
            .collect();

        kept_simple.retain(|p| {
            let probe = p.probe();
            match complicated_regexes
                .iter()
                .find(|(_, re)| re.is_match(&probe))
            {
                Some((raw, _)) => {
                    removals.push(Removal {
                        pattern: p.raw.clone(),
                        covered_by: raw.clone(),
                    });
                    false
                }
                None => true,
            }
        });

        let (kept_complicated, complicated_removals, warnings) =
            minimize_complicated(&complicated);
        removals.extend(complicated_removals);
        result.warnings = warnings;
        result.kept.extend(kept_complicated);
    }

    result.kept.extend(kept_simple.into_iter().map(|p| p.raw));
    result.removals = removals;
    result
}

/// Pass 1: remove simple patterns covered by other simple patterns.
fn minimize_simple(simple: &[SimplePattern]) -> (Vec<SimplePattern>, Vec<Removal>) {
    // Canonical raw form per (shape, core); duplicates fold into it.
    let mut anywhere = CoreIndex::default();
    let mut prefix = CoreIndex::default();
    let mut suffix = CoreIndex::default();
    let mut exact = CoreIndex::default();
    for p in simple {
        index_for(p.shape, &mut anywhere, &mut prefix, &mut suffix, &mut exact).add(p);
    }

    let mut kept = Vec::new();
    let mut removals = Vec::new();
    for p in simple {
        let index = match p.shape {
            SimpleShape::Anywhere => &anywhere,
            SimpleShape::Prefix => &prefix,
            SimpleShape::Suffix => &suffix,
            SimpleShape::Exact => &exact,
        };
        let canonical = index.canonical(&p.core);
        if canonical != p.raw {
            removals.push(Removal {
                pattern: p.raw.clone(),
                covered_by: canonical.to_string(),
            });
            continue;
        }

        let contains = |core: &str, sub: &str| core.contains(sub);
        let starts = |core: &str, sub: &str| core.starts_with(sub);
        let ends = |core: &str, sub: &str| core.ends_with(sub);
        let covered_by = match p.shape {
            SimpleShape::Anywhere => anywhere.find(&p.core, true, contains),
            SimpleShape::Prefix => anywhere
                .find(&p.core, false, contains)
                .or_else(|| prefix.find(&p.core, true, starts)),
            SimpleShape::Suffix => anywhere
                .find(&p.core, false, contains)
                .or_else(|| suffix.find(&p.core, true, ends)),
            SimpleShape::Exact => anywhere
                .find(&p.core, false, contains)
                .or_else(|| prefix.find(&p.core, false, starts))
                .or_else(|| suffix.find(&p.core, false, ends)),
        };
        match covered_by {
            Some(raw) => removals.push(Removal {
                pattern: p.raw.clone(),
                covered_by: raw.to_string(),
            }),
            None => kept.push(p.clone()),
        }
    }
    (kept, removals)
}

fn index_for<'a>(
    shape: SimpleShape,
    anywhere: &'a mut CoreIndex,
    prefix: &'a mut CoreIndex,
    suffix: &'a mut CoreIndex,
    exact: &'a mut CoreIndex,
) -> &'a mut CoreIndex {
    match shape {
        SimpleShape::Anywhere => anywhere,
        SimpleShape::Prefix => prefix,
        SimpleShape::Suffix => suffix,
        SimpleShape::Exact => exact,
    }
}

/// Cores of one shape, each mapped to its canonical raw pattern.
#[derive(Debug, Default)]
struct CoreIndex {
    cores: std::collections::BTreeMap<String, String>,
}

impl CoreIndex {
    fn add(&mut self, p: &SimplePattern) {
        self.cores
            .entry(p.core.clone())
            .and_modify(|raw| {
                if pattern_key(&p.raw) < pattern_key(raw) {
                    *raw = p.raw.clone();
                }
            })
            .or_insert_with(|| p.raw.clone());
    }

    fn canonical(&self, core: &str) -> &str {
        &self.cores[core]
    }

    /// First core that `relate`s to `core` (substring, prefix, suffix).
    /// Within a shape the cover must be strictly shorter so the check stays
    /// asymmetric; across shapes an equal core is a genuine cover
    /// (`.*bad.*` covers `^bad$`).
    fn find(
        &self,
        core: &str,
        strict: bool,
        relate: impl Fn(&str, &str) -> bool,
    ) -> Option<&str> {
        self.cores
            .iter()
            .find(|(sub, _)| {
                let shorter = if strict {
                    sub.len() < core.len()
                } else {
                    sub.len() <= core.len()
                };
                shorter && relate(core, sub)
            })
            .map(|(_, raw)| raw.as_str())
    }
}

/// Pass 3: remove complicated patterns covered by other complicated ones.
fn minimize_complicated(
    complicated: &[String],
) -> (Vec<String>, Vec<Removal>, Vec<ScanWarning>) {
    let mut warnings = Vec::new();
    let mut parsed: Vec<(String, PatternNfa)> = Vec::new();
    let mut kept_verbatim: Vec<String> = Vec::new();
    for raw in complicated {
        match PatternNfa::parse(raw) {
            Ok(nfa) => parsed.push((raw.clone(), nfa)),
            Err(e) => {
                warnings.push(ScanWarning::new(
                    raw.clone(),
                    format!("unsupported pattern syntax ({e}), kept verbatim"),
                ));
                kept_verbatim.push(raw.clone());
            }
        }
    }

    let removals: Vec<Removal> = parsed
        .par_iter()
        .filter_map(|(raw, nfa)| {
            let sample = nfa.shortest_member();
            for (other_raw, other) in &parsed {
                if other_raw == raw {
                    continue;
                }
                // A superset must at least match our shortest member.
                if let Some(sample) = &sample {
                    if !other.matches(sample) {
                        continue;
                    }
                }
                if nfa.is_subset_of(other) {
                    let keep_other = !other.is_subset_of(nfa)
                        || pattern_key(other_raw) < pattern_key(raw);
                    if keep_other {
                        return Some(Removal {
                            pattern: raw.clone(),
                            covered_by: other_raw.clone(),
                        });
                    }
                }
            }
            None
        })
        .collect();

    let removed: BTreeSet<&str> = removals.iter().map(|r| r.pattern.as_str()).collect();
    let mut kept = kept_verbatim;
    kept.extend(
        parsed
            .iter()
            .map(|(raw, _)| raw.clone())
            .filter(|raw| !removed.contains(raw.as_str())),
    );
    (kept, removals, warnings)
}
