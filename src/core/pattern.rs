//! Classification of bad-word entries.
//!
//! An entry denotes a full-string match: anchors are implicit where absent
//! and wildcards are an explicit `.*`. Entries without regex metacharacters
//! beyond `.*` and the anchors are "simple" and fall into four shapes that
//! can be compared with plain string operations; everything else is
//! "complicated" and handled by the pattern automaton.

/// Placeholder only a wildcard can match, used when probing a simple
/// pattern against a complicated one. Private-use codepoint, guaranteed
/// absent from real list content.
pub const WILDCARD_PROBE: char = '\u{F000}';

/// True if the entry needs full regex treatment.
///
/// `*` is only simple as part of `.*`; a repetition of anything else (or of
/// an escaped dot) changes the language and goes through the automaton.
pub fn is_complicated(pattern: &str) -> bool {
    if pattern.chars().any(|c| matches!(c, '[' | ']' | '(' | ')' | '|' | '?')) {
        return true;
    }
    let chars: Vec<char> = pattern.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c == '*' {
            let preceded_by_dot = i >= 1
                && chars[i - 1] == '.'
                && !(i >= 2 && chars[i - 2] == '\\');
            if !preceded_by_dot {
                return true;
            }
        }
    }
    false
}

/// How a simple pattern's ends are anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleShape {
    /// `.*X.*`: matches anywhere.
    Anywhere,
    /// `^X.*` (or `X.*`): matches at the start.
    Prefix,
    /// `.*X$`: matches at the end.
    Suffix,
    /// `^X$` (or bare `X`): matches the whole string.
    Exact,
}

/// A simple pattern, decomposed into its shape and literal core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplePattern {
    pub raw: String,
    pub shape: SimpleShape,
    pub core: String,
}

impl SimplePattern {
    /// Decompose a simple pattern. The core keeps escapes and any interior
    /// `.`/`.*` verbatim; simple-vs-simple comparison is literal, matching
    /// how the lists were authored.
    pub fn classify(raw: &str) -> SimplePattern {
        let (open_left, rest) = if let Some(rest) = raw.strip_prefix(".*") {
            (true, rest)
        } else {
            (false, raw.strip_prefix('^').unwrap_or(raw))
        };
        let (open_right, core) = if let Some(core) = strip_unescaped_suffix(rest, ".*") {
            (true, core)
        } else {
            (false, strip_unescaped_suffix(rest, "$").unwrap_or(rest))
        };
        let shape = match (open_left, open_right) {
            (true, true) => SimpleShape::Anywhere,
            (false, true) => SimpleShape::Prefix,
            (true, false) => SimpleShape::Suffix,
            (false, false) => SimpleShape::Exact,
        };
        SimplePattern {
            raw: raw.to_string(),
            shape,
            core: core.to_string(),
        }
    }

    /// Build the probe string for testing against a complicated pattern:
    /// anchors dropped, escapes resolved, every `.*` replaced by a
    /// [`WILDCARD_PROBE`] so only a genuine wildcard on the other side can
    /// cover it.
    pub fn probe(&self) -> String {
        let trimmed = self.raw.strip_prefix('^').unwrap_or(&self.raw);
        let trimmed = strip_unescaped_suffix(trimmed, "$").unwrap_or(trimmed);
        let mut out = String::with_capacity(trimmed.len());
        let mut chars = trimmed.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    if let Some(&next) = chars.peek() {
                        out.push(next);
                        chars.next();
                    }
                }
                '.' if chars.peek() == Some(&'*') => {
                    chars.next();
                    out.push(WILDCARD_PROBE);
                }
                _ => out.push(c),
            }
        }
        out
    }
}

/// Strip `suffix` unless its first character is escaped (`\$`, `\.*`).
pub(crate) fn strip_unescaped_suffix<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let core = s.strip_suffix(suffix)?;
    let escapes = core.chars().rev().take_while(|&c| c == '\\').count();
    if escapes % 2 == 1 {
        return None;
    }
    Some(core)
}
