//! The merged per-language plain-text lists.

use std::collections::BTreeSet;

/// Render a minimized entry set, one entry per line in code-point order.
pub fn render_plain(words: &BTreeSet<String>) -> String {
    words.iter().cloned().collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn entries_joined_sorted() {
        let words: BTreeSet<String> =
            ["zeta", "alpha", "mid"].iter().map(|s| s.to_string()).collect();
        assert_eq!(render_plain(&words), "alpha\nmid\nzeta");
    }

    #[test]
    fn empty_set_renders_empty() {
        assert_eq!(render_plain(&BTreeSet::new()), "");
    }
}
