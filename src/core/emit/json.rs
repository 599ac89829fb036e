//! The compiled JSON artifact: word → language → versions.

use serde_json::{Map, Value};

use crate::core::{language::Language, loader::WordTable};

/// Render the word table as compact JSON.
///
/// Words are emitted in code-point order, languages in canonical order,
/// versions ascending. Non-ASCII content stays raw UTF-8.
pub fn render_json(table: &WordTable) -> String {
    let mut root = Map::new();
    for (word, entries) in table {
        let mut languages = Map::new();
        for language in Language::ALL {
            let versions: Vec<Value> = entries
                .iter()
                .filter(|e| e.language == language)
                .map(|e| Value::from(e.version))
                .collect();
            if !versions.is_empty() {
                languages.insert(language.code().to_string(), Value::Array(versions));
            }
        }
        root.insert(word.clone(), Value::Object(languages));
    }
    Value::Object(root).to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::loader::ListEntry;

    fn table(rows: &[(&str, &[(Language, u32)])]) -> WordTable {
        rows.iter()
            .map(|(word, entries)| {
                let set: BTreeSet<ListEntry> = entries
                    .iter()
                    .map(|&(language, version)| ListEntry { language, version })
                    .collect();
                (word.to_string(), set)
            })
            .collect()
    }

    #[test]
    fn word_present_in_two_versions() {
        let table = table(&[("foo", &[(Language::Een, 1), (Language::Een, 2)])]);
        assert_eq!(render_json(&table), r#"{"foo":{"een":[1,2]}}"#);
    }

    #[test]
    fn languages_follow_canonical_order() {
        // Common sorts last even though "common" < "jja" alphabetically.
        let table = table(&[(
            "x",
            &[(Language::Common, 3), (Language::Jja, 1), (Language::Pen, 2)],
        )]);
        assert_eq!(
            render_json(&table),
            r#"{"x":{"jja":[1],"pen":[2],"common":[3]}}"#
        );
    }

    #[test]
    fn words_sorted_by_code_point() {
        let table = table(&[
            ("zzz", &[(Language::Jja, 1)]),
            ("abc", &[(Language::Jja, 1)]),
        ]);
        assert_eq!(
            render_json(&table),
            r#"{"abc":{"jja":[1]},"zzz":{"jja":[1]}}"#
        );
    }

    #[test]
    fn non_ascii_words_stay_raw() {
        let table = table(&[("b\u{00e4}d", &[(Language::Pde, 4)])]);
        insta::assert_snapshot!(render_json(&table), @r#"{"bäd":{"pde":[4]}}"#);
    }
}
