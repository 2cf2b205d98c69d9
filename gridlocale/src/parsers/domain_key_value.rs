//! The `domain-key-value` layout.
//!
//! ```text
//! <ignored> | <ignored> | en    | fr
//! common    | ok        | OK    | D'accord
//!           | cancel    | Cancel| Annuler
//! user      | name      | Name  | Nom
//! ```
//!
//! A blank domain cell keeps the domain of the rows above, so the example
//! produces `{ en: { common: { ok, cancel }, user: { name } }, fr: ... }`.
//! Rows without a key are skipped entirely, domain cell included, and a
//! domain is used exactly as written in its cell.

use crate::{
    config::{Configuration, LayoutConvention},
    error::Error,
};

use super::{ParseResult, resolve_value, split_header};

/// Builds a language → domain → key → value tree.
pub fn parse(config: &Configuration, grid: &[Vec<String>]) -> Result<ParseResult, Error> {
    let Some((languages, rows)) = split_header(grid, LayoutConvention::DomainKeyValue)? else {
        return Ok(ParseResult::default());
    };

    let mut result = ParseResult::default();
    let mut domain = String::new();
    for row in rows {
        let Some(key) = row.get(1).filter(|k| !k.is_empty()) else {
            continue;
        };
        // Only keyed rows move the domain; the cell is kept as written.
        if let Some(cell) = row.first().filter(|c| !c.trim().is_empty()) {
            domain.clone_from(cell);
        }
        let values = row.get(2..).unwrap_or_default();
        for (index, language) in languages.iter().enumerate() {
            let value = resolve_value(
                config,
                &mut result.missing_keys,
                language,
                key,
                values.get(index),
            );
            result
                .tree
                .insert_domain_value(language, &domain, key, value);
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &[&str] = &["domains", "key", "en", "fr", "de", "it"];

    fn config() -> Configuration {
        Configuration::new("test", "string", "string")
            .with_layout(LayoutConvention::DomainKeyValue)
            .with_empty_value_template("empty")
    }

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    fn keys<'a>(result: &'a ParseResult, language: &str, domain: &str) -> Vec<&'a str> {
        result
            .tree
            .get(language)
            .and_then(|node| node.child(domain))
            .and_then(|node| node.as_leaf())
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn test_empty_grid() {
        let result = parse(&config(), &[]).unwrap();
        assert!(result.tree.is_empty());
        assert!(result.missing_keys.is_empty());
    }

    #[test]
    fn test_header_only() {
        let result = parse(&config(), &grid(&[HEADER])).unwrap();
        assert!(result.tree.is_empty());
    }

    #[test]
    fn test_header_gives_languages() {
        let result = parse(
            &config(),
            &grid(&[HEADER, &["common", "key", "keyEn", "keyFr", "keyDe", "keyIt"]]),
        )
        .unwrap();
        assert_eq!(
            result.tree.languages().collect::<Vec<_>>(),
            vec!["en", "fr", "de", "it"]
        );
        assert_eq!(result.tree.lookup("en", &["common"], "key"), Some("keyEn"));
        assert_eq!(result.tree.lookup("de", &["common"], "key"), Some("keyDe"));
    }

    #[test]
    fn test_blank_values_use_template_and_are_reported() {
        let result = parse(
            &config(),
            &grid(&[
                HEADER,
                &["common", "key", "keyEn", "keyFr", "keyDe", "keyIt"],
                &["common", "key2", "keyEn", "", "", "keyIt"],
            ]),
        )
        .unwrap();
        assert_eq!(result.tree.lookup("fr", &["common"], "key2"), Some("empty"));
        assert_eq!(result.tree.lookup("it", &["common"], "key2"), Some("keyIt"));
        assert_eq!(result.missing_keys.get("fr").unwrap(), ["key2"]);
        assert_eq!(result.missing_keys.get("de").unwrap(), ["key2"]);
        assert!(result.missing_keys.get("en").is_none());
    }

    #[test]
    fn test_template_interpolation() {
        let config = config().with_empty_value_template("translate($0,$1)");
        let result = parse(
            &config,
            &grid(&[HEADER, &["common", "key2", "keyEn", "", "", "keyIt"]]),
        )
        .unwrap();
        assert_eq!(
            result.tree.lookup("fr", &["common"], "key2"),
            Some("translate(key2,fr)")
        );
    }

    #[test]
    fn test_extra_columns_ignored() {
        let result = parse(
            &config(),
            &grid(&[
                HEADER,
                &["common", "key2", "keyEn", "", "", "keyIt", "keyEs"],
            ]),
        )
        .unwrap();
        assert_eq!(result.tree.len(), 4);
        assert!(result.tree.get("es").is_none());
    }

    #[test]
    fn test_domain_carries_forward() {
        let result = parse(
            &config(),
            &grid(&[
                HEADER,
                &["common", "key", "keyEn", "keyFr ", "keyDe", "keyIt"],
                &["", "key2", "keyEn", " ", " ", "keyIt "],
                &["  ", "key3", "key3En", "key3Fr", "key3De ", "key3It "],
            ]),
        )
        .unwrap();
        assert_eq!(keys(&result, "en", "common"), vec!["key", "key2", "key3"]);
        assert_eq!(result.tree.lookup("de", &["common"], "key3"), Some("key3De"));
        assert_eq!(result.tree.lookup("fr", &["common"], "key2"), Some("empty"));
    }

    #[test]
    fn test_several_domains() {
        let result = parse(
            &config(),
            &grid(&[
                HEADER,
                &["common", "key", "keyEn", "keyFr ", "keyDe", "keyIt"],
                &["", "key2", "keyEn", " ", " ", "keyIt "],
                &["user", "key4", "key4En", "key4Fr", "key4De ", "key4It "],
                &["", "name", "name", "nom", "name ", "nome "],
            ]),
        )
        .unwrap();
        assert_eq!(keys(&result, "fr", "common"), vec!["key", "key2"]);
        assert_eq!(keys(&result, "fr", "user"), vec!["key4", "name"]);
        assert_eq!(result.tree.lookup("it", &["user"], "name"), Some("nome"));
    }

    #[test]
    fn test_returning_to_a_domain_merges() {
        let result = parse(
            &config(),
            &grid(&[
                HEADER,
                &["common", "a", "A", "A", "A", "A"],
                &["user", "b", "B", "B", "B", "B"],
                &["common", "c", "C", "C", "C", "C"],
            ]),
        )
        .unwrap();
        assert_eq!(keys(&result, "en", "common"), vec!["a", "c"]);
        assert_eq!(keys(&result, "en", "user"), vec!["b"]);
    }

    #[test]
    fn test_keyless_row_leaves_domain_unchanged() {
        let result = parse(
            &config(),
            &grid(&[
                HEADER,
                &["common", "a", "A", "A", "A", "A"],
                &["user", "", "ignored", "", "", ""],
                &["", "b", "B", "B", "B", "B"],
            ]),
        )
        .unwrap();
        assert_eq!(keys(&result, "en", "common"), vec!["a", "b"]);
        assert!(result.tree.lookup("en", &["user"], "b").is_none());
        assert!(result.missing_keys.is_empty());
    }

    #[test]
    fn test_domain_cell_kept_as_written() {
        let result = parse(
            &config(),
            &grid(&[
                HEADER,
                &["common", "a", "A", "A", "A", "A"],
                &[" padded ", "c", "C", "C", "C", "C"],
                &["  ", "d", "D", "D", "D", "D"],
            ]),
        )
        .unwrap();
        assert_eq!(keys(&result, "en", " padded "), vec!["c", "d"]);
        assert!(result.tree.get("en").unwrap().child("padded").is_none());
    }

    #[test]
    fn test_rows_before_any_domain_use_empty_domain() {
        let result = parse(&config(), &grid(&[HEADER, &["", "orphan", "O", "O", "O", "O"]])).unwrap();
        assert_eq!(result.tree.lookup("en", &[""], "orphan"), Some("O"));
    }
}
