//! The `key-value` layout.
//!
//! ```text
//! <ignored> | en     | fr
//! title     | Hello  | Bonjour
//! ```
//!
//! produces `{ en: { title: "Hello" }, fr: { title: "Bonjour" } }`.

use crate::{
    config::{Configuration, LayoutConvention},
    error::Error,
};

use super::{ParseResult, resolve_value, split_header};

/// Builds a language → key → value tree.
pub fn parse(config: &Configuration, grid: &[Vec<String>]) -> Result<ParseResult, Error> {
    let Some((languages, rows)) = split_header(grid, LayoutConvention::KeyValue)? else {
        return Ok(ParseResult::default());
    };

    let mut result = ParseResult::default();
    for row in rows {
        let Some((key, values)) = row.split_first() else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        for (index, language) in languages.iter().enumerate() {
            let value = resolve_value(
                config,
                &mut result.missing_keys,
                language,
                key,
                values.get(index),
            );
            result.tree.insert_value(language, key, value);
        }
    }
    Ok(result)
}
