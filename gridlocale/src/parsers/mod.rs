//! Grid-to-tree parsers.
//!
//! Each [`LayoutConvention`] has its own parser; [`parse_grid`] picks the one
//! named by the configuration. Both return a [`ParseResult`]: the translation
//! [`Tree`] and the [`MissingKeys`] that were filled from the empty-value
//! template.

pub mod domain_key_value;
pub mod key_value;

use unic_langid::LanguageIdentifier;

use crate::{
    config::{Configuration, LayoutConvention},
    error::Error,
    missing_keys::MissingKeys,
    tree::Tree,
};

/// Output of one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    pub tree: Tree,
    pub missing_keys: MissingKeys,
}

/// Parses `grid` with the layout selected by `config`.
pub fn parse_grid(config: &Configuration, grid: &[Vec<String>]) -> Result<ParseResult, Error> {
    let result = match config.layout() {
        LayoutConvention::KeyValue => key_value::parse(config, grid)?,
        LayoutConvention::DomainKeyValue => domain_key_value::parse(config, grid)?,
    };
    tracing::debug!(
        layout = %config.layout(),
        languages = result.tree.len(),
        missing = result.missing_keys.total(),
        "parsed grid"
    );
    Ok(result)
}

/// Splits the grid into the header's language codes and the data rows.
///
/// Returns `None` for an empty grid. A header without the layout's label
/// columns is a structural error.
fn split_header(
    grid: &[Vec<String>],
    layout: LayoutConvention,
) -> Result<Option<(&[String], &[Vec<String>])>, Error> {
    let Some((header, rows)) = grid.split_first() else {
        return Ok(None);
    };
    let labels = layout.label_columns();
    if header.len() < labels {
        return Err(Error::structural(format!(
            "{layout} header needs at least {labels} label column(s), found {} cell(s)",
            header.len()
        )));
    }
    let languages = &header[labels..];
    for language in languages {
        if language.parse::<LanguageIdentifier>().is_err() {
            tracing::warn!(language = %language, "header cell is not a valid language code");
        }
    }
    Ok(Some((languages, rows)))
}

/// Trimmed cell text, or the rendered empty-value template when the cell is
/// absent or blank. Templated values are recorded in `missing_keys`.
fn resolve_value(
    config: &Configuration,
    missing_keys: &mut MissingKeys,
    language: &str,
    key: &str,
    cell: Option<&String>,
) -> String {
    match cell.map(|c| c.trim()).filter(|v| !v.is_empty()) {
        Some(value) => value.to_string(),
        None => {
            missing_keys.record(language, key);
            config.render_empty_value(key, language)
        }
    }
}
