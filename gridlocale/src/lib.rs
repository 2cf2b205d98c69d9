#![forbid(unsafe_code)]
//! Spreadsheet-to-localization-files toolkit.
//!
//! A translation sheet (one row per key, one column per language) is read
//! into a [`Grid`], parsed into a language-rooted [`Tree`] according to the
//! configured [`LayoutConvention`], and written out as JSON, Apple
//! `.strings` or Android `strings.xml` files.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gridlocale::{Configuration, parse_grid, read_grid, serialize_tree};
//!
//! let config = Configuration::discover(".")?;
//! let grid = read_grid("translations.csv")?;
//! let result = parse_grid(&config, &grid)?;
//! for (language, keys) in result.missing_keys.iter() {
//!     eprintln!("{language}: {} untranslated", keys.len());
//! }
//! serialize_tree(&config, &result.tree)?;
//! # Ok::<(), gridlocale::Error>(())
//! ```
//!
//! # Layouts
//!
//! - **`key-value`**: header `[_, lang...]`, rows `[key, value...]`.
//! - **`domain-key-value`**: header `[_, _, lang...]`, rows
//!   `[domain, key, value...]`; a blank domain repeats the previous one.
//!
//! # Output formats
//!
//! - **`json`**: `<lang>.json` (or `<lang>/<domain>.json`).
//! - **`ios`**: `<lang>.lproj/Localizable.strings`.
//! - **`android`**: `values[-<lang>]/strings.xml`.

pub mod config;
pub mod error;
pub mod formats;
pub mod grid;
pub mod missing_keys;
pub mod parsers;
pub mod serializer;
pub mod traits;
pub mod tree;

// Re-export most used types for easy consumption
pub use crate::{
    config::{Configuration, LayoutConvention, OutputFormat},
    error::Error,
    grid::{Grid, read_grid, read_grid_from},
    missing_keys::MissingKeys,
    parsers::{ParseResult, parse_grid},
    serializer::{serialize_tree, serialize_tree_with},
    traits::{FileSystem, StdFileSystem},
    tree::{Leaf, Tree, TreeNode},
};
