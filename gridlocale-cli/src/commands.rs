use std::path::{Path, PathBuf};

use gridlocale::{
    Configuration, Error, ParseResult, StdFileSystem, parse_grid, read_grid, serialize_tree_with,
};

use crate::display;
use crate::report::{ReportingFileSystem, report_missing_keys};

/// Where the grid and the descriptor come from.
#[derive(clap::Args, Debug, Clone)]
pub struct SourceArgs {
    /// CSV or TSV export of the translation sheet
    #[arg(short, long)]
    pub grid: PathBuf,

    /// Descriptor file (defaults to ./translator.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Loads the descriptor at `path`, or `translator.json` from the current
/// directory.
pub fn load_configuration(path: Option<&Path>) -> Result<Configuration, Error> {
    match path {
        Some(path) => Configuration::read_from(path),
        None => Configuration::discover(std::env::current_dir()?),
    }
}

fn load_and_parse(config: &Configuration, grid: &Path) -> Result<ParseResult, Error> {
    let grid = read_grid(grid)?;
    tracing::debug!(rows = grid.len(), "read grid");
    parse_grid(config, &grid)
}

/// Full run: parse the grid, report missing keys and write every file.
pub fn run_generate_command(source: SourceArgs, output_dir: Option<PathBuf>) -> Result<(), Error> {
    let mut config = load_configuration(source.config.as_deref())?;
    if let Some(output_dir) = output_dir {
        config = config.with_output_dir(output_dir);
    }

    display::info(&format!(
        "Welcome to gridlocale v{}\nUsing descriptor:\n{}\n",
        env!("CARGO_PKG_VERSION"),
        serde_json::to_string_pretty(&config)?
    ));

    let result = load_and_parse(&config, &source.grid)?;
    report_missing_keys(&result.missing_keys)?;

    let mut fs = ReportingFileSystem::new(StdFileSystem, config.output_format());
    serialize_tree_with(&config, &result.tree, &mut fs)?;
    display::success(&format!(
        "✅ Wrote {} file(s) to {}",
        fs.written(),
        config.output_dir().display()
    ));
    Ok(())
}

/// Parses the grid and reports missing keys without writing anything.
///
/// Returns `true` when no translation is missing.
pub fn run_check_command(source: SourceArgs, json: bool) -> Result<bool, Error> {
    let config = load_configuration(source.config.as_deref())?;
    let result = load_and_parse(&config, &source.grid)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.missing_keys)?);
    } else {
        report_missing_keys(&result.missing_keys)?;
    }
    Ok(result.missing_keys.is_empty())
}

/// Prints the parsed tree as JSON.
pub fn run_tree_command(source: SourceArgs) -> Result<(), Error> {
    let config = load_configuration(source.config.as_deref())?;
    let result = load_and_parse(&config, &source.grid)?;
    println!("{}", serde_json::to_string_pretty(&result.tree)?);
    Ok(())
}
