//! Loading a sheet export from disk.
//!
//! The parsers only need a [`Grid`]: rows of string cells, header first.
//! This module reads one from a CSV or TSV export of the sheet. Rows may be
//! ragged, since sheet exports drop trailing empty cells.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::Error;

/// Row-major cells, header row first.
pub type Grid = Vec<Vec<String>>;

/// Reads a grid from delimited text.
pub fn read_grid_from<R: BufRead>(reader: R, delimiter: u8) -> Result<Grid, Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut grid = Grid::new();
    for record in rdr.records() {
        let record = record?;
        grid.push(record.iter().map(str::to_string).collect());
    }
    Ok(grid)
}

/// Picks the delimiter from the file extension: tab for `.tsv`, comma
/// otherwise.
pub fn delimiter_for_path<P: AsRef<Path>>(path: P) -> u8 {
    match path
        .as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("tsv") | Some("tab") => b'\t',
        _ => b',',
    }
}

/// Reads a grid from a CSV or TSV file. UTF-16 exports with a byte order
/// mark are decoded; a UTF-8 BOM is stripped.
pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Grid, Error> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .bom_override(true)
        .build(file);
    read_grid_from(BufReader::new(decoder), delimiter_for_path(path))
}
