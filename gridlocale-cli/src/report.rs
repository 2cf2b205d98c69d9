//! User-facing reporting: the missing-key summary and per-file progress.

use std::path::Path;

use gridlocale::{Error, FileSystem, MissingKeys, OutputFormat};

use crate::display;

/// Builds the missing-key warning, or `None` when nothing is missing.
pub fn missing_keys_message(missing_keys: &MissingKeys) -> Result<Option<String>, Error> {
    if missing_keys.is_empty() {
        return Ok(None);
    }
    Ok(Some(format!(
        "There are missing keys for some languages:\n{}\n",
        serde_json::to_string_pretty(missing_keys)?
    )))
}

/// Prints the missing-key summary.
pub fn report_missing_keys(missing_keys: &MissingKeys) -> Result<(), Error> {
    match missing_keys_message(missing_keys)? {
        Some(message) => display::warning(&message),
        None => display::success("No missing key found. Good Job !"),
    }
    Ok(())
}

/// Wraps a [`FileSystem`] and announces every file before it is written.
pub struct ReportingFileSystem<F> {
    inner: F,
    format: OutputFormat,
    written: usize,
}

impl<F: FileSystem> ReportingFileSystem<F> {
    pub fn new(inner: F, format: OutputFormat) -> Self {
        Self {
            inner,
            format,
            written: 0,
        }
    }

    /// Number of files written so far.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl<F: FileSystem> FileSystem for ReportingFileSystem<F> {
    fn create_dir_all(&mut self, path: &Path) -> Result<(), Error> {
        self.inner.create_dir_all(path)
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<(), Error> {
        display::success(&format!(
            "Creating {} with format: {}",
            path.display(),
            self.format
        ));
        self.inner.write(path, contents)?;
        self.written += 1;
        Ok(())
    }
}
