//! Traits at the two seams of tree serialization: how a leaf becomes a file
//! ([`Serializer`]) and where files go ([`FileSystem`]).

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{error::Error, tree::Leaf};

/// Turns one leaf of the translation tree into one localization file.
///
/// # Example
///
/// ```rust
/// use gridlocale::formats::StringsFormat;
/// use gridlocale::traits::Serializer;
/// use gridlocale::tree::Leaf;
///
/// let mut leaf = Leaf::new();
/// leaf.insert("hello".to_string(), "Bonjour".to_string());
/// assert_eq!(StringsFormat.serialize(&leaf)?, r#""hello"="Bonjour";"#);
/// assert_eq!(StringsFormat.file_name("fr"), "Localizable.strings");
/// # Ok::<(), gridlocale::Error>(())
/// ```
pub trait Serializer {
    /// Name of the file written for the leaf found under `key`.
    fn file_name(&self, key: &str) -> String;

    /// File content for `leaf`.
    fn serialize(&self, leaf: &Leaf) -> Result<String, Error>;

    /// Directory, relative to the output root, for the leaf found under
    /// `key` after descending through `prefix`. Defaults to the prefix path.
    fn directory(&self, key: &str, prefix: &[String]) -> PathBuf {
        let _ = key;
        prefix.iter().collect()
    }
}

/// Where serialized files are written.
pub trait FileSystem {
    /// Creates `path` and all missing parents.
    fn create_dir_all(&mut self, path: &Path) -> Result<(), Error>;

    /// Creates or truncates `path` and writes `contents` to it.
    fn write(&mut self, path: &Path, contents: &str) -> Result<(), Error>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn create_dir_all(&mut self, path: &Path) -> Result<(), Error> {
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<(), Error> {
        fs::write(path, contents)?;
        Ok(())
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &mut F {
    fn create_dir_all(&mut self, path: &Path) -> Result<(), Error> {
        (**self).create_dir_all(path)
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<(), Error> {
        (**self).write(path, contents)
    }
}
