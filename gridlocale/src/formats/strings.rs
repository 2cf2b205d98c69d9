//! Apple `.strings` output.
//!
//! Every leaf becomes `<lang>.lproj/Localizable.strings` holding one
//! `"key"="value";` line per entry. Lines are joined with `\n` and the file
//! has no trailing newline. Values are written verbatim.

use std::path::PathBuf;

use crate::{error::Error, traits::Serializer, tree::Leaf};

#[derive(Debug, Clone, Copy, Default)]
pub struct Format;

impl Serializer for Format {
    fn file_name(&self, _key: &str) -> String {
        "Localizable.strings".to_string()
    }

    fn serialize(&self, leaf: &Leaf) -> Result<String, Error> {
        Ok(leaf
            .iter()
            .map(|(key, value)| format!("\"{key}\"=\"{value}\";"))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn directory(&self, key: &str, prefix: &[String]) -> PathBuf {
        let mut dir: PathBuf = prefix.iter().collect();
        dir.push(format!("{key}.lproj"));
        dir
    }
}
