//! Plain JSON output: one `<key>.json` object per leaf, pretty-printed with
//! two-space indentation, keys in tree order.

use crate::{error::Error, traits::Serializer, tree::Leaf};

#[derive(Debug, Clone, Copy, Default)]
pub struct Format;

impl Serializer for Format {
    fn file_name(&self, key: &str) -> String {
        format!("{key}.json")
    }

    fn serialize(&self, leaf: &Leaf) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(leaf)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_pretty_printed_in_order() {
        let mut leaf = Leaf::new();
        leaf.insert("key".to_string(), "valueEN".to_string());
        leaf.insert("first_name".to_string(), "Firstname".to_string());
        leaf.insert("quote".to_string(), "Say \"hi\"".to_string());
        assert_eq!(
            Format.serialize(&leaf).unwrap(),
            "{\n  \"key\": \"valueEN\",\n  \"first_name\": \"Firstname\",\n  \"quote\": \"Say \\\"hi\\\"\"\n}"
        );
    }

    #[test]
    fn test_directory_is_prefix() {
        assert_eq!(Format.directory("en", &[]), PathBuf::new());
        assert_eq!(
            Format.directory("user", &["fr".to_string()]),
            PathBuf::from("fr")
        );
    }
}
