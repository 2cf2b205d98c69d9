//! Output formats.
//!
//! Each module provides a unit `Format` implementing
//! [`Serializer`](crate::traits::Serializer); [`serializer_for`] maps an
//! [`OutputFormat`] to it.

pub mod android_strings;
pub mod json;
pub mod strings;

pub use android_strings::Format as AndroidStringsFormat;
pub use json::Format as JsonFormat;
pub use strings::Format as StringsFormat;

use crate::{config::OutputFormat, traits::Serializer};

/// Returns the serializer writing `format`.
pub fn serializer_for(format: OutputFormat) -> &'static dyn Serializer {
    match format {
        OutputFormat::Json => &JsonFormat,
        OutputFormat::Ios => &StringsFormat,
        OutputFormat::Android => &AndroidStringsFormat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializer_for_file_names() {
        assert_eq!(serializer_for(OutputFormat::Json).file_name("en"), "en.json");
        assert_eq!(
            serializer_for(OutputFormat::Ios).file_name("en"),
            "Localizable.strings"
        );
        assert_eq!(
            serializer_for(OutputFormat::Android).file_name("en"),
            "strings.xml"
        );
    }
}
