//! All error types for the gridlocale crate.
//!
//! These are returned from every fallible operation (configuration, grid
//! loading, parsing and serialization). A missing translation is never an
//! error: it is filled in from the configured template and recorded in
//! [`crate::MissingKeys`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("malformed grid: {0}")]
    StructuralParse(String),

    #[error("unknown format `{0}`")]
    UnknownFormat(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }

    /// Creates a new structural parse error
    pub fn structural(message: impl Into<String>) -> Self {
        Error::StructuralParse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_configuration_error() {
        let error = Error::configuration("Cannot parse outputDir from your descriptor");
        assert_eq!(
            error.to_string(),
            "configuration error: Cannot parse outputDir from your descriptor"
        );
    }

    #[test]
    fn test_structural_error() {
        let error = Error::structural("header row is empty");
        assert_eq!(error.to_string(), "malformed grid: header row is empty");
    }

    #[test]
    fn test_unknown_format_error() {
        let error = Error::UnknownFormat("yaml".to_string());
        assert_eq!(error.to_string(), "unknown format `yaml`");
    }

    #[test]
    fn test_parse_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::from(json_error);
        assert!(error.to_string().contains("parse error"));
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let error = Error::from(io_error);
        assert!(error.to_string().contains("I/O error"));
        assert!(matches!(error, Error::Io(_)));
    }

    #[test]
    fn test_xml_writer_failure_is_io() {
        use quick_xml::{
            Writer,
            events::{BytesStart, Event},
        };

        struct Full;
        impl io::Write for Full {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::StorageFull, "no space left"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut writer = Writer::new(Full);
        let error: Error = writer
            .write_event(Event::Start(BytesStart::new("resources")))
            .unwrap_err()
            .into();
        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().contains("no space left"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Configuration("test".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Configuration"));
        assert!(debug.contains("test"));
    }
}
