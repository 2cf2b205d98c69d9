//! CLI library for testing purposes

pub mod commands;
pub mod display;
pub mod report;

pub use commands::{SourceArgs, load_configuration};
pub use report::{ReportingFileSystem, missing_keys_message};
