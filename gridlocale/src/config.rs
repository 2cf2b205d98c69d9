//! Validated run configuration.
//!
//! A [`Configuration`] is built from an untyped JSON descriptor (usually the
//! contents of `translator.json`) and is immutable afterwards. It selects the
//! [`LayoutConvention`] used to read the grid, the [`OutputFormat`] used to
//! write files, and the template used for translations missing from the grid.

use std::{
    fmt::{Display, Formatter},
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Serialize;
use serde_json::Value;

use crate::error::Error;

/// Template used when the descriptor has no `emptyKey`.
pub const DEFAULT_EMPTY_VALUE_TEMPLATE: &str = "Translate($0, $1)";

/// File name looked up by [`Configuration::discover`].
pub const DESCRIPTOR_FILE_NAME: &str = "translator.json";

/// How rows and columns of the grid are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutConvention {
    /// Header `[_, lang...]`, rows `[key, value...]`.
    #[default]
    KeyValue,
    /// Header `[_, _, lang...]`, rows `[domain, key, value...]`.
    DomainKeyValue,
}

impl LayoutConvention {
    pub const ALL: [LayoutConvention; 2] =
        [LayoutConvention::KeyValue, LayoutConvention::DomainKeyValue];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutConvention::KeyValue => "key-value",
            LayoutConvention::DomainKeyValue => "domain-key-value",
        }
    }

    /// Number of leading header cells that are column labels, not languages.
    pub fn label_columns(&self) -> usize {
        match self {
            LayoutConvention::KeyValue => 1,
            LayoutConvention::DomainKeyValue => 2,
        }
    }
}

impl Display for LayoutConvention {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutConvention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.as_str() == s)
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

/// Which kind of localization files the serializer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One pretty-printed `<key>.json` per leaf.
    #[default]
    Json,
    /// Apple `<lang>.lproj/Localizable.strings`.
    Ios,
    /// Android `values[-<lang>]/strings.xml`.
    Android,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Json, OutputFormat::Ios, OutputFormat::Android];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Ios => "ios",
            OutputFormat::Android => "android",
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

/// Renders a list of names the way the descriptor would spell them, e.g.
/// `["json","ios","android"]`.
fn valid_set<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let quoted: Vec<String> = names.into_iter().map(|n| format!("\"{n}\"")).collect();
    format!("[{}]", quoted.join(","))
}

/// The immutable, validated configuration of one run.
///
/// Serializes back to the descriptor's field names, so it can be echoed to
/// the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(rename = "spreadSheetID")]
    spreadsheet_id: String,
    sheet_title: String,
    output_dir: PathBuf,
    #[serde(rename = "emptyKey")]
    empty_value_template: String,
    #[serde(rename = "format")]
    layout: LayoutConvention,
    output_format: OutputFormat,
}

impl Configuration {
    /// Creates a configuration with default layout, output format and
    /// empty-value template.
    pub fn new(
        spreadsheet_id: impl Into<String>,
        sheet_title: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            sheet_title: sheet_title.into(),
            output_dir: output_dir.into(),
            empty_value_template: DEFAULT_EMPTY_VALUE_TEMPLATE.to_string(),
            layout: LayoutConvention::default(),
            output_format: OutputFormat::default(),
        }
    }

    pub fn with_layout(mut self, layout: LayoutConvention) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn with_empty_value_template(mut self, template: impl Into<String>) -> Self {
        self.empty_value_template = template.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Validates an untyped descriptor.
    ///
    /// `spreadSheetID`, `sheetTitle` and `outputDir` must be non-empty
    /// strings. `emptyKey`, `format` and `outputFormat` fall back to their
    /// defaults when absent, empty or not a string; `format` and
    /// `outputFormat` must otherwise name a known value.
    pub fn from_descriptor(descriptor: &Value) -> Result<Self, Error> {
        let optional = |field: &str| {
            descriptor
                .get(field)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        };
        let required = |field: &str| {
            optional(field).map(str::to_string).ok_or_else(|| {
                Error::configuration(format!("Cannot parse {field} from your descriptor"))
            })
        };

        let spreadsheet_id = required("spreadSheetID")?;
        let sheet_title = required("sheetTitle")?;
        let output_dir = required("outputDir")?;
        let empty_value_template = optional("emptyKey")
            .unwrap_or(DEFAULT_EMPTY_VALUE_TEMPLATE)
            .to_string();

        let layout = match optional("format") {
            Some(name) => name.parse::<LayoutConvention>().map_err(|_| {
                Error::configuration(format!(
                    "invalid format, please use one in {}",
                    valid_set(LayoutConvention::ALL.iter().map(LayoutConvention::as_str))
                ))
            })?,
            None => LayoutConvention::default(),
        };

        let output_format = match optional("outputFormat") {
            Some(name) => name.parse::<OutputFormat>().map_err(|_| {
                Error::configuration(format!(
                    "invalid outputFormat, please use one in {}",
                    valid_set(OutputFormat::ALL.iter().map(OutputFormat::as_str))
                ))
            })?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            spreadsheet_id,
            sheet_title,
            output_dir: PathBuf::from(output_dir),
            empty_value_template,
            layout,
            output_format,
        })
    }

    /// Reads and validates a descriptor file.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        let descriptor: Value = serde_json::from_str(&content)?;
        Self::from_descriptor(&descriptor)
    }

    /// Loads `translator.json` from `dir`.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self, Error> {
        let dir = dir.as_ref();
        match Self::read_from(dir.join(DESCRIPTOR_FILE_NAME)) {
            Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound => Err(Error::configuration(
                format!("{} not found in {}", DESCRIPTOR_FILE_NAME, dir.display()),
            )),
            other => other,
        }
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    pub fn sheet_title(&self) -> &str {
        &self.sheet_title
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn empty_value_template(&self) -> &str {
        &self.empty_value_template
    }

    pub fn layout(&self) -> LayoutConvention {
        self.layout
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    /// Fills the empty-value template: the first `$0` becomes `key`, then
    /// the first `$1` becomes `language`.
    pub fn render_empty_value(&self, key: &str, language: &str) -> String {
        self.empty_value_template
            .replacen("$0", key, 1)
            .replacen("$1", language, 1)
    }
}
