//! Android `strings.xml` output.
//!
//! Every leaf becomes `values/strings.xml` for English and
//! `values-<lang>/strings.xml` otherwise, with one `<string>` element per
//! entry under `<resources>`.

use std::{io, path::PathBuf};

use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::{error::Error, traits::Serializer, tree::Leaf};

/// Language written to the unqualified `values` directory.
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Copy, Default)]
pub struct Format;

/// Escapes a value for a `<string>` body: `&` first, then `'`. Nothing
/// else is touched.
pub fn escape_value(value: &str) -> String {
    value.replace('&', "&amp;").replace('\'', "\\'")
}

impl Serializer for Format {
    fn file_name(&self, _key: &str) -> String {
        "strings.xml".to_string()
    }

    fn serialize(&self, leaf: &Leaf) -> Result<String, Error> {
        let mut buffer = Vec::new();
        let mut xml_writer = Writer::new(&mut buffer);

        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
        xml_writer.write_event(Event::Start(BytesStart::new("resources")))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;

        for (name, value) in leaf {
            // Key is written verbatim, only the value is escaped.
            let elem = BytesStart::from_content(format!("string name=\"{name}\""), "string".len());

            xml_writer.write_event(Event::Text(BytesText::new("  ")))?;
            xml_writer.write_event(Event::Start(elem))?;
            xml_writer.write_event(Event::Text(BytesText::from_escaped(escape_value(value))))?;
            xml_writer.write_event(Event::End(BytesEnd::new("string")))?;
            xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
        }

        xml_writer.write_event(Event::End(BytesEnd::new("resources")))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;

        String::from_utf8(buffer)
            .map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    fn directory(&self, key: &str, prefix: &[String]) -> PathBuf {
        let mut dir: PathBuf = prefix.iter().collect();
        if key == DEFAULT_LANGUAGE {
            dir.push("values");
        } else {
            dir.push(format!("values-{key}"));
        }
        dir
    }
}
