use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::dictionary::flatten::flatten_definitions;
use crate::dictionary::Entry;
use crate::Result;

pub const HEADER: [&str; 3] = ["Word", "Hanja", "Definition"];

/// `(term, hanja, flattened definitions)` for one entry.
pub fn row(entry: &Entry) -> [String; 3] {
    [
        entry.term.clone(),
        entry.hanja().unwrap_or_default().to_owned(),
        flatten_definitions(&entry.definitions),
    ]
}

pub fn write_csv<W: Write>(mut writer: W, entries: &[Entry]) -> Result<()> {
    write_record(&mut writer, &HEADER)?;

    for entry in entries {
        write_record(&mut writer, &row(entry))?;
    }

    writer.flush()?;

    Ok(())
}

pub fn export_csv<P: AsRef<Path>>(path: P, entries: &[Entry]) -> Result<()> {
    let path = path.as_ref();
    let writer = BufWriter::new(File::create(path)?);

    write_csv(writer, entries)?;

    info!("exported {} entries to {}", entries.len(), path.display());

    Ok(())
}

fn write_record<W: Write, S: AsRef<str>>(writer: &mut W, fields: &[S]) -> Result<()> {
    let line = fields
        .iter()
        .map(|field| escape(field.as_ref()))
        .collect::<Vec<_>>()
        .join(",");

    write!(writer, "{}\r\n", line)?;

    Ok(())
}

fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a, b"), "\"a, b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_write_csv() {
        let entries = vec![
            Entry::from_value(
                json!(["문서", "", "", "", "", [{"type": "structured-content", "content": [
                    {"tag": "div", "content": [
                        {"tag": "div", "style": {"fontWeight": "bold"}, "content": "1. document, paper"},
                        {"tag": "span", "content": " note "}
                    ]}
                ]}], "文書"]),
                0,
            )
            .unwrap(),
            Entry::from_value(json!(["plain", "", "", "", "", ["gloss"]]), 1).unwrap(),
        ];

        let mut buffer = Vec::new();
        write_csv(&mut buffer, &entries).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Word,Hanja,Definition\r\n문서,文書,\"1. document, paper note\"\r\nplain,,gloss\r\n"
        );
    }
}
