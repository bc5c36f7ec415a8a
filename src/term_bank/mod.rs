use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::dictionary::Entry;
use crate::{Error, Result};

pub mod backup;
pub mod export;

/// Reads a term bank. Nothing is written when this fails.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Entry>> {
    let path = path.as_ref();

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        Err(error) => return Err(error.into()),
    };

    let records: Vec<Value> = serde_json::from_str(&text).map_err(|source| Error::MalformedJson {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| Entry::from_value(record, index))
        .collect::<Result<Vec<_>>>()?;

    debug!("loaded {} entries from {}", entries.len(), path.display());

    Ok(entries)
}

/// Writes a term bank as two-space indented JSON, non-ASCII left unescaped.
pub fn save<P: AsRef<Path>>(path: P, entries: &[Entry]) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(entries)?;

    fs::write(path, json)?;

    info!("wrote {} entries to {}", entries.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_keeps_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("term_bank_1.json");
        let bank = json!([
            ["문서", "", "", "", "", [{"type": "structured-content", "content": [
                {"tag": "div", "content": [{"tag": "span", "style": {"color": "#555"}, "content": "〔文書〕"}]}
            ]}], "文書"]
        ]);
        fs::write(&path, serde_json::to_string(&bank).unwrap()).unwrap();

        let entries = load(&path).unwrap();
        save(&path, &entries).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("〔文書〕"));
        assert!(written.contains("\n  [\n    \"문서\","));
        assert_eq!(serde_json::from_str::<Value>(&written).unwrap(), bank);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");

        match load(&path) {
            Err(Error::FileNotFound(reported)) => assert_eq!(reported, path),
            other => panic!("unexpected result: {:?}", other.map(|entries| entries.len())),
        }
    }

    #[test]
    fn test_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "[[\"term\", ").unwrap();

        assert!(matches!(load(&path), Err(Error::MalformedJson { .. })));

        fs::write(&path, "{\"term\": 1}").unwrap();
        assert!(matches!(load(&path), Err(Error::MalformedJson { .. })));
    }

    #[test]
    fn test_bad_record_index() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bank.json");
        fs::write(&path, r#"[["a", "", "", "", 0, []], ["b", ""]]"#).unwrap();

        assert!(matches!(load(&path), Err(Error::InvalidRecord { index: 1, .. })));
    }
}
