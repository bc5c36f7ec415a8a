use std::path::Path;

use tracing::info;

use crate::dictionary::hanja::HanjaDeriver;
use crate::term_bank::{self, backup};
use crate::Result;

pub fn run(input: &Path, output: &Path, marker: &str, backup_dir: Option<&Path>) -> Result<()> {
    let deriver = HanjaDeriver::new(marker)?;
    let entries = term_bank::load(input)?;

    if let Some(backup_dir) = backup_dir {
        backup::create_backup(input, backup_dir)?;
    }

    let derived = deriver.derive_bank(&entries);
    term_bank::save(output, &derived)?;

    info!(
        "generated {} with {} of {} terms",
        output.display(),
        derived.len(),
        entries.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_HANJA_MARKER;
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_writes_derived_bank() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("term_bank_1.json");
        let output = dir.path().join("term_bank_2.json");
        let bank = json!([
            ["가족", "", "", "", "", [{"type": "structured-content", "content": [
                {"tag": "span", "style": {"color": "#555"}, "content": "〔家族〕"}
            ]}], "家族"],
            ["빈", "", "", "", "", [{"type": "structured-content", "content": [
                {"tag": "span", "style": {"color": "#555"}, "content": "〔 〕"}
            ]}], ""]
        ]);
        fs::write(&input, bank.to_string()).unwrap();

        run(&input, &output, DEFAULT_HANJA_MARKER, None).unwrap();

        let derived: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(derived.as_array().map(Vec::len), Some(1));
        assert_eq!(derived[0][0], json!("家族"));
        assert_eq!(derived[0][5][0]["content"][0]["content"], json!("家族"));

        let unchanged: Value = serde_json::from_str(&fs::read_to_string(&input).unwrap()).unwrap();
        assert_eq!(unchanged, bank);
    }
}
