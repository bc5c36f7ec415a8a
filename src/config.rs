use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::dictionary::content::Style;
use crate::{Error, Result};

pub const DEFAULT_HANJA_MARKER: &str = "#555";
pub const DEFAULT_BACKUP_DIR: &str = "backups";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Colour of the span carrying an entry's Hanja annotation.
    pub hanja_marker: String,
    pub backup_dir: PathBuf,
    pub style_remaps: Vec<StyleRemap>,
}

/// Replaces `from` with `to` wherever a style map sets `property` to exactly `from`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRemap {
    pub property: String,
    pub from: String,
    pub to: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hanja_marker: DEFAULT_HANJA_MARKER.to_owned(),
            backup_dir: PathBuf::from(DEFAULT_BACKUP_DIR),
            style_remaps: StyleRemap::defaults(),
        }
    }
}

impl StyleRemap {
    pub fn new(property: &str, from: &str, to: &str) -> Self {
        Self {
            property: property.to_owned(),
            from: from.to_owned(),
            to: to.to_owned(),
        }
    }

    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("fontSize", "0.9em", "1em"),
            Self::new("color", "#444", "#a8a8a8"),
        ]
    }

    pub fn apply(&self, style: &mut Style) {
        if style.get(&self.property).and_then(Value::as_str) == Some(self.from.as_str()) {
            style.insert(self.property.clone(), Value::String(self.to.clone()));
        }
    }
}

/// Built-in defaults, or the TOML file at `path` layered over them.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;

    check_remaps(&config.style_remaps)?;

    debug!(
        "loaded config from {}: marker {}, {} style remaps",
        path.display(),
        config.hanja_marker,
        config.style_remaps.len()
    );

    Ok(config)
}

// A value produced by one remap must not be consumed by another, otherwise a
// second clean run would keep rewriting it.
fn check_remaps(remaps: &[StyleRemap]) -> Result<()> {
    for (i, first) in remaps.iter().enumerate() {
        for (j, second) in remaps.iter().enumerate() {
            if i != j && first.property == second.property && first.to == second.from {
                return Err(Error::ChainedStyleRemap {
                    property: first.property.clone(),
                    value: first.to.clone(),
                });
            }
        }
    }

    Ok(())
}
