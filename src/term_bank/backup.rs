use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::{Error, Result};

/// `<dir>/<stem>_BACKUP_<mm_dd_yy>.<ext>`
pub fn backup_path(input: &Path, backup_dir: &Path, date: NaiveDate) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_else(|| "term_bank".into());
    let extension = input
        .extension()
        .map(|extension| extension.to_string_lossy())
        .unwrap_or_else(|| "json".into());

    backup_dir.join(format!("{}_BACKUP_{}.{}", stem, date.format("%m_%d_%y"), extension))
}

/// Copies `input` into `backup_dir`, creating the directory when missing.
/// A second backup on the same day overwrites the first.
pub fn create_backup(input: &Path, backup_dir: &Path) -> Result<PathBuf> {
    if !input.exists() {
        return Err(Error::FileNotFound(input.to_path_buf()));
    }

    if !backup_dir.exists() {
        fs::create_dir_all(backup_dir)?;
        info!("created directory {}", backup_dir.display());
    }

    let path = backup_path(input, backup_dir, Local::now().date_naive());
    fs::copy(input, &path)?;

    info!("created backup of {} at {}", input.display(), path.display());

    Ok(path)
}
