use std::path::Path;

use tracing::info;

use crate::dictionary::normalize::{normalize_bank, NormalizeOptions};
use crate::term_bank::{self, backup};
use crate::Result;

pub fn run(input: &Path, options: &NormalizeOptions, backup_dir: Option<&Path>) -> Result<()> {
    let entries = term_bank::load(input)?;
    let entries = normalize_bank(entries, options)?;

    if let Some(backup_dir) = backup_dir {
        backup::create_backup(input, backup_dir)?;
    }

    term_bank::save(input, &entries)?;

    info!("successfully processed and updated {}", input.display());
    info!("total terms: {}", entries.len());

    Ok(())
}
