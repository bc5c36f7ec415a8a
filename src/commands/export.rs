use std::path::Path;

use crate::term_bank::{self, export};
use crate::Result;

pub fn run(input: &Path, output: &Path) -> Result<()> {
    let entries = term_bank::load(input)?;

    export::export_csv(output, &entries)
}
