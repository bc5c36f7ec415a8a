use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::info;

use crate::dictionary::flatten::find_definition;
use crate::dictionary::{Entry, PartOfSpeech};
use crate::term_bank::{self, backup};
use crate::Result;

const NO_DEFINITION: &str = "No definition found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Finished { tagged: usize },
    Quit { tagged: usize },
}

pub fn run(input: &Path, backup_dir: Option<&Path>) -> Result<()> {
    let mut entries = term_bank::load(input)?;

    if let Some(backup_dir) = backup_dir {
        backup::create_backup(input, backup_dir)?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();

    let outcome = tag_entries(&mut entries, stdin.lock(), stdout.lock(), |entries| {
        term_bank::save(input, entries)
    })?;

    match outcome {
        Outcome::Finished { tagged } => info!("processing complete, tagged {} entries", tagged),
        Outcome::Quit { tagged } => info!("quit after tagging {} entries, progress saved", tagged),
    }

    Ok(())
}

/// Asks for the part of speech of every entry missing one. `save` runs
/// after each answer so quitting keeps what was entered so far.
pub fn tag_entries<R, W, F>(entries: &mut [Entry], mut input: R, mut output: W, mut save: F) -> Result<Outcome>
where
    R: BufRead,
    W: Write,
    F: FnMut(&[Entry]) -> Result<()>,
{
    let total = entries.len();
    let mut tagged = 0;

    for index in 0..total {
        let entry = &entries[index];

        writeln!(output, "\n--- Entry {} of {} ---", index + 1, total)?;

        if !entry.needs_part_of_speech() {
            writeln!(output, "Skipping term '{}' as both fields are already filled.", entry.term)?;
            continue;
        }

        let definition = entry
            .structured_content()
            .and_then(find_definition)
            .unwrap_or(NO_DEFINITION);

        writeln!(output, "Term: {}", entry.term)?;
        writeln!(output, "Alternative Field: {}", entry.reading.as_deref().unwrap_or_default())?;
        writeln!(output, "Definition: {}", definition)?;

        let pos = loop {
            write!(output, "Enter Part of Speech (n, v, or a) or 'q' to quit: ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(Outcome::Quit { tagged });
            }

            if line.trim().eq_ignore_ascii_case("q") {
                writeln!(output, "Quitting. Entries tagged so far have been saved.")?;
                return Ok(Outcome::Quit { tagged });
            }

            match PartOfSpeech::from_key(&line) {
                Some(pos) => break pos,
                None => writeln!(output, "Invalid input. Please enter 'n', 'v', or 'a'.")?,
            }
        };

        entries[index].set_part_of_speech(pos);
        tagged += 1;
        save(&*entries)?;
    }

    Ok(Outcome::Finished { tagged })
}
