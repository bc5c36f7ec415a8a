pub mod content;
pub mod entry;
pub mod flatten;
pub mod hanja;
pub mod normalize;

use core::fmt;

pub use entry::{Definition, Entry};

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
}

impl PartOfSpeech {
    /// Parses the one-letter key typed at the tagging prompt.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "n" => Some(Self::Noun),
            "v" => Some(Self::Verb),
            "a" => Some(Self::Adjective),
            _ => None,
        }
    }

    pub fn short(&self) -> &'static str {
        match *self {
            PartOfSpeech::Noun => "n",
            PartOfSpeech::Verb => "v",
            PartOfSpeech::Adjective => "adj",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PartOfSpeech::Noun => write!(f, "Noun"),
            PartOfSpeech::Verb => write!(f, "Verb"),
            PartOfSpeech::Adjective => write!(f, "Adjective"),
        }
    }
}
