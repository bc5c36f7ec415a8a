use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("the file '{0}' was not found")]
    FileNotFound(PathBuf),
    #[error("the file '{path}' is not a valid term bank: {source}")]
    MalformedJson {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
    #[error("record at index {0} has no structured content")]
    MissingStructuredContent(usize),
    #[error("style remap chain on '{property}': '{value}' is both remapped to and from")]
    ChainedStyleRemap { property: String, value: String },
    #[error("error reading file: {0}")]
    IOFailed(std::io::Error),
    #[error("error writing json: {0}")]
    SerdeFailed(serde_json::Error),
    #[error("error reading config: {0}")]
    ConfigFailed(toml::de::Error),
    #[error("error when creating regex: {0}")]
    RegexFailed(regex::Error),
}

impl Error {
    pub fn invalid_record(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            index,
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::IOFailed(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::SerdeFailed(error)
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::ConfigFailed(error)
    }
}

impl From<regex::Error> for Error {
    fn from(error: regex::Error) -> Self {
        Self::RegexFailed(error)
    }
}
