use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::dictionary::content::Content;
use crate::dictionary::PartOfSpeech;
use crate::{Error, Result};

const STRUCTURED_CONTENT: &str = "structured-content";
const MIN_FIELDS: usize = 6;

/// One term bank record:
/// `[term, reading, partOfSpeech, partOfSpeechShort, score, definitions, hanja...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub term: String,
    pub reading: Option<String>,
    pub part_of_speech: Option<String>,
    pub part_of_speech_short: Option<String>,
    pub score: Value,
    pub definitions: Vec<Definition>,
    /// Fields after the definitions, kept as-is. The last one is the Hanja.
    pub trailing: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Definition {
    Text(String),
    Structured(StructuredContent),
    Other(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: Content,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Entry {
    pub fn from_value(value: Value, index: usize) -> Result<Entry> {
        let Value::Array(fields) = value else {
            return Err(Error::invalid_record(index, "record is not an array"));
        };

        if fields.len() < MIN_FIELDS {
            return Err(Error::invalid_record(
                index,
                format!("expected at least {} fields, found {}", MIN_FIELDS, fields.len()),
            ));
        }

        let mut fields = fields.into_iter();

        let term = match fields.next() {
            Some(Value::String(term)) => term,
            other => return Err(Error::invalid_record(index, format!("term is not a string: {:?}", other))),
        };
        let reading = optional_string(fields.next(), index, "reading")?;
        let part_of_speech = optional_string(fields.next(), index, "part of speech")?;
        let part_of_speech_short = optional_string(fields.next(), index, "part of speech abbreviation")?;
        let score = fields.next().unwrap_or_default();

        let definitions = match fields.next() {
            Some(Value::Array(definitions)) => definitions
                .into_iter()
                .map(|definition| Definition::from_value(definition, index))
                .collect::<Result<Vec<_>>>()?,
            other => {
                return Err(Error::invalid_record(index, format!("definitions are not a list: {:?}", other)))
            }
        };

        Ok(Entry {
            term,
            reading,
            part_of_speech,
            part_of_speech_short,
            score,
            definitions,
            trailing: fields.collect(),
        })
    }

    /// The content tree of the first definition, when it is structured.
    pub fn structured_content(&self) -> Option<&Content> {
        match self.definitions.first() {
            Some(Definition::Structured(structured)) => Some(&structured.content),
            _ => None,
        }
    }

    pub fn structured_content_mut(&mut self) -> Option<&mut Content> {
        match self.definitions.first_mut() {
            Some(Definition::Structured(structured)) => Some(&mut structured.content),
            _ => None,
        }
    }

    pub fn hanja(&self) -> Option<&str> {
        self.trailing.last().and_then(Value::as_str)
    }

    pub fn needs_part_of_speech(&self) -> bool {
        let filled = |field: &Option<String>| field.as_deref().is_some_and(|value| !value.is_empty());

        !(filled(&self.part_of_speech) && filled(&self.part_of_speech_short))
    }

    pub fn set_part_of_speech(&mut self, pos: PartOfSpeech) {
        self.part_of_speech = Some(pos.to_string());
        self.part_of_speech_short = Some(pos.short().to_owned());
    }
}

impl Definition {
    fn from_value(value: Value, index: usize) -> Result<Definition> {
        let structured = value.get("type").and_then(Value::as_str) == Some(STRUCTURED_CONTENT);

        match value {
            Value::String(text) => Ok(Definition::Text(text)),
            value if structured => {
                serde_json::from_value(value)
                    .map(Definition::Structured)
                    .map_err(|error| Error::invalid_record(index, format!("malformed structured content: {}", error)))
            }
            other => Ok(Definition::Other(other)),
        }
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(MIN_FIELDS + self.trailing.len()))?;

        seq.serialize_element(&self.term)?;
        seq.serialize_element(&self.reading)?;
        seq.serialize_element(&self.part_of_speech)?;
        seq.serialize_element(&self.part_of_speech_short)?;
        seq.serialize_element(&self.score)?;
        seq.serialize_element(&self.definitions)?;

        for field in &self.trailing {
            seq.serialize_element(field)?;
        }

        seq.end()
    }
}

fn optional_string(value: Option<Value>, index: usize, field: &str) -> Result<Option<String>> {
    match value {
        Some(Value::String(value)) => Ok(Some(value)),
        Some(Value::Null) | None => Ok(None),
        Some(other) => Err(Error::invalid_record(index, format!("{} is not a string: {}", field, other))),
    }
}
