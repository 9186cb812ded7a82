use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// Field holding the simplified form, shared by source and flat records.
pub const KEY_FIELD: &str = "s";
/// Field added to flat records.
pub const TONE_NUMBERS_FIELD: &str = "tn";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record has no \"s\" field")]
    MissingKey,

    #[error("record \"s\" field is not a string: {0}")]
    NonStringKey(String),
}

/// An entry of a flattened vocabulary file.
///
/// All fields are kept in their original order so an untouched record
/// serializes back to the same bytes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct FlatRecord {
    key: String,
    fields: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for FlatRecord {
    type Error = RecordError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let key = match fields.get(KEY_FIELD) {
            None => return Err(RecordError::MissingKey),
            Some(Value::String(key)) => key.clone(),
            Some(other) => return Err(RecordError::NonStringKey(other.to_string())),
        };
        Ok(Self { key, fields })
    }
}

impl Serialize for FlatRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl FlatRecord {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn tone_numbers(&self) -> Option<&str> {
        self.fields.get(TONE_NUMBERS_FIELD).and_then(Value::as_str)
    }

    /// Sets `tn`, returning whether the stored value changed.
    /// An existing `tn` keeps its position.
    pub fn set_tone_numbers(&mut self, tone_numbers: &str) -> bool {
        if self.tone_numbers() == Some(tone_numbers) {
            return false;
        }
        self.fields.insert(
            TONE_NUMBERS_FIELD.to_string(),
            Value::String(tone_numbers.to_string()),
        );
        true
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}
