use serde::Deserialize;

/// Pronunciation data of one form. Only the tone-number transcription is read.
#[derive(Clone, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct Transcriptions {
    #[serde(default)]
    pub n: Option<String>,
}

#[derive(Clone, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct SourceForm {
    #[serde(default)]
    pub i: Option<Transcriptions>,
}

/// An entry of the nested HSK word list. Unknown fields are ignored.
#[derive(Clone, Deserialize, Debug, PartialEq, Eq)]
pub struct SourceRecord {
    pub s: String,
    #[serde(default)]
    pub f: Option<Vec<SourceForm>>,
}

impl SourceRecord {
    /// Tone numbers of the first form, the most common pronunciation.
    pub fn tone_numbers(&self) -> Option<&str> {
        self.f.as_ref()?.first()?.i.as_ref()?.n.as_deref()
    }
}
