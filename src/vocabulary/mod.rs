mod flat;
mod load;
mod source;

pub use flat::{FlatRecord, RecordError, KEY_FIELD, TONE_NUMBERS_FIELD};
pub use load::{read_records, write_records_compact};
pub use source::{SourceForm, SourceRecord, Transcriptions};
