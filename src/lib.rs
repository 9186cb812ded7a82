//! HSK Tone Merge Library
//!
//! Copies tone-number transcriptions from the nested HSK word lists into the
//! flattened vocabulary files shipped with the app, as a `tn` field.

pub mod config;
pub mod merge;
pub mod runner;
pub mod tone_map;
pub mod vocabulary;

// Re-export commonly used types for convenience
pub use config::{AppConfig, CliConfig, FileConfig, FilePair};
pub use merge::{annotate_records, apply_tone_numbers, AnnotatedFile, MergeStats};
pub use runner::{process_pair, run, PairReport};
pub use tone_map::{build_tone_map, ToneMap};
