//! View-model types for the template editor widgets
//!
//! Holds everything that does not touch the DOM: section/question counters,
//! the `sections[..]` field naming used by form submission, the JSON shape
//! of submitted templates, audio playback state, and page configuration.

pub mod builder;
pub mod config;
pub mod field;
pub mod playback;
pub mod question;
pub mod sections;

pub use builder::*;
pub use config::FormConfig;
pub use field::FieldName;
pub use playback::PlaybackState;
pub use question::QuestionType;
pub use sections::*;

/// Errors raised by the template view-model
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("no section with index {0}")]
    UnknownSection(usize),
    #[error("invalid field name: {0}")]
    InvalidFieldName(String),
    #[error("unknown question type: {0}")]
    UnknownQuestionType(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("json error: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, Error>;
