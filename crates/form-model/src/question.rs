use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Input kind of a template question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "textarea", alias = "long-text")]
    LongText,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "select")]
    Select,
}

impl QuestionType {
    /// Option order of the type selector
    pub const ALL: [Self; 4] = [Self::Text, Self::LongText, Self::Number, Self::Select];

    /// Value submitted with the form
    pub const fn value(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::LongText => "textarea",
            Self::Number => "number",
            Self::Select => "select",
        }
    }

    /// Human readable option text
    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::LongText => "Long Text",
            Self::Number => "Number",
            Self::Select => "Select",
        }
    }
}

impl FromStr for QuestionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "textarea" | "long-text" => Ok(Self::LongText),
            "number" => Ok(Self::Number),
            "select" => Ok(Self::Select),
            other => Err(Error::UnknownQuestionType(other.to_string())),
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}
