//! Form field names for template sections and questions
//!
//! The receiving server rebuilds a nested list of sections from names like
//! `sections[0][title]` and `sections[0][questions][2][type]`, so the
//! rendering here must stay byte-for-byte stable.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A named control inside the sections namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    SectionTitle { section: usize },
    QuestionText { section: usize, question: usize },
    QuestionType { section: usize, question: usize },
}

impl FieldName {
    /// Index of the owning section
    pub const fn section(self) -> usize {
        match self {
            Self::SectionTitle { section }
            | Self::QuestionText { section, .. }
            | Self::QuestionType { section, .. } => section,
        }
    }

    /// Index of the question, if this field belongs to one
    pub const fn question(self) -> Option<usize> {
        match self {
            Self::SectionTitle { .. } => None,
            Self::QuestionText { question, .. } | Self::QuestionType { question, .. } => {
                Some(question)
            }
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SectionTitle { section } => write!(f, "sections[{section}][title]"),
            Self::QuestionText { section, question } => {
                write!(f, "sections[{section}][questions][{question}][text]")
            }
            Self::QuestionType { section, question } => {
                write!(f, "sections[{section}][questions][{question}][type]")
            }
        }
    }
}

impl FromStr for FieldName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidFieldName(s.to_string());

        let rest = s.strip_prefix("sections[").ok_or_else(invalid)?;
        let (section, rest) = take_index(rest).ok_or_else(invalid)?;

        if rest == "[title]" {
            return Ok(Self::SectionTitle { section });
        }

        let rest = rest.strip_prefix("[questions][").ok_or_else(invalid)?;
        let (question, rest) = take_index(rest).ok_or_else(invalid)?;
        match rest {
            "[text]" => Ok(Self::QuestionText { section, question }),
            "[type]" => Ok(Self::QuestionType { section, question }),
            _ => Err(invalid()),
        }
    }
}

/// Split `"12]tail"` into `(12, "tail")`
fn take_index(s: &str) -> Option<(usize, &str)> {
    let end = s.find(']')?;
    let digits = &s[..end];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((digits.parse().ok()?, &s[end + 1..]))
}
