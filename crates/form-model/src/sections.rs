//! Submitted template sections in the JSON shape the server stores
//!
//! ```json
//! {"sections": [{"title": "About You", "questions": [{"text": "...", "type": "text"}]}]}
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Error, FieldName, QuestionType, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionData {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionData {
    pub title: String,
    pub questions: Vec<QuestionData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSections {
    pub sections: Vec<SectionData>,
}

#[derive(Default)]
struct PartialQuestion {
    text: String,
    kind: Option<QuestionType>,
}

#[derive(Default)]
struct PartialSection {
    title: String,
    questions: BTreeMap<usize, PartialQuestion>,
}

impl TemplateSections {
    /// Rebuild sections from submitted `(name, value)` pairs.
    ///
    /// Pairs outside the `sections[..]` namespace are skipped. Sections and
    /// questions are ordered by index; a question without a type defaults to
    /// `text`.
    pub fn from_form_fields<I, N, V>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: AsRef<str>,
    {
        let mut sections: BTreeMap<usize, PartialSection> = BTreeMap::new();

        for (name, value) in fields {
            let Ok(field) = name.as_ref().parse::<FieldName>() else {
                continue;
            };
            let value = value.as_ref();
            let section = sections.entry(field.section()).or_default();
            match field {
                FieldName::SectionTitle { .. } => section.title = value.to_string(),
                FieldName::QuestionText { question, .. } => {
                    section.questions.entry(question).or_default().text = value.to_string();
                }
                FieldName::QuestionType { question, .. } => {
                    section.questions.entry(question).or_default().kind = Some(value.parse()?);
                }
            }
        }

        let sections = sections
            .into_values()
            .map(|s| SectionData {
                title: s.title,
                questions: s
                    .questions
                    .into_values()
                    .map(|q| QuestionData {
                        text: q.text,
                        kind: q.kind.unwrap_or(QuestionType::Text),
                    })
                    .collect(),
            })
            .collect();

        Ok(Self { sections })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Json(e.to_string()))
    }
}
