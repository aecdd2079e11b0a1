//! Section and question counters for the template editor
//!
//! Indices are handed out from explicit counters rather than from the
//! number of elements currently in the page. Nothing is ever removed, so
//! indices stay contiguous and zero-based.

use tracing::debug;

use crate::{Error, FieldName, QuestionType, Result};

/// Bookkeeping for one rendered section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRecord {
    pub index: usize,
    pub question_count: usize,
}

/// Everything needed to render a new section block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub index: usize,
    pub heading: String,
    pub title_field: FieldName,
}

impl SectionView {
    fn new(index: usize) -> Self {
        Self {
            index,
            heading: format!("Section {}", index + 1),
            title_field: FieldName::SectionTitle { section: index },
        }
    }
}

/// Everything needed to render a new question block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub section: usize,
    pub index: usize,
    pub text_field: FieldName,
    pub type_field: FieldName,
}

impl QuestionView {
    fn new(section: usize, index: usize) -> Self {
        Self {
            section,
            index,
            text_field: FieldName::QuestionText { section, question: index },
            type_field: FieldName::QuestionType { section, question: index },
        }
    }

    /// `(value, label)` pairs for the type selector
    pub fn options(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        QuestionType::ALL.iter().map(|t| (t.value(), t.label()))
    }
}

#[derive(Debug, Default, Clone)]
pub struct TemplateBuilder {
    sections: Vec<SectionRecord>,
}

impl TemplateBuilder {
    pub const fn new() -> Self {
        Self { sections: Vec::new() }
    }

    /// Seed counters from field names already present in the page.
    ///
    /// Names outside the `sections[..]` namespace are ignored. Counts are
    /// one past the highest index seen, so fresh indices never collide with
    /// server-rendered ones. A contiguous rendering never holds an index at
    /// or beyond its own field count, so such fields are dropped.
    pub fn from_field_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields: Vec<FieldName> = names
            .into_iter()
            .filter_map(|name| name.as_ref().parse().ok())
            .collect();
        let limit = fields.len();

        let mut builder = Self::new();
        for field in fields {
            if field.section() >= limit || field.question().is_some_and(|q| q >= limit) {
                debug!(%field, "index beyond rendered fields, ignoring");
                continue;
            }
            builder.ensure_section(field.section());
            if let Some(question) = field.question() {
                let record = &mut builder.sections[field.section()];
                record.question_count = record.question_count.max(question.saturating_add(1));
            }
        }
        debug!(sections = builder.sections.len(), "seeded template builder");
        builder
    }

    fn ensure_section(&mut self, index: usize) {
        while self.sections.len() <= index {
            let next = self.sections.len();
            self.sections.push(SectionRecord { index: next, question_count: 0 });
        }
    }

    /// Register a rendered section that has no named fields yet.
    ///
    /// Only an existing index or the next one is accepted.
    pub fn seed_section(&mut self, index: usize) -> Result<()> {
        if index > self.sections.len() {
            return Err(Error::UnknownSection(index));
        }
        self.ensure_section(index);
        Ok(())
    }

    /// Allocate the next section
    pub fn add_section(&mut self) -> SectionView {
        let index = self.sections.len();
        self.sections.push(SectionRecord { index, question_count: 0 });
        debug!(section = index, "section added");
        SectionView::new(index)
    }

    /// Allocate the next question of `section`
    pub fn add_question(&mut self, section: usize) -> Result<QuestionView> {
        let record = self
            .sections
            .get_mut(section)
            .ok_or(Error::UnknownSection(section))?;
        let index = record.question_count;
        record.question_count += 1;
        debug!(section, question = index, "question added");
        Ok(QuestionView::new(section, index))
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn question_count(&self, section: usize) -> Option<usize> {
        self.sections.get(section).map(|s| s.question_count)
    }
}
