//! Element ids and classes the widgets look for in the page

use serde::Deserialize;

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Id of the "add section" trigger
    pub add_section_id: String,
    /// Id of the element that receives section blocks
    pub sections_container_id: String,
    pub section_class: String,
    pub questions_container_class: String,
    pub question_class: String,
    /// Class marking "add question" buttons inside a section
    pub add_question_class: String,
    pub audio_player_class: String,
    pub play_button_class: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            add_section_id: "add-section".into(),
            sections_container_id: "sections-container".into(),
            section_class: "section-container".into(),
            questions_container_class: "questions-container".into(),
            question_class: "question-container".into(),
            add_question_class: "add-question".into(),
            audio_player_class: "audio-player".into(),
            play_button_class: "play-btn".into(),
        }
    }
}

impl FormConfig {
    /// Parse a JSON override; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }
}
