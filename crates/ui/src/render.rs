//! Builds section and question blocks from their view records
//!
//! Classes follow the Bootstrap markup the server templates already use.

use template_form_model::{FormConfig, QuestionView, SectionView};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

/// A freshly built section block and the parts the controller needs later
pub struct RenderedSection {
    pub root: Element,
    pub questions: Element,
    pub add_question: Element,
}

fn element(doc: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let el = doc.create_element(tag)?;
    el.set_class_name(class);
    Ok(el)
}

/// `<div class="{wrapper}"><label class="form-label">{label}</label>{control}</div>`
fn labeled(doc: &Document, wrapper: &str, label: &str, control: &Element) -> Result<Element, JsValue> {
    let group = element(doc, "div", wrapper)?;
    let label_el = element(doc, "label", "form-label")?;
    label_el.set_text_content(Some(label));
    group.append_child(&label_el)?;
    group.append_child(control)?;
    Ok(group)
}

fn text_input(doc: &Document, name: &str) -> Result<Element, JsValue> {
    let input = element(doc, "input", "form-control")?;
    input.set_attribute("type", "text")?;
    input.set_attribute("name", name)?;
    input.set_attribute("required", "")?;
    Ok(input)
}

pub fn section(doc: &Document, view: &SectionView, config: &FormConfig) -> Result<RenderedSection, JsValue> {
    let index = view.index.to_string();

    let root = element(doc, "div", &format!("{} mb-4 p-3 border rounded", config.section_class))?;
    root.set_attribute("data-section", &index)?;

    let heading = doc.create_element("h4")?;
    heading.set_text_content(Some(&view.heading));
    root.append_child(&heading)?;

    let title = text_input(doc, &view.title_field.to_string())?;
    root.append_child(&labeled(doc, "mb-3", "Title", &title)?.into())?;

    let questions = element(doc, "div", &config.questions_container_class)?;
    root.append_child(&questions)?;

    let add_question = element(doc, "button", &format!("btn btn-secondary {}", config.add_question_class))?;
    add_question.set_attribute("type", "button")?;
    add_question.set_attribute("data-section", &index)?;
    add_question.set_text_content(Some("Add Question"));
    root.append_child(&add_question)?;

    Ok(RenderedSection {
        root,
        questions,
        add_question,
    })
}

pub fn question(doc: &Document, view: &QuestionView, config: &FormConfig) -> Result<Element, JsValue> {
    let root = element(doc, "div", &format!("{} mb-3", config.question_class))?;

    let text = text_input(doc, &view.text_field.to_string())?;
    root.append_child(&labeled(doc, "mb-2", "Question Text", &text)?.into())?;

    let select = element(doc, "select", "form-select")?;
    select.set_attribute("name", &view.type_field.to_string())?;
    select.set_attribute("required", "")?;
    for (value, label) in view.options() {
        let option = doc.create_element("option")?;
        option.set_attribute("value", value)?;
        option.set_text_content(Some(label));
        select.append_child(&option)?;
    }
    root.append_child(&labeled(doc, "mb-2", "Question Type", &select)?.into())?;

    Ok(root)
}
