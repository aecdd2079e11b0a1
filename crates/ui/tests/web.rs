//! Browser tests for the template editor and audio widgets
//!
//! Run with `wasm-pack test --headless --firefox crates/ui`.

use std::rc::Rc;

use template_form_model::{FormConfig, PlaybackState};
use template_form_ui::registry::{with_registry, WidgetId};
use template_form_ui::template_form::TemplateForm;
use template_form_ui::{audio, export_sections_json, init_audio_players, init_template_form};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, HtmlMediaElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn set_body(html: &str) -> Document {
    let doc = document();
    doc.body().unwrap().set_inner_html(html);
    doc
}

fn click(doc: &Document, selector: &str) {
    doc.query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn names(doc: &Document, selector: &str) -> Vec<String> {
    let nodes = doc.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .map(|i| {
            nodes
                .item(i)
                .unwrap()
                .dyn_into::<Element>()
                .unwrap()
                .get_attribute("name")
                .unwrap()
        })
        .collect()
}

const EDITOR: &str = r#"
    <form>
      <div id="sections-container"></div>
      <button type="button" id="add-section">Add Section</button>
    </form>
"#;

#[wasm_bindgen_test]
fn add_section_numbers_blocks() {
    let doc = set_body(EDITOR);
    assert!(init_template_form().unwrap());

    for _ in 0..3 {
        click(&doc, "#add-section");
    }

    let headings = doc.query_selector_all("#sections-container h4").unwrap();
    assert_eq!(headings.length(), 3);
    assert_eq!(headings.item(2).unwrap().text_content().unwrap(), "Section 3");
    assert_eq!(
        names(&doc, "#sections-container input"),
        ["sections[0][title]", "sections[1][title]", "sections[2][title]"]
    );
}

#[wasm_bindgen_test]
fn add_question_uses_owning_section() {
    let doc = set_body(EDITOR);
    init_template_form().unwrap();

    click(&doc, "#add-section");
    click(&doc, "#add-section");
    click(&doc, ".add-question[data-section='1']");
    click(&doc, ".add-question[data-section='0']");
    click(&doc, ".add-question[data-section='1']");

    assert_eq!(
        names(&doc, ".section-container[data-section='1'] .question-container select"),
        ["sections[1][questions][0][type]", "sections[1][questions][1][type]"]
    );
    assert_eq!(
        names(&doc, ".section-container[data-section='0'] .question-container input"),
        ["sections[0][questions][0][text]"]
    );
}

#[wasm_bindgen_test]
fn question_block_offers_four_types() {
    let doc = set_body(EDITOR);
    init_template_form().unwrap();
    click(&doc, "#add-section");
    click(&doc, ".add-question");

    let select = doc
        .query_selector("select[name='sections[0][questions][0][type]']")
        .unwrap()
        .unwrap();
    assert!(select.has_attribute("required"));
    let options = select.query_selector_all("option").unwrap();
    let labels: Vec<_> = (0..options.length())
        .map(|i| options.item(i).unwrap().text_content().unwrap())
        .collect();
    assert_eq!(labels, ["Text", "Long Text", "Number", "Select"]);
    assert!(doc
        .query_selector("input[name='sections[0][questions][0][text]'][required]")
        .unwrap()
        .is_some());
}

#[wasm_bindgen_test]
fn rendered_sections_are_continued() {
    let doc = set_body(
        r#"
        <div id="sections-container">
          <div class="section-container">
            <h4>Section 1</h4>
            <input type="text" name="sections[0][title]" value="About You">
            <div class="questions-container">
              <div class="question-container">
                <input type="text" name="sections[0][questions][0][text]" value="Name?">
                <select name="sections[0][questions][0][type]"><option value="text" selected>Text</option></select>
              </div>
            </div>
            <button type="button" class="add-question" data-section="0">Add Question</button>
          </div>
        </div>
        <button type="button" id="add-section">Add Section</button>
        "#,
    );
    init_template_form().unwrap();

    click(&doc, ".add-question[data-section='0']");
    click(&doc, "#add-section");

    assert!(doc
        .query_selector("input[name='sections[0][questions][1][text]']")
        .unwrap()
        .is_some());
    assert!(doc.query_selector("input[name='sections[1][title]']").unwrap().is_some());

    let json = export_sections_json().unwrap();
    assert!(json.starts_with(r#"{"sections":[{"title":"About You","questions":[{"text":"Name?","type":"text"}"#));
}

#[wasm_bindgen_test]
fn stale_section_index_is_ignored() {
    let doc = set_body(EDITOR);
    let form = TemplateForm::attach(&doc, Rc::new(FormConfig::default()))
        .unwrap()
        .unwrap();

    form.add_question(5).unwrap();
    assert_eq!(form.question_count(5), None);
    assert_eq!(doc.query_selector_all(".question-container").unwrap().length(), 0);
}

#[wasm_bindgen_test]
fn page_without_widgets_initializes() {
    set_body("<p>nothing to see</p>");
    assert!(!init_template_form().unwrap());
    assert_eq!(init_audio_players().unwrap(), 0);
}

#[wasm_bindgen_test]
fn container_without_trigger_still_binds_questions() {
    let doc = set_body(
        r#"
        <div id="sections-container">
          <div class="section-container">
            <input type="text" name="sections[0][title]">
            <div class="questions-container"></div>
            <button type="button" class="add-question" data-section="0">Add Question</button>
          </div>
        </div>
        "#,
    );
    assert!(init_template_form().unwrap());
    click(&doc, ".add-question");
    assert!(doc
        .query_selector("select[name='sections[0][questions][0][type]']")
        .unwrap()
        .is_some());
}

/// Replace the element's media methods so playback does not need a source
fn stub_media(audio: &HtmlMediaElement) {
    let stub = js_sys::Function::new_with_args(
        "el",
        "el.__paused = true;\
         Object.defineProperty(el, 'paused', { get() { return this.__paused; } });\
         el.play = function () { this.__paused = false; return Promise.resolve(); };\
         el.pause = function () { this.__paused = true; };",
    );
    stub.call1(&JsValue::NULL, audio).unwrap();
}

const PLAYERS: &str = r#"
    <div class="audio-player"><audio></audio><button class="play-btn">Play</button></div>
    <div class="audio-player"><audio></audio></div>
    <div class="audio-player"><button class="play-btn">Play</button></div>
"#;

#[wasm_bindgen_test]
fn only_complete_players_are_bound() {
    set_body(PLAYERS);
    assert_eq!(init_audio_players().unwrap(), 1);
}

#[wasm_bindgen_test]
fn play_button_toggles_label() {
    let doc = set_body(PLAYERS);
    let audio: HtmlMediaElement = doc.query_selector("audio").unwrap().unwrap().dyn_into().unwrap();
    stub_media(&audio);
    init_audio_players().unwrap();

    let button = doc.query_selector(".play-btn").unwrap().unwrap();
    click(&doc, ".play-btn");
    assert!(!audio.paused());
    assert_eq!(button.text_content().unwrap(), "Pause");

    click(&doc, ".play-btn");
    assert!(audio.paused());
    assert_eq!(button.text_content().unwrap(), "Play");
}

#[wasm_bindgen_test]
fn toggle_reports_next_state() {
    let doc = set_body(PLAYERS);
    let audio: HtmlMediaElement = doc.query_selector("audio").unwrap().unwrap().dyn_into().unwrap();
    stub_media(&audio);
    let button = doc.query_selector(".play-btn").unwrap().unwrap();

    assert_eq!(audio::toggle(&audio, &button), PlaybackState::Playing);
    assert_eq!(audio::toggle(&audio, &button), PlaybackState::Paused);
}

#[wasm_bindgen_test]
fn reinit_does_not_double_fire() {
    let doc = set_body(EDITOR);
    init_template_form().unwrap();
    init_template_form().unwrap();

    assert!(with_registry(|r| r.is_bound(WidgetId::AddSection)));
    click(&doc, "#add-section");
    assert_eq!(doc.query_selector_all(".section-container").unwrap().length(), 1);

    assert!(with_registry(|r| r.is_bound(WidgetId::AddQuestion(0))));
    click(&doc, ".add-question");
    assert_eq!(doc.query_selector_all(".question-container").unwrap().length(), 1);
}

#[wasm_bindgen_test]
fn rendered_section_without_fields_accepts_questions() {
    let doc = set_body(
        r#"
        <div id="sections-container">
          <div class="section-container">
            <div class="questions-container"></div>
            <button type="button" class="add-question" data-section="0">Add Question</button>
          </div>
        </div>
        "#,
    );
    init_template_form().unwrap();
    click(&doc, ".add-question");
    assert!(doc
        .query_selector("input[name='sections[0][questions][0][text]']")
        .unwrap()
        .is_some());
}

#[wasm_bindgen_test]
fn rejected_playback_keeps_pause_label() {
    let doc = set_body(PLAYERS);
    let audio: HtmlMediaElement = doc.query_selector("audio").unwrap().unwrap().dyn_into().unwrap();
    stub_media(&audio);
    let reject = js_sys::Function::new_with_args(
        "el",
        "el.play = function () { this.__paused = false; return Promise.reject(new Error('blocked')); };",
    );
    reject.call1(&JsValue::NULL, &audio).unwrap();
    init_audio_players().unwrap();

    click(&doc, ".play-btn");
    let button = doc.query_selector(".play-btn").unwrap().unwrap();
    assert_eq!(button.text_content().unwrap(), "Pause");
}

fn set_page_config(json: &str) {
    let window = web_sys::window().unwrap();
    let value = js_sys::JSON::parse(json).unwrap();
    js_sys::Reflect::set(&window, &"TEMPLATE_FORM_CONFIG".into(), &value).unwrap();
}

fn clear_page_config() {
    let window = web_sys::window().unwrap();
    js_sys::Reflect::delete_property(&window, &"TEMPLATE_FORM_CONFIG".into()).unwrap();
}

#[wasm_bindgen_test]
fn page_config_overrides_element_ids() {
    set_page_config(r#"{"sections_container_id": "blocks", "add_section_id": "new-block"}"#);
    let doc = set_body(r#"<div id="blocks"></div><button type="button" id="new-block">Add</button>"#);
    let attached = init_template_form();
    clear_page_config();

    assert!(attached.unwrap());
    click(&doc, "#new-block");
    assert!(doc.query_selector("#blocks input[name='sections[0][title]']").unwrap().is_some());
}

#[wasm_bindgen_test]
fn malformed_page_config_falls_back_to_defaults() {
    set_page_config(r#"{"add_section_id": 3}"#);
    let doc = set_body(EDITOR);
    let attached = init_template_form();
    clear_page_config();

    assert!(attached.unwrap());
    click(&doc, "#add-section");
    assert!(doc
        .query_selector("#sections-container input[name='sections[0][title]']")
        .unwrap()
        .is_some());
}
