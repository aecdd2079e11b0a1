pub mod audio;
mod dom;
pub mod registry;
pub mod render;
pub mod template_form;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use template_form_model::FormConfig;
use tracing::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom::get_document;
use crate::template_form::TemplateForm;

pub use dom::load_config;

thread_local! {
    /// Editor attached by the last `init_template_form` call
    static ACTIVE_FORM: RefCell<Option<Rc<TemplateForm>>> = const { RefCell::new(None) };
}

static LOGGING: Once = Once::new();

fn init_logging() {
    LOGGING.call_once(|| {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    });
}

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    init_logging();

    let document = get_document().ok_or("No document")?;
    if document.ready_state() == "loading" {
        let on_ready = Closure::once(Box::new(|| {
            if let Err(e) = init_page() {
                tracing::error!(error = ?e, "page init failed");
            }
        }) as Box<dyn FnOnce()>);
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
        Ok(())
    } else {
        init_page()
    }
}

fn init_page() -> Result<(), JsValue> {
    let config = Rc::new(load_config());
    let editor = attach_template_form(Rc::clone(&config))?;
    let players = bind_audio_players(&config)?;
    info!(editor, players, "page widgets initialized");
    Ok(())
}

fn attach_template_form(config: Rc<FormConfig>) -> Result<bool, JsValue> {
    let document = get_document().ok_or("No document")?;
    let form = TemplateForm::attach(&document, config)?;
    let attached = form.is_some();
    ACTIVE_FORM.with(|f| *f.borrow_mut() = form);
    Ok(attached)
}

fn bind_audio_players(config: &FormConfig) -> Result<u32, JsValue> {
    let document = get_document().ok_or("No document")?;
    let bound = audio::init(&document, config)?;
    Ok(u32::try_from(bound).unwrap_or(u32::MAX))
}

/// Attach the template editor; returns whether the page has one
#[wasm_bindgen]
pub fn init_template_form() -> Result<bool, JsValue> {
    attach_template_form(Rc::new(load_config()))
}

/// Bind play/pause buttons; returns how many players were bound
#[wasm_bindgen]
pub fn init_audio_players() -> Result<u32, JsValue> {
    bind_audio_players(&load_config())
}

fn active_form() -> Option<Rc<TemplateForm>> {
    ACTIVE_FORM.with(|f| f.borrow().clone())
}

/// Same as clicking "add section"; returns the new section's index
#[wasm_bindgen]
pub fn add_section() -> Result<Option<u32>, JsValue> {
    let Some(form) = active_form() else {
        return Ok(None);
    };
    let view = form.add_section()?;
    Ok(u32::try_from(view.index).ok())
}

/// Current editor contents as `{"sections": [...]}` JSON
#[wasm_bindgen]
pub fn export_sections_json() -> Result<String, JsValue> {
    active_form()
        .ok_or_else(|| JsValue::from_str("No template form on page"))?
        .export_json()
}
