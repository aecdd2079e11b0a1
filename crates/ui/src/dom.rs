use template_form_model::FormConfig;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Global the page may define to override element ids and classes
const CONFIG_GLOBAL: &str = "TEMPLATE_FORM_CONFIG";

/// Get document helper
pub fn get_document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Read `window.TEMPLATE_FORM_CONFIG`, falling back to defaults
pub fn load_config() -> FormConfig {
    let Some(win) = window() else {
        return FormConfig::default();
    };
    let raw = match js_sys::Reflect::get(&win, &CONFIG_GLOBAL.into()) {
        Ok(v) if !v.is_undefined() && !v.is_null() => v,
        _ => return FormConfig::default(),
    };

    let json = match js_sys::JSON::stringify(&raw) {
        Ok(s) => String::from(s),
        Err(e) => {
            warn!(error = ?e, "{CONFIG_GLOBAL} is not serializable, using defaults");
            return FormConfig::default();
        }
    };

    match FormConfig::from_json(&json) {
        Ok(config) => {
            info!("loaded {CONFIG_GLOBAL}");
            config
        }
        Err(e) => {
            warn!(error = %e, "ignoring {CONFIG_GLOBAL}");
            FormConfig::default()
        }
    }
}

/// All elements under `root` matching `selector`
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect())
}

/// Class selector for a bare class name
pub fn class_selector(class: &str) -> String {
    format!(".{class}")
}

/// Current value of a named form control
pub fn control_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    el.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value)
}

/// `(name, value)` of every named control under `root`, in document order
pub fn named_controls(root: &Element) -> Result<Vec<(String, String)>, JsValue> {
    Ok(query_all(root, "input[name], select[name], textarea[name]")?
        .iter()
        .filter_map(|el| Some((el.get_attribute("name")?, control_value(el)?)))
        .collect())
}
