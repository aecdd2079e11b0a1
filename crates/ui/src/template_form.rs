//! Template editor: "add section" and per-section "add question" buttons
//!
//! Indices come from the `TemplateBuilder` counters, never from counting
//! children in the page. Sections the server already rendered are picked up
//! on attach so new blocks continue after them.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use template_form_model::{FormConfig, SectionView, TemplateBuilder, TemplateSections};
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::dom::{class_selector, named_controls, query_all};
use crate::registry::{with_registry, WidgetId};
use crate::render;

pub struct TemplateForm {
    document: Document,
    container: Element,
    config: Rc<FormConfig>,
    builder: RefCell<TemplateBuilder>,
    /// Questions container of each section, by section index
    question_lists: RefCell<HashMap<usize, Element>>,
}

impl TemplateForm {
    /// Wire up the editor if the page has a sections container.
    ///
    /// Returns `Ok(None)` when the page has no editor at all. A missing
    /// "add section" trigger only disables adding sections.
    pub fn attach(document: &Document, config: Rc<FormConfig>) -> Result<Option<Rc<Self>>, JsValue> {
        let trigger = document.get_element_by_id(&config.add_section_id);
        let Some(container) = document.get_element_by_id(&config.sections_container_id) else {
            if trigger.is_some() {
                warn!(
                    id = %config.sections_container_id,
                    "add-section trigger present but sections container missing"
                );
            } else {
                debug!("no template editor on page");
            }
            return Ok(None);
        };

        let names: Vec<String> = named_controls(&container)?.into_iter().map(|(name, _)| name).collect();
        let form = Rc::new(Self {
            document: document.clone(),
            container,
            builder: RefCell::new(TemplateBuilder::from_field_names(&names)),
            config,
            question_lists: RefCell::new(HashMap::new()),
        });

        form.hydrate()?;

        if let Some(trigger) = trigger {
            let handle = Rc::clone(&form);
            with_registry(|r| {
                r.bind(WidgetId::AddSection, &trigger, move || {
                    if let Err(e) = handle.add_section() {
                        warn!(error = ?e, "failed to add section");
                    }
                })
            })?;
        } else {
            debug!(id = %form.config.add_section_id, "no add-section trigger, skipping");
        }

        info!(sections = form.section_count(), "template form ready");
        Ok(Some(form))
    }

    /// Bind "add question" buttons of server-rendered sections
    fn hydrate(self: &Rc<Self>) -> Result<(), JsValue> {
        let selector = class_selector(&self.config.add_question_class);
        for button in query_all(&self.container, &selector)? {
            let Some(section) = button
                .get_attribute("data-section")
                .and_then(|s| s.trim().parse::<usize>().ok())
            else {
                debug!("add-question button without a section index, skipping");
                continue;
            };
            let Some(list) = self.find_question_list(&button)? else {
                debug!(section, "no questions container for rendered section, skipping");
                continue;
            };
            if let Err(e) = self.builder.borrow_mut().seed_section(section) {
                debug!(error = %e, "rendered section out of order, skipping");
                continue;
            }
            self.question_lists.borrow_mut().insert(section, list);
            self.bind_add_question(section, &button)?;
        }
        Ok(())
    }

    fn find_question_list(&self, button: &Element) -> Result<Option<Element>, JsValue> {
        let questions = class_selector(&self.config.questions_container_class);
        if let Some(section) = button.closest(&class_selector(&self.config.section_class))? {
            if let Some(list) = section.query_selector(&questions)? {
                return Ok(Some(list));
            }
        }
        Ok(button
            .previous_element_sibling()
            .filter(|el| el.class_list().contains(&self.config.questions_container_class)))
    }

    fn bind_add_question(self: &Rc<Self>, section: usize, button: &Element) -> Result<(), JsValue> {
        let handle = Rc::clone(self);
        with_registry(|r| {
            r.bind(WidgetId::AddQuestion(section), button, move || {
                if let Err(e) = handle.add_question(section) {
                    warn!(section, error = ?e, "failed to add question");
                }
            })
        })
    }

    /// Append a new section block
    pub fn add_section(self: &Rc<Self>) -> Result<SectionView, JsValue> {
        let view = self.builder.borrow_mut().add_section();
        let rendered = render::section(&self.document, &view, &self.config)?;
        self.container.append_child(&rendered.root)?;
        self.question_lists.borrow_mut().insert(view.index, rendered.questions);
        self.bind_add_question(view.index, &rendered.add_question)?;
        Ok(view)
    }

    /// Append a question block to `section`; unknown sections are ignored
    pub fn add_question(&self, section: usize) -> Result<(), JsValue> {
        let Some(list) = self.question_lists.borrow().get(&section).cloned() else {
            warn!(section, "add question for unknown section ignored");
            return Ok(());
        };
        let view = match self.builder.borrow_mut().add_question(section) {
            Ok(view) => view,
            Err(e) => {
                warn!(error = %e, "add question ignored");
                return Ok(());
            }
        };
        let block = render::question(&self.document, &view, &self.config)?;
        list.append_child(&block)?;
        Ok(())
    }

    pub fn section_count(&self) -> usize {
        self.builder.borrow().section_count()
    }

    pub fn question_count(&self, section: usize) -> Option<usize> {
        self.builder.borrow().question_count(section)
    }

    /// Current field values as `{"sections": [...]}` JSON
    pub fn export_json(&self) -> Result<String, JsValue> {
        let fields = named_controls(&self.container)?;
        TemplateSections::from_form_fields(fields)
            .and_then(|sections| sections.to_json())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
