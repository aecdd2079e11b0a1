//! Click bindings owned per widget
//!
//! Every interactive element gets its own listener. The registry keeps the
//! `Closure` alive for as long as the binding exists and removes the old
//! listener when the same widget is bound again.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::EventTarget;

/// Identity of a bound widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetId {
    AddSection,
    /// "Add question" button of the section with this index
    AddQuestion(usize),
    /// Audio player, by document order at load time
    AudioPlayer(usize),
}

struct Binding {
    target: EventTarget,
    handler: Closure<dyn FnMut()>,
}

#[derive(Default)]
pub struct WidgetRegistry {
    bindings: HashMap<WidgetId, Binding>,
}

impl WidgetRegistry {
    /// Attach `handler` to clicks on `target`, replacing any earlier binding of `id`
    pub fn bind<F>(&mut self, id: WidgetId, target: &EventTarget, handler: F) -> Result<(), JsValue>
    where
        F: FnMut() + 'static,
    {
        self.unbind(id);
        let handler = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        target.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        self.bindings.insert(
            id,
            Binding {
                target: target.clone(),
                handler,
            },
        );
        Ok(())
    }

    /// Remove the listener bound for `id`; returns whether one existed
    pub fn unbind(&mut self, id: WidgetId) -> bool {
        let Some(binding) = self.bindings.remove(&id) else {
            return false;
        };
        if let Err(e) = binding
            .target
            .remove_event_listener_with_callback("click", binding.handler.as_ref().unchecked_ref())
        {
            debug!(?id, error = ?e, "failed to detach click listener");
        }
        true
    }

    pub fn is_bound(&self, id: WidgetId) -> bool {
        self.bindings.contains_key(&id)
    }
}

thread_local! {
    static REGISTRY: RefCell<WidgetRegistry> = RefCell::new(WidgetRegistry::default());
}

/// Run `f` against the page-wide registry.
///
/// Must not be called from inside a handler that is being unbound by `f`.
pub fn with_registry<R>(f: impl FnOnce(&mut WidgetRegistry) -> R) -> R {
    REGISTRY.with(|r| f(&mut r.borrow_mut()))
}
