// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Cada listener es un gloo_events::EventListener: al hacer drop se quita del
//   elemento y libera el closure (y los Rc que capturó).
// - Los listeners creados durante un render se acumulan en RENDER_LISTENERS.
//   App::render los recoge con take_render_listeners() y reemplaza los del
//   render anterior, que se liberan en ese momento.
// - No registrar listeners globales (window/document) desde las vistas.
// ============================================================================

use std::cell::RefCell;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement};

/// Listeners vivos de un render; se liberan todos juntos al soltar la bolsa
pub struct ListenerBag<T> {
    listeners: Vec<T>,
}

impl<T> ListenerBag<T> {
    pub const fn new() -> Self {
        Self { listeners: Vec::new() }
    }

    pub fn register(&mut self, listener: T) {
        self.listeners.push(listener);
    }

    /// Vaciar la bolsa y devolver lo acumulado
    pub fn take(&mut self) -> Vec<T> {
        std::mem::take(&mut self.listeners)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl<T> Default for ListenerBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static RENDER_LISTENERS: RefCell<ListenerBag<EventListener>> = const { RefCell::new(ListenerBag::new()) };
}

/// Listeners registrados desde el último take (los del render en curso)
pub fn take_render_listeners() -> Vec<EventListener> {
    RENDER_LISTENERS.with(|bag| bag.borrow_mut().take())
}

fn keep(listener: EventListener) {
    RENDER_LISTENERS.with(|bag| bag.borrow_mut().register(listener));
}

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(&Event) + 'static,
{
    keep(EventListener::new(element, "click", move |e| handler(e)));
    Ok(())
}

/// Submit de <form>: se hace preventDefault y se llama al handler
pub fn on_submit<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    // Listener no pasivo: de lo contrario preventDefault se ignora
    keep(EventListener::new_with_options(
        element,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |e| {
            e.prevent_default();
            handler();
        },
    ));
    Ok(())
}

/// Cada tecla en un <input>: el handler recibe el valor actual
pub fn on_input_value<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    keep(EventListener::new(element, "input", move |e| {
        if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
            handler(input.value());
        }
    }));
    Ok(())
}

/// Cambio de un <select>: el handler recibe el value de la opción elegida
pub fn on_select_change<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    keep(EventListener::new(element, "change", move |e| {
        if let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
            handler(select.value());
        }
    }));
    Ok(())
}
