use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    window, Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

fn document() -> Option<Document> {
    window()?.document()
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// True when the event target is, or sits inside, an element matching `selector`.
pub fn event_within(event: &Event, selector: &str) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(selector).ok().flatten())
        .is_some()
}

pub fn set_body_class(class: &str, enabled: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };
    let classes = body.class_list();
    let result = if enabled {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if result.is_err() {
        debug!("Could not update body class {}", class);
    }
}

/// Smooth-scrolls `element` into view along the block axis.
pub fn scroll_into_view(element: &Element, block: ScrollLogicalPosition) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Blocking `window.confirm`. Without a window the answer is no.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Listener registered on `document`, removed again when dropped.
pub struct DocumentListener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl DocumentListener {
    pub fn new<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let document = document()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        document
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { event, callback })
    }
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        if let Some(document) = document() {
            let removed = document
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
            if removed.is_err() {
                debug!("Could not remove {} listener", self.event);
            }
        }
    }
}
