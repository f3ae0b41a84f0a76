use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

pub fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

/// Current value of a text input or select control; empty when the element
/// is missing or is neither.
pub fn control_value(document: &Document, id: &str) -> String {
    let Some(element) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return select.value();
    }
    String::new()
}

pub fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(element) = document.get_element_by_id(id) {
        element.set_text_content(Some(text));
    }
}

pub fn replace_html(document: &Document, id: &str, html: &str) {
    if let Some(element) = document.get_element_by_id(id) {
        element.set_inner_html(html);
    }
}

/// Appends one option element per value to a select control. Called exactly
/// once per dataset load; the empty "all" option ships with the host page.
pub fn append_options(document: &Document, id: &str, values: &[String]) -> Result<(), JsValue> {
    let select = element(document, id)?;
    for value in values {
        let option = document.create_element("option")?;
        option.set_attribute("value", value)?;
        option.set_text_content(Some(value));
        select.append_child(&option)?;
    }
    Ok(())
}

/// Attaches the handler to both `input` and `change` so live typing and
/// discrete selections each trigger a re-render.
pub fn on_control_change(
    document: &Document,
    id: &str,
    handler: Rc<dyn Fn()>,
) -> Result<(), JsValue> {
    let target = element(document, id)?;
    for event in ["input", "change"] {
        let handler = handler.clone();
        let closure = Closure::<dyn FnMut()>::new(move || handler());
        let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
        target.add_event_listener_with_callback(event, callback)?;
        // Listeners live for the whole session.
        closure.forget();
    }
    Ok(())
}
