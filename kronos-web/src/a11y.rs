// Accessibility helpers

use wasm_bindgen::JsCast;

/// Update the live region status for screen readers.
///
/// Updates the text content of the #status-helper element if present. This
/// provides announcements to assistive technology users.
pub fn set_status(msg: &str) {
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id("status-helper"))
    {
        node.set_text_content(Some(msg));
    }
}

/// Move focus to the element with the given id, if it exists.
pub fn focus_element(id: &str) {
    if let Some(el) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}
