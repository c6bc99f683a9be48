//! Small `web-sys` conveniences shared by the gate and the launcher.

/// Lock or restore page scroll while a blocking overlay is up.
pub fn set_page_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let overflow = if locked { "hidden" } else { "auto" };
    let _ = body.style().set_property("overflow", overflow);
}

/// Navigate the browsing context away from the application.
pub fn redirect_to(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Smoothly scroll an in-page section into view. Returns `false` when the
/// element is not in the current document, so callers can fall back to
/// normal navigation.
pub fn smooth_scroll_to(id: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}
