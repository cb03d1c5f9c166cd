//! JavaScript bridge to the host page
//!
//! The page drives the viewer with JSON `UiToViewer` messages carried in the
//! `detail` of a `scarab:ui-to-viewer` CustomEvent on `window`; replies go
//! out as `scarab:viewer-to-ui` events.

use scarab_ipc::{UiToViewer, ViewerToUi};
use std::cell::RefCell;
use std::collections::VecDeque;
use wasm_bindgen::prelude::*;

/// Event the page dispatches to talk to the viewer
pub const UI_TO_VIEWER_EVENT: &str = "scarab:ui-to-viewer";

/// Event the viewer dispatches to talk to the page
pub const VIEWER_TO_UI_EVENT: &str = "scarab:viewer-to-ui";

thread_local! {
    /// Queue of messages received from the page
    static MESSAGE_QUEUE: RefCell<VecDeque<UiToViewer>> = RefCell::new(VecDeque::new());
}

/// Install the `window` listener for page -> viewer messages
pub fn init_bridge() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;

    let closure = Closure::wrap(Box::new(move |event: web_sys::CustomEvent| {
        let Some(detail) = event.detail().as_string() else {
            web_sys::console::warn_1(&"Ignoring UI event without a string detail".into());
            return;
        };
        match UiToViewer::from_json(&detail) {
            Ok(msg) => {
                MESSAGE_QUEUE.with(|queue| {
                    queue.borrow_mut().push_back(msg);
                });
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to parse UI message: {}", e).into());
            }
        }
    }) as Box<dyn FnMut(_)>);

    window.add_event_listener_with_callback(UI_TO_VIEWER_EVENT, closure.as_ref().unchecked_ref())?;

    // Keep the closure alive
    closure.forget();

    web_sys::console::log_1(&"Scarab WASM bridge initialized".into());
    Ok(())
}

/// Poll for the next message from the page (non-blocking)
pub fn poll_ui_message() -> Option<UiToViewer> {
    MESSAGE_QUEUE.with(|queue| queue.borrow_mut().pop_front())
}

/// Dispatch a message to the page
pub fn send_to_ui(msg: &ViewerToUi) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let json = msg
        .to_json()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let init = web_sys::CustomEventInit::new();
    init.set_detail(&JsValue::from_str(&json));
    let event = web_sys::CustomEvent::new_with_event_init_dict(VIEWER_TO_UI_EVENT, &init)?;

    window.dispatch_event(&event)?;
    Ok(())
}
