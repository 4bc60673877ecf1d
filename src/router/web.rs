use dioxus_logger::tracing::{debug, warn};
use web_sys::{
    js_sys::JSON,
    wasm_bindgen::{closure::Closure, JsCast as _, JsValue},
    PopStateEvent,
};

use super::history::{History, HistoryError};

fn window() -> Result<web_sys::Window, HistoryError> {
    web_sys::window().ok_or(HistoryError::NoWindow)
}

fn host_error(err: JsValue) -> HistoryError {
    HistoryError::Host(format!("{err:?}"))
}

/// Turns a browser history state into the JSON text the router understands.
/// `null`/`undefined` mean the entry carries nothing.
fn state_to_payload(state: &JsValue) -> Option<String> {
    if state.is_null() || state.is_undefined() {
        return None;
    }
    if let Some(text) = state.as_string() {
        return Some(text);
    }
    JSON::stringify(state).ok().map(String::from)
}

/// `window.history` of the page the app is mounted in.
pub struct BrowserHistory {
    history: web_sys::History,
}

impl BrowserHistory {
    pub fn new() -> Result<Self, HistoryError> {
        let history = window()?.history().map_err(host_error)?;
        Ok(Self { history })
    }
}

impl History for BrowserHistory {
    fn len(&self) -> usize {
        self.history.length().map(|len| len as usize).unwrap_or_default()
    }

    fn current_payload(&self) -> Option<String> {
        let state = self.history.state().ok()?;
        state_to_payload(&state)
    }

    fn push(&mut self, payload: &str, url: &str) -> Result<(), HistoryError> {
        let state = JSON::parse(payload).map_err(host_error)?;
        self.history
            .push_state_with_url(&state, "", Some(url))
            .map_err(host_error)
    }

    fn replace(&mut self, payload: &str, url: &str) -> Result<(), HistoryError> {
        let state = JSON::parse(payload).map_err(host_error)?;
        self.history
            .replace_state_with_url(&state, "", Some(url))
            .map_err(host_error)
    }
}

/// Keeps a `popstate` handler registered on the window until dropped.
pub struct PopStateListener {
    window: web_sys::Window,
    callback: Closure<dyn FnMut(PopStateEvent)>,
}

impl PopStateListener {
    pub fn attach(mut on_change: impl FnMut(Option<String>) + 'static) -> Result<Self, HistoryError> {
        let window = window()?;
        let callback = Closure::<dyn FnMut(PopStateEvent)>::new(move |event: PopStateEvent| {
            let payload = state_to_payload(&event.state());
            debug!(?payload, "popstate");
            on_change(payload);
        });
        window
            .add_event_listener_with_callback("popstate", callback.as_ref().unchecked_ref())
            .map_err(host_error)?;
        Ok(Self { window, callback })
    }
}

impl Drop for PopStateListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("popstate", self.callback.as_ref().unchecked_ref())
        {
            warn!("failed to detach popstate listener: {e:?}");
        }
    }
}

/// Scrolls the element with the given DOM id into view, if it exists.
pub fn scroll_into_view(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => element.scroll_into_view(),
        None => debug!("no element `#{id}` to scroll to"),
    }
}
