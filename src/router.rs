//! Page navigation kept in step with the host's back/forward history.
//!
//! Two flows, never mixed in one call: a user action goes through
//! [`PageRouter::navigate`] and pushes a history entry; a host back/forward
//! move goes through [`PageRouter::on_history_change`] and only updates state.

use dioxus_logger::tracing::{debug, info, warn};

pub use history::{History, HistoryEntry, MemoryHistory};
pub use page::PageId;

pub mod history;
pub mod page;
#[cfg(feature = "web")]
pub mod web;

/// Everything that decides what the site currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub page: PageId,
    pub mobile_menu_open: bool,
}

pub struct PageRouter<H> {
    state: NavigationState,
    history: H,
}

/// Router as held by the app, with the host picked at startup.
pub type AppRouter = PageRouter<Box<dyn History>>;

impl<H: History> PageRouter<H> {
    pub fn new(history: H) -> Self {
        Self {
            state: NavigationState::default(),
            history,
        }
    }

    /// Gives the host's current entry a payload if it has none, so the first
    /// back move always lands on something. Leaves the current page alone.
    pub fn initialize(&mut self) {
        if self.history.current_payload().is_some() {
            return;
        }
        let entry = HistoryEntry::new(PageId::Home);
        let result = entry
            .encode()
            .and_then(|payload| self.history.replace(&payload, &entry.url()));
        if let Err(e) = result {
            warn!("failed to seed initial history entry: {e}");
        }
    }

    pub fn navigate(&mut self, target: PageId) {
        debug!(from = %self.state.page, to = %target, "navigate");
        self.state.page = target;
        self.state.mobile_menu_open = false;

        let entry = HistoryEntry::new(target);
        let result = entry
            .encode()
            .and_then(|payload| self.history.push(&payload, &entry.url()));
        if let Err(e) = result {
            warn!("failed to record `{target}` in history: {e}");
        }
    }

    /// Navigates by textual id. Unrecognized ids change nothing.
    pub fn navigate_to(&mut self, id: &str) {
        match id.parse() {
            Ok(page) => self.navigate(page),
            Err(e) => warn!("ignoring navigation request: {e}"),
        }
    }

    /// Host moved back or forward. Malformed or missing payloads land on home.
    pub fn on_history_change(&mut self, payload: Option<&str>) {
        let page = match HistoryEntry::decode(payload) {
            Some(entry) => entry.page,
            None => {
                info!(?payload, "history entry without a page, showing home");
                PageId::Home
            }
        };
        debug!(from = %self.state.page, to = %page, "history change");
        self.state.page = page;
        self.state.mobile_menu_open = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.state.mobile_menu_open = !self.state.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.state.mobile_menu_open = false;
    }

    pub fn current_page(&self) -> PageId {
        self.state.page
    }

    pub fn is_active(&self, page: PageId) -> bool {
        self.state.page == page
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.state.mobile_menu_open
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }
}

#[cfg(feature = "web")]
pub fn host_history() -> Box<dyn History> {
    match web::BrowserHistory::new() {
        Ok(history) => Box::new(history),
        Err(e) => {
            warn!("browser history unavailable, keeping history in memory: {e}");
            Box::new(MemoryHistory::new())
        }
    }
}

#[cfg(not(feature = "web"))]
pub fn host_history() -> Box<dyn History> {
    info!("built without the web feature, keeping history in memory");
    Box::new(MemoryHistory::new())
}
