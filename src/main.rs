#![allow(non_snake_case)]
#![cfg_attr(not(feature = "web"), allow(dead_code))]

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::router::{host_history, AppRouter, PageRouter};

mod components;
mod config;
mod data;
mod pages;
mod router;

fn main() {
    // Init logger
    dioxus_logger::init(config::LOG_LEVEL).expect("failed to init logger");
    tracing::info!("starting app");

    #[cfg(feature = "web")]
    dioxus::launch(App);
}

fn App() -> Element {
    let router = use_context_provider(|| {
        let mut router: AppRouter = PageRouter::new(host_history());
        router.initialize();
        Signal::new(router)
    });
    use_history_listener(router);

    rsx! {
        pages::Pages {}
    }
}

/// Feeds browser back/forward moves into the router for as long as `App` lives.
#[cfg(feature = "web")]
fn use_history_listener(mut router: Signal<AppRouter>) {
    use crate::router::web::PopStateListener;
    use std::rc::Rc;

    use_hook(move || {
        let listener = PopStateListener::attach(move |payload| {
            router.write().on_history_change(payload.as_deref());
        });
        match listener {
            Ok(listener) => Some(Rc::new(listener)),
            Err(e) => {
                tracing::warn!("not following browser back/forward: {e}");
                None
            }
        }
    });
}

#[cfg(not(feature = "web"))]
fn use_history_listener(_router: Signal<AppRouter>) {}
