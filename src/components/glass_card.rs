use dioxus::prelude::*;

#[component]
pub fn GlassCard(
    #[props(default, into)] class: String,
    #[props(default = true)] hover: bool,
    children: Element,
) -> Element {
    let hover_class = if hover { "glass-card-hover" } else { "" };
    rsx! {
        div { class: "glass-card {hover_class} {class}", {children} }
    }
}

/// Wraps a page so it fades in when it replaces the previous one.
#[component]
pub fn PageTransition(children: Element) -> Element {
    rsx! {
        div { class: "page-transition", {children} }
    }
}
