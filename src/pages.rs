use dioxus::prelude::*;

use about::About;
use contact::Contact;
use home::Home;
use projects::Projects;

use crate::components::{Icon, IconGlyph};
use crate::config::{OWNER_NAME, OWNER_ROLE, RESUME_URL};
use crate::router::{AppRouter, PageId};

mod about;
mod contact;
mod home;
mod projects;

/// The router provided by `App`. Views read the current page from it and
/// request changes through it.
pub fn use_router() -> Signal<AppRouter> {
    use_context::<Signal<AppRouter>>()
}

#[component]
pub fn Pages() -> Element {
    let router = use_router();
    let page = router.read().current_page();
    rsx! {
        div { class: "app",
            div { class: "backdrop",
                div { class: "backdrop-orb backdrop-orb-top" }
                div { class: "backdrop-orb backdrop-orb-bottom" }
                div { class: "backdrop-orb backdrop-orb-center" }
            }
            NavBar {}
            match page {
                PageId::Home => rsx! { Home {} },
                PageId::About => rsx! { About {} },
                PageId::Projects => rsx! { Projects {} },
                PageId::Contact => rsx! { Contact {} },
            }
        }
    }
}

fn page_icon(page: PageId) -> Icon {
    match page {
        PageId::Home => Icon::Home,
        PageId::About => Icon::User,
        PageId::Projects => Icon::Folder,
        PageId::Contact => Icon::Mail,
    }
}

#[component]
fn NavBar() -> Element {
    let mut router = use_router();
    let current = router.read().current_page();
    let menu_open = router.read().is_mobile_menu_open();
    let toggle_icon = if menu_open { Icon::Close } else { Icon::Menu };
    let menu_class = if menu_open { "mobile-menu open" } else { "mobile-menu" };

    rsx! {
        nav { class: "nav-bar",
            div { class: "nav-brand",
                IconGlyph { icon: Icon::Brain }
                div {
                    span { class: "nav-brand-name", {OWNER_NAME} }
                    p { class: "nav-brand-role", {OWNER_ROLE} }
                }
            }
            div { class: "nav-bar-tabs",
                for page in PageId::ALL {
                    NavButton { key: "{page}", page: page, active: page == current, mobile: false }
                }
            }
            div { class: "nav-actions",
                a {
                    class: "resume-link",
                    href: RESUME_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    IconGlyph { icon: Icon::Resume }
                    span { "Resume" }
                }
                button {
                    class: "mobile-menu-toggle",
                    onclick: move |_| router.write().toggle_mobile_menu(),
                    IconGlyph { icon: toggle_icon }
                }
            }
            div { class: menu_class,
                for page in PageId::ALL {
                    NavButton { key: "{page}", page: page, active: page == current, mobile: true }
                }
                a {
                    class: "resume-link mobile",
                    href: RESUME_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    onclick: move |_| router.write().close_mobile_menu(),
                    IconGlyph { icon: Icon::Resume }
                    span { "Resume" }
                }
            }
        }
    }
}

#[component]
fn NavButton(page: PageId, active: bool, mobile: bool) -> Element {
    let mut router = use_router();
    let label = page.label();
    let mut class = String::from("nav-bar-tab");
    if mobile {
        class.push_str(" mobile");
    }
    if active {
        class.push_str(" active");
    }
    rsx! {
        button {
            class: class,
            onclick: move |_| router.write().navigate(page),
            IconGlyph { icon: page_icon(page) }
            span { "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_a_distinct_icon() {
        let icons: Vec<_> = PageId::ALL.into_iter().map(page_icon).collect();
        for (i, icon) in icons.iter().enumerate() {
            assert!(!icons[i + 1..].contains(icon), "{icon:?} used twice");
        }
    }
}
