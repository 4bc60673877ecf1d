use dioxus::prelude::*;

use crate::components::{GlassCard, Icon, IconGlyph, PageTransition};
use crate::config::{self, AVAILABILITY, CONTACT_EMAIL, GITHUB_URL, LINKEDIN_URL};
use crate::data::OPPORTUNITIES;

#[component]
pub fn Contact() -> Element {
    let mailto = config::mailto_link();
    rsx! {
        PageTransition {
            div { class: "page",
                header { class: "page-header",
                    h1 { "Let's Connect" }
                    p { class: "lead",
                        "Ready to contribute to your ML team and learn from industry experts. Let's discuss opportunities!"
                    }
                }
                div { class: "contact-grid",
                    GlassCard { class: "contact-details",
                        h3 { "Get In Touch" }
                        div { class: "contact-row",
                            IconGlyph { icon: Icon::Mail }
                            div {
                                p { class: "contact-label", "Email" }
                                a { href: "{mailto}", {CONTACT_EMAIL} }
                            }
                        }
                        div { class: "contact-row",
                            IconGlyph { icon: Icon::Sparkles }
                            div {
                                p { class: "contact-label", "Status" }
                                p { class: "status-available", {AVAILABILITY} }
                            }
                        }
                    }
                    GlassCard { class: "contact-wants",
                        h3 { "What I'm Looking For" }
                        ul { class: "bullet-list",
                            for item in OPPORTUNITIES.iter() {
                                li { key: "{item}", "{item}" }
                            }
                        }
                    }
                }
                GlassCard { class: "contact-cta", hover: false,
                    p {
                        strong { "Ready to start immediately" }
                        " and contribute to your team's success"
                    }
                    a { class: "button-primary", href: "{mailto}",
                        IconGlyph { icon: Icon::Mail }
                        span { "Send Message" }
                    }
                }
                div { class: "social-links",
                    a {
                        href: LINKEDIN_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        IconGlyph { icon: Icon::Linkedin }
                    }
                    a {
                        href: GITHUB_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        IconGlyph { icon: Icon::Github }
                    }
                }
                p { class: "response-time", "Response time: Usually within 24 hours" }
            }
        }
    }
}
