use dioxus::prelude::*;

use crate::components::{GlassCard, IconGlyph, PageTransition};
use crate::data::{JOURNEY, LEARNING_GOALS, STRENGTHS};

#[component]
pub fn About() -> Element {
    rsx! {
        PageTransition {
            div { class: "page",
                header { class: "page-header",
                    h1 { "About Me" }
                    p { class: "lead",
                        "A passionate computer science student with a keen interest in machine learning and data science"
                    }
                }
                div { class: "about-grid",
                    GlassCard { class: "journey", hover: false,
                        h2 { "My Journey" }
                        for paragraph in JOURNEY.iter() {
                            p { "{paragraph}" }
                        }
                    }
                    div { class: "about-side",
                        GlassCard { class: "strengths",
                            h3 { "What I Bring" }
                            {STRENGTHS.iter().map(|strength| {
                                let icon = strength.icon;
                                let title = strength.title;
                                let description = strength.description;
                                rsx! {
                                    div { key: "{title}", class: "strength",
                                        IconGlyph { icon: icon }
                                        div {
                                            h4 { "{title}" }
                                            p { "{description}" }
                                        }
                                    }
                                }
                            })}
                        }
                        GlassCard { class: "goals",
                            h3 { "Learning Goals" }
                            ul { class: "bullet-list",
                                for goal in LEARNING_GOALS.iter() {
                                    li { key: "{goal}", "{goal}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
