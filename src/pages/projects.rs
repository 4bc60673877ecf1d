use dioxus::prelude::*;

use crate::components::{GlassCard, Icon, IconGlyph, PageTransition};
use crate::data::{ProjectRecord, PROJECTS};

#[component]
pub fn Projects() -> Element {
    rsx! {
        PageTransition {
            div { class: "page",
                header { class: "page-header",
                    h1 { "My Projects" }
                    p { class: "lead",
                        "Showcasing my journey in machine learning and web development through practical applications"
                    }
                }
                div { class: "project-list",
                    {PROJECTS.iter().map(|project| {
                        let title = project.title;
                        rsx! { ProjectCard { key: "{title}", project: *project } }
                    })}
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: ProjectRecord) -> Element {
    let ProjectRecord {
        title,
        description,
        category,
        techs,
        highlights,
        image,
        source_link,
    } = project;
    rsx! {
        GlassCard { class: "project-card",
            div { class: "project-image",
                img { src: image, alt: title }
                span { class: "project-category", "{category}" }
            }
            div { class: "project-body",
                h3 { "{title}" }
                p { "{description}" }
                h4 { "Key Features" }
                ul { class: "bullet-list",
                    for highlight in highlights.iter() {
                        li { key: "{highlight}", "{highlight}" }
                    }
                }
                h4 { "Technologies Used" }
                div { class: "tags",
                    for tech in techs.iter() {
                        span { key: "{tech}", class: "tag", "{tech}" }
                    }
                }
                a {
                    class: "button-primary",
                    href: source_link,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    IconGlyph { icon: Icon::ExternalLink }
                    span { "View Project" }
                }
            }
        }
    }
}
