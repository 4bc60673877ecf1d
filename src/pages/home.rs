use dioxus::prelude::*;

use crate::components::{GlassCard, Icon, IconGlyph, PageTransition};
use crate::data::{self, SkillRecord, SKILLS};
use crate::pages::use_router;
use crate::router::PageId;

const SKILLS_SECTION: &str = "skills";

#[component]
pub fn Home() -> Element {
    let mut router = use_router();

    rsx! {
        PageTransition {
            div { class: "hero",
                div { class: "hero-text",
                    div { class: "badge",
                        IconGlyph { icon: Icon::Sparkles }
                        "Open to ML Internships"
                    }
                    h1 {
                        "Machine Learning"
                        span { class: "gradient-text", "Enthusiast" }
                    }
                    p { class: "lead",
                        "Passionate about building intelligent systems and extracting insights from data. "
                        "Ready to contribute fresh perspectives to your ML team."
                    }
                    div { class: "hero-actions",
                        button {
                            class: "button-primary",
                            onclick: move |_| router.write().navigate(PageId::Projects),
                            IconGlyph { icon: Icon::Folder }
                            span { "View Projects" }
                            IconGlyph { icon: Icon::ArrowRight }
                        }
                        button {
                            class: "button-secondary",
                            onclick: move |_| router.write().navigate(PageId::About),
                            IconGlyph { icon: Icon::User }
                            span { "About Me" }
                        }
                    }
                    div { class: "stats",
                        {data::stats().into_iter().map(|stat| {
                            let value = stat.value;
                            let caption = stat.caption;
                            rsx! {
                                GlassCard { key: "{caption}", class: "stat",
                                    div { class: "stat-value", "{value}" }
                                    div { class: "stat-caption", "{caption}" }
                                }
                            }
                        })}
                    }
                }
                div { class: "hero-art",
                    GlassCard { class: "hero-card",
                        IconGlyph { icon: Icon::Brain }
                        h3 { "Ready to Learn" }
                        p { "Eager to apply ML knowledge in real-world scenarios" }
                    }
                }
                button {
                    class: "scroll-hint",
                    onclick: move |_| scroll_to_section(SKILLS_SECTION),
                    IconGlyph { icon: Icon::ChevronDown }
                }
            }
            section { id: SKILLS_SECTION, class: "skills",
                h2 { "Technical Skills" }
                p { class: "lead", "Building a strong foundation in machine learning and web development" }
                div { class: "card-grid",
                    {SKILLS.iter().map(|skill| {
                        let name = skill.name;
                        rsx! { SkillCard { key: "{name}", skill: *skill } }
                    })}
                }
            }
        }
    }
}

#[component]
fn SkillCard(skill: SkillRecord) -> Element {
    let SkillRecord {
        name,
        icon,
        description,
        techs,
        level,
    } = skill;
    let has_level = level.is_some();
    let level = level.unwrap_or_default();
    rsx! {
        GlassCard { class: "skill-card",
            div { class: "skill-header",
                IconGlyph { icon: icon }
                h3 { "{name}" }
                if has_level {
                    div { class: "skill-level",
                        div { class: "skill-bar",
                            div { class: "skill-bar-fill", style: "width: {level}%" }
                        }
                        span { "{level}%" }
                    }
                }
            }
            p { "{description}" }
            div { class: "tags",
                for tech in techs.iter() {
                    span { key: "{tech}", class: "tag", "{tech}" }
                }
            }
        }
    }
}

#[cfg(feature = "web")]
fn scroll_to_section(id: &str) {
    crate::router::web::scroll_into_view(id);
}

#[cfg(not(feature = "web"))]
fn scroll_to_section(id: &str) {
    dioxus_logger::tracing::debug!("no document to scroll to `#{id}`");
}
