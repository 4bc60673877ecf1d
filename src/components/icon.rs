use dioxus::prelude::*;

/// Symbols used across the site. Rendered as text glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Brain,
    Globe,
    Code,
    Database,
    Palette,
    Zap,
    TrendingUp,
    Home,
    User,
    Folder,
    Mail,
    Resume,
    Menu,
    Close,
    ArrowRight,
    ChevronDown,
    ExternalLink,
    Sparkles,
    Github,
    Linkedin,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Brain => "🧠",
            Icon::Globe => "🌐",
            Icon::Code => "</>",
            Icon::Database => "🗄",
            Icon::Palette => "🎨",
            Icon::Zap => "⚡",
            Icon::TrendingUp => "📈",
            Icon::Home => "⌂",
            Icon::User => "👤",
            Icon::Folder => "📁",
            Icon::Mail => "✉",
            Icon::Resume => "📄",
            Icon::Menu => "☰",
            Icon::Close => "✕",
            Icon::ArrowRight => "→",
            Icon::ChevronDown => "⌄",
            Icon::ExternalLink => "↗",
            Icon::Sparkles => "✨",
            Icon::Github => "GH",
            Icon::Linkedin => "in",
        }
    }
}

#[component]
pub fn IconGlyph(icon: Icon) -> Element {
    let name = format!("{icon:?}").to_lowercase();
    let glyph = icon.glyph();
    rsx! {
        span { class: "icon icon-{name}", "aria-hidden": "true", "{glyph}" }
    }
}
