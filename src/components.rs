pub use glass_card::{GlassCard, PageTransition};
pub use icon::{Icon, IconGlyph};

mod glass_card;
mod icon;
