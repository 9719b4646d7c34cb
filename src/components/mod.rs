//! UI Components
//!
//! Reusable Leptos components.

mod article_card;
mod hero;
mod particles_background;
mod tech_badge;

pub use article_card::ArticleCard;
pub use hero::Hero;
pub use particles_background::ParticlesBackground;
pub use tech_badge::TechBadge;
