//! Page-level components: global overlays, navigation and cards.

mod cursor;
mod footer;
pub(crate) mod mobile_menu;
mod navbar;
mod noise;
mod project_card;
mod project_modal;
mod skill_card;

pub use cursor::CustomCursor;
pub use footer::Footer;
pub use navbar::Navbar;
pub use noise::Noise;
pub use project_card::ProjectCard;
pub use project_modal::ProjectModal;
pub use skill_card::SkillCard;
