//! Skill Card
//!
//! One skill group on a tilt surface: icon, title and a chip per skill.

use dioxus::prelude::*;
use portfolio_core::SkillGroup;
use portfolio_ui::{Icon, TiltCard, TiltKind};

#[component]
pub fn SkillCard(group: SkillGroup, index: usize) -> Element {
    rsx! {
        TiltCard { kind: TiltKind::Skill, class: Some("skill-card glass".to_string()),
            div { class: "card-accent",
                span { class: "card-accent-dot" }
                span { class: "card-accent-line" }
            }
            div { class: "card-ref",
                span { "REF_ID_{index}" }
                span { "AUTH_LEVEL_04" }
            }
            div { class: "card-layer card-layer--front",
                div { class: "card-icon",
                    Icon { glyph: group.glyph, size: 28 }
                }
                h3 { class: "card-title", "{group.title}" }
                div { class: "skill-chips",
                    for (i, skill) in group.skills.iter().enumerate() {
                        span {
                            key: "{skill}",
                            class: "skill-chip",
                            style: format!("animation-delay: {:.1}s;", 0.1 * i as f64 + 0.3),
                            "{skill}"
                        }
                    }
                }
            }
        }
    }
}
