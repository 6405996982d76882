use dioxus::prelude::*;
use portfolio_core::SKILL_GROUPS;
use portfolio_ui::FadeInUp;

use crate::components::SkillCard;

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { id: "skills", class: "section",
            div { class: "section-inner",
                FadeInUp { class: Some("section-header".to_string()),
                    span { class: "eyebrow", "Abilities" }
                    h2 { class: "section-title", "TECHNICAL SPEC." }
                }
                div { class: "skills-grid",
                    for (index, group) in SKILL_GROUPS.iter().enumerate() {
                        SkillCard { key: "{group.title}", group: *group, index }
                    }
                }
            }
        }
    }
}
