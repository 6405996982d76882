//! Entrance Reveals
//!
//! Text split into characters or words that rise into place, one after
//! another, the first time the block scrolls into view. `FadeInUp` applies
//! the same one-shot entrance to arbitrary children.

use dioxus::prelude::*;
use portfolio_core::motion::{reveal_units, RevealTiming, RevealUnitKind, CINEMATIC_EASING};

use crate::hooks::{use_portfolio_config, use_viewport_entry};

/// Per-unit render data: text and its `transition` style.
fn unit_styles(
    text: &str,
    kind: RevealUnitKind,
    delay: f64,
    timing: &RevealTiming,
) -> Vec<(usize, String, String)> {
    reveal_units(text, kind, delay, timing)
        .into_iter()
        .map(|unit| {
            let glyph = if kind == RevealUnitKind::Character && unit.text.trim().is_empty() {
                "\u{00a0}".to_string()
            } else {
                unit.text
            };
            (unit.index, glyph, timing.transition(unit.delay_secs))
        })
        .collect()
}

fn state_class(entered: bool) -> &'static str {
    if entered {
        "is-revealed"
    } else {
        ""
    }
}

/// Character-by-character reveal for headlines
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CharReveal { text: "Engineering", delay: 0.2 }
/// }
/// ```
#[component]
pub fn CharReveal(
    text: String,
    /// Base delay in seconds before the first character moves
    #[props(default)]
    delay: f64,
    #[props(default)] class: Option<String>,
) -> Element {
    let timing = use_portfolio_config().reveal;
    let (dom_id, entered) = use_viewport_entry("char-reveal");
    let units = unit_styles(&text, RevealUnitKind::Character, delay, &timing);
    let extra_class = class.unwrap_or_default();
    let state = state_class(entered());

    rsx! {
        span {
            id: "{dom_id}",
            class: "char-reveal {state} {extra_class}",
            "aria-label": "{text}",
            for (index, glyph, transition) in units {
                span { key: "{index}", class: "reveal-mask", "aria-hidden": "true",
                    span {
                        class: "reveal-unit reveal-unit--char",
                        style: "transition: {transition};",
                        "{glyph}"
                    }
                }
            }
        }
    }
}

/// Word-by-word reveal for body copy
#[component]
pub fn TextReveal(
    text: String,
    #[props(default)] delay: f64,
    #[props(default)] class: Option<String>,
) -> Element {
    let timing = use_portfolio_config().reveal;
    let (dom_id, entered) = use_viewport_entry("text-reveal");
    let units = unit_styles(&text, RevealUnitKind::Word, delay, &timing);
    let extra_class = class.unwrap_or_default();
    let state = state_class(entered());

    rsx! {
        span {
            id: "{dom_id}",
            class: "text-reveal {state} {extra_class}",
            for (index, word, transition) in units {
                span { key: "{index}", class: "reveal-mask",
                    span {
                        class: "reveal-unit reveal-unit--word",
                        style: "transition: {transition};",
                        "{word}"
                    }
                    " "
                }
            }
        }
    }
}

/// Fades children in while lifting them 30px
#[component]
pub fn FadeInUp(
    #[props(default)] delay: f64,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let timing = use_portfolio_config().reveal;
    let (dom_id, entered) = use_viewport_entry("fade-in-up");
    let extra_class = class.unwrap_or_default();
    let state = state_class(entered());
    let d = timing.duration_secs;

    rsx! {
        div {
            id: "{dom_id}",
            class: "fade-in-up {state} {extra_class}",
            style: "transition: opacity {d}s {CINEMATIC_EASING} {delay:.2}s, transform {d}s {CINEMATIC_EASING} {delay:.2}s;",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_spaces_keep_their_width() {
        let units = unit_styles("a b", RevealUnitKind::Character, 0.0, &RevealTiming::default());
        let glyphs: Vec<&str> = units.iter().map(|(_, g, _)| g.as_str()).collect();
        assert_eq!(glyphs, vec!["a", "\u{00a0}", "b"]);
    }

    #[test]
    fn words_are_staggered() {
        let units = unit_styles("one two", RevealUnitKind::Word, 0.5, &RevealTiming::default());
        assert_eq!(units.len(), 2);
        assert!(units[0].2.contains(" 0.50s"));
        assert!(units[1].2.contains(" 0.55s"));
    }

    #[test]
    fn hidden_until_entered() {
        assert_eq!(state_class(false), "");
        assert_eq!(state_class(true), "is-revealed");
    }
}
