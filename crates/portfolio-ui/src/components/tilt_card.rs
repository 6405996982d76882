//! Tilt Card
//!
//! A surface that leans toward the pointer in 3D and carries a soft
//! spotlight under it. On coarse pointers it stays flat.

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::motion::{MoveSequence, SurfaceRect, TiltConfig, TiltSurface};
use portfolio_core::PointerCapability;

use crate::animation::use_animator;
use crate::hooks::{use_pointer_capability, use_portfolio_config};

/// Accent color of the spotlight as `r, g, b`
pub const SPOTLIGHT_RGB: &str = "255, 176, 0";

/// Which tuning a card uses
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TiltKind {
    /// Compact skill tiles: stronger lean, tighter spotlight
    #[default]
    Skill,
    /// Project panels: gentler lean, wider spotlight
    Project,
}

impl TiltKind {
    pub fn class(&self) -> &'static str {
        match self {
            TiltKind::Skill => "tilt-card--skill",
            TiltKind::Project => "tilt-card--project",
        }
    }
}

/// Properties for the TiltCard component
#[derive(Clone, PartialEq, Props)]
pub struct TiltCardProps {
    #[props(default)]
    pub kind: TiltKind,
    pub children: Element,
    /// Called when the card is clicked
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Pointer-reactive tilt and spotlight surface
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TiltCard { kind: TiltKind::Project, onclick: move |_| focus.set(Some(p)),
///         h3 { "{p.name}" }
///     }
/// }
/// ```
#[component]
pub fn TiltCard(props: TiltCardProps) -> Element {
    let config = use_portfolio_config();
    let tilt_config: TiltConfig = match props.kind {
        TiltKind::Skill => config.skill_tilt,
        TiltKind::Project => config.project_tilt,
    };
    let capability = use_pointer_capability();
    let initial = capability
        .map(|cap| *cap.peek())
        .unwrap_or(PointerCapability::Fine);

    let mut card = use_animator(move || TiltSurface::new(tilt_config, initial));
    let mut mounted: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut moves = use_signal(MoveSequence::new);

    use_effect(move || {
        if let Some(cap) = capability {
            let cap = cap();
            card.update(|c| c.set_capability(cap));
        }
    });

    let (pose, coarse) = card.with(|c| (c.pose(), c.capability().is_coarse()));
    let transform = pose.css_transform();
    let spotlight = if coarse {
        "none".to_string()
    } else {
        pose.spotlight_gradient(
            tilt_config.spotlight_radius_px,
            SPOTLIGHT_RGB,
            tilt_config.spotlight_alpha,
        )
    };
    let kind_class = props.kind.class();
    let extra_class = props.class.clone().unwrap_or_default();
    let onclick = props.onclick;

    rsx! {
        div {
            class: "tilt-card {kind_class} {extra_class}",
            style: "transform: {transform};",
            onmounted: move |evt: MountedEvent| mounted.set(Some(evt.data())),
            onmouseenter: move |_| card.update(|c| c.pointer_enter()),
            onmousemove: move |evt: MouseEvent| {
                let point = evt.client_coordinates();
                let Some(node) = mounted() else { return };
                let ticket = moves.write().issue();
                spawn(async move {
                    match node.get_client_rect().await {
                        Ok(rect) => {
                            if !moves.write().accept(ticket) {
                                return;
                            }
                            let rect = SurfaceRect::new(
                                rect.origin.x,
                                rect.origin.y,
                                rect.size.width,
                                rect.size.height,
                            );
                            card.update(|c| c.pointer_move(rect, point.x, point.y));
                        }
                        Err(e) => tracing::debug!(error = ?e, "Card bounds unavailable"),
                    }
                });
            },
            onmouseleave: move |_| card.update(|c| c.pointer_leave()),
            onmousedown: move |_| card.update(|c| c.press()),
            onmouseup: move |_| card.update(|c| c.release()),
            onclick: move |_| {
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },

            div { class: "tilt-card-spotlight", style: "background: {spotlight};" }
            div { class: "tilt-card-body", {props.children} }
        }
    }
}
