//! Webview bridge scripts
//!
//! Host signals (scroll, pointer, visibility, pointer capability) only exist
//! on the JS side. Each subscription script posts samples with
//! `dioxus.send` and registers its listener under a `window.__portfolio*`
//! key so the matching teardown script can remove it when the owning
//! component is dropped.

/// Keeps a subscription script alive so its channel stays open.
const PARK: &str = "await new Promise(() => {});";

const SCROLL_SUBSCRIBE: &str = r#"
const send = () => {
  const max = document.documentElement.scrollHeight - window.innerHeight;
  dioxus.send({ offset: window.scrollY, max_offset: Math.max(0, max) });
};
window.__portfolioScroll = send;
window.addEventListener('scroll', send, { passive: true });
window.addEventListener('resize', send);
send();
"#;

const SCROLL_UNSUBSCRIBE: &str = r#"
if (window.__portfolioScroll) {
  window.removeEventListener('scroll', window.__portfolioScroll);
  window.removeEventListener('resize', window.__portfolioScroll);
  delete window.__portfolioScroll;
}
"#;

const POINTER_SUBSCRIBE: &str = r#"
const move = (e) => {
  const t = e.target;
  const clickable = t instanceof Element && window.getComputedStyle(t).cursor === 'pointer';
  dioxus.send({ x: e.clientX, y: e.clientY, clickable });
};
window.__portfolioPointer = move;
window.addEventListener('mousemove', move, { passive: true });
"#;

const POINTER_UNSUBSCRIBE: &str = r#"
if (window.__portfolioPointer) {
  window.removeEventListener('mousemove', window.__portfolioPointer);
  delete window.__portfolioPointer;
}
"#;

const CAPABILITY_SUBSCRIBE: &str = r#"
const query = window.matchMedia('(pointer: coarse)');
const send = () => dioxus.send(query.matches);
window.__portfolioCapability = { query, send };
query.addEventListener('change', send);
send();
"#;

const CAPABILITY_UNSUBSCRIBE: &str = r#"
if (window.__portfolioCapability) {
  const { query, send } = window.__portfolioCapability;
  query.removeEventListener('change', send);
  delete window.__portfolioCapability;
}
"#;

/// `__ID__` is replaced with the observed element id.
const VIEWPORT_OBSERVE: &str = r#"
const id = "__ID__";
window.__portfolioObservers = window.__portfolioObservers || {};
const watch = (el) => {
  const observer = new IntersectionObserver((entries) => {
    for (const entry of entries) {
      if (entry.isIntersecting) {
        dioxus.send(true);
        observer.disconnect();
        delete window.__portfolioObservers[id];
        return;
      }
    }
  }, { threshold: 0.1 });
  window.__portfolioObservers[id] = observer;
  observer.observe(el);
};
const find = (tries) => {
  const el = document.getElementById(id);
  if (el) {
    watch(el);
  } else if (tries > 0) {
    requestAnimationFrame(() => find(tries - 1));
  } else {
    dioxus.send(true);
  }
};
find(120);
"#;

const VIEWPORT_UNOBSERVE: &str = r#"
const id = "__ID__";
if (window.__portfolioObservers && window.__portfolioObservers[id]) {
  window.__portfolioObservers[id].disconnect();
  delete window.__portfolioObservers[id];
}
"#;

const THEME_APPLY: &str = r#"
document.documentElement.classList.toggle('__CLASS__', __ON__);
"#;

fn subscription(body: &str) -> String {
    format!("{body}\n{PARK}")
}

/// Posts a `ScrollSample` on every scroll and resize, plus one immediately.
pub fn scroll_subscribe() -> String {
    subscription(SCROLL_SUBSCRIBE)
}

pub fn scroll_unsubscribe() -> String {
    SCROLL_UNSUBSCRIBE.to_string()
}

/// Posts a `PointerSample` on every mouse move.
pub fn pointer_subscribe() -> String {
    subscription(POINTER_SUBSCRIBE)
}

pub fn pointer_unsubscribe() -> String {
    POINTER_UNSUBSCRIBE.to_string()
}

/// Posts `true` while the primary pointer is coarse, on start and on change.
pub fn capability_subscribe() -> String {
    subscription(CAPABILITY_SUBSCRIBE)
}

pub fn capability_unsubscribe() -> String {
    CAPABILITY_UNSUBSCRIBE.to_string()
}

/// Posts `true` once, the first time the element enters the viewport, then
/// disconnects. Gives up and posts `true` if the element never mounts so
/// the content is not left hidden.
pub fn viewport_observe(dom_id: &str) -> String {
    subscription(&VIEWPORT_OBSERVE.replace("__ID__", &escape(dom_id)))
}

pub fn viewport_unobserve(dom_id: &str) -> String {
    VIEWPORT_UNOBSERVE.replace("__ID__", &escape(dom_id))
}

/// Force `class` on the document root to `on`.
pub fn document_class(class: &str, on: bool) -> String {
    THEME_APPLY
        .replace("__CLASS__", &escape(class))
        .replace("__ON__", if on { "true" } else { "false" })
}

/// Ids and classes are generated by us, but keep them inert inside JS strings.
fn escape(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscriptions_stay_parked() {
        for script in [scroll_subscribe(), pointer_subscribe(), capability_subscribe()] {
            assert!(script.contains("dioxus.send"));
            assert!(script.trim_end().ends_with(PARK));
        }
    }

    #[test]
    fn teardown_matches_subscription_keys() {
        assert!(scroll_unsubscribe().contains("__portfolioScroll"));
        assert!(pointer_unsubscribe().contains("__portfolioPointer"));
        assert!(capability_unsubscribe().contains("__portfolioCapability"));
    }

    #[test]
    fn viewport_scripts_carry_the_id() {
        let observe = viewport_observe("reveal-7");
        assert!(observe.contains(r#"const id = "reveal-7";"#));
        assert!(observe.contains("observer.disconnect()"));
        assert!(!observe.contains("__ID__"));
        assert!(viewport_unobserve("reveal-7").contains(r#""reveal-7""#));
    }

    #[test]
    fn ids_are_escaped() {
        let script = viewport_observe(r#"x"; alert(1); ""#);
        assert!(script.contains(r#"const id = "xalert1";"#));
    }

    #[test]
    fn document_class_forces_state() {
        let on = document_class("light", true);
        assert!(on.contains("classList.toggle('light', true)"));
        let off = document_class("light", false);
        assert!(off.contains("classList.toggle('light', false)"));
    }
}
