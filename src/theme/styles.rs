//! Global CSS styles for the portfolio.
//!
//! Obsidian background, chrome text and a single amber accent. The `.light`
//! class on the document root swaps the palette.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --obsidian: #050505;
  --surface: rgba(255, 255, 255, 0.05);
  --surface-border: rgba(255, 255, 255, 0.08);

  /* ACCENT */
  --accent: #ffb000;
  --accent-soft: rgba(255, 176, 0, 0.1);
  --accent-muted: rgba(255, 176, 0, 0.4);

  /* TEXT */
  --chrome: #e2e2e2;
  --text-strong: #ffffff;
  --text-muted: rgba(226, 226, 226, 0.5);
  --text-faint: rgba(226, 226, 226, 0.3);

  /* STATUS */
  --online: #22c55e;

  /* Typography */
  --font-display: 'Space Grotesk', 'Inter', system-ui, sans-serif;
  --font-body: 'Inter', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Motion */
  --ease-cinematic: cubic-bezier(0.16, 1, 0.3, 1);
}

html.light {
  --obsidian: #f4f1ea;
  --surface: rgba(0, 0, 0, 0.04);
  --surface-border: rgba(0, 0, 0, 0.08);
  --chrome: #1a1a1a;
  --text-strong: #050505;
  --text-muted: rgba(26, 26, 26, 0.6);
  --text-faint: rgba(26, 26, 26, 0.4);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body);
  background: var(--obsidian);
  color: var(--chrome);
  line-height: 1.6;
  min-height: 100vh;
  overflow-x: hidden;
  transition: background 0.5s ease, color 0.5s ease;
}

a {
  color: inherit;
  text-decoration: none;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

::selection {
  background: rgba(255, 176, 0, 0.3);
  color: var(--text-strong);
}

/* === Shared === */
.accent { color: var(--accent); }
.italic { font-style: italic; }
.strong { color: var(--text-strong); font-weight: 500; }

.glass {
  background: var(--surface);
  border: 1px solid var(--surface-border);
  backdrop-filter: blur(16px);
}

.eyebrow {
  display: block;
  color: var(--accent);
  font-size: 0.75rem;
  font-weight: 500;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  margin-bottom: 1rem;
}

.mono-tag {
  font-family: var(--font-mono);
  font-size: 10px;
  letter-spacing: 0.4em;
  text-transform: uppercase;
  color: var(--accent-muted);
}

.mono-tag.accent { color: var(--accent); }

.meta-label {
  font-size: 10px;
  font-weight: 700;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: rgba(255, 176, 0, 0.5);
}

.meta-value {
  color: var(--chrome);
  font-size: 0.875rem;
  font-weight: 500;
}

.icon-button {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.5rem;
  border-radius: 999px;
  transition: color 0.3s ease;
}

.icon-button:hover { color: var(--accent); }

.section {
  position: relative;
  padding: 8rem 1.5rem;
  overflow: hidden;
}

.section--tinted { background: var(--surface); }

.section-inner {
  max-width: 80rem;
  margin: 0 auto;
}

.section-header { margin-bottom: 4rem; }

.section-title {
  font-family: var(--font-display);
  font-size: clamp(2.25rem, 5vw, 3.75rem);
  font-weight: 700;
  letter-spacing: -0.02em;
  margin-bottom: 2rem;
}

/* === Reveals === */
.char-reveal, .text-reveal { display: inline-block; }

.reveal-mask {
  display: inline-block;
  overflow: hidden;
  padding-bottom: 0.1em;
  margin-bottom: -0.1em;
  vertical-align: bottom;
}

.reveal-unit { display: inline-block; }

.reveal-unit--char {
  transform: translateY(100%);
  opacity: 0;
  filter: blur(10px);
}

.reveal-unit--word { transform: translateY(100%); }

.is-revealed .reveal-unit {
  transform: translateY(0);
  opacity: 1;
  filter: blur(0);
}

.fade-in-up {
  opacity: 0;
  transform: translateY(30px);
}

.fade-in-up.is-revealed {
  opacity: 1;
  transform: translateY(0);
}

/* === Magnetic === */
.magnetic {
  display: inline-block;
  will-change: transform;
}

.btn-pill {
  display: inline-flex;
  align-items: center;
  gap: 1.5rem;
  padding: 1.25rem 2.5rem;
  border-radius: 999px;
  font-size: 10px;
  font-weight: 700;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  transition: background 0.7s ease, color 0.7s ease;
}

.btn-pill:hover {
  background: var(--text-strong);
  color: var(--obsidian);
}

.btn-pill-icon {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 999px;
  border: 1px solid var(--surface-border);
  display: flex;
  align-items: center;
  justify-content: center;
}

.btn-solid {
  display: inline-flex;
  align-items: center;
  gap: 1rem;
  padding: 1.25rem 2.5rem;
  border-radius: 999px;
  background: var(--accent);
  color: #050505;
  font-size: 0.75rem;
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  transition: background 0.5s ease;
}

.btn-solid:hover { background: #ffffff; }

/* === Tilt Cards === */
.tilt-card {
  position: relative;
  border-radius: 1.5rem;
  transform-style: preserve-3d;
  will-change: transform;
  cursor: pointer;
}

.tilt-card--skill { padding: 2rem; min-height: 20rem; }
.tilt-card--project { padding: 2.5rem; min-height: 28rem; border-radius: 2rem; }

.tilt-card-spotlight {
  position: absolute;
  inset: 0;
  border-radius: inherit;
  pointer-events: none;
  opacity: 0;
  transition: opacity 0.5s ease;
}

.tilt-card:hover .tilt-card-spotlight { opacity: 1; }

.tilt-card-body {
  position: relative;
  height: 100%;
  transform-style: preserve-3d;
}

.card-layer { position: relative; z-index: 1; }
.card-layer--front { transform: translateZ(50px); }
.card-layer--top { transform: translateZ(40px); display: flex; justify-content: space-between; }
.card-layer--back { transform: translateZ(30px); }

.card-icon {
  width: 3.5rem;
  height: 3.5rem;
  border-radius: 1rem;
  background: var(--accent-soft);
  color: var(--accent);
  display: flex;
  align-items: center;
  justify-content: center;
  margin-bottom: 2rem;
  transition: transform 0.5s ease;
}

.tilt-card:hover .card-icon { transform: scale(1.1); }

.card-title {
  font-family: var(--font-display);
  font-size: 1.5rem;
  font-weight: 700;
  text-transform: uppercase;
  margin-bottom: 1.5rem;
  transition: color 0.3s ease;
}

.tilt-card:hover .card-title { color: var(--accent); }

.card-accent {
  position: absolute;
  top: 1rem;
  right: 1rem;
  display: flex;
  gap: 0.25rem;
  opacity: 0.2;
}

.card-accent-dot { width: 4px; height: 4px; border-radius: 999px; background: var(--accent); }
.card-accent-line { width: 1rem; height: 1px; align-self: center; background: var(--accent); }

.card-ref {
  position: absolute;
  bottom: 1rem;
  left: 1rem;
  display: flex;
  flex-direction: column;
  font-family: var(--font-mono);
  font-size: 6px;
  opacity: 0.1;
}

.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
  gap: 1.5rem;
}

.skill-chips { display: flex; flex-wrap: wrap; gap: 0.5rem; }

.skill-chip {
  padding: 0.375rem 1rem;
  border-radius: 999px;
  background: var(--surface);
  border: 1px solid var(--surface-border);
  font-size: 10px;
  font-weight: 700;
  letter-spacing: 0.05em;
  color: var(--text-muted);
  animation: chip-in 0.6s var(--ease-cinematic) both;
}

@keyframes chip-in {
  from { opacity: 0; transform: scale(0.8); }
  to { opacity: 1; transform: scale(1); }
}

/* === Projects === */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(28rem, 1fr));
  gap: 3rem;
}

.projects-empty {
  padding: 5rem 0;
  text-align: center;
  border: 2px dashed var(--surface-border);
  border-radius: 1.5rem;
  color: var(--text-faint);
  font-family: var(--font-display);
  font-size: 1.25rem;
  letter-spacing: 0.1em;
  text-transform: uppercase;
}

.scanlines {
  position: absolute;
  inset: 0;
  pointer-events: none;
  opacity: 0.03;
  background: linear-gradient(rgba(18, 16, 16, 0) 50%, rgba(0, 0, 0, 0.25) 50%);
  background-size: 100% 2px;
}

.project-link-badge { display: flex; flex-direction: column; align-items: flex-end; gap: 0.5rem; }

.round-badge {
  width: 3rem;
  height: 3rem;
  border-radius: 999px;
  display: flex;
  align-items: center;
  justify-content: center;
  transition: background 0.5s ease, color 0.5s ease;
}

.tilt-card:hover .round-badge { background: var(--accent); color: #050505; }

.project-index { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1rem; }
.project-index-rule { height: 1px; width: 2rem; background: var(--accent-muted); transition: width 0.7s ease; }
.tilt-card:hover .project-index-rule { width: 4rem; }

.project-title { font-size: 2.25rem; margin-bottom: 1rem; }

.project-description {
  color: var(--text-muted);
  font-weight: 300;
  max-width: 28rem;
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

.project-footer {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-top: 2rem;
  padding-top: 2rem;
  border-top: 1px solid var(--surface-border);
}

.tech-pill {
  padding: 0.375rem 0.75rem;
  border-radius: 0.5rem;
  font-size: 10px;
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--accent);
}

.project-dots { display: flex; gap: 0.25rem; }
.project-dot { width: 4px; height: 4px; border-radius: 999px; background: rgba(255, 176, 0, 0.2); transition: background 0.3s ease; }
.tilt-card:hover .project-dot { background: var(--accent); }

/* === Project Overlay === */
.project-modal {
  position: fixed;
  inset: 0;
  z-index: 200;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
  animation: fade-in 0.4s ease both;
}

.project-modal-backdrop {
  position: absolute;
  inset: 0;
  background: rgba(5, 5, 5, 0.95);
  backdrop-filter: blur(40px);
}

.project-modal-panel {
  position: relative;
  z-index: 1;
  max-width: 56rem;
  width: 100%;
  border-radius: 2.5rem;
  overflow: hidden;
}

.project-modal-glow-line {
  position: absolute;
  top: 0;
  left: 0;
  right: 0;
  height: 4px;
  background: linear-gradient(90deg, transparent, var(--accent), transparent);
  opacity: 0.5;
}

.project-modal-close {
  position: absolute;
  top: 2rem;
  right: 2rem;
  width: 3.5rem;
  height: 3.5rem;
  z-index: 2;
}

.project-modal-body { position: relative; padding: 5rem; }

.project-modal-glow {
  position: absolute;
  top: -6rem;
  left: -6rem;
  width: 16rem;
  height: 16rem;
  border-radius: 999px;
  background: var(--accent-soft);
  filter: blur(100px);
}

.eyebrow-row { display: flex; align-items: center; gap: 1rem; margin-bottom: 2.5rem; }
.eyebrow-rule { width: 3rem; height: 1px; background: var(--accent); }

.project-modal-title {
  font-family: var(--font-display);
  font-size: clamp(3rem, 8vw, 6rem);
  font-weight: 700;
  line-height: 0.9;
  text-transform: uppercase;
  margin-bottom: 2.5rem;
}

.project-modal-grid {
  display: grid;
  grid-template-columns: 1fr 200px;
  gap: 3rem;
}

.project-modal-description { color: var(--text-muted); font-size: 1.5rem; font-weight: 300; }
.project-modal-meta { display: flex; flex-direction: column; gap: 2rem; }
.meta-status { display: flex; align-items: center; gap: 0.5rem; }
.meta-status-dot { width: 6px; height: 6px; border-radius: 999px; background: var(--online); box-shadow: 0 0 8px rgba(34, 197, 94, 0.5); }
.project-modal-actions { display: flex; flex-wrap: wrap; gap: 1.5rem; margin-top: 4rem; }

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

/* === Navigation === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  padding: 1.5rem;
  transition: all 0.5s ease;
}

.navbar.scrolled {
  padding: 1rem 1.5rem;
  background: rgba(5, 5, 5, 0.8);
  backdrop-filter: blur(24px);
  border-bottom: 1px solid var(--surface-border);
}

html.light .navbar.scrolled { background: rgba(244, 241, 234, 0.8); }

.navbar-inner {
  max-width: 80rem;
  margin: 0 auto;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.brand {
  font-family: var(--font-display);
  font-size: 1.25rem;
  font-weight: 700;
  letter-spacing: -0.05em;
}

.navbar-links {
  display: flex;
  align-items: center;
  gap: 2rem;
  font-size: 10px;
  font-weight: 700;
  letter-spacing: 0.2em;
  text-transform: uppercase;
}

.navbar-links a:hover { color: var(--accent); }

.navbar-menu-button { display: none; }

.mobile-menu {
  position: fixed;
  inset: 0;
  z-index: 200;
  background: var(--obsidian);
  display: flex;
  flex-direction: column;
  padding: 3rem;
  animation: slide-in 0.5s var(--ease-cinematic) both;
}

.mobile-menu-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 6rem; }
.mobile-menu-links { display: flex; flex-direction: column; gap: 2rem; }

.mobile-menu-link {
  font-family: var(--font-display);
  font-size: 2.25rem;
  font-weight: 700;
  animation: rise-in 0.6s var(--ease-cinematic) both;
}

.mobile-menu-link:hover { color: var(--accent); }

.mobile-menu-footer {
  margin-top: auto;
  padding-top: 3rem;
  border-top: 1px solid var(--surface-border);
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.mobile-menu-email { font-size: 1.25rem; font-weight: 500; }

.theme-switch {
  display: flex;
  align-items: center;
  gap: 1rem;
  font-size: 0.875rem;
  font-weight: 700;
  letter-spacing: 0.2em;
  text-transform: uppercase;
}

@keyframes slide-in {
  from { transform: translateX(100%); }
  to { transform: translateX(0); }
}

@keyframes rise-in {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  padding: 0 1.5rem;
  overflow: hidden;
}

.hero-backdrop { position: absolute; inset: 0; pointer-events: none; overflow: hidden; }

.hero-grid {
  position: absolute;
  inset: 0;
  opacity: 0.03;
  background-image: linear-gradient(#fff 1px, transparent 1px), linear-gradient(90deg, #fff 1px, transparent 1px);
  background-size: 100px 100px;
}

.hero-scanner {
  position: absolute;
  left: 0;
  right: 0;
  height: 2px;
  background: linear-gradient(90deg, transparent, rgba(255, 176, 0, 0.2), transparent);
  filter: blur(4px);
  animation: scan 8s linear infinite;
}

@keyframes scan {
  from { top: 0%; }
  to { top: 100%; }
}

.hero-glow {
  position: absolute;
  width: 50%;
  height: 50%;
  border-radius: 999px;
  background: rgba(255, 176, 0, 0.05);
  filter: blur(120px);
  animation: pulse 4s ease-in-out infinite;
}

.hero-glow--left { top: 25%; left: -25%; }
.hero-glow--right { bottom: 25%; right: -25%; animation-delay: 2s; }

.hero-frame { position: absolute; inset: 2rem; pointer-events: none; z-index: 3; }

.frame-corner { position: absolute; width: 3rem; height: 3rem; border-color: var(--accent-muted); border-style: solid; border-width: 0; }
.frame-corner--tl { top: 0; left: 0; border-top-width: 1px; border-left-width: 1px; }
.frame-corner--tr { top: 0; right: 0; border-top-width: 1px; border-right-width: 1px; }
.frame-corner--bl { bottom: 0; left: 0; border-bottom-width: 1px; border-left-width: 1px; }
.frame-corner--br { bottom: 0; right: 0; border-bottom-width: 1px; border-right-width: 1px; }

.frame-tag {
  position: absolute;
  top: 4rem;
  right: 0;
  writing-mode: vertical-rl;
  font-family: var(--font-mono);
  font-size: 8px;
  letter-spacing: 0.3em;
  color: var(--accent-muted);
}

.hero-content { position: relative; z-index: 2; max-width: 80rem; width: 100%; margin: 0 auto; will-change: transform, opacity; }
.hero-heading { display: flex; flex-direction: column; gap: 2rem; margin-bottom: 6rem; }
.hero-kicker { display: flex; align-items: center; gap: 1rem; }
.kicker-bars { display: flex; gap: 0.25rem; }
.kicker-bar { width: 2px; height: 0.75rem; background: var(--accent); animation: bar 1s ease-in-out infinite; }

@keyframes bar {
  0%, 100% { transform: scaleY(1); }
  50% { transform: scaleY(1.5); }
}

.hero-title {
  display: flex;
  flex-direction: column;
  font-family: var(--font-display);
  font-size: clamp(3.5rem, 9vw, 8rem);
  font-weight: 700;
  line-height: 0.85;
  letter-spacing: -0.05em;
}

.hero-line { position: relative; display: inline-block; overflow: hidden; height: 1.1em; }

.outline-text {
  color: transparent;
  -webkit-text-stroke: 1px rgba(255, 255, 255, 0.2);
}

html.light .outline-text { -webkit-text-stroke: 1px rgba(0, 0, 0, 0.2); }

.chrome-text { color: var(--chrome); }

.hero-details {
  display: grid;
  grid-template-columns: 1fr auto 1fr;
  gap: 3rem;
  align-items: start;
  padding-top: 3rem;
  border-top: 1px solid var(--surface-border);
}

.hero-summary { max-width: 28rem; animation: rise-in 1s ease 0.8s both; }
.hero-summary p { color: var(--text-muted); font-size: 1.125rem; font-weight: 300; margin-bottom: 2.5rem; }
.hero-divider { width: 1px; height: 10rem; background: var(--surface-border); }

.hero-telemetry {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
  font-family: var(--font-mono);
  font-size: 9px;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--text-faint);
  animation: fade-in 1.5s ease 1s both;
}

.telemetry-item { display: flex; flex-direction: column; gap: 0.25rem; margin-bottom: 1rem; }
.telemetry-strong { color: var(--text-muted); }

.scroll-hint {
  position: absolute;
  bottom: 2rem;
  left: 1.5rem;
  display: none;
  align-items: center;
  gap: 1rem;
  opacity: 0.3;
  font-size: 8px;
  font-weight: 700;
  letter-spacing: 0.4em;
  text-transform: uppercase;
}

.scroll-hint-rule { width: 3rem; height: 1px; background: var(--accent); }

/* === Status Dot === */
.status-dot { position: relative; display: inline-flex; align-items: center; gap: 0.75rem; }
.status-dot-core { width: 8px; height: 8px; border-radius: 999px; background: var(--online); box-shadow: 0 0 10px rgba(34, 197, 94, 0.5); }
.status-dot-ping { position: absolute; left: 0; width: 8px; height: 8px; border-radius: 999px; background: var(--online); animation: ping 2s ease-out infinite; }

@keyframes ping {
  from { transform: scale(1); opacity: 0.6; }
  to { transform: scale(2.5); opacity: 0; }
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}

/* === About === */
.about-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 4rem;
  align-items: center;
}

.about-copy { display: flex; flex-direction: column; gap: 1.5rem; color: var(--text-muted); font-size: 1.125rem; font-weight: 300; }

.portrait {
  position: relative;
  height: 600px;
  border-radius: 1.5rem;
  overflow: hidden;
  will-change: transform;
}

.portrait-image { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s ease; }
.portrait:hover .portrait-image { transform: scale(1.1); }
.portrait-shade { position: absolute; inset: 0; background: linear-gradient(to top, var(--obsidian), transparent); opacity: 0.6; }
.portrait-caption { position: absolute; bottom: 2rem; left: 2rem; z-index: 1; }
.portrait-index { font-family: var(--font-display); font-size: 2.25rem; font-weight: 700; }

/* === Contact === */
.contact-inner { text-align: center; }

.contact-title {
  font-family: var(--font-display);
  font-size: clamp(3rem, 8vw, 6rem);
  font-weight: 700;
  letter-spacing: -0.05em;
  text-transform: uppercase;
  margin-bottom: 3rem;
}

.contact-email {
  display: inline-flex;
  align-items: center;
  gap: 1rem;
  font-family: var(--font-display);
  font-size: clamp(1.5rem, 4vw, 2.25rem);
  font-weight: 700;
  color: var(--accent);
  transition: color 0.3s ease;
}

.contact-email:hover { color: var(--text-strong); }

.social-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 2rem;
  margin-top: 8rem;
  padding-top: 3rem;
  border-top: 1px solid var(--surface-border);
}

.social-link { display: flex; flex-direction: column; align-items: center; gap: 1rem; cursor: pointer; }
.social-link:active { transform: scale(0.9); }

.social-icon {
  width: 3.5rem;
  height: 3.5rem;
  border-radius: 1rem;
  display: flex;
  align-items: center;
  justify-content: center;
  transition: background 0.5s ease, color 0.5s ease;
}

.social-link:hover .social-icon { background: var(--accent); color: #050505; }

.social-label {
  font-size: 10px;
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--text-faint);
}

.social-link:hover .social-label { color: var(--accent); }

/* === Footer === */
.site-footer {
  padding: 2rem 0;
  text-align: center;
  font-family: var(--font-mono);
  font-size: 10px;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--text-faint);
  border-top: 1px solid var(--surface-border);
}

/* === Overlays === */
.cursor-ring {
  position: fixed;
  top: 0;
  left: 0;
  width: 32px;
  height: 32px;
  border-radius: 999px;
  border: 1px solid var(--accent);
  pointer-events: none;
  z-index: 999;
  will-change: transform;
  transition: background-color 0.3s ease;
}

.cursor-ring.is-hovering { background-color: rgba(255, 176, 0, 0.1); }

.noise {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 100;
  overflow: hidden;
}

.noise-grain {
  position: absolute;
  inset: -200%;
  opacity: 0.03;
  background-image: url("data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='200' height='200'%3E%3Cfilter id='n'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='3'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23n)'/%3E%3C/svg%3E");
  backface-visibility: hidden;
  transform: translateZ(0);
  animation: grain 8s steps(10) infinite;
}

@keyframes grain {
  0%, 100% { transform: translate(0, 0); }
  10% { transform: translate(-5%, -10%); }
  30% { transform: translate(3%, -15%); }
  50% { transform: translate(12%, 9%); }
  70% { transform: translate(9%, 4%); }
  90% { transform: translate(-1%, 7%); }
}

/* === Responsive === */
@media (max-width: 768px) {
  .navbar-links { display: none; }
  .navbar-menu-button { display: inline-flex; }
  .hero-details, .about-grid, .project-modal-grid { grid-template-columns: 1fr; }
  .hero-divider { display: none; }
  .scroll-hint { display: flex; }
  .social-grid { grid-template-columns: repeat(2, 1fr); }
  .projects-grid { grid-template-columns: 1fr; }
  .project-modal-body { padding: 2rem; }
  .cursor-ring { display: none; }
}

@media (pointer: coarse) {
  .cursor-ring { display: none; }
  .tilt-card-spotlight { display: none; }
}
"#;
