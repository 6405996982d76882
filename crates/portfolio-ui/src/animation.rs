//! Frame driver for spring-backed component state
//!
//! An [`Animator`] owns one [`Animated`] value inside a signal. Every
//! mutation through [`Animator::update`] makes sure a tick task is running;
//! the task advances the springs on a fixed frame and exits as soon as
//! everything is at rest. The task is spawned in the component's scope, so
//! Dioxus cancels it when the component unmounts.

use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::Animated;

use crate::hooks::use_portfolio_config;

pub struct Animator<A: 'static> {
    state: Signal<A>,
    running: Signal<bool>,
    frame_secs: f64,
}

impl<A: 'static> Clone for Animator<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: 'static> Copy for Animator<A> {}

/// Create an animator for state built by `init`.
pub fn use_animator<A: Animated + 'static>(init: impl FnOnce() -> A) -> Animator<A> {
    let frame_secs = use_portfolio_config().frame_secs();
    let state = use_signal(init);
    let running = use_signal(|| false);
    Animator {
        state,
        running,
        frame_secs,
    }
}

impl<A: Animated + 'static> Animator<A> {
    /// Read the current state. Subscribes the caller to every frame.
    pub fn with<R>(&self, f: impl FnOnce(&A) -> R) -> R {
        let state = self.state.read();
        f(&state)
    }

    /// Mutate the state and keep frames coming until it settles again.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut A) -> R) -> R {
        let result = {
            let mut state = self.state.write();
            f(&mut state)
        };
        self.start();
        result
    }

    fn start(&mut self) {
        if *self.running.peek() {
            return;
        }
        self.running.set(true);

        let mut state = self.state;
        let mut running = self.running;
        let frame_secs = self.frame_secs;
        spawn(async move {
            let frame = Duration::from_secs_f64(frame_secs);
            loop {
                tokio::time::sleep(frame).await;
                if state.write().advance(frame_secs) {
                    break;
                }
            }
            running.set(false);
        });
    }
}
