//! Particles Background Component
//!
//! Full-viewport particle surface behind the page content.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::particles::{self, ParticlesOptions};

const CONTAINER_ID: &str = "tsparticles";

/// Container div for the particle canvas; starts the engine load on mount.
/// The engine itself was initialized during bootstrap, before this renders.
#[component]
pub fn ParticlesBackground() -> impl IntoView {
    Effect::new(move |_| {
        spawn_local(async move {
            if let Err(err) = particles::load(CONTAINER_ID, &ParticlesOptions::starfield()).await {
                web_sys::console::error_1(&format!("[PARTICLES] load failed: {err}").into());
            }
        });
    });

    view! { <div id=CONTAINER_ID class="particles-background"></div> }
}
