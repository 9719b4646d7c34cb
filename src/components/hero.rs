//! Hero Component
//!
//! Name, typewriter-animated tagline, and profile links.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const TYPE_MS: u32 = 90;
const ERASE_MS: u32 = 40;
const HOLD_MS: u32 = 1800;

#[component]
pub fn Hero(
    name: &'static str,
    taglines: &'static [&'static str],
    links: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    let (typed, set_typed) = signal(String::new());

    // Cycle through the taglines forever; the hero is never unmounted.
    spawn_local(async move {
        loop {
            for line in taglines {
                let chars = line.chars().count();
                for shown in 1..=chars {
                    set_typed.set(line.chars().take(shown).collect());
                    TimeoutFuture::new(TYPE_MS).await;
                }
                TimeoutFuture::new(HOLD_MS).await;
                for shown in (0..chars).rev() {
                    set_typed.set(line.chars().take(shown).collect());
                    TimeoutFuture::new(ERASE_MS).await;
                }
            }
        }
    });

    view! {
        <header class="hero">
            <h1 class="hero-name">{name}</h1>
            <p class="hero-tagline">{move || typed.get()}<span class="cursor">"|"</span></p>
            <nav class="hero-links">
                {links.iter().map(|(label, url)| {
                    let (label, url) = (*label, *url);
                    view! {
                        <a href=url target="_blank" rel="noopener">{label}</a>
                    }
                }).collect_view()}
            </nav>
        </header>
    }
}
