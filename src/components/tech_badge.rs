//! Tech Badge Component

use leptos::prelude::*;

use crate::icons::classify;

/// One technology tag: classified icon glyph plus the name as written
#[component]
pub fn TechBadge(#[prop(into)] name: String) -> impl IntoView {
    let tech = classify(&name);
    view! {
        <span class="tech-badge">
            <i class=tech.kind.class()></i>
            <span class="tech-name">{tech.name}</span>
        </span>
    }
}
