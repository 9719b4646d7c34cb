//! Portfolio Frontend Entry Point
//!
//! Two-phase startup: wait for the particle engine, then mount the app.
//! If phase one fails the page stays blank; there is no recovery path.

mod api;
mod app;
mod components;
mod icons;
mod models;
mod particles;

use app::App;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

const MOUNT_POINT: &str = "app";

fn main() {
    console_error_panic_hook::set_once();
    spawn_local(async {
        if let Err(err) = particles::init().await {
            web_sys::console::error_1(
                &format!("[BOOT] particle engine init failed: {err}").into(),
            );
            return;
        }
        mount();
    });
}

/// Attach the app to the `#app` mount point, once per process lifetime.
/// The host page guarantees the element exists before the module runs.
fn mount() {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(MOUNT_POINT))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        web_sys::console::error_1(&format!("[BOOT] mount point #{MOUNT_POINT} not found").into());
        return;
    };
    leptos::mount::mount_to(root, App).forget();
}
