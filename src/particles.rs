//! Particle Engine Bindings
//!
//! Frontend bindings to the tsParticles slim bundle. The bundle script is
//! loaded by the host page; these wrappers cover the two phases the app
//! needs: waiting for the engine global during startup, then loading a
//! particle surface into a rendered container.

use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "tsParticles"], js_name = load, catch)]
    async fn ts_load(params: JsValue) -> Result<JsValue, JsValue>;
}

const ENGINE_POLL_MS: u32 = 50;
const ENGINE_POLL_LIMIT: u32 = 100;

/// Wait for the engine global to appear.
///
/// The bundle script loads in parallel with the wasm module, so the global
/// may not exist yet when `main` runs. Bootstrap awaits this before mounting;
/// a particle surface is unusable until it resolves.
pub async fn init() -> Result<(), String> {
    for _ in 0..ENGINE_POLL_LIMIT {
        if engine_ready() {
            return Ok(());
        }
        TimeoutFuture::new(ENGINE_POLL_MS).await;
    }
    Err("tsParticles engine global never became available".to_string())
}

fn engine_ready() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("tsParticles")).unwrap_or(false)
}

/// Render particles into the container element with the given id.
///
/// The container must already be in the document, so this runs from a mount
/// effect rather than from bootstrap.
pub async fn load(container_id: &str, options: &ParticlesOptions) -> Result<(), String> {
    let params = LoadParams {
        id: container_id,
        options,
    };
    let js_params = serde_wasm_bindgen::to_value(&params).map_err(|e| e.to_string())?;
    ts_load(js_params).await.map_err(|e| format!("{e:?}"))?;
    Ok(())
}

// ========================
// Engine Option Structs
// ========================

#[derive(Serialize)]
struct LoadParams<'a> {
    pub id: &'a str,
    pub options: &'a ParticlesOptions,
}

/// tsParticles options document (the subset this app configures)
#[derive(Serialize)]
pub struct ParticlesOptions {
    pub background: BackgroundOptions,
    #[serde(rename = "fpsLimit")]
    pub fps_limit: u32,
    pub particles: ParticleOptions,
    #[serde(rename = "detectRetina")]
    pub detect_retina: bool,
}

#[derive(Serialize)]
pub struct BackgroundOptions {
    pub color: &'static str,
}

#[derive(Serialize)]
pub struct ParticleOptions {
    pub number: NumberOptions,
    pub color: ColorOptions,
    pub links: LinkOptions,
    #[serde(rename = "move")]
    pub movement: MoveOptions,
    pub opacity: ValueOption,
    pub size: ValueOption,
}

#[derive(Serialize)]
pub struct NumberOptions {
    pub value: u32,
}

#[derive(Serialize)]
pub struct ColorOptions {
    pub value: &'static str,
}

#[derive(Serialize)]
pub struct LinkOptions {
    pub enable: bool,
    pub color: &'static str,
    pub distance: u32,
    pub opacity: f64,
}

#[derive(Serialize)]
pub struct MoveOptions {
    pub enable: bool,
    pub speed: f64,
}

#[derive(Serialize)]
pub struct ValueOption {
    pub value: f64,
}

impl ParticlesOptions {
    /// Slow drifting starfield used behind the whole page
    pub fn starfield() -> Self {
        Self {
            background: BackgroundOptions { color: "#0b1120" },
            fps_limit: 60,
            particles: ParticleOptions {
                number: NumberOptions { value: 80 },
                color: ColorOptions { value: "#8ab4ff" },
                links: LinkOptions {
                    enable: true,
                    color: "#8ab4ff",
                    distance: 140,
                    opacity: 0.25,
                },
                movement: MoveOptions {
                    enable: true,
                    speed: 0.6,
                },
                opacity: ValueOption { value: 0.6 },
                size: ValueOption { value: 2.0 },
            },
            detect_retina: true,
        }
    }
}
