//! Browser entry points.
//!
//! [`NightSky`] is the handle JavaScript holds: it owns a [`SceneAnimator`]
//! drawing into a `<canvas>` through [`Canvas2dSurface`], with frames paced
//! by `requestAnimationFrame` via [`WebScheduler`].
//!
//! ```js
//! import init, { mountById } from "./nightsky.js";
//! await init();
//! const sky = mountById("sky", JSON.stringify({ starCount: 300 }));
//! // later
//! sky.stop();
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use crate::animator::{FrameCallback, FrameHandle, FrameScheduler, SceneAnimator, ScheduleError};
use crate::canvas2d::Canvas2dSurface;
use crate::config::SkyConfig;
use crate::geom::Viewport;
use crate::scene::SceneCore;

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| js_error("no global window"))
}

// =============================================================
// Scheduling
// =============================================================

/// [`FrameScheduler`] over `window.requestAnimationFrame`.
///
/// Each request hands the browser a one-shot closure that frees itself when
/// it runs. A cancelled request's closure is never called and stays alive
/// until the page unloads; the animator cancels at most one per stop.
pub struct WebScheduler {
    window: Window,
}

impl WebScheduler {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for WebScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Result<FrameHandle, ScheduleError> {
        let closure = Closure::once_into_js(move |ts: f64| callback(ts));
        self.window
            .request_animation_frame(closure.unchecked_ref())
            .map(FrameHandle)
            .map_err(|err| ScheduleError(format!("{err:?}")))
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        if let Err(err) = self.window.cancel_animation_frame(handle.0) {
            log::debug!("cancelAnimationFrame({}) failed: {err:?}", handle.0);
        }
    }
}

// =============================================================
// Setup helpers
// =============================================================

/// Install the console logger and the panic hook.
///
/// Safe to call more than once; later calls keep the first logger.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {err}");
    }
}

/// A 64-bit seed from `Math.random`, for configs that do not pin one.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn entropy_seed() -> u64 {
    let word = || (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    (word() << 32) | word()
}

/// The window's inner size in CSS pixels.
///
/// # Errors
///
/// Fails if the browser does not report a numeric size.
pub fn window_viewport(window: &Window) -> Result<Viewport, JsValue> {
    let width = window.inner_width()?.as_f64().ok_or_else(|| js_error("innerWidth is not a number"))?;
    let height = window.inner_height()?.as_f64().ok_or_else(|| js_error("innerHeight is not a number"))?;
    Ok(Viewport::new(width, height))
}

// =============================================================
// JS handle
// =============================================================

#[wasm_bindgen]
pub struct NightSky {
    animator: SceneAnimator<Canvas2dSurface, WebScheduler>,
}

#[wasm_bindgen]
impl NightSky {
    /// Bind a sky to `canvas`, sized to the window. Does not start drawing.
    ///
    /// # Errors
    ///
    /// Fails on an invalid config, a missing 2D context, or a window
    /// without a numeric size.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<NightSky, JsValue> {
        let config = SkyConfig::from_optional_json(config_json.as_deref()).map_err(js_error)?;
        init_logging(config.level_filter().map_err(js_error)?);

        let window = window()?;
        let viewport = window_viewport(&window)?;
        let seed = config.seed.unwrap_or_else(entropy_seed);
        let surface = Canvas2dSurface::new(canvas).map_err(js_error)?;

        log::info!("mounting sky {}x{} (seed {seed})", viewport.width, viewport.height);
        let scene = SceneCore::new(config, viewport, StdRng::seed_from_u64(seed));
        Ok(Self { animator: SceneAnimator::new(scene, surface, WebScheduler::new(window)) })
    }

    /// Start the animation loop.
    ///
    /// # Errors
    ///
    /// Fails if the sky is already running or the browser refuses the first
    /// animation frame.
    pub fn start(&self) -> Result<(), JsValue> {
        self.animator.run().map_err(js_error)
    }

    /// Stop the animation loop. The last frame stays on the canvas.
    pub fn stop(&self) {
        self.animator.stop();
    }

    #[wasm_bindgen(js_name = isRunning)]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.animator.is_running()
    }
}

/// Find the canvas with element id `id`, bind a sky to it, and start it.
///
/// # Errors
///
/// Fails if the element is missing or not a canvas, or if construction or
/// startup fails.
#[wasm_bindgen(js_name = mountById)]
pub fn mount_by_id(id: &str, config_json: Option<String>) -> Result<NightSky, JsValue> {
    let document = window()?.document().ok_or_else(|| js_error("no document"))?;
    let canvas = document
        .get_element_by_id(id)
        .ok_or_else(|| js_error(format!("no element with id `{id}`")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| js_error(format!("element `{id}` is not a canvas")))?;

    let sky = NightSky::new(canvas, config_json)?;
    sky.start()?;
    Ok(sky)
}
