#![cfg(target_arch = "wasm32")]
//! Browser front end: draws the snake background onto a `<canvas>` and
//! drives it from `requestAnimationFrame`.
//!
//! ```js
//! const bg = new SnakeBackground({ intensity: "medium", colorTheme: "gray", style: "modern" });
//! bg.mountById("bg-canvas");
//! // later
//! bg.unmount();
//! ```

use snakebg_core::BackgroundConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod dom;
mod frame;

use frame::WebEngine;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("snakebg-web starting");
    Ok(())
}

/// Reads `{ intensity, colorTheme, style }` from a JS value. Anything that
/// is not a usable object yields the default configuration.
fn read_config(value: &JsValue) -> BackgroundConfig {
    if value.is_undefined() || value.is_null() {
        return BackgroundConfig::default();
    }
    let json: String = match js_sys::JSON::stringify(value) {
        Ok(s) => s.into(),
        Err(e) => {
            log::warn!("[config] unreadable config {:?}; using defaults", e);
            return BackgroundConfig::default();
        }
    };
    serde_json::from_str(&json).unwrap_or_else(|e| {
        log::warn!("[config] {e}; using defaults");
        BackgroundConfig::default()
    })
}

fn to_js(e: anyhow::Error) -> JsValue {
    log::error!("mount error: {:?}", e);
    js_sys::Error::new(&e.to_string()).into()
}

#[wasm_bindgen]
pub struct SnakeBackground {
    engine: Rc<RefCell<WebEngine>>,
    resize: Option<dom::ResizeListener>,
}

#[wasm_bindgen]
impl SnakeBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SnakeBackground, JsValue> {
        let window = dom::window().map_err(to_js)?;
        Ok(Self {
            engine: frame::new_engine(read_config(&config), window),
            resize: None,
        })
    }

    /// Attach to `canvas` and start animating. Mounting again moves the
    /// background to the new canvas.
    pub fn mount(&mut self, canvas: web::HtmlCanvasElement) -> Result<(), JsValue> {
        self.attach(canvas).map_err(to_js)
    }

    #[wasm_bindgen(js_name = mountById)]
    pub fn mount_by_id(&mut self, id: &str) -> Result<(), JsValue> {
        let canvas = dom::canvas_by_id(id).map_err(to_js)?;
        self.mount(canvas)
    }

    /// Stop animating, remove the resize listener and release all state.
    pub fn unmount(&mut self) {
        self.resize = None;
        match self.engine.try_borrow_mut() {
            Ok(mut e) => {
                e.unmount();
            }
            Err(_) => log::warn!("[engine] unmount while engine busy; ignored"),
        }
    }

    /// Forward a size change in CSS pixels. Applied at the next frame.
    #[wasm_bindgen(js_name = onResize)]
    pub fn on_resize(&self, width: f64, height: f64) {
        if let Ok(mut e) = self.engine.try_borrow_mut() {
            e.on_resize(width as f32, height as f32);
        }
    }

    pub fn start(&self) {
        if let Ok(mut e) = self.engine.try_borrow_mut() {
            e.start();
        }
    }

    pub fn stop(&self) {
        if let Ok(mut e) = self.engine.try_borrow_mut() {
            e.stop();
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.engine.try_borrow().map(|e| e.is_running()).unwrap_or(false)
    }

    /// CSS `background` for the element behind the canvas.
    #[wasm_bindgen(js_name = backgroundCss)]
    pub fn background_css(&self) -> String {
        self.engine
            .try_borrow()
            .map(|e| e.theme().background_gradient.to_owned())
            .unwrap_or_default()
    }
}

impl SnakeBackground {
    fn attach(&mut self, canvas: web::HtmlCanvasElement) -> anyhow::Result<()> {
        let window = dom::window()?;
        let weak = Rc::downgrade(&self.engine);
        // Listener first: nothing is running yet if it cannot be added.
        let listener = dom::ResizeListener::attach(&window, move |vp| {
            if let Some(engine) = weak.upgrade() {
                if let Ok(mut e) = engine.try_borrow_mut() {
                    e.on_resize(vp.width, vp.height);
                }
            }
        })?;

        let viewport = dom::viewport_size(&window);
        let mut engine = self
            .engine
            .try_borrow_mut()
            .map_err(|_| anyhow::anyhow!("engine busy"))?;
        dom::apply_background(&canvas, engine.theme().background_gradient);
        engine.mount(canvas::CanvasSurface::new(canvas, viewport));
        drop(engine);

        self.resize = Some(listener);
        Ok(())
    }
}

impl Drop for SnakeBackground {
    fn drop(&mut self) {
        self.unmount();
    }
}
