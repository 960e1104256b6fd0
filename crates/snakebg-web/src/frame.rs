use crate::canvas::CanvasSurface;
use rand::rngs::StdRng;
use rand::SeedableRng;
use snakebg_core::{BackgroundConfig, Engine, FrameHost, FrameToken};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebEngine = Engine<CanvasSurface, RafHost, StdRng>;

/// `requestAnimationFrame` as a [`FrameHost`]. Each request gets its own
/// one-shot callback carrying the token, so a callback that outlives a
/// `stop()` is recognised as stale by the scheduler.
pub struct RafHost {
    window: web::Window,
    engine: Weak<RefCell<WebEngine>>,
}

impl FrameHost for RafHost {
    type Handle = i32;

    fn request_frame(&mut self, token: FrameToken) -> Option<i32> {
        let engine = self.engine.clone();
        // Cancelled callbacks are never invoked and stay leaked; this only
        // happens on stop/unmount.
        let callback = Closure::<dyn FnMut(f64)>::once_into_js(move |timestamp_ms: f64| {
            let Some(engine) = engine.upgrade() else {
                return;
            };
            match engine.try_borrow_mut() {
                Ok(mut e) => {
                    e.frame(token, timestamp_ms);
                }
                Err(_) => log::warn!("[frame] engine busy; frame {:?} dropped", token),
            }
        });
        match self.window.request_animation_frame(callback.unchecked_ref()) {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("requestAnimationFrame error: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }
}

/// Build an engine whose frame host refers back to it weakly, so dropping the
/// last strong handle tears everything down.
pub fn new_engine(config: BackgroundConfig, window: web::Window) -> Rc<RefCell<WebEngine>> {
    Rc::new_cyclic(|weak| {
        RefCell::new(Engine::new(
            config,
            RafHost {
                window,
                engine: weak.clone(),
            },
            StdRng::from_entropy(),
        ))
    })
}
