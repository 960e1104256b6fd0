use anyhow::anyhow;
use snakebg_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window() -> anyhow::Result<web::Window> {
    web::window().ok_or_else(|| anyhow!("no window"))
}

pub fn canvas_by_id(id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window()?
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{id} is not a canvas: {:?}", e))
}

/// Window inner size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> Viewport {
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(px(window.inner_width()), px(window.inner_height()))
}

pub fn apply_background(canvas: &web::HtmlCanvasElement, css: &str) {
    _ = canvas.style().set_property("background", css);
}

/// A window `resize` listener, removed again on drop.
pub struct ResizeListener {
    window: web::Window,
    closure: Closure<dyn FnMut()>,
}

impl ResizeListener {
    pub fn attach(window: &web::Window, mut handler: impl FnMut(Viewport) + 'static) -> anyhow::Result<Self> {
        let w = window.clone();
        let closure = Closure::wrap(Box::new(move || handler(viewport_size(&w))) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("resize listener: {:?}", e))?;
        Ok(Self {
            window: window.clone(),
            closure,
        })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        _ = self
            .window
            .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref());
    }
}
