use crate::core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn html_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Window inner size in CSS pixels.
pub fn viewport() -> Viewport {
    let (w, h) = web::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (width, height)
        })
        .unwrap_or((0.0, 0.0));
    Viewport::new(w as f32, h as f32)
}

/// Size the canvas backing store to the window so canvas pixels match client coordinates.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> Viewport {
    let vp = viewport();
    canvas.set_width(vp.width.max(1.0) as u32);
    canvas.set_height(vp.height.max(1.0) as u32);
    vp
}

pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Run `f` once after `ms` milliseconds.
pub fn after_ms(ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
}

/// Replay a CSS animation by clearing it and setting it again on the next tick.
pub fn restart_animation(el: &web::HtmlElement, animation: &'static str) {
    set_style(el, "animation", "none");
    let el = el.clone();
    after_ms(crate::constants::ANIMATION_RESTART_MS, move || {
        set_style(&el, "animation", animation);
    });
}

pub fn on_window<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
