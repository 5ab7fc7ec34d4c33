use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Last known pointer position in client pixels.
#[derive(Clone, Copy, Debug)]
pub struct MouseState {
    pub pos: Vec2,
}

impl Default for MouseState {
    // parked far off-screen until the first move so no star starts distorted
    fn default() -> Self {
        Self {
            pos: Vec2::new(-1000.0, -1000.0),
        }
    }
}

#[inline]
pub fn pointer_client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// True if the event started on an element carrying `class`.
#[inline]
pub fn target_has_class(ev: &web::Event, class: &str) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| el.class_list().contains(class))
        .unwrap_or(false)
}
