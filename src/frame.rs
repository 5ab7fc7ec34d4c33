use crate::core::{DragController, KeyValueStore, Starfield, ThoughtWall};
use crate::dom;
use crate::input;
use crate::render::Canvas2d;
use crate::view::NoteViews;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type Wall = ThoughtWall<Box<dyn KeyValueStore>>;

/// Everything the note loop and the input handlers share.
///
/// Only touched from the browser's single thread; handlers and frames each
/// hold the borrow for their full run, so neither sees a half-applied update.
pub struct WallScene {
    pub wall: Wall,
    pub drag: DragController,
    pub views: NoteViews,
    pub rng: StdRng,
}

impl WallScene {
    /// Measure card heights, step the physics, and write positions back.
    pub fn frame(&mut self) {
        let viewport = dom::viewport();
        let Self { wall, views, .. } = self;
        for (id, el) in views.iter() {
            let height = el.offset_height() as f32;
            if height > 0.0 {
                wall.notes_mut().set_height(id, height);
            }
        }
        wall.notes_mut().tick(viewport);
        for (id, note) in wall.notes().iter() {
            if !note.dragging {
                views.place(id, note.pos);
            }
        }
    }
}

pub struct StarFrame {
    pub field: Starfield,
    pub canvas: Canvas2d,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub rng: StdRng,
}

impl StarFrame {
    pub fn frame(&mut self) {
        let pointer = self.mouse.borrow().pos;
        self.field.frame(&mut self.rng, pointer, &mut self.canvas);
    }

    pub fn resize(&mut self, canvas: &web::HtmlCanvasElement) {
        let vp = dom::sync_canvas_to_window(canvas);
        self.field.resize(vp.width, vp.height);
    }
}

/// Call `step` on every animation frame, forever.
pub fn start_loop(mut step: impl FnMut() + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        step();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
