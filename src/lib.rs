#![cfg(target_arch = "wasm32")]
use crate::core::{NoteField, NoteStore, Starfield, StarfieldParams, ThoughtWall};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod clipboard;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod storage;
mod view;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, stars: &Rc<RefCell<frame::StarFrame>>) {
    let canvas = canvas.clone();
    let stars = stars.clone();
    dom::on_window("resize", move |_: web::Event| {
        stars.borrow_mut().resize(&canvas);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("thought-wall starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::STAR_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::STAR_CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let viewport = dom::sync_canvas_to_window(&canvas);

    view::install_keyframes(&document);

    // ---------------- Starfield ----------------
    let mouse = Rc::new(RefCell::new(input::MouseState::default()));
    let mut star_rng = StdRng::from_entropy();
    let field = Starfield::new(
        &mut star_rng,
        viewport.width,
        viewport.height,
        StarfieldParams::default(),
    );
    let stars = Rc::new(RefCell::new(frame::StarFrame {
        field,
        canvas: render::Canvas2d::new(&canvas)?,
        mouse: mouse.clone(),
        rng: star_rng,
    }));
    wire_canvas_resize(&canvas, &stars);

    // ---------------- Notes ----------------
    let store = NoteStore::load(storage::open(&window), constants::STORAGE_KEY);
    let scene = Rc::new(RefCell::new(frame::WallScene {
        wall: ThoughtWall::new(store, NoteField::default()),
        drag: core::DragController::new(),
        views: view::NoteViews::default(),
        rng: StdRng::from_entropy(),
    }));

    let restored = {
        let s = &mut *scene.borrow_mut();
        s.wall.restore(&mut s.rng, viewport)
    };
    for placed in &restored {
        if let Err(e) = events::mount_note(&scene, &document, placed) {
            log::error!("[wall] could not render restored thought: {:?}", e);
        }
    }
    view::update_total(&document, scene.borrow().wall.count());

    events::pointer::wire_global(&scene, &mouse);
    events::keyboard::wire_text_input(&scene, &document)?;

    // Two independent frame loops: background stars and floating notes
    frame::start_loop(move || stars.borrow_mut().frame());
    frame::start_loop(move || scene.borrow_mut().frame());
    Ok(())
}
