use crate::constants::INPUT_ID;
use crate::core::{counted_len, WallError};
use crate::dom;
use crate::frame::WallScene;
use crate::view;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Enter without Shift submits; Shift+Enter inserts a newline.
#[inline]
pub fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

pub fn wire_text_input(
    scene: &Rc<RefCell<WallScene>>,
    document: &web::Document,
) -> anyhow::Result<()> {
    let input = document
        .get_element_by_id(INPUT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", INPUT_ID))?
        .dyn_into::<web::HtmlTextAreaElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let input_count = input.clone();
    let document_count = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let len = counted_len(&input_count.value());
        view::update_counter(&document_count, len);
    }) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();

    let scene = scene.clone();
    let input_submit = input.clone();
    let document = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if !is_submit_key(&ev.key(), ev.shift_key()) {
            return;
        }
        ev.prevent_default();
        submit(&scene, &document, &input_submit);
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
    Ok(())
}

fn submit(
    scene: &Rc<RefCell<WallScene>>,
    document: &web::Document,
    input: &web::HtmlTextAreaElement,
) {
    let viewport = dom::viewport();
    let result = {
        let s = &mut *scene.borrow_mut();
        s.wall.submit(&mut s.rng, viewport, &input.value())
    };
    let placed = match result {
        Ok(placed) => placed,
        Err(WallError::EmptyThought) => {
            view::shake(input);
            return;
        }
    };

    let card = match super::mount_note(scene, document, &placed) {
        Ok(card) => card,
        Err(e) => {
            log::error!("[wall] could not render thought: {:?}", e);
            return;
        }
    };
    input.set_value("");
    view::update_counter(document, 0);

    let count = scene.borrow().wall.count();
    view::update_total(document, count);
    view::celebrate(document, &mut scene.borrow_mut().rng, &card);
}
