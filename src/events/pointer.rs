use crate::clipboard;
use crate::constants::{COPIED_MESSAGE, DELETE_CLASS};
use crate::core::{NoteId, Release};
use crate::dom;
use crate::frame::WallScene;
use crate::input;
use crate::view;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Grab on pointer-down over the card body, delete on the × button.
pub fn wire_note(
    scene: &Rc<RefCell<WallScene>>,
    id: NoteId,
    card: &web::HtmlElement,
    delete: &web::HtmlElement,
) {
    let scene_down = scene.clone();
    let card_down = card.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if input::target_has_class(&ev, DELETE_CLASS) {
            return;
        }
        ev.prevent_default();
        let pointer = input::pointer_client_pos(&ev);
        let grabbed = {
            let s = &mut *scene_down.borrow_mut();
            s.drag.press(s.wall.notes_mut(), id, pointer, Instant::now())
        };
        if grabbed {
            view::set_held(&card_down, true);
        }
    }) as Box<dyn FnMut(_)>);
    _ = card.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();

    let scene_delete = scene.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ev.stop_propagation();
        super::remove_note(&scene_delete, id);
    }) as Box<dyn FnMut(_)>);
    _ = delete.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Window-level move/up handlers: star distortion input, dragging, and release.
pub fn wire_global(scene: &Rc<RefCell<WallScene>>, mouse: &Rc<RefCell<input::MouseState>>) {
    wire_pointermove(scene.clone(), mouse.clone());
    wire_pointerup(scene.clone());
}

fn wire_pointermove(scene: Rc<RefCell<WallScene>>, mouse: Rc<RefCell<input::MouseState>>) {
    dom::on_window("pointermove", move |ev: web::PointerEvent| {
        let pointer = input::pointer_client_pos(&ev);
        mouse.borrow_mut().pos = pointer;

        let s = &mut *scene.borrow_mut();
        if !s.drag.is_dragging() {
            return;
        }
        ev.prevent_default();
        if let Some((id, pos)) = s.drag.drag_to(s.wall.notes_mut(), pointer, Instant::now()) {
            s.views.place(id, pos);
        }
    });
}

fn wire_pointerup(scene: Rc<RefCell<WallScene>>) {
    dom::on_window("pointerup", move |_ev: web::PointerEvent| {
        let (released, card, text) = {
            let s = &mut *scene.borrow_mut();
            let Some(held) = s.drag.held() else {
                return;
            };
            let released = s.drag.release(s.wall.notes_mut(), Instant::now(), &mut s.rng);
            let text = s.wall.text_of(held).map(str::to_string);
            (released, s.views.get(held).cloned(), text)
        };
        if let Some(card) = &card {
            view::set_held(card, false);
        }
        if let (Some(Release::Click(_)), Some(text)) = (released, text) {
            clipboard::copy_text(&text);
            // confirmation is shown even if the copy later fails
            if let Some(document) = dom::window_document() {
                view::show_notification(&document, COPIED_MESSAGE);
            }
        }
    });
}
