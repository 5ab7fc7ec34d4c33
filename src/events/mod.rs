pub mod keyboard;
pub mod pointer;

use crate::constants::{REMOVE_TRANSITION_MS, WALL_ID};
use crate::core::{NoteId, PlacedNote};
use crate::dom;
use crate::frame::WallScene;
use crate::view;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Build the card for a placed note, hook up its listeners and register it.
pub fn mount_note(
    scene: &Rc<RefCell<WallScene>>,
    document: &web::Document,
    placed: &PlacedNote,
) -> anyhow::Result<web::HtmlElement> {
    let wall_el = dom::html_by_id(document, WALL_ID)?;
    let (card, delete) = view::build_note(document, &wall_el, placed)?;
    pointer::wire_note(scene, placed.id, &card, &delete);
    scene.borrow_mut().views.insert(placed.id, card.clone());
    Ok(card)
}

/// Forget the note's text now; drop the card and body after the exit transition.
pub fn remove_note(scene: &Rc<RefCell<WallScene>>, id: NoteId) {
    let card = {
        let mut s = scene.borrow_mut();
        if s.wall.delete(id).is_none() {
            return;
        }
        s.views.get(id).cloned()
    };
    if let Some(card) = &card {
        view::mark_removing(card);
    }
    let scene = scene.clone();
    dom::after_ms(REMOVE_TRANSITION_MS, move || {
        let count = {
            let mut s = scene.borrow_mut();
            s.wall.finish_removal(id);
            if let Some(card) = s.views.remove(id) {
                card.remove();
            }
            s.wall.count()
        };
        if let Some(document) = dom::window_document() {
            view::update_total(&document, count);
        }
    });
}
