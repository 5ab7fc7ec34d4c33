use crate::constants::*;
use crate::core::{celebration_burst, counter_level, NoteId, PlacedNote};
use crate::dom;
use fnv::FnvHashMap;
use glam::Vec2;
use rand::Rng;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Rendered note cards keyed by physics handle.
#[derive(Default)]
pub struct NoteViews {
    elements: FnvHashMap<NoteId, web::HtmlElement>,
}

impl NoteViews {
    pub fn insert(&mut self, id: NoteId, el: web::HtmlElement) {
        self.elements.insert(id, el);
    }

    pub fn get(&self, id: NoteId) -> Option<&web::HtmlElement> {
        self.elements.get(&id)
    }

    pub fn remove(&mut self, id: NoteId) -> Option<web::HtmlElement> {
        self.elements.remove(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NoteId, &web::HtmlElement)> + '_ {
        self.elements.iter().map(|(id, el)| (*id, el))
    }

    pub fn place(&self, id: NoteId, pos: Vec2) {
        if let Some(el) = self.elements.get(&id) {
            place(el, pos);
        }
    }
}

#[inline]
pub fn place(el: &web::HtmlElement, pos: Vec2) {
    dom::set_style(el, "left", &format!("{}px", pos.x));
    dom::set_style(el, "top", &format!("{}px", pos.y));
}

fn create_html(document: &web::Document, tag: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Build a note card with its delete button and append it to the wall.
///
/// Returns the card and the delete button so the caller can wire listeners.
pub fn build_note(
    document: &web::Document,
    wall: &web::HtmlElement,
    placed: &PlacedNote,
) -> anyhow::Result<(web::HtmlElement, web::HtmlElement)> {
    let card = create_html(document, "div")?;
    card.set_class_name(NOTE_CLASS);
    card.set_inner_text(&placed.text);
    dom::set_style(&card, "background", &placed.style.background_css());
    dom::set_style(&card, "border-color", &placed.style.border_css());
    dom::set_style(&card, "position", "fixed");
    dom::set_style(&card, "z-index", NOTE_Z_INDEX);
    place(&card, placed.pos);

    let delete = create_html(document, "div")?;
    delete.set_class_name(DELETE_CLASS);
    delete.set_inner_text(DELETE_GLYPH);
    card.append_child(&delete).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    wall.append_child(&card).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok((card, delete))
}

/// Grab affordance: lift and enlarge while held.
pub fn set_held(el: &web::HtmlElement, held: bool) {
    if held {
        dom::set_style(el, "cursor", "grabbing");
        dom::set_style(el, "z-index", HELD_Z_INDEX);
        dom::set_style(el, "transform", HELD_SCALE);
    } else {
        dom::set_style(el, "cursor", "pointer");
        dom::set_style(el, "z-index", NOTE_Z_INDEX);
        dom::set_style(el, "transform", REST_SCALE);
    }
}

pub fn mark_removing(el: &web::HtmlElement) {
    _ = el.class_list().add_1(REMOVING_CLASS);
}

pub fn shake(el: &web::HtmlElement) {
    dom::restart_animation(el, "shake 0.5s");
}

pub fn update_total(document: &web::Document, count: usize) {
    let Some(el) = document
        .get_element_by_id(TOTAL_STAT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    dom::set_style(&el, "animation", "none");
    dom::after_ms(ANIMATION_RESTART_MS, move || {
        el.set_text_content(Some(&count.to_string()));
        dom::set_style(&el, "animation", "pulse 0.5s");
    });
}

pub fn update_counter(document: &web::Document, len: usize) {
    if let Some(el) = document.get_element_by_id(CHAR_COUNT_ID) {
        el.set_text_content(Some(&len.to_string()));
    }
    if let Ok(Some(counter)) = document.query_selector(CHAR_COUNTER_SELECTOR) {
        let classes = counter.class_list();
        _ = classes.remove_2("warning", "limit");
        if let Some(class) = counter_level(len).class() {
            _ = classes.add_1(class);
        }
    }
}

/// Slide a toast in at the top right, then slide it out and drop it.
pub fn show_notification(document: &web::Document, message: &str) {
    let Ok(toast) = create_html(document, "div") else {
        return;
    };
    toast.set_text_content(Some(message));
    _ = toast.style().set_css_text(
        "position: fixed; top: 20px; right: 20px; \
         background: linear-gradient(135deg, #a78bfa, #ec4899); color: white; \
         padding: 16px 24px; border-radius: 12px; font-weight: 600; \
         box-shadow: 0 8px 32px rgba(167, 139, 250, 0.4); z-index: 1000; \
         animation: slideIn 0.3s ease;",
    );
    let Some(body) = document.body() else {
        return;
    };
    _ = body.append_child(&toast);
    dom::after_ms(TOAST_VISIBLE_MS, move || {
        dom::set_style(&toast, "animation", "slideOut 0.3s ease");
        dom::after_ms(TOAST_SLIDE_MS, move || toast.remove());
    });
}

/// Radial particle burst centered on `el`.
pub fn celebrate<R: Rng + ?Sized>(document: &web::Document, rng: &mut R, el: &web::HtmlElement) {
    let Some(body) = document.body() else {
        return;
    };
    let rect = el.get_bounding_client_rect();
    let center = Vec2::new(
        (rect.left() + rect.width() / 2.0) as f32,
        (rect.top() + rect.height() / 2.0) as f32,
    );
    for spark in celebration_burst(rng, center) {
        let Ok(particle) = create_html(document, "div") else {
            continue;
        };
        particle.set_text_content(Some(spark.glyph));
        _ = particle.style().set_css_text(&format!(
            "position: fixed; left: {}px; top: {}px; font-size: 20px; \
             pointer-events: none; z-index: 1000; \
             animation: celebrateParticle 1s ease-out forwards;",
            spark.origin.x, spark.origin.y
        ));
        dom::set_style(&particle, "--tx", &format!("{}px", spark.travel.x));
        dom::set_style(&particle, "--ty", &format!("{}px", spark.travel.y));
        _ = body.append_child(&particle);
        dom::after_ms(SPARK_LIFETIME_MS, move || particle.remove());
    }
}

pub fn install_keyframes(document: &web::Document) {
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_text_content(Some(KEYFRAMES_CSS));
    if let Some(head) = document.head() {
        _ = head.append_child(&style);
    }
}
