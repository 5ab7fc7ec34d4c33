use super::constants::*;
use super::notes::{NoteField, NoteId, Viewport};
use super::store::{KeyValueStore, NoteStore};
use glam::Vec2;
use rand::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WallError {
    #[error("thought is empty")]
    EmptyThought,
}

/// State of the character counter under the text box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    Limit,
}

impl CounterLevel {
    /// CSS class for the counter element, if any.
    pub fn class(self) -> Option<&'static str> {
        match self {
            CounterLevel::Normal => None,
            CounterLevel::Warning => Some("warning"),
            CounterLevel::Limit => Some("limit"),
        }
    }
}

/// Length as the browser's textarea counts it, in UTF-16 code units.
pub fn counted_len(text: &str) -> usize {
    text.encode_utf16().count()
}

pub fn counter_level(len: usize) -> CounterLevel {
    if len > COUNTER_LIMIT_AT {
        CounterLevel::Limit
    } else if len > COUNTER_WARNING_AT {
        CounterLevel::Warning
    } else {
        CounterLevel::Normal
    }
}

/// Decorative hues for a note card's gradient and border.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoteStyle {
    pub hue_a: f32,
    pub hue_b: f32,
}

impl NoteStyle {
    /// First hue in the blue-violet range, second in the magenta range.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            hue_a: rng.gen::<f32>() * 60.0 + 240.0,
            hue_b: rng.gen::<f32>() * 60.0 + 300.0,
        }
    }

    pub fn background_css(&self) -> String {
        format!(
            "linear-gradient(135deg, hsla({}, 70%, 65%, 0.1), hsla({}, 70%, 65%, 0.1))",
            self.hue_a, self.hue_b
        )
    }

    pub fn border_css(&self) -> String {
        format!("hsla({}, 70%, 65%, 0.3)", self.hue_a)
    }
}

/// A note on the wall as the view needs to build it.
#[derive(Clone, Debug)]
pub struct PlacedNote {
    pub id: NoteId,
    pub text: String,
    pub style: NoteStyle,
    pub pos: Vec2,
}

#[derive(Clone, Debug)]
struct WallEntry {
    id: NoteId,
    text: String,
    removing: bool,
}

/// Owns the persisted note list and the physics bodies, and keeps them paired.
///
/// Typical usage:
/// - `restore` once at startup to place every stored note
/// - `submit` for user input; `delete` then `finish_removal` once the exit
///   transition is over
/// - `notes_mut().tick(..)` every frame
pub struct ThoughtWall<S> {
    store: NoteStore<S>,
    notes: NoteField,
    entries: Vec<WallEntry>,
}

impl<S: KeyValueStore> ThoughtWall<S> {
    pub fn new(store: NoteStore<S>, notes: NoteField) -> Self {
        Self {
            store,
            notes,
            entries: Vec::new(),
        }
    }

    /// Place a note for every stored text without writing to the store again.
    pub fn restore<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport) -> Vec<PlacedNote> {
        let texts = self.store.texts().to_vec();
        let placed: Vec<PlacedNote> = texts
            .into_iter()
            .map(|text| self.place(&mut *rng, viewport, text))
            .collect();
        log::info!("[wall] restored {} thoughts", placed.len());
        placed
    }

    /// Add a user-entered thought. Whitespace-only input is rejected untouched.
    ///
    /// A failed store write is logged and the note is still placed.
    pub fn submit<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        viewport: Viewport,
        raw: &str,
    ) -> Result<PlacedNote, WallError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(WallError::EmptyThought);
        }
        if let Err(e) = self.store.push(text) {
            log::warn!("[wall] could not persist thought: {}", e);
        }
        let placed = self.place(rng, viewport, text.to_string());
        log::info!("[wall] added thought {:?}", placed.id);
        Ok(placed)
    }

    /// Forget the note's text (every stored copy of it) and mark it as leaving.
    ///
    /// The body keeps moving until `finish_removal`. Returns the text, or
    /// `None` if the note is unknown or already leaving.
    pub fn delete(&mut self, id: NoteId) -> Option<String> {
        let entry = self.entries.iter_mut().find(|e| e.id == id && !e.removing)?;
        entry.removing = true;
        let text = entry.text.clone();
        match self.store.remove_all(&text) {
            Ok(n) => log::info!("[wall] deleted {:?}, dropped {} stored copies", id, n),
            Err(e) => log::warn!("[wall] could not persist deletion: {}", e),
        }
        Some(text)
    }

    /// Drop the body and entry once the exit transition is done.
    pub fn finish_removal(&mut self, id: NoteId) -> bool {
        let Some(index) = self.entries.iter().position(|e| e.id == id) else {
            return false;
        };
        self.entries.remove(index);
        self.notes.remove(id);
        true
    }

    pub fn text_of(&self, id: NoteId) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.text.as_str())
    }

    /// Notes currently on the wall, including ones still fading out.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Note handles in creation order.
    pub fn ids(&self) -> impl Iterator<Item = NoteId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    pub fn stored(&self) -> &[String] {
        self.store.texts()
    }

    pub fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    pub fn notes(&self) -> &NoteField {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut NoteField {
        &mut self.notes
    }

    fn place<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        viewport: Viewport,
        text: String,
    ) -> PlacedNote {
        let style = NoteStyle::random(rng);
        let id = self.notes.spawn(rng, viewport);
        let pos = self.notes.get(id).map(|n| n.pos).unwrap_or(Vec2::ZERO);
        self.entries.push(WallEntry {
            id,
            text: text.clone(),
            removing: false,
        });
        PlacedNote {
            id,
            text,
            style,
            pos,
        }
    }
}
