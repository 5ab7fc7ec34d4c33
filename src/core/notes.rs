use super::constants::*;
use glam::Vec2;
use rand::prelude::*;

/// Stable handle to a floating note body.
///
/// Slots are recycled after removal; the generation makes stale handles miss
/// instead of aliasing a newer note.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NoteId {
    index: u32,
    generation: u32,
}

/// Size of the area notes bounce around in, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Tunables for note motion, defaulting to the values in `constants`.
#[derive(Clone, Debug)]
pub struct NoteParams {
    pub width: f32,
    pub cruise_speed: f32,
    pub damping: f32,
    pub snap_ratio: f32,
}

impl Default for NoteParams {
    fn default() -> Self {
        Self {
            width: NOTE_WIDTH,
            cruise_speed: NOTE_CRUISE_SPEED,
            damping: NOTE_DAMPING,
            snap_ratio: NOTE_SNAP_RATIO,
        }
    }
}

/// Physics state for one note card.
#[derive(Clone, Debug)]
pub struct FloatingNote {
    pub pos: Vec2,
    pub vel: Vec2,
    pub cruise_speed: f32,
    pub dragging: bool,
    /// Last measured height of the rendered card.
    pub height: f32,
}

impl FloatingNote {
    /// Random placement inside the viewport minus the spawn margin, drifting slowly.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, cruise_speed: f32) -> Self {
        let x = rng.gen::<f32>() * (viewport.width - NOTE_SPAWN_MARGIN_X).max(0.0);
        let y = rng.gen::<f32>() * (viewport.height - NOTE_SPAWN_MARGIN_Y).max(0.0);
        Self {
            pos: Vec2::new(x, y),
            vel: random_drift(rng, NOTE_INITIAL_SPEED_SPAN),
            cruise_speed,
            dragging: false,
            height: NOTE_FALLBACK_HEIGHT,
        }
    }

    /// Pull speed down toward the cruise speed; never speeds a slow note up.
    fn regulate_speed(&mut self, params: &NoteParams) {
        let speed = self.vel.length();
        if speed <= self.cruise_speed {
            return;
        }
        self.vel *= params.damping;
        if self.vel.length() < self.cruise_speed * params.snap_ratio {
            self.vel = self.vel.normalize_or_zero() * self.cruise_speed;
        }
    }

    /// Clamp the card inside the viewport, reflecting velocity on each edge it touched.
    fn reflect(&mut self, width: f32, viewport: Viewport) {
        let height = if self.height > 0.0 {
            self.height
        } else {
            NOTE_FALLBACK_HEIGHT
        };
        let max_x = (viewport.width - width).max(0.0);
        let max_y = (viewport.height - height).max(0.0);

        if self.pos.x <= 0.0 {
            self.pos.x = 0.0;
            self.vel.x = -self.vel.x;
        } else if self.pos.x >= max_x {
            self.pos.x = max_x;
            self.vel.x = -self.vel.x;
        }
        if self.pos.y <= 0.0 {
            self.pos.y = 0.0;
            self.vel.y = -self.vel.y;
        } else if self.pos.y >= max_y {
            self.pos.y = max_y;
            self.vel.y = -self.vel.y;
        }
    }
}

/// Uniform velocity in `[-span/2, span/2)` on each axis.
pub fn random_drift<R: Rng + ?Sized>(rng: &mut R, span: f32) -> Vec2 {
    Vec2::new(
        (rng.gen::<f32>() - 0.5) * span,
        (rng.gen::<f32>() - 0.5) * span,
    )
}

struct Slot {
    generation: u32,
    note: Option<FloatingNote>,
}

/// Arena of note bodies keyed by `NoteId`.
///
/// The rendered element for each note lives elsewhere and looks its body up by
/// handle; removing a body here never touches the view.
pub struct NoteField {
    slots: Vec<Slot>,
    free: Vec<u32>,
    pub params: NoteParams,
}

impl Default for NoteField {
    fn default() -> Self {
        Self::new(NoteParams::default())
    }
}

impl NoteField {
    pub fn new(params: NoteParams) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            params,
        }
    }

    pub fn insert(&mut self, note: FloatingNote) -> NoteId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.note = Some(note);
            return NoteId {
                index,
                generation: slot.generation,
            };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            note: Some(note),
        });
        NoteId {
            index,
            generation: 0,
        }
    }

    /// Register a fresh body at a random spot in the viewport.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport) -> NoteId {
        let note = FloatingNote::spawn(rng, viewport, self.params.cruise_speed);
        self.insert(note)
    }

    pub fn remove(&mut self, id: NoteId) -> Option<FloatingNote> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let note = slot.note.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        Some(note)
    }

    pub fn get(&self, id: NoteId) -> Option<&FloatingNote> {
        self.slots
            .get(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.note.as_ref())
    }

    pub fn get_mut(&mut self, id: NoteId) -> Option<&mut FloatingNote> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.note.as_mut())
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.note.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record the rendered height so boundary checks use the real card size.
    pub fn set_height(&mut self, id: NoteId, height: f32) {
        if let Some(note) = self.get_mut(id) {
            note.height = height;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (NoteId, &FloatingNote)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, s)| {
            s.note.as_ref().map(|n| {
                (
                    NoteId {
                        index: i as u32,
                        generation: s.generation,
                    },
                    n,
                )
            })
        })
    }

    /// Advance every free-floating note by one frame.
    ///
    /// Held notes are skipped entirely; their position belongs to the pointer.
    pub fn tick(&mut self, viewport: Viewport) {
        let params = &self.params;
        for note in self.slots.iter_mut().filter_map(|s| s.note.as_mut()) {
            if note.dragging {
                continue;
            }
            note.regulate_speed(params);
            note.pos += note.vel;
            note.reflect(params.width, viewport);
        }
    }
}
