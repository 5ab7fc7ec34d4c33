use super::constants::*;
use super::notes::{random_drift, NoteField, NoteId};
use glam::Vec2;
use instant::Instant;
use rand::prelude::*;
use std::time::Duration;

/// Bookkeeping for the note currently held by the pointer.
///
/// Fields:
/// - `note`: the held body
/// - `grab_offset`: pointer position relative to the note's top-left at press time
/// - `last_pointer`/`last_time`: previous pointer sample, used for the throw estimate
/// - `pressed_at`: press timestamp for click detection
/// - `moved`: whether any move changed the pointer position since the press
#[derive(Clone, Copy, Debug)]
pub struct Grab {
    pub note: NoteId,
    pub grab_offset: Vec2,
    pub last_pointer: Vec2,
    pub last_time: Instant,
    pub pressed_at: Instant,
    pub moved: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Grab),
}

/// What a pointer release turned out to be.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Release {
    /// Quick press without movement; the note's velocity is left alone.
    Click(NoteId),
    /// The note was let go with this velocity.
    Thrown { note: NoteId, velocity: Vec2 },
}

/// Single-note grab/drag/throw state machine.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn held(&self) -> Option<NoteId> {
        match self.state {
            DragState::Dragging(grab) => Some(grab.note),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.held().is_some()
    }

    /// Begin holding `id`. Returns false if another note is already held or
    /// the body no longer exists; state is left untouched in both cases.
    pub fn press(
        &mut self,
        notes: &mut NoteField,
        id: NoteId,
        pointer: Vec2,
        now: Instant,
    ) -> bool {
        if let DragState::Dragging(grab) = self.state {
            log::warn!(
                "[drag] press on {:?} ignored while {:?} is held",
                id,
                grab.note
            );
            return false;
        }
        let Some(body) = notes.get_mut(id) else {
            return false;
        };
        body.dragging = true;
        self.state = DragState::Dragging(Grab {
            note: id,
            grab_offset: pointer - body.pos,
            last_pointer: pointer,
            last_time: now,
            pressed_at: now,
            moved: false,
        });
        true
    }

    /// Move the held note under the pointer and refresh its pending throw velocity.
    ///
    /// Returns the new top-left for the view to apply, or `None` when idle.
    pub fn drag_to(
        &mut self,
        notes: &mut NoteField,
        pointer: Vec2,
        now: Instant,
    ) -> Option<(NoteId, Vec2)> {
        let DragState::Dragging(grab) = &mut self.state else {
            return None;
        };
        let Some(body) = notes.get_mut(grab.note) else {
            // body was deleted mid-drag
            self.state = DragState::Idle;
            return None;
        };

        let pos = pointer - grab.grab_offset;
        body.pos = pos;

        // repeated events at the same coordinates keep the last estimate
        if pointer == grab.last_pointer {
            return Some((grab.note, pos));
        }
        let elapsed_ms = elapsed(now, grab.last_time).as_secs_f32() * 1000.0;
        if elapsed_ms > 0.0 {
            let frame_velocity = (pointer - grab.last_pointer) / elapsed_ms * THROW_FRAME_MS;
            body.vel = frame_velocity * THROW_VELOCITY_SCALE;
        }
        grab.moved = true;
        grab.last_pointer = pointer;
        grab.last_time = now;
        Some((grab.note, pos))
    }

    /// Let go of the held note.
    ///
    /// A release within `CLICK_MAX_MS` of the press with no recorded movement is a
    /// click. Otherwise the pending velocity gets a little jitter, is clamped to
    /// `THROW_MAX_VELOCITY` per axis, and is replaced by a small random drift if
    /// the note would be left nearly still. A click keeps the note's velocity
    /// unless that is nearly still too.
    pub fn release<R: Rng + ?Sized>(
        &mut self,
        notes: &mut NoteField,
        now: Instant,
        rng: &mut R,
    ) -> Option<Release> {
        let DragState::Dragging(grab) = std::mem::take(&mut self.state) else {
            return None;
        };
        let body = notes.get_mut(grab.note)?;
        body.dragging = false;

        let held_for = elapsed(now, grab.pressed_at);
        if !grab.moved && held_for < Duration::from_millis(CLICK_MAX_MS) {
            body.vel = restart_if_stalled(rng, body.vel);
            return Some(Release::Click(grab.note));
        }

        let mut vel = body.vel + random_drift(rng, THROW_JITTER_SPAN);
        vel = vel.clamp(
            Vec2::splat(-THROW_MAX_VELOCITY),
            Vec2::splat(THROW_MAX_VELOCITY),
        );
        vel = restart_if_stalled(rng, vel);
        body.vel = vel;
        log::info!("[drag] released {:?} at ({:.2}, {:.2})", grab.note, vel.x, vel.y);
        Some(Release::Thrown {
            note: grab.note,
            velocity: vel,
        })
    }
}

/// Swap a nearly-still velocity for a small random drift.
fn restart_if_stalled<R: Rng + ?Sized>(rng: &mut R, vel: Vec2) -> Vec2 {
    if vel.x.abs() < THROW_STALL_EPSILON && vel.y.abs() < THROW_STALL_EPSILON {
        random_drift(rng, THROW_RESTART_SPAN)
    } else {
        vel
    }
}

#[inline]
fn elapsed(now: Instant, earlier: Instant) -> Duration {
    if now > earlier {
        now - earlier
    } else {
        Duration::ZERO
    }
}
