use super::constants::*;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::TAU;

pub const SPARK_GLYPHS: [&str; 4] = ["✨", "💭", "🌟", "💫"];

/// One particle of the burst shown when a note is added.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spark {
    pub glyph: &'static str,
    pub origin: Vec2,
    /// Where the particle ends up relative to `origin`.
    pub travel: Vec2,
}

pub type Burst = SmallVec<[Spark; CELEBRATION_PARTICLES]>;

/// Evenly spaced radial burst around `center` with randomized reach and glyphs.
pub fn celebration_burst<R: Rng + ?Sized>(rng: &mut R, center: Vec2) -> Burst {
    (0..CELEBRATION_PARTICLES)
        .map(|i| {
            let angle = TAU * i as f32 / CELEBRATION_PARTICLES as f32;
            let distance = CELEBRATION_DISTANCE_BASE + rng.gen::<f32>() * CELEBRATION_DISTANCE_SPAN;
            Spark {
                glyph: SPARK_GLYPHS[rng.gen_range(0..SPARK_GLYPHS.len())],
                origin: center,
                travel: Vec2::from_angle(angle) * distance,
            }
        })
        .collect()
}
