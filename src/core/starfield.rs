use super::constants::*;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// One of the three weighted color buckets a star is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarTint {
    Violet,
    Pink,
    White,
}

impl StarTint {
    /// Pick a tint: roughly 30% violet, 30% pink, 40% white.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let roll: f32 = rng.gen();
        if roll > TINT_VIOLET_THRESHOLD {
            StarTint::Violet
        } else if roll > TINT_PINK_THRESHOLD {
            StarTint::Pink
        } else {
            StarTint::White
        }
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            StarTint::Violet => [167, 139, 250],
            StarTint::Pink => [236, 72, 153],
            StarTint::White => [255, 255, 255],
        }
    }

    pub fn with_alpha(self, alpha: f32) -> Rgba {
        let [r, g, b] = self.rgb();
        Rgba {
            r,
            g,
            b,
            a: alpha.clamp(0.0, 1.0),
        }
    }
}

/// Straight-alpha color handed to the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Immediate-mode surface the starfield draws onto.
///
/// The browser implementation wraps a 2D canvas context; tests record calls.
pub trait StarCanvas {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

/// Tunables for the starfield, defaulting to the values in `constants`.
#[derive(Clone, Debug)]
pub struct StarfieldParams {
    pub count: usize,
    pub distort_radius: f32,
    pub distort_max: f32,
    pub relax: f32,
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            count: STAR_COUNT,
            distort_radius: DISTORT_RADIUS,
            distort_max: DISTORT_MAX,
            relax: DISTORT_RELAX,
        }
    }
}

/// A falling, twinkling background particle.
///
/// Fields:
/// - `base`: undistorted position; `base.y` is the source of truth for the fall
/// - `pos`: rendered position, pushed away from the pointer when it is close
/// - `speed`: vertical fall per frame
/// - `opacity`: resting opacity before proximity boost and twinkle
/// - `twinkle_phase`/`twinkle_speed`: sine oscillator driving the shimmer
/// - `lit`: final opacity computed by the last `update`
#[derive(Clone, Debug)]
pub struct Star {
    pub base: Vec2,
    pub pos: Vec2,
    pub speed: f32,
    pub radius: f32,
    pub opacity: f32,
    pub tint: StarTint,
    pub twinkle_phase: f32,
    pub twinkle_speed: f32,
    pub lit: f32,
}

impl Star {
    /// Create a star at a random height so the initial pool covers the screen.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        let mut star = Star {
            base: Vec2::ZERO,
            pos: Vec2::ZERO,
            speed: 0.0,
            radius: 0.0,
            opacity: 0.0,
            tint: StarTint::White,
            twinkle_phase: 0.0,
            twinkle_speed: 0.0,
            lit: 0.0,
        };
        star.respawn(rng, width);
        star.base.y = rng.gen::<f32>() * height.max(0.0);
        star.pos = star.base;
        star
    }

    /// Reinitialize in place just above the top edge with fresh parameters.
    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f32) {
        self.base = Vec2::new(rng.gen::<f32>() * width.max(0.0), STAR_SPAWN_Y);
        self.pos = self.base;
        self.speed = rng.gen::<f32>() * STAR_SPEED_SPAN + STAR_SPEED_BASE;
        self.radius = rng.gen::<f32>() * STAR_RADIUS_SPAN + STAR_RADIUS_BASE;
        self.opacity = rng.gen::<f32>() * STAR_OPACITY_SPAN + STAR_OPACITY_BASE;
        self.tint = StarTint::roll(rng);
        self.twinkle_speed = rng.gen::<f32>() * TWINKLE_SPEED_SPAN + TWINKLE_SPEED_BASE;
        self.twinkle_phase = rng.gen::<f32>() * TAU;
    }

    /// Advance one frame: fall, respawn past the bottom, react to the pointer, twinkle.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        pointer: Vec2,
        bounds: Vec2,
        params: &StarfieldParams,
    ) {
        self.base.y += self.speed;
        if self.base.y > bounds.y + STAR_EXIT_MARGIN {
            self.respawn(rng, bounds.x);
        }

        let away = pointer - self.base;
        let distance = away.length();
        let proximity_opacity = if distance < params.distort_radius {
            let force = (params.distort_radius - distance) / params.distort_radius;
            // pointer sitting exactly on the star pushes it left, like atan2(0, 0)
            let dir = if distance > 0.0 { away / distance } else { Vec2::X };
            self.pos = self.base - dir * force * params.distort_max;
            (self.opacity + force * DISTORT_OPACITY_BOOST).min(1.0)
        } else {
            self.pos += (self.base - self.pos) * params.relax;
            self.opacity
        };

        self.twinkle_phase += self.twinkle_speed;
        self.lit = proximity_opacity * (0.5 + self.twinkle_phase.sin() * 0.5);
    }

    pub fn render(&self, canvas: &mut impl StarCanvas) {
        canvas.fill_circle(self.pos, self.radius, self.tint.with_alpha(self.lit));
        if self.radius > GLOW_MIN_RADIUS {
            canvas.fill_circle(
                self.pos,
                self.radius * GLOW_RADIUS_SCALE,
                self.tint.with_alpha(self.lit * GLOW_OPACITY_SCALE),
            );
        }
    }
}

/// Fixed pool of stars sized to the canvas.
pub struct Starfield {
    pub stars: Vec<Star>,
    pub params: StarfieldParams,
    bounds: Vec2,
}

impl Starfield {
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        width: f32,
        height: f32,
        params: StarfieldParams,
    ) -> Self {
        let stars = (0..params.count)
            .map(|_| Star::new(rng, width, height))
            .collect();
        Self {
            stars,
            params,
            bounds: Vec2::new(width, height),
        }
    }

    /// Track a new canvas size. Existing stars keep falling and respawn within the new width.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Clear the surface, then update and draw every star in pool order.
    pub fn frame<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        pointer: Vec2,
        canvas: &mut impl StarCanvas,
    ) {
        canvas.clear(self.bounds.x, self.bounds.y);
        for star in self.stars.iter_mut() {
            star.update(rng, pointer, self.bounds, &self.params);
            star.render(canvas);
        }
    }
}
