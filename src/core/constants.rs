/// Simulation tuning constants for the starfield and the floating notes.
///
/// All motion is expressed in CSS pixels per frame; the loops run once per
/// display refresh and do not scale by elapsed time.
// Starfield pool
pub const STAR_COUNT: usize = 200;
pub const STAR_SPAWN_Y: f32 = -10.0; // respawn height, just above the viewport
pub const STAR_EXIT_MARGIN: f32 = 10.0; // how far below the bottom a star may fall

// Randomized star attributes: value = base + rand * span
pub const STAR_SPEED_BASE: f32 = 0.2;
pub const STAR_SPEED_SPAN: f32 = 0.5;
pub const STAR_RADIUS_BASE: f32 = 0.5;
pub const STAR_RADIUS_SPAN: f32 = 2.0;
pub const STAR_OPACITY_BASE: f32 = 0.2;
pub const STAR_OPACITY_SPAN: f32 = 0.8;
pub const TWINKLE_SPEED_BASE: f32 = 0.01;
pub const TWINKLE_SPEED_SPAN: f32 = 0.02;

// Color buckets: roll > VIOLET -> violet, roll > PINK -> pink, else white
pub const TINT_VIOLET_THRESHOLD: f32 = 0.7;
pub const TINT_PINK_THRESHOLD: f32 = 0.4;

// Pointer distortion
pub const DISTORT_RADIUS: f32 = 150.0;
pub const DISTORT_MAX: f32 = 50.0;
pub const DISTORT_OPACITY_BOOST: f32 = 0.5;
pub const DISTORT_RELAX: f32 = 0.1; // fraction of the gap closed per frame

// Glow halo
pub const GLOW_MIN_RADIUS: f32 = 1.5;
pub const GLOW_RADIUS_SCALE: f32 = 2.0;
pub const GLOW_OPACITY_SCALE: f32 = 0.3;

// Note bodies
pub const NOTE_WIDTH: f32 = 200.0;
pub const NOTE_FALLBACK_HEIGHT: f32 = 100.0; // used until the element reports a height
pub const NOTE_SPAWN_MARGIN_X: f32 = 250.0;
pub const NOTE_SPAWN_MARGIN_Y: f32 = 150.0;
pub const NOTE_CRUISE_SPEED: f32 = 0.5;
pub const NOTE_INITIAL_SPEED_SPAN: f32 = 0.5; // per axis, centered on zero
pub const NOTE_DAMPING: f32 = 0.98;
pub const NOTE_SNAP_RATIO: f32 = 1.2; // snap to cruise once within 20%

// Drag and throw
pub const THROW_FRAME_MS: f32 = 16.0;
pub const THROW_VELOCITY_SCALE: f32 = 0.5;
pub const THROW_JITTER_SPAN: f32 = 0.2;
pub const THROW_MAX_VELOCITY: f32 = 10.0;
pub const THROW_STALL_EPSILON: f32 = 0.1;
pub const THROW_RESTART_SPAN: f32 = 0.5;
pub const CLICK_MAX_MS: u64 = 200;

// Text entry
pub const COUNTER_WARNING_AT: usize = 150;
pub const COUNTER_LIMIT_AT: usize = 180;

// Celebration burst
pub const CELEBRATION_PARTICLES: usize = 12;
pub const CELEBRATION_DISTANCE_BASE: f32 = 80.0;
pub const CELEBRATION_DISTANCE_SPAN: f32 = 40.0;
