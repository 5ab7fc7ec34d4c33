// Page wiring and cosmetic timing used by the web frontend.

// Element ids and selectors the page must provide
pub const STAR_CANVAS_ID: &str = "particles";
pub const WALL_ID: &str = "wall";
pub const INPUT_ID: &str = "thoughtInput";
pub const CHAR_COUNT_ID: &str = "charCount";
pub const CHAR_COUNTER_SELECTOR: &str = ".char-counter";
pub const TOTAL_STAT_ID: &str = "totalThoughts";

// Persistence
pub const STORAGE_KEY: &str = "thoughts";

// Note element classes and stacking
pub const NOTE_CLASS: &str = "thought floating-thought";
pub const DELETE_CLASS: &str = "delete-btn";
pub const REMOVING_CLASS: &str = "removing";
pub const DELETE_GLYPH: &str = "×";
pub const NOTE_Z_INDEX: &str = "10";
pub const HELD_Z_INDEX: &str = "1000";
pub const HELD_SCALE: &str = "scale(1.1)";
pub const REST_SCALE: &str = "scale(1)";

// Cosmetic timers (milliseconds)
pub const ANIMATION_RESTART_MS: i32 = 10; // gap between clearing and replaying a CSS animation
pub const REMOVE_TRANSITION_MS: i32 = 600;
pub const TOAST_VISIBLE_MS: i32 = 2000;
pub const TOAST_SLIDE_MS: i32 = 300;
pub const SPARK_LIFETIME_MS: i32 = 1000;

pub const COPIED_MESSAGE: &str = "Copied to clipboard! ✨";

pub const KEYFRAMES_CSS: &str = r#"
  @keyframes shake {
    0%, 100% { transform: translateX(0); }
    25% { transform: translateX(-10px); }
    75% { transform: translateX(10px); }
  }
  @keyframes slideIn {
    from { transform: translateX(400px); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
  }
  @keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(400px); opacity: 0; }
  }
  @keyframes celebrateParticle {
    0% { transform: translate(0, 0) scale(0); opacity: 1; }
    100% { transform: translate(var(--tx), var(--ty)) scale(1); opacity: 0; }
  }
"#;
