// --- Vector Constants ---
pub const DEFAULT_NORMALIZE_MULTIPLIER: f64 = 1.0;

// --- Demo Constants ---
pub const FIELD_WIDTH: f64 = 80.0;
pub const FIELD_HEIGHT: f64 = 24.0;
pub const SEEKER_MAX_SPEED: f64 = 1.5;
pub const SEEKER_MAX_FORCE: f64 = 0.1;
pub const ARRIVAL_RADIUS: f64 = 1.0;
pub const WANDER_TURN: f64 = 0.1; // Max radians per frame with no target
pub const TARGET_COUNT: usize = 5;
pub const DEFAULT_FRAMES: u64 = 60 * 30; // 30 seconds at 60 FPS
pub const DEFAULT_SEED: u64 = 42;
pub const LOG_FILE: &str = "vector2d-demo.log";
