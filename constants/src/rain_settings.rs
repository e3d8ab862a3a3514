/// Vertical units per second lost by a scale-1.0 cube. Smaller cubes fall
/// faster, larger ones slower, via the (2.0 - scale) factor.
pub const FALL_SPEED: f32 = 3.0;

/// Cubes whose centre drops below this y coordinate are respawned.
pub const FALL_OFF_THRESHOLD: f32 = -10.0;

// Respawn sampling ranges. X and Z are drawn from 15 integer positions
// centred on the origin; Y starts above the visible volume.
pub const SPAWN_LATERAL_STEPS: i32 = 15;
pub const SPAWN_LATERAL_OFFSET: i32 = -7;
pub const SPAWN_HEIGHT_BASE: i32 = 7;
pub const SPAWN_HEIGHT_STEPS: i32 = 30;

// Uniform scale is sampled in 0.01 steps from [0.7, 1.4).
pub const SPAWN_SCALE_BASE: f32 = 0.7;
pub const SPAWN_SCALE_STEPS: i32 = 70;
pub const SPAWN_SCALE_STEP: f32 = 0.01;

/// Slider bounds for the runtime cube count. The overlay clamps to this
/// range before the pool ever sees a request.
pub const MIN_CUBE_COUNT: usize = 10;
pub const MAX_CUBE_COUNT: usize = 400;
pub const DEFAULT_CUBE_COUNT: usize = 120;
