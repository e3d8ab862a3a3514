/// Edge length of the big survey cubes in the static demos.
pub const SURVEY_CUBE_EDGE: f32 = 100.0;

/// Positions of the three survey cubes.
pub const SURVEY_CUBE_POSITIONS: &[[f32; 3]] = &[
    [0.0, 0.0, 0.0],
    [110.0, 0.0, 0.0],
    [50.0, 0.0, 110.0],
];

/// Fixed camera placement for the static demos.
pub const DEMO_CAMERA_POSITION: [f32; 3] = [100.0, 200.0, 800.0];

/// Main light placement, matching the classic sample scene.
pub const MAIN_LIGHT_POSITION: [f32; 3] = [20.0, 80.0, 50.0];

/// Near clip distance used by every demo camera.
pub const CAMERA_NEAR_CLIP: f32 = 5.0;
