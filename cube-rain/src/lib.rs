//! Falling-cubes demo suite built on the Bevy engine.
//!
//! Three binaries share this library: `starter` (static survey scene),
//! `freelook` (survey scene with an interactive camera) and `cube-rain`
//! (animated cube rain with a debug overlay).

pub mod engine;
pub mod tools;
