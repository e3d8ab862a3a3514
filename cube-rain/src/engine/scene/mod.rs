/// Cube mesh and material setup, shared between the static demos and
/// the rain effect.
pub mod cubes;

/// Ambient plus main point light, matching the classic sample scene.
pub mod lighting;
