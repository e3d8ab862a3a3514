//! Debug overlay tooling for the rain demo.
//!
//! A single bevy_ui side panel exposes the runtime cube count as a
//! draggable slider together with a live count readout. The panel writes
//! the requested count into [`crate::engine::rain::RequestedCubeCount`];
//! the rain systems pick it up on the next frame. The value is clamped
//! to the slider range before the pool ever sees it, so the resize path
//! has no error case.

/// Cube-count slider panel (state, layout and interaction systems).
pub mod count_panel;
