//! Falling-cube rain effect.
//!
//! The pool itself lives in [`pool`] and knows nothing about the ECS.
//! This module wires it into the frame loop:
//!
//! - `apply_requested_count` resizes the pool to the overlay's request
//!   and reconciles the parallel entity list (spawn on grow, despawn on
//!   shrink, index for index).
//! - `advance_rain` runs one update step with the frame delta.
//! - `sync_cube_transforms` mirrors position and scale into the render
//!   entities.
//!
//! The three systems are chained, so the pool and its handles are only
//! ever touched from this single per-frame sequence. The random stream
//! is an explicit `StdRng` resource seeded once at plugin build, handed
//! into the pool operations rather than hidden behind a global.

pub mod pool;

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use constants::rain_settings::{DEFAULT_CUBE_COUNT, MAX_CUBE_COUNT, MIN_CUBE_COUNT};

use crate::engine::scene::cubes::{CubeAssets, setup_rain_cube_assets};
use pool::{CubePool, FallSettings};

/// Single shared pseudo-random stream for sampling fresh cubes.
#[derive(Resource)]
pub struct RainRng(pub StdRng);

/// The cube pool, wrapped for the ECS.
#[derive(Resource)]
pub struct RainPool(pub CubePool);

/// Fall speed and threshold in effect this run.
#[derive(Resource, Default)]
pub struct RainSettings(pub FallSettings);

/// Pool size requested by the overlay slider. Always within the slider
/// bounds; the resize system clamps again anyway.
#[derive(Resource)]
pub struct RequestedCubeCount(pub usize);

/// Scene handles mirroring the pool, index for index.
#[derive(Resource, Default)]
pub struct RainCubeHandles(pub Vec<Entity>);

/// Marker for the falling-cube render entities.
#[derive(Component)]
pub struct RainCube;

pub struct CubeRainPlugin;

impl Plugin for CubeRainPlugin {
    fn build(&self, app: &mut App) {
        let mut rng = StdRng::from_entropy();
        let cubes = CubePool::with_count(DEFAULT_CUBE_COUNT, &mut rng);

        app.insert_resource(RainRng(rng))
            .insert_resource(RainPool(cubes))
            .insert_resource(RequestedCubeCount(DEFAULT_CUBE_COUNT))
            .init_resource::<RainSettings>()
            .init_resource::<RainCubeHandles>()
            .add_systems(Startup, setup_rain_cube_assets)
            .add_systems(
                Update,
                (apply_requested_count, advance_rain, sync_cube_transforms).chain(),
            );
    }
}

/// Resize the pool towards the overlay request and keep one render
/// entity per pool element.
fn apply_requested_count(
    mut commands: Commands,
    requested: Res<RequestedCubeCount>,
    assets: Res<CubeAssets>,
    mut rain: ResMut<RainPool>,
    mut handles: ResMut<RainCubeHandles>,
    mut rng: ResMut<RainRng>,
) {
    let target = requested.0.clamp(MIN_CUBE_COUNT, MAX_CUBE_COUNT);
    if target != rain.0.len() {
        rain.0.resize(target, &mut rng.0);
    }

    // Shrink: release the display handles for the truncated tail.
    while handles.0.len() > rain.0.len() {
        if let Some(entity) = handles.0.pop() {
            commands.entity(entity).despawn();
        }
    }

    // Grow: spawn one entity per new pool slot.
    let existing = handles.0.len();
    for cube in &rain.0.cubes()[existing..] {
        let entity = commands
            .spawn((
                RainCube,
                Mesh3d(assets.mesh.clone()),
                MeshMaterial3d(assets.material.clone()),
                Transform::from_translation(cube.position).with_scale(Vec3::splat(cube.scale)),
            ))
            .id();
        handles.0.push(entity);
    }
}

/// One pool update step per rendered frame.
fn advance_rain(
    time: Res<Time>,
    settings: Res<RainSettings>,
    mut rain: ResMut<RainPool>,
    mut rng: ResMut<RainRng>,
) {
    rain.0.advance(time.delta_secs(), &settings.0, &mut rng.0);
}

/// Write pool positions and scales back into the render entities.
fn sync_cube_transforms(
    rain: Res<RainPool>,
    handles: Res<RainCubeHandles>,
    mut transforms: Query<&mut Transform, With<RainCube>>,
) {
    for (cube, entity) in rain.0.cubes().iter().zip(handles.0.iter()) {
        if let Ok(mut transform) = transforms.get_mut(*entity) {
            transform.translation = cube.position;
            transform.scale = Vec3::splat(cube.scale);
        }
    }
}
