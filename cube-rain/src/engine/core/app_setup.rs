use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;

use constants::scene_layout::{CAMERA_NEAR_CLIP, DEMO_CAMERA_POSITION};

use crate::engine::camera::{FreeCamera, camera_controller};
use crate::engine::core::window_config::create_window_config;
use crate::engine::rain::CubeRainPlugin;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::systems::fps_tracking::{fps_text_update_system, spawn_fps_overlay};
use crate::engine::systems::quit::exit_on_escape;
use crate::tools::count_panel::CountPanelPlugin;

/// Build the cube-rain application: rain effect, overlay panel, camera
/// controller and FPS readout on top of the stock plugin set.
pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins("cube rain"))
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(CubeRainPlugin)
        .add_plugins(CountPanelPlugin)
        .insert_resource(FreeCamera::for_rain())
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (camera_controller, fps_text_update_system, exit_on_escape),
        );

    app
}

pub fn create_default_plugins(title: &str) -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config(title)),
        ..default()
    };

    DefaultPlugins.set(window_config)
}

fn setup(mut commands: Commands) {
    spawn_lighting(&mut commands);
    spawn_rain_camera(&mut commands);
    spawn_fps_overlay(&mut commands);
}

fn spawn_rain_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            near: CAMERA_NEAR_CLIP,
            ..default()
        }),
        Transform::from_xyz(0.0, 14.0, 38.0).looking_at(Vec3::new(0.0, 10.0, 0.0), Vec3::Y),
    ));
}

/// Fixed camera for the static demos: high up, far back, looking down
/// the negative z axis.
pub fn spawn_demo_camera(commands: &mut Commands) {
    let position = Vec3::from_array(DEMO_CAMERA_POSITION);
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            near: CAMERA_NEAR_CLIP,
            ..default()
        }),
        Transform::from_translation(position).looking_to(-Vec3::Z, Vec3::Y),
    ));
}
