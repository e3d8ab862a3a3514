use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use constants::scene_layout::DEMO_CAMERA_POSITION;

/// Free-look camera state: yaw/pitch plus a focus position the camera
/// transform is smoothed towards each frame.
#[derive(Resource)]
pub struct FreeCamera {
    pub focus_point: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub move_speed: f32,
}

impl FreeCamera {
    /// Placement for the survey demos: high up and far back, looking
    /// down the negative z axis.
    pub fn for_survey() -> Self {
        Self {
            focus_point: Vec3::from_array(DEMO_CAMERA_POSITION),
            yaw: 0.0,
            pitch: 0.0,
            move_speed: 120.0,
        }
    }

    /// Placement for the rain demo: close enough to frame the spawn
    /// volume, tilted slightly down.
    pub fn for_rain() -> Self {
        Self {
            focus_point: Vec3::new(0.0, 14.0, 38.0),
            yaw: 0.0,
            pitch: -0.1,
            move_speed: 16.0,
        }
    }

    fn view_rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut free_camera: ResMut<FreeCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    // Mouse motion with right click (look around)
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        let yaw_sens = 0.0035;
        let pitch_sens = 0.0030;
        free_camera.yaw += -mouse_delta.x * yaw_sens;
        free_camera.pitch += -mouse_delta.y * pitch_sens;
        free_camera.pitch = free_camera.pitch.clamp(-1.55, 1.55);
    }

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    // Dolly along the view direction
    if scroll_accum.abs() > f32::EPSILON {
        let dolly_speed = (free_camera.move_speed * 0.2).clamp(0.5, 100.0);
        let forward = (free_camera.view_rotation() * Vec3::Z).normalize();
        free_camera.focus_point -= forward * (scroll_accum * dolly_speed);
    }

    // Keyboard movement input
    let mut move_input = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        move_input.z -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        move_input.z += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        move_input.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        move_input.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyE) {
        move_input.y += 1.0; // Up
    }
    if keyboard.pressed(KeyCode::KeyQ) {
        move_input.y -= 1.0; // Down
    }

    if move_input != Vec3::ZERO {
        let view_rot = free_camera.view_rotation();
        let forward = (view_rot * Vec3::Z).normalize();
        let right = (view_rot * Vec3::X).normalize();
        let up = Vec3::Y;

        // Adjust speed, shift = faster, ctrl = slower
        let mut speed = free_camera.move_speed;
        if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) {
            speed *= 3.5;
        }
        if keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]) {
            speed *= 0.25;
        }

        let world_delta = right * move_input.x + up * move_input.y + forward * move_input.z;
        free_camera.focus_point += world_delta.normalize() * speed * time.delta_secs();
    }

    // Smooth the transform towards the target pose
    let target_rot = free_camera.view_rotation();
    let target_pos = free_camera.focus_point;

    let lerp_speed = 12.0 * time.delta_secs();
    camera_transform.translation = camera_transform
        .translation
        .lerp(target_pos, lerp_speed.min(1.0));
    camera_transform.rotation = camera_transform
        .rotation
        .slerp(target_rot, lerp_speed.min(1.0));
}
