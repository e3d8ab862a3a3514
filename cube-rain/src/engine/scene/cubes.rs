use bevy::prelude::*;

use constants::scene_layout::{SURVEY_CUBE_EDGE, SURVEY_CUBE_POSITIONS};

/// Marker for the static demo cubes.
#[derive(Component)]
pub struct SurveyCube;

/// Shared mesh and material handles for the falling cubes. One mesh,
/// one material, many entities.
#[derive(Resource)]
pub struct CubeAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

/// Create the unit cube assets used by the rain entities.
pub fn setup_rain_cube_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.75, 0.78, 0.82),
        perceptual_roughness: 0.6,
        ..default()
    });
    commands.insert_resource(CubeAssets { mesh, material });
}

/// Spawn the three big survey cubes of the static demos and report the
/// cube bounding box, as the classic sample does.
pub fn spawn_survey_cubes(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let cuboid = Cuboid::new(SURVEY_CUBE_EDGE, SURVEY_CUBE_EDGE, SURVEY_CUBE_EDGE);
    println!("cube aabb: {:?}", cuboid.half_size * 2.0);

    let mesh = meshes.add(cuboid);
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.75, 0.78, 0.82),
        perceptual_roughness: 0.6,
        ..default()
    });

    for position in SURVEY_CUBE_POSITIONS {
        commands.spawn((
            SurveyCube,
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(Vec3::from_array(*position)),
        ));
    }
}
