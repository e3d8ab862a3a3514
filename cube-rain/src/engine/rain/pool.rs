//! Pure data model for the falling-cube pool.
//!
//! No ECS types in here beyond maths: the pool takes its time delta and
//! random generator as arguments, so every operation is testable without
//! a running app.

use bevy::math::Vec3;
use rand::Rng;

use constants::rain_settings::{
    FALL_OFF_THRESHOLD, FALL_SPEED, SPAWN_HEIGHT_BASE, SPAWN_HEIGHT_STEPS, SPAWN_LATERAL_OFFSET,
    SPAWN_LATERAL_STEPS, SPAWN_SCALE_BASE, SPAWN_SCALE_STEP, SPAWN_SCALE_STEPS,
};

/// One falling cube: position plus uniform scale. Overwritten in place
/// when it drops below the fall-off threshold; never individually
/// destroyed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeObject {
    pub position: Vec3,
    pub scale: f32,
}

impl CubeObject {
    /// Draw a fresh cube: x/z on the 15 lateral grid positions centred
    /// on the origin, y above the visible volume, scale in [0.7, 1.4)
    /// in 0.01 steps.
    pub fn sample(rng: &mut impl Rng) -> Self {
        let x = (rng.gen_range(0..SPAWN_LATERAL_STEPS) + SPAWN_LATERAL_OFFSET) as f32;
        let z = (rng.gen_range(0..SPAWN_LATERAL_STEPS) + SPAWN_LATERAL_OFFSET) as f32;
        let y = (SPAWN_HEIGHT_BASE + rng.gen_range(0..SPAWN_HEIGHT_STEPS)) as f32;
        let scale = SPAWN_SCALE_BASE + SPAWN_SCALE_STEP * rng.gen_range(0..SPAWN_SCALE_STEPS) as f32;
        Self {
            position: Vec3::new(x, y, z),
            scale,
        }
    }

    // Small cubes fall faster than large ones.
    fn fall_rate(&self, settings: &FallSettings) -> f32 {
        settings.fall_speed * (2.0 - self.scale)
    }
}

/// Fall speed and fall-off threshold for an update step.
#[derive(Clone, Copy, Debug)]
pub struct FallSettings {
    pub fall_speed: f32,
    pub fall_off: f32,
}

impl Default for FallSettings {
    fn default() -> Self {
        Self {
            fall_speed: FALL_SPEED,
            fall_off: FALL_OFF_THRESHOLD,
        }
    }
}

/// Ordered pool of falling cubes. Elements are addressed by index only;
/// the scene layer keeps a parallel sequence of entity handles.
#[derive(Debug, Default)]
pub struct CubePool {
    cubes: Vec<CubeObject>,
}

impl CubePool {
    pub fn with_count(count: usize, rng: &mut impl Rng) -> Self {
        Self {
            cubes: (0..count).map(|_| CubeObject::sample(rng)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    pub fn cubes(&self) -> &[CubeObject] {
        &self.cubes
    }

    /// One update step: every cube loses `fall_speed * (2.0 - scale) * dt`
    /// in height; cubes ending below the fall-off threshold are replaced
    /// by fresh samples. After this returns, every element sits at or
    /// above the threshold.
    pub fn advance(&mut self, dt: f32, settings: &FallSettings, rng: &mut impl Rng) {
        for cube in &mut self.cubes {
            cube.position.y -= cube.fall_rate(settings) * dt;
            if cube.position.y < settings.fall_off {
                *cube = CubeObject::sample(rng);
            }
        }
    }

    /// Grow by appending fresh samples or shrink by truncating the tail.
    /// The first `min(len, target)` elements are left untouched either
    /// way. Callers clamp `target` to the slider range beforehand.
    pub fn resize(&mut self, target: usize, rng: &mut impl Rng) {
        if target <= self.cubes.len() {
            self.cubes.truncate(target);
        } else {
            while self.cubes.len() < target {
                self.cubes.push(CubeObject::sample(rng));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    fn assert_in_spawn_volume(cube: &CubeObject) {
        assert!(
            (-7.0..=7.0).contains(&cube.position.x),
            "x out of range: {}",
            cube.position.x
        );
        assert!(
            (-7.0..=7.0).contains(&cube.position.z),
            "z out of range: {}",
            cube.position.z
        );
        assert!(
            (7.0..=36.0).contains(&cube.position.y),
            "y out of range: {}",
            cube.position.y
        );
        assert!(
            cube.scale >= 0.7 && cube.scale < 1.4,
            "scale out of range: {}",
            cube.scale
        );
    }

    #[test]
    fn samples_stay_in_documented_ranges() {
        let mut rng = rng();
        for _ in 0..1000 {
            assert_in_spawn_volume(&CubeObject::sample(&mut rng));
        }
    }

    #[test]
    fn zero_dt_changes_nothing() {
        let mut rng = rng();
        let mut pool = CubePool::with_count(64, &mut rng);
        let before = pool.cubes().to_vec();

        for _ in 0..5 {
            pool.advance(0.0, &FallSettings::default(), &mut rng);
        }

        assert_eq!(pool.cubes(), &before[..]);
    }

    #[test]
    fn no_cube_ends_below_threshold() {
        let mut rng = rng();
        let mut pool = CubePool::with_count(128, &mut rng);
        let settings = FallSettings::default();

        // Large steps force plenty of respawns along the way.
        for _ in 0..50 {
            pool.advance(2.5, &settings, &mut rng);
            for cube in pool.cubes() {
                assert!(cube.position.y >= settings.fall_off);
            }
        }
    }

    #[test]
    fn expired_cube_is_respawned() {
        // Worked scenario: y = -9.5 minus 3 * (2.0 - 1.0) * 1.0 lands at
        // -12.5, below the -10 threshold, so the cube must be replaced.
        let mut rng = rng();
        let mut pool = CubePool {
            cubes: vec![CubeObject {
                position: Vec3::new(0.0, -9.5, 0.0),
                scale: 1.0,
            }],
        };
        let settings = FallSettings {
            fall_speed: 3.0,
            fall_off: -10.0,
        };

        pool.advance(1.0, &settings, &mut rng);

        let cube = &pool.cubes()[0];
        assert!((7.0..=36.0).contains(&cube.position.y));
        assert_in_spawn_volume(cube);
    }

    #[test]
    fn surviving_cube_just_falls() {
        let mut rng = rng();
        let mut pool = CubePool {
            cubes: vec![CubeObject {
                position: Vec3::new(2.0, 20.0, -3.0),
                scale: 1.2,
            }],
        };
        let settings = FallSettings {
            fall_speed: 3.0,
            fall_off: -10.0,
        };

        pool.advance(0.5, &settings, &mut rng);

        let cube = &pool.cubes()[0];
        // 20.0 - 3 * (2.0 - 1.2) * 0.5 = 18.8
        assert!((cube.position.y - 18.8).abs() < 1e-5);
        assert_eq!(cube.position.x, 2.0);
        assert_eq!(cube.position.z, -3.0);
        assert_eq!(cube.scale, 1.2);
    }

    #[test]
    fn growing_keeps_prefix_and_samples_the_rest() {
        let mut rng = rng();
        let mut pool = CubePool::with_count(10, &mut rng);
        let before = pool.cubes().to_vec();

        pool.resize(25, &mut rng);

        assert_eq!(pool.len(), 25);
        assert_eq!(&pool.cubes()[..10], &before[..]);
        for cube in &pool.cubes()[10..] {
            assert_in_spawn_volume(cube);
        }
    }

    #[test]
    fn shrinking_truncates_the_tail() {
        let mut rng = rng();
        let mut pool = CubePool::with_count(25, &mut rng);
        let before = pool.cubes().to_vec();

        pool.resize(10, &mut rng);

        assert_eq!(pool.len(), 10);
        assert_eq!(pool.cubes(), &before[..10]);
    }

    #[test]
    fn resize_to_current_len_is_a_no_op() {
        let mut rng = rng();
        let mut pool = CubePool::with_count(16, &mut rng);
        let before = pool.cubes().to_vec();

        pool.resize(16, &mut rng);

        assert_eq!(pool.cubes(), &before[..]);
    }
}
