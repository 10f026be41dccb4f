use super::constants::{STAR_RADIUS_MIN, STAR_RADIUS_SPAN, STAR_SPIN_X, STAR_SPIN_Y};
use glam::{Mat4, Vec3};
use rand::Rng;

/// Rotation state of the background starfield. `boost` scales the per-frame
/// spin and is the only field party mode touches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarfieldMotion {
    pub boost: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
}

impl Default for StarfieldMotion {
    fn default() -> Self {
        Self {
            boost: 1.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
        }
    }
}

impl StarfieldMotion {
    pub fn advance(&mut self) {
        self.rotation_y += STAR_SPIN_Y * self.boost;
        self.rotation_x += STAR_SPIN_X * self.boost;
    }

    /// Euler XYZ, matching how the points were authored.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotation_x) * Mat4::from_rotation_y(self.rotation_y)
    }
}

/// Scatter `count` stars in a spherical shell around the origin. Directions are
/// uniform on the sphere; radius is uniform in `[min, min + span)`.
pub fn generate_star_positions<R: Rng>(count: usize, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let theta = rng.gen::<f32>() * std::f32::consts::TAU;
            let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
            let radius = STAR_RADIUS_MIN + rng.gen::<f32>() * STAR_RADIUS_SPAN;
            Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            )
        })
        .collect()
}
