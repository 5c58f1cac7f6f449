use glam::{Mat4, Vec3};
use houseview_common::Viewport;

pub const FOV_DEGREES: f32 = 75.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;
pub const START_POSITION: Vec3 = Vec3::new(15.0, 10.0, 15.0);

/// Perspective camera aimed at a look-at target.
///
/// The aspect ratio is taken from the viewport once, at construction; window
/// resizes do not update it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveCamera {
    /// Camera at (15, 10, 15) looking at the origin.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            position: START_POSITION,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_degrees: FOV_DEGREES,
            aspect: viewport.aspect(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Unit vector from the eye toward the target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Z)
    }

    /// Unit vector pointing to the right of the view.
    pub fn right(&self) -> Vec3 {
        self.forward()
            .cross(self.up)
            .try_normalize()
            .unwrap_or(Vec3::X)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
