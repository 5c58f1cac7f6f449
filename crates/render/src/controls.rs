//! Orbit controls: rotate, pan and dolly a camera around a fixed target.
//!
//! Input only accumulates pending motion; `update` applies it once per frame.
//! With damping on, each update applies `damping_factor` of the pending
//! rotation and pan and keeps the remainder, so motion decays geometrically
//! and sums to the full requested amount.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};
use houseview_common::Viewport;
use houseview_input::ControlAction;

use crate::camera::PerspectiveCamera;

const EPS: f32 = 1e-6;

/// Spherical coordinates of the camera offset from the target.
/// `phi` is the polar angle from +Y, `theta` the azimuth around Y from +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Spherical {
    radius: f32,
    phi: f32,
    theta: f32,
}

impl Spherical {
    fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self {
                radius,
                phi: 0.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            theta: offset.x.atan2(offset.z),
        }
    }

    fn to_offset(self) -> Vec3 {
        let ring = self.phi.sin() * self.radius;
        Vec3::new(
            ring * self.theta.sin(),
            self.phi.cos() * self.radius,
            ring * self.theta.cos(),
        )
    }
}

/// Damped orbit/pan/zoom controller for a `PerspectiveCamera`.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// Point the camera orbits around and looks at.
    pub target: Vec3,
    pub enable_damping: bool,
    /// Fraction of pending motion applied per update when damping is on.
    pub damping_factor: f32,
    /// Pan vertically in screen space (true) or along the ground plane (false).
    pub screen_space_panning: bool,
    pub rotate_speed: f32,
    pub pan_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    delta_theta: f32,
    delta_phi: f32,
    pan_offset: Vec3,
    scale: f32,
}

impl OrbitControls {
    /// Controls around the camera's current target, damping on (0.1),
    /// screen-space panning off.
    pub fn new(camera: &PerspectiveCamera) -> Self {
        Self {
            target: camera.target,
            enable_damping: true,
            damping_factor: 0.1,
            screen_space_panning: false,
            rotate_speed: 1.0,
            pan_speed: 1.0,
            zoom_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            delta_theta: 0.0,
            delta_phi: 0.0,
            pan_offset: Vec3::ZERO,
            scale: 1.0,
        }
    }

    /// Queue motion for the next `update`.
    pub fn apply(&mut self, action: ControlAction, camera: &PerspectiveCamera, viewport: Viewport) {
        let height = viewport.height.max(1) as f32;
        match action {
            ControlAction::Rotate(delta) => {
                self.rotate_left(TAU * delta.x / height * self.rotate_speed);
                self.rotate_up(TAU * delta.y / height * self.rotate_speed);
            }
            ControlAction::Pan(delta) => self.pan(delta, camera, height),
            ControlAction::Zoom(steps) => {
                self.scale *= self.zoom_scale().powf(steps);
            }
        }
    }

    /// Whether any rotation or pan is still pending.
    pub fn is_moving(&self) -> bool {
        self.delta_theta.abs() > EPS || self.delta_phi.abs() > EPS || self.pan_offset.length() > EPS
    }

    /// Advance one frame: move the camera by the pending motion and decay it.
    /// Returns whether the camera moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        let last_position = camera.position;
        let last_target = self.target;

        let mut spherical = Spherical::from_offset(camera.position - self.target);
        let step = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };
        spherical.theta += self.delta_theta * step;
        spherical.phi += self.delta_phi * step;
        spherical.phi = spherical
            .phi
            .clamp(self.min_polar_angle, self.max_polar_angle)
            .clamp(EPS, PI - EPS);
        spherical.radius = (spherical.radius * self.scale).clamp(self.min_distance, self.max_distance);

        self.target += self.pan_offset * step;
        camera.position = self.target + spherical.to_offset();
        camera.look_at(self.target);

        if self.enable_damping {
            let keep = 1.0 - self.damping_factor;
            self.delta_theta *= keep;
            self.delta_phi *= keep;
            self.pan_offset *= keep;
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
            self.pan_offset = Vec3::ZERO;
        }
        self.scale = 1.0;

        camera.position.distance_squared(last_position) > EPS
            || self.target.distance_squared(last_target) > EPS
    }

    fn zoom_scale(&self) -> f32 {
        0.95_f32.powf(self.zoom_speed)
    }

    fn rotate_left(&mut self, angle: f32) {
        self.delta_theta -= angle;
    }

    fn rotate_up(&mut self, angle: f32) {
        self.delta_phi -= angle;
    }

    /// Pan so that a drag of the full viewport height moves the target by the
    /// visible height at the target's distance.
    fn pan(&mut self, delta: Vec2, camera: &PerspectiveCamera, height: f32) {
        let distance = (camera.position - self.target).length()
            * (camera.fov_degrees.to_radians() / 2.0).tan();
        let right = camera.right();

        let left_amount = 2.0 * delta.x * distance / height * self.pan_speed;
        self.pan_offset += right * -left_amount;

        let up_amount = 2.0 * delta.y * distance / height * self.pan_speed;
        let up_axis = if self.screen_space_panning {
            right.cross(camera.forward())
        } else {
            camera.up.cross(right)
        };
        self.pan_offset += up_axis * up_amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1280,
        height: 720,
    };

    fn setup() -> (PerspectiveCamera, OrbitControls) {
        let camera = PerspectiveCamera::new(VIEWPORT);
        let controls = OrbitControls::new(&camera);
        (camera, controls)
    }

    fn azimuth(camera: &PerspectiveCamera) -> f32 {
        let offset = camera.position - camera.target;
        offset.x.atan2(offset.z)
    }

    #[test]
    fn defaults() {
        let (_, controls) = setup();
        assert!(controls.enable_damping);
        assert_eq!(controls.damping_factor, 0.1);
        assert!(!controls.screen_space_panning);
        assert_eq!(controls.target, Vec3::ZERO);
    }

    #[test]
    fn idle_update_keeps_camera_still() {
        let (mut camera, mut controls) = setup();
        for _ in 0..100 {
            assert!(!controls.update(&mut camera));
        }
        assert!(camera.position.distance(Vec3::new(15.0, 10.0, 15.0)) < 1e-3);
        assert_eq!(camera.target, Vec3::ZERO);
    }

    #[test]
    fn damped_rotation_decays_and_converges() {
        let (mut camera, mut controls) = setup();
        let start = azimuth(&camera);
        // 36px of a 720px viewport is a tenth of a half turn.
        controls.apply(ControlAction::Rotate(Vec2::new(36.0, 0.0)), &camera, VIEWPORT);
        let requested = -PI / 10.0;

        assert!(controls.update(&mut camera));
        let first = azimuth(&camera) - start;
        assert!((first - requested * 0.1).abs() < 1e-4);

        controls.update(&mut camera);
        let second = azimuth(&camera) - start - first;
        assert!((second - requested * 0.1 * 0.9).abs() < 1e-4);

        for _ in 0..300 {
            controls.update(&mut camera);
        }
        assert!(!controls.is_moving());
        assert!((azimuth(&camera) - start - requested).abs() < 1e-3);
        let radius = camera.position.length();
        assert!((radius - Vec3::new(15.0, 10.0, 15.0).length()).abs() < 1e-2);
    }

    #[test]
    fn undamped_rotation_applies_at_once() {
        let (mut camera, mut controls) = setup();
        controls.enable_damping = false;
        let start = azimuth(&camera);
        controls.apply(ControlAction::Rotate(Vec2::new(36.0, 0.0)), &camera, VIEWPORT);
        controls.update(&mut camera);
        assert!((azimuth(&camera) - start + PI / 10.0).abs() < 1e-4);
        assert!(!controls.is_moving());
        assert!(!controls.update(&mut camera));
    }

    #[test]
    fn polar_angle_is_clamped() {
        let (mut camera, mut controls) = setup();
        controls.enable_damping = false;
        // Drag far enough downward to swing past the top pole.
        controls.apply(ControlAction::Rotate(Vec2::new(0.0, 2000.0)), &camera, VIEWPORT);
        controls.update(&mut camera);
        let radius = camera.position.length();
        assert!(camera.position.y > 0.0);
        assert!((camera.position.y - radius).abs() < 1e-3);
    }

    #[test]
    fn zoom_in_and_out() {
        let (mut camera, mut controls) = setup();
        let start = camera.position.length();

        controls.apply(ControlAction::Zoom(1.0), &camera, VIEWPORT);
        controls.update(&mut camera);
        let closer = camera.position.length();
        assert!((closer - start * 0.95).abs() < 1e-3);

        controls.apply(ControlAction::Zoom(-1.0), &camera, VIEWPORT);
        controls.update(&mut camera);
        assert!((camera.position.length() - start).abs() < 1e-3);
    }

    #[test]
    fn zoom_is_clamped_to_distance_limits() {
        let (mut camera, mut controls) = setup();
        controls.max_distance = 30.0;
        controls.apply(ControlAction::Zoom(-50.0), &camera, VIEWPORT);
        controls.update(&mut camera);
        assert!((camera.position.length() - 30.0).abs() < 1e-3);

        controls.min_distance = 5.0;
        controls.apply(ControlAction::Zoom(200.0), &camera, VIEWPORT);
        controls.update(&mut camera);
        assert!((camera.position.length() - 5.0).abs() < 1e-3);
    }

    #[test]
    fn ground_plane_panning_keeps_target_level() {
        let (mut camera, mut controls) = setup();
        controls.apply(ControlAction::Pan(Vec2::new(40.0, 60.0)), &camera, VIEWPORT);
        for _ in 0..200 {
            controls.update(&mut camera);
        }
        assert!(controls.target.y.abs() < 1e-6);
        assert!(controls.target.length() > 1.0);
        assert_eq!(camera.target, controls.target);
        // Orbit offset is carried along with the target.
        let offset = camera.position - controls.target;
        assert!((offset - Vec3::new(15.0, 10.0, 15.0)).length() < 1e-2);
    }

    #[test]
    fn screen_space_panning_moves_vertically() {
        let (mut camera, mut controls) = setup();
        controls.screen_space_panning = true;
        controls.enable_damping = false;
        controls.apply(ControlAction::Pan(Vec2::new(0.0, 60.0)), &camera, VIEWPORT);
        controls.update(&mut camera);
        assert!(controls.target.y.abs() > 0.1);
    }

    #[test]
    fn vertical_drag_pans_toward_view_direction() {
        let (mut camera, mut controls) = setup();
        controls.enable_damping = false;
        controls.apply(ControlAction::Pan(Vec2::new(0.0, 60.0)), &camera, VIEWPORT);
        controls.update(&mut camera);
        let flat_forward = Vec3::new(-1.0, 0.0, -1.0).normalize();
        assert!(controls.target.normalize().dot(flat_forward) > 0.99);
    }
}
