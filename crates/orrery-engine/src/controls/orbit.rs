//! Trackball-style orbit controller.
//!
//! Drag rotates the camera around a fixed target on a sphere, the wheel dollies
//! in and out. With damping on, every drag only adds to a pending spherical
//! delta; `update()` applies a `damping_factor` share of it each frame and
//! decays the rest, so the camera eases to a stop after the pointer lets go.

use std::f32::consts::{PI, TAU};
use glam::{Vec2, Vec3};
use crate::renderer::camera::PerspectiveCamera;

/// Keeps the polar angle off the poles, where the azimuth is undefined.
const POLE_EPS: f32 = 1e-3;
/// Pending motion below this is treated as settled.
const SETTLE_EPS: f32 = 1e-6;

/// Spherical coordinates: `theta` azimuth around +Y (0 along +Z),
/// `phi` polar angle from +Y.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Spherical {
    radius: f32,
    theta: f32,
    phi: f32,
}

impl Spherical {
    fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_phi_r = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_r * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_r * self.theta.cos(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// Disabled controls ignore pointer input and do not move the camera.
    enabled: bool,
    /// The point the camera orbits and looks at.
    pub target: Vec3,
    pub enable_damping: bool,
    /// Share of the pending motion applied per frame (0, 1].
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    delta: Spherical,
    scale: f32,
    drag: Option<Vec2>,
    viewport_height: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            enabled: true,
            target: Vec3::ZERO,
            enable_damping: false,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            delta: Spherical::default(),
            scale: 1.0,
            drag: None,
            viewport_height: 600.0,
        }
    }
}

impl OrbitControls {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            ..Default::default()
        }
    }

    pub fn with_damping(mut self, factor: f32) -> Self {
        self.enable_damping = true;
        self.damping_factor = factor.clamp(1e-3, 1.0);
        self
    }

    pub fn with_distance_limits(mut self, min: f32, max: f32) -> Self {
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable input consumption. Disabling also drops any drag in
    /// progress and any motion still easing out.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.drag = None;
            self.delta = Spherical::default();
            self.scale = 1.0;
        }
    }

    /// Drag sensitivity is relative to the viewport height.
    pub fn set_viewport_height(&mut self, height: f32) {
        if height > 0.0 {
            self.viewport_height = height;
        }
    }

    /// Whether motion is still pending (dragging or easing out).
    pub fn is_moving(&self) -> bool {
        self.drag.is_some() || !self.settled()
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if self.enabled {
            self.drag = Some(Vec2::new(x, y));
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.enabled {
            return;
        }
        let Some(last) = self.drag else {
            return;
        };
        let now = Vec2::new(x, y);
        let d = now - last;
        self.rotate_left(TAU * d.x / self.viewport_height * self.rotate_speed);
        self.rotate_up(TAU * d.y / self.viewport_height * self.rotate_speed);
        self.drag = Some(now);
    }

    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// Wheel input: negative `delta` dollies in, positive dollies out.
    pub fn wheel(&mut self, delta: f32) {
        if !self.enabled || delta == 0.0 {
            return;
        }
        let zoom_scale = 0.95_f32.powf(self.zoom_speed);
        if delta < 0.0 {
            self.scale *= zoom_scale;
        } else {
            self.scale /= zoom_scale;
        }
    }

    fn rotate_left(&mut self, angle: f32) {
        self.delta.theta -= angle;
    }

    fn rotate_up(&mut self, angle: f32) {
        self.delta.phi -= angle;
    }

    fn settled(&self) -> bool {
        self.delta.theta.abs() < SETTLE_EPS
            && self.delta.phi.abs() < SETTLE_EPS
            && (self.scale - 1.0).abs() < SETTLE_EPS
    }

    /// Advance one frame: apply pending motion to `camera` and keep it aimed
    /// at the target. Returns true if the camera moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        if !self.enabled {
            return false;
        }
        if self.settled() {
            self.delta = Spherical::default();
            self.scale = 1.0;
            return false;
        }

        let mut spherical = Spherical::from_offset(camera.position - self.target);
        let share = if self.enable_damping { self.damping_factor } else { 1.0 };
        spherical.theta += self.delta.theta * share;
        spherical.phi += self.delta.phi * share;

        let min_phi = self.min_polar_angle.max(POLE_EPS);
        let max_phi = self.max_polar_angle.min(PI - POLE_EPS);
        spherical.phi = spherical.phi.clamp(min_phi, max_phi);
        spherical.radius = (spherical.radius * self.scale).clamp(self.min_distance, self.max_distance);

        let before = camera.position;
        camera.position = self.target + spherical.to_offset();
        camera.look_at(self.target);

        if self.enable_damping {
            self.delta.theta *= 1.0 - self.damping_factor;
            self.delta.phi *= 1.0 - self.damping_factor;
        } else {
            self.delta = Spherical::default();
        }
        self.scale = 1.0;

        (camera.position - before).length_squared() > 1e-12
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> PerspectiveCamera {
        let mut cam = PerspectiveCamera::new(40.0, 1.0, 0.1, 1000.0)
            .with_position(Vec3::new(0.0, 50.0, 100.0));
        cam.look_at(Vec3::ZERO);
        cam
    }

    #[test]
    fn spherical_round_trip() {
        let v = Vec3::new(3.0, -2.0, 7.0);
        let back = Spherical::from_offset(v).to_offset();
        assert!((back - v).length() < 1e-4);
    }

    #[test]
    fn idle_update_leaves_camera_untouched() {
        let mut controls = OrbitControls::default().with_damping(0.05);
        let mut cam = camera();
        let before = cam.clone();
        for _ in 0..100 {
            assert!(!controls.update(&mut cam));
        }
        assert_eq!(cam, before);
    }

    #[test]
    fn drag_rotates_around_target_keeping_distance() {
        let mut controls = OrbitControls::default();
        controls.set_viewport_height(600.0);
        let mut cam = camera();
        let dist = cam.position.length();

        controls.pointer_down(100.0, 100.0);
        controls.pointer_move(160.0, 100.0);
        controls.pointer_up();
        assert!(controls.update(&mut cam));

        assert!((cam.position.length() - dist).abs() < 1e-3);
        assert!(cam.position.x.abs() > 1.0, "azimuth should change: {}", cam.position);
        let dir = cam.world_direction();
        assert!((dir - (-cam.position).normalize()).length() < 1e-4);
    }

    #[test]
    fn damping_eases_out_over_frames() {
        let mut controls = OrbitControls::default().with_damping(0.05);
        let mut cam = camera();
        controls.pointer_down(0.0, 0.0);
        controls.pointer_move(50.0, 0.0);
        controls.pointer_up();

        let start = cam.position;
        controls.update(&mut cam);
        let first_step = (cam.position - start).length();
        let mid = cam.position;
        controls.update(&mut cam);
        let second_step = (cam.position - mid).length();

        assert!(first_step > 0.0);
        assert!(second_step < first_step, "{second_step} !< {first_step}");
        assert!(controls.is_moving());
        for _ in 0..2000 {
            controls.update(&mut cam);
        }
        assert!(!controls.is_moving());
    }

    #[test]
    fn polar_angle_stays_off_the_pole() {
        let mut controls = OrbitControls::default();
        let mut cam = camera();
        controls.pointer_down(0.0, 0.0);
        controls.pointer_move(0.0, 5000.0);
        controls.update(&mut cam);
        assert!(cam.position.y > 0.0);
        assert!(cam.position.x.is_finite() && cam.position.z.is_finite());
        let dir = cam.world_direction();
        assert!(dir.is_finite());
        assert!(dir.y < -0.99, "dir = {dir}");
    }

    #[test]
    fn wheel_dollies_within_limits() {
        let mut controls = OrbitControls::default().with_distance_limits(20.0, 150.0);
        let mut cam = camera();
        let start = cam.position.length();

        controls.wheel(-1.0);
        controls.update(&mut cam);
        assert!(cam.position.length() < start);

        for _ in 0..200 {
            controls.wheel(1.0);
            controls.update(&mut cam);
        }
        assert!((cam.position.length() - 150.0).abs() < 1e-3);
    }

    #[test]
    fn disabled_controls_ignore_input() {
        let mut controls = OrbitControls::default();
        let mut cam = camera();
        let before = cam.clone();
        controls.set_enabled(false);
        controls.pointer_down(0.0, 0.0);
        controls.pointer_move(300.0, 300.0);
        controls.wheel(-1.0);
        assert!(!controls.update(&mut cam));
        assert_eq!(cam, before);
    }

    #[test]
    fn disabling_drops_pending_motion() {
        let mut controls = OrbitControls::default().with_damping(0.05);
        let mut cam = camera();
        controls.pointer_down(0.0, 0.0);
        controls.pointer_move(80.0, 10.0);
        controls.set_enabled(false);
        controls.set_enabled(true);
        assert!(!controls.is_moving());
        let before = cam.clone();
        controls.update(&mut cam);
        assert_eq!(cam, before);
    }
}
