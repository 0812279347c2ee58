//! Keyboard free-flight for a perspective camera.

use glam::{EulerRot, Quat};
use crate::input::keys::KeyState;
use crate::renderer::camera::PerspectiveCamera;

/// Per-frame keyboard flight. Every held key contributes a fixed increment
/// each update, so rates are per frame rather than per second.
#[derive(Debug, Clone)]
pub struct FlyControls {
    /// Translation per update, world units.
    pub speed: f32,
    /// Yaw/pitch change per update, radians.
    pub rotation_speed: f32,
    /// Euler XYZ angles (x = pitch, y = yaw) applied to the camera.
    pitch: f32,
    yaw: f32,
}

impl Default for FlyControls {
    fn default() -> Self {
        Self {
            speed: 0.5,
            rotation_speed: 0.02,
            pitch: 0.0,
            yaw: 0.0,
        }
    }
}

impl FlyControls {
    pub fn new(speed: f32, rotation_speed: f32) -> Self {
        Self {
            speed,
            rotation_speed,
            ..Default::default()
        }
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Apply one frame of held keys to `camera`.
    ///
    /// Arrows turn first; translation then uses the new look direction.
    /// `w`/`s` move along it, `a`/`d` strafe along `up × direction`,
    /// `q`/`e` rise and sink along world Y.
    pub fn update(&mut self, keys: &KeyState, camera: &mut PerspectiveCamera) {
        if keys.is_pressed("arrowleft") {
            self.yaw += self.rotation_speed;
        }
        if keys.is_pressed("arrowright") {
            self.yaw -= self.rotation_speed;
        }
        if keys.is_pressed("arrowup") {
            self.pitch += self.rotation_speed;
        }
        if keys.is_pressed("arrowdown") {
            self.pitch -= self.rotation_speed;
        }
        camera.orientation = Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0);

        let direction = camera.world_direction();
        if keys.is_pressed("w") {
            camera.position += direction * self.speed;
        }
        if keys.is_pressed("s") {
            camera.position -= direction * self.speed;
        }

        let strafe = camera.up.cross(direction).normalize_or_zero();
        if keys.is_pressed("a") {
            camera.position += strafe * self.speed;
        }
        if keys.is_pressed("d") {
            camera.position -= strafe * self.speed;
        }

        if keys.is_pressed("q") {
            camera.position.y += self.speed;
        }
        if keys.is_pressed("e") {
            camera.position.y -= self.speed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn ship() -> PerspectiveCamera {
        PerspectiveCamera::new(70.0, 1.0, 0.1, 1000.0).with_position(Vec3::new(0.0, 5.0, 30.0))
    }

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn no_keys_no_motion() {
        let mut fly = FlyControls::default();
        let mut cam = ship();
        fly.update(&KeyState::new(), &mut cam);
        assert_eq!(cam.position, Vec3::new(0.0, 5.0, 30.0));
        assert!(approx(cam.world_direction(), Vec3::NEG_Z));
    }

    #[test]
    fn forward_moves_speed_along_look_direction() {
        let mut fly = FlyControls::default();
        let mut cam = ship();
        let mut keys = KeyState::new();
        keys.press("w");
        let before = cam.position;
        fly.update(&keys, &mut cam);
        let moved = cam.position - before;
        assert!(approx(moved, cam.world_direction() * 0.5));
        assert!((moved.length() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn forward_after_turn_follows_new_heading() {
        let mut fly = FlyControls::default();
        let mut cam = ship();
        let mut keys = KeyState::new();
        keys.press("ArrowLeft");
        keys.press("w");
        let before = cam.position;
        fly.update(&keys, &mut cam);
        assert!((fly.yaw() - 0.02).abs() < 1e-7);
        let dir = cam.world_direction();
        // Turning left swings the heading toward -X.
        assert!(dir.x < 0.0);
        assert!(approx(cam.position - before, dir * 0.5));
    }

    #[test]
    fn strafe_a_moves_left() {
        let mut fly = FlyControls::default();
        let mut cam = ship();
        let mut keys = KeyState::new();
        keys.press("a");
        fly.update(&keys, &mut cam);
        assert!(approx(cam.position, Vec3::new(-0.5, 5.0, 30.0)));
        keys.release("a");
        keys.press("d");
        fly.update(&keys, &mut cam);
        assert!(approx(cam.position, Vec3::new(0.0, 5.0, 30.0)));
    }

    #[test]
    fn q_rises_along_world_y_regardless_of_pitch() {
        let mut fly = FlyControls::default();
        let mut cam = ship();
        let mut keys = KeyState::new();
        keys.press("arrowup");
        keys.press("q");
        fly.update(&keys, &mut cam);
        assert!((cam.position.y - 5.5).abs() < 1e-6);
        assert_eq!(cam.position.x, 0.0);
        assert_eq!(cam.position.z, 30.0);
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut fly = FlyControls::default();
        let mut cam = ship();
        let mut keys = KeyState::new();
        for k in ["w", "s", "arrowleft", "arrowright"] {
            keys.press(k);
        }
        fly.update(&keys, &mut cam);
        assert!(approx(cam.position, Vec3::new(0.0, 5.0, 30.0)));
        assert_eq!(fly.yaw(), 0.0);
    }
}
