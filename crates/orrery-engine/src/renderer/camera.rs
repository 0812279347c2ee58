use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4, Quat, Vec3};

/// Perspective camera described in world space.
///
/// The camera looks down its local -Z axis with local +Y as up, so the look
/// direction is `orientation * -Z`. Projection uses the GL depth convention
/// (clip z in [-1, 1]) that WebGL scene graphs expect.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Position in world space.
    pub position: Vec3,
    /// World-space orientation.
    pub orientation: Quat,
    /// World up used by [`look_at`](Self::look_at) and strafing.
    pub up: Vec3,
}

/// Camera block as written to the host each frame.
/// 40 floats = 160 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraBlock {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Game-defined index of the camera that produced this block.
    pub mode: f32,
}

impl CameraBlock {
    pub const FLOATS: usize = 40;

    pub fn new(camera: &PerspectiveCamera, mode: f32) -> Self {
        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            projection: camera.projection_matrix().to_cols_array_2d(),
            position: camera.position.to_array(),
            fov: camera.fov,
            aspect: camera.aspect,
            near: camera.near,
            far: camera.far,
            mode,
        }
    }
}

impl Default for CameraBlock {
    fn default() -> Self {
        Self::new(&PerspectiveCamera::default(), 0.0)
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(50.0, 1.0, 0.1, 2000.0)
    }
}

impl PerspectiveCamera {
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            up: Vec3::Y,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Update the aspect ratio (e.g. on window resize).
    /// Degenerate viewports (zero height) are ignored.
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Rotate the camera so that -Z points at `target`, keeping `up` as close
    /// to vertical as possible.
    pub fn look_at(&mut self, target: Vec3) {
        let mut z = self.position - target;
        if z.length_squared() < 1e-12 {
            // Eye and target coincide: look down -Z.
            z = Vec3::Z;
        }
        let z = z.normalize();
        let mut x = self.up.cross(z);
        if x.length_squared() < 1e-12 {
            // Looking straight along `up`: nudge so the basis is defined.
            let nudged = if self.up.z.abs() < 0.9 {
                (z + Vec3::Z * 1e-4).normalize()
            } else {
                (z + Vec3::X * 1e-4).normalize()
            };
            x = self.up.cross(nudged);
        }
        let x = x.normalize();
        let y = z.cross(x);
        self.orientation = Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize();
    }

    /// Unit look direction in world space.
    pub fn world_direction(&self) -> Vec3 {
        (self.orientation * Vec3::NEG_Z).normalize()
    }

    /// World-to-camera transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position).inverse()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov.to_radians(), self.aspect, self.near, self.far)
    }
}
