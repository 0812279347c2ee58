use bytemuck::{Pod, Zeroable};
use crate::renderer::camera::CameraBlock;

/// Per-mesh render data read by the host renderer.
/// Must match the host protocol: 12 floats = 48 bytes stride.
///
/// The host creates one scene node per distinct `entity` the first time it
/// sees it (geometry, material and texture never change afterwards) and only
/// updates the transform on later frames.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct MeshInstance {
    /// Position in world space.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Rotation about the world Y axis, in radians.
    pub rotation_y: f32,
    /// Sphere radius in world units (geometry radius × entity scale).
    pub radius: f32,
    /// Texture id, or -1 for untextured.
    pub texture: f32,
    /// 0 = basic (unlit), 1 = phong (lit).
    pub material: f32,
    /// 0 = front faces, 1 = back faces.
    pub side: f32,
    /// Sphere width/height subdivisions.
    pub segments: f32,
    /// Owning entity id (stable node key for the host).
    pub entity: f32,
    pub _pad0: f32,
    pub _pad1: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Per-frame render output: mesh instances plus the active camera.
pub struct RenderBuffer {
    pub instances: Vec<MeshInstance>,
    pub camera: CameraBlock,
    max_instances: usize,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max_instances: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max_instances),
            camera: CameraBlock::default(),
            max_instances,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Append an instance. Returns false (and drops it) once capacity is reached.
    pub fn push(&mut self, instance: MeshInstance) -> bool {
        if self.instances.len() >= self.max_instances {
            return false;
        }
        self.instances.push(instance);
        true
    }

    /// Set the camera the host should render through this frame.
    pub fn set_camera(&mut self, camera: CameraBlock) {
        self.camera = camera;
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for host reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// Raw pointer to the camera block for host reads.
    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera as *const CameraBlock as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
