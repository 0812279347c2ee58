/// Scene lighting: one ambient term plus persistent point lights.
///
/// Lights stay until explicitly removed. Each frame the engine exposes the
/// active lights to the host, which mirrors them into its scene graph.

use glam::Vec3;

/// Split a packed `0xRRGGBB` color into linear [0, 1] components.
pub fn hex_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}

/// A 3D point light with position, color, intensity and cutoff distance.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, r, g, b, intensity, distance]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    /// Cutoff distance; 0 means unlimited range.
    pub distance: f32,
}

impl PointLight {
    /// Create a new point light at the given position.
    ///
    /// - `pos`: World-space position
    /// - `color`: RGB color in [0, 1]
    /// - `intensity`: Light strength multiplier
    pub fn new(pos: Vec3, color: [f32; 3], intensity: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color[0],
            g: color[1],
            b: color[2],
            intensity,
            distance: 0.0,
        }
    }

    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }

    pub fn pos(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Manages active lights and ambient color for the scene.
///
/// The ambient color defaults to black, so an unlit scene shows only
/// emissive (basic) materials.
pub struct LightState {
    lights: Vec<PointLight>,
    ambient: [f32; 3],
    max_lights: usize,
}

impl LightState {
    pub fn new() -> Self {
        Self::with_capacity(8)
    }

    /// Create a LightState with a specific light capacity.
    pub fn with_capacity(max_lights: usize) -> Self {
        Self {
            lights: Vec::with_capacity(max_lights),
            ambient: [0.0, 0.0, 0.0],
            max_lights,
        }
    }

    /// Add a point light to the scene. Returns false once capacity is reached.
    pub fn add(&mut self, light: PointLight) -> bool {
        if self.lights.len() >= self.max_lights {
            log::warn!("light capacity {} reached, dropping light", self.max_lights);
            return false;
        }
        self.lights.push(light);
        true
    }

    /// Remove all lights.
    pub fn clear(&mut self) {
        self.lights.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    /// Number of active lights.
    pub fn count(&self) -> usize {
        self.lights.len()
    }

    pub fn set_ambient(&mut self, color: [f32; 3]) {
        self.ambient = color;
    }

    pub fn ambient(&self) -> [f32; 3] {
        self.ambient
    }

    /// Pointer to the lights data for host reads.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::protocol::LIGHT_FLOATS;

    #[test]
    fn hex_rgb_splits_channels() {
        assert_eq!(hex_rgb(0xFFFFFF), [1.0, 1.0, 1.0]);
        assert_eq!(hex_rgb(0x000000), [0.0, 0.0, 0.0]);
        let grey = hex_rgb(0x444444);
        assert!((grey[0] - 68.0 / 255.0).abs() < 1e-6);
        assert_eq!(grey[0], grey[1]);
        assert_eq!(grey[1], grey[2]);
        assert_eq!(hex_rgb(0xFF8000), [1.0, 128.0 / 255.0, 0.0]);
    }

    #[test]
    fn point_light_new() {
        let light = PointLight::new(Vec3::new(1.0, 2.0, 3.0), [1.0, 0.5, 0.0], 2.0);
        assert_eq!(light.pos(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!([light.r, light.g, light.b], [1.0, 0.5, 0.0]);
        assert_eq!(light.intensity, 2.0);
        assert_eq!(light.distance, 0.0);
        assert_eq!(light.with_distance(300.0).distance, 300.0);
    }

    #[test]
    fn light_state_add_and_clear() {
        let mut state = LightState::new();
        assert_eq!(state.count(), 0);
        assert!(state.add(PointLight::new(Vec3::ZERO, [1.0; 3], 2.0)));
        assert_eq!(state.count(), 1);
        state.clear();
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn light_state_respects_capacity() {
        let mut state = LightState::with_capacity(1);
        assert!(state.add(PointLight::new(Vec3::ZERO, [1.0; 3], 1.0)));
        assert!(!state.add(PointLight::new(Vec3::X, [1.0; 3], 1.0)));
        assert_eq!(state.count(), 1);
    }

    #[test]
    fn ambient_defaults_to_black() {
        let mut state = LightState::new();
        assert_eq!(state.ambient(), [0.0, 0.0, 0.0]);
        state.set_ambient(hex_rgb(0x444444));
        assert!(state.ambient()[2] > 0.26);
    }

    #[test]
    fn point_light_is_8_floats() {
        assert_eq!(std::mem::size_of::<PointLight>(), LIGHT_FLOATS * 4);
    }
}
