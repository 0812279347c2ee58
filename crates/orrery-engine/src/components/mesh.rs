use crate::assets::registry::TextureId;

/// Geometry primitive the host builds once per mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// UV sphere with `segments` width and height subdivisions.
    Sphere { radius: f32, segments: u32 },
}

impl Geometry {
    pub fn radius(&self) -> f32 {
        match *self {
            Geometry::Sphere { radius, .. } => radius,
        }
    }

    pub fn segments(&self) -> u32 {
        match *self {
            Geometry::Sphere { segments, .. } => segments,
        }
    }
}

/// Shading model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaterialKind {
    /// Unlit: the texture is shown as-is (sun, starfield).
    Basic,
    /// Lit by ambient + point lights.
    #[default]
    Phong,
}

/// Which faces are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Front,
    /// Inside faces only, for enclosing backdrops.
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub kind: MaterialKind,
    pub texture: Option<TextureId>,
    pub side: Side,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            kind: MaterialKind::Phong,
            texture: None,
            side: Side::Front,
        }
    }
}

/// Component for host-rendered meshes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub geometry: Geometry,
    pub material: Material,
}

impl Default for MeshComponent {
    fn default() -> Self {
        Self::sphere(1.0, 32)
    }
}

impl MeshComponent {
    pub fn sphere(radius: f32, segments: u32) -> Self {
        Self {
            geometry: Geometry::Sphere { radius, segments },
            material: Material::default(),
        }
    }

    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.material.texture = Some(texture);
        self
    }

    pub fn with_kind(mut self, kind: MaterialKind) -> Self {
        self.material.kind = kind;
        self
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.material.side = side;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_defaults_to_lit_front_faces() {
        let mesh = MeshComponent::sphere(2.0, 32);
        assert_eq!(mesh.geometry.radius(), 2.0);
        assert_eq!(mesh.geometry.segments(), 32);
        assert_eq!(mesh.material.kind, MaterialKind::Phong);
        assert_eq!(mesh.material.side, Side::Front);
        assert!(mesh.material.texture.is_none());
    }

    #[test]
    fn builders_set_material() {
        let mesh = MeshComponent::sphere(500.0, 64)
            .with_kind(MaterialKind::Basic)
            .with_side(Side::Back)
            .with_texture(TextureId(3));
        assert_eq!(mesh.material.kind, MaterialKind::Basic);
        assert_eq!(mesh.material.side, Side::Back);
        assert_eq!(mesh.material.texture, Some(TextureId(3)));
    }
}
