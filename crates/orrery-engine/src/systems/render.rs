use crate::components::entity::Entity;
use crate::components::mesh::{MaterialKind, Side};
use crate::renderer::instance::{MeshInstance, RenderBuffer};

/// Build the render buffer's mesh instances from a set of entities.
/// Entities keep their iteration order; inactive or mesh-less ones are skipped.
/// Entities past the buffer capacity are dropped with a warning.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    let mut dropped = 0usize;
    for entity in entities {
        if !entity.active {
            continue;
        }

        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };

        let instance = MeshInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            rotation_y: entity.rotation,
            radius: mesh.geometry.radius() * entity.scale,
            texture: mesh.material.texture.map_or(-1.0, |t| t.0 as f32),
            material: match mesh.material.kind {
                MaterialKind::Basic => 0.0,
                MaterialKind::Phong => 1.0,
            },
            side: match mesh.material.side {
                Side::Front => 0.0,
                Side::Back => 1.0,
            },
            segments: mesh.geometry.segments() as f32,
            entity: entity.id.0 as f32,
            _pad0: 0.0,
            _pad1: 0.0,
        };

        if !buffer.push(instance) {
            dropped += 1;
        }
    }

    if dropped > 0 {
        log::warn!("render buffer full, dropped {} mesh instances", dropped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::assets::registry::TextureId;
    use crate::components::mesh::MeshComponent;
    use glam::Vec3;

    #[test]
    fn build_buffer_maps_mesh_fields() {
        let entities = vec![
            Entity::new(EntityId(1))
                .with_pos(Vec3::new(10.0, 0.0, -5.0))
                .with_rotation(0.25)
                .with_mesh(
                    MeshComponent::sphere(2.0, 32)
                        .with_texture(TextureId(3))
                        .with_kind(MaterialKind::Phong),
                ),
            Entity::new(EntityId(2))
                .with_scale(2.0)
                .with_mesh(
                    MeshComponent::sphere(500.0, 64)
                        .with_kind(MaterialKind::Basic)
                        .with_side(Side::Back),
                ),
        ];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 2);
        let planet = buffer.instances[0];
        assert_eq!([planet.x, planet.y, planet.z], [10.0, 0.0, -5.0]);
        assert_eq!(planet.rotation_y, 0.25);
        assert_eq!(planet.radius, 2.0);
        assert_eq!(planet.texture, 3.0);
        assert_eq!(planet.material, 1.0);
        assert_eq!(planet.side, 0.0);
        assert_eq!(planet.segments, 32.0);
        assert_eq!(planet.entity, 1.0);

        let backdrop = buffer.instances[1];
        assert_eq!(backdrop.radius, 1000.0);
        assert_eq!(backdrop.texture, -1.0);
        assert_eq!(backdrop.material, 0.0);
        assert_eq!(backdrop.side, 1.0);
    }

    #[test]
    fn inactive_and_meshless_entities_are_skipped() {
        let mut hidden = Entity::new(EntityId(1)).with_mesh(MeshComponent::default());
        hidden.active = false;
        let entities = vec![hidden, Entity::new(EntityId(2))];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
    }

    #[test]
    fn overflow_is_dropped() {
        let entities: Vec<Entity> = (0..5)
            .map(|i| Entity::new(EntityId(i)).with_mesh(MeshComponent::default()))
            .collect();
        let mut buffer = RenderBuffer::with_capacity(3);
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 3);
    }
}
