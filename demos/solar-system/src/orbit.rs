/// Circular orbits: orbiting bodies, moons and orbit guide geometry.
///
/// All orbits lie in the XZ plane (y = 0), angle 0 on +X, increasing toward +Z.

use std::f32::consts::TAU;
use glam::Vec3;
use orrery_engine::{EntityId, Rng};

/// Handle to a body orbiting the scene origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// Handle to a moon. Moons live in their own list, separate from planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoonId(pub u32);

/// Point at `angle` on the circle of `radius` around the origin.
pub fn circle_point(radius: f32, angle: f32) -> Vec3 {
    Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

/// Closed polyline sampling the circle of `radius` at `segments` uniform
/// steps: `segments + 1` points, the last identical to the first.
pub fn orbit_path(radius: f32, segments: usize) -> Vec<Vec3> {
    if segments == 0 {
        return Vec::new();
    }
    (0..=segments)
        .map(|i| {
            let theta = (i % segments) as f32 / segments as f32 * TAU;
            circle_point(radius, theta)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitingBody {
    pub name: String,
    pub entity: EntityId,
    pub orbit_radius: f32,
    /// Radians per step.
    pub angular_speed: f32,
    pub angle: f32,
    /// Self-rotation about Y, radians.
    pub spin: f32,
    pub spin_rate: f32,
    pub position: Vec3,
}

impl OrbitingBody {
    fn advance(&mut self) {
        self.angle += self.angular_speed;
        self.position = circle_point(self.orbit_radius, self.angle);
        self.spin += self.spin_rate;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoonBody {
    pub entity: EntityId,
    pub parent: BodyId,
    /// Distance from the parent's center.
    pub distance: f32,
    pub angular_speed: f32,
    /// Angle around the parent, radians.
    pub angle: f32,
    pub position: Vec3,
}

#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    bodies: Vec<OrbitingBody>,
    moons: Vec<MoonBody>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a body at a random starting angle in [0, 2π).
    pub fn create_orbiting_body(
        &mut self,
        name: &str,
        orbit_radius: f32,
        angular_speed: f32,
        spin_rate: f32,
        entity: EntityId,
        rng: &mut Rng,
    ) -> BodyId {
        self.create_at_angle(name, orbit_radius, angular_speed, spin_rate, entity, rng.next_angle())
    }

    /// Add a body at a known starting angle.
    pub fn create_at_angle(
        &mut self,
        name: &str,
        orbit_radius: f32,
        angular_speed: f32,
        spin_rate: f32,
        entity: EntityId,
        angle: f32,
    ) -> BodyId {
        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(OrbitingBody {
            name: name.to_string(),
            entity,
            orbit_radius,
            angular_speed,
            angle,
            spin: 0.0,
            spin_rate,
            position: circle_point(orbit_radius, angle),
        });
        id
    }

    /// Add a moon circling `parent`, starting at local angle 0.
    /// Returns None if `parent` is not a registered body.
    pub fn create_moon(
        &mut self,
        parent: BodyId,
        distance: f32,
        angular_speed: f32,
        entity: EntityId,
    ) -> Option<MoonId> {
        let parent_pos = self.get(parent)?.position;
        let id = MoonId(self.moons.len() as u32);
        self.moons.push(MoonBody {
            entity,
            parent,
            distance,
            angular_speed,
            angle: 0.0,
            position: parent_pos + circle_point(distance, 0.0),
        });
        Some(id)
    }

    pub fn get(&self, id: BodyId) -> Option<&OrbitingBody> {
        self.bodies.get(id.0 as usize)
    }

    pub fn moon(&self, id: MoonId) -> Option<&MoonBody> {
        self.moons.get(id.0 as usize)
    }

    pub fn find(&self, name: &str) -> Option<BodyId> {
        self.bodies
            .iter()
            .position(|b| b.name == name)
            .map(|i| BodyId(i as u32))
    }

    pub fn bodies(&self) -> &[OrbitingBody] {
        &self.bodies
    }

    pub fn moons(&self) -> &[MoonBody] {
        &self.moons
    }

    /// Advance every body one step, then place each moon around its parent's
    /// new position.
    pub fn animation_step(&mut self) {
        for body in &mut self.bodies {
            body.advance();
        }
        for moon in &mut self.moons {
            moon.angle += moon.angular_speed;
            if let Some(parent) = self.bodies.get(moon.parent.0 as usize) {
                moon.position = parent.position + circle_point(moon.distance, moon.angle);
            }
        }
    }
}
