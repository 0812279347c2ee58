/// Simulation state owned by the game: bodies, sun, camera rig, frame count.

use orrery_engine::{EntityId, KeyState, Scene};

use crate::orbit::BodyRegistry;
use crate::rig::CameraRig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sun {
    pub entity: EntityId,
    pub spin: f32,
    pub spin_rate: f32,
}

pub struct SimulationState {
    pub bodies: BodyRegistry,
    pub sun: Sun,
    pub rig: CameraRig,
    /// Steps run so far.
    pub frame: u64,
}

impl SimulationState {
    pub fn new(bodies: BodyRegistry, sun: Sun, rig: CameraRig) -> Self {
        Self { bodies, sun, rig, frame: 0 }
    }

    /// Orbits, moons and sun spin for one frame.
    pub fn animation_step(&mut self) {
        self.bodies.animation_step();
        self.sun.spin += self.sun.spin_rate;
    }

    /// One full frame: animation, then the active camera's controller.
    pub fn step(&mut self, keys: &KeyState) {
        self.animation_step();
        self.rig.update(keys);
        self.frame += 1;
    }

    /// Copy body transforms onto their scene entities.
    pub fn sync_scene(&self, scene: &mut Scene) {
        if let Some(e) = scene.get_mut(self.sun.entity) {
            e.rotation = self.sun.spin;
        }
        for body in self.bodies.bodies() {
            if let Some(e) = scene.get_mut(body.entity) {
                e.pos = body.position;
                e.rotation = body.spin;
            }
        }
        for moon in self.bodies.moons() {
            if let Some(e) = scene.get_mut(moon.entity) {
                e.pos = moon.position;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::Entity;

    fn state() -> SimulationState {
        let mut bodies = BodyRegistry::new();
        let earth = bodies.create_at_angle("Earth", 25.0, 0.01, 0.01, EntityId(2), 0.5);
        bodies.create_moon(earth, 4.0, 0.03, EntityId(3));
        let sun = Sun { entity: EntityId(1), spin: 0.0, spin_rate: 0.005 };
        SimulationState::new(bodies, sun, CameraRig::new(800.0, 600.0))
    }

    #[test]
    fn step_advances_everything_once() {
        let mut sim = state();
        let keys = KeyState::new();
        for _ in 0..4 {
            sim.step(&keys);
        }
        assert_eq!(sim.frame, 4);
        assert!((sim.sun.spin - 0.02).abs() < 1e-7);
        assert!((sim.bodies.bodies()[0].angle - 0.54).abs() < 1e-6);
        assert!((sim.bodies.moons()[0].angle - 0.12).abs() < 1e-6);
    }

    #[test]
    fn sync_copies_transforms() {
        let mut sim = state();
        let mut scene = Scene::new();
        for id in 1..=3 {
            scene.spawn(Entity::new(EntityId(id)));
        }
        sim.step(&KeyState::new());
        sim.sync_scene(&mut scene);

        let earth = &sim.bodies.bodies()[0];
        let moon = &sim.bodies.moons()[0];
        assert_eq!(scene.get(EntityId(1)).unwrap().rotation, sim.sun.spin);
        assert_eq!(scene.get(EntityId(2)).unwrap().pos, earth.position);
        assert_eq!(scene.get(EntityId(2)).unwrap().rotation, earth.spin);
        assert_eq!(scene.get(EntityId(3)).unwrap().pos, moon.position);
    }
}
