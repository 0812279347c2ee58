/// Solar system: a textured sun, eight planets on circular orbits with white
/// orbit guides, one moon around Earth, a starfield backdrop, and a camera
/// that toggles between a trackball orbital view and a keyboard-flown ship.

use glam::Vec3;
use orrery_engine::*;
use orrery_engine::input::queue::{InputEvent, InputQueue};

use crate::bodies::{self, PLANETS};
use crate::orbit::{orbit_path, BodyRegistry};
use crate::rig::{CameraRig, ViewMode};
use crate::sim::{SimulationState, Sun};

// ── Game event kinds to the host ─────────────────────────────────────

/// `a` = new view mode index.
pub const EVENT_VIEW_MODE: f32 = 1.0;

pub const PANEL_TITLE: &str = "Options";
pub const INFO_LABEL: &str = "Sistema Planetario";
pub const VIEW_LABEL: &str = "Vista";

pub struct SolarSystem {
    sim: Option<SimulationState>,
    view_control: Option<ControlId>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            sim: None,
            view_control: None,
        }
    }

    pub fn sim(&self) -> Option<&SimulationState> {
        self.sim.as_ref()
    }

    fn register_textures(ctx: &mut EngineContext) {
        ctx.textures.register("sun", bodies::SUN_TEXTURE);
        for planet in &PLANETS {
            ctx.textures.register(&bodies::texture_key(planet.name), planet.texture);
        }
        ctx.textures.register("moon", bodies::MOON_TEXTURE);
        ctx.textures.register("stars", bodies::STARFIELD_TEXTURE);
    }

    /// Spawn a textured sphere and return its id.
    fn spawn_sphere(
        ctx: &mut EngineContext,
        tag: &str,
        texture: &str,
        mesh: MeshComponent,
        pos: Vec3,
    ) -> EntityId {
        let id = ctx.next_id();
        let mesh = match ctx.textures.get(texture) {
            Some(t) => mesh.with_texture(t),
            None => mesh,
        };
        ctx.scene.spawn(Entity::new(id).with_tag(tag).with_pos(pos).with_mesh(mesh));
        id
    }

    fn handle_selection(&mut self, ctx: &mut EngineContext, control: u32, choice: u32) {
        let Some(sim) = self.sim.as_mut() else {
            return;
        };
        let Some(label) = ctx.options.select(ControlId(control), choice) else {
            return;
        };
        if Some(ControlId(control)) != self.view_control {
            return;
        }
        let Some(mode) = ViewMode::from_label(label) else {
            return;
        };
        if mode != sim.rig.mode() {
            sim.rig.select(mode);
            ctx.emit_event(GameEvent::new(EVENT_VIEW_MODE, mode.index() as f32, 0.0, 0.0));
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_instances: 16,
            max_line_vertices: bodies::PLANET_COUNT * (bodies::ORBIT_SEGMENTS + 1),
            max_line_loops: bodies::PLANET_COUNT,
            max_lights: 1,
            ..Default::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        ctx.lights.set_ambient(hex_rgb(bodies::AMBIENT_COLOR));
        ctx.lights.add(PointLight::new(
            Vec3::ZERO,
            hex_rgb(bodies::SUN_LIGHT_COLOR),
            bodies::SUN_LIGHT_INTENSITY,
        ));

        Self::register_textures(ctx);

        let sun_mesh = MeshComponent::sphere(bodies::SUN_RADIUS, bodies::SUN_SEGMENTS)
            .with_kind(MaterialKind::Basic);
        let sun_id = Self::spawn_sphere(ctx, "sun", "sun", sun_mesh, Vec3::ZERO);

        let mut registry = BodyRegistry::new();
        for planet in &PLANETS {
            let id = ctx.next_id();
            let body = registry.create_orbiting_body(
                planet.name,
                planet.orbit_radius,
                planet.speed,
                bodies::PLANET_SPIN,
                id,
                &mut ctx.rng,
            );
            let pos = registry.get(body).map_or(Vec3::ZERO, |b| b.position);
            let mut mesh = MeshComponent::sphere(planet.size, bodies::PLANET_SEGMENTS);
            if let Some(t) = ctx.textures.get(&bodies::texture_key(planet.name)) {
                mesh = mesh.with_texture(t);
            }
            ctx.scene.spawn(Entity::new(id).with_tag(planet.name).with_pos(pos).with_mesh(mesh));
            ctx.lines.add_loop(&orbit_path(planet.orbit_radius, bodies::ORBIT_SEGMENTS), bodies::ORBIT_COLOR);
        }

        match registry.find(bodies::MOON_PARENT) {
            Some(parent) => {
                let mesh = MeshComponent::sphere(bodies::MOON_RADIUS, bodies::MOON_SEGMENTS);
                let moon_id = Self::spawn_sphere(ctx, "moon", "moon", mesh, Vec3::ZERO);
                registry.create_moon(parent, bodies::MOON_DISTANCE, bodies::MOON_SPEED, moon_id);
            }
            None => log::warn!("no {} to put the moon around", bodies::MOON_PARENT),
        }

        let stars = MeshComponent::sphere(bodies::STARFIELD_RADIUS, bodies::STARFIELD_SEGMENTS)
            .with_kind(MaterialKind::Basic)
            .with_side(Side::Back);
        Self::spawn_sphere(ctx, "starfield", "stars", stars, Vec3::ZERO);

        ctx.options = OptionsPanel::new(PANEL_TITLE);
        ctx.options.add_info(INFO_LABEL);
        self.view_control = Some(ctx.options.add_choice(
            VIEW_LABEL,
            &ViewMode::LABELS,
            ViewMode::default().index(),
        ));

        let (width, height) = ctx.viewport();
        let sun = Sun {
            entity: sun_id,
            spin: 0.0,
            spin_rate: bodies::SUN_SPIN,
        };
        let sim = SimulationState::new(registry, sun, CameraRig::new(width, height));
        sim.sync_scene(&mut ctx.scene);
        self.sim = Some(sim);

        log::info!(
            "solar system: {} planets, {} moons",
            PLANETS.len(),
            self.sim.as_ref().map_or(0, |s| s.bodies.moons().len())
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::OptionSelected { control, choice } => {
                    self.handle_selection(ctx, control, choice);
                }
                _ => {
                    let Some(sim) = self.sim.as_mut() else {
                        continue;
                    };
                    match *event {
                        InputEvent::PointerDown { x, y } => sim.rig.pointer_down(x, y),
                        InputEvent::PointerMove { x, y } => sim.rig.pointer_move(x, y),
                        InputEvent::PointerUp { .. } => sim.rig.pointer_up(),
                        InputEvent::Wheel { delta } => sim.rig.wheel(delta),
                        InputEvent::Resize { width, height } => sim.rig.resize(width, height),
                        InputEvent::OptionSelected { .. } => {}
                    }
                }
            }
        }

        if let Some(sim) = self.sim.as_mut() {
            sim.step(&ctx.keys);
            sim.sync_scene(&mut ctx.scene);
        }
    }

    fn render(&self, ctx: &mut RenderContext) {
        if let Some(sim) = &self.sim {
            ctx.render_buffer.set_camera(sim.rig.camera_block());
        }
    }
}
