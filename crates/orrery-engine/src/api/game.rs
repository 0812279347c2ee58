use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::core::time::StepMode;
use crate::api::types::{EntityId, GameEvent};
use crate::assets::registry::TextureRegistry;
use crate::input::keys::KeyState;
use crate::input::queue::InputQueue;
use crate::renderer::instance::RenderBuffer;
use crate::renderer::lines::LineBuffer;
use crate::systems::lighting::LightState;
use crate::ui::options::OptionsPanel;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// How host frames map to updates (default: one update per frame).
    pub step: StepMode,
    /// Initial viewport size in pixels, until the host reports a resize.
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Maximum number of mesh instances (default: 64).
    pub max_instances: usize,
    /// Maximum number of line vertices across all loops (default: 4096).
    pub max_line_vertices: usize,
    /// Maximum number of line loops (default: 32).
    pub max_line_loops: usize,
    /// Maximum number of point lights (default: 8).
    pub max_lights: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// RNG seed. The web runner replaces this with a clock seed.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            step: StepMode::PerFrame,
            viewport_width: 800.0,
            viewport_height: 600.0,
            max_instances: 64,
            max_line_vertices: 4096,
            max_line_loops: 32,
            max_lights: 8,
            max_events: 32,
            seed: 42,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state: spawn meshes, register textures, add lights,
    /// build the options panel.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One simulation update. Queued input since the last update is in `input`;
    /// held keys are in `ctx.keys`.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Read-only render pass; sets the camera the host draws through.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub lines: LineBuffer,
    pub lights: LightState,
    pub textures: TextureRegistry,
    pub options: OptionsPanel,
    pub keys: KeyState,
    pub events: Vec<GameEvent>,
    pub rng: Rng,
    viewport: (f32, f32),
    max_events: usize,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    /// Create an EngineContext sized from the game's capacities.
    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            scene: Scene::with_capacity(config.max_instances),
            lines: LineBuffer::new(config.max_line_vertices, config.max_line_loops),
            lights: LightState::with_capacity(config.max_lights),
            textures: TextureRegistry::new(),
            options: OptionsPanel::default(),
            keys: KeyState::new(),
            events: Vec::with_capacity(config.max_events),
            rng: Rng::new(config.seed),
            viewport: (config.viewport_width, config.viewport_height),
            max_events: config.max_events,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the host.
    /// Events past the per-frame capacity are dropped.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() < self.max_events {
            self.events.push(event);
        } else {
            log::warn!("event capacity {} reached, dropping event", self.max_events);
        }
    }

    /// Clear per-frame transient data (events).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Viewport size in pixels.
    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    /// Record a new viewport size. Degenerate sizes are ignored.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport = (width, height);
        }
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for the game's read-only render pass.
pub struct RenderContext<'a> {
    pub render_buffer: &'a mut RenderBuffer,
}
