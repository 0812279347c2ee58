use orrery_engine::{
    Game, GameConfig, EngineContext, RenderContext,
    InputEvent, InputQueue, RenderBuffer,
    FrameClock, ProtocolLayout, TextureManifest, PROTOCOL_VERSION,
};
use orrery_engine::bridge::protocol::*;
use orrery_engine::systems::render::build_render_buffer;

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game (e.g., `solar-system`) creates a `thread_local!` GameRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    clock: FrameClock,
    config: GameConfig,
    layout: ProtocolLayout,
    header: [f32; HEADER_FLOATS],
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self::with_config(game, config)
    }

    /// Like [`new`](Self::new) but overriding the game's RNG seed.
    pub fn with_seed(game: G, seed: u64) -> Self {
        let config = GameConfig { seed, ..game.config() };
        Self::with_config(game, config)
    }

    fn with_config(game: G, config: GameConfig) -> Self {
        Self {
            game,
            ctx: EngineContext::with_config(&config),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            clock: FrameClock::new(config.step),
            layout: ProtocolLayout::from_config(&config),
            header: [0.0; HEADER_FLOATS],
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        self.header[HEADER_MAX_INSTANCES] = self.layout.max_instances as f32;
        self.header[HEADER_MAX_LINE_VERTICES] = self.layout.max_line_vertices as f32;
        self.header[HEADER_MAX_LINE_LOOPS] = self.layout.max_line_loops as f32;
        self.header[HEADER_MAX_LIGHTS] = self.layout.max_lights as f32;
        self.header[HEADER_MAX_EVENTS] = self.layout.max_events as f32;
        self.initialized = true;
        log::info!(
            "runner ready: {} entities, {} line loops, {} textures",
            self.ctx.scene.len(),
            self.ctx.lines.loop_count(),
            self.ctx.textures.len()
        );
    }

    // ---- Input ----

    pub fn key_down(&mut self, key: &str) {
        self.ctx.keys.press(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.ctx.keys.release(key);
    }

    /// Drop every held key (the page lost focus and key-ups will not arrive).
    pub fn release_keys(&mut self) {
        self.ctx.keys.release_all();
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Record the new viewport now and queue the resize for the game.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.ctx.set_viewport(width, height);
        self.input.push(InputEvent::Resize { width, height });
    }

    pub fn select_option(&mut self, control: u32, choice: u32) {
        self.input.push(InputEvent::OptionSelected { control, choice });
    }

    /// Apply texture path overrides. Malformed manifests are logged and ignored.
    pub fn load_manifest(&mut self, json: &str) {
        match TextureManifest::from_json(json) {
            Ok(manifest) => self.ctx.textures.apply_manifest(&manifest),
            Err(e) => log::warn!("ignoring texture manifest: {}", e),
        }
    }

    /// Run one host frame: update the game as many times as the step mode
    /// asks, then build the frame for the host.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        // Queued input is seen by exactly one update. With zero updates this
        // frame it stays queued for the next one.
        let steps = self.clock.advance(dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input);
            self.input.clear();
        }

        // Build render buffer from entities
        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);

        // Let the game pick the camera
        {
            let mut render_ctx = RenderContext {
                render_buffer: &mut self.render_buffer,
            };
            self.game.render(&mut render_ctx);
        }

        self.write_header();
    }

    fn write_header(&mut self) {
        let (width, height) = self.ctx.viewport();
        let h = &mut self.header;
        h[HEADER_FRAME_COUNTER] = self.clock.frames() as f32;
        h[HEADER_INSTANCE_COUNT] = self.render_buffer.instance_count() as f32;
        h[HEADER_LINE_VERTEX_COUNT] = self.ctx.lines.vertex_count() as f32;
        h[HEADER_LINE_LOOP_COUNT] = self.ctx.lines.loop_count() as f32;
        h[HEADER_LIGHT_COUNT] = self.ctx.lights.count() as f32;
        h[HEADER_EVENT_COUNT] = self.ctx.events.len() as f32;
        h[HEADER_LINE_GENERATION] = self.ctx.lines.generation() as f32;
        h[HEADER_VIEWPORT_WIDTH] = width;
        h[HEADER_VIEWPORT_HEIGHT] = height;
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    // ---- Pointer accessors for host reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        self.render_buffer.camera_ptr()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn line_vertices_ptr(&self) -> *const f32 {
        self.ctx.lines.vertices_ptr()
    }

    pub fn line_vertex_count(&self) -> u32 {
        self.ctx.lines.vertex_count()
    }

    pub fn line_loops_ptr(&self) -> *const f32 {
        self.ctx.lines.loops_ptr()
    }

    pub fn line_loop_count(&self) -> u32 {
        self.ctx.lines.loop_count()
    }

    pub fn line_generation(&self) -> u32 {
        self.ctx.lines.generation()
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count() as u32
    }

    pub fn ambient(&self) -> [f32; 3] {
        self.ctx.lights.ambient()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn frame_counter(&self) -> u32 {
        self.clock.frames() as u32
    }

    /// `[{id, name, path}, ...]` for the host texture loader.
    pub fn textures_json(&self) -> String {
        self.ctx.textures.to_json().unwrap_or_else(|e| {
            log::warn!("texture list not serializable: {}", e);
            "[]".to_string()
        })
    }

    pub fn options_json(&self) -> String {
        self.ctx.options.to_json().unwrap_or_else(|e| {
            log::warn!("options panel not serializable: {}", e);
            "{}".to_string()
        })
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_line_vertices(&self) -> u32 {
        self.layout.max_line_vertices as u32
    }

    pub fn max_line_loops(&self) -> u32 {
        self.layout.max_line_loops as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use orrery_engine::{
        CameraBlock, Entity, GameEvent, MeshComponent, PerspectiveCamera, StepMode,
    };

    /// Records what each update saw.
    #[derive(Default)]
    struct Probe {
        step: Option<StepMode>,
        updates: u32,
        seen: Vec<InputEvent>,
        held_w: u32,
    }

    impl Game for Probe {
        fn config(&self) -> GameConfig {
            GameConfig {
                step: self.step.unwrap_or_default(),
                ..Default::default()
            }
        }

        fn init(&mut self, ctx: &mut EngineContext) {
            let id = ctx.next_id();
            ctx.scene.spawn(Entity::new(id).with_mesh(MeshComponent::sphere(10.0, 32)));
            ctx.lines.add_loop(&[Vec3::X, Vec3::Z, Vec3::X], [1.0; 4]);
            ctx.textures.register("sun", "sun.jpg");
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            self.updates += 1;
            self.seen.extend(input.iter().copied());
            if ctx.keys.is_pressed("w") {
                self.held_w += 1;
            }
            ctx.emit_event(GameEvent::new(1.0, 0.0, 0.0, 0.0));
        }

        fn render(&self, ctx: &mut RenderContext) {
            let cam = PerspectiveCamera::new(40.0, 2.0, 0.1, 1000.0);
            ctx.render_buffer.set_camera(CameraBlock::new(&cam, 3.0));
        }
    }

    fn runner(step: StepMode) -> GameRunner<Probe> {
        let mut r = GameRunner::with_seed(Probe { step: Some(step), ..Default::default() }, 1);
        r.init();
        r
    }

    #[test]
    fn tick_before_init_is_a_no_op() {
        let mut r = GameRunner::new(Probe::default());
        r.tick(0.016);
        assert_eq!(r.game().updates, 0);
        assert_eq!(r.frame_counter(), 0);
    }

    #[test]
    fn per_frame_runs_one_update_per_tick() {
        let mut r = runner(StepMode::PerFrame);
        r.tick(0.5);
        r.tick(0.001);
        assert_eq!(r.game().updates, 2);
        assert_eq!(r.frame_counter(), 2);
    }

    #[test]
    fn fixed_mode_runs_accumulated_steps() {
        let mut r = runner(StepMode::Fixed { dt: 0.01 });
        r.tick(0.025);
        assert_eq!(r.game().updates, 2);
        r.tick(0.004);
        assert_eq!(r.game().updates, 2);
    }

    #[test]
    fn input_survives_ticks_without_updates() {
        let mut r = runner(StepMode::Fixed { dt: 0.01 });
        r.push_input(InputEvent::Wheel { delta: -1.0 });
        r.tick(0.001);
        assert!(r.game().seen.is_empty());
        r.tick(0.02);
        assert_eq!(r.game().seen, vec![InputEvent::Wheel { delta: -1.0 }]);
    }

    #[test]
    fn input_is_seen_once_across_multiple_steps() {
        let mut r = runner(StepMode::Fixed { dt: 0.01 });
        r.select_option(1, 1);
        r.tick(0.035);
        assert_eq!(r.game().updates, 3);
        assert_eq!(r.game().seen, vec![InputEvent::OptionSelected { control: 1, choice: 1 }]);
    }

    #[test]
    fn held_keys_are_visible_until_released() {
        let mut r = runner(StepMode::PerFrame);
        r.key_down("W");
        r.tick(0.016);
        r.tick(0.016);
        r.key_up("w");
        r.tick(0.016);
        assert_eq!(r.game().held_w, 2);
        r.key_down("w");
        r.release_keys();
        r.tick(0.016);
        assert_eq!(r.game().held_w, 2);
    }

    #[test]
    fn resize_updates_viewport_and_queues_event() {
        let mut r = runner(StepMode::PerFrame);
        r.resize(1024.0, 512.0);
        assert_eq!(r.context().viewport(), (1024.0, 512.0));
        r.tick(0.016);
        assert_eq!(r.game().seen, vec![InputEvent::Resize { width: 1024.0, height: 512.0 }]);
        assert_eq!(r.header[HEADER_VIEWPORT_WIDTH], 1024.0);
        assert_eq!(r.header[HEADER_VIEWPORT_HEIGHT], 512.0);
    }

    #[test]
    fn frame_output_and_header() {
        let mut r = runner(StepMode::PerFrame);
        r.tick(0.016);
        assert_eq!(r.instance_count(), 1);
        assert_eq!(r.line_loop_count(), 1);
        assert_eq!(r.line_vertex_count(), 3);
        assert_eq!(r.game_events_len(), 1);
        assert_eq!(r.render_buffer().camera.mode, 3.0);
        assert_eq!(r.header[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(r.header[HEADER_FRAME_COUNTER], 1.0);
        assert_eq!(r.header[HEADER_INSTANCE_COUNT], 1.0);
        assert_eq!(r.header[HEADER_MAX_INSTANCES], 64.0);
        assert_eq!(r.header[HEADER_EVENT_COUNT], 1.0);
        // Events are per frame.
        r.tick(0.016);
        assert_eq!(r.game_events_len(), 1);
    }

    #[test]
    fn manifest_overrides_and_bad_json_is_ignored() {
        let mut r = runner(StepMode::PerFrame);
        r.load_manifest("{ not json");
        assert_eq!(r.textures_json(), r#"[{"id":0,"name":"sun","path":"./img/sun.jpg"}]"#);
        r.load_manifest(r#"{"base_path": "/tex/"}"#);
        assert_eq!(r.textures_json(), r#"[{"id":0,"name":"sun","path":"/tex/sun.jpg"}]"#);
    }
}
