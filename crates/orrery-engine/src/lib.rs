pub mod api;
pub mod core;
pub mod components;
pub mod controls;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod ui;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use components::mesh::{MeshComponent, Geometry, Material, MaterialKind, Side};
pub use controls::fly::FlyControls;
pub use controls::orbit::OrbitControls;
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use core::time::{FixedTimestep, FrameClock, StepMode};
pub use renderer::camera::{CameraBlock, PerspectiveCamera};
pub use renderer::instance::{MeshInstance, RenderBuffer};
pub use renderer::lines::{LineBuffer, LineLoop, LineLoopId, LineVertex};
pub use input::keys::KeyState;
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::TextureManifest;
pub use assets::registry::{TextureId, TextureRegistry};
pub use bridge::protocol::{ProtocolLayout, PROTOCOL_VERSION};
pub use systems::lighting::{hex_rgb, PointLight, LightState};
pub use ui::options::{Control, ControlId, OptionsPanel};
