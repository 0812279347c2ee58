/// Frame buffer layout shared with the host renderer.
/// Must stay in sync with the host's `protocol.js`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Camera: 40 floats]
/// [Instances: max_instances × 12 floats]
/// [Line vertices: max_line_vertices × 4 floats]
/// [Line loops: max_line_loops × 8 floats]
/// [Lights: max_lights × 8 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// The host reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_MAX_INSTANCES: usize = 3;
pub const HEADER_INSTANCE_COUNT: usize = 4;
pub const HEADER_MAX_LINE_VERTICES: usize = 5;
pub const HEADER_LINE_VERTEX_COUNT: usize = 6;
pub const HEADER_MAX_LINE_LOOPS: usize = 7;
pub const HEADER_LINE_LOOP_COUNT: usize = 8;
pub const HEADER_MAX_LIGHTS: usize = 9;
pub const HEADER_LIGHT_COUNT: usize = 10;
pub const HEADER_MAX_EVENTS: usize = 11;
pub const HEADER_EVENT_COUNT: usize = 12;
/// Bumped whenever line geometry changes, so the host can rebuild its lines.
pub const HEADER_LINE_GENERATION: usize = 13;
pub const HEADER_VIEWPORT_WIDTH: usize = 14;
pub const HEADER_VIEWPORT_HEIGHT: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the camera block: view, projection, position, fov, aspect, near, far, mode.
pub const CAMERA_FLOATS: usize = 40;

/// Floats per mesh instance (wire format, fixed).
pub const INSTANCE_FLOATS: usize = 12;

/// Floats per line vertex: x, y, z, loop id.
pub const LINE_VERTEX_FLOATS: usize = 4;

/// Floats per line loop: start, count, r, g, b, a, pad×2.
pub const LINE_LOOP_FLOATS: usize = 8;

/// Floats per point light: x, y, z, r, g, b, intensity, distance.
pub const LIGHT_FLOATS: usize = 8;

/// Floats per game event: kind, a, b, c (wire format, fixed).
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_line_vertices: usize,
    pub max_line_loops: usize,
    pub max_lights: usize,
    pub max_events: usize,

    /// Size of each data section in floats.
    pub instance_data_floats: usize,
    pub line_vertex_data_floats: usize,
    pub line_loop_data_floats: usize,
    pub light_data_floats: usize,
    pub event_data_floats: usize,

    /// Offset (in floats) where each section begins.
    pub camera_offset: usize,
    pub instance_data_offset: usize,
    pub line_vertex_data_offset: usize,
    pub line_loop_data_offset: usize,
    pub light_data_offset: usize,
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_instances: usize,
        max_line_vertices: usize,
        max_line_loops: usize,
        max_lights: usize,
        max_events: usize,
    ) -> Self {
        let instance_data_floats = max_instances * INSTANCE_FLOATS;
        let line_vertex_data_floats = max_line_vertices * LINE_VERTEX_FLOATS;
        let line_loop_data_floats = max_line_loops * LINE_LOOP_FLOATS;
        let light_data_floats = max_lights * LIGHT_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let camera_offset = HEADER_FLOATS;
        let instance_data_offset = camera_offset + CAMERA_FLOATS;
        let line_vertex_data_offset = instance_data_offset + instance_data_floats;
        let line_loop_data_offset = line_vertex_data_offset + line_vertex_data_floats;
        let light_data_offset = line_loop_data_offset + line_loop_data_floats;
        let event_data_offset = light_data_offset + light_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_instances,
            max_line_vertices,
            max_line_loops,
            max_lights,
            max_events,
            instance_data_floats,
            line_vertex_data_floats,
            line_loop_data_floats,
            light_data_floats,
            event_data_floats,
            camera_offset,
            instance_data_offset,
            line_vertex_data_offset,
            line_loop_data_offset,
            light_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_instances,
            config.max_line_vertices,
            config.max_line_loops,
            config.max_lights,
            config.max_events,
        )
    }
}
