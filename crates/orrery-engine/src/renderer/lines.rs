//! Static guide lines (closed loops) uploaded to the host.
//!
//! Loops are built once at setup and never recomputed. `generation` bumps on
//! every change so the host knows when to rebuild its line geometry.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// One line vertex. 4 floats: x, y, z, owning loop index.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub line: f32,
}

impl LineVertex {
    pub const FLOATS: usize = 4;
}

/// Descriptor of one closed loop within the vertex array.
/// 8 floats: start, count, r, g, b, a, pad, pad.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LineLoop {
    pub start: f32,
    pub count: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
    pub _pad0: f32,
    pub _pad1: f32,
}

impl LineLoop {
    pub const FLOATS: usize = 8;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLoopId(pub u32);

pub struct LineBuffer {
    vertices: Vec<LineVertex>,
    loops: Vec<LineLoop>,
    max_vertices: usize,
    max_loops: usize,
    generation: u32,
}

impl LineBuffer {
    pub fn new(max_vertices: usize, max_loops: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(max_vertices),
            loops: Vec::with_capacity(max_loops),
            max_vertices,
            max_loops,
            generation: 0,
        }
    }

    /// Add a closed loop through `points` with RGBA `color`.
    /// Returns `None` (and adds nothing) if either capacity would overflow.
    pub fn add_loop(&mut self, points: &[Vec3], color: [f32; 4]) -> Option<LineLoopId> {
        if self.loops.len() >= self.max_loops
            || self.vertices.len() + points.len() > self.max_vertices
        {
            log::warn!(
                "line buffer full: {} loops, {} vertices; dropping loop of {} points",
                self.loops.len(),
                self.vertices.len(),
                points.len()
            );
            return None;
        }
        let id = self.loops.len() as u32;
        let start = self.vertices.len();
        self.vertices.extend(points.iter().map(|p| LineVertex {
            x: p.x,
            y: p.y,
            z: p.z,
            line: id as f32,
        }));
        self.loops.push(LineLoop {
            start: start as f32,
            count: points.len() as f32,
            r: color[0],
            g: color[1],
            b: color[2],
            a: color[3],
            _pad0: 0.0,
            _pad1: 0.0,
        });
        self.generation = self.generation.wrapping_add(1);
        Some(LineLoopId(id))
    }

    /// Vertices of one loop.
    pub fn loop_vertices(&self, id: LineLoopId) -> Option<&[LineVertex]> {
        let desc = self.loops.get(id.0 as usize)?;
        let start = desc.start as usize;
        self.vertices.get(start..start + desc.count as usize)
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn loop_count(&self) -> u32 {
        self.loops.len() as u32
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn vertices_ptr(&self) -> *const f32 {
        self.vertices.as_ptr() as *const f32
    }

    pub fn loops_ptr(&self) -> *const f32 {
        self.loops.as_ptr() as *const f32
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new(4096, 32)
    }
}
