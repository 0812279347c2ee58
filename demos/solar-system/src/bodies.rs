/// Body table and scene constants.
///
/// Sizes and distances are scene units, not to scale. Speeds are radians per
/// frame: with one update per frame the planets move exactly this much every
/// display refresh.

/// One planet: display name, texture file, sphere radius, orbit radius, orbit speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetSpec {
    pub name: &'static str,
    pub texture: &'static str,
    pub size: f32,
    pub orbit_radius: f32,
    pub speed: f32,
}

pub const PLANET_COUNT: usize = 8;

/// Innermost first.
pub const PLANETS: [PlanetSpec; PLANET_COUNT] = [
    PlanetSpec { name: "Mercury", texture: "mercury.jpg",       size: 1.0, orbit_radius: 15.0, speed: 0.02 },
    PlanetSpec { name: "Venus",   texture: "venus_surface.jpg", size: 1.5, orbit_radius: 20.0, speed: 0.015 },
    PlanetSpec { name: "Earth",   texture: "earth_daymap.jpg",  size: 2.0, orbit_radius: 25.0, speed: 0.01 },
    PlanetSpec { name: "Mars",    texture: "mars.jpg",          size: 1.2, orbit_radius: 30.0, speed: 0.008 },
    PlanetSpec { name: "Jupiter", texture: "jupiter.jpg",       size: 4.0, orbit_radius: 40.0, speed: 0.005 },
    PlanetSpec { name: "Saturn",  texture: "saturn.jpg",        size: 3.5, orbit_radius: 50.0, speed: 0.004 },
    PlanetSpec { name: "Uranus",  texture: "uranus.jpg",        size: 2.5, orbit_radius: 60.0, speed: 0.003 },
    PlanetSpec { name: "Neptune", texture: "neptune.jpg",       size: 2.5, orbit_radius: 70.0, speed: 0.003 },
];

/// Self-rotation of every planet, radians per frame.
pub const PLANET_SPIN: f32 = 0.01;
pub const PLANET_SEGMENTS: u32 = 32;

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 10.0;
pub const SUN_SEGMENTS: u32 = 32;
pub const SUN_SPIN: f32 = 0.005;
pub const SUN_TEXTURE: &str = "sun.jpg";

// ── Moon ─────────────────────────────────────────────────────────────

pub const MOON_PARENT: &str = "Earth";
pub const MOON_RADIUS: f32 = 0.5;
pub const MOON_SEGMENTS: u32 = 32;
pub const MOON_DISTANCE: f32 = 4.0;
pub const MOON_SPEED: f32 = 0.03;
pub const MOON_TEXTURE: &str = "moon.jpg";

// ── Backdrop ─────────────────────────────────────────────────────────

/// Inside-out sphere enclosing everything.
pub const STARFIELD_RADIUS: f32 = 500.0;
pub const STARFIELD_SEGMENTS: u32 = 64;
pub const STARFIELD_TEXTURE: &str = "stars.jpg";

// ── Lights ───────────────────────────────────────────────────────────

pub const AMBIENT_COLOR: u32 = 0x444444;
pub const SUN_LIGHT_COLOR: u32 = 0xFFFFFF;
pub const SUN_LIGHT_INTENSITY: f32 = 2.0;

// ── Orbit guides ─────────────────────────────────────────────────────

pub const ORBIT_SEGMENTS: usize = 64;
pub const ORBIT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Texture registry key for a planet ("Earth" → "earth").
pub fn texture_key(name: &str) -> String {
    name.to_lowercase()
}
