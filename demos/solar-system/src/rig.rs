/// Two-camera rig: an orbital camera driven by pointer drag/wheel and a
/// keyboard-flown ship camera. Exactly one of them is active.

use glam::Vec3;
use orrery_engine::{CameraBlock, FlyControls, KeyState, OrbitControls, PerspectiveCamera};

pub const ORBITAL_FOV: f32 = 40.0;
pub const ORBITAL_START: Vec3 = Vec3::new(0.0, 50.0, 100.0);
pub const SHIP_FOV: f32 = 70.0;
pub const SHIP_START: Vec3 = Vec3::new(0.0, 5.0, 30.0);
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 1000.0;
/// Share of pending trackball motion applied per frame.
pub const ORBIT_DAMPING: f32 = 0.05;
/// Keeps the orbital camera inside the starfield sphere.
pub const ORBIT_MAX_DISTANCE: f32 = 450.0;
pub const SHIP_SPEED: f32 = 0.5;
pub const SHIP_TURN_SPEED: f32 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Orbital,
    Ship,
}

impl ViewMode {
    /// Options-panel labels, indexed by [`index`](Self::index).
    pub const LABELS: [&'static str; 2] = ["Orbital view", "Ship view"];

    pub fn label(self) -> &'static str {
        Self::LABELS[self.index() as usize]
    }

    pub fn index(self) -> u32 {
        match self {
            ViewMode::Orbital => 0,
            ViewMode::Ship => 1,
        }
    }

    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(ViewMode::Orbital),
            1 => Some(ViewMode::Ship),
            _ => None,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let found = Self::LABELS
            .iter()
            .position(|l| *l == label)
            .and_then(|i| Self::from_index(i as u32));
        if found.is_none() {
            log::warn!("unknown view mode {:?}", label);
        }
        found
    }
}

pub struct CameraRig {
    mode: ViewMode,
    orbital: PerspectiveCamera,
    controls: OrbitControls,
    ship: PerspectiveCamera,
    fly: FlyControls,
}

impl CameraRig {
    pub fn new(width: f32, height: f32) -> Self {
        let mut orbital = PerspectiveCamera::new(ORBITAL_FOV, 1.0, NEAR, FAR).with_position(ORBITAL_START);
        orbital.look_at(Vec3::ZERO);
        let ship = PerspectiveCamera::new(SHIP_FOV, 1.0, NEAR, FAR).with_position(SHIP_START);

        let mut rig = Self {
            mode: ViewMode::Orbital,
            orbital,
            controls: OrbitControls::new(Vec3::ZERO)
                .with_damping(ORBIT_DAMPING)
                .with_distance_limits(0.0, ORBIT_MAX_DISTANCE),
            ship,
            fly: FlyControls::new(SHIP_SPEED, SHIP_TURN_SPEED),
        };
        rig.resize(width, height);
        rig
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switch the active camera. Selecting the current mode changes nothing.
    /// Leaving orbital mode drops any drag or easing in progress.
    pub fn select(&mut self, mode: ViewMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.controls.set_enabled(mode == ViewMode::Orbital);
        log::debug!("view mode: {}", mode.label());
    }

    /// Every camera follows the viewport, active or not.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.orbital.set_aspect(width, height);
        self.ship.set_aspect(width, height);
        self.controls.set_viewport_height(height);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.controls.pointer_down(x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.controls.pointer_move(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.controls.pointer_up();
    }

    pub fn wheel(&mut self, delta: f32) {
        self.controls.wheel(delta);
    }

    /// Advance the active camera's controller by one frame.
    pub fn update(&mut self, keys: &KeyState) {
        match self.mode {
            ViewMode::Orbital => {
                self.controls.update(&mut self.orbital);
            }
            ViewMode::Ship => self.fly.update(keys, &mut self.ship),
        }
    }

    pub fn active_camera(&self) -> &PerspectiveCamera {
        match self.mode {
            ViewMode::Orbital => &self.orbital,
            ViewMode::Ship => &self.ship,
        }
    }

    pub fn orbital(&self) -> &PerspectiveCamera {
        &self.orbital
    }

    pub fn ship(&self) -> &PerspectiveCamera {
        &self.ship
    }

    pub fn camera_block(&self) -> CameraBlock {
        CameraBlock::new(self.active_camera(), self.mode.index() as f32)
    }
}
