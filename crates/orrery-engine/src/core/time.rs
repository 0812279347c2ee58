/// How host frames map to simulation updates.
///
/// `PerFrame` runs exactly one update per host frame, so every speed in the
/// game is "units per frame" and motion rate follows the display refresh rate.
/// `Fixed` decouples the two with an accumulator at a fixed simulation rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepMode {
    PerFrame,
    Fixed { dt: f32 },
}

impl Default for StepMode {
    fn default() -> Self {
        StepMode::PerFrame
    }
}

/// Fixed timestep accumulator.
/// Ensures game logic runs at a consistent rate regardless of frame time.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death (max 10 steps per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Interpolation alpha for rendering between ticks (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Turns host frame deltas into update counts according to a [`StepMode`].
pub struct FrameClock {
    mode: StepMode,
    timestep: Option<FixedTimestep>,
    frames: u64,
    updates: u64,
}

impl FrameClock {
    pub fn new(mode: StepMode) -> Self {
        let timestep = match mode {
            StepMode::PerFrame => None,
            StepMode::Fixed { dt } => Some(FixedTimestep::new(dt)),
        };
        Self {
            mode,
            timestep,
            frames: 0,
            updates: 0,
        }
    }

    /// Register one host frame of `frame_dt` seconds. Returns how many
    /// simulation updates to run for it.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.frames += 1;
        let steps = match self.timestep.as_mut() {
            None => 1,
            Some(ts) => ts.accumulate(frame_dt),
        };
        self.updates += steps as u64;
        steps
    }

    pub fn mode(&self) -> StepMode {
        self.mode
    }

    /// Host frames seen so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Simulation updates issued so far.
    pub fn updates(&self) -> u64 {
        self.updates
    }
}
