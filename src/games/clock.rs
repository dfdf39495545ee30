//! Fixed-rate schedule driven by variable frame deltas

/// Longest frame delta fed into a schedule (seconds). Longer gaps, such as a
/// backgrounded tab, are treated as this long.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Accumulator turning frame time into a whole number of fixed steps
#[derive(Debug, Clone)]
pub struct FixedRate {
    period: f32,
    max_steps: u32,
    accumulator: f32,
    active: bool,
}

impl FixedRate {
    /// Inactive schedule firing `rate_hz` times per second once started
    pub fn new(rate_hz: f32) -> Self {
        Self {
            period: 1.0 / rate_hz,
            max_steps: (rate_hz * MAX_FRAME_DT).ceil().max(1.0) as u32,
            accumulator: 0.0,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start(&mut self) {
        self.active = true;
        self.accumulator = 0.0;
    }

    /// Deactivate; later `advance` calls fire nothing
    pub fn cancel(&mut self) {
        self.active = false;
        self.accumulator = 0.0;
    }

    /// Feed one frame's elapsed time, returning how many steps are due
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !self.active {
            return 0;
        }

        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut steps = 0;
        while self.accumulator >= self.period && steps < self.max_steps {
            self.accumulator -= self.period;
            steps += 1;
        }
        // Drop backlog the step cap could not absorb
        if steps == self.max_steps {
            self.accumulator = self.accumulator.min(self.period);
        }
        steps
    }
}
