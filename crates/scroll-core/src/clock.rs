use instant::Instant;

/// Timing for one animation frame, in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Time since the clock was created.
    pub elapsed: f32,
    /// Time since the previous tick.
    pub delta: f32,
}

/// Monotonic frame clock. Elapsed time starts at zero on creation.
#[derive(Clone, Debug)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self { start, last: start }
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Instants earlier than the previous tick yield a zero delta.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let now = now.max(self.last);
        let delta = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        FrameTime {
            elapsed: now.duration_since(self.start).as_secs_f32(),
            delta,
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
