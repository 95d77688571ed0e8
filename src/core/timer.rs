/// One-shot countdown driven by accumulated delta time. Feeding deltas
/// instead of reading a clock keeps it exact under virtual time in tests.
/// Elapsed time accumulates in f64: thousands of small f32 frame deltas
/// must not round the total away from the boundary.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    duration: f64,
    elapsed: f64,
}

impl Countdown {
    /// Create a running countdown that completes after `duration` seconds.
    pub fn new(duration: f32) -> Self {
        Self {
            duration: f64::from(duration),
            elapsed: 0.0,
        }
    }

    /// Advance by `delta` seconds. Returns true only on the tick that
    /// crosses the duration; later ticks return false.
    pub fn tick(&mut self, delta: f32) -> bool {
        if self.finished() {
            return false;
        }
        self.elapsed += f64::from(delta);
        self.finished()
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Completion fraction in [0, 1].
    pub fn progress(&self) -> f32 {
        (self.elapsed / self.duration).min(1.0) as f32
    }
}
