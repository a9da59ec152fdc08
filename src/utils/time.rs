use std::time::{Duration, Instant};

/// Timer for tracking frame timing and elapsed time.
///
/// The frame loop calls [`tick`](Timer::tick) once per frame and feeds
/// [`delta_ms`](Timer::delta_ms) into the animation engine.
pub struct Timer {
    start_time: Instant,
    last_update: Instant,
    /// Time since last tick
    pub delta: Duration,
    /// Total elapsed time since creation
    pub elapsed: Duration,
    /// Total number of ticks
    pub frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Creates a new timer starting from now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_update: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Updates the timer (called once per frame).
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_update;
        self.elapsed = now - self.start_time;
        self.last_update = now;
        self.frame_count += 1;
    }

    /// Last frame delta in whole milliseconds, as the animation engine
    /// consumes it.
    #[must_use]
    pub fn delta_ms(&self) -> u32 {
        u32::try_from(self.delta.as_millis()).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_counters() {
        let mut timer = Timer::new();
        assert_eq!(timer.frame_count, 0);
        timer.tick();
        assert_eq!(timer.frame_count, 1);
        assert!(timer.elapsed >= timer.delta);
    }
}
