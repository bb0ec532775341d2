use std::time::Duration;

/// # Pacer
/// A fixed-timestep accumulator that turns wall-clock time into logical ticks.
///
/// Elapsed time is added to an accumulator; every whole tick's worth of time is
/// handed back as one due tick and the remainder carries over. If the caller
/// falls behind, several ticks come due at once so the machine catches up.
#[derive(Copy, Clone, Debug)]
pub struct Pacer {
    tick: Duration,
    accumulator: Duration,
}

impl Pacer {
    /// # Arguments
    /// * `tick_hz` logical ticks per second, e.g. `TIMER_HZ`
    pub fn new(tick_hz: u32) -> Self {
        Pacer {
            tick: Duration::from_secs(1) / tick_hz.max(1),
            accumulator: Duration::from_secs(0),
        }
    }

    /// Length of one logical tick
    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Adds `elapsed` to the accumulator and returns how many ticks are now due.
    pub fn accumulate(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut due = 0;
        while self.accumulator >= self.tick {
            self.accumulator -= self.tick;
            due += 1;
        }
        due
    }

    /// Time left until the next tick comes due
    pub fn until_next(&self) -> Duration {
        self.tick - self.accumulator
    }
}
