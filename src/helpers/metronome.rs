use super::*;

use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Paces the simulation loop so ticks happen at a steady real time rate, regardless of how long
/// processing each tick takes.
pub struct Metronome {
    /// The approximate time the last sleep() call exited. Assuming the rest of the code runs fast
    /// enough to not trigger the min_sleep_time threshold, this is set incremented each tick by
    /// target_tick rather than being set to the actual measured time. This prevents drift.
    prev_tick_start: Instant,
    /// The preferred amount of total time each tick should take. sleep() checks how much time was
    /// used by processing and sleeps for the remainder of the tick.
    target_tick: f64,
    /// Sleep will always sleep for at least this much. If the simulation can't keep up it slows
    /// down rather than using the entire time budget, so the rest of the process gets a chance
    /// to run between ticks.
    min_sleep: f64,
    /// Number of completed sleep() calls
    ticks: u64,
}

impl Default for Metronome {
    fn default() -> Self {
        Self {
            prev_tick_start: Instant::now(),
            target_tick: 0.0,
            min_sleep: 0.0,
            ticks: 0,
        }
    }
}

impl Metronome {
    /// - target_tick: the time (in seconds) for each entire tick.
    /// - min_sleep: the minimum time (in seconds) each call to sleep() will sleep for.
    pub fn new(target_tick: f64, min_sleep: f64) -> Self {
        assert!(target_tick >= 0.0);
        assert!(min_sleep >= 0.0);
        Self {
            target_tick,
            min_sleep,
            ..Self::default()
        }
    }

    /// Simulated time that has passed, assuming every tick took exactly target_tick
    pub fn elapsed_secs(&self) -> f64 {
        self.ticks as f64 * self.target_tick
    }

    /// Sleeps for the remainder of the tick. That is, sleeps for however long is required so that
    /// the time at return is target_tick greater than the time at the previous return. If the
    /// required sleep time is less than min_sleep then there is no drift. If the rest of the game
    /// has taken too long and the required sleep time would be less than min_sleep (or negative),
    /// it sleeps for min_sleep and drifts (doesn't try to make up the delay later).
    pub fn sleep(&mut self) {
        self.ticks += 1;
        let elapsed = self.prev_tick_start.elapsed().as_secs_f64();
        let sleep_time = self.target_tick - elapsed;
        if sleep_time >= self.min_sleep {
            sleep(Duration::from_secs_f64(sleep_time));
            // doing it this way instead of taking current time prevents drift
            self.prev_tick_start += Duration::from_secs_f64(self.target_tick);
        } else {
            trace!(
                "tick took {:?} which is {:?} too long",
                Duration::from_secs_f64(elapsed),
                Duration::from_secs_f64(self.min_sleep - sleep_time)
            );
            if self.min_sleep > 0.0 {
                sleep(Duration::from_secs_f64(self.min_sleep))
            }
            self.prev_tick_start = Instant::now();
        }
    }
}
