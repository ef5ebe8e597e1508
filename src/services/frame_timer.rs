// src/services/frame_timer.rs
//
// Measures the time between frames and caps the frame rate

use log::debug;
use std::time::{Duration, Instant};

pub struct FrameTimer {
    last_frame: Instant,
    frame_budget: Duration,
    fps: f32,
}

impl FrameTimer {
    pub fn new(max_framerate: u32) -> Self {
        Self::starting_at(max_framerate, Instant::now())
    }

    pub fn starting_at(max_framerate: u32, start: Instant) -> Self {
        // whole milliseconds per frame, 5ms at 200fps
        let budget_ms = 1000 / u64::from(max_framerate.max(1));
        Self {
            last_frame: start,
            frame_budget: Duration::from_millis(budget_ms),
            fps: 0.0,
        }
    }

    /// Restarts the clock and returns the milliseconds since the previous tick.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed)
    }

    /// Takes an elapsed time measured elsewhere, e.g. nannou's `Update::since_last`.
    pub fn tick_from(&mut self, elapsed: Duration) -> f32 {
        self.last_frame = Instant::now();
        self.record(elapsed)
    }

    fn record(&mut self, elapsed: Duration) -> f32 {
        let secs = elapsed.as_secs_f32();
        if secs > 0.0 {
            self.fps = 1.0 / secs;
        }
        secs * 1000.0
    }

    /// How long to sleep so a frame that took `delta_ms` fills its budget.
    pub fn sleep_time(&self, delta_ms: f32) -> Option<Duration> {
        let budget_ms = self.frame_budget.as_secs_f32() * 1000.0;
        let remaining = budget_ms - delta_ms;
        if remaining > 0.0 {
            Some(Duration::from_secs_f32(remaining / 1000.0))
        } else {
            None
        }
    }

    pub fn limit(&self, delta_ms: f32) {
        if let Some(sleep) = self.sleep_time(delta_ms) {
            debug!("frame took {:.2}ms, sleeping {:?}", delta_ms, sleep);
            std::thread::sleep(sleep);
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_budget() {
        assert_eq!(FrameTimer::new(200).frame_budget(), Duration::from_millis(5));
        assert_eq!(FrameTimer::new(60).frame_budget(), Duration::from_millis(16));
        // zero is treated as one frame per second
        assert_eq!(FrameTimer::new(0).frame_budget(), Duration::from_secs(1));
    }

    #[test]
    fn test_tick_measures_elapsed_millis() {
        let start = Instant::now();
        let mut timer = FrameTimer::starting_at(200, start);

        let delta = timer.tick_at(start + Duration::from_millis(20));
        assert!((delta - 20.0).abs() < 1e-3);
        assert!((timer.fps() - 50.0).abs() < 1e-2);

        // measured from the previous tick, not from the start
        let delta = timer.tick_at(start + Duration::from_millis(25));
        assert!((delta - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_tick_from_external_duration() {
        let mut timer = FrameTimer::new(200);

        let delta = timer.tick_from(Duration::from_millis(8));
        assert!((delta - 8.0).abs() < 1e-3);
        assert!((timer.fps() - 125.0).abs() < 1e-2);

        // a zero-length frame keeps the last fps reading
        assert_eq!(timer.tick_from(Duration::ZERO), 0.0);
        assert!((timer.fps() - 125.0).abs() < 1e-2);
    }

    #[test]
    fn test_tick_never_goes_backwards() {
        let start = Instant::now() + Duration::from_millis(100);
        let mut timer = FrameTimer::starting_at(200, start);
        let delta = timer.tick_at(start - Duration::from_millis(50));
        assert_eq!(delta, 0.0);
        assert_eq!(timer.fps(), 0.0);
    }

    #[test]
    fn test_sleep_time() {
        let timer = FrameTimer::new(200);

        let sleep = timer.sleep_time(2.0).expect("should sleep out the budget");
        assert!((sleep.as_secs_f32() * 1000.0 - 3.0).abs() < 1e-3);

        assert_eq!(timer.sleep_time(5.0), None);
        assert_eq!(timer.sleep_time(12.0), None);
    }
}
