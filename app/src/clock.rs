//! Frame timing.
//!
//! Tracks the target frame rate used to pace redraws and an exponentially
//! smoothed measurement of the rate actually achieved.

use std::time::{Duration, Instant};

const DEFAULT_TARGET_FPS: f32 = 60.0;

/// Smoothing factor for the measured-rate average.
const SMOOTHING: f32 = 0.9;

/// Paces frames and measures the achieved rate.
#[derive(Debug, Clone)]
pub struct FrameClock {
    target_fps: f32,
    measured_fps: f32,
    last_frame: Option<Instant>,
}

impl Default for FrameClock {
    fn default() -> FrameClock {
        FrameClock {
            target_fps: DEFAULT_TARGET_FPS,
            measured_fps: 0.0,
            last_frame: None,
        }
    }
}

impl FrameClock {
    pub fn new() -> FrameClock {
        FrameClock::default()
    }

    /// The frame rate the loop aims for.
    pub fn target(&self) -> f32 {
        self.target_fps
    }

    /// Set the frame rate the loop aims for.
    pub fn set_target(&mut self, fps: f32) {
        self.target_fps = fps;
    }

    /// The smoothed measurement of the achieved frame rate. Zero until a
    /// second frame has completed.
    pub fn measured(&self) -> f32 {
        self.measured_fps
    }

    /// Record a completed frame and return the deadline for the next one.
    pub fn tick(&mut self) -> Instant {
        let now = Instant::now();

        if let Some(last) = self.last_frame {
            let dt = now.duration_since(last).as_secs_f32();
            if dt > 0.0 {
                let current = 1.0 / dt;
                self.measured_fps = if self.measured_fps == 0.0 {
                    current
                } else {
                    self.measured_fps * SMOOTHING + current * (1.0 - SMOOTHING)
                };
            }
        }
        self.last_frame = Some(now);

        now + self.frame_period()
    }

    fn frame_period(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.target_fps.max(0.001))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::thread;

    #[test]
    fn test_defaults() {
        let clock = FrameClock::new();
        assert_eq!(clock.target(), 60.0);
        assert_eq!(clock.measured(), 0.0);
    }

    #[rstest]
    #[case(10.0, 100)]
    #[case(25.0, 40)]
    #[case(100.0, 10)]
    fn test_target_sets_deadline_spacing(#[case] fps: f32, #[case] period_ms: u64) {
        let mut clock = FrameClock::new();
        clock.set_target(fps);
        assert_eq!(clock.target(), fps);

        let deadline = clock.tick();
        let lead = deadline.duration_since(Instant::now());
        assert!(lead <= Duration::from_millis(period_ms), "lead was {lead:?}");
        assert!(
            lead > Duration::from_millis(period_ms / 2),
            "lead was {lead:?}"
        );
    }

    #[test]
    fn test_measured_tracks_actual_rate() {
        let mut clock = FrameClock::new();
        clock.tick();
        thread::sleep(Duration::from_millis(20));
        clock.tick();

        // One 20ms frame measures in the rough vicinity of 50 fps.
        let measured = clock.measured();
        assert!(measured > 10.0 && measured < 80.0, "measured {measured}");
    }

    #[test]
    fn test_measured_is_smoothed() {
        let mut clock = FrameClock::new();
        clock.tick();
        thread::sleep(Duration::from_millis(10));
        clock.tick();
        let first = clock.measured();

        thread::sleep(Duration::from_millis(40));
        clock.tick();
        let second = clock.measured();

        // A single slow frame moves the average down but nowhere near the
        // instantaneous rate.
        assert!(second < first);
        assert!(second > first * 0.5);
    }
}
