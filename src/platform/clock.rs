//! Fixed-rate frame clock

use std::time::{Duration, Instant};

use crate::game_loop::VerticalSync;

/// Sleeps until the next frame deadline.
///
/// If a frame overran its slot the clock restarts from "now" instead of
/// firing a burst of zero-length frames to catch up.
#[derive(Debug)]
pub struct FrameClock {
    period: Duration,
    next: Instant,
    overruns: u64,
}

impl FrameClock {
    pub fn new(rate_hz: u32) -> Self {
        let period = Duration::from_secs(1) / rate_hz.max(1);
        Self {
            period,
            next: Instant::now() + period,
            overruns: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Frames that missed their deadline
    pub fn overruns(&self) -> u64 {
        self.overruns
    }
}

impl VerticalSync for FrameClock {
    fn wait_for_vsync(&mut self) {
        let now = Instant::now();
        if now < self.next {
            std::thread::sleep(self.next - now);
            self.next += self.period;
        } else {
            self.overruns += 1;
            if self.overruns.is_power_of_two() {
                log::warn!("Frame overran its slot ({} so far)", self.overruns);
            }
            self.next = now + self.period;
        }
    }
}
