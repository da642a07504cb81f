//! Frame pacing
//!
//! The simulation always advances by a fixed `dt`; this only decides when
//! the next tick is due and tracks the measured frame rate for the HUD.

use std::time::{Duration, Instant};

/// Number of frames averaged for the FPS readout
const FPS_WINDOW: usize = 30;

pub struct FrameClock {
    frame: Duration,
    next_frame: Instant,
    frame_times: [Instant; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl FrameClock {
    pub fn new(ticks_per_second: u32) -> Self {
        let now = Instant::now();
        Self {
            frame: Duration::from_secs_f64(1.0 / ticks_per_second.max(1) as f64),
            next_frame: now,
            frame_times: [now; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Time left until the next tick is due
    pub fn remaining(&self) -> Duration {
        self.next_frame.saturating_duration_since(Instant::now())
    }

    /// Mark a frame as done and schedule the next one
    pub fn finish_frame(&mut self) {
        let now = Instant::now();

        let oldest = self.frame_times[self.frame_index];
        self.frame_times[self.frame_index] = now;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        let elapsed = now.duration_since(oldest).as_secs_f64();
        if elapsed > 0.0 {
            self.fps = (FPS_WINDOW as f64 / elapsed).round() as u32;
        }

        self.next_frame += self.frame;
        // Fell far behind (debugger, suspended terminal): don't try to catch up
        if self.next_frame + self.frame < now {
            self.next_frame = now + self.frame;
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}
