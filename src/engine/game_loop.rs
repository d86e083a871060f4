/// Frame timing for input sampling
///
/// Runs input sampling on a fixed timestep so that one sample is one frame,
/// independent of how often the window redraws.
use std::time::{Duration, Instant};

/// Target sampling rate (60 frames per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of steps per wakeup, so a stall does not replay a burst of frames
const MAX_STEPS_PER_FRAME: u32 = 5;

/// Fixed-step frame clock
pub struct FrameLoop {
    /// Time not yet consumed by whole steps
    accumulator: Duration,

    /// Time of last wakeup
    last_frame_time: Instant,

    /// Whether stepping is suspended
    paused: bool,

    /// Wakeups seen
    frame_count: u64,

    /// Fixed steps handed out
    step_count: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            frame_count: 0,
            step_count: 0,
        }
    }

    /// Begin a new wakeup, returns the number of fixed steps to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(elapsed)
    }

    /// Account for `elapsed` time, returns the number of fixed steps to run
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.frame_count += 1;

        if self.paused {
            return 0;
        }

        self.accumulator += elapsed;

        let mut steps = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            steps += 1;
        }

        // Drop what the cap left behind
        if steps == MAX_STEPS_PER_FRAME {
            self.accumulator = Duration::ZERO;
        }

        self.step_count += steps as u64;
        steps
    }

    /// Get the fixed timestep (in seconds)
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    /// Time until the next step is due
    pub fn until_next_step(&self) -> Duration {
        FIXED_TIMESTEP_DURATION.saturating_sub(self.accumulator)
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Suspend stepping, e.g. while the window is unfocused
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Input sampling paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent a step burst
            self.accumulator = Duration::ZERO;
            self.last_frame_time = Instant::now();
            log::info!("Input sampling resumed");
        }
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
