//! Frame-rate counter over a rolling window of frame timestamps

/// Number of frames averaged
pub const FPS_WINDOW: usize = 60;

#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    /// Running clock in seconds
    elapsed: f64,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            elapsed: 0.0,
            fps: 0,
        }
    }

    /// Record a frame that took `dt` seconds
    pub fn record(&mut self, dt: f32) {
        self.elapsed += dt as f64;
        let time = self.elapsed;

        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest sample is the one we overwrite next
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time - oldest_time;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 / elapsed).round() as u32;
            }
        }
    }

    /// Frames per second over the last window (0 until the window fills)
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
